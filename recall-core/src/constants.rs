/// Recall system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reserved content sentinel for the bootstrap document kept in an
/// otherwise-empty index. Documents carrying this content never surface
/// in retrieval results.
pub const PLACEHOLDER_CONTENT: &str = "__PLACEHOLDER_INITIAL_ENTRY__";

/// Metadata key flagging a bootstrap/sentinel document. A `true` value
/// here excludes the document from results regardless of score.
pub const PLACEHOLDER_FLAG_KEY: &str = "is_placeholder";

/// Metadata key under which a story's identifier is recorded.
pub const STORY_ID_KEY: &str = "story_id";

/// Default result cap per query.
pub const DEFAULT_TOP_K: usize = 4;

/// Default minimum relevance a candidate must meet to be returned.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.7;

/// Default prefetch multiplier: how many raw candidates to request per
/// result slot, to absorb losses from threshold filtering.
pub const DEFAULT_PREFETCH_FACTOR: usize = 2;

/// Default number of conversation turns retained in the rolling window.
pub const DEFAULT_MAX_TURNS: usize = 10;
