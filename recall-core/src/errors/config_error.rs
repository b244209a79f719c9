/// Construction-time configuration errors. Fatal, never silently defaulted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("top_k must be positive, got {got}")]
    InvalidTopK { got: usize },

    #[error("score_threshold must be in [0.0, 1.0], got {got}")]
    ThresholdOutOfRange { got: f64 },

    #[error("prefetch_factor must be positive, got {got}")]
    InvalidPrefetchFactor { got: usize },
}
