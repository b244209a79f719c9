//! Retrieval and session configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Which native metric the underlying index reports raw scores in.
///
/// `Auto` infers the regime from the score's sign (negative values are
/// treated as inner-product scores, non-negative as cosine distances).
/// That inference is a heuristic, not a guarantee; indexes whose metric
/// is known should set it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMetric {
    /// Sign-inferred regime, kept for compatibility with indexes that do
    /// not declare their metric.
    #[default]
    Auto,
    /// Cosine distance in [0, 2]: 0 = identical, 2 = maximally dissimilar.
    CosineDistance,
    /// Unbounded inner-product score, higher = more similar.
    InnerProduct,
}

/// Immutable retriever configuration, created once at startup and shared
/// by all queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrieverConfig {
    /// Result cap per query. Must be > 0.
    pub top_k: usize,
    /// Minimum relevance in [0, 1] a candidate must meet. `None` disables
    /// threshold filtering.
    pub score_threshold: Option<f64>,
    /// Prefetch multiplier: the engine requests `top_k * prefetch_factor`
    /// raw candidates (at least `top_k`) to absorb threshold losses.
    pub prefetch_factor: usize,
    /// Native metric of the index's raw scores.
    pub metric: ScoreMetric,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            top_k: constants::DEFAULT_TOP_K,
            score_threshold: Some(constants::DEFAULT_SCORE_THRESHOLD),
            prefetch_factor: constants::DEFAULT_PREFETCH_FACTOR,
            metric: ScoreMetric::default(),
        }
    }
}

impl RetrieverConfig {
    /// Number of raw candidates to request before filtering.
    pub fn prefetch_limit(&self) -> usize {
        self.top_k.max(self.top_k * self.prefetch_factor)
    }

    /// Validate construction parameters. Invalid values are fatal here,
    /// at construction time, never silently defaulted at query time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(ConfigError::InvalidTopK { got: self.top_k });
        }
        if self.prefetch_factor == 0 {
            return Err(ConfigError::InvalidPrefetchFactor {
                got: self.prefetch_factor,
            });
        }
        if let Some(t) = self.score_threshold {
            if !(0.0..=1.0).contains(&t) {
                return Err(ConfigError::ThresholdOutOfRange { got: t });
            }
        }
        Ok(())
    }
}

/// Conversation session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of recent turns retained in the rolling history window.
    pub max_turns: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: constants::DEFAULT_MAX_TURNS,
        }
    }
}
