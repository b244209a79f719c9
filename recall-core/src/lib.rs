//! # recall-core
//!
//! Foundation crate for the Recall retrieval system.
//! Defines the story document model, relevance score type, index traits,
//! errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod story;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{RetrieverConfig, ScoreMetric, SessionConfig};
pub use errors::{RecallError, RecallResult};
pub use story::{Relevance, StoryDocument};
pub use traits::IVectorIndex;
