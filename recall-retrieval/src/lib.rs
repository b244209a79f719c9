//! # recall-retrieval
//!
//! The retrieval scoring and selection engine: converts a raw similarity
//! search result set into a bounded, thresholded, ranked list of story
//! documents usable as conversation context, degrading gracefully when
//! the underlying index is unavailable or malformed.

pub mod relevance;
pub mod retriever;

pub use relevance::normalize;
pub use retriever::ThresholdRetriever;
