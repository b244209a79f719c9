//! Error taxonomy for the Recall system.
//!
//! Per-subsystem enums fold into the umbrella [`RecallError`]. Retrieval
//! failures are recovered inside the retriever and never reach callers;
//! configuration failures are fatal at construction time.

pub mod config_error;
pub mod retrieval_error;

pub use config_error::ConfigError;
pub use retrieval_error::RetrievalError;

/// Umbrella error for the Recall system.
#[derive(Debug, thiserror::Error)]
pub enum RecallError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience alias used across the workspace.
pub type RecallResult<T> = Result<T, RecallError>;
