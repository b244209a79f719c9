/// Retrieval subsystem errors.
///
/// Both variants are recovered locally by the retriever: a primary failure
/// degrades to the unscored baseline, a fallback failure degrades to an
/// empty result. Neither is ever surfaced to the conversation orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("index scoring unavailable: {reason}")]
    IndexUnavailable { reason: String },

    #[error("baseline fallback unavailable: {reason}")]
    FallbackUnavailable { reason: String },
}
