use crate::errors::RecallResult;
use crate::story::StoryDocument;

/// Boundary contract for the underlying vector index.
///
/// The index is an external collaborator: it owns document storage,
/// embedding, and its native distance metric. The retrieval core only
/// requires these two read capabilities, and assumes the handle is safe
/// for concurrent read access. Implementations are injected at
/// construction; the core holds them behind `Arc<dyn IVectorIndex>`.
pub trait IVectorIndex: Send + Sync {
    /// Primary scoring capability: up to `limit` `(document, raw_score)`
    /// pairs for the query, in arbitrary order. Raw scores are in the
    /// index's native metric space. Failures must be observable; the
    /// retriever uses them to trigger its fallback path.
    fn search_with_scores(
        &self,
        query: &str,
        limit: usize,
    ) -> RecallResult<Vec<(StoryDocument, f64)>>;

    /// Baseline capability: an ordered, unscored document list for the
    /// query. Used only when the scoring capability fails.
    fn search(&self, query: &str, limit: usize) -> RecallResult<Vec<StoryDocument>>;
}
