//! ThresholdRetriever: prefetch → normalize → filter → rank → truncate,
//! with a blocking and a non-blocking calling convention sharing one
//! selection pipeline.

use std::cmp::Ordering;
use std::sync::Arc;

use recall_core::config::RetrieverConfig;
use recall_core::errors::RecallResult;
use recall_core::story::{Relevance, StoryDocument};
use recall_core::traits::IVectorIndex;
use tracing::{debug, info, warn};

use crate::relevance::normalize;

/// Internal ranking artifact. Relevance is never exposed in results.
struct ScoredStory {
    story: StoryDocument,
    relevance: Relevance,
}

/// The threshold retriever. Stateless across calls aside from its
/// immutable configuration and the shared, externally-owned index handle,
/// so one instance can serve concurrent queries.
///
/// No index failure ever propagates to the caller: a scoring failure
/// degrades to the unscored baseline capability, and a baseline failure
/// degrades to an empty result.
pub struct ThresholdRetriever {
    index: Arc<dyn IVectorIndex>,
    config: RetrieverConfig,
}

impl ThresholdRetriever {
    /// Create a retriever over the given index. Configuration is
    /// validated here, so invalid parameters fail construction, not queries.
    pub fn new(index: Arc<dyn IVectorIndex>, config: RetrieverConfig) -> RecallResult<Self> {
        config.validate()?;
        info!(
            top_k = config.top_k,
            threshold = ?config.score_threshold,
            prefetch = config.prefetch_limit(),
            "threshold retriever initialized"
        );
        Ok(Self { index, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &RetrieverConfig {
        &self.config
    }

    /// Blocking retrieval: the calling thread is occupied for the full
    /// duration of the index lookup.
    pub fn retrieve(&self, query: &str) -> Vec<StoryDocument> {
        let prefetch = self.config.prefetch_limit();
        match self.index.search_with_scores(query, prefetch) {
            Ok(pairs) => self.select(pairs),
            Err(e) => {
                warn!(error = %e, "index scoring failed, falling back to baseline");
                let docs = self.index.search(query, prefetch);
                self.baseline_cut(docs)
            }
        }
    }

    /// Non-blocking retrieval: the index lookup runs on the blocking
    /// thread pool and the caller suspends at that delegation point only.
    /// Normalization, filtering, sorting, and truncation run back in the
    /// calling context and share the same code as [`Self::retrieve`].
    pub async fn retrieve_async(&self, query: &str) -> Vec<StoryDocument> {
        let prefetch = self.config.prefetch_limit();

        let index = Arc::clone(&self.index);
        let q = query.to_string();
        let fetched =
            tokio::task::spawn_blocking(move || index.search_with_scores(&q, prefetch)).await;

        match fetched {
            Ok(Ok(pairs)) => self.select(pairs),
            Ok(Err(e)) => {
                warn!(error = %e, "index scoring failed, falling back to baseline");
                self.baseline_async(query, prefetch).await
            }
            Err(e) => {
                // A panicked or cancelled lookup degrades like any other
                // primary failure.
                warn!(error = %e, "index scoring task failed, falling back to baseline");
                self.baseline_async(query, prefetch).await
            }
        }
    }

    /// Run the baseline capability on the blocking pool.
    async fn baseline_async(&self, query: &str, prefetch: usize) -> Vec<StoryDocument> {
        let index = Arc::clone(&self.index);
        let q = query.to_string();
        let docs = tokio::task::spawn_blocking(move || index.search(&q, prefetch)).await;

        match docs {
            Ok(result) => self.baseline_cut(result),
            Err(e) => {
                warn!(error = %e, "baseline task failed, returning empty result");
                Vec::new()
            }
        }
    }

    /// Shared selection pipeline: placeholder filtering, normalization,
    /// threshold, stable descending sort, truncation. Pure CPU,
    /// O(prefetch log prefetch); both call conventions end here.
    fn select(&self, pairs: Vec<(StoryDocument, f64)>) -> Vec<StoryDocument> {
        let mut ranked: Vec<ScoredStory> = Vec::with_capacity(pairs.len());
        for (story, raw_score) in pairs {
            if story.is_placeholder() {
                debug!("skipping placeholder document");
                continue;
            }
            let relevance = normalize(raw_score, self.config.metric);
            debug!(%relevance, raw_score, "scored candidate");
            if relevance.passes(self.config.score_threshold) {
                ranked.push(ScoredStory { story, relevance });
            }
        }

        // Stable sort: equal relevance keeps the order the index returned.
        ranked.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(self.config.top_k);

        info!(selected = ranked.len(), "selection complete");
        ranked.into_iter().map(|s| s.story).collect()
    }

    /// Degraded exit path: best-effort unscored results, or empty if the
    /// baseline also failed. Placeholders are excluded here too.
    fn baseline_cut(&self, docs: RecallResult<Vec<StoryDocument>>) -> Vec<StoryDocument> {
        match docs {
            Ok(docs) => {
                let mut cleaned: Vec<StoryDocument> =
                    docs.into_iter().filter(|d| !d.is_placeholder()).collect();
                cleaned.truncate(self.config.top_k);
                info!(selected = cleaned.len(), "baseline fallback complete");
                cleaned
            }
            Err(e) => {
                warn!(error = %e, "baseline fallback failed, returning empty result");
                Vec::new()
            }
        }
    }
}
