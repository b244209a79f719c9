//! Relevance normalization: raw index scores → bounded [0, 1] relevance.
//!
//! The engine supports indexes reporting cosine distance and indexes
//! reporting inner-product scores without the caller knowing which is
//! active. Under [`ScoreMetric::Auto`] the regime is inferred from the
//! score's sign; that inference is a heuristic kept for compatibility,
//! not a guarantee (see `ScoreMetric` docs).

use recall_core::config::ScoreMetric;
use recall_core::story::Relevance;

/// Map a raw similarity/distance scalar into relevance, higher = more
/// relevant. Pure and deterministic; no side effects.
///
/// Under `Auto`, the cosine branch owns the exact value 0 (`raw >= 0`):
/// `normalize(0.0)` is 1.0, while negative scores approach 0.5 from below
/// through the inner-product squashing. The boundary is therefore a
/// deliberate discontinuity.
pub fn normalize(raw_score: f64, metric: ScoreMetric) -> Relevance {
    match metric {
        ScoreMetric::Auto => {
            if raw_score < 0.0 {
                inner_product_relevance(raw_score)
            } else {
                cosine_distance_relevance(raw_score)
            }
        }
        ScoreMetric::CosineDistance => cosine_distance_relevance(raw_score),
        ScoreMetric::InnerProduct => inner_product_relevance(raw_score),
    }
}

/// Cosine distance in [0, 2] → relevance in [0, 1].
///
/// `sim = 1 - dist`, then `relevance = (sim + 1) / 2 = 1 - dist/2`.
/// Clamping absorbs out-of-range input from numeric drift or non-cosine
/// metrics accidentally routed here.
fn cosine_distance_relevance(distance: f64) -> Relevance {
    Relevance::new(1.0 - distance / 2.0)
}

/// Unbounded inner-product score → relevance in (0, 1).
///
/// `(tanh(score) + 1) / 2`: saturating, strictly monotone, bounded without
/// a hard clip, and order-preserving for any monotone downstream compare.
fn inner_product_relevance(score: f64) -> Relevance {
    Relevance::new((score.tanh() + 1.0) / 2.0)
}
