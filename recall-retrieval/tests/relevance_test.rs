use recall_core::config::ScoreMetric;
use recall_retrieval::relevance::normalize;

const EPS: f64 = 1e-12;

/// Cosine distances across the full range and their expected relevances.
#[test]
fn cosine_distance_table() {
    let cases = [
        (0.1, 0.95),
        (0.3, 0.85),
        (0.5, 0.75),
        (0.9, 0.55),
        (1.2, 0.40),
        (1.5, 0.25),
        (1.8, 0.10),
        (2.0, 0.0),
    ];
    for (distance, expected) in cases {
        let got = normalize(distance, ScoreMetric::Auto).value();
        assert!(
            (got - expected).abs() < EPS,
            "distance {distance}: expected {expected}, got {got}"
        );
    }
}

#[test]
fn cosine_regime_clamps_out_of_range_distances() {
    // Distances past 2.0 (numeric drift, misrouted metrics) clamp to 0.
    assert_eq!(normalize(2.5, ScoreMetric::Auto).value(), 0.0);
    assert_eq!(normalize(100.0, ScoreMetric::CosineDistance).value(), 0.0);
    // An explicit cosine metric also clamps negative drift to 1.
    assert_eq!(normalize(-0.01, ScoreMetric::CosineDistance).value(), 1.0);
}

#[test]
fn inner_product_regime_is_strictly_increasing() {
    let samples = [-10.0, -5.0, -2.0, -1.0, -0.5, -0.01];
    let relevances: Vec<f64> = samples
        .iter()
        .map(|s| normalize(*s, ScoreMetric::Auto).value())
        .collect();
    assert!(
        relevances.windows(2).all(|w| w[0] < w[1]),
        "tanh squashing must be strictly increasing, got {relevances:?}"
    );
}

#[test]
fn inner_product_regime_stays_in_open_unit_interval() {
    // tanh saturates to -1.0 in f64 around -19, so stay short of that.
    for s in [-18.0, -5.0, -1.0, -1e-9] {
        let r = normalize(s, ScoreMetric::Auto).value();
        assert!(r > 0.0 && r < 1.0, "score {s} gave out-of-range {r}");
    }
}

#[test]
fn inner_product_regime_saturates_at_f64_extremes() {
    // Mathematically the squashing is open on (0, 1); at f64 precision it
    // reaches the bound exactly once tanh saturates. Boundedness holds.
    assert_eq!(normalize(-1e6, ScoreMetric::Auto).value(), 0.0);
}

#[test]
fn explicit_inner_product_metric_squashes_positive_scores() {
    // Under an explicit metric, positive inner-product scores are squashed
    // instead of being misread as cosine distances.
    let r = normalize(3.0, ScoreMetric::InnerProduct).value();
    assert!(r > 0.5 && r < 1.0, "got {r}");
    assert_eq!(normalize(0.0, ScoreMetric::InnerProduct).value(), 0.5);
}

#[test]
fn normalize_is_deterministic() {
    for metric in [
        ScoreMetric::Auto,
        ScoreMetric::CosineDistance,
        ScoreMetric::InnerProduct,
    ] {
        assert_eq!(normalize(0.37, metric), normalize(0.37, metric));
    }
}
