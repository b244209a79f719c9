use recall_core::constants::{PLACEHOLDER_CONTENT, PLACEHOLDER_FLAG_KEY};
use recall_core::story::{Relevance, StoryDocument};
use serde_json::Value;

#[test]
fn story_document_records_story_id() {
    let doc = StoryDocument::new("my cat learned to open doors", "story-42");
    assert_eq!(doc.story_id(), Some("story-42"));
    assert!(!doc.is_placeholder());
}

#[test]
fn placeholder_carries_both_markers() {
    let doc = StoryDocument::placeholder();
    assert!(doc.is_placeholder());
    assert!(doc.content.contains(PLACEHOLDER_CONTENT));
    assert_eq!(
        doc.metadata.get(PLACEHOLDER_FLAG_KEY),
        Some(&Value::Bool(true))
    );
}

#[test]
fn content_sentinel_alone_marks_placeholder() {
    let doc = StoryDocument {
        content: format!("prefix {PLACEHOLDER_CONTENT} suffix"),
        metadata: Default::default(),
    };
    assert!(doc.is_placeholder());
}

#[test]
fn metadata_flag_alone_marks_placeholder() {
    let mut doc = StoryDocument::new("looks real", "story-1");
    doc.metadata
        .insert(PLACEHOLDER_FLAG_KEY.to_string(), Value::Bool(true));
    assert!(doc.is_placeholder());
}

#[test]
fn false_metadata_flag_is_not_a_placeholder() {
    let mut doc = StoryDocument::new("real story", "story-2");
    doc.metadata
        .insert(PLACEHOLDER_FLAG_KEY.to_string(), Value::Bool(false));
    assert!(!doc.is_placeholder());
}

#[test]
fn relevance_clamps_out_of_range_values() {
    assert_eq!(Relevance::new(1.7).value(), 1.0);
    assert_eq!(Relevance::new(-0.3).value(), 0.0);
    assert_eq!(Relevance::new(0.42).value(), 0.42);
}

#[test]
fn relevance_passes_threshold() {
    let r = Relevance::new(0.7);
    assert!(r.passes(Some(0.7)));
    assert!(r.passes(Some(0.5)));
    assert!(!r.passes(Some(0.71)));
    assert!(r.passes(None));
}

#[test]
fn relevance_ordering_is_by_value() {
    assert!(Relevance::new(0.9) > Relevance::new(0.1));
    assert_eq!(Relevance::new(0.5), Relevance::new(0.5));
}

proptest::proptest! {
    #[test]
    fn relevance_is_always_bounded(raw in proptest::num::f64::ANY) {
        let r = Relevance::new(raw);
        proptest::prop_assert!((0.0..=1.0).contains(&r.value()));
    }
}

#[test]
fn nan_relevance_maps_to_zero() {
    assert_eq!(Relevance::new(f64::NAN).value(), 0.0);
}

#[test]
fn story_document_round_trips_through_json() {
    let doc = StoryDocument::new("a letter from my grandmother", "story-7");
    let json = serde_json::to_string(&doc).unwrap();
    let back: StoryDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}
