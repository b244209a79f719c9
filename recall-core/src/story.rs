//! Story documents and the normalized relevance score type.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{PLACEHOLDER_CONTENT, PLACEHOLDER_FLAG_KEY, STORY_ID_KEY};

/// An opaque content unit owned by the vector index. The retrieval core
/// only reads `content` and metadata flags; it never mutates a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryDocument {
    /// Raw story text.
    pub content: String,
    /// Arbitrary metadata attached by the index or the ingesting caller.
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl StoryDocument {
    /// Create a story document tagged with its story identifier.
    pub fn new(content: impl Into<String>, story_id: impl Into<String>) -> Self {
        let mut metadata = HashMap::new();
        metadata.insert(STORY_ID_KEY.to_string(), Value::String(story_id.into()));
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// The bootstrap sentinel kept in an otherwise-empty index so that
    /// similarity search always has something to return. Carries both the
    /// content sentinel and the metadata flag.
    pub fn placeholder() -> Self {
        let mut metadata = HashMap::new();
        metadata.insert(PLACEHOLDER_FLAG_KEY.to_string(), Value::Bool(true));
        Self {
            content: PLACEHOLDER_CONTENT.to_string(),
            metadata,
        }
    }

    /// Whether this document is a bootstrap/sentinel entry. Either marker
    /// alone is sufficient: the reserved content sentinel, or a `true`
    /// metadata flag.
    pub fn is_placeholder(&self) -> bool {
        if self.content.contains(PLACEHOLDER_CONTENT) {
            return true;
        }
        matches!(
            self.metadata.get(PLACEHOLDER_FLAG_KEY),
            Some(Value::Bool(true))
        )
    }

    /// The story identifier, if one was recorded at ingest time.
    pub fn story_id(&self) -> Option<&str> {
        self.metadata.get(STORY_ID_KEY).and_then(Value::as_str)
    }
}

/// Relevance score clamped to [0.0, 1.0], higher = more topically related.
/// Out-of-range inputs are absorbed by clamping rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Relevance(f64);

impl Relevance {
    /// Create a new Relevance, clamping to [0.0, 1.0]. NaN maps to 0.0 so
    /// a malformed score can never pass a threshold.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this relevance passes the given threshold. A `None`
    /// threshold disables filtering entirely.
    pub fn passes(self, threshold: Option<f64>) -> bool {
        match threshold {
            Some(t) => self.0 >= t,
            None => true,
        }
    }
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Relevance {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Relevance> for f64 {
    fn from(r: Relevance) -> Self {
        r.0
    }
}
