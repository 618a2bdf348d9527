//! Named entity recognition.
//!
//! Recognition is rule-based: a gazetteer of known place, organization, and
//! person names is consulted first (case-insensitive, multi-word,
//! longest-match-wins), and a capitalization heuristic picks up unknown
//! proper names. Spans never overlap and always fall inside the source text.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod gazetteer;
pub mod recognizer;

pub use gazetteer::Gazetteer;
pub use recognizer::EntityRecognizer;

/// Category of a recognized entity span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityType {
    /// Place name
    Loc,
    /// Organization name
    Org,
    /// Person name
    Per,
    /// Capitalized proper name of no known category
    Misc,
}

impl EntityType {
    /// Returns the conventional short label for the type.
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Loc => "LOC",
            EntityType::Org => "ORG",
            EntityType::Per => "PER",
            EntityType::Misc => "MISC",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A contiguous span of source text classified as a named entity.
///
/// `start` and `end` are byte offsets into the source text; `text` is the
/// source slice between them, original casing included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The entity text as it appears in the source
    pub text: String,
    /// The entity category
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Byte offset where the span starts
    pub start: usize,
    /// Byte offset where the span ends
    pub end: usize,
}
