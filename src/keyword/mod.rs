//! Keyword extraction.
//!
//! Ranks the distinct terms of a text by salience: normalized term frequency
//! weighted by a corpus-free inverse-frequency heuristic. Stop words are
//! expected to be filtered upstream (the façade's keyword pipeline does
//! this); the scorer itself drops single-character terms.

use serde::{Deserialize, Serialize};

pub mod scorer;

pub use scorer::KeywordScorer;

/// A ranked keyword: the term and its non-negative salience score.
///
/// Scores are relative weights, not probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// The (normalized) term
    pub term: String,
    /// Salience score, non-negative
    pub score: f64,
}
