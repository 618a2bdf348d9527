//! Text similarity via vector-space comparison.
//!
//! Two texts are compared by building term-frequency vectors over the union
//! of their vocabularies and taking the cosine of the angle between them.
//! The result is bounded to [0, 1] and symmetric; a text with no tokens
//! compares as 0.0 to everything, and a non-empty text compares as 1.0 to
//! itself.

pub mod engine;
pub mod vectorizer;

pub use engine::SimilarityEngine;
pub use vectorizer::TermFrequencyVectorizer;
