//! Cosine similarity over term-frequency vectors.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::similarity::vectorizer::TermFrequencyVectorizer;

/// Compares two texts in a term-frequency vector space.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lancia::analysis::analyzer::standard::StandardAnalyzer;
/// use lancia::similarity::engine::SimilarityEngine;
///
/// let engine = SimilarityEngine::new(Arc::new(StandardAnalyzer::new()));
///
/// let same = engine.similarity("lo stesso testo", "lo stesso testo").unwrap();
/// assert!((same - 1.0).abs() < 1e-9);
///
/// let disjoint = engine.similarity("mare", "montagna").unwrap();
/// assert_eq!(disjoint, 0.0);
/// ```
#[derive(Debug)]
pub struct SimilarityEngine {
    vectorizer: TermFrequencyVectorizer,
}

impl SimilarityEngine {
    /// Create a new engine using the given analyzer for tokenization.
    ///
    /// Both sides of every comparison go through the same analyzer, so
    /// whatever stop word policy it applies is applied consistently.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        SimilarityEngine {
            vectorizer: TermFrequencyVectorizer::new(analyzer),
        }
    }

    /// Compute the cosine similarity of two texts, in [0, 1].
    ///
    /// Symmetric in its arguments. Returns 0.0 when either text yields no
    /// tokens, avoiding a zero-magnitude vector.
    pub fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        let (vector_a, vector_b) = self.vectorizer.vectorize_pair(a, b)?;

        if vector_a.is_empty() || vector_b.is_empty() {
            return Ok(0.0);
        }

        Ok(cosine_similarity(&vector_a, &vector_b).clamp(0.0, 1.0))
    }
}

/// Cosine of the angle between two equal-length vectors.
///
/// Zero-magnitude vectors compare as 0.0.
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        dot_product / (magnitude_a * magnitude_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::standard::StandardAnalyzer;

    fn engine() -> SimilarityEngine {
        SimilarityEngine::new(Arc::new(StandardAnalyzer::new()))
    }

    #[test]
    fn test_identical_texts() {
        let engine = engine();

        let score = engine.similarity("primo testo", "primo testo").unwrap();

        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_overlap_is_strictly_between() {
        let engine = engine();

        let score = engine.similarity("primo testo", "secondo testo").unwrap();

        assert!(score > 0.0);
        assert!(score < 1.0);
    }

    #[test]
    fn test_symmetry() {
        let engine = engine();

        let ab = engine.similarity("trova i clienti", "conta i clienti").unwrap();
        let ba = engine.similarity("conta i clienti", "trova i clienti").unwrap();

        assert_eq!(ab, ba);
    }

    #[test]
    fn test_empty_inputs() {
        let engine = engine();

        assert_eq!(engine.similarity("", "testo").unwrap(), 0.0);
        assert_eq!(engine.similarity("testo", "").unwrap(), 0.0);
        assert_eq!(engine.similarity("", "").unwrap(), 0.0);
        assert_eq!(engine.similarity("...", "testo").unwrap(), 0.0);
    }

    #[test]
    fn test_disjoint_vocabularies() {
        let engine = engine();

        assert_eq!(engine.similarity("mare blu", "verde prato").unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_known_value() {
        // Two-vector overlap on one of two terms each: cos = 1/2
        let score = cosine_similarity(&[1.0, 1.0, 0.0], &[0.0, 1.0, 1.0]);

        assert!((score - 0.5).abs() < 1e-12);
    }
}
