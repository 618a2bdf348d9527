//! Term-frequency vectorization over a pair of texts.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// Builds aligned term-frequency vectors for a pair of texts.
///
/// The vocabulary is the union of the two texts' terms; both vectors are
/// indexed by the same vocabulary, so they are directly comparable.
pub struct TermFrequencyVectorizer {
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TermFrequencyVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermFrequencyVectorizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TermFrequencyVectorizer {
    /// Create a new vectorizer using the given analyzer for tokenization.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self { analyzer }
    }

    /// Tokenize both texts and build their frequency vectors over the union
    /// vocabulary.
    ///
    /// When either text yields no tokens, both vectors come back empty:
    /// there is no vocabulary to compare over.
    pub fn vectorize_pair(&self, a: &str, b: &str) -> Result<(Vec<f64>, Vec<f64>)> {
        let terms_a = self.terms(a)?;
        let terms_b = self.terms(b)?;

        if terms_a.is_empty() || terms_b.is_empty() {
            return Ok((Vec::new(), Vec::new()));
        }

        let mut vocabulary: AHashMap<&str, usize> = AHashMap::new();
        for term in terms_a.iter().chain(terms_b.iter()) {
            let next_index = vocabulary.len();
            vocabulary.entry(term.as_str()).or_insert(next_index);
        }

        let mut vector_a = vec![0.0; vocabulary.len()];
        for term in &terms_a {
            vector_a[vocabulary[term.as_str()]] += 1.0;
        }

        let mut vector_b = vec![0.0; vocabulary.len()];
        for term in &terms_b {
            vector_b[vocabulary[term.as_str()]] += 1.0;
        }

        Ok((vector_a, vector_b))
    }

    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(text)?.map(|token| token.text).collect())
    }
}
