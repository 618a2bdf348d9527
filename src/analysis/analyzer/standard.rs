//! Standard analyzer that provides good defaults for most use cases.
//!
//! # Pipeline
//!
//! 1. UnicodeWordTokenizer (UAX #29 word boundaries)
//! 2. StripFilter (punctuation edges)
//! 3. ElisionFilter (Italian elided particles)
//! 4. LowercaseFilter
//! 5. StopFilter — only in the [`StandardAnalyzer::with_stop_words`] variant
//!
//! Stop word filtering is off by default: most consumers (POS tagging,
//! entity recognition, similarity) need the full token sequence, and only
//! keyword extraction filters stop words.
//!
//! # Examples
//!
//! ```
//! use lancia::analysis::analyzer::Analyzer;
//! use lancia::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Il tuo testo qui").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].text, "il");
//! assert_eq!(tokens[3].text, "qui");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::elision::ElisionFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::strip::StripFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// A standard analyzer with word-boundary tokenization and normalization.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer without stop word filtering.
    pub fn new() -> Self {
        let inner = Self::base_pipeline().with_name("standard".to_string());
        StandardAnalyzer { inner }
    }

    /// Create a new standard analyzer that also removes the given stop words.
    pub fn with_stop_words(stop_words: Arc<HashSet<String>>) -> Self {
        let inner = Self::base_pipeline()
            .add_filter(Arc::new(StopFilter::with_stop_words(stop_words)))
            .with_name("standard_stop".to_string());
        StandardAnalyzer { inner }
    }

    fn base_pipeline() -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(StripFilter::new()))
            .add_filter(Arc::new(ElisionFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
