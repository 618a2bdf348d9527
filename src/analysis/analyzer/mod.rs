//! Analyzer implementations combining tokenizers and filters.
//!
//! Analyzers are the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! # Available Implementations
//!
//! - [`StandardAnalyzer`](standard::StandardAnalyzer) - word-boundary
//!   tokenization with strip, elision, and lowercase normalization
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - custom tokenizer +
//!   filter chains

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// `Send + Sync` is required so analyzers can be shared across threads;
/// batch analysis dispatches calls in parallel.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// Runs the complete pipeline: tokenization plus all configured filters.
    /// Deterministic — repeated calls on the same text yield the same stream.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod pipeline;
pub mod standard;

pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;
