//! # lancia
//!
//! A text analysis library for Rust. lancia turns free-form user text into
//! structured signals for downstream query generation:
//!
//! - Tokenization (Unicode word boundaries, Italian elision, normalization)
//! - Part-of-speech tagging (lookup table + suffix rules)
//! - Named entity recognition (gazetteer + capitalization heuristic)
//! - Keyword ranking (frequency-based salience)
//! - Text similarity (cosine over term-frequency vectors)
//! - Intent classification (weighted trigger lexicon with confidence)
//!
//! Everything runs over one immutable [`resources::ResourceBundle`] loaded
//! at construction; every operation is a pure in-memory computation, safe to
//! call from any number of threads.
//!
//! ## Quick start
//!
//! ```
//! use lancia::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new();
//!
//! let analysis = analyzer.process_text("trova tutti i clienti di Roma").unwrap();
//! assert_eq!(analysis.entities[0].text, "Roma");
//!
//! let intent = analyzer.get_query_intent("trova tutti i clienti di Roma").unwrap();
//! assert_eq!(intent.primary_intent, "search");
//! ```

pub mod analysis;
pub mod entity;
pub mod error;
pub mod intent;
pub mod keyword;
pub mod pos;
pub mod resources;
pub mod similarity;
pub mod text_analyzer;

pub use error::{LanciaError, Result};
pub use text_analyzer::{AnalysisResult, DEFAULT_TOP_KEYWORDS, TextAnalyzer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
