//! The text analysis façade.
//!
//! [`TextAnalyzer`] wires the analysis pipeline, the POS tagger, the entity
//! recognizer, the keyword scorer, the similarity engine, and the intent
//! classifier over one shared [`ResourceBundle`]. Every operation is a pure,
//! synchronous function of its inputs and the bundle; the analyzer can be
//! shared across threads and batches are embarrassingly parallel.
//!
//! # Examples
//!
//! ```
//! use lancia::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new();
//!
//! let analysis = analyzer.process_text("Il tuo testo qui").unwrap();
//! assert_eq!(analysis.tokens, vec!["il", "tuo", "testo", "qui"]);
//! assert_eq!(analysis.pos_tags.len(), 4);
//! assert!(analysis.entities.is_empty());
//!
//! let intent = analyzer.get_query_intent("trova tutti i clienti di Roma").unwrap();
//! assert_eq!(intent.primary_intent, "search");
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::analysis::token::Token;
use crate::entity::Entity;
use crate::entity::recognizer::EntityRecognizer;
use crate::error::Result;
use crate::intent::classifier::{IntentClassifier, IntentResult};
use crate::keyword::Keyword;
use crate::keyword::scorer::KeywordScorer;
use crate::pos::tag::PosTag;
use crate::pos::tagger::PosTagger;
use crate::resources::ResourceBundle;
use crate::similarity::engine::SimilarityEngine;

/// Default number of keywords returned when callers don't pick one.
pub const DEFAULT_TOP_KEYWORDS: usize = 5;

/// Below this many texts a batch runs sequentially; rayon overhead isn't
/// worth it for a handful of inputs.
const PARALLEL_BATCH_THRESHOLD: usize = 16;

/// The merged output of [`TextAnalyzer::process_text`].
///
/// `tokens` and `pos_tags` are positionally aligned and always the same
/// length; `entities` is ordered by start offset and non-overlapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Normalized token texts, in source order
    pub tokens: Vec<String>,
    /// (token, tag) pairs, positionally aligned with `tokens`
    pub pos_tags: Vec<(String, PosTag)>,
    /// Recognized entity spans, ordered by start offset
    pub entities: Vec<Entity>,
}

/// Façade composing the full analysis pipeline over one resource bundle.
pub struct TextAnalyzer {
    resources: ResourceBundle,
    analyzer: Arc<StandardAnalyzer>,
    keyword_analyzer: Arc<StandardAnalyzer>,
    tagger: PosTagger,
    recognizer: EntityRecognizer,
    scorer: KeywordScorer,
    similarity: SimilarityEngine,
    classifier: IntentClassifier,
}

impl TextAnalyzer {
    /// Create an analyzer over the compiled-in default resources.
    pub fn new() -> Self {
        Self::with_resources(ResourceBundle::default())
    }

    /// Create an analyzer over the given resource bundle.
    ///
    /// Multiple analyzers with different bundles can coexist; nothing is
    /// shared between them except what the caller shares deliberately.
    pub fn with_resources(resources: ResourceBundle) -> Self {
        let analyzer = Arc::new(StandardAnalyzer::new());
        let keyword_analyzer = Arc::new(StandardAnalyzer::with_stop_words(
            resources.stop_words().clone(),
        ));
        let recognizer = EntityRecognizer::new(
            resources.gazetteer().clone(),
            resources.stop_words().clone(),
        );
        let similarity = SimilarityEngine::new(analyzer.clone() as Arc<dyn Analyzer>);
        let classifier = IntentClassifier::new(
            resources.lexicon().clone(),
            analyzer.clone() as Arc<dyn Analyzer>,
        );

        TextAnalyzer {
            resources,
            analyzer,
            keyword_analyzer,
            tagger: PosTagger::new(),
            recognizer,
            scorer: KeywordScorer::new(),
            similarity,
            classifier,
        }
    }

    /// The resource bundle this analyzer reads.
    pub fn resources(&self) -> &ResourceBundle {
        &self.resources
    }

    /// Tokenize, tag, and recognize entities in one pass.
    ///
    /// Empty or whitespace-only text yields empty collections, never an
    /// error.
    pub fn process_text(&self, text: &str) -> Result<AnalysisResult> {
        let tokens: Vec<Token> = self.analyzer.analyze(text)?.collect();
        let tags = self.tagger.tag(&tokens);
        let entities = self.recognizer.recognize(&tokens, text);

        let token_texts: Vec<String> = tokens.into_iter().map(|t| t.text).collect();
        let pos_tags = token_texts.iter().cloned().zip(tags).collect();

        Ok(AnalysisResult {
            tokens: token_texts,
            pos_tags,
            entities,
        })
    }

    /// Extract the `top_n` most salient keywords.
    ///
    /// Stop words and single-character terms never appear in the result;
    /// scores are non-increasing. `top_n == 0` yields an empty vector.
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Result<Vec<Keyword>> {
        let tokens: Vec<Token> = self.keyword_analyzer.analyze(text)?.collect();
        Ok(self.scorer.score(&tokens, top_n))
    }

    /// Extract keywords with the default cutoff ([`DEFAULT_TOP_KEYWORDS`]).
    pub fn top_keywords(&self, text: &str) -> Result<Vec<Keyword>> {
        self.extract_keywords(text, DEFAULT_TOP_KEYWORDS)
    }

    /// Cosine similarity of two texts, in [0, 1], symmetric.
    pub fn similarity_analysis(&self, text_a: &str, text_b: &str) -> Result<f64> {
        self.similarity.similarity(text_a, text_b)
    }

    /// Classify the query's intent against the bundle's lexicon.
    pub fn get_query_intent(&self, query: &str) -> Result<IntentResult> {
        self.classifier.classify(query)
    }

    /// Run [`process_text`](Self::process_text) over many texts.
    ///
    /// Output order matches input order. Large batches are dispatched in
    /// parallel; there is no shared mutable state to coordinate.
    pub fn process_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<AnalysisResult>> {
        if texts.len() < PARALLEL_BATCH_THRESHOLD {
            return texts
                .iter()
                .map(|text| self.process_text(text.as_ref()))
                .collect();
        }

        texts
            .par_iter()
            .map(|text| self.process_text(text.as_ref()))
            .collect()
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer")
            .field("analyzer", &self.analyzer.name())
            .field("keyword_analyzer", &self.keyword_analyzer.name())
            .field("intents", &self.resources.lexicon().len())
            .finish()
    }
}
