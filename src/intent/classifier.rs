//! Lexicon-driven intent classifier.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::intent::lexicon::{IntentLexicon, Trigger};

/// The fallback intent name when no trigger matches.
pub const UNKNOWN_INTENT: &str = "unknown";

/// Result of intent classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    /// The winning intent name, or [`UNKNOWN_INTENT`]
    pub primary_intent: String,
    /// Relative certainty in [0, 1]: the winning score over the total mass
    pub confidence: f64,
    /// Per-intent score breakdown, zero scores included
    pub scores: BTreeMap<String, f64>,
}

impl IntentResult {
    fn unknown(scores: BTreeMap<String, f64>) -> Self {
        IntentResult {
            primary_intent: UNKNOWN_INTENT.to_string(),
            confidence: 0.0,
            scores,
        }
    }
}

/// Scores a query against an intent lexicon.
///
/// Term triggers match against the query's normalized token set; pattern
/// triggers match against the lowercased raw query. Ties between intents
/// with equal top scores resolve to the earliest-declared intent.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lancia::analysis::analyzer::standard::StandardAnalyzer;
/// use lancia::intent::classifier::IntentClassifier;
/// use lancia::intent::lexicon::{IntentLexicon, IntentSpec, TriggerSpec};
///
/// let lexicon = IntentLexicon::from_specs(vec![IntentSpec {
///     intent: "search".to_string(),
///     triggers: vec![TriggerSpec::term("trova", 2.0)],
/// }]).unwrap();
///
/// let classifier = IntentClassifier::new(
///     Arc::new(lexicon),
///     Arc::new(StandardAnalyzer::new()),
/// );
///
/// let result = classifier.classify("trova tutti i clienti").unwrap();
/// assert_eq!(result.primary_intent, "search");
/// assert!(result.confidence > 0.0);
/// ```
pub struct IntentClassifier {
    lexicon: Arc<IntentLexicon>,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for IntentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentClassifier")
            .field("intents", &self.lexicon.len())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl IntentClassifier {
    /// Create a new classifier over the given lexicon and analyzer.
    pub fn new(lexicon: Arc<IntentLexicon>, analyzer: Arc<dyn Analyzer>) -> Self {
        IntentClassifier { lexicon, analyzer }
    }

    /// Classify a query.
    ///
    /// Never fails on content: an empty query or one matching no trigger
    /// yields [`UNKNOWN_INTENT`] with confidence 0.0.
    pub fn classify(&self, query: &str) -> Result<IntentResult> {
        let query_terms: HashSet<String> = self
            .analyzer
            .analyze(query)?
            .map(|token| token.text)
            .collect();
        let normalized_query = query.to_lowercase();

        let mut breakdown = BTreeMap::new();
        let mut best: Option<(&str, f64)> = None;
        let mut total_mass = 0.0;

        for definition in self.lexicon.iter() {
            let score: f64 = definition
                .triggers
                .iter()
                .filter(|trigger| match trigger {
                    Trigger::Term { term, .. } => query_terms.contains(term),
                    Trigger::Pattern { pattern, .. } => pattern.is_match(&normalized_query),
                })
                .map(Trigger::weight)
                .sum();

            breakdown.insert(definition.name.clone(), score);
            total_mass += score;

            // Strictly greater, so equal scores keep the earlier intent
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((&definition.name, score));
            }
        }

        match best {
            Some((name, score)) if total_mass > 0.0 && score > 0.0 => Ok(IntentResult {
                primary_intent: name.to_string(),
                confidence: score / total_mass,
                scores: breakdown,
            }),
            _ => Ok(IntentResult::unknown(breakdown)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::standard::StandardAnalyzer;
    use crate::intent::lexicon::{IntentSpec, TriggerSpec};

    fn classifier(specs: Vec<IntentSpec>) -> IntentClassifier {
        IntentClassifier::new(
            Arc::new(IntentLexicon::from_specs(specs).unwrap()),
            Arc::new(StandardAnalyzer::new()),
        )
    }

    fn two_intent_classifier() -> IntentClassifier {
        classifier(vec![
            IntentSpec {
                intent: "search".to_string(),
                triggers: vec![
                    TriggerSpec::term("trova", 2.0),
                    TriggerSpec::term("cerca", 2.0),
                ],
            },
            IntentSpec {
                intent: "count".to_string(),
                triggers: vec![
                    TriggerSpec::term("quanti", 2.0),
                    TriggerSpec::term("conta", 2.0),
                ],
            },
        ])
    }

    #[test]
    fn test_single_intent_match() {
        let classifier = two_intent_classifier();

        let result = classifier.classify("trova tutti i clienti di Roma").unwrap();

        assert_eq!(result.primary_intent, "search");
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.scores["search"], 2.0);
        assert_eq!(result.scores["count"], 0.0);
    }

    #[test]
    fn test_confidence_splits_mass() {
        let classifier = two_intent_classifier();

        // Both intents triggered; search gets 2.0, count gets 2.0
        let result = classifier.classify("trova e conta i clienti").unwrap();

        assert_eq!(result.confidence, 0.5);
        // Tie resolves to the earlier-declared intent
        assert_eq!(result.primary_intent, "search");
    }

    #[test]
    fn test_unknown_on_no_match() {
        let classifier = two_intent_classifier();

        let result = classifier.classify("buongiorno a tutti").unwrap();

        assert_eq!(result.primary_intent, UNKNOWN_INTENT);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_empty_query_is_unknown() {
        let classifier = two_intent_classifier();

        let result = classifier.classify("").unwrap();

        assert_eq!(result.primary_intent, UNKNOWN_INTENT);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.scores.len(), 2);
    }

    #[test]
    fn test_pattern_trigger() {
        let classifier = classifier(vec![IntentSpec {
            intent: "sort".to_string(),
            triggers: vec![TriggerSpec::pattern(r"\bordina(ti)?\b", 1.5)],
        }]);

        let result = classifier.classify("Ordina i risultati per data").unwrap();

        assert_eq!(result.primary_intent, "sort");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_trigger_matches_whole_tokens_only() {
        let classifier = two_intent_classifier();

        // "ritrovato" contains "trova" but is a different token
        let result = classifier.classify("il quadro ritrovato").unwrap();

        assert_eq!(result.primary_intent, UNKNOWN_INTENT);
    }

    #[test]
    fn test_confidence_bounds() {
        let classifier = two_intent_classifier();

        for query in ["trova clienti", "conta ordini", "trova e conta", "nulla", ""] {
            let result = classifier.classify(query).unwrap();
            assert!(result.confidence >= 0.0);
            assert!(result.confidence <= 1.0);
        }
    }
}
