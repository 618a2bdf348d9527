//! Intent lexicon: ordered intent definitions with weighted triggers.
//!
//! Declaration order is significant — it is the tie-break order between
//! intents with equal scores — so the lexicon is a list, not a map.
//!
//! # Resource format
//!
//! A lexicon file is a JSON array of intent specs:
//!
//! ```json
//! [
//!   {
//!     "intent": "search",
//!     "triggers": [
//!       { "term": "trova", "weight": 2.0 },
//!       { "pattern": "^mostra(mi)?\\b", "weight": 1.5 }
//!     ]
//!   }
//! ]
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{LanciaError, Result};

/// Serde shape of a single trigger in a lexicon file.
///
/// Exactly one of `term` and `pattern` must be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerSpec {
    /// Exact term, matched against the query's normalized token set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Regex, matched against the lowercased raw query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Trigger weight; higher means more specific
    pub weight: f64,
}

impl TriggerSpec {
    /// A term trigger spec.
    pub fn term<S: Into<String>>(term: S, weight: f64) -> Self {
        TriggerSpec {
            term: Some(term.into()),
            pattern: None,
            weight,
        }
    }

    /// A pattern trigger spec.
    pub fn pattern<S: Into<String>>(pattern: S, weight: f64) -> Self {
        TriggerSpec {
            term: None,
            pattern: Some(pattern.into()),
            weight,
        }
    }
}

/// Serde shape of a single intent in a lexicon file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentSpec {
    /// Intent name, e.g. "search"
    pub intent: String,
    /// Weighted triggers signalling this intent
    pub triggers: Vec<TriggerSpec>,
}

/// A compiled, validated trigger.
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Exact term with its weight
    Term {
        /// Normalized (lowercased) term
        term: String,
        /// Trigger weight
        weight: f64,
    },
    /// Compiled regex with its weight
    Pattern {
        /// Compiled pattern
        pattern: Regex,
        /// Trigger weight
        weight: f64,
    },
}

impl Trigger {
    /// The trigger's weight.
    pub fn weight(&self) -> f64 {
        match self {
            Trigger::Term { weight, .. } => *weight,
            Trigger::Pattern { weight, .. } => *weight,
        }
    }
}

/// A single intent with its compiled triggers.
#[derive(Debug, Clone)]
pub struct IntentDefinition {
    /// Intent name
    pub name: String,
    /// Compiled triggers
    pub triggers: Vec<Trigger>,
}

/// An ordered, validated intent lexicon.
#[derive(Debug, Clone, Default)]
pub struct IntentLexicon {
    intents: Vec<IntentDefinition>,
}

impl IntentLexicon {
    /// Compile and validate a lexicon from its serde specs.
    ///
    /// Validation rejects: an empty intent name, an empty trigger list, a
    /// trigger with both or neither of `term`/`pattern`, a non-positive or
    /// non-finite weight, an empty term, and an uncompilable pattern.
    pub fn from_specs(specs: Vec<IntentSpec>) -> Result<Self> {
        let mut intents = Vec::with_capacity(specs.len());

        for spec in specs {
            if spec.intent.trim().is_empty() {
                return Err(LanciaError::invalid_input("intent name must not be empty"));
            }
            if spec.triggers.is_empty() {
                return Err(LanciaError::invalid_input(format!(
                    "intent {:?} has no triggers",
                    spec.intent
                )));
            }

            let mut triggers = Vec::with_capacity(spec.triggers.len());
            for trigger in spec.triggers {
                if !trigger.weight.is_finite() || trigger.weight <= 0.0 {
                    return Err(LanciaError::invalid_input(format!(
                        "intent {:?}: trigger weight must be positive, got {}",
                        spec.intent, trigger.weight
                    )));
                }

                triggers.push(match (trigger.term, trigger.pattern) {
                    (Some(term), None) => {
                        let term = term.trim().to_lowercase();
                        if term.is_empty() {
                            return Err(LanciaError::invalid_input(format!(
                                "intent {:?}: trigger term must not be empty",
                                spec.intent
                            )));
                        }
                        Trigger::Term {
                            term,
                            weight: trigger.weight,
                        }
                    }
                    (None, Some(pattern)) => {
                        let pattern = Regex::new(&pattern).map_err(|e| {
                            LanciaError::invalid_input(format!(
                                "intent {:?}: invalid trigger pattern: {e}",
                                spec.intent
                            ))
                        })?;
                        Trigger::Pattern {
                            pattern,
                            weight: trigger.weight,
                        }
                    }
                    _ => {
                        return Err(LanciaError::invalid_input(format!(
                            "intent {:?}: a trigger needs exactly one of term or pattern",
                            spec.intent
                        )));
                    }
                });
            }

            intents.push(IntentDefinition {
                name: spec.intent,
                triggers,
            });
        }

        Ok(IntentLexicon { intents })
    }

    /// Iterate the intents in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &IntentDefinition> {
        self.intents.iter()
    }

    /// Number of intents.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Check whether the lexicon has no intents.
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}
