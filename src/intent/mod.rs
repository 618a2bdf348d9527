//! Query intent classification.
//!
//! Classification is lexicon-driven: each intent declares weighted triggers
//! (exact terms matched against the query's token set, or regex patterns
//! matched against the lowercased query). The intent with the highest
//! summed trigger weight wins; confidence is that score over the total
//! score mass across all intents. The lexicon never changes at request
//! time — classification is a pure function of the query and the lexicon.

pub mod classifier;
pub mod lexicon;

pub use classifier::{IntentClassifier, IntentResult, UNKNOWN_INTENT};
pub use lexicon::{IntentDefinition, IntentLexicon, IntentSpec, Trigger, TriggerSpec};
