//! Part-of-speech tag set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical category assigned to a token.
///
/// A compact tag set: closed classes that the lookup table can identify,
/// the open classes that suffix rules can guess, and `Other` for anything
/// that is neither (symbols, foreign material).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    /// Common or proper noun (the open-class fallback)
    Noun,
    /// Verb form
    Verb,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Article or demonstrative determiner
    Determiner,
    /// Personal, possessive, or relative pronoun
    Pronoun,
    /// Preposition (simple or articulated)
    Preposition,
    /// Coordinating or subordinating conjunction
    Conjunction,
    /// Numeric token
    Numeral,
    /// None of the above
    Other,
}

impl PosTag {
    /// Returns the conventional short label for the tag.
    pub fn label(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Determiner => "DET",
            PosTag::Pronoun => "PRON",
            PosTag::Preposition => "PREP",
            PosTag::Conjunction => "CONJ",
            PosTag::Numeral => "NUM",
            PosTag::Other => "OTHER",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
