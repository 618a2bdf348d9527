//! Rule-based part-of-speech tagger.
//!
//! Tagging is table-driven in two stages: a closed-class lookup (articles,
//! prepositions, conjunctions, pronouns in Italian and English), then suffix
//! rules for open-class words. Numeric tokens become [`PosTag::Numeral`];
//! everything else falls back to [`PosTag::Noun`]. Tagging never fails and
//! always yields exactly one tag per token.
//!
//! # Examples
//!
//! ```
//! use lancia::pos::{PosTag, PosTagger};
//!
//! let tagger = PosTagger::new();
//! assert_eq!(tagger.tag_word("il"), PosTag::Determiner);
//! assert_eq!(tagger.tag_word("velocemente"), PosTag::Adverb);
//! assert_eq!(tagger.tag_word("testo"), PosTag::Noun);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::analysis::token::Token;
use crate::pos::tag::PosTag;

/// Closed-class word table, Italian and English.
///
/// On collisions between the two languages (e.g. "i", "a") the Italian
/// reading wins: the lexicon is Italian-first and entries are inserted in
/// that order.
static CLOSED_CLASS_TABLE: LazyLock<HashMap<&'static str, PosTag>> = LazyLock::new(|| {
    let mut table = HashMap::new();

    // English first, so Italian entries overwrite shared spellings below.
    for word in ["the", "an", "this", "that", "these", "those", "every", "each", "some", "any"] {
        table.insert(word, PosTag::Determiner);
    }
    for word in [
        "of", "in", "on", "at", "to", "from", "with", "by", "about", "into", "over", "under",
        "between", "through", "during", "before", "after",
    ] {
        table.insert(word, PosTag::Preposition);
    }
    for word in ["and", "or", "but", "nor", "so", "yet", "because", "although", "while"] {
        table.insert(word, PosTag::Conjunction);
    }
    for word in [
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
        "your", "his", "its", "our", "their", "who", "whom", "which", "what",
    ] {
        table.insert(word, PosTag::Pronoun);
    }
    for word in ["not", "very", "too", "also", "never", "always", "here", "now"] {
        table.insert(word, PosTag::Adverb);
    }

    // Italian
    for word in [
        "il", "lo", "la", "i", "gli", "le", "un", "uno", "una", "questo", "questa", "questi",
        "queste", "quel", "quella", "quelli", "quelle", "ogni",
    ] {
        table.insert(word, PosTag::Determiner);
    }
    for word in [
        "di", "a", "da", "in", "con", "su", "per", "tra", "fra", "del", "dello", "della", "dei",
        "degli", "delle", "al", "allo", "alla", "ai", "agli", "alle", "dal", "dalla", "nel",
        "nella", "nei", "nelle", "sul", "sulla",
    ] {
        table.insert(word, PosTag::Preposition);
    }
    for word in ["e", "ed", "o", "od", "ma", "se", "mentre", "oppure", "quindi", "come"] {
        table.insert(word, PosTag::Conjunction);
    }
    for word in [
        "io", "tu", "lui", "lei", "noi", "voi", "loro", "mi", "ti", "si", "ci", "vi", "ne", "che",
        "chi", "cui", "mio", "mia", "miei", "mie", "tuo", "tua", "tuoi", "tue", "suo", "sua",
        "suoi", "sue", "nostro", "nostra", "vostro", "vostra",
    ] {
        table.insert(word, PosTag::Pronoun);
    }
    for word in ["non", "più", "molto", "anche", "già", "ancora", "sempre", "mai", "poi"] {
        table.insert(word, PosTag::Adverb);
    }

    table
});

/// Suffix rules for open-class words, tried in order.
///
/// A rule applies only when the token is at least two characters longer than
/// the suffix, so short words don't get swallowed by two-letter endings.
const SUFFIX_RULES: &[(&str, PosTag)] = &[
    // Italian
    ("mente", PosTag::Adverb),
    ("zione", PosTag::Noun),
    ("sione", PosTag::Noun),
    ("aggio", PosTag::Noun),
    ("ando", PosTag::Verb),
    ("endo", PosTag::Verb),
    ("are", PosTag::Verb),
    ("ere", PosTag::Verb),
    ("ire", PosTag::Verb),
    ("ato", PosTag::Verb),
    ("uto", PosTag::Verb),
    ("ito", PosTag::Verb),
    ("oso", PosTag::Adjective),
    ("osa", PosTag::Adjective),
    ("ivo", PosTag::Adjective),
    ("iva", PosTag::Adjective),
    ("ico", PosTag::Adjective),
    ("ica", PosTag::Adjective),
    ("bile", PosTag::Adjective),
    ("ista", PosTag::Noun),
    ("tà", PosTag::Noun),
    // English
    ("ly", PosTag::Adverb),
    ("tion", PosTag::Noun),
    ("ness", PosTag::Noun),
    ("ment", PosTag::Noun),
    ("ity", PosTag::Noun),
    ("ing", PosTag::Verb),
    ("ize", PosTag::Verb),
    ("ise", PosTag::Verb),
    ("ed", PosTag::Verb),
    ("ous", PosTag::Adjective),
    ("ful", PosTag::Adjective),
    ("able", PosTag::Adjective),
    ("ible", PosTag::Adjective),
    ("ive", PosTag::Adjective),
];

/// A rule-based POS tagger over normalized (lowercased) token text.
#[derive(Clone, Debug, Default)]
pub struct PosTagger;

impl PosTagger {
    /// Create a new tagger.
    pub fn new() -> Self {
        PosTagger
    }

    /// Tag a single normalized word.
    pub fn tag_word(&self, word: &str) -> PosTag {
        if !word.is_empty() && word.chars().all(|c| c.is_numeric()) {
            return PosTag::Numeral;
        }

        if let Some(&tag) = CLOSED_CLASS_TABLE.get(word) {
            return tag;
        }

        let word_chars = word.chars().count();
        for (suffix, tag) in SUFFIX_RULES {
            if word_chars >= suffix.chars().count() + 2 && word.ends_with(suffix) {
                return *tag;
            }
        }

        PosTag::Noun
    }

    /// Tag a token sequence, one tag per token, in order.
    pub fn tag(&self, tokens: &[Token]) -> Vec<PosTag> {
        tokens.iter().map(|t| self.tag_word(&t.text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_class_lookup() {
        let tagger = PosTagger::new();

        assert_eq!(tagger.tag_word("il"), PosTag::Determiner);
        assert_eq!(tagger.tag_word("di"), PosTag::Preposition);
        assert_eq!(tagger.tag_word("e"), PosTag::Conjunction);
        assert_eq!(tagger.tag_word("tuo"), PosTag::Pronoun);
        assert_eq!(tagger.tag_word("the"), PosTag::Determiner);
        assert_eq!(tagger.tag_word("and"), PosTag::Conjunction);
    }

    #[test]
    fn test_italian_wins_on_collision() {
        let tagger = PosTagger::new();

        // "i" is an Italian plural article, not the English pronoun
        assert_eq!(tagger.tag_word("i"), PosTag::Determiner);
        // "a" is an Italian preposition, not the English article
        assert_eq!(tagger.tag_word("a"), PosTag::Preposition);
    }

    #[test]
    fn test_suffix_rules() {
        let tagger = PosTagger::new();

        assert_eq!(tagger.tag_word("velocemente"), PosTag::Adverb);
        assert_eq!(tagger.tag_word("stazione"), PosTag::Noun);
        assert_eq!(tagger.tag_word("trovare"), PosTag::Verb);
        assert_eq!(tagger.tag_word("creato"), PosTag::Verb);
        assert_eq!(tagger.tag_word("famoso"), PosTag::Adjective);
        assert_eq!(tagger.tag_word("quickly"), PosTag::Adverb);
        assert_eq!(tagger.tag_word("walking"), PosTag::Verb);
    }

    #[test]
    fn test_short_words_skip_suffix_rules() {
        let tagger = PosTagger::new();

        // Too short for the "-ed" rule; falls back to noun
        assert_eq!(tagger.tag_word("red"), PosTag::Noun);
    }

    #[test]
    fn test_numerals_and_fallback() {
        let tagger = PosTagger::new();

        assert_eq!(tagger.tag_word("2024"), PosTag::Numeral);
        assert_eq!(tagger.tag_word("testo"), PosTag::Noun);
        assert_eq!(tagger.tag_word("qui"), PosTag::Noun);
    }

    #[test]
    fn test_one_tag_per_token() {
        use crate::analysis::token::Token;

        let tagger = PosTagger::new();
        let tokens: Vec<Token> = ["il", "tuo", "testo", "qui"]
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();

        let tags = tagger.tag(&tokens);

        assert_eq!(tags.len(), tokens.len());
    }
}
