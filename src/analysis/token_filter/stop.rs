//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! typically don't carry content. Includes default stop word lists for
//! Italian and English, with support for custom word lists.
//!
//! # Examples
//!
//! ```
//! use lancia::analysis::token_filter::Filter;
//! use lancia::analysis::token_filter::stop::StopFilter;
//! use lancia::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Italian + English defaults
//! let tokens = vec![
//!     Token::new("il", 0),
//!     Token::new("tuo", 1),
//!     Token::new("testo", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "il" and "tuo" are removed as stop words
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "testo");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default Italian stop words list.
///
/// Articles (simple and articulated), prepositions, conjunctions, pronouns,
/// possessives, and the most frequent forms of essere/avere.
const DEFAULT_ITALIAN_STOP_WORDS: &[&str] = &[
    "il", "lo", "la", "i", "gli", "le", "un", "uno", "una", "di", "a", "da", "in", "con", "su",
    "per", "tra", "fra", "del", "dello", "della", "dei", "degli", "delle", "al", "allo", "alla",
    "ai", "agli", "alle", "dal", "dallo", "dalla", "dai", "dagli", "dalle", "nel", "nello",
    "nella", "nei", "negli", "nelle", "sul", "sullo", "sulla", "sui", "sugli", "sulle", "e", "ed",
    "o", "od", "ma", "se", "che", "come", "anche", "oppure", "quindi", "mentre", "io", "tu",
    "lui", "lei", "noi", "voi", "loro", "mi", "ti", "si", "ci", "vi", "ne", "me", "te", "mio",
    "mia", "miei", "mie", "tuo", "tua", "tuoi", "tue", "suo", "sua", "suoi", "sue", "nostro",
    "nostra", "nostri", "nostre", "vostro", "vostra", "vostri", "vostre", "questo", "questa",
    "questi", "queste", "quello", "quella", "quelli", "quelle", "chi", "cui", "non", "più",
    "molto", "tutto", "tutti", "tutte", "tutta", "ogni", "altro", "altri", "altra", "altre", "è",
    "sono", "sei", "siamo", "siete", "era", "erano", "essere", "ho", "hai", "ha", "abbiamo",
    "avete", "hanno", "avere", "stato", "stata", "già", "ancora", "poi", "dove", "quando",
];

/// Default English stop words list.
///
/// Common English words that are typically filtered out before scoring.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default Italian stop words as a HashSet.
pub static DEFAULT_ITALIAN_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ITALIAN_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Combined Italian + English default stop word set.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ITALIAN_STOP_WORDS
        .iter()
        .chain(DEFAULT_ENGLISH_STOP_WORDS.iter())
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// Stop words are matched against the token's (already normalized) text.
/// The filter can either remove matching tokens entirely or mark them as
/// stopped while keeping them in the stream.
///
/// # Examples
///
/// ## Custom Stop Words
///
/// ```
/// use lancia::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["custom", "words", "list"]);
/// assert_eq!(filter.len(), 3);
/// ```
///
/// ## Preserve Stopped Tokens
///
/// ```
/// use lancia::analysis::token_filter::Filter;
/// use lancia::analysis::token_filter::stop::StopFilter;
/// use lancia::analysis::token::Token;
///
/// let filter = StopFilter::from_words(vec!["il"]).remove_stopped(false);
/// let tokens = vec![Token::new("il", 0), Token::new("testo", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert!(result[0].is_stopped());
/// assert!(!result[1].is_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default Italian + English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(Arc::new(DEFAULT_STOP_WORDS_SET.clone()))
    }

    /// Create a new stop filter sharing an existing stop word set.
    pub fn with_stop_words(stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter {
            stop_words,
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words: HashSet<String> = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(Arc::new(stop_words))
    }

    /// Set whether to remove stopped tokens entirely or just mark them.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
