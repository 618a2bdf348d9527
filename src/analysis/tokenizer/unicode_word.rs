//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word
//! boundary rules (UAX #29). Segments without an alphanumeric character
//! (whitespace, punctuation) are dropped, so only word-bearing segments
//! become tokens.
//!
//! # Examples
//!
//! ```
//! use lancia::analysis::tokenizer::Tokenizer;
//! use lancia::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Ciao, mondo!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Ciao");
//! assert_eq!(tokens[1].text, "mondo");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Uses the Unicode Text Segmentation algorithm (UAX #29) to identify word
/// boundaries, handling accented Latin text (Italian included) and other
/// scripts correctly. Byte offsets are taken from the segmentation itself,
/// so repeated words each get their own span.
///
/// Tokenization is deterministic: the same input always yields the same
/// token sequence.
///
/// # Examples
///
/// ```
/// use lancia::analysis::tokenizer::Tokenizer;
/// use lancia::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("caffè perché").unwrap().collect();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "caffè");
/// assert_eq!(tokens[1].text, "perché");
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut position = 0;
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter_map(|(start_offset, word)| {
                if word.chars().any(|c| c.is_alphanumeric()) {
                    let end_offset = start_offset + word.len();
                    let token = Token::with_offsets(word, position, start_offset, end_offset);
                    position += 1;
                    Some(token)
                } else {
                    None
                }
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
