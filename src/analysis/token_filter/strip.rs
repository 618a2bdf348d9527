//! Strip filter implementation.
//!
//! Trims leading and trailing non-alphanumeric characters from each token,
//! keeping byte offsets in sync with the source text. Tokens left empty by
//! the trim are removed from the stream.

use super::Filter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that strips punctuation from token edges.
///
/// Word-boundary tokenization already separates most punctuation, but
/// apostrophes, hyphens and similar marks can survive at token edges
/// (`po'`, `-ish`). This filter trims them and shifts the token's offsets
/// so they still delimit the token's span in the source text.
///
/// # Examples
///
/// ```
/// use lancia::analysis::token_filter::Filter;
/// use lancia::analysis::token_filter::strip::StripFilter;
/// use lancia::analysis::token::Token;
///
/// let filter = StripFilter::new();
/// let tokens = vec![Token::with_offsets("po'", 0, 4, 7)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result[0].text, "po");
/// assert_eq!(result[0].start_offset, 4);
/// assert_eq!(result[0].end_offset, 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }

    fn trim(token: Token) -> Option<Token> {
        let start = token
            .text
            .char_indices()
            .find(|(_, c)| c.is_alphanumeric())
            .map(|(i, _)| i)?;
        let end = token
            .text
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_alphanumeric())
            .map(|(i, c)| i + c.len_utf8())?;

        if start == 0 && end == token.text.len() {
            return Some(token);
        }

        let trimmed = token.text[start..end].to_string();
        let mut stripped = token.with_text(trimmed);
        stripped.end_offset = stripped.start_offset + end;
        stripped.start_offset += start;
        Some(stripped)
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else {
                    Self::trim(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}
