//! Lowercase filter implementation.
//!
//! Converts token text to lowercase for matching purposes while keeping the
//! original form on the token, so downstream stages (entity recognition in
//! particular) can still inspect source casing.
//!
//! # Examples
//!
//! ```
//! use lancia::analysis::token_filter::Filter;
//! use lancia::analysis::token_filter::lowercase::LowercaseFilter;
//! use lancia::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Roma", 0), Token::new("MILANO", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "roma");
//! assert_eq!(filtered[0].original_text(), "Roma");
//! assert_eq!(filtered[1].text, "milano");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Skips tokens marked as stopped and leaves already-lowercase tokens
/// untouched, so `original` is only recorded when casing actually changed.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                let lowered = token.text.to_lowercase();
                if lowered == token.text {
                    token
                } else {
                    token.with_text(lowered)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
