//! Elision filter implementation.
//!
//! Italian (like French) elides articles and particles before a vowel:
//! `l'agenzia`, `dell'Italia`, `un'idea`. Word-boundary tokenization keeps
//! the apostrophe inside the token, so the elided particle would otherwise
//! pollute matching. This filter strips a recognized leading particle plus
//! its apostrophe, adjusting the start offset.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Particles elided before a vowel in Italian.
const DEFAULT_ITALIAN_ELISION_PARTICLES: &[&str] = &[
    "l", "un", "d", "c", "m", "t", "s", "v", "n", "dell", "all", "dall", "nell", "sull", "quest",
    "quell", "anch", "po",
];

/// Default Italian elision particles as a HashSet.
pub static DEFAULT_ITALIAN_ELISION_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ITALIAN_ELISION_PARTICLES
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes elided leading particles from tokens.
///
/// A token is rewritten only when it contains an apostrophe whose prefix,
/// lowercased, is a known elision particle and whose remainder is non-empty.
///
/// # Examples
///
/// ```
/// use lancia::analysis::token_filter::Filter;
/// use lancia::analysis::token_filter::elision::ElisionFilter;
/// use lancia::analysis::token::Token;
///
/// let filter = ElisionFilter::new();
/// let tokens = vec![Token::with_offsets("dell'Italia", 0, 0, 11)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result[0].text, "Italia");
/// assert_eq!(result[0].start_offset, 5);
/// ```
#[derive(Clone, Debug)]
pub struct ElisionFilter {
    particles: Arc<HashSet<String>>,
}

impl ElisionFilter {
    /// Create a new elision filter with the default Italian particles.
    pub fn new() -> Self {
        ElisionFilter {
            particles: Arc::new(DEFAULT_ITALIAN_ELISION_SET.clone()),
        }
    }

    /// Create a new elision filter from a custom particle list.
    pub fn from_particles<I, S>(particles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ElisionFilter {
            particles: Arc::new(particles.into_iter().map(|s| s.into()).collect()),
        }
    }

    fn elide(&self, token: Token) -> Token {
        let Some(apostrophe) = token.text.find(['\'', '\u{2019}']) else {
            return token;
        };
        let prefix = token.text[..apostrophe].to_lowercase();
        let rest_start = apostrophe + token.text[apostrophe..].chars().next().map_or(1, |c| c.len_utf8());
        if rest_start >= token.text.len() || !self.particles.contains(&prefix) {
            return token;
        }

        let rest = token.text[rest_start..].to_string();
        let mut elided = token.with_text(rest);
        elided.start_offset += rest_start;
        elided
    }
}

impl Default for ElisionFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for ElisionFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    self.elide(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "elision"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_elision_filter() {
        let filter = ElisionFilter::new();
        let tokens = vec![
            Token::with_offsets("l'agenzia", 0, 0, 9),
            Token::with_offsets("dell'Italia", 1, 10, 21),
            Token::with_offsets("casa", 2, 22, 26),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "agenzia");
        assert_eq!(result[0].start_offset, 2);
        assert_eq!(result[1].text, "Italia");
        assert_eq!(result[1].start_offset, 15);
        assert_eq!(result[2].text, "casa");
    }

    #[test]
    fn test_unknown_prefix_left_alone() {
        let filter = ElisionFilter::new();
        let tokens = vec![Token::new("rock'n", 0)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "rock'n");
    }

    #[test]
    fn test_trailing_apostrophe_left_alone() {
        let filter = ElisionFilter::new();
        let tokens = vec![Token::new("po'", 0)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        // Nothing follows the apostrophe, so no elision applies
        assert_eq!(result[0].text, "po'");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(ElisionFilter::new().name(), "elision");
    }
}
