//! Frequency-based keyword scorer.
//!
//! The score of a term is its frequency normalized by the number of scored
//! terms, weighted by a heuristic inverse-frequency factor: no reference
//! corpus ships with the library, so specificity is approximated from the
//! term's shape (longer terms and hyphenated/underscored compounds score
//! higher).
//!
//! # Examples
//!
//! ```
//! use lancia::analysis::token::Token;
//! use lancia::keyword::scorer::KeywordScorer;
//!
//! let scorer = KeywordScorer::new();
//! let tokens = vec![
//!     Token::new("testo", 0),
//!     Token::new("qui", 1),
//!     Token::new("testo", 2),
//! ];
//!
//! let keywords = scorer.score(&tokens, 5);
//!
//! assert_eq!(keywords[0].term, "testo");
//! assert!(keywords[0].score > keywords[1].score);
//! ```

use ahash::AHashMap;

use crate::analysis::token::Token;
use crate::keyword::Keyword;

/// Scores and ranks the distinct terms of a token sequence.
#[derive(Debug, Clone, Default)]
pub struct KeywordScorer;

impl KeywordScorer {
    /// Create a new keyword scorer.
    pub fn new() -> Self {
        KeywordScorer
    }

    /// Rank the distinct terms of `tokens`, returning at most `top_n`.
    ///
    /// Tokens marked as stopped and single-character terms are skipped.
    /// Ordering is score descending; equal scores order by first occurrence
    /// in the text. `top_n == 0` yields an empty vector.
    pub fn score(&self, tokens: &[Token], top_n: usize) -> Vec<Keyword> {
        if top_n == 0 {
            return Vec::new();
        }

        // term -> (count, first occurrence index)
        let mut frequencies: AHashMap<&str, (usize, usize)> = AHashMap::new();
        let mut total = 0usize;

        for token in tokens {
            if token.is_stopped() || token.text.chars().count() < 2 {
                continue;
            }
            let entry = frequencies.entry(token.text.as_str()).or_insert((0, total));
            entry.0 += 1;
            total += 1;
        }

        if total == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<(Keyword, usize)> = frequencies
            .into_iter()
            .map(|(term, (count, first_seen))| {
                let tf = count as f64 / total as f64;
                let keyword = Keyword {
                    term: term.to_string(),
                    score: tf * Self::inverse_frequency_weight(term),
                };
                (keyword, first_seen)
            })
            .collect();

        ranked.sort_by(|(a, a_first), (b, b_first)| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a_first.cmp(b_first))
        });

        ranked
            .into_iter()
            .take(top_n)
            .map(|(keyword, _)| keyword)
            .collect()
    }

    /// Corpus-free specificity weight for a term.
    ///
    /// Base 1.0, plus a length factor capped at 1.5, plus a bonus for
    /// hyphenated or underscored compounds.
    fn inverse_frequency_weight(term: &str) -> f64 {
        let length_factor = (term.chars().count() as f64 / 6.0).min(1.5);
        let compound_bonus = if term.contains('-') || term.contains('_') {
            0.5
        } else {
            0.0
        };

        1.0 + length_factor + compound_bonus
    }
}
