//! Rule-based entity recognizer.
//!
//! Combines gazetteer lookup with a capitalization heuristic. The gazetteer
//! is consulted first at every position (longest-match-wins); where it has
//! nothing, a token whose source form starts with an uppercase letter, is
//! not sentence-initial, and is not a stop word becomes an entity candidate.
//! A run of two or more consecutive candidates is emitted as a single PER
//! span (unknown multi-word proper names are usually people); a lone
//! candidate becomes MISC.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::Token;
use crate::entity::gazetteer::Gazetteer;
use crate::entity::{Entity, EntityType};

/// Recognizes named entity spans in a token sequence.
///
/// The recognizer reads original casing through the tokens' byte offsets
/// into the source text, so it works on normalized (lowercased) token
/// streams.
#[derive(Debug, Clone)]
pub struct EntityRecognizer {
    gazetteer: Arc<Gazetteer>,
    stop_words: Arc<HashSet<String>>,
}

impl EntityRecognizer {
    /// Create a new recognizer over the given gazetteer and stop word set.
    pub fn new(gazetteer: Arc<Gazetteer>, stop_words: Arc<HashSet<String>>) -> Self {
        EntityRecognizer {
            gazetteer,
            stop_words,
        }
    }

    /// Recognize entity spans in `tokens`, reading casing from `source`.
    ///
    /// Tokens must originate from `source` (offsets in bounds, in order).
    /// The returned spans are ordered by start offset and never overlap.
    pub fn recognize(&self, tokens: &[Token], source: &str) -> Vec<Entity> {
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        let mut entities = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if let Some((word_count, entity_type)) = self.gazetteer.longest_match(&words, i) {
                entities.push(self.span(tokens, source, i, i + word_count, entity_type));
                i += word_count;
                continue;
            }

            if self.is_candidate(&tokens[i], source) {
                let mut j = i + 1;
                while j < tokens.len()
                    && self.gazetteer.longest_match(&words, j).is_none()
                    && self.is_candidate(&tokens[j], source)
                {
                    j += 1;
                }
                let entity_type = if j - i >= 2 {
                    EntityType::Per
                } else {
                    EntityType::Misc
                };
                entities.push(self.span(tokens, source, i, j, entity_type));
                i = j;
                continue;
            }

            i += 1;
        }

        entities
    }

    fn span(
        &self,
        tokens: &[Token],
        source: &str,
        from: usize,
        to: usize,
        entity_type: EntityType,
    ) -> Entity {
        let start = tokens[from].start_offset;
        let end = tokens[to - 1].end_offset;
        Entity {
            text: source[start..end].to_string(),
            entity_type,
            start,
            end,
        }
    }

    fn is_candidate(&self, token: &Token, source: &str) -> bool {
        let surface = &source[token.start_offset..token.end_offset];
        let starts_uppercase = surface.chars().next().is_some_and(|c| c.is_uppercase());

        starts_uppercase
            && surface.chars().count() > 1
            && !is_sentence_initial(source, token.start_offset)
            && !self.stop_words.contains(&token.text)
    }
}

/// A position is sentence-initial when only whitespace separates it from the
/// start of the text or from a sentence-ending mark.
fn is_sentence_initial(source: &str, offset: usize) -> bool {
    for c in source[..offset].chars().rev() {
        if c.is_whitespace() {
            continue;
        }
        return matches!(c, '.' | '!' | '?');
    }
    true
}
