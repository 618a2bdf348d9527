//! Gazetteer lookup for known entity names.
//!
//! The gazetteer maps known names (single- or multi-word, matched
//! case-insensitively against normalized tokens) to entity types. Lookups
//! are longest-match-wins: when both "banca" and "banca d italia" could
//! match at a position, the longer entry is taken.

use std::collections::HashSet;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::entity::EntityType;
use crate::error::{LanciaError, Result};

/// Serde shape of a gazetteer resource file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GazetteerSpec {
    /// Known place names
    #[serde(default)]
    pub locations: Vec<String>,
    /// Known organization names
    #[serde(default)]
    pub organizations: Vec<String>,
    /// Known person names
    #[serde(default)]
    pub persons: Vec<String>,
}

#[derive(Debug, Clone)]
struct GazetteerEntry {
    /// Lowercased words of the name, in order
    words: Vec<String>,
    entity_type: EntityType,
}

/// A reference list of known entity names for lookup-based recognition.
///
/// Entries are indexed by their (lowercased) first word; each bucket is kept
/// sorted by word count descending so that scanning a bucket front to back
/// yields the longest match first.
///
/// # Examples
///
/// ```
/// use lancia::entity::{EntityType, Gazetteer};
///
/// let mut gazetteer = Gazetteer::new();
/// gazetteer.add("Roma", EntityType::Loc).unwrap();
/// gazetteer.add("Banca di Roma", EntityType::Org).unwrap();
///
/// let words = vec!["banca", "di", "roma"];
/// let hit = gazetteer.longest_match(&words, 0).unwrap();
/// assert_eq!(hit, (3, EntityType::Org));
///
/// let hit = gazetteer.longest_match(&words, 2).unwrap();
/// assert_eq!(hit, (1, EntityType::Loc));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    index: AHashMap<String, Vec<GazetteerEntry>>,
    len: usize,
}

impl Gazetteer {
    /// Create an empty gazetteer.
    pub fn new() -> Self {
        Gazetteer::default()
    }

    /// Build a gazetteer from a resource spec.
    pub fn from_spec(spec: &GazetteerSpec) -> Result<Self> {
        let mut gazetteer = Gazetteer::new();
        for name in &spec.locations {
            gazetteer.add(name, EntityType::Loc)?;
        }
        for name in &spec.organizations {
            gazetteer.add(name, EntityType::Org)?;
        }
        for name in &spec.persons {
            gazetteer.add(name, EntityType::Per)?;
        }
        Ok(gazetteer)
    }

    /// Add a name under the given entity type.
    ///
    /// The name is split on whitespace and lowercased; an all-whitespace or
    /// empty name is rejected as invalid input.
    pub fn add(&mut self, name: &str, entity_type: EntityType) -> Result<()> {
        let words: Vec<String> = name.split_whitespace().map(|w| w.to_lowercase()).collect();
        if words.is_empty() {
            return Err(LanciaError::invalid_input(format!(
                "gazetteer name must contain at least one word: {name:?}"
            )));
        }

        let bucket = self.index.entry(words[0].clone()).or_default();
        bucket.push(GazetteerEntry { words, entity_type });
        bucket.sort_by(|a, b| b.words.len().cmp(&a.words.len()));
        self.len += 1;
        Ok(())
    }

    /// Number of entries in the gazetteer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the gazetteer has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find the longest entry matching `words` starting at index `at`.
    ///
    /// Returns the number of words consumed and the entity type.
    pub fn longest_match(&self, words: &[&str], at: usize) -> Option<(usize, EntityType)> {
        let first = words.get(at)?;
        let bucket = self.index.get(*first)?;

        for entry in bucket {
            let end = at + entry.words.len();
            if end > words.len() {
                continue;
            }
            if entry
                .words
                .iter()
                .zip(&words[at..end])
                .all(|(entry_word, word)| entry_word == word)
            {
                return Some((entry.words.len(), entry.entity_type));
            }
        }

        None
    }

    /// The set of distinct lowercased words appearing in any entry.
    ///
    /// Useful for tests and diagnostics.
    pub fn vocabulary(&self) -> HashSet<&str> {
        self.index
            .values()
            .flatten()
            .flat_map(|entry| entry.words.iter().map(|w| w.as_str()))
            .collect()
    }
}
