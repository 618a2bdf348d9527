//! The immutable resource bundle.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::entity::gazetteer::{Gazetteer, GazetteerSpec};
use crate::error::{LanciaError, Result};
use crate::intent::lexicon::{IntentLexicon, IntentSpec};
use crate::resources::defaults;

/// Process-wide immutable linguistic data: stopword set, entity gazetteer,
/// and intent lexicon.
///
/// A bundle is loaded at most once per analyzer instance and never mutated
/// afterwards; its parts are behind `Arc`s and safe for unsynchronized
/// concurrent reads. Construction either succeeds completely or fails with
/// an explicit error — there is no partially-initialized bundle.
///
/// # Examples
///
/// Compiled-in defaults:
///
/// ```
/// use lancia::resources::ResourceBundle;
///
/// let bundle = ResourceBundle::default();
/// assert!(bundle.stop_words().contains("il"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceBundle {
    stop_words: Arc<HashSet<String>>,
    gazetteer: Arc<Gazetteer>,
    lexicon: Arc<IntentLexicon>,
}

impl ResourceBundle {
    /// Build a bundle from its parts.
    pub fn new(
        stop_words: HashSet<String>,
        gazetteer: Gazetteer,
        lexicon: IntentLexicon,
    ) -> Self {
        ResourceBundle {
            stop_words: Arc::new(stop_words),
            gazetteer: Arc::new(gazetteer),
            lexicon: Arc::new(lexicon),
        }
    }

    /// Load a bundle from a directory holding the three resource files:
    /// `stopwords.json`, `gazetteer.json`, and `intents.json`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        Self::from_files(
            dir.join("stopwords.json"),
            dir.join("gazetteer.json"),
            dir.join("intents.json"),
        )
    }

    /// Load a bundle from explicit resource file paths.
    ///
    /// Any missing or malformed file fails the whole load with a
    /// [`LanciaError::Resource`]; nothing is constructed on failure.
    pub fn from_files<P: AsRef<Path>>(
        stopwords_path: P,
        gazetteer_path: P,
        intents_path: P,
    ) -> Result<Self> {
        let words: Vec<String> = read_json(stopwords_path.as_ref(), "stopword list")?;
        let gazetteer_spec: GazetteerSpec = read_json(gazetteer_path.as_ref(), "gazetteer")?;
        let intent_specs: Vec<IntentSpec> = read_json(intents_path.as_ref(), "intent lexicon")?;

        let stop_words: HashSet<String> = words.into_iter().map(|w| w.to_lowercase()).collect();
        let gazetteer = Gazetteer::from_spec(&gazetteer_spec)?;
        let lexicon = IntentLexicon::from_specs(intent_specs)?;

        info!(
            stop_words = stop_words.len(),
            gazetteer_entries = gazetteer.len(),
            intents = lexicon.len(),
            "loaded resource bundle"
        );

        Ok(Self::new(stop_words, gazetteer, lexicon))
    }

    /// The stopword set.
    pub fn stop_words(&self) -> &Arc<HashSet<String>> {
        &self.stop_words
    }

    /// The entity gazetteer.
    pub fn gazetteer(&self) -> &Arc<Gazetteer> {
        &self.gazetteer
    }

    /// The intent lexicon.
    pub fn lexicon(&self) -> &Arc<IntentLexicon> {
        &self.lexicon
    }
}

impl Default for ResourceBundle {
    /// The compiled-in Italian + English defaults.
    fn default() -> Self {
        Self::new(
            defaults::default_stop_words(),
            defaults::default_gazetteer(),
            defaults::default_intent_lexicon(),
        )
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        LanciaError::resource(format!("cannot read {what} from {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        LanciaError::resource(format!("malformed {what} in {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bundle() {
        let bundle = ResourceBundle::default();

        assert!(bundle.stop_words().contains("il"));
        assert!(!bundle.gazetteer().is_empty());
        assert!(!bundle.lexicon().is_empty());
    }

    #[test]
    fn test_missing_file_fails_fast() {
        let err = ResourceBundle::from_dir("/nonexistent/resources").unwrap_err();

        match err {
            LanciaError::Resource(msg) => assert!(msg.contains("stopword list")),
            other => panic!("expected a resource error, got {other:?}"),
        }
    }

    #[test]
    fn test_bundle_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResourceBundle>();
    }
}
