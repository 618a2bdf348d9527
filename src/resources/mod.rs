//! Shared linguistic resources.
//!
//! The [`ResourceBundle`] holds everything the analysis components read:
//! the stopword set, the entity gazetteer, and the intent lexicon. It is
//! built once — from the compiled-in defaults or from JSON files — and never
//! mutated afterwards, so it can be shared freely across threads without
//! synchronization. Tests inject fixture bundles the same way production
//! code loads real ones; nothing here is a hidden global.

pub mod bundle;
pub mod defaults;

pub use bundle::ResourceBundle;
