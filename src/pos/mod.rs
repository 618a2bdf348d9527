//! Part-of-speech tagging.
//!
//! A rule-based tagger: closed-class words (articles, prepositions,
//! conjunctions, pronouns) come from a lookup table, open-class words fall
//! through to suffix rules, and anything left defaults to noun. Every token
//! receives exactly one tag, so the tag sequence is always the same length
//! as the token sequence.

pub mod tag;
pub mod tagger;

pub use tag::PosTag;
pub use tagger::PosTagger;
