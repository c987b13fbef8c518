//! Vocabulary data model
//!
//! `VocabularyEntry` is the unit the whole application revolves around: a
//! dictionary entry enriched by the definition backend, plus the two
//! scheduling fields the review engine maintains.

pub mod models;

pub use models::{MeaningShift, PolyglotInsight, VocabularyEntry};
