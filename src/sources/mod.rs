//! Definition sources
//!
//! Where dictionary entries come from. The online definition backend is a
//! collaborator behind [`DefinitionSource`]; the app consumes whatever a
//! source returns as an opaque, already-validated payload. The only source
//! shipped in this crate is the built-in offline lexicon.

pub mod builtin;

use thiserror::Error;

use crate::vocabulary::VocabularyEntry;

pub use builtin::{BuiltinLexicon, Collection};

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No definition found for '{0}'")]
    NotFound(String),

    #[error("Definition service error: {0}")]
    Service(String),
}

/// A provider of dictionary definitions
pub trait DefinitionSource {
    fn lookup(&self, word: &str) -> Result<VocabularyEntry, LookupError>;
}
