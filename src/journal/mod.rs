//! Writing journal
//!
//! Short passages the learner writes to practice a word. Entries may carry
//! a critique produced by the external analysis service; the critique is
//! stored as received, never computed here.

pub mod models;
pub mod storage;

pub use models::{JournalAnalysis, JournalEntry};
pub use storage::JournalStorage;
