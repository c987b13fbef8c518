//! Search history
//!
//! A capped, deduplicating list of the words the user has looked up,
//! most recent first.

pub mod storage;

pub use storage::HistoryStorage;
