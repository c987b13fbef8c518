//! The vault: the user's saved word collection
//!
//! The vault is the sole durable owner of vocabulary entries. Review
//! sessions work on snapshots and hand their results back here as a merge.

pub mod storage;

pub use storage::{VaultError, VaultStorage};
