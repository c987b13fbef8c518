//! Shared storage plumbing
//!
//! Every durable store in Lexicon lives under a single data directory as
//! pretty-printed JSON, so a user can inspect or back up their data with
//! ordinary tools.

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Default application data directory (e.g. `~/.local/share/lexicon`)
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|p| p.join("lexicon"))
        .ok_or(StorageError::DataDirNotFound)
}
