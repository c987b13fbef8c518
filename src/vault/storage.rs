//! Storage operations for the word vault
//!
//! The whole collection lives in a single JSON array file:
//! ```text
//! <data_dir>/favorites.json
//! ```
//! newest saves first, which is also the order the UI lists them in.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::srs;
use crate::vocabulary::VocabularyEntry;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Word not found in vault: {0}")]
    WordNotFound(String),
}

pub type Result<T> = std::result::Result<T, VaultError>;

/// Storage manager for the saved word collection
pub struct VaultStorage {
    vault_path: PathBuf,
}

impl VaultStorage {
    /// Create a vault rooted in the given data directory
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;

        Ok(Self {
            vault_path: data_dir.join("favorites.json"),
        })
    }

    /// List all saved words, newest first
    pub fn list(&self) -> Result<Vec<VocabularyEntry>> {
        if !self.vault_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.vault_path)?;
        let entries: Vec<VocabularyEntry> = serde_json::from_str(&content)?;
        Ok(entries)
    }

    fn save_all(&self, entries: &[VocabularyEntry]) -> Result<()> {
        fs::write(&self.vault_path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }

    /// Whether a word is already saved (case-insensitive)
    pub fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|e| e.is_word(word)))
    }

    /// Get a saved word
    pub fn get(&self, word: &str) -> Result<VocabularyEntry> {
        self.list()?
            .into_iter()
            .find(|e| e.is_word(word))
            .ok_or_else(|| VaultError::WordNotFound(word.to_string()))
    }

    /// Save a word to the vault.
    ///
    /// New entries start at mastery level 0 and are immediately due for
    /// review. Saving a word that is already in the vault is a no-op and
    /// returns the stored entry.
    pub fn add(&self, entry: VocabularyEntry, now: DateTime<Utc>) -> Result<VocabularyEntry> {
        let mut entries = self.list()?;

        if let Some(existing) = entries.iter().find(|e| e.is_word(&entry.word)) {
            return Ok(existing.clone());
        }

        let mut entry = entry;
        entry.srs_level = 0;
        entry.next_review_at = Some(now);

        entries.insert(0, entry.clone());
        self.save_all(&entries)?;

        log::debug!("Saved '{}' to the vault", entry.word);
        Ok(entry)
    }

    /// Remove a word from the vault
    pub fn remove(&self, word: &str) -> Result<()> {
        let mut entries = self.list()?;
        let before = entries.len();
        entries.retain(|e| !e.is_word(word));

        if entries.len() == before {
            return Err(VaultError::WordNotFound(word.to_string()));
        }

        self.save_all(&entries)
    }

    /// Save the word if absent, remove it if present.
    /// Returns `true` when the word ended up saved.
    pub fn toggle(&self, entry: VocabularyEntry, now: DateTime<Utc>) -> Result<bool> {
        if self.contains(&entry.word)? {
            self.remove(&entry.word)?;
            Ok(false)
        } else {
            self.add(entry, now)?;
            Ok(true)
        }
    }

    /// Merge entries updated by a review session back into the collection,
    /// matched by word (case-insensitive)
    pub fn merge_reviewed(&self, reviewed: &[VocabularyEntry]) -> Result<()> {
        let mut entries = self.list()?;
        srs::merge_reviewed(&mut entries, reviewed);
        self.save_all(&entries)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use tempfile::TempDir;

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    fn entry(word: &str) -> VocabularyEntry {
        VocabularyEntry::new(
            word.to_string(),
            "Noun".to_string(),
            vec![format!("Definition of {}", word)],
        )
    }

    fn vault(dir: &TempDir) -> VaultStorage {
        VaultStorage::new(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_add_initializes_schedule() {
        let dir = TempDir::new().unwrap();
        let vault = vault(&dir);

        let saved = vault.add(entry("Petrichor"), t0()).unwrap();

        assert_eq!(saved.srs_level, 0);
        assert_eq!(saved.next_review_at, Some(t0()));
        assert!(saved.is_due(t0()));
    }

    #[test]
    fn test_add_is_newest_first_and_dedups() {
        let dir = TempDir::new().unwrap();
        let vault = vault(&dir);

        vault.add(entry("Petrichor"), t0()).unwrap();
        vault.add(entry("Ineffable"), t0()).unwrap();
        // Same word, different casing: no duplicate
        vault.add(entry("PETRICHOR"), t0()).unwrap();

        let words: Vec<String> = vault.list().unwrap().into_iter().map(|e| e.word).collect();
        assert_eq!(words, ["Ineffable", "Petrichor"]);
    }

    #[test]
    fn test_remove_missing_word_fails() {
        let dir = TempDir::new().unwrap();
        let vault = vault(&dir);

        assert!(matches!(
            vault.remove("Absent"),
            Err(VaultError::WordNotFound(_))
        ));
    }

    #[test]
    fn test_toggle_roundtrip() {
        let dir = TempDir::new().unwrap();
        let vault = vault(&dir);

        assert!(vault.toggle(entry("Petrichor"), t0()).unwrap());
        assert!(vault.contains("petrichor").unwrap());
        assert!(!vault.toggle(entry("petrichor"), t0()).unwrap());
        assert!(!vault.contains("Petrichor").unwrap());
    }

    #[test]
    fn test_merge_reviewed_updates_schedule() {
        let dir = TempDir::new().unwrap();
        let vault = vault(&dir);

        vault.add(entry("Petrichor"), t0()).unwrap();
        vault.add(entry("Ineffable"), t0()).unwrap();

        let mut reviewed = vault.get("Petrichor").unwrap();
        reviewed.srs_level = 2;
        reviewed.next_review_at = Some(t0() + chrono::Duration::days(7));
        vault.merge_reviewed(&[reviewed]).unwrap();

        let stored = vault.get("Petrichor").unwrap();
        assert_eq!(stored.srs_level, 2);
        assert_eq!(
            stored.next_review_at,
            Some(t0() + chrono::Duration::days(7))
        );

        // The other entry is untouched
        assert_eq!(vault.get("Ineffable").unwrap().srs_level, 0);
    }
}
