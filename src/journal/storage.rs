//! Journal storage
//!
//! One JSON file per entry:
//! ```text
//! <data_dir>/journal/{entry-id}.json
//! ```

use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use crate::storage::{Result, StorageError};

use super::models::JournalEntry;

/// Storage for journal entries
pub struct JournalStorage {
    journal_dir: PathBuf,
}

impl JournalStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let journal_dir = data_dir.join("journal");
        fs::create_dir_all(&journal_dir)?;

        Ok(Self { journal_dir })
    }

    fn entry_path(&self, id: Uuid) -> PathBuf {
        self.journal_dir.join(format!("{}.json", id))
    }

    pub fn save_entry(&self, entry: &JournalEntry) -> Result<()> {
        let path = self.entry_path(entry.id);
        fs::write(path, serde_json::to_string_pretty(entry)?)?;
        Ok(())
    }

    pub fn get_entry(&self, id: Uuid) -> Result<JournalEntry> {
        let path = self.entry_path(id);
        if !path.exists() {
            return Err(StorageError::EntryNotFound(id));
        }

        let content = fs::read_to_string(path)?;
        let entry: JournalEntry = serde_json::from_str(&content)?;
        Ok(entry)
    }

    /// List all entries, newest first
    pub fn list_entries(&self) -> Result<Vec<JournalEntry>> {
        let mut entries = Vec::new();

        if !self.journal_dir.exists() {
            return Ok(entries);
        }

        for dir_entry in fs::read_dir(&self.journal_dir)? {
            let path = dir_entry?.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                if let Ok(content) = fs::read_to_string(&path) {
                    if let Ok(entry) = serde_json::from_str::<JournalEntry>(&content) {
                        entries.push(entry);
                    }
                }
            }
        }

        entries.sort_by(|a, b| b.written_at.cmp(&a.written_at));
        Ok(entries)
    }

    /// Entries practicing a given word, newest first
    pub fn entries_for_word(&self, word: &str) -> Result<Vec<JournalEntry>> {
        let mut entries = self.list_entries()?;
        entries.retain(|e| e.word.eq_ignore_ascii_case(word));
        Ok(entries)
    }

    pub fn delete_entry(&self, id: Uuid) -> Result<()> {
        let path = self.entry_path(id);
        if !path.exists() {
            return Err(StorageError::EntryNotFound(id));
        }

        fs::remove_file(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_save_and_list() {
        let dir = TempDir::new().unwrap();
        let storage = JournalStorage::new(dir.path().to_path_buf()).unwrap();

        let first = JournalEntry::new("petrichor".to_string(), "After the storm...".to_string());
        storage.save_entry(&first).unwrap();

        let entries = storage.list_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "petrichor");
    }

    #[test]
    fn test_entries_for_word_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let storage = JournalStorage::new(dir.path().to_path_buf()).unwrap();

        storage
            .save_entry(&JournalEntry::new(
                "Petrichor".to_string(),
                "First.".to_string(),
            ))
            .unwrap();
        storage
            .save_entry(&JournalEntry::new(
                "Ineffable".to_string(),
                "Second.".to_string(),
            ))
            .unwrap();

        let entries = storage.entries_for_word("petrichor").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "First.");
    }

    #[test]
    fn test_delete_missing_entry_fails() {
        let dir = TempDir::new().unwrap();
        let storage = JournalStorage::new(dir.path().to_path_buf()).unwrap();

        assert!(storage.delete_entry(Uuid::new_v4()).is_err());
    }
}
