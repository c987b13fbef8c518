//! Search history storage

use std::fs;
use std::path::PathBuf;

use crate::storage::Result;

/// Maximum number of remembered searches
const HISTORY_LIMIT: usize = 50;

/// Storage for the search history list
pub struct HistoryStorage {
    history_path: PathBuf,
}

impl HistoryStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;

        Ok(Self {
            history_path: data_dir.join("search_history.json"),
        })
    }

    /// List remembered searches, most recent first
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.history_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.history_path)?;
        let history: Vec<String> = serde_json::from_str(&content)?;
        Ok(history)
    }

    /// Record a search, moving repeats to the front and trimming the tail
    pub fn record(&self, word: &str) -> Result<()> {
        let mut history = self.list()?;
        history.retain(|w| !w.eq_ignore_ascii_case(word));
        history.insert(0, word.to_string());
        history.truncate(HISTORY_LIMIT);

        fs::write(&self.history_path, serde_json::to_string_pretty(&history)?)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.history_path.exists() {
            fs::remove_file(&self.history_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_record_moves_repeats_to_front() {
        let dir = TempDir::new().unwrap();
        let storage = HistoryStorage::new(dir.path().to_path_buf()).unwrap();

        storage.record("petrichor").unwrap();
        storage.record("ineffable").unwrap();
        storage.record("Petrichor").unwrap();

        assert_eq!(storage.list().unwrap(), ["Petrichor", "ineffable"]);
    }

    #[test]
    fn test_history_is_capped() {
        let dir = TempDir::new().unwrap();
        let storage = HistoryStorage::new(dir.path().to_path_buf()).unwrap();

        for i in 0..(HISTORY_LIMIT + 10) {
            storage.record(&format!("word{}", i)).unwrap();
        }

        let history = storage.list().unwrap();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0], format!("word{}", HISTORY_LIMIT + 9));
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let storage = HistoryStorage::new(dir.path().to_path_buf()).unwrap();

        storage.record("petrichor").unwrap();
        storage.clear().unwrap();

        assert!(storage.list().unwrap().is_empty());
    }
}
