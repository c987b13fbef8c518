//! Profile storage

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::storage::Result;
use crate::vocabulary::VocabularyEntry;

use super::models::UserStats;

/// Storage for the user profile
pub struct ProfileStorage {
    profile_path: PathBuf,
}

impl ProfileStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;

        Ok(Self {
            profile_path: data_dir.join("profile.json"),
        })
    }

    /// Load the profile, creating a fresh one when none exists yet
    pub fn load(&self) -> UserStats {
        if !self.profile_path.exists() {
            return UserStats::default();
        }

        match fs::read_to_string(&self.profile_path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()))
        {
            Ok(stats) => stats,
            Err(e) => {
                log::warn!("Failed to load profile: {}. Starting fresh.", e);
                UserStats::default()
            }
        }
    }

    pub fn save(&self, stats: &UserStats) -> Result<()> {
        fs::write(&self.profile_path, serde_json::to_string_pretty(stats)?)?;
        Ok(())
    }

    /// Record a dictionary lookup: streak, daily goal, recent words
    pub fn record_search(&self, word: &str, now: DateTime<Utc>) -> Result<UserStats> {
        let mut stats = self.load();
        stats.touch_day(now.date_naive());
        stats.daily_progress += 1;
        stats.remember_word(word);
        self.save(&stats)?;
        Ok(stats)
    }

    /// Record a finished (or cancelled-with-progress) study session and
    /// refresh the vault-derived aggregates
    pub fn record_study(
        &self,
        vault_entries: &[VocabularyEntry],
        now: DateTime<Utc>,
    ) -> Result<UserStats> {
        let mut stats = self.load();
        stats.touch_day(now.date_naive());
        stats.absorb_vault(vault_entries);
        self.save(&stats)?;
        Ok(stats)
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

    #[test]
    fn test_record_search_persists_progress() {
        let dir = TempDir::new().unwrap();
        let storage = ProfileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.record_search("petrichor", t0()).unwrap();
        let stats = storage.record_search("ineffable", t0()).unwrap();

        assert_eq!(stats.daily_progress, 2);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.recent_words, ["ineffable", "petrichor"]);

        // Reloading sees the same state
        assert_eq!(storage.load().daily_progress, 2);
    }

    #[test]
    fn test_record_study_refreshes_aggregates() {
        let dir = TempDir::new().unwrap();
        let storage = ProfileStorage::new(dir.path().to_path_buf()).unwrap();

        let mut entry = VocabularyEntry::new(
            "Petrichor".to_string(),
            "Noun".to_string(),
            vec!["The smell of rain on dry earth.".to_string()],
        );
        entry.srs_level = 6;

        let stats = storage.record_study(&[entry], t0()).unwrap();

        assert_eq!(stats.words_mastered, 1);
        assert_eq!(stats.lexical_depth, 6);
        assert_eq!(stats.streak, 1);
    }
}
