//! Settings storage

use std::fs;
use std::path::PathBuf;

use crate::storage::Result;

use super::models::UserSettings;

/// Storage for user settings
pub struct SettingsStorage {
    settings_path: PathBuf,
}

impl SettingsStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;

        Ok(Self {
            settings_path: data_dir.join("settings.json"),
        })
    }

    /// Load settings, falling back to defaults when the file is missing
    /// or unreadable. A corrupt settings file never blocks startup.
    pub fn load(&self) -> UserSettings {
        if !self.settings_path.exists() {
            return UserSettings::default();
        }

        match fs::read_to_string(&self.settings_path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()))
        {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {}. Using defaults.", e);
                UserSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &UserSettings) -> Result<()> {
        fs::write(
            &self.settings_path,
            serde_json::to_string_pretty(settings)?,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::settings::models::Theme;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let storage = SettingsStorage::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(storage.load(), UserSettings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let storage = SettingsStorage::new(dir.path().to_path_buf()).unwrap();

        let mut settings = UserSettings::default();
        settings.theme = Theme::Dark;
        settings.notifications = false;
        storage.save(&settings).unwrap();

        assert_eq!(storage.load(), settings);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let storage = SettingsStorage::new(dir.path().to_path_buf()).unwrap();

        fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        assert_eq!(storage.load(), UserSettings::default());
    }
}
