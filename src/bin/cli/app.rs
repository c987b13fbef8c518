use anyhow::{Context, Result};

use lexicon_lib::history::HistoryStorage;
use lexicon_lib::journal::JournalStorage;
use lexicon_lib::profile::ProfileStorage;
use lexicon_lib::settings::{SettingsStorage, UserSettings};
use lexicon_lib::sources::{BuiltinLexicon, DefinitionSource};
use lexicon_lib::storage;
use lexicon_lib::vault::VaultStorage;
use lexicon_lib::vocabulary::VocabularyEntry;

/// Shared application state for CLI commands
pub struct App {
    pub vault: VaultStorage,
    pub settings_storage: SettingsStorage,
    pub settings: UserSettings,
    pub history: HistoryStorage,
    pub profile: ProfileStorage,
    pub journal: JournalStorage,
    pub lexicon: BuiltinLexicon,
}

impl App {
    /// Initialize from the default data directory
    pub fn new() -> Result<Self> {
        let data_dir = storage::default_data_dir().context("Failed to get data directory")?;

        let vault =
            VaultStorage::new(data_dir.clone()).context("Failed to initialize the vault")?;
        let settings_storage =
            SettingsStorage::new(data_dir.clone()).context("Failed to initialize settings")?;
        let settings = settings_storage.load();
        let history = HistoryStorage::new(data_dir.clone())
            .context("Failed to initialize search history")?;
        let profile =
            ProfileStorage::new(data_dir.clone()).context("Failed to initialize profile")?;
        let journal =
            JournalStorage::new(data_dir).context("Failed to initialize journal storage")?;

        Ok(Self {
            vault,
            settings_storage,
            settings,
            history,
            profile,
            journal,
            lexicon: BuiltinLexicon::new(),
        })
    }

    /// Look a word up: the vault first (it carries the review state), then
    /// the built-in lexicon
    pub fn lookup(&self, word: &str) -> Result<VocabularyEntry> {
        if let Ok(entry) = self.vault.get(word) {
            return Ok(entry);
        }

        self.lexicon
            .lookup(word)
            .with_context(|| format!("'{}' is not in the offline lexicon", word))
    }
}
