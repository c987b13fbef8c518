//! User settings

pub mod models;
pub mod storage;

pub use models::{Complexity, Dialect, Theme, UserSettings};
pub use storage::SettingsStorage;
