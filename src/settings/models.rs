//! Settings data models

use serde::{Deserialize, Serialize};

/// Color theme for the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Light,
    Dark,
    Parchment,
}

/// Preferred English dialect for definitions and pronunciation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Uk,
    Us,
}

/// How elaborate the requested definitions should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Complexity {
    Standard,
    Polymath,
}

/// User preferences, persisted as `settings.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub theme: Theme,
    pub dialect: Dialect,
    pub notifications: bool,
    pub offline_enabled: bool,
    pub complexity: Complexity,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            dialect: Dialect::Uk,
            notifications: true,
            offline_enabled: true,
            complexity: Complexity::Standard,
        }
    }
}
