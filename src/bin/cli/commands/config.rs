use anyhow::{bail, Result};

use lexicon_lib::settings::{Complexity, Dialect, Theme};

use crate::app::App;
use crate::OutputFormat;

pub fn run_get(app: &App, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&app.settings)?);
        }
        OutputFormat::Plain => {
            let settings = &app.settings;
            println!("theme         {:?}", settings.theme);
            println!("dialect       {:?}", settings.dialect);
            println!("notifications {}", settings.notifications);
            println!("offline       {}", settings.offline_enabled);
            println!("complexity    {:?}", settings.complexity);
        }
    }

    Ok(())
}

pub fn run_set(app: &App, key: &str, value: &str) -> Result<()> {
    let mut settings = app.settings.clone();
    let value_lower = value.to_lowercase();

    match key {
        "theme" => {
            settings.theme = match value_lower.as_str() {
                "light" => Theme::Light,
                "dark" => Theme::Dark,
                "parchment" => Theme::Parchment,
                _ => bail!("Unknown theme '{}'. Use light, dark or parchment.", value),
            };
        }
        "dialect" => {
            settings.dialect = match value_lower.as_str() {
                "uk" => Dialect::Uk,
                "us" => Dialect::Us,
                _ => bail!("Unknown dialect '{}'. Use uk or us.", value),
            };
        }
        "notifications" => {
            settings.notifications = parse_bool(&value_lower)?;
        }
        "offline" => {
            settings.offline_enabled = parse_bool(&value_lower)?;
        }
        "complexity" => {
            settings.complexity = match value_lower.as_str() {
                "standard" => Complexity::Standard,
                "polymath" => Complexity::Polymath,
                _ => bail!("Unknown complexity '{}'. Use standard or polymath.", value),
            };
        }
        _ => bail!(
            "Unknown setting '{}'. Keys: theme, dialect, notifications, offline, complexity.",
            key
        ),
    }

    app.settings_storage.save(&settings)?;
    println!("Set {} to {}.", key, value_lower);
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        _ => bail!("Expected a boolean (true/false), got '{}'", value),
    }
}
