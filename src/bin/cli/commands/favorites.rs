use anyhow::{Context, Result};
use chrono::Utc;

use crate::app::App;
use crate::render::terminal::render_vault_line;
use crate::OutputFormat;

pub fn run_list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let entries = app.vault.list()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Plain => {
            if entries.is_empty() {
                println!("The vault is empty. Save a word with 'fav add <word>'.");
                return Ok(());
            }

            let now = Utc::now();
            let due = entries.iter().filter(|e| e.is_due(now)).count();

            for entry in &entries {
                println!("{}", render_vault_line(entry, use_color));
            }
            println!();
            println!("{} words, {} due for review", entries.len(), due);
        }
    }

    Ok(())
}

pub fn run_add(app: &App, word: &str) -> Result<()> {
    let entry = app.lookup(word)?;
    if app.vault.contains(&entry.word)? {
        println!("'{}' is already in the vault.", entry.word);
        return Ok(());
    }

    let saved = app
        .vault
        .add(entry, Utc::now())
        .context("Failed to save the word")?;

    println!("Saved '{}' to the vault. It is due for review now.", saved.word);
    Ok(())
}

pub fn run_remove(app: &App, word: &str) -> Result<()> {
    app.vault.remove(word)?;
    println!("Removed '{}' from the vault.", word);
    Ok(())
}
