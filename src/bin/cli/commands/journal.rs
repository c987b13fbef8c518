use anyhow::{bail, Context, Result};
use uuid::Uuid;

use lexicon_lib::journal::JournalEntry;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run_list(app: &App, word: Option<&str>, format: &OutputFormat) -> Result<()> {
    let entries = match word {
        Some(word) => app.journal.entries_for_word(word)?,
        None => app.journal.list_entries()?,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Plain => {
            if entries.is_empty() {
                println!("No journal entries yet.");
                return Ok(());
            }

            for entry in &entries {
                let preview: String = entry.content.chars().take(48).collect();
                println!(
                    "{}  {}  {:<16} {}",
                    entry.id,
                    entry.written_at.format("%Y-%m-%d"),
                    entry.word,
                    preview
                );
            }
        }
    }

    Ok(())
}

pub fn run_add(app: &App, word: &str, content: Option<String>) -> Result<()> {
    let Some(content) = content.filter(|c| !c.trim().is_empty()) else {
        bail!("Nothing to save. Pass --content or pipe the passage via --content -");
    };

    // Canonicalizes casing and rejects words the lexicon doesn't know
    let entry = app.lookup(word)?;

    let entry = JournalEntry::new(entry.word, content);
    app.journal.save_entry(&entry)?;

    println!("Journal entry {} saved.", entry.id);
    Ok(())
}

pub fn run_show(app: &App, id: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let id = Uuid::parse_str(id).context("Invalid entry id")?;
    let entry = app.journal.get_entry(id)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        OutputFormat::Plain => {
            println!(
                "{} {}",
                paint(&entry.word, Color::BOLD, use_color),
                paint(
                    &entry.written_at.format("%Y-%m-%d %H:%M").to_string(),
                    Color::DIM,
                    use_color
                )
            );
            println!();
            println!("{}", entry.content);

            if let Some(analysis) = &entry.analysis {
                println!();
                println!(
                    "Eloquence {}/100, tone: {}, richness: {}",
                    analysis.eloquence_score, analysis.tone, analysis.vocabulary_richness
                );
                println!("{}", analysis.critique);
                println!("{}", paint(&analysis.suggestion, Color::ITALIC, use_color));
            }
        }
    }

    Ok(())
}
