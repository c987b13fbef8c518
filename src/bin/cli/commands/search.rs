use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::render::terminal::render_word_card;
use crate::OutputFormat;

pub fn run(app: &App, word: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let entry = app.lookup(word)?;

    app.history.record(&entry.word)?;
    app.profile.record_search(&entry.word, Utc::now())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        OutputFormat::Plain => {
            println!("{}", render_word_card(&entry, use_color));
            if app.vault.contains(&entry.word)? {
                println!();
                println!("Saved in your vault (mastery level {}).", entry.srs_level);
            }
        }
    }

    Ok(())
}
