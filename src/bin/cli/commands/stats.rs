use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut stats = app.profile.load();
    let entries = app.vault.list()?;
    stats.absorb_vault(&entries);

    let now = Utc::now();
    let due = entries.iter().filter(|e| e.is_due(now)).count();

    match format {
        OutputFormat::Json => {
            let mut output = serde_json::to_value(&stats)?;
            if let Some(object) = output.as_object_mut() {
                object.insert("savedWords".to_string(), entries.len().into());
                object.insert("dueWords".to_string(), due.into());
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "{} {}",
                paint(&stats.username, Color::BOLD, use_color),
                paint(&format!("({})", stats.rank), Color::DIM, use_color)
            );
            println!();
            println!("Saved words     {}", entries.len());
            println!("Due for review  {}", due);
            println!("Words mastered  {}", stats.words_mastered);
            println!("Lexical depth   {}", stats.lexical_depth);
            println!("Streak          {} days", stats.streak);
            println!(
                "Daily goal      {}/{}",
                stats.daily_progress, stats.daily_goal
            );

            if !stats.recent_words.is_empty() {
                println!();
                println!("Recent: {}", stats.recent_words.join(", "));
            }

            let unlocked: Vec<&str> = stats
                .achievements
                .iter()
                .filter(|a| a.unlocked)
                .map(|a| a.name.as_str())
                .collect();
            if !unlocked.is_empty() {
                println!("Achievements: {}", unlocked.join(", "));
            }
        }
    }

    Ok(())
}
