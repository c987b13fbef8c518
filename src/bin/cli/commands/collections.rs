use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{paint, render_word_card, Color};
use crate::OutputFormat;

pub fn run(app: &App, id: Option<&str>, format: &OutputFormat, use_color: bool) -> Result<()> {
    match id {
        Some(id) => show(app, id, format, use_color),
        None => list(app, format, use_color),
    }
}

fn list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let collections = app.lexicon.collections();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = collections
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "id": c.id,
                        "title": c.title,
                        "description": c.description,
                        "wordCount": c.words.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for collection in collections {
                println!(
                    "{:<8} {} {}",
                    collection.id,
                    paint(&collection.title, Color::BOLD, use_color),
                    paint(
                        &format!("({} words)", collection.words.len()),
                        Color::DIM,
                        use_color
                    ),
                );
                println!("         {}", collection.description);
            }
        }
    }

    Ok(())
}

fn show(app: &App, id: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let collection = app
        .lexicon
        .collection(id)
        .ok_or_else(|| anyhow::anyhow!("Collection '{}' not found", id))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(collection)?);
        }
        OutputFormat::Plain => {
            println!("{}", paint(&collection.title, Color::BOLD, use_color));
            println!("{}", collection.description);

            for entry in &collection.words {
                println!();
                println!("{}", render_word_card(entry, use_color));
            }
        }
    }

    Ok(())
}
