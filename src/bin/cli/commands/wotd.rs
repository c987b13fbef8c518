use anyhow::Result;

use crate::app::App;
use crate::render::terminal::render_word_card;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let entry = app.lexicon.word_of_the_day();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        OutputFormat::Plain => {
            println!("Word of the day");
            println!();
            println!("{}", render_word_card(entry, use_color));
        }
    }

    Ok(())
}
