use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, clear: bool, format: &OutputFormat) -> Result<()> {
    if clear {
        app.history.clear()?;
        println!("Search history cleared.");
        return Ok(());
    }

    let history = app.history.list()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
        OutputFormat::Plain => {
            if history.is_empty() {
                println!("No searches yet.");
                return Ok(());
            }

            for word in &history {
                println!("{}", word);
            }
        }
    }

    Ok(())
}
