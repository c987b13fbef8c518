mod app;
mod commands;
mod render;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lexicon-cli", about = "Lexicon vocabulary trainer CLI", version)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a word and print its card
    Search {
        /// The word to look up
        word: String,
    },

    /// Show the word of the day
    Wotd,

    /// List curated collections, or show one by id
    Collections {
        /// Collection id (e.g. "lit-1")
        id: Option<String>,
    },

    /// Manage the saved word vault
    #[command(subcommand)]
    Fav(FavCommand),

    /// Run a flashcard review session over the vault
    Study {
        /// Study the whole vault, not just due words
        #[arg(long)]
        all: bool,
        /// Cap the number of words in the session
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the search history
    History {
        /// Clear the history instead
        #[arg(long)]
        clear: bool,
    },

    /// Show profile statistics
    Stats,

    /// Practice passages written for saved words
    #[command(subcommand)]
    Journal(JournalCommand),

    /// Get or set user settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum FavCommand {
    /// List saved words
    List,
    /// Look a word up and save it
    Add {
        /// The word to save
        word: String,
    },
    /// Remove a saved word
    Remove {
        /// The word to remove
        word: String,
    },
}

#[derive(Subcommand)]
enum JournalCommand {
    /// List journal entries
    List {
        /// Only entries practicing this word
        #[arg(long)]
        word: Option<String>,
    },
    /// Write a new entry
    Add {
        /// The word the passage practices
        word: String,
        /// Passage text (use "-" to read from stdin)
        #[arg(long)]
        content: Option<String>,
    },
    /// Show a single entry
    Show {
        /// Entry id
        id: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print current settings
    Get,
    /// Set a setting: theme, dialect, notifications, offline, complexity
    Set { key: String, value: String },
}

/// Resolve "-" as stdin, otherwise pass the content through
fn resolve_content(content: Option<String>) -> Option<String> {
    match content.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf).ok();
            Some(buf.trim_end().to_string())
        }
        _ => content,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let app = app::App::new()?;

    match cli.command {
        Command::Search { word } => {
            commands::search::run(&app, &word, &cli.format, use_color)?;
        }
        Command::Wotd => {
            commands::wotd::run(&app, &cli.format, use_color)?;
        }
        Command::Collections { id } => {
            commands::collections::run(&app, id.as_deref(), &cli.format, use_color)?;
        }
        Command::Fav(subcmd) => match subcmd {
            FavCommand::List => commands::favorites::run_list(&app, &cli.format, use_color)?,
            FavCommand::Add { word } => commands::favorites::run_add(&app, &word)?,
            FavCommand::Remove { word } => commands::favorites::run_remove(&app, &word)?,
        },
        Command::Study { all, limit } => {
            commands::study::run(&app, all, limit, use_color)?;
        }
        Command::History { clear } => {
            commands::history::run(&app, clear, &cli.format)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format, use_color)?;
        }
        Command::Journal(subcmd) => match subcmd {
            JournalCommand::List { word } => {
                commands::journal::run_list(&app, word.as_deref(), &cli.format)?;
            }
            JournalCommand::Add { word, content } => {
                let content = resolve_content(content);
                commands::journal::run_add(&app, &word, content)?;
            }
            JournalCommand::Show { id } => {
                commands::journal::run_show(&app, &id, &cli.format, use_color)?;
            }
        },
        Command::Config(subcmd) => match subcmd {
            ConfigCommand::Get => commands::config::run_get(&app, &cli.format)?,
            ConfigCommand::Set { key, value } => commands::config::run_set(&app, &key, &value)?,
        },
    }

    Ok(())
}

/// Check if stdout is a terminal
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
