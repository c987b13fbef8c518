use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Utc;

use lexicon_lib::srs::scheduler::preview_intervals;
use lexicon_lib::srs::{build_study_queue, select_due, Judgment, ReviewSession, StudyMode};
use lexicon_lib::vocabulary::VocabularyEntry;

use crate::app::App;
use crate::render::terminal::{paint, Color};

/// What the learner typed at a prompt
enum Input {
    Line(String),
    Quit,
}

pub fn run(app: &App, all: bool, limit: Option<usize>, use_color: bool) -> Result<()> {
    let entries = app.vault.list()?;
    if entries.is_empty() {
        println!("Nothing to study. Save a word with 'fav add <word>' first.");
        return Ok(());
    }

    let now = Utc::now();
    let mode = if all { StudyMode::All } else { StudyMode::Due };
    if mode == StudyMode::Due && select_due(&entries, now).is_empty() {
        println!("Nothing is due yet; studying the whole vault instead.");
    }

    let mut queue = build_study_queue(&entries, mode, now);
    if let Some(limit) = limit {
        queue.truncate(limit);
    }

    let total = queue.len();
    println!(
        "Studying {} words. Enter reveals the answer, h/g/e records a judgment, q quits.",
        total
    );
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = ReviewSession::start(queue);

    while !session.is_complete() {
        let Some(entry) = session.current().cloned() else {
            break;
        };

        print_front(&entry, session.current_index() + 1, total, use_color);

        print!("  [Enter] reveal, [q] quit > ");
        io::stdout().flush()?;
        match read_input(&mut lines) {
            Input::Quit => return finish(app, session.cancel(), use_color),
            Input::Line(_) => {}
        }

        session = session.reveal()?;
        print_back(&entry, use_color);

        let judgment = loop {
            let [hard, good, easy] = preview_intervals(entry.srs_level);
            print!(
                "  [h]ard ({}), [g]ood ({}), [e]asy ({}), [q]uit > ",
                hard, good, easy
            );
            io::stdout().flush()?;

            match read_input(&mut lines) {
                Input::Quit => return finish(app, session.cancel(), use_color),
                Input::Line(line) => match parse_judgment(&line) {
                    Some(judgment) => break judgment,
                    None => println!("  Please answer h, g, e or q."),
                },
            }
        };

        session = session.submit(judgment, Utc::now())?;
        println!();
    }

    println!("{}", paint("Session complete!", Color::GREEN, use_color));
    finish(app, session.into_items(), use_color)
}

fn print_front(entry: &VocabularyEntry, position: usize, total: usize, use_color: bool) {
    let mut headline = paint(&entry.word, Color::BOLD, use_color);
    if let Some(phonetic) = &entry.phonetic {
        headline.push(' ');
        headline.push_str(&paint(phonetic, Color::CYAN, use_color));
    }
    println!("[{}/{}] {}", position, total, headline);
}

fn print_back(entry: &VocabularyEntry, use_color: bool) {
    for definition in &entry.definitions {
        println!("  {}", definition);
    }
    for example in &entry.examples {
        println!("{}", paint(&format!("  \"{}\"", example), Color::GRAY, use_color));
    }
}

fn read_input(lines: &mut impl Iterator<Item = io::Result<String>>) -> Input {
    match lines.next() {
        Some(Ok(line)) => {
            let line = line.trim().to_lowercase();
            if line == "q" || line == "quit" {
                Input::Quit
            } else {
                Input::Line(line)
            }
        }
        // Closed stdin ends the session like an explicit quit
        _ => Input::Quit,
    }
}

fn parse_judgment(line: &str) -> Option<Judgment> {
    match line {
        "h" | "hard" | "1" => Some(Judgment::Hard),
        "g" | "good" | "2" => Some(Judgment::Good),
        "e" | "easy" | "3" => Some(Judgment::Easy),
        _ => None,
    }
}

/// Bank the session results: merge reviewed words into the vault and
/// refresh the profile. Partial progress counts.
fn finish(app: &App, items: Vec<VocabularyEntry>, use_color: bool) -> Result<()> {
    app.vault.merge_reviewed(&items)?;

    let entries = app.vault.list()?;
    let stats = app.profile.record_study(&entries, Utc::now())?;

    let now = Utc::now();
    let due = entries.iter().filter(|e| e.is_due(now)).count();
    println!(
        "{}",
        paint(
            &format!(
                "Vault: {} words, {} due. Streak: {} days.",
                entries.len(),
                due,
                stats.streak
            ),
            Color::DIM,
            use_color
        )
    );

    Ok(())
}
