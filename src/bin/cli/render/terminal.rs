use lexicon_lib::srs::scheduler::format_interval;
use lexicon_lib::vocabulary::VocabularyEntry;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Render a full word card to terminal text
pub fn render_word_card(entry: &VocabularyEntry, use_color: bool) -> String {
    let mut lines = Vec::new();

    let mut headline = paint(&entry.word, Color::BOLD, use_color);
    if let Some(phonetic) = &entry.phonetic {
        headline.push(' ');
        headline.push_str(&paint(phonetic, Color::CYAN, use_color));
    }
    lines.push(headline);
    lines.push(paint(&entry.part_of_speech, Color::ITALIC, use_color));
    lines.push(String::new());

    for definition in &entry.definitions {
        lines.push(format!("  {}", definition));
    }

    for example in &entry.examples {
        lines.push(paint(&format!("  \"{}\"", example), Color::GRAY, use_color));
    }

    if let Some(etymology) = &entry.etymology {
        lines.push(String::new());
        lines.push(paint(&format!("  {}", etymology), Color::DIM, use_color));
    }

    if !entry.synonyms.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "  {} {}",
            paint("Synonyms:", Color::DIM, use_color),
            entry.synonyms.join(", ")
        ));
    }

    lines.join("\n")
}

/// One-line vault listing: word, mastery level, next review
pub fn render_vault_line(entry: &VocabularyEntry, use_color: bool) -> String {
    let schedule = match entry.next_review_at {
        Some(due) => due.format("%Y-%m-%d").to_string(),
        None => "unscheduled".to_string(),
    };

    format!(
        "{:<24} level {:<3} next {} {}",
        entry.word,
        entry.srs_level,
        schedule,
        paint(
            &format!("({})", format_interval(interval_days(entry))),
            Color::DIM,
            use_color
        ),
    )
}

fn interval_days(entry: &VocabularyEntry) -> i64 {
    lexicon_lib::srs::scheduler::interval_for_level(entry.srs_level)
}
