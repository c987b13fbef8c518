//! Data models for vocabulary entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the word is rendered in another language (definition-backend payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolyglotInsight {
    pub language: String,
    pub word: String,
    pub meaning: String,
    pub connotation: String,
}

/// A historical shift in the word's meaning (definition-backend payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeaningShift {
    pub era: String,
    pub definition: String,
    pub context: String,
}

/// A dictionary entry for a single word
///
/// Identity is the word itself, compared case-insensitively; two entries
/// with the same word in different casing are the same entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    pub part_of_speech: String,
    pub definitions: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etymology: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub etymology_stages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connotation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub idioms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub polyglot_mirror: Vec<PolyglotInsight>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chronology: Vec<MeaningShift>,
    /// Mastery level in the spaced repetition system, 0 for new words
    #[serde(default)]
    pub srs_level: u32,
    /// When the word next comes up for review; set when saved to the vault
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_at: Option<DateTime<Utc>>,
}

impl VocabularyEntry {
    pub fn new(word: String, part_of_speech: String, definitions: Vec<String>) -> Self {
        Self {
            word,
            translation: None,
            phonetic: None,
            part_of_speech,
            definitions,
            examples: Vec::new(),
            etymology: None,
            etymology_stages: Vec::new(),
            synonyms: Vec::new(),
            register: None,
            connotation: None,
            idioms: Vec::new(),
            polyglot_mirror: Vec::new(),
            chronology: Vec::new(),
            srs_level: 0,
            next_review_at: None,
        }
    }

    /// Case-insensitive identity check
    pub fn is_word(&self, word: &str) -> bool {
        self.word.to_lowercase() == word.to_lowercase()
    }

    /// Whether the entry is due for review at `now`.
    ///
    /// An entry that has never been scheduled counts as immediately due.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.next_review_at {
            Some(due) => due <= now,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_case_insensitive() {
        let entry = VocabularyEntry::new(
            "Petrichor".to_string(),
            "Noun".to_string(),
            vec!["The smell of rain on dry earth.".to_string()],
        );

        assert!(entry.is_word("petrichor"));
        assert!(entry.is_word("PETRICHOR"));
        assert!(!entry.is_word("petrichord"));
    }

    #[test]
    fn test_unscheduled_entry_is_due() {
        let entry = VocabularyEntry::new(
            "Ineffable".to_string(),
            "Adjective".to_string(),
            vec!["Too great to be expressed in words.".to_string()],
        );

        assert!(entry.next_review_at.is_none());
        assert!(entry.is_due(Utc::now()));
    }
}
