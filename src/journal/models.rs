//! Journal data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A practice passage written for a single word
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    /// The word the passage practices
    pub word: String,
    pub content: String,
    pub written_at: DateTime<Utc>,
    /// Critique payload from the analysis service, if one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<JournalAnalysis>,
}

impl JournalEntry {
    pub fn new(word: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            word,
            content,
            written_at: Utc::now(),
            analysis: None,
        }
    }

    pub fn with_analysis(mut self, analysis: JournalAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }
}

/// Critique of a journal passage, produced externally and stored verbatim
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalAnalysis {
    /// 0-100
    pub eloquence_score: u8,
    pub tone: String,
    pub vocabulary_richness: String,
    pub critique: String,
    pub suggestion: String,
}
