//! Profile and statistics data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::vocabulary::VocabularyEntry;

/// Mastery level at which a word counts as mastered (90-day interval tier)
pub const MASTERED_LEVEL: u32 = 5;

/// How many recent searches the profile keeps
const RECENT_WORDS_LIMIT: usize = 10;

/// What an achievement rewards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AchievementKind {
    Master,
    Streak,
    Discovery,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub unlocked: bool,
    pub kind: AchievementKind,
    /// Progress toward the goal as a 0-100 percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<u32>,
}

impl Achievement {
    pub fn new(name: &str, description: &str, kind: AchievementKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            unlocked: false,
            kind,
            progress: None,
            goal: None,
        }
    }

    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = Some(goal);
        self.progress = Some(0.0);
        self
    }
}

/// The learner's profile, persisted as `profile.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub username: String,
    pub avatar: String,
    pub bio: String,
    pub rank: String,
    /// Words at or above [`MASTERED_LEVEL`]
    pub words_mastered: u32,
    /// Consecutive days with at least one study action
    pub streak: u32,
    /// Sum of mastery levels across the vault
    pub lexical_depth: u32,
    pub recent_words: Vec<String>,
    pub daily_progress: u32,
    pub daily_goal: u32,
    pub achievements: Vec<Achievement>,
    /// Last day any study action happened; drives streak bookkeeping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active_day: Option<NaiveDate>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            username: "Gezgin Bilgin".to_string(),
            avatar: "default".to_string(),
            bio: "Kelimelerin izinde...".to_string(),
            rank: "Filolog".to_string(),
            words_mastered: 0,
            streak: 0,
            lexical_depth: 0,
            recent_words: Vec::new(),
            daily_progress: 0,
            daily_goal: 5,
            achievements: starter_achievements(),
            last_active_day: None,
        }
    }
}

impl UserStats {
    /// Mark activity on `today`, extending or resetting the streak
    pub fn touch_day(&mut self, today: NaiveDate) {
        match self.last_active_day {
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => {
                self.streak += 1;
                self.daily_progress = 0;
            }
            _ => {
                self.streak = 1;
                self.daily_progress = 0;
            }
        }
        self.last_active_day = Some(today);
    }

    /// Push a word onto the recent-searches list
    pub fn remember_word(&mut self, word: &str) {
        self.recent_words.retain(|w| !w.eq_ignore_ascii_case(word));
        self.recent_words.insert(0, word.to_string());
        self.recent_words.truncate(RECENT_WORDS_LIMIT);
    }

    /// Recompute the vault-derived aggregates
    pub fn absorb_vault(&mut self, entries: &[VocabularyEntry]) {
        self.words_mastered = entries
            .iter()
            .filter(|e| e.srs_level >= MASTERED_LEVEL)
            .count() as u32;
        self.lexical_depth = entries.iter().map(|e| e.srs_level).sum();
    }
}

fn starter_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "Antikacı",
            "Latince kökenli 5 kelimeyi keşfet.",
            AchievementKind::Discovery,
        ),
        Achievement::new(
            "Kelime Mimarı",
            "50 akademik terimde ustalaş.",
            AchievementKind::Master,
        )
        .with_goal(50),
        Achievement::new(
            "Dil Bilgesi",
            "7 günlük arama serisini koru.",
            AchievementKind::Streak,
        )
        .with_goal(7),
        Achievement::new(
            "Hezarfen",
            "En yüksek karmaşıklık seviyesinin kilidini aç.",
            AchievementKind::Discovery,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn test_streak_extends_on_consecutive_days() {
        let mut stats = UserStats::default();

        stats.touch_day(day(10));
        assert_eq!(stats.streak, 1);

        stats.touch_day(day(11));
        assert_eq!(stats.streak, 2);

        // Same day twice is not double-counted
        stats.touch_day(day(11));
        assert_eq!(stats.streak, 2);
    }

    #[test]
    fn test_streak_resets_after_gap() {
        let mut stats = UserStats::default();

        stats.touch_day(day(10));
        stats.touch_day(day(11));
        stats.touch_day(day(14));

        assert_eq!(stats.streak, 1);
    }

    #[test]
    fn test_remember_word_dedups_and_caps() {
        let mut stats = UserStats::default();

        for i in 0..12 {
            stats.remember_word(&format!("word{}", i));
        }
        stats.remember_word("Word3");

        assert_eq!(stats.recent_words.len(), 10);
        assert_eq!(stats.recent_words[0], "Word3");
        assert_eq!(
            stats
                .recent_words
                .iter()
                .filter(|w| w.eq_ignore_ascii_case("word3"))
                .count(),
            1
        );
    }

    #[test]
    fn test_absorb_vault_counts_mastered_words() {
        let mut stats = UserStats::default();
        let mut entries = Vec::new();
        for (word, level) in [("alpha", 1), ("bravo", 5), ("charlie", 9)] {
            let mut e = VocabularyEntry::new(
                word.to_string(),
                "Noun".to_string(),
                vec!["A word.".to_string()],
            );
            e.srs_level = level;
            entries.push(e);
        }

        stats.absorb_vault(&entries);

        assert_eq!(stats.words_mastered, 2);
        assert_eq!(stats.lexical_depth, 15);
    }
}
