//! Review queue and study sessions
//!
//! A study session is a single flashcard pass over a fixed set of words.
//! The session is a value, not a mutable object: every transition consumes
//! the session and returns the updated one, so stale handles cannot be
//! replayed and the whole flow is trivially testable.
//!
//! ## State transitions
//!
//! ```text
//! AwaitingReveal -> reveal -> AwaitingJudgment -> submit -+-> AwaitingReveal (next word)
//!                                                         +-> Complete (last word)
//! ```
//!
//! `cancel` is valid from any state and yields the words as updated so far;
//! a learner who quits mid-session keeps the judgments already made.
//!
//! The session owns a snapshot of the words. The durable collection is only
//! touched when the caller merges the session output back with
//! [`merge_reviewed`].

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::scheduler::{compute_next_schedule, Judgment};
use crate::vocabulary::VocabularyEntry;

/// Caller contract violations. Nothing here is recoverable at this layer;
/// a UI translates these into no-ops or visible diagnostics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("Answer is already revealed")]
    AlreadyRevealed,

    #[error("Cannot judge a word before revealing the answer")]
    NotRevealed,

    #[error("Session is already complete")]
    SessionComplete,
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Which words a study session draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyMode {
    /// Words due now; falls back to the full collection when nothing is due
    Due,
    /// The full collection regardless of due dates
    All,
}

/// Words due at `now`, earliest first.
///
/// The sort is stable: words sharing a review date keep their input order.
/// Never-scheduled words count as due at `now` itself.
pub fn select_due(entries: &[VocabularyEntry], now: DateTime<Utc>) -> Vec<VocabularyEntry> {
    let mut due: Vec<VocabularyEntry> = entries.iter().filter(|e| e.is_due(now)).cloned().collect();
    due.sort_by_key(|e| e.next_review_at.unwrap_or(now));
    due
}

/// Build the ordered word queue for a study session.
///
/// In `Due` mode a non-empty collection never yields an empty queue: when
/// nothing is due yet, the whole collection is studied instead, soonest
/// review first. Callers that want strict due-only behavior use
/// [`select_due`] directly.
pub fn build_study_queue(
    entries: &[VocabularyEntry],
    mode: StudyMode,
    now: DateTime<Utc>,
) -> Vec<VocabularyEntry> {
    match mode {
        StudyMode::Due => {
            let due = select_due(entries, now);
            if !due.is_empty() {
                due
            } else {
                sorted_by_review_date(entries, now)
            }
        }
        StudyMode::All => sorted_by_review_date(entries, now),
    }
}

fn sorted_by_review_date(entries: &[VocabularyEntry], now: DateTime<Utc>) -> Vec<VocabularyEntry> {
    let mut all = entries.to_vec();
    all.sort_by_key(|e| e.next_review_at.unwrap_or(now));
    all
}

/// An in-progress flashcard pass over a fixed set of words.
///
/// Created from an already-ordered queue (see [`build_study_queue`]); the
/// session never re-sorts mid-pass.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    items: Vec<VocabularyEntry>,
    current_index: usize,
    revealed: bool,
}

impl ReviewSession {
    /// Snapshot the queue into a fresh session, cursor on the first word
    pub fn start(queue: Vec<VocabularyEntry>) -> Self {
        Self {
            items: queue,
            current_index: 0,
            revealed: false,
        }
    }

    /// The word currently under review, if the session is not complete
    pub fn current(&self) -> Option<&VocabularyEntry> {
        self.items.get(self.current_index)
    }

    /// 0-based position of the cursor
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the answer for the current word is shown
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Complete once every word has been judged
    pub fn is_complete(&self) -> bool {
        self.current_index == self.items.len()
    }

    /// Show the answer for the current word
    pub fn reveal(mut self) -> Result<Self> {
        if self.is_complete() {
            return Err(SessionError::SessionComplete);
        }
        if self.revealed {
            return Err(SessionError::AlreadyRevealed);
        }

        self.revealed = true;
        Ok(self)
    }

    /// Record the learner's judgment for the current word and advance.
    ///
    /// The answer must have been revealed first. The scheduler output is
    /// written onto the session's snapshot of the word; the cursor moves on
    /// and the next word starts unrevealed.
    pub fn submit(mut self, judgment: Judgment, now: DateTime<Utc>) -> Result<Self> {
        if self.is_complete() {
            return Err(SessionError::SessionComplete);
        }
        if !self.revealed {
            return Err(SessionError::NotRevealed);
        }

        let entry = &mut self.items[self.current_index];
        let update = compute_next_schedule(entry.srs_level, judgment, now);
        entry.srs_level = update.next_level;
        entry.next_review_at = Some(update.next_review_at);

        self.current_index += 1;
        self.revealed = false;
        Ok(self)
    }

    /// Abandon the session, keeping the judgments already recorded
    pub fn cancel(self) -> Vec<VocabularyEntry> {
        self.items
    }

    /// Extract the updated words once the session is complete
    pub fn into_items(self) -> Vec<VocabularyEntry> {
        self.items
    }
}

/// Replace collection entries with their reviewed counterparts, matched by
/// word (case-insensitive). Entries that were not in the session are left
/// untouched.
pub fn merge_reviewed(collection: &mut [VocabularyEntry], reviewed: &[VocabularyEntry]) {
    for entry in collection.iter_mut() {
        if let Some(updated) = reviewed.iter().find(|r| r.is_word(&entry.word)) {
            *entry = updated.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    fn entry(word: &str, level: u32, due: Option<DateTime<Utc>>) -> VocabularyEntry {
        let mut e = VocabularyEntry::new(
            word.to_string(),
            "Noun".to_string(),
            vec![format!("Definition of {}", word)],
        );
        e.srs_level = level;
        e.next_review_at = due;
        e
    }

    #[test]
    fn test_select_due_filters_and_orders() {
        let items = vec![
            entry("alpha", 0, Some(t0() - Duration::days(2))),
            entry("bravo", 0, Some(t0() - Duration::days(1))),
            entry("charlie", 0, Some(t0() + Duration::days(1))),
            entry("delta", 0, Some(t0() - Duration::days(2))),
        ];

        let due = select_due(&items, t0());
        let words: Vec<&str> = due.iter().map(|e| e.word.as_str()).collect();

        // Ties keep input order, future words are excluded
        assert_eq!(words, ["alpha", "delta", "bravo"]);
    }

    #[test]
    fn test_select_due_includes_exactly_due_words() {
        let items = vec![entry("alpha", 0, Some(t0()))];
        assert_eq!(select_due(&items, t0()).len(), 1);
    }

    #[test]
    fn test_study_queue_falls_back_to_full_collection() {
        let items = vec![
            entry("alpha", 0, Some(t0() + Duration::days(3))),
            entry("bravo", 0, Some(t0() + Duration::days(1))),
        ];

        assert!(select_due(&items, t0()).is_empty());

        let queue = build_study_queue(&items, StudyMode::Due, t0());
        let words: Vec<&str> = queue.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["bravo", "alpha"]);
    }

    #[test]
    fn test_study_queue_empty_collection_stays_empty() {
        assert!(build_study_queue(&[], StudyMode::Due, t0()).is_empty());
        assert!(build_study_queue(&[], StudyMode::All, t0()).is_empty());
    }

    #[test]
    fn test_study_queue_all_mode_ignores_due_dates() {
        let items = vec![
            entry("alpha", 0, Some(t0() + Duration::days(3))),
            entry("bravo", 0, Some(t0() - Duration::days(1))),
        ];

        let queue = build_study_queue(&items, StudyMode::All, t0());
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].word, "bravo");
    }

    #[test]
    fn test_session_walkthrough_to_completion() {
        let queue = vec![
            entry("alpha", 0, Some(t0())),
            entry("bravo", 3, Some(t0())),
        ];
        let session = ReviewSession::start(queue);
        assert!(!session.is_complete());
        assert_eq!(session.current().map(|e| e.word.as_str()), Some("alpha"));

        let session = session.reveal().unwrap();
        let session = session.submit(Judgment::Good, t0()).unwrap();
        assert_eq!(session.current_index(), 1);
        assert!(!session.is_revealed());

        let session = session.reveal().unwrap();
        let session = session.submit(Judgment::Easy, t0()).unwrap();
        assert!(session.is_complete());

        let items = session.into_items();
        // Good from 0 climbs to 1 (3-day interval)
        assert_eq!(items[0].srs_level, 1);
        assert_eq!(items[0].next_review_at, Some(t0() + Duration::days(3)));
        // Easy from 3 climbs to 5 (90-day interval)
        assert_eq!(items[1].srs_level, 5);
        assert_eq!(items[1].next_review_at, Some(t0() + Duration::days(90)));
    }

    #[test]
    fn test_cancel_banks_partial_progress() {
        let queue = vec![
            entry("alpha", 0, Some(t0())),
            entry("bravo", 2, Some(t0())),
            entry("charlie", 4, Some(t0())),
        ];
        let session = ReviewSession::start(queue.clone());

        let session = session.reveal().unwrap();
        let session = session.submit(Judgment::Good, t0()).unwrap();
        let items = session.cancel();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].srs_level, 1);
        assert_eq!(items[1].srs_level, queue[1].srs_level);
        assert_eq!(items[1].next_review_at, queue[1].next_review_at);
        assert_eq!(items[2].srs_level, queue[2].srs_level);
    }

    #[test]
    fn test_submit_before_reveal_is_rejected() {
        let session = ReviewSession::start(vec![entry("alpha", 0, Some(t0()))]);
        let err = session.submit(Judgment::Good, t0()).unwrap_err();
        assert_eq!(err, SessionError::NotRevealed);
    }

    #[test]
    fn test_double_reveal_is_rejected() {
        let session = ReviewSession::start(vec![entry("alpha", 0, Some(t0()))]);
        let session = session.reveal().unwrap();
        let err = session.reveal().unwrap_err();
        assert_eq!(err, SessionError::AlreadyRevealed);
    }

    #[test]
    fn test_operations_on_complete_session_are_rejected() {
        let session = ReviewSession::start(vec![entry("alpha", 0, Some(t0()))]);
        let session = session.reveal().unwrap();
        let session = session.submit(Judgment::Good, t0()).unwrap();
        assert!(session.is_complete());

        let err = session.clone().reveal().unwrap_err();
        assert_eq!(err, SessionError::SessionComplete);
        let err = session.submit(Judgment::Good, t0()).unwrap_err();
        assert_eq!(err, SessionError::SessionComplete);
    }

    #[test]
    fn test_empty_session_is_immediately_complete() {
        let session = ReviewSession::start(Vec::new());
        assert!(session.is_complete());
    }

    #[test]
    fn test_merge_reviewed_matches_case_insensitively() {
        let mut collection = vec![
            entry("Alpha", 0, Some(t0())),
            entry("Bravo", 0, Some(t0())),
        ];
        let reviewed = vec![entry("alpha", 3, Some(t0() + Duration::days(14)))];

        merge_reviewed(&mut collection, &reviewed);

        assert_eq!(collection[0].srs_level, 3);
        assert_eq!(
            collection[0].next_review_at,
            Some(t0() + Duration::days(14))
        );
        assert_eq!(collection[1].srs_level, 0);
    }
}
