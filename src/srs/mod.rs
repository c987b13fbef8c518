//! Spaced repetition system
//!
//! This module provides:
//! - The review scheduler (pure interval/level math)
//! - Due-queue selection and the study session state machine
//! - Merging of reviewed entries back into the owning collection

pub mod queue;
pub mod scheduler;

pub use queue::{
    build_study_queue, merge_reviewed, select_due, ReviewSession, SessionError, StudyMode,
};
pub use scheduler::{compute_next_schedule, Judgment, ScheduleUpdate};
