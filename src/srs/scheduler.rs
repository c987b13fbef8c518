//! Review scheduling
//!
//! A fixed-ladder variant of spaced repetition: each word carries a mastery
//! level, and the level indexes an escalating interval table. Successful
//! recalls climb the ladder, failed recalls halve the level and bring the
//! word back within the same sitting.
//!
//! Everything here is pure: `now` is a parameter, never a clock read, so
//! scheduling is deterministic under test.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Review intervals in days, indexed by mastery level.
/// Levels past the end of the table clamp to the last entry.
pub const REVIEW_INTERVALS: [i64; 8] = [1, 3, 7, 14, 30, 90, 180, 365];

/// Minutes until a failed word comes back for relearning
const RELEARN_MINUTES: i64 = 5;

/// Self-reported recall quality for a reviewed word.
///
/// A timed review that expires with no answer is reported as `Hard` by the
/// caller; the scale itself stays tri-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Judgment {
    /// Failed to recall
    Hard,
    /// Recalled with effort
    Good,
    /// Recalled instantly
    Easy,
}

/// Result of scheduling a single review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleUpdate {
    pub next_level: u32,
    pub next_review_at: DateTime<Utc>,
}

/// Compute the next mastery level and review date for a word.
///
/// # Arguments
/// * `level` - current mastery level (0 for a word never reviewed)
/// * `judgment` - the learner's recall quality
/// * `now` - the moment the judgment was made
///
/// `Hard` halves the level (bottoming out at 0) and schedules a 5-minute
/// relearn step regardless of level. `Good` and `Easy` climb one or two
/// levels and schedule the interval the new level maps to. Levels are
/// unbounded; intervals cap at the top of the table.
pub fn compute_next_schedule(level: u32, judgment: Judgment, now: DateTime<Utc>) -> ScheduleUpdate {
    let next_level = match judgment {
        Judgment::Hard => level / 2,
        Judgment::Good => level.saturating_add(1),
        Judgment::Easy => level.saturating_add(2),
    };

    let next_review_at = match judgment {
        Judgment::Hard => now + Duration::minutes(RELEARN_MINUTES),
        Judgment::Good | Judgment::Easy => now + Duration::days(interval_for_level(next_level)),
    };

    ScheduleUpdate {
        next_level,
        next_review_at,
    }
}

/// Interval in days for a mastery level, clamped to the top of the ladder
pub fn interval_for_level(level: u32) -> i64 {
    let idx = (level as usize).min(REVIEW_INTERVALS.len() - 1);
    REVIEW_INTERVALS[idx]
}

/// The interval each judgment would schedule from the given level.
/// Used to caption the review buttons ("5m", "1d", "2w").
pub fn preview_intervals(level: u32) -> [String; 3] {
    [
        format!("{}m", RELEARN_MINUTES),
        format_interval(interval_for_level(level.saturating_add(1))),
        format_interval(interval_for_level(level.saturating_add(2))),
    ]
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: i64) -> String {
    if days == 0 {
        "now".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_good_climbs_one_level() {
        for level in [0, 1, 5, 17] {
            let update = compute_next_schedule(level, Judgment::Good, t0());
            assert_eq!(update.next_level, level + 1);
        }
    }

    #[test]
    fn test_easy_climbs_two_levels() {
        for level in [0, 1, 5, 17] {
            let update = compute_next_schedule(level, Judgment::Easy, t0());
            assert_eq!(update.next_level, level + 2);
        }
    }

    #[test]
    fn test_hard_halves_level() {
        let update = compute_next_schedule(6, Judgment::Hard, t0());
        assert_eq!(update.next_level, 3);

        // Integer halving floors
        let update = compute_next_schedule(7, Judgment::Hard, t0());
        assert_eq!(update.next_level, 3);
    }

    #[test]
    fn test_hard_at_zero_stays_zero() {
        let update = compute_next_schedule(0, Judgment::Hard, t0());
        assert_eq!(update.next_level, 0);
    }

    #[test]
    fn test_hard_schedules_relearn_step() {
        // Five minutes out, regardless of level
        for level in [0, 3, 40] {
            let update = compute_next_schedule(level, Judgment::Hard, t0());
            assert_eq!(update.next_review_at, t0() + Duration::minutes(5));
        }
    }

    #[test]
    fn test_interval_follows_new_level() {
        // Good from 0 lands on level 1, whose interval is 3 days
        let update = compute_next_schedule(0, Judgment::Good, t0());
        assert_eq!(update.next_review_at, t0() + Duration::days(3));

        // 3 -> 5 under Easy: index 5 is 90 days
        let update = compute_next_schedule(3, Judgment::Easy, t0());
        assert_eq!(update.next_review_at, t0() + Duration::days(90));
    }

    #[test]
    fn test_interval_clamps_past_table_end() {
        for level in [7, 8, 20, 1000] {
            let update = compute_next_schedule(level, Judgment::Good, t0());
            assert_eq!(update.next_review_at, t0() + Duration::days(365));
        }
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(0), "now");
        assert_eq!(format_interval(1), "1d");
        assert_eq!(format_interval(5), "5d");
        assert_eq!(format_interval(14), "2w");
        assert_eq!(format_interval(90), "3mo");
        assert_eq!(format_interval(365), "1y");
    }

    #[test]
    fn test_preview_intervals_from_new_word() {
        let [hard, good, easy] = preview_intervals(0);
        assert_eq!(hard, "5m");
        assert_eq!(good, "3d");
        assert_eq!(easy, "7d");
    }
}
