//! Learner progress - completed lessons, the unlock cursor and derived stats.

use serde::{Deserialize, Serialize};
use crate::day::{Day, TOTAL_DAYS};
use crate::lesson::LessonDefinition;

/// Upper bound of the streak counter.
pub const STREAK_CAP: usize = 7;

/// Mutable progress of one learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Completed days in the order they were completed, without duplicates
    pub completed_days: Vec<Day>,

    /// Highest day reachable without having completed it
    pub unlock_cursor: Day,
}

impl ProgressState {
    /// Whether `day` has been completed.
    pub fn is_completed(&self, day: Day) -> bool {
        self.completed_days.contains(&day)
    }

    /// Whether `day` is beyond the cursor and not yet completed.
    pub fn is_locked(&self, day: Day) -> bool {
        day > self.unlock_cursor && !self.is_completed(day)
    }

    /// Card status for `day`.
    pub fn status(&self, day: Day) -> LessonStatus {
        if self.is_completed(day) {
            LessonStatus::Completed
        } else if self.is_locked(day) {
            LessonStatus::Locked
        } else {
            LessonStatus::Available
        }
    }

    /// Statistics derived from the completed set.
    pub fn stats(&self) -> ProgressStats {
        ProgressStats::from_completed(self.completed_days.len())
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            completed_days: Vec::new(),
            unlock_cursor: Day::MIN,
        }
    }
}

/// Progress summary shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStats {
    /// Lessons completed
    pub completed_count: usize,

    /// Lessons left
    pub remaining_count: usize,

    /// Whole-number completion percentage
    pub percentage: u8,

    /// Completed lessons capped at [`STREAK_CAP`]; not a consecutive-day count
    pub streak: usize,
}

impl ProgressStats {
    /// Compute stats for a given number of completed lessons.
    pub fn from_completed(completed_count: usize) -> Self {
        let total = usize::from(TOTAL_DAYS);
        let completed_count = completed_count.min(total);
        let percentage = (completed_count as f64 / total as f64 * 100.0).round() as u8;

        Self {
            completed_count,
            remaining_count: total - completed_count,
            percentage,
            streak: completed_count.min(STREAK_CAP),
        }
    }
}

/// How a lesson card should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonStatus {
    /// Already finished
    Completed,
    /// Reachable, not finished
    Available,
    /// Beyond the unlock cursor
    Locked,
}

impl LessonStatus {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonStatus::Completed => "completed",
            LessonStatus::Available => "available",
            LessonStatus::Locked => "locked",
        }
    }
}

impl std::fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a renderer needs to draw one lesson card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCard {
    /// The lesson
    pub lesson: LessonDefinition,

    /// Its status for the current learner
    pub status: LessonStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: i64) -> Day {
        Day::new(n).unwrap()
    }

    #[test]
    fn test_fresh_stats() {
        let stats = ProgressState::default().stats();
        assert_eq!(
            stats,
            ProgressStats { completed_count: 0, remaining_count: 30, percentage: 0, streak: 0 }
        );
    }

    #[test]
    fn test_stats_rounding() {
        // 1/30 = 3.33 -> 3, 2/30 = 6.67 -> 7, 15/30 = 50
        assert_eq!(ProgressStats::from_completed(1).percentage, 3);
        assert_eq!(ProgressStats::from_completed(2).percentage, 7);
        assert_eq!(ProgressStats::from_completed(15).percentage, 50);
        assert_eq!(ProgressStats::from_completed(30).percentage, 100);
    }

    #[test]
    fn test_streak_is_capped() {
        assert_eq!(ProgressStats::from_completed(3).streak, 3);
        assert_eq!(ProgressStats::from_completed(7).streak, 7);
        assert_eq!(ProgressStats::from_completed(20).streak, 7);
    }

    #[test]
    fn test_lock_rule() {
        let state = ProgressState {
            completed_days: vec![day(9)],
            unlock_cursor: day(3),
        };
        assert!(!state.is_locked(day(1)));
        assert!(!state.is_locked(day(3)));
        assert!(state.is_locked(day(4)));
        assert!(!state.is_locked(day(9)));

        assert_eq!(state.status(day(2)), LessonStatus::Available);
        assert_eq!(state.status(day(9)), LessonStatus::Completed);
        assert_eq!(state.status(day(10)), LessonStatus::Locked);
    }
}
