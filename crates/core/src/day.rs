//! Lesson day - the 1-based index of a course unit.

use serde::{Deserialize, Serialize};
use crate::error::{CourseError, Result};

/// Number of lessons in a course.
pub const TOTAL_DAYS: u8 = 30;

/// A validated lesson day in `1..=TOTAL_DAYS`.
///
/// Serializes as a bare integer so persisted progress stays readable by
/// anything that expects `[1, 2, 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Day(u8);

impl Day {
    /// The first lesson.
    pub const MIN: Day = Day(1);

    /// The last lesson.
    pub const MAX: Day = Day(TOTAL_DAYS);

    /// Validate a raw day number.
    pub fn new(n: i64) -> Result<Self> {
        if (1..=i64::from(TOTAL_DAYS)).contains(&n) {
            Ok(Self(n as u8))
        } else {
            Err(CourseError::InvalidDay(n))
        }
    }

    /// Build a day from any integer, clamping it into range.
    pub fn clamped(n: i64) -> Self {
        Self(n.clamp(1, i64::from(TOTAL_DAYS)) as u8)
    }

    /// The following day, saturating at the last lesson.
    pub fn next_clamped(self) -> Self {
        Self((self.0 + 1).min(TOTAL_DAYS))
    }

    /// Raw day number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// All days in ascending order.
    pub fn all() -> impl Iterator<Item = Day> {
        (1..=TOTAL_DAYS).map(Day)
    }
}

impl TryFrom<i64> for Day {
    type Error = CourseError;

    fn try_from(n: i64) -> Result<Self> {
        Day::new(n)
    }
}

impl TryFrom<u32> for Day {
    type Error = CourseError;

    fn try_from(n: u32) -> Result<Self> {
        Day::new(i64::from(n))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> u8 {
        day.0
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
