//! Coursekit core data models.
//!
//! This crate defines the lesson catalog, the learner's progress state and
//! the events the progress store publishes to its UI collaborators. It does
//! no I/O of its own.

#![warn(missing_docs)]

// Identities
mod id;
mod day;

// Course content
mod lesson;
mod syllabus;

// Learner state
mod progress;
mod event;

mod error;

// Re-exports
pub use id::*;
pub use day::{Day, TOTAL_DAYS};

pub use lesson::{Catalog, LessonDefinition};
pub use progress::{LessonCard, LessonStatus, ProgressState, ProgressStats, STREAK_CAP};
pub use event::{CourseEvent, EventKind, EventTopic};

pub use error::{CourseError, Result};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
