//! Events published by the progress store.

use serde::{Deserialize, Serialize};
use crate::day::Day;
use crate::id::EventId;
use crate::Time;

/// Something the UI should react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEvent {
    /// Unique identifier
    pub id: EventId,

    /// When it happened
    pub timestamp: Time,

    /// What happened
    pub kind: EventKind,
}

impl CourseEvent {
    /// Create a new event stamped with the current time.
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: EventId::new(),
            timestamp: chrono::Utc::now(),
            kind,
        }
    }

    /// The topic handlers filter on.
    pub fn topic(&self) -> EventTopic {
        self.kind.topic()
    }
}

/// Event payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A lesson was marked complete for the first time
    LessonCompleted {
        /// The completed day
        day: Day,
    },

    /// Access to a locked lesson was refused
    LessonLocked {
        /// The requested day
        day: Day,
    },

    /// The UI should show this lesson
    NavigateTo {
        /// The requested day
        day: Day,
        /// Relative page path
        path: String,
    },
}

impl EventKind {
    /// The topic this payload belongs to.
    pub fn topic(&self) -> EventTopic {
        match self {
            EventKind::LessonCompleted { .. } => EventTopic::Completed,
            EventKind::LessonLocked { .. } => EventTopic::Locked,
            EventKind::NavigateTo { .. } => EventTopic::Navigate,
        }
    }

    /// The lesson the event is about.
    pub fn day(&self) -> Day {
        match self {
            EventKind::LessonCompleted { day }
            | EventKind::LessonLocked { day }
            | EventKind::NavigateTo { day, .. } => *day,
        }
    }
}

/// Event categories a handler can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Lesson completions
    Completed,
    /// Lock warnings
    Locked,
    /// Navigation intents
    Navigate,
}
