//! Lesson progress tracking.
//!
//! [`ProgressStore`] owns the catalog and the learner's progress, decides
//! lesson access, and publishes events for the UI layer to render.

#![warn(missing_docs)]

pub mod error;
pub mod events;
pub mod persist;
pub mod store;
pub mod time;

pub use error::{ProgressError, Result};
pub use events::{EventBus, EventHandler};
pub use store::{LessonAccess, ProgressStore};
pub use time::TimeLedger;
