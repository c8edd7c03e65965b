//! The progress store.

use coursekit_core::{
    Catalog, CourseEvent, Day, EventKind, EventTopic, LessonCard, LessonDefinition, LessonStatus,
    ProgressState, ProgressStats, SubscriptionId,
};
use coursekit_storage::{KeyValueStore, StorageError};
use tracing::{debug, error, info, warn};

use crate::error::{validate_day, Result};
use crate::events::EventBus;
use crate::persist::{self, COMPLETED_KEY, CURSOR_KEY};

/// Outcome of a request to open a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonAccess {
    /// The lesson may be shown; `path` is the page to navigate to
    Granted {
        /// Relative page path
        path: String,
    },
    /// The lesson is still locked
    Locked,
}

/// Owns the catalog and the learner's progress.
///
/// Every mutation is written through to the backing store before the
/// corresponding event is published.
pub struct ProgressStore<S: KeyValueStore> {
    catalog: Catalog,
    state: ProgressState,
    storage: S,
    bus: EventBus,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Create a store over `storage` and load any saved progress.
    pub fn open(catalog: Catalog, storage: S) -> Self {
        let mut store = Self {
            catalog,
            state: ProgressState::default(),
            storage,
            bus: EventBus::new(),
        };
        store.load();
        store
    }

    /// Replace the in-memory state with what the backing store holds.
    ///
    /// Missing, unreadable or malformed values fall back to defaults.
    pub fn load(&mut self) {
        let completed = self.read(COMPLETED_KEY);
        let cursor = self.read(CURSOR_KEY);

        self.state = ProgressState {
            completed_days: persist::decode_completed(completed.as_deref()),
            unlock_cursor: persist::decode_cursor(cursor.as_deref()),
        };
        debug!(
            completed = self.state.completed_days.len(),
            cursor = %self.state.unlock_cursor,
            "progress loaded"
        );
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "failed to read progress, using defaults");
                None
            }
        }
    }

    /// Write the full state to the backing store.
    ///
    /// Both keys go out in one batch so they cannot drift apart.
    pub fn persist(&mut self) -> std::result::Result<(), StorageError> {
        self.storage.set_many(vec![
            (COMPLETED_KEY, persist::encode_completed(&self.state.completed_days)),
            (CURSOR_KEY, persist::encode_cursor(self.state.unlock_cursor)),
        ])
    }

    /// Whether `day` has been completed.
    pub fn is_completed(&self, day: u32) -> Result<bool> {
        Ok(self.state.is_completed(validate_day(day)?))
    }

    /// Whether `day` is beyond the unlock cursor and not completed.
    pub fn is_locked(&self, day: u32) -> Result<bool> {
        Ok(self.state.is_locked(validate_day(day)?))
    }

    /// Card status of `day`.
    pub fn lesson_status(&self, day: u32) -> Result<LessonStatus> {
        Ok(self.state.status(validate_day(day)?))
    }

    /// Mark a lesson complete.
    ///
    /// Returns `Ok(false)` without side effects if it already was. Completing
    /// the lesson at the unlock cursor moves the cursor forward by one.
    pub fn mark_complete(&mut self, day: u32) -> Result<bool> {
        let day = validate_day(day)?;
        if self.state.is_completed(day) {
            debug!(%day, "lesson already complete");
            return Ok(false);
        }

        self.state.completed_days.push(day);
        if day == self.state.unlock_cursor {
            self.state.unlock_cursor = day.next_clamped();
            info!(%day, cursor = %self.state.unlock_cursor, "lesson completed, next lesson unlocked");
        } else {
            info!(%day, cursor = %self.state.unlock_cursor, "lesson completed");
        }

        if let Err(e) = self.persist() {
            error!(%day, error = %e, "failed to persist progress");
        }

        self.bus.emit(&CourseEvent::new(EventKind::LessonCompleted { day }));
        Ok(true)
    }

    /// Decide whether a lesson may be opened.
    ///
    /// Publishes a lock warning or a navigation intent; the store never
    /// navigates itself.
    pub fn open_lesson(&mut self, day: u32) -> Result<LessonAccess> {
        let day = validate_day(day)?;
        if self.state.is_locked(day) {
            warn!(%day, cursor = %self.state.unlock_cursor, "lesson is locked");
            self.bus.emit(&CourseEvent::new(EventKind::LessonLocked { day }));
            return Ok(LessonAccess::Locked);
        }

        let path = self.catalog.get(day).page_path();
        debug!(%day, %path, "opening lesson");
        self.bus.emit(&CourseEvent::new(EventKind::NavigateTo {
            day,
            path: path.clone(),
        }));
        Ok(LessonAccess::Granted { path })
    }

    /// Completion statistics.
    pub fn compute_stats(&self) -> ProgressStats {
        self.state.stats()
    }

    /// Lessons whose title, description or topics contain `query`,
    /// ignoring case. A blank query returns every lesson.
    pub fn search(&self, query: &str) -> Vec<&LessonDefinition> {
        if query.trim().is_empty() {
            return self.catalog.iter().collect();
        }
        // Surrounding whitespace is part of the needle.
        let needle = query.to_lowercase();
        self.catalog.iter().filter(|l| l.matches(&needle)).collect()
    }

    /// Search results shaped as lesson cards.
    pub fn search_cards(&self, query: &str) -> Vec<LessonCard> {
        self.search(query).into_iter().map(|l| self.card(l)).collect()
    }

    /// Cards for the whole catalog, in day order.
    pub fn lesson_cards(&self) -> Vec<LessonCard> {
        self.catalog.iter().map(|l| self.card(l)).collect()
    }

    fn card(&self, lesson: &LessonDefinition) -> LessonCard {
        LessonCard {
            lesson: lesson.clone(),
            status: self.state.status(lesson.day),
        }
    }

    /// Register a handler for every event.
    pub fn subscribe(&mut self, handler: impl FnMut(&CourseEvent) + 'static) -> SubscriptionId {
        self.bus.subscribe(handler)
    }

    /// Register a handler for lesson completions.
    pub fn on_completed(&mut self, handler: impl FnMut(&CourseEvent) + 'static) -> SubscriptionId {
        self.bus.subscribe_topic(EventTopic::Completed, handler)
    }

    /// Register a handler for lock warnings.
    pub fn on_locked(&mut self, handler: impl FnMut(&CourseEvent) + 'static) -> SubscriptionId {
        self.bus.subscribe_topic(EventTopic::Locked, handler)
    }

    /// Register a handler for navigation intents.
    pub fn on_navigate(&mut self, handler: impl FnMut(&CourseEvent) + 'static) -> SubscriptionId {
        self.bus.subscribe_topic(EventTopic::Navigate, handler)
    }

    /// Remove a handler.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Current progress.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// The unlock cursor.
    pub fn unlock_cursor(&self) -> Day {
        self.state.unlock_cursor
    }

    /// The lesson catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The backing store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the backing store, for data that lives beside the
    /// progress keys.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consume the store and return the backing storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S: KeyValueStore + std::fmt::Debug> std::fmt::Debug for ProgressStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore")
            .field("state", &self.state)
            .field("storage", &self.storage)
            .field("bus", &self.bus)
            .finish()
    }
}
