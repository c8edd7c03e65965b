//! Time spent per lesson page.
//!
//! Stored under `timeSpent` as a JSON object mapping page path to
//! accumulated milliseconds.

use std::collections::BTreeMap;
use std::time::Duration;

use coursekit_storage::{KeyValueStore, StorageError};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Key holding the time ledger.
pub const TIME_SPENT_KEY: &str = "timeSpent";

/// Accumulated reading time per page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeLedger {
    millis: BTreeMap<String, u64>,
}

impl TimeLedger {
    /// Read the ledger from `storage`. Missing or malformed data yields an
    /// empty ledger; individual non-numeric entries are skipped.
    pub fn load<S: KeyValueStore + ?Sized>(storage: &S) -> Self {
        let raw = match storage.get(TIME_SPENT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                warn!(key = TIME_SPENT_KEY, error = %e, "failed to read time ledger");
                return Self::default();
            }
        };

        let object = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(object)) => object,
            _ => {
                warn!(key = TIME_SPENT_KEY, "time ledger is not an object, starting over");
                return Self::default();
            }
        };

        let millis = object
            .into_iter()
            .filter_map(|(page, v)| v.as_u64().map(|ms| (page, ms)))
            .collect();
        Self { millis }
    }

    /// Add `spent` to the total for `page`.
    pub fn record(&mut self, page: impl Into<String>, spent: Duration) {
        let page = page.into();
        let ms = u64::try_from(spent.as_millis()).unwrap_or(u64::MAX);
        let total = self.millis.entry(page.clone()).or_insert(0);
        *total = total.saturating_add(ms);
        debug!(%page, added_ms = ms, total_ms = *total, "time recorded");
    }

    /// Total time spent on `page`.
    pub fn total(&self, page: &str) -> Duration {
        Duration::from_millis(self.millis.get(page).copied().unwrap_or(0))
    }

    /// All pages with their totals, ordered by page.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Duration)> {
        self.millis
            .iter()
            .map(|(page, ms)| (page.as_str(), Duration::from_millis(*ms)))
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.millis.is_empty()
    }

    /// Write the ledger back, replacing the previous value.
    pub fn persist<S: KeyValueStore + ?Sized>(&self, storage: &mut S) -> Result<(), StorageError> {
        let object: Map<String, Value> = self
            .millis
            .iter()
            .map(|(page, ms)| (page.clone(), Value::from(*ms)))
            .collect();
        storage.set(TIME_SPENT_KEY, Value::Object(object).to_string())
    }
}
