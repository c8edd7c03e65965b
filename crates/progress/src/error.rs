//! Progress store errors.

use coursekit_core::Day;

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, ProgressError>;

/// Errors returned to callers of the progress store.
///
/// Storage failures never show up here; they are logged and the in-memory
/// state stays authoritative.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// A day outside 1..=30 was passed in
    #[error("invalid lesson day {0}: expected a value between 1 and 30")]
    InvalidDay(i64),
}

/// Validate a caller-supplied day number.
pub(crate) fn validate_day(n: u32) -> Result<Day> {
    Day::try_from(n).map_err(|_| ProgressError::InvalidDay(i64::from(n)))
}
