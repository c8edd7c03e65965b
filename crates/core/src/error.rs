//! Errors raised while building or validating course data.

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, CourseError>;

/// Errors that can occur when validating course data.
#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    /// A lesson day outside 1..=30
    #[error("invalid lesson day {0}: expected a value between 1 and 30")]
    InvalidDay(i64),

    /// A catalog that does not hold exactly one lesson per day
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Catalog JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
