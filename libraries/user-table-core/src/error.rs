/// Core error types for the user table
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A date field does not hold a `YYYY-MM-DD` calendar date
    #[error("Invalid {field} for {user}: {value:?}")]
    InvalidDate {
        /// Serialized name of the offending field
        field: &'static str,
        /// Display name of the record
        user: String,
        /// Raw field value
        value: String,
    },
}
