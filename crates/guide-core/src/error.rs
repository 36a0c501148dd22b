//! Error types for the guide-core crate.
//!
//! Only construction can fail: coercing a year that is not an integer, or
//! splitting a catalog entry that is missing fields. Removals and lookups
//! never return errors.

use thiserror::Error;

/// Errors that can occur while building movies and catalogs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuideError {
    /// A field could not be coerced to its declared type
    ///
    /// This is the only way `Movie` construction fails.
    #[error("Cannot convert {field} value {value:?} to an integer: {reason}")]
    TypeConversion {
        field: String,
        value: String,
        reason: String,
    },

    /// A catalog entry string couldn't be split into its parts
    #[error("Parse error in {input:?}: {reason}")]
    ParseError { input: String, reason: String },
}

impl GuideError {
    pub(crate) fn year(value: impl ToString, reason: impl ToString) -> Self {
        GuideError::TypeConversion {
            field: "year".to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, GuideError>;
