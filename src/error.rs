//! Error types for the time-range catalog.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors surfaced by duration-token conversion and catalog validation.
///
/// The catalog itself is static data, so these only fire on malformed input
/// tokens or on data-entry mistakes caught by [`crate::catalog::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Duration token could not be converted to seconds.
    #[error("invalid duration token '{token}': {reason}")]
    InvalidDuration { token: String, reason: String },

    /// Two catalog entries share a display label.
    #[error("duplicate label '{0}' in catalog")]
    DuplicateLabel(String),

    /// An entry's declared seconds disagree with its duration token.
    #[error("entry '{label}' declares {declared}s but duration '{duration}' is {actual}s")]
    SecondsMismatch {
        label: String,
        duration: String,
        declared: u64,
        actual: u64,
    },

    /// An entry's lower bound disagrees with its duration token.
    #[error("entry '{label}' lower bound '{lower}' does not match duration '{duration}'")]
    LowerBoundMismatch {
        label: String,
        lower: String,
        duration: String,
    },

    /// Entries are not in ascending window-width order.
    #[error("catalog out of order: '{prev}' listed before '{next}'")]
    OutOfOrder { prev: String, next: String },

    /// An entry has a zero-width window.
    #[error("entry '{0}' has a zero-second window")]
    EmptyWindow(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::SecondsMismatch {
            label: "Past 1h".to_string(),
            duration: "1h".to_string(),
            declared: 3601,
            actual: 3600,
        };
        assert_eq!(
            err.to_string(),
            "entry 'Past 1h' declares 3601s but duration '1h' is 3600s"
        );
    }

    #[test]
    fn test_invalid_duration_display() {
        let err = CatalogError::InvalidDuration {
            token: "5x".to_string(),
            reason: "unknown unit".to_string(),
        };
        assert_eq!(err.to_string(), "invalid duration token '5x': unknown unit");
    }
}
