//! Error types for slidewrap.
//!
//! Only option loading and validation can fail. The tree transform itself
//! never does: shapes it does not understand are left untouched.

use thiserror::Error;

/// Errors that can occur while configuring the transform.
#[derive(Debug, Error)]
pub enum SplitWrapError {
    /// An option has a value the transform cannot work with
    #[error("invalid option `{field}`: {reason}")]
    InvalidOption {
        /// Option name, as spelled in the JSON configuration
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Options could not be parsed from JSON
    #[error("invalid options json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for slidewrap operations.
pub type SplitWrapResult<T> = Result<T, SplitWrapError>;

impl SplitWrapError {
    /// Create an invalid-option error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(SplitWrapError: Send, Sync, std::error::Error);

    #[test]
    fn test_error_display() {
        let err = SplitWrapError::invalid("splitComponent", "must not be empty");
        assert_eq!(err.to_string(), "invalid option `splitComponent`: must not be empty");
    }

    #[test]
    fn test_json_error_converts() {
        let err: SplitWrapError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, SplitWrapError::Json(_)));
        assert!(err.to_string().starts_with("invalid options json:"));
    }
}
