//! Error types for the cost model
//!
//! Only the input boundary can fail. Once a [`Configuration`] has been built
//! the model itself is infallible.
//!
//! [`Configuration`]: crate::models::config::Configuration

use thiserror::Error;

/// Errors surfaced to callers of the estimator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Rejected input value (negative volume, unknown tier or accelerator key)
    #[error("invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Configuration or schema could not be serialized
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl EstimateError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending input field, if this is an input error
    pub fn field(&self) -> Option<&str> {
        match self {
            EstimateError::InvalidInput { field, .. } => Some(field),
            EstimateError::Serialization(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = EstimateError::invalid("weekly_hires", "must be >= 0, got -3");
        assert_eq!(
            err.to_string(),
            "invalid input for 'weekly_hires': must be >= 0, got -3"
        );
        assert_eq!(err.field(), Some("weekly_hires"));
    }

    #[test]
    fn test_serialization_has_no_field() {
        let err = EstimateError::Serialization("boom".to_string());
        assert_eq!(err.field(), None);
        assert!(err.to_string().contains("boom"));
    }
}
