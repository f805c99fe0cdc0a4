//! Error types for userverse-models.
//!
//! This module defines crate-level error types using `thiserror`, and the
//! mapping from those errors to the API's error detail payload.

use crate::domain::{BusinessRuleError, FormatError, ValidationError};
use crate::generic::AppErrorResponseModel;
use thiserror::Error;

/// Any failure raised while constructing a model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Field-level structural or range failure
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Phone number parse or validity failure
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Well-formed but disallowed value
    #[error(transparent)]
    BusinessRule(#[from] BusinessRuleError),

    /// Input was not valid JSON or did not match the schema
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Machine-readable code placed in `detail.error`.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::Json(_) => "validation_error",
            Self::Format(_) => "format_error",
            Self::BusinessRule(_) => "business_rule_error",
        }
    }
}

impl From<&ModelError> for AppErrorResponseModel {
    fn from(err: &ModelError) -> Self {
        AppErrorResponseModel::new(err.to_string(), err.error_code())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ModelError
pub type ModelResult<T> = Result<T, ModelError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ModelError::from(ValidationError::InvalidEmail("x".to_string()));
        assert_eq!(err.error_code(), "validation_error");

        let err = ModelError::from(FormatError::InvalidNumber("+1555".to_string()));
        assert_eq!(err.error_code(), "format_error");

        let err = ModelError::from(BusinessRuleError::ProtectedRole("Viewer".to_string()));
        assert_eq!(err.error_code(), "business_rule_error");
    }

    #[test]
    fn test_error_detail_payload() {
        let err = ModelError::from(BusinessRuleError::ProtectedRole("Administrator".to_string()));
        let response = AppErrorResponseModel::from(&err);
        assert_eq!(
            response.detail.message,
            "Cannot delete default system role: 'Administrator'"
        );
        assert_eq!(response.detail.error, "business_rule_error");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            var: "USERVERSE_PRETTY_JSON".to_string(),
            reason: "Must be true or false".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for USERVERSE_PRETTY_JSON: Must be true or false"
        );
    }
}
