//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' has unknown value '{value}'")]
    UnknownValue { field: String, value: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown value validation error.
    pub fn unknown_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::UnknownValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::UnknownValue { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,
    UnknownDimension,

    // Not found errors
    OptionNotFound,
    ImpactNotFound,
    ConstraintNotFound,

    // Input errors
    InvalidScenario,
    ScenarioUnreadable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::UnknownDimension => "UNKNOWN_DIMENSION",
            ErrorCode::OptionNotFound => "OPTION_NOT_FOUND",
            ErrorCode::ImpactNotFound => "IMPACT_NOT_FOUND",
            ErrorCode::ConstraintNotFound => "CONSTRAINT_NOT_FOUND",
            ErrorCode::InvalidScenario => "INVALID_SCENARIO",
            ErrorCode::ScenarioUnreadable => "SCENARIO_UNREADABLE",
        };
        write!(f, "{}", s)
    }
}

impl From<&ValidationError> for ErrorCode {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::UnknownValue { field, .. } if field == "dimension" => {
                ErrorCode::UnknownDimension
            }
            ValidationError::UnknownValue { .. } => ErrorCode::ValidationFailed,
        }
    }
}
