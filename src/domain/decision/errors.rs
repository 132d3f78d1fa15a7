//! Decision-specific error types.

use crate::domain::foundation::{ConstraintId, ErrorCode, ImpactId, OptionId, ValidationError};

/// Errors raised by decision session mutations.
///
/// The comparison itself never fails; these only cover edits that name a
/// record which does not exist or carry input the model cannot hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    /// Option was not found.
    OptionNotFound(OptionId),
    /// Impact was not found on the given option.
    ImpactNotFound { option_id: OptionId, impact_id: ImpactId },
    /// Constraint was not found.
    ConstraintNotFound(ConstraintId),
    /// Input failed validation.
    Validation(ValidationError),
}

impl DecisionError {
    pub fn option_not_found(id: OptionId) -> Self {
        DecisionError::OptionNotFound(id)
    }
    pub fn impact_not_found(option_id: OptionId, impact_id: ImpactId) -> Self {
        DecisionError::ImpactNotFound {
            option_id,
            impact_id,
        }
    }
    pub fn constraint_not_found(id: ConstraintId) -> Self {
        DecisionError::ConstraintNotFound(id)
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DecisionError::OptionNotFound(_) => ErrorCode::OptionNotFound,
            DecisionError::ImpactNotFound { .. } => ErrorCode::ImpactNotFound,
            DecisionError::ConstraintNotFound(_) => ErrorCode::ConstraintNotFound,
            DecisionError::Validation(err) => ErrorCode::from(err),
        }
    }
    pub fn message(&self) -> String {
        match self {
            DecisionError::OptionNotFound(id) => format!("Option not found: {}", id),
            DecisionError::ImpactNotFound {
                option_id,
                impact_id,
            } => format!("Impact {} not found on option {}", impact_id, option_id),
            DecisionError::ConstraintNotFound(id) => format!("Constraint not found: {}", id),
            DecisionError::Validation(err) => err.to_string(),
        }
    }
}

impl From<ValidationError> for DecisionError {
    fn from(err: ValidationError) -> Self {
        DecisionError::Validation(err)
    }
}

impl std::fmt::Display for DecisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl std::error::Error for DecisionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn not_found_displays_code_and_id() {
        let id = OptionId::from_uuid(Uuid::from_u128(1));
        let err = DecisionError::option_not_found(id);
        assert_eq!(err.code(), ErrorCode::OptionNotFound);
        assert_eq!(
            err.to_string(),
            "[OPTION_NOT_FOUND] Option not found: 00000000-0000-0000-0000-000000000001"
        );
    }

    #[test]
    fn validation_error_keeps_its_code() {
        let err: DecisionError = ValidationError::unknown_value("dimension", "karma").into();
        assert_eq!(err.code(), ErrorCode::UnknownDimension);
        assert_eq!(err.message(), "Field 'dimension' has unknown value 'karma'");
    }
}
