//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, lenient score parsing and error types
//! that form the vocabulary of the comparison domain.

mod errors;
mod ids;
mod score;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ConstraintId, ImpactId, OptionId};
pub use score::{coerce_score, deserialize_optional_score, deserialize_score, sum_scores};
