//! Decision module - options, impacts, constraints and the session that owns them.

mod constraint;
mod dimension;
mod errors;
mod impact;
mod option;
mod session;

pub use constraint::{
    Constraint, ConstraintChecks, ConstraintKind, ConstraintPatch, DEFAULT_SOFT_PENALTY,
};
pub use dimension::Dimension;
pub use errors::DecisionError;
pub use impact::{Impact, ImpactPatch};
pub use option::{display_title, DecisionOption};
pub use session::DecisionSession;
