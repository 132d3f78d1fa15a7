//! Constraint - a qualifying rule checked against every option.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ConstraintId, OptionId, ValidationError};

/// Penalty given to a newly added soft constraint.
pub const DEFAULT_SOFT_PENALTY: f64 = -10.0;

/// Whether a violation costs points or removes the option outright.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintKind {
    /// Violation adds the constraint's penalty to the option's total.
    #[default]
    Soft,
    /// Violation disqualifies the option and adds nothing numerically.
    Hard,
}

impl ConstraintKind {
    pub fn label(&self) -> &'static str {
        match self {
            ConstraintKind::Soft => "soft",
            ConstraintKind::Hard => "hard",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ConstraintKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "soft" => Ok(ConstraintKind::Soft),
            "hard" => Ok(ConstraintKind::Hard),
            other => Err(ValidationError::unknown_value("type", other)),
        }
    }
}

/// Per-option check state for one constraint.
///
/// A missing entry means the option has not been checked and counts as
/// satisfied. Only an explicit `false` is a violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintChecks(BTreeMap<OptionId, bool>);

impl ConstraintChecks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded state: `None` when unset.
    pub fn get(&self, option_id: &OptionId) -> Option<bool> {
        self.0.get(option_id).copied()
    }

    /// Sets (`Some`) or clears (`None`) the check for an option.
    pub fn set(&mut self, option_id: OptionId, passed: Option<bool>) {
        match passed {
            Some(passed) => {
                self.0.insert(option_id, passed);
            }
            None => {
                self.0.remove(&option_id);
            }
        }
    }

    /// Drops whatever was recorded for an option.
    pub fn forget(&mut self, option_id: &OptionId) {
        self.0.remove(option_id);
    }

    pub fn is_violated_by(&self, option_id: &OptionId) -> bool {
        self.get(option_id) == Some(false)
    }
}

/// A soft or hard rule evaluated per option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub id: ConstraintId,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ConstraintKind,
    /// Only applied for soft constraints. Conventionally negative.
    pub penalty: f64,
    pub checks: ConstraintChecks,
}

impl Constraint {
    /// Creates an empty soft constraint with the given penalty.
    pub fn new(id: ConstraintId, penalty: f64) -> Self {
        Self {
            id,
            text: String::new(),
            kind: ConstraintKind::Soft,
            penalty,
            checks: ConstraintChecks::new(),
        }
    }

    pub fn soft(id: ConstraintId, text: impl Into<String>, penalty: f64) -> Self {
        Self {
            id,
            text: text.into(),
            kind: ConstraintKind::Soft,
            penalty,
            checks: ConstraintChecks::new(),
        }
    }

    pub fn hard(id: ConstraintId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            kind: ConstraintKind::Hard,
            penalty: 0.0,
            checks: ConstraintChecks::new(),
        }
    }

    /// Records a check result, builder style.
    pub fn with_check(mut self, option_id: OptionId, passed: bool) -> Self {
        self.checks.set(option_id, Some(passed));
        self
    }

    pub fn is_violated_by(&self, option_id: &OptionId) -> bool {
        self.checks.is_violated_by(option_id)
    }

    /// Points a violation costs: the penalty for soft, 0 for hard.
    pub fn effective_penalty(&self) -> f64 {
        match self.kind {
            ConstraintKind::Soft => self.penalty,
            ConstraintKind::Hard => 0.0,
        }
    }

    /// Applies a partial update. Unset fields are left alone.
    pub fn apply(&mut self, patch: ConstraintPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(penalty) = patch.penalty {
            self.penalty = penalty;
        }
    }
}

/// Partial update for a [`Constraint`]. Checks are changed separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintPatch {
    pub text: Option<String>,
    pub kind: Option<ConstraintKind>,
    pub penalty: Option<f64>,
}

impl ConstraintPatch {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn kind(mut self, kind: ConstraintKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn penalty(mut self, penalty: f64) -> Self {
        self.penalty = Some(penalty);
        self
    }
}
