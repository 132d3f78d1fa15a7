//! Decision session aggregate.
//!
//! The session is the caller-owned state of one decision: its context text,
//! the options with their impacts, the constraints and the current delta
//! filter. It is plain in-memory data; the comparison is recomputed from it
//! on every read and never stored.

use serde::{Deserialize, Serialize};

use super::{
    Constraint, ConstraintPatch, DecisionError, DecisionOption, Impact, ImpactPatch,
};
use crate::domain::analysis::{filter_deltas, ComparisonEngine, ComparisonResult, DeltaFilter, DimensionDelta};
use crate::domain::foundation::{ConstraintId, ImpactId, OptionId, ValidationError};

/// State of a single decision under comparison.
///
/// # Invariants
///
/// - option, impact and constraint ids are unique within the session
/// - constraint checks only name options that exist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionSession {
    /// What is being decided.
    context: String,

    /// Whether the user has committed to the context and moved on to options.
    confirmed: bool,

    /// Options in insertion order. The first two are the ones compared.
    options: Vec<DecisionOption>,

    constraints: Vec<Constraint>,

    filter_mode: DeltaFilter,
}

impl DecisionSession {
    /// Creates an empty, unconfirmed session.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    pub fn option(&self, id: &OptionId) -> Option<&DecisionOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn constraint(&self, id: &ConstraintId) -> Option<&Constraint> {
        self.constraints.iter().find(|c| &c.id == id)
    }

    pub fn filter_mode(&self) -> DeltaFilter {
        self.filter_mode
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Context
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    /// Marks the context as confirmed.
    ///
    /// # Errors
    ///
    /// - `Validation` if the context is blank
    pub fn confirm(&mut self) -> Result<(), DecisionError> {
        if self.context.trim().is_empty() {
            return Err(ValidationError::empty_field("context").into());
        }
        self.confirmed = true;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Options
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends an untitled option.
    pub fn add_option(&mut self, id: OptionId) {
        self.options.push(DecisionOption::new(id));
    }

    /// # Errors
    ///
    /// - `OptionNotFound` if no option has this id
    pub fn update_option_title(
        &mut self,
        id: &OptionId,
        title: impl Into<String>,
    ) -> Result<(), DecisionError> {
        self.option_mut(id)?.title = title.into();
        Ok(())
    }

    /// Removes an option with its impacts and forgets its constraint checks.
    ///
    /// # Errors
    ///
    /// - `OptionNotFound` if no option has this id
    pub fn remove_option(&mut self, id: &OptionId) -> Result<DecisionOption, DecisionError> {
        let position = self
            .options
            .iter()
            .position(|o| &o.id == id)
            .ok_or_else(|| DecisionError::option_not_found(*id))?;

        for constraint in &mut self.constraints {
            constraint.checks.forget(id);
        }
        Ok(self.options.remove(position))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Impacts
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a blank impact to an option.
    ///
    /// # Errors
    ///
    /// - `OptionNotFound` if no option has this id
    pub fn add_impact(&mut self, option_id: &OptionId, impact_id: ImpactId) -> Result<(), DecisionError> {
        self.option_mut(option_id)?.impacts.push(Impact::new(impact_id));
        Ok(())
    }

    /// # Errors
    ///
    /// - `OptionNotFound` if no option has this id
    /// - `ImpactNotFound` if the option has no impact with this id
    pub fn update_impact(
        &mut self,
        option_id: &OptionId,
        impact_id: &ImpactId,
        patch: ImpactPatch,
    ) -> Result<(), DecisionError> {
        let option = self.option_mut(option_id)?;
        let impact = option
            .impact_mut(impact_id)
            .ok_or_else(|| DecisionError::impact_not_found(*option_id, *impact_id))?;
        impact.apply(patch);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Constraints
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends an empty soft constraint with the given penalty.
    pub fn add_constraint(&mut self, id: ConstraintId, penalty: f64) {
        self.constraints.push(Constraint::new(id, penalty));
    }

    /// # Errors
    ///
    /// - `ConstraintNotFound` if no constraint has this id
    pub fn update_constraint(
        &mut self,
        id: &ConstraintId,
        patch: ConstraintPatch,
    ) -> Result<(), DecisionError> {
        self.constraint_mut(id)?.apply(patch);
        Ok(())
    }

    /// Sets (`Some`) or clears (`None`) one option's check on a constraint.
    ///
    /// # Errors
    ///
    /// - `OptionNotFound` if no option has this id
    /// - `ConstraintNotFound` if no constraint has this id
    pub fn update_constraint_check(
        &mut self,
        constraint_id: &ConstraintId,
        option_id: &OptionId,
        passed: Option<bool>,
    ) -> Result<(), DecisionError> {
        if self.option(option_id).is_none() {
            return Err(DecisionError::option_not_found(*option_id));
        }
        self.constraint_mut(constraint_id)?
            .checks
            .set(*option_id, passed);
        Ok(())
    }

    /// # Errors
    ///
    /// - `ConstraintNotFound` if no constraint has this id
    pub fn remove_constraint(&mut self, id: &ConstraintId) -> Result<Constraint, DecisionError> {
        let position = self
            .constraints
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| DecisionError::constraint_not_found(*id))?;
        Ok(self.constraints.remove(position))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_filter_mode(&mut self, mode: DeltaFilter) {
        self.filter_mode = mode;
    }

    /// Fresh comparison of the current state; `None` with fewer than two options.
    pub fn comparison(&self) -> Option<ComparisonResult> {
        ComparisonEngine::compare(&self.options, &self.constraints)
    }

    /// Deltas of the current comparison under the session's filter mode.
    pub fn filtered_deltas(&self) -> Vec<DimensionDelta> {
        filter_deltas(self.comparison().as_ref(), self.filter_mode)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn option_mut(&mut self, id: &OptionId) -> Result<&mut DecisionOption, DecisionError> {
        self.options
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| DecisionError::option_not_found(*id))
    }

    fn constraint_mut(&mut self, id: &ConstraintId) -> Result<&mut Constraint, DecisionError> {
        self.constraints
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| DecisionError::constraint_not_found(*id))
    }
}
