//! EditDecisionHandler - Applies one edit to a decision session and recomputes.
//!
//! Every edit is followed by a fresh comparison, so callers always render
//! from a result that matches the current state.

use std::sync::Arc;

use crate::domain::analysis::{ComparisonResult, DeltaFilter, DimensionDelta};
use crate::domain::decision::{
    ConstraintPatch, DecisionError, DecisionSession, ImpactPatch, DEFAULT_SOFT_PENALTY,
};
use crate::domain::foundation::{ConstraintId, ImpactId, OptionId};
use crate::ports::IdGenerator;

/// An edit to a decision session.
///
/// Ids for new records are never part of the command; the handler draws
/// them from its [`IdGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub enum EditDecisionCommand {
    SetContext { context: String },
    ConfirmContext,
    AddOption,
    UpdateOptionTitle { option_id: OptionId, title: String },
    RemoveOption { option_id: OptionId },
    AddImpact { option_id: OptionId },
    UpdateImpact {
        option_id: OptionId,
        impact_id: ImpactId,
        patch: ImpactPatch,
    },
    AddConstraint,
    UpdateConstraint {
        constraint_id: ConstraintId,
        patch: ConstraintPatch,
    },
    UpdateConstraintCheck {
        constraint_id: ConstraintId,
        option_id: OptionId,
        passed: Option<bool>,
    },
    RemoveConstraint { constraint_id: ConstraintId },
    SetFilterMode { mode: DeltaFilter },
}

impl EditDecisionCommand {
    fn name(&self) -> &'static str {
        match self {
            EditDecisionCommand::SetContext { .. } => "set_context",
            EditDecisionCommand::ConfirmContext => "confirm_context",
            EditDecisionCommand::AddOption => "add_option",
            EditDecisionCommand::UpdateOptionTitle { .. } => "update_option_title",
            EditDecisionCommand::RemoveOption { .. } => "remove_option",
            EditDecisionCommand::AddImpact { .. } => "add_impact",
            EditDecisionCommand::UpdateImpact { .. } => "update_impact",
            EditDecisionCommand::AddConstraint => "add_constraint",
            EditDecisionCommand::UpdateConstraint { .. } => "update_constraint",
            EditDecisionCommand::UpdateConstraintCheck { .. } => "update_constraint_check",
            EditDecisionCommand::RemoveConstraint { .. } => "remove_constraint",
            EditDecisionCommand::SetFilterMode { .. } => "set_filter_mode",
        }
    }
}

/// Record created by an `Add*` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedRecord {
    Option(OptionId),
    Impact(ImpactId),
    Constraint(ConstraintId),
}

/// State of the comparison right after an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionSnapshot {
    pub created: Option<CreatedRecord>,
    pub result: Option<ComparisonResult>,
    pub filtered_deltas: Vec<DimensionDelta>,
}

impl DecisionSnapshot {
    pub fn created_option(&self) -> Option<OptionId> {
        match self.created {
            Some(CreatedRecord::Option(id)) => Some(id),
            _ => None,
        }
    }

    pub fn created_impact(&self) -> Option<ImpactId> {
        match self.created {
            Some(CreatedRecord::Impact(id)) => Some(id),
            _ => None,
        }
    }

    pub fn created_constraint(&self) -> Option<ConstraintId> {
        match self.created {
            Some(CreatedRecord::Constraint(id)) => Some(id),
            _ => None,
        }
    }
}

/// Handler for decision session edits.
pub struct EditDecisionHandler {
    ids: Arc<dyn IdGenerator>,
    default_soft_penalty: f64,
}

impl EditDecisionHandler {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            default_soft_penalty: DEFAULT_SOFT_PENALTY,
        }
    }

    /// Overrides the penalty given to newly added constraints.
    pub fn with_default_soft_penalty(mut self, penalty: f64) -> Self {
        self.default_soft_penalty = penalty;
        self
    }

    pub fn handle(
        &self,
        session: &mut DecisionSession,
        cmd: EditDecisionCommand,
    ) -> Result<DecisionSnapshot, DecisionError> {
        let command = cmd.name();

        // 1. Apply the edit
        let created = self.apply(session, cmd).map_err(|err| {
            tracing::debug!(command, error = %err, "decision edit rejected");
            err
        })?;

        // 2. Recompute
        let result = session.comparison();
        let filtered_deltas = session.filtered_deltas();

        tracing::debug!(
            command,
            options = session.options().len(),
            constraints = session.constraints().len(),
            comparable = result.is_some(),
            "decision edited"
        );

        Ok(DecisionSnapshot {
            created,
            result,
            filtered_deltas,
        })
    }

    fn apply(
        &self,
        session: &mut DecisionSession,
        cmd: EditDecisionCommand,
    ) -> Result<Option<CreatedRecord>, DecisionError> {
        match cmd {
            EditDecisionCommand::SetContext { context } => {
                session.set_context(context);
            }
            EditDecisionCommand::ConfirmContext => session.confirm()?,
            EditDecisionCommand::AddOption => {
                let id = self.ids.option_id();
                session.add_option(id);
                return Ok(Some(CreatedRecord::Option(id)));
            }
            EditDecisionCommand::UpdateOptionTitle { option_id, title } => {
                session.update_option_title(&option_id, title)?;
            }
            EditDecisionCommand::RemoveOption { option_id } => {
                session.remove_option(&option_id)?;
            }
            EditDecisionCommand::AddImpact { option_id } => {
                let id = self.ids.impact_id();
                session.add_impact(&option_id, id)?;
                return Ok(Some(CreatedRecord::Impact(id)));
            }
            EditDecisionCommand::UpdateImpact {
                option_id,
                impact_id,
                patch,
            } => session.update_impact(&option_id, &impact_id, patch)?,
            EditDecisionCommand::AddConstraint => {
                let id = self.ids.constraint_id();
                session.add_constraint(id, self.default_soft_penalty);
                return Ok(Some(CreatedRecord::Constraint(id)));
            }
            EditDecisionCommand::UpdateConstraint {
                constraint_id,
                patch,
            } => session.update_constraint(&constraint_id, patch)?,
            EditDecisionCommand::UpdateConstraintCheck {
                constraint_id,
                option_id,
                passed,
            } => session.update_constraint_check(&constraint_id, &option_id, passed)?,
            EditDecisionCommand::RemoveConstraint { constraint_id } => {
                session.remove_constraint(&constraint_id)?;
            }
            EditDecisionCommand::SetFilterMode { mode } => session.set_filter_mode(mode),
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SequentialIdGenerator;
    use crate::domain::decision::{ConstraintKind, Dimension};
    use crate::domain::foundation::ErrorCode;

    fn handler() -> EditDecisionHandler {
        EditDecisionHandler::new(Arc::new(SequentialIdGenerator::new()))
    }

    fn add_option(handler: &EditDecisionHandler, session: &mut DecisionSession) -> OptionId {
        handler
            .handle(session, EditDecisionCommand::AddOption)
            .unwrap()
            .created_option()
            .unwrap()
    }

    fn add_impact(
        handler: &EditDecisionHandler,
        session: &mut DecisionSession,
        option_id: OptionId,
        dimension: Dimension,
        value: f64,
    ) -> DecisionSnapshot {
        let impact_id = handler
            .handle(session, EditDecisionCommand::AddImpact { option_id })
            .unwrap()
            .created_impact()
            .unwrap();
        handler
            .handle(
                session,
                EditDecisionCommand::UpdateImpact {
                    option_id,
                    impact_id,
                    patch: ImpactPatch::default().dimension(dimension).value(value),
                },
            )
            .unwrap()
    }

    #[test]
    fn snapshot_is_empty_until_second_option() {
        let handler = handler();
        let mut session = DecisionSession::new();

        let snapshot = handler
            .handle(&mut session, EditDecisionCommand::AddOption)
            .unwrap();
        assert!(snapshot.created_option().is_some());
        assert!(snapshot.result.is_none());
        assert!(snapshot.filtered_deltas.is_empty());

        let snapshot = handler
            .handle(&mut session, EditDecisionCommand::AddOption)
            .unwrap();
        assert!(snapshot.result.is_some());
    }

    #[test]
    fn every_edit_recomputes_the_comparison() {
        let handler = handler();
        let mut session = DecisionSession::new();
        let a = add_option(&handler, &mut session);
        let b = add_option(&handler, &mut session);

        add_impact(&handler, &mut session, a, Dimension::Money, -25.0);
        add_impact(&handler, &mut session, b, Dimension::Money, -5.0);
        let snapshot = add_impact(&handler, &mut session, b, Dimension::Time, 10.0);

        let result = snapshot.result.unwrap();
        assert_eq!(result.a.total, -25.0);
        assert_eq!(result.b.total, 5.0);
        assert_eq!(snapshot.filtered_deltas.len(), 2);

        let snapshot = handler
            .handle(
                &mut session,
                EditDecisionCommand::SetFilterMode {
                    mode: DeltaFilter::Negative,
                },
            )
            .unwrap();
        assert!(snapshot.filtered_deltas.is_empty());
    }

    #[test]
    fn new_constraints_use_configured_penalty() {
        let handler = handler().with_default_soft_penalty(-4.5);
        let mut session = DecisionSession::new();
        let a = add_option(&handler, &mut session);
        add_option(&handler, &mut session);

        let constraint_id = handler
            .handle(&mut session, EditDecisionCommand::AddConstraint)
            .unwrap()
            .created_constraint()
            .unwrap();
        assert_eq!(session.constraint(&constraint_id).unwrap().penalty, -4.5);

        let snapshot = handler
            .handle(
                &mut session,
                EditDecisionCommand::UpdateConstraintCheck {
                    constraint_id,
                    option_id: a,
                    passed: Some(false),
                },
            )
            .unwrap();
        assert_eq!(snapshot.result.unwrap().a.total, -4.5);
    }

    #[test]
    fn hard_constraint_disqualifies_via_commands() {
        let handler = handler();
        let mut session = DecisionSession::new();
        let a = add_option(&handler, &mut session);
        add_option(&handler, &mut session);
        let constraint_id = handler
            .handle(&mut session, EditDecisionCommand::AddConstraint)
            .unwrap()
            .created_constraint()
            .unwrap();

        handler
            .handle(
                &mut session,
                EditDecisionCommand::UpdateConstraint {
                    constraint_id,
                    patch: ConstraintPatch::default().kind(ConstraintKind::Hard),
                },
            )
            .unwrap();
        let snapshot = handler
            .handle(
                &mut session,
                EditDecisionCommand::UpdateConstraintCheck {
                    constraint_id,
                    option_id: a,
                    passed: Some(false),
                },
            )
            .unwrap();

        let result = snapshot.result.unwrap();
        assert!(result.a.is_disqualified);
        assert_eq!(result.a.violations[0].penalty, 0.0);
        assert!(!result.b.is_disqualified);
    }

    #[test]
    fn unknown_ids_are_reported_not_panicked() {
        let handler = handler();
        let mut session = DecisionSession::new();
        let ghost = SequentialIdGenerator::starting_at(999).option_id();

        let err = handler
            .handle(
                &mut session,
                EditDecisionCommand::RemoveOption { option_id: ghost },
            )
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::OptionNotFound);
    }

    #[test]
    fn confirm_without_context_fails() {
        let handler = handler();
        let mut session = DecisionSession::new();
        assert!(handler
            .handle(&mut session, EditDecisionCommand::ConfirmContext)
            .is_err());

        handler
            .handle(
                &mut session,
                EditDecisionCommand::SetContext {
                    context: "Move to a new city?".to_string(),
                },
            )
            .unwrap();
        handler
            .handle(&mut session, EditDecisionCommand::ConfirmContext)
            .unwrap();
        assert!(session.is_confirmed());
    }
}
