//! LoadScenarioHandler - Builds a decision session from a scenario file.
//!
//! The scenario is replayed through [`EditDecisionHandler`] so a loaded
//! session is indistinguishable from one edited by hand.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

use super::{EditDecisionCommand, EditDecisionHandler};
use crate::domain::dashboard::ComparisonOverview;
use crate::domain::decision::{
    ConstraintKind, ConstraintPatch, DecisionError, DecisionSession, Dimension, ImpactPatch,
};
use crate::domain::foundation::{OptionId, ValidationError};
use crate::ports::{Scenario, ScenarioError, ScenarioOption, ScenarioReader};

/// Command to load a scenario from disk.
#[derive(Debug, Clone)]
pub struct LoadScenarioCommand {
    pub path: PathBuf,
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct LoadScenarioResult {
    pub session: DecisionSession,
    pub overview: ComparisonOverview,
}

/// Handler for loading scenarios.
pub struct LoadScenarioHandler {
    reader: Arc<dyn ScenarioReader>,
    editor: EditDecisionHandler,
}

impl LoadScenarioHandler {
    pub fn new(reader: Arc<dyn ScenarioReader>, editor: EditDecisionHandler) -> Self {
        Self { reader, editor }
    }

    pub fn handle(&self, cmd: LoadScenarioCommand) -> Result<LoadScenarioResult, ScenarioError> {
        // 1. Read
        let scenario = self.reader.read(&cmd.path)?;

        // 2. Replay into a session
        let session = self.build_session(scenario)?;

        // 3. Compare
        let overview = ComparisonOverview::from_session(&session);

        tracing::info!(
            path = %cmd.path.display(),
            options = session.options().len(),
            constraints = session.constraints().len(),
            comparable = overview.comparison.is_some(),
            "scenario loaded"
        );

        Ok(LoadScenarioResult { session, overview })
    }

    /// Builds a session from an already parsed scenario.
    ///
    /// # Errors
    ///
    /// - `Invalid` for unknown dimensions or constraint types, duplicate
    ///   option keys, and checks naming no option
    pub fn build_session(&self, scenario: Scenario) -> Result<DecisionSession, ScenarioError> {
        let mut session = DecisionSession::new();

        if !scenario.context.trim().is_empty() {
            self.edit(&mut session, EditDecisionCommand::SetContext {
                context: scenario.context,
            })?;
            self.edit(&mut session, EditDecisionCommand::ConfirmContext)?;
        }

        let resolved = option_keys(&scenario.options)?;
        let mut keys: HashMap<String, OptionId> = HashMap::new();
        for (key, option) in resolved.into_iter().zip(scenario.options) {
            let option_id = self
                .edit(&mut session, EditDecisionCommand::AddOption)?
                .ok_or_else(|| ValidationError::empty_field("options.id"))?;
            keys.insert(key, option_id);

            self.edit(&mut session, EditDecisionCommand::UpdateOptionTitle {
                option_id,
                title: option.title,
            })?;

            for impact in option.impacts {
                let dimension = match impact.dimension.as_deref() {
                    Some(key) => key.parse::<Dimension>()?,
                    None => Dimension::default(),
                };
                let impact_id = self
                    .editor
                    .handle(&mut session, EditDecisionCommand::AddImpact { option_id })?
                    .created_impact()
                    .ok_or_else(|| ValidationError::empty_field("impacts.id"))?;
                self.edit(&mut session, EditDecisionCommand::UpdateImpact {
                    option_id,
                    impact_id,
                    patch: ImpactPatch::default()
                        .dimension(dimension)
                        .text(impact.text)
                        .value(impact.value),
                })?;
            }
        }

        for constraint in scenario.constraints {
            let kind = match constraint.kind.as_deref() {
                Some(kind) => kind.parse::<ConstraintKind>()?,
                None => ConstraintKind::default(),
            };
            let constraint_id = self
                .editor
                .handle(&mut session, EditDecisionCommand::AddConstraint)?
                .created_constraint()
                .ok_or_else(|| ValidationError::empty_field("constraints.id"))?;

            let mut patch = ConstraintPatch::default().text(constraint.text).kind(kind);
            if let Some(penalty) = constraint.penalty {
                patch = patch.penalty(penalty);
            }
            self.edit(&mut session, EditDecisionCommand::UpdateConstraint {
                constraint_id,
                patch,
            })?;

            for (key, passed) in constraint.checks {
                let option_id = *keys
                    .get(key.trim())
                    .ok_or_else(|| ValidationError::unknown_value("checks", key.clone()))?;
                self.edit(&mut session, EditDecisionCommand::UpdateConstraintCheck {
                    constraint_id,
                    option_id,
                    passed,
                })?;
            }
        }

        if let Some(mode) = scenario.filter {
            self.edit(&mut session, EditDecisionCommand::SetFilterMode { mode })?;
        }

        Ok(session)
    }

    /// Applies one edit, returning the id of the option it created, if any.
    fn edit(
        &self,
        session: &mut DecisionSession,
        cmd: EditDecisionCommand,
    ) -> Result<Option<OptionId>, DecisionError> {
        Ok(self.editor.handle(session, cmd)?.created_option())
    }
}

/// Resolves the key of every option, in order.
///
/// Written keys are claimed first, so a blank option whose positional key
/// was already written on another option is reported as such rather than as
/// a plain duplicate.
fn option_keys(options: &[ScenarioOption]) -> Result<Vec<String>, ValidationError> {
    let mut explicit: HashSet<&str> = HashSet::new();
    for key in options.iter().filter_map(ScenarioOption::explicit_key) {
        if !explicit.insert(key) {
            return Err(ValidationError::invalid_format(
                "options.key",
                format!("duplicate key '{}'", key),
            ));
        }
    }

    options
        .iter()
        .enumerate()
        .map(|(index, option)| match option.explicit_key() {
            Some(key) => Ok(key.to_string()),
            None => {
                let position = index + 1;
                let key = option.resolved_key(position);
                if explicit.contains(key.as_str()) {
                    return Err(ValidationError::invalid_format(
                        "options.key",
                        format!(
                            "key '{}' is also the default key of option {}; give that option an explicit key",
                            key, position
                        ),
                    ));
                }
                Ok(key)
            }
        })
        .collect()
}
