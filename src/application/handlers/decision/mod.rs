//! Decision handlers - editing a session and loading one from a scenario.

mod edit_decision;
mod load_scenario;

pub use edit_decision::{
    CreatedRecord, DecisionSnapshot, EditDecisionCommand, EditDecisionHandler,
};
pub use load_scenario::{LoadScenarioCommand, LoadScenarioHandler, LoadScenarioResult};
