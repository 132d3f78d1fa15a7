//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod decision;

pub use decision::{
    // Editing
    CreatedRecord, DecisionSnapshot, EditDecisionCommand, EditDecisionHandler,
    // Loading
    LoadScenarioCommand, LoadScenarioHandler, LoadScenarioResult,
};
