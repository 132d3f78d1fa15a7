//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IdGenerator` - Unique identifiers for new options, impacts and constraints
//! - `ScenarioReader` - Loading a decision description from a file
//! - `ReportRenderer` - Presenting a comparison overview

mod id_generator;
mod report_renderer;
mod scenario_reader;

pub use id_generator::IdGenerator;
pub use report_renderer::{RenderError, ReportRenderer};
pub use scenario_reader::{
    Scenario, ScenarioConstraint, ScenarioError, ScenarioImpact, ScenarioOption, ScenarioReader,
};
