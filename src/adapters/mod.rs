//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `ids` - Random and sequential id generators
//! - `scenario` - YAML/JSON scenario files
//! - `report` - Text and JSON report rendering
//! - `telemetry` - Tracing subscriber setup

pub mod ids;
pub mod report;
pub mod scenario;
pub mod telemetry;

pub use ids::{RandomIdGenerator, SequentialIdGenerator};
pub use report::{JsonReportRenderer, TextReportRenderer};
pub use scenario::{parse_scenario, FileScenarioReader, ScenarioFormat};
pub use telemetry::init_tracing;
