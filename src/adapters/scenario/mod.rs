//! Scenario adapters - reading scenario files.

mod file_reader;

pub use file_reader::{parse_scenario, FileScenarioReader, ScenarioFormat};
