//! Filesystem reader for YAML and JSON scenario files.

use std::fs;
use std::path::Path;

use crate::ports::{Scenario, ScenarioError, ScenarioReader};

/// Serialization format of a scenario document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Yaml,
    Json,
}

impl ScenarioFormat {
    /// JSON for a `.json` extension (any case), YAML for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ScenarioFormat::Json,
            _ => ScenarioFormat::Yaml,
        }
    }
}

/// Parses scenario text in the given format.
pub fn parse_scenario(content: &str, format: ScenarioFormat) -> Result<Scenario, ScenarioError> {
    let scenario = match format {
        ScenarioFormat::Yaml => serde_yaml::from_str(content)?,
        ScenarioFormat::Json => serde_json::from_str(content)?,
    };
    Ok(scenario)
}

/// Reads scenarios from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileScenarioReader;

impl FileScenarioReader {
    pub fn new() -> Self {
        Self
    }
}

impl ScenarioReader for FileScenarioReader {
    fn read(&self, path: &Path) -> Result<Scenario, ScenarioError> {
        let content = fs::read_to_string(path).map_err(|e| ScenarioError::io(path, e))?;
        let format = ScenarioFormat::from_path(path);

        tracing::debug!(path = %path.display(), ?format, bytes = content.len(), "reading scenario");

        parse_scenario(&content, format)
    }
}
