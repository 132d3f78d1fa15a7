//! ScenarioReader port - Loading a decision description from outside.
//!
//! A scenario is the front-end input format: the decision context, options
//! with impacts, and constraints whose checks name options by key. It is a
//! plain transfer object; turning it into a session (and rejecting unknown
//! dimensions or keys) happens in the application layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::analysis::DeltaFilter;
use crate::domain::decision::DecisionError;
use crate::domain::foundation::{
    deserialize_optional_score, deserialize_score, ErrorCode, ValidationError,
};

/// A decision as written in a scenario file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub context: String,
    pub filter: Option<DeltaFilter>,
    pub options: Vec<ScenarioOption>,
    pub constraints: Vec<ScenarioConstraint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioOption {
    /// Name constraint checks use for this option. Defaults to the 1-based position.
    pub key: Option<String>,
    pub title: String,
    pub impacts: Vec<ScenarioImpact>,
}

impl ScenarioOption {
    /// The trimmed key, if one was written and is not blank.
    pub fn explicit_key(&self) -> Option<&str> {
        self.key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// The key checks refer to, given the option's 1-based position.
    pub fn resolved_key(&self, position: usize) -> String {
        match self.explicit_key() {
            Some(key) => key.to_string(),
            None => position.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioImpact {
    /// Dimension key; the default dimension when absent.
    pub dimension: Option<String>,
    pub text: String,
    #[serde(deserialize_with = "deserialize_score")]
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConstraint {
    pub text: String,
    /// `soft` or `hard`; soft when absent.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Configured default penalty when absent.
    #[serde(deserialize_with = "deserialize_optional_score")]
    pub penalty: Option<f64>,
    /// Option key to check state; null leaves the check unset.
    pub checks: BTreeMap<String, Option<bool>>,
}

/// Errors raised while reading or applying a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Cannot read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scenario: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Scenario could not be applied: {0}")]
    Decision(#[from] DecisionError),
}

impl ScenarioError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScenarioError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ScenarioError::Io { .. } => ErrorCode::ScenarioUnreadable,
            ScenarioError::Yaml(_) | ScenarioError::Json(_) => ErrorCode::InvalidScenario,
            ScenarioError::Invalid(err) => ErrorCode::from(err),
            ScenarioError::Decision(err) => err.code(),
        }
    }
}

/// Port for reading scenarios.
pub trait ScenarioReader: Send + Sync {
    /// Reads and parses the scenario at `path`.
    fn read(&self, path: &Path) -> Result<Scenario, ScenarioError>;
}
