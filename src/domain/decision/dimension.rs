//! Dimension enum - the fixed axes an impact can score.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A named axis of comparison.
///
/// The set is closed. Keys outside it are rejected when input is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    #[default]
    Time,
    Money,
    Energy,
    Stress,
    Risk,
    Growth,
    Peace,
    Flexibility,
    Opportunity,
}

impl Dimension {
    /// Returns all dimensions in display order.
    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::Time,
            Dimension::Money,
            Dimension::Energy,
            Dimension::Stress,
            Dimension::Risk,
            Dimension::Growth,
            Dimension::Peace,
            Dimension::Flexibility,
            Dimension::Opportunity,
        ]
    }

    /// Returns the stable key used in input files and JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Time => "time",
            Dimension::Money => "money",
            Dimension::Energy => "energy",
            Dimension::Stress => "stress",
            Dimension::Risk => "risk",
            Dimension::Growth => "growth",
            Dimension::Peace => "peace",
            Dimension::Flexibility => "flexibility",
            Dimension::Opportunity => "opportunity",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Time => "Time",
            Dimension::Money => "Money",
            Dimension::Energy => "Energy",
            Dimension::Stress => "Stress",
            Dimension::Risk => "Risk",
            Dimension::Growth => "Growth",
            Dimension::Peace => "Peace of Mind",
            Dimension::Flexibility => "Flexibility",
            Dimension::Opportunity => "Opportunity",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Dimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::all()
            .iter()
            .find(|d| d.key().eq_ignore_ascii_case(key))
            .copied()
            .ok_or_else(|| ValidationError::unknown_value("dimension", key))
    }
}
