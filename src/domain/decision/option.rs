//! DecisionOption - a candidate choice and its ordered impacts.

use serde::{Deserialize, Serialize};

use super::Impact;
use crate::domain::foundation::{sum_scores, ImpactId, OptionId};

/// A candidate choice under comparison.
///
/// Impacts keep insertion order. That order drives rendering and
/// tie-breaking in sacrifice selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: OptionId,
    /// May be empty; see [`DecisionOption::display_title`].
    pub title: String,
    pub impacts: Vec<Impact>,
}

impl DecisionOption {
    /// Creates an untitled option with no impacts.
    pub fn new(id: OptionId) -> Self {
        Self {
            id,
            title: String::new(),
            impacts: Vec::new(),
        }
    }

    /// Creates a titled option with the given impacts.
    pub fn with_impacts(id: OptionId, title: impl Into<String>, impacts: Vec<Impact>) -> Self {
        Self {
            id,
            title: title.into(),
            impacts,
        }
    }

    /// Title to show, falling back to "Option N" (1-based) when blank.
    pub fn display_title(&self, position: usize) -> String {
        display_title(&self.title, position)
    }

    /// Sum of all impact values.
    pub fn impact_total(&self) -> f64 {
        sum_scores(self.impacts.iter().map(|i| i.value))
    }

    pub fn impact(&self, id: &ImpactId) -> Option<&Impact> {
        self.impacts.iter().find(|i| &i.id == id)
    }

    pub fn impact_mut(&mut self, id: &ImpactId) -> Option<&mut Impact> {
        self.impacts.iter_mut().find(|i| &i.id == id)
    }
}

/// Shared fallback used wherever only a title and position are at hand.
pub fn display_title(title: &str, position: usize) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        format!("Option {}", position)
    } else {
        trimmed.to_string()
    }
}
