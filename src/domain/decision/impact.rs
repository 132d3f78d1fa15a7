//! Impact - a single signed effect of an option on one dimension.

use serde::{Deserialize, Serialize};

use super::Dimension;
use crate::domain::foundation::{coerce_score, ImpactId};

/// A scored effect of an option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    pub id: ImpactId,
    pub dimension: Dimension,
    /// Free-text rationale.
    pub text: String,
    pub value: f64,
}

impl Impact {
    /// Creates a blank impact on the default dimension with value 0.
    pub fn new(id: ImpactId) -> Self {
        Self {
            id,
            dimension: Dimension::default(),
            text: String::new(),
            value: 0.0,
        }
    }

    /// Creates a fully specified impact.
    pub fn with_values(
        id: ImpactId,
        dimension: Dimension,
        value: f64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            dimension,
            text: text.into(),
            value,
        }
    }

    /// Applies a partial update. Unset fields are left alone.
    pub fn apply(&mut self, patch: ImpactPatch) {
        if let Some(dimension) = patch.dimension {
            self.dimension = dimension;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }
}

/// Partial update for an [`Impact`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImpactPatch {
    pub dimension: Option<Dimension>,
    pub text: Option<String>,
    pub value: Option<f64>,
}

impl ImpactPatch {
    pub fn dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = Some(dimension);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the value from raw form input; unparseable input becomes 0.
    pub fn value_input(self, raw: &str) -> Self {
        self.value(coerce_score(raw))
    }
}
