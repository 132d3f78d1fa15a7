//! Delta Filter - Bounded views over the sorted delta list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ComparisonResult, DimensionDelta};
use crate::domain::foundation::ValidationError;

/// Maximum number of deltas a filtered view returns.
pub const MAX_FILTERED_DELTAS: usize = 3;

/// Deltas with a magnitude above this are significant.
pub const SIGNIFICANT_DELTA_THRESHOLD: f64 = 3.0;

/// Which deltas to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaFilter {
    #[default]
    All,
    /// Dimensions where B comes out ahead.
    Positive,
    /// Dimensions where A comes out ahead.
    Negative,
    Significant,
}

impl DeltaFilter {
    pub fn all() -> &'static [DeltaFilter] {
        &[
            DeltaFilter::All,
            DeltaFilter::Positive,
            DeltaFilter::Negative,
            DeltaFilter::Significant,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            DeltaFilter::All => "all",
            DeltaFilter::Positive => "positive",
            DeltaFilter::Negative => "negative",
            DeltaFilter::Significant => "significant",
        }
    }

    pub fn matches(&self, delta: &DimensionDelta) -> bool {
        match self {
            DeltaFilter::All => true,
            DeltaFilter::Positive => delta.delta > 0.0,
            DeltaFilter::Negative => delta.delta < 0.0,
            DeltaFilter::Significant => delta.magnitude() > SIGNIFICANT_DELTA_THRESHOLD,
        }
    }

    /// Keeps matching deltas, then truncates to [`MAX_FILTERED_DELTAS`].
    ///
    /// Input order is preserved, so on an engine-sorted list this yields the
    /// largest matching trade-offs.
    pub fn apply(&self, deltas: &[DimensionDelta]) -> Vec<DimensionDelta> {
        deltas
            .iter()
            .filter(|d| self.matches(d))
            .take(MAX_FILTERED_DELTAS)
            .cloned()
            .collect()
    }
}

impl fmt::Display for DeltaFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for DeltaFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::all()
            .iter()
            .find(|f| f.key().eq_ignore_ascii_case(key))
            .copied()
            .ok_or_else(|| ValidationError::unknown_value("filter", key))
    }
}

/// Filtered view of a comparison; empty when there is nothing to compare.
pub fn filter_deltas(result: Option<&ComparisonResult>, mode: DeltaFilter) -> Vec<DimensionDelta> {
    match result {
        Some(result) => mode.apply(&result.deltas),
        None => Vec::new(),
    }
}
