//! Comparison Engine - Scores two options and derives their trade-offs.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{
    display_title, Constraint, ConstraintKind, DecisionOption, Dimension, Impact,
};
use crate::domain::foundation::{sum_scores, ConstraintId, OptionId};

/// Totals at most this far apart are a close call.
pub const CLOSE_CALL_THRESHOLD: f64 = 3.0;

/// A sacrifice at or below this value is extreme.
pub const EXTREME_SACRIFICE_THRESHOLD: f64 = -5.0;

/// Which of the two scored options a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl Side {
    /// 1-based position of this side in the option list.
    pub fn position(&self) -> usize {
        match self {
            Side::A => 1,
            Side::B => 2,
        }
    }
}

/// A constraint an option failed, kept for explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub constraint_id: ConstraintId,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ConstraintKind,
    /// Points actually deducted: the penalty for soft, 0 for hard.
    pub penalty: f64,
}

/// Score breakdown for one option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionScore {
    pub option_id: OptionId,
    pub title: String,
    pub impact_total: f64,
    pub constraint_penalty: f64,
    pub total: f64,
    pub violations: Vec<Violation>,
    pub is_disqualified: bool,
}

/// Net difference between the options on one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionDelta {
    pub dimension: Dimension,
    pub a_value: f64,
    pub b_value: f64,
    /// `b_value - a_value`; positive favours B.
    pub delta: f64,
}

impl DimensionDelta {
    pub fn magnitude(&self) -> f64 {
        self.delta.abs()
    }
}

/// The most negative single impact of an option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sacrifice {
    pub dimension: Dimension,
    pub value: f64,
    pub text: String,
}

impl Sacrifice {
    pub fn is_extreme(&self) -> bool {
        self.value <= EXTREME_SACRIFICE_THRESHOLD
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sacrifices {
    pub a: Option<Sacrifice>,
    pub b: Option<Sacrifice>,
}

/// Full comparison of the first two options.
///
/// Derived data only. Recompute it whenever options or constraints change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub a: OptionScore,
    pub b: OptionScore,
    /// Non-zero deltas, largest magnitude first.
    pub deltas: Vec<DimensionDelta>,
    pub sacrifices: Sacrifices,
    pub is_close_call: bool,
    pub has_extreme_sacrifice: bool,
}

impl ComparisonResult {
    pub fn score(&self, side: Side) -> &OptionScore {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    pub fn sacrifice(&self, side: Side) -> Option<&Sacrifice> {
        match side {
            Side::A => self.sacrifices.a.as_ref(),
            Side::B => self.sacrifices.b.as_ref(),
        }
    }

    /// Title of a side, with the positional fallback for blank titles.
    pub fn display_title(&self, side: Side) -> String {
        display_title(&self.score(side).title, side.position())
    }
}

/// Pure comparison functions.
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Compares the first two options under the given constraints.
    ///
    /// Returns `None` while fewer than two options exist. Options past the
    /// second are accepted but not scored.
    pub fn compare(
        options: &[DecisionOption],
        constraints: &[Constraint],
    ) -> Option<ComparisonResult> {
        let (a, b) = Self::scored_pair(options)?;

        let score_a = Self::score_option(a, constraints);
        let score_b = Self::score_option(b, constraints);
        let deltas = Self::dimension_deltas(a, b);
        let sacrifices = Sacrifices {
            a: Self::biggest_sacrifice(a),
            b: Self::biggest_sacrifice(b),
        };

        let is_close_call = Self::is_close_call(score_a.total, score_b.total);
        let has_extreme_sacrifice = sacrifices.a.as_ref().is_some_and(Sacrifice::is_extreme)
            || sacrifices.b.as_ref().is_some_and(Sacrifice::is_extreme);

        tracing::debug!(
            total_a = score_a.total,
            total_b = score_b.total,
            deltas = deltas.len(),
            unscored = options.len() - 2,
            is_close_call,
            has_extreme_sacrifice,
            "compared options"
        );

        Some(ComparisonResult {
            a: score_a,
            b: score_b,
            deltas,
            sacrifices,
            is_close_call,
            has_extreme_sacrifice,
        })
    }

    /// Selects the options that get scored: the first two in list order.
    pub fn scored_pair(options: &[DecisionOption]) -> Option<(&DecisionOption, &DecisionOption)> {
        match options {
            [a, b, ..] => Some((a, b)),
            _ => None,
        }
    }

    /// Computes totals and violations for a single option.
    ///
    /// A constraint is violated only when its check for this option is
    /// explicitly `false`. Soft violations add their penalty; hard ones add
    /// nothing but disqualify.
    pub fn score_option(option: &DecisionOption, constraints: &[Constraint]) -> OptionScore {
        let impact_total = option.impact_total();

        let violations: Vec<Violation> = constraints
            .iter()
            .filter(|c| c.is_violated_by(&option.id))
            .map(|c| Violation {
                constraint_id: c.id,
                text: c.text.clone(),
                kind: c.kind,
                penalty: c.effective_penalty(),
            })
            .collect();

        let constraint_penalty = sum_scores(violations.iter().map(|v| v.penalty));
        let is_disqualified = violations.iter().any(|v| v.kind == ConstraintKind::Hard);

        OptionScore {
            option_id: option.id,
            title: option.title.clone(),
            impact_total,
            constraint_penalty,
            total: impact_total + constraint_penalty,
            violations,
            is_disqualified,
        }
    }

    /// Per-dimension differences `b - a`.
    ///
    /// Dimensions come from either option, in encounter order (A first).
    /// Zero deltas are dropped and the rest are stably sorted by descending
    /// magnitude.
    pub fn dimension_deltas(a: &DecisionOption, b: &DecisionOption) -> Vec<DimensionDelta> {
        let mut dimensions: Vec<Dimension> = Vec::new();
        for impact in a.impacts.iter().chain(b.impacts.iter()) {
            if !dimensions.contains(&impact.dimension) {
                dimensions.push(impact.dimension);
            }
        }

        let mut deltas: Vec<DimensionDelta> = dimensions
            .into_iter()
            .map(|dimension| {
                let a_value = Self::dimension_total(a, dimension);
                let b_value = Self::dimension_total(b, dimension);
                DimensionDelta {
                    dimension,
                    a_value,
                    b_value,
                    delta: b_value - a_value,
                }
            })
            .filter(|d| d.delta != 0.0)
            .collect();

        // sort_by is stable: equal magnitudes keep encounter order.
        deltas.sort_by(|x, y| y.magnitude().total_cmp(&x.magnitude()));
        deltas
    }

    fn dimension_total(option: &DecisionOption, dimension: Dimension) -> f64 {
        sum_scores(
            option
                .impacts
                .iter()
                .filter(|i| i.dimension == dimension)
                .map(|i| i.value),
        )
    }

    /// The most negative impact of an option, first one winning ties.
    pub fn biggest_sacrifice(option: &DecisionOption) -> Option<Sacrifice> {
        let mut worst: Option<&Impact> = None;
        for impact in option.impacts.iter().filter(|i| i.is_negative()) {
            // Strictly less, so an equal later impact never replaces the first.
            if worst.map_or(true, |w| impact.value < w.value) {
                worst = Some(impact);
            }
        }

        worst.map(|impact| Sacrifice {
            dimension: impact.dimension,
            value: impact.value,
            text: impact.text.clone(),
        })
    }

    /// True when totals differ by at most [`CLOSE_CALL_THRESHOLD`].
    pub fn is_close_call(total_a: f64, total_b: f64) -> bool {
        (total_a - total_b).abs() <= CLOSE_CALL_THRESHOLD
    }
}
