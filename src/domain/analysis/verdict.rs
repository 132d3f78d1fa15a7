//! Verdict - Headline outcome and notices derived from a comparison.

use serde::{Deserialize, Serialize};

use super::{ComparisonResult, Sacrifice, Side};

/// Headline outcome of a comparison.
///
/// Disqualification outranks totals: a disqualified option never "leads".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Verdict {
    BothDisqualified,
    /// `side` is out; the other side stands.
    Disqualified { side: Side },
    Leads { side: Side, margin: f64 },
    Tie,
}

impl Verdict {
    pub fn from_result(result: &ComparisonResult) -> Self {
        match (result.a.is_disqualified, result.b.is_disqualified) {
            (true, true) => Verdict::BothDisqualified,
            (true, false) => Verdict::Disqualified { side: Side::A },
            (false, true) => Verdict::Disqualified { side: Side::B },
            (false, false) => {
                let (a, b) = (result.a.total, result.b.total);
                let margin = (a - b).abs();
                if a > b {
                    Verdict::Leads {
                        side: Side::A,
                        margin,
                    }
                } else if a < b {
                    Verdict::Leads {
                        side: Side::B,
                        margin,
                    }
                } else {
                    Verdict::Tie
                }
            }
        }
    }

    /// One-line summary using display titles.
    pub fn describe(&self, result: &ComparisonResult) -> String {
        match self {
            Verdict::BothDisqualified => "Both options are disqualified".to_string(),
            Verdict::Disqualified { side } => {
                format!("{} is disqualified", result.display_title(*side))
            }
            Verdict::Leads { side, margin } => {
                let unit = if *margin == 1.0 { "point" } else { "points" };
                format!("{} leads by {} {}", result.display_title(*side), margin, unit)
            }
            Verdict::Tie => "Both options score the same".to_string(),
        }
    }
}

/// Something the user should pay attention to before deciding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Notice {
    /// Totals are within the close-call threshold.
    CloseCall,
    /// One side carries an extreme sacrifice.
    ExtremeSacrifice { side: Side, sacrifice: Sacrifice },
}

impl Notice {
    /// Notices in display order: close call first, then A's sacrifice, then B's.
    pub fn collect(result: &ComparisonResult) -> Vec<Notice> {
        let mut notices = Vec::new();
        if result.is_close_call {
            notices.push(Notice::CloseCall);
        }
        for side in [Side::A, Side::B] {
            if let Some(sacrifice) = result.sacrifice(side).filter(|s| s.is_extreme()) {
                notices.push(Notice::ExtremeSacrifice {
                    side,
                    sacrifice: sacrifice.clone(),
                });
            }
        }
        notices
    }

    pub fn describe(&self, result: &ComparisonResult) -> String {
        match self {
            Notice::CloseCall => {
                "Close call: the scores are very near. Go back to what matters most right now."
                    .to_string()
            }
            Notice::ExtremeSacrifice { side, sacrifice } => format!(
                "Heavy sacrifice in {}: {} ({})",
                result.display_title(*side),
                sacrifice.dimension.label(),
                sacrifice.value
            ),
        }
    }
}

/// Share of each side in `|total_a| + |total_b|`, as percentages.
///
/// Splits evenly when both totals are zero.
pub fn score_shares(result: &ComparisonResult) -> (f64, f64) {
    let a = result.a.total.abs();
    let b = result.b.total.abs();
    let sum = a + b;
    if sum == 0.0 {
        return (50.0, 50.0);
    }
    (a / sum * 100.0, b / sum * 100.0)
}
