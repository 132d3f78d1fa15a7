use serde::Serialize;

use crate::domain::analysis::{
    score_shares, ComparisonResult, DeltaFilter, DimensionDelta, Notice, Side, Verdict,
};
use crate::domain::decision::{display_title, DecisionSession};

/// Everything a front end shows after an edit, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonOverview {
    /// What is being decided
    pub context: String,
    pub option_count: usize,

    /// Display titles of options past the second; kept but not scored
    pub unscored_options: Vec<String>,

    pub filter: DeltaFilter,

    /// Absent until at least two options exist
    pub comparison: Option<ComparisonSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub title_a: String,
    pub title_b: String,
    pub verdict: Verdict,
    pub verdict_text: String,
    pub result: ComparisonResult,
    /// Top deltas under the current filter
    pub filtered_deltas: Vec<DimensionDelta>,
    pub notices: Vec<NoticeSummary>,
    pub shares: ScoreShares,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeSummary {
    pub notice: Notice,
    pub message: String,
}

/// Percent of the combined absolute score held by each side
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreShares {
    pub a: f64,
    pub b: f64,
}

impl ComparisonOverview {
    pub fn from_session(session: &DecisionSession) -> Self {
        let unscored_options = session
            .options()
            .iter()
            .enumerate()
            .skip(2)
            .map(|(index, option)| display_title(&option.title, index + 1))
            .collect();

        let comparison = session
            .comparison()
            .map(|result| ComparisonSummary::build(result, session.filter_mode()));

        Self {
            context: session.context().to_string(),
            option_count: session.options().len(),
            unscored_options,
            filter: session.filter_mode(),
            comparison,
        }
    }
}

impl ComparisonSummary {
    fn build(result: ComparisonResult, filter: DeltaFilter) -> Self {
        let verdict = Verdict::from_result(&result);
        let notices = Notice::collect(&result)
            .into_iter()
            .map(|notice| NoticeSummary {
                message: notice.describe(&result),
                notice,
            })
            .collect();
        let (a, b) = score_shares(&result);

        Self {
            title_a: result.display_title(Side::A),
            title_b: result.display_title(Side::B),
            verdict_text: verdict.describe(&result),
            verdict,
            filtered_deltas: filter.apply(&result.deltas),
            notices,
            shares: ScoreShares { a, b },
            result,
        }
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
