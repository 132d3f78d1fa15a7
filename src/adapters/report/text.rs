//! Plain text report for terminals.

use std::fmt::Write;

use crate::domain::analysis::{OptionScore, Side};
use crate::domain::dashboard::{ComparisonOverview, ComparisonSummary};
use crate::ports::{RenderError, ReportRenderer};

/// Message shown while fewer than two options exist.
pub const NOT_COMPARABLE_MESSAGE: &str = "Not comparable yet: add at least two options.";

#[derive(Debug, Clone, Copy, Default)]
pub struct TextReportRenderer;

impl TextReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn write_score(
        out: &mut String,
        title: &str,
        score: &OptionScore,
        share: f64,
    ) -> Result<(), RenderError> {
        let status = if score.is_disqualified {
            " [disqualified]"
        } else {
            ""
        };
        writeln!(
            out,
            "  {}: {} (impacts {}, penalties {}, {:.0}%){}",
            title, score.total, score.impact_total, score.constraint_penalty, share, status
        )?;
        for violation in &score.violations {
            writeln!(
                out,
                "    - fails {} constraint \"{}\" ({})",
                violation.kind, violation.text, violation.penalty
            )?;
        }
        Ok(())
    }

    fn write_summary(
        out: &mut String,
        summary: &ComparisonSummary,
        filter_label: &str,
    ) -> Result<(), RenderError> {
        writeln!(out, "{}", summary.verdict_text)?;
        writeln!(out)?;

        writeln!(out, "Scores:")?;
        Self::write_score(out, &summary.title_a, summary.result.score(Side::A), summary.shares.a)?;
        Self::write_score(out, &summary.title_b, summary.result.score(Side::B), summary.shares.b)?;
        writeln!(out)?;

        writeln!(out, "Biggest differences ({}):", filter_label)?;
        if summary.filtered_deltas.is_empty() {
            writeln!(out, "  none")?;
        }
        for delta in &summary.filtered_deltas {
            let favours = if delta.delta > 0.0 {
                &summary.title_b
            } else {
                &summary.title_a
            };
            writeln!(
                out,
                "  {}: {} vs {} ({:+}, favours {})",
                delta.dimension.label(),
                delta.a_value,
                delta.b_value,
                delta.delta,
                favours
            )?;
        }

        if !summary.notices.is_empty() {
            writeln!(out)?;
            for notice in &summary.notices {
                writeln!(out, "! {}", notice.message)?;
            }
        }
        Ok(())
    }
}

impl ReportRenderer for TextReportRenderer {
    fn render(&self, overview: &ComparisonOverview) -> Result<String, RenderError> {
        let mut out = String::new();

        if !overview.context.trim().is_empty() {
            writeln!(out, "Decision: {}", overview.context.trim())?;
            writeln!(out)?;
        }

        match &overview.comparison {
            None => writeln!(out, "{}", NOT_COMPARABLE_MESSAGE)?,
            Some(summary) => Self::write_summary(&mut out, summary, overview.filter.key())?,
        }

        if !overview.unscored_options.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "Only the first two options are compared. Not scored: {}",
                overview.unscored_options.join(", ")
            )?;
        }

        Ok(out)
    }
}
