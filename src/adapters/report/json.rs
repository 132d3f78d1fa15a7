use crate::domain::dashboard::ComparisonOverview;
use crate::ports::{RenderError, ReportRenderer};

/// Serializes the overview as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportRenderer;

impl JsonReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, overview: &ComparisonOverview) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(overview)?)
    }
}
