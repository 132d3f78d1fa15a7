//! ReportRenderer port - Turning a comparison overview into output text.

use thiserror::Error;

use crate::domain::dashboard::ComparisonOverview;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to format report")]
    Format(#[from] std::fmt::Error),
}

/// Port for presenting an overview to the user.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, overview: &ComparisonOverview) -> Result<String, RenderError>;
}
