pub mod overview;

pub use overview::{ComparisonOverview, ComparisonSummary, NoticeSummary, ScoreShares};
