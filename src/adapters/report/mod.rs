//! Report adapters - presenting a comparison overview.
//!
//! - `TextReportRenderer` - Human readable summary for terminals
//! - `JsonReportRenderer` - Full overview document for other tools

mod json;
mod text;

pub use json::JsonReportRenderer;
pub use text::TextReportRenderer;
