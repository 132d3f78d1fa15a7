//! Analysis Module - Pure domain services for comparing options.
//!
//! # Components
//!
//! - `ComparisonEngine` - Totals, constraint penalties, per-dimension deltas, sacrifices
//! - `DeltaFilter` - Bounded views over the sorted delta list
//! - `Verdict` / `Notice` - Headline outcome and warnings derived from a result
//!
//! All functions are pure and stateless. They borrow domain objects and
//! return computed results. No ports or adapters needed.

mod comparison_engine;
mod delta_filter;
mod verdict;

pub use comparison_engine::{
    ComparisonEngine, ComparisonResult, DimensionDelta, OptionScore, Sacrifice, Sacrifices, Side,
    Violation, CLOSE_CALL_THRESHOLD, EXTREME_SACRIFICE_THRESHOLD,
};
pub use delta_filter::{
    filter_deltas, DeltaFilter, MAX_FILTERED_DELTAS, SIGNIFICANT_DELTA_THRESHOLD,
};
pub use verdict::{score_shares, Notice, Verdict};
