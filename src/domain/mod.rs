//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, lenient scores, errors)
//! - `decision` - Options, impacts, constraints and the decision session aggregate
//! - `analysis` - Pure comparison services (engine, delta filter, verdict)
//! - `dashboard` - Read model assembled for front ends after every edit

pub mod analysis;
pub mod dashboard;
pub mod decision;
pub mod foundation;
