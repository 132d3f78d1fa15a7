//! Choice Compare - Two-option decision comparison
//!
//! Scores two options by their weighted impacts across fixed dimensions,
//! applies soft and hard constraints, and surfaces the trade-offs: per
//! dimension deltas, each option's biggest sacrifice, and close calls.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
