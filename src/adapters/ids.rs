//! Id generator adapters.
//!
//! - `RandomIdGenerator` - v4 UUIDs, the default for real use
//! - `SequentialIdGenerator` - Counter-backed UUIDs for tests and reproducible runs

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::ports::IdGenerator;

/// Generates random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Generates `00000000-0000-0000-0000-000000000001`, `...02`, and so on.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_uuid(&self) -> Uuid {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        Uuid::from_u128(u128::from(value))
    }
}
