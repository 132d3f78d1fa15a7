//! IdGenerator port - Source of unique identifiers for new records.
//!
//! The domain never mints identifiers. Whoever drives a decision session
//! supplies a generator, so tests and reproducible runs can swap the random
//! source for a deterministic one.

use uuid::Uuid;

use crate::domain::foundation::{ConstraintId, ImpactId, OptionId};

/// Port for producing globally unique identifiers.
///
/// Implementations must never return the same value twice for the
/// lifetime of the generator.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh UUID.
    fn next_uuid(&self) -> Uuid;

    fn option_id(&self) -> OptionId {
        OptionId::from_uuid(self.next_uuid())
    }

    fn impact_id(&self) -> ImpactId {
        ImpactId::from_uuid(self.next_uuid())
    }

    fn constraint_id(&self) -> ConstraintId {
        ConstraintId::from_uuid(self.next_uuid())
    }
}
