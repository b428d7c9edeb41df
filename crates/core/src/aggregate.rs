//! Aggregate root trait for self-validating domain models.

use crate::entity::Entity;
use crate::error::DomainResult;
use crate::validation::{ThrowsValidationHandler, ValidationHandler};

/// Aggregate root: an entity that enforces its own invariants.
///
/// Every constructing or mutating operation must finish with
/// [`AggregateRoot::self_validate`] before the new state is handed back to the
/// caller.
pub trait AggregateRoot: Entity {
    /// Report every rule this aggregate breaks into `handler`.
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()>;

    /// Validate with a fail-fast handler; the first violation is returned.
    fn self_validate(&self) -> DomainResult<()> {
        self.validate(&mut ThrowsValidationHandler)
    }
}
