//! Entities: objects distinguished by identifier rather than by value.

use core::fmt::Display;
use core::hash::Hash;

/// Anything the catalog tracks by id (aggregates and images).
pub trait Entity {
    /// Identifier type; rendered in log fields and not-found messages.
    type Id: Clone + Eq + Hash + Display + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// `true` when both refer to the same entity, whatever their state.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
