//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and never change after construction. To
/// "modify" one, build a new value. `Money` and `Store` are the catalog's
/// value objects; identifiers are too.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

impl ValueObject for crate::id::CategoryId {}
impl ValueObject for crate::id::ProductId {}
impl ValueObject for crate::id::ProductImageId {}
