//! `catalog-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the validation handler family, identifiers, aggregate traits and the
//! query/page types gateways speak.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod pagination;
pub mod time;
pub mod validation;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult, ValidationError};
pub use id::{CategoryId, ProductId, ProductImageId};
pub use pagination::{Pagination, SearchQuery, SortDirection};
pub use validation::{Notification, ThrowsValidationHandler, ValidationHandler, Validator};
pub use value_object::ValueObject;
