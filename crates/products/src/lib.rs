//! Products domain module.
//!
//! This crate contains business rules for products and their images,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod image;
pub mod money;
pub mod product;
pub mod store;
pub mod validator;

pub use image::{ProductImage, ProductImageValidator};
pub use money::Money;
pub use product::{Product, ProductDetails, ProductStatus};
pub use store::Store;
pub use validator::ProductValidator;
