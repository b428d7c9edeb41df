//! Application layer: catalog use cases and the gateway contracts they drive.
//!
//! Every write follows the same shape: open a [`Notification`], run the
//! cross-aggregate existence checks, let the aggregate validate itself into the
//! same notification, and only persist when nothing was reported.
//!
//! [`Notification`]: catalog_core::Notification

pub mod category;
pub mod error;
pub mod gateway;
pub mod product;
pub mod store;

#[cfg(test)]
pub(crate) mod fakes;

pub use error::UseCaseError;
pub use gateway::{
    CategoryGateway, GatewayError, GatewayResult, ProductGateway, ProductImageGateway,
    StoreGateway,
};
