//! In-memory gateway implementations for tests and local runs.
//!
//! Each gateway keeps its aggregates behind a `RwLock`; a poisoned lock is
//! reported as a storage failure.

pub mod category;
pub mod image;
pub mod product;
pub mod search;
pub mod store;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_application::GatewayError;

pub use category::InMemoryCategoryGateway;
pub use image::InMemoryProductImageGateway;
pub use product::InMemoryProductGateway;
pub use store::InMemoryStoreGateway;

fn read<'a, T>(lock: &'a RwLock<T>, what: &str) -> Result<RwLockReadGuard<'a, T>, GatewayError> {
    lock.read()
        .map_err(|_| GatewayError::Storage(format!("{what} lock poisoned")))
}

fn write<'a, T>(lock: &'a RwLock<T>, what: &str) -> Result<RwLockWriteGuard<'a, T>, GatewayError> {
    lock.write()
        .map_err(|_| GatewayError::Storage(format!("{what} lock poisoned")))
}
