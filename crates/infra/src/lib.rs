//! Infrastructure layer: configuration, in-memory gateways and use-case wiring.

pub mod config;
pub mod gateways;
pub mod services;


pub use config::{CatalogConfig, ConfigError};
pub use services::CatalogServices;
