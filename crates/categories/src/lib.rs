//! Categories domain module.
//!
//! Business rules for catalog categories, implemented as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod category;
pub mod validator;

pub use category::Category;
pub use validator::CategoryValidator;
