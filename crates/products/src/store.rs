use serde::{Deserialize, Serialize};

use catalog_core::ValueObject;

/// The store a product is sold by.
///
/// Two stores are the same store when their ids match, whatever their names.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Store {
    id: String,
    name: String,
}

impl Store {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A blank id stands for a store reference without identity.
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl core::hash::Hash for Store {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl ValueObject for Store {}
