use std::collections::HashMap;
use std::sync::RwLock;

use catalog_application::{GatewayError, GatewayResult, StoreGateway};
use catalog_products::Store;

use super::{read, write};

#[derive(Debug, Default)]
pub struct InMemoryStoreGateway {
    inner: RwLock<HashMap<String, Store>>,
}

impl InMemoryStoreGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreGateway for InMemoryStoreGateway {
    fn create(&self, store: Store) -> GatewayResult<Store> {
        let mut map = write(&self.inner, "store")?;
        if map.contains_key(store.id()) {
            return Err(GatewayError::Conflict(format!(
                "store {} already exists",
                store.id()
            )));
        }
        map.insert(store.id().to_string(), store.clone());
        Ok(store)
    }

    fn exists_by_id(&self, id: &str) -> GatewayResult<bool> {
        Ok(read(&self.inner, "store")?.contains_key(id))
    }
}
