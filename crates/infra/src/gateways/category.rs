use std::collections::HashMap;
use std::sync::RwLock;

use catalog_application::{CategoryGateway, GatewayError, GatewayResult};
use catalog_categories::Category;
use catalog_core::{CategoryId, Entity, Pagination, SearchQuery};

use super::search::search;
use super::{read, write};

#[derive(Debug, Default)]
pub struct InMemoryCategoryGateway {
    inner: RwLock<HashMap<CategoryId, Category>>,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CategoryGateway for InMemoryCategoryGateway {
    fn create(&self, category: Category) -> GatewayResult<Category> {
        let mut map = write(&self.inner, "category")?;
        if map.contains_key(category.id()) {
            return Err(GatewayError::Conflict(format!(
                "category {} already exists",
                category.id()
            )));
        }
        map.insert(category.id().clone(), category.clone());
        Ok(category)
    }

    fn update(&self, category: Category) -> GatewayResult<Category> {
        let mut map = write(&self.inner, "category")?;
        match map.get_mut(category.id()) {
            Some(slot) => {
                *slot = category.clone();
                Ok(category)
            }
            None => Err(GatewayError::Storage(format!(
                "category {} does not exist",
                category.id()
            ))),
        }
    }

    fn find_by_id(&self, id: &CategoryId) -> GatewayResult<Option<Category>> {
        Ok(read(&self.inner, "category")?.get(id).cloned())
    }

    fn exists_by_id(&self, id: &CategoryId) -> GatewayResult<bool> {
        Ok(read(&self.inner, "category")?.contains_key(id))
    }

    fn find_all(&self, query: &SearchQuery) -> GatewayResult<Pagination<Category>> {
        Ok(search(read(&self.inner, "category")?.values(), query))
    }
}
