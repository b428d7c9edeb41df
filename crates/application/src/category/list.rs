use chrono::{DateTime, Utc};
use serde::Serialize;

use catalog_categories::Category;
use catalog_core::{CategoryId, Entity, Pagination, SearchQuery};

use crate::error::UseCaseError;
use crate::gateway::CategoryGateway;

/// Summary row of a category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryListOutput {
    fn from(category: Category) -> Self {
        Self {
            id: category.id().clone(),
            name: category.name().unwrap_or_default().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

#[derive(Debug)]
pub struct ListCategories<G> {
    categories: G,
}

impl<G: CategoryGateway> ListCategories<G> {
    pub fn new(categories: G) -> Self {
        Self { categories }
    }

    pub fn execute(&self, query: &SearchQuery) -> Result<Pagination<CategoryListOutput>, UseCaseError> {
        Ok(self.categories.find_all(query)?.map(CategoryListOutput::from))
    }
}
