//! Category use cases.

pub mod create;
pub mod get;
pub mod list;
pub mod update;

use chrono::{DateTime, Utc};
use serde::Serialize;

use catalog_categories::Category;
use catalog_core::{CategoryId, Entity};

pub use create::{CreateCategory, CreateCategoryCommand, CreateCategoryOutput};
pub use get::GetCategoryById;
pub use list::{CategoryListOutput, ListCategories};
pub use update::{UpdateCategory, UpdateCategoryCommand, UpdateCategoryOutput};

/// Full view of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().clone(),
            name: category.name().unwrap_or_default().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}
