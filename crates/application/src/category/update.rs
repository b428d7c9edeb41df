use serde::{Deserialize, Serialize};

use catalog_core::{CategoryId, Entity, Notification, ValidationHandler};

use crate::error::UseCaseError;
use crate::gateway::CategoryGateway;

const UPDATE_FAILED: &str = "Could not update Aggregate Category";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn new(
        id: impl Into<CategoryId>,
        name: Option<&str>,
        description: Option<&str>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

/// Rewrite an existing category.
#[derive(Debug)]
pub struct UpdateCategory<G> {
    categories: G,
}

impl<G: CategoryGateway> UpdateCategory<G> {
    pub fn new(categories: G) -> Self {
        Self { categories }
    }

    pub fn execute(&self, command: UpdateCategoryCommand) -> Result<UpdateCategoryOutput, UseCaseError> {
        let UpdateCategoryCommand {
            id,
            name,
            description,
            is_active,
        } = command;

        let mut category = self
            .categories
            .find_by_id(&id)?
            .ok_or_else(|| UseCaseError::not_found("Category", &id))?;

        let mut notification = Notification::create();
        let applied = notification.validate(|| category.update(name, description, is_active))?;
        if applied.is_none() || notification.has_error() {
            tracing::debug!(
                category_id = %id,
                errors = notification.errors().len(),
                "category update rejected"
            );
            return Err(UseCaseError::notification(UPDATE_FAILED, notification));
        }

        let updated = self.categories.update(category)?;
        tracing::info!(category_id = %updated.id(), "category updated");
        Ok(UpdateCategoryOutput {
            id: updated.id().clone(),
        })
    }
}
