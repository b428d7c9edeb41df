use serde::{Deserialize, Serialize};

use catalog_categories::Category;
use catalog_core::{CategoryId, Entity, Notification, ValidationHandler};

use crate::error::UseCaseError;
use crate::gateway::CategoryGateway;

const CREATE_FAILED: &str = "Could not create Aggregate Category";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn new(name: Option<&str>, description: Option<&str>, is_active: bool) -> Self {
        Self {
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

/// Validate and persist a new category.
#[derive(Debug)]
pub struct CreateCategory<G> {
    categories: G,
}

impl<G: CategoryGateway> CreateCategory<G> {
    pub fn new(categories: G) -> Self {
        Self { categories }
    }

    pub fn execute(&self, command: CreateCategoryCommand) -> Result<CreateCategoryOutput, UseCaseError> {
        let CreateCategoryCommand {
            name,
            description,
            is_active,
        } = command;

        let mut notification = Notification::create();
        let category = match notification
            .validate(|| Category::new_category(name, description, is_active))?
        {
            Some(category) if !notification.has_error() => category,
            _ => {
                tracing::debug!(errors = notification.errors().len(), "category rejected");
                return Err(UseCaseError::notification(CREATE_FAILED, notification));
            }
        };

        let created = self.categories.create(category)?;
        tracing::info!(category_id = %created.id(), "category created");
        Ok(CreateCategoryOutput {
            id: created.id().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::FakeCategories;
    use crate::gateway::GatewayError;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    #[test]
    fn creates_valid_category() {
        let gateway = Arc::new(FakeCategories::default());
        let use_case = CreateCategory::new(gateway.clone());

        let output = use_case
            .execute(CreateCategoryCommand::new(Some("Movies"), Some("Films"), true))
            .unwrap();

        assert_eq!(gateway.create_calls.count(), 1);
        let stored = gateway.items.lock().unwrap().get(&output.id).cloned().unwrap();
        assert_eq!(stored.name(), Some("Movies"));
        assert!(stored.is_active());
    }

    #[test]
    fn creates_inactive_category_with_deleted_at() {
        let gateway = Arc::new(FakeCategories::default());
        let output = CreateCategory::new(gateway.clone())
            .execute(CreateCategoryCommand::new(Some("Movies"), None, false))
            .unwrap();

        let stored = gateway.items.lock().unwrap().get(&output.id).cloned().unwrap();
        assert!(!stored.is_active());
        assert!(stored.deleted_at().is_some());
    }

    #[test]
    fn null_name_is_reported_and_nothing_is_persisted() {
        let gateway = Arc::new(FakeCategories::default());
        let err = CreateCategory::new(gateway.clone())
            .execute(CreateCategoryCommand::new(None, None, true))
            .unwrap_err();

        assert_eq!(err.to_string(), "Could not create Aggregate Category");
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.first_error().unwrap().message, "'name' should not be null");
        assert_eq!(gateway.create_calls.count(), 0);
    }

    #[test]
    fn gateway_failure_propagates_unchanged() {
        let gateway = Arc::new(FakeCategories::default());
        gateway.fail_writes.store(true, Ordering::SeqCst);

        let err = CreateCategory::new(gateway)
            .execute(CreateCategoryCommand::new(Some("Movies"), None, true))
            .unwrap_err();

        assert!(matches!(err, UseCaseError::Gateway(GatewayError::Storage(_))));
    }
}
