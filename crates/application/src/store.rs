//! Store registration.

use serde::{Deserialize, Serialize};

use catalog_core::validation::check_required_text;
use catalog_core::{Notification, ValidationHandler};
use catalog_products::Store;

use crate::error::UseCaseError;
use crate::gateway::StoreGateway;

const CREATE_FAILED: &str = "Could not create Aggregate Store";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStoreCommand {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl CreateStoreCommand {
    pub fn new(id: Option<&str>, name: Option<&str>) -> Self {
        Self {
            id: id.map(str::to_string),
            name: name.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateStoreOutput {
    pub id: String,
}

#[derive(Debug)]
pub struct CreateStore<G> {
    stores: G,
}

impl<G: StoreGateway> CreateStore<G> {
    pub fn new(stores: G) -> Self {
        Self { stores }
    }

    pub fn execute(&self, command: CreateStoreCommand) -> Result<CreateStoreOutput, UseCaseError> {
        let mut notification = Notification::create();
        check_required_text(&mut notification, "id", command.id.as_deref())?;
        check_required_text(&mut notification, "name", command.name.as_deref())?;

        let (Some(id), Some(name)) = (command.id, command.name) else {
            return Err(UseCaseError::notification(CREATE_FAILED, notification));
        };
        if notification.has_error() {
            return Err(UseCaseError::notification(CREATE_FAILED, notification));
        }

        let created = self.stores.create(Store::new(id.trim(), name.trim()))?;
        tracing::info!(store_id = created.id(), "store created");
        Ok(CreateStoreOutput {
            id: created.id().to_string(),
        })
    }
}
