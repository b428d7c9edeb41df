use catalog_core::CategoryId;

use super::CategoryOutput;
use crate::error::UseCaseError;
use crate::gateway::CategoryGateway;

#[derive(Debug)]
pub struct GetCategoryById<G> {
    categories: G,
}

impl<G: CategoryGateway> GetCategoryById<G> {
    pub fn new(categories: G) -> Self {
        Self { categories }
    }

    pub fn execute(&self, id: &CategoryId) -> Result<CategoryOutput, UseCaseError> {
        self.categories
            .find_by_id(id)?
            .map(|category| CategoryOutput::from(&category))
            .ok_or_else(|| UseCaseError::not_found("Category", id))
    }
}
