use catalog_core::ProductId;

use super::ProductOutput;
use crate::error::UseCaseError;
use crate::gateway::ProductGateway;

#[derive(Debug)]
pub struct GetProductById<G> {
    products: G,
}

impl<G: ProductGateway> GetProductById<G> {
    pub fn new(products: G) -> Self {
        Self { products }
    }

    pub fn execute(&self, id: &ProductId) -> Result<ProductOutput, UseCaseError> {
        self.products
            .find_by_id(id)?
            .map(|product| ProductOutput::from(&product))
            .ok_or_else(|| UseCaseError::not_found("Product", id))
    }
}
