use catalog_core::{Entity, ProductImageId};

use super::ProductImageOutput;
use crate::error::UseCaseError;
use crate::gateway::{ProductGateway, ProductImageGateway};

/// Fetch one stored image, bytes included.
#[derive(Debug)]
pub struct GetProductImage<P, I> {
    products: P,
    images: I,
}

impl<P: ProductGateway, I: ProductImageGateway> GetProductImage<P, I> {
    pub fn new(products: P, images: I) -> Self {
        Self { products, images }
    }

    pub fn execute(&self, image_id: &ProductImageId) -> Result<ProductImageOutput, UseCaseError> {
        let not_found = || UseCaseError::not_found("ProductImage", image_id);

        let product = self.products.find_by_image_id(image_id)?.ok_or_else(not_found)?;
        let store = product.store().ok_or_else(not_found)?;
        let image = self
            .images
            .get_image(store, product.id(), image_id)?
            .ok_or_else(not_found)?;
        Ok(ProductImageOutput::from(&image))
    }
}
