//! Product use cases.

pub mod create;
pub mod get;
pub mod image;
pub mod list;
pub mod update;

use chrono::{DateTime, Utc};
use serde::Serialize;

use catalog_core::{
    CategoryId, Entity, Notification, ProductId, ProductImageId, ValidationError,
    ValidationHandler,
};
use catalog_products::{Money, Product, ProductImage, ProductStatus, Store};

use crate::error::UseCaseError;
use crate::gateway::{CategoryGateway, StoreGateway};

pub use create::{CreateProduct, CreateProductCommand, CreateProductOutput, ImageUpload};
pub use get::GetProductById;
pub use image::GetProductImage;
pub use list::{ListProducts, ProductListOutput};
pub use update::{UpdateProduct, UpdateProductCommand, UpdateProductOutput};

/// Image metadata (and bytes, when requested individually).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductImageOutput {
    pub id: ProductImageId,
    pub name: String,
    pub checksum: String,
    pub location: String,
    pub order: u32,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<u8>>,
}

impl From<&ProductImage> for ProductImageOutput {
    fn from(image: &ProductImage) -> Self {
        Self {
            id: image.id().clone(),
            name: image.name().unwrap_or_default().to_string(),
            checksum: image.checksum().unwrap_or_default().to_string(),
            location: image.location().unwrap_or_default().to_string(),
            order: image.order(),
            featured: image.is_featured(),
            content: image.content().map(<[u8]>::to_vec),
        }
    }
}

/// Full view of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductOutput {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Option<Money>,
    pub stock: i32,
    pub status: ProductStatus,
    pub category_id: Option<CategoryId>,
    pub store: Option<Store>,
    pub images: Vec<ProductImageOutput>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductOutput {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().clone(),
            name: product.name().unwrap_or_default().to_string(),
            description: product.description().unwrap_or_default().to_string(),
            price: product.price().cloned(),
            stock: product.stock(),
            status: product.status(),
            category_id: product.category_id().cloned(),
            store: product.store().cloned(),
            images: product
                .images()
                .iter()
                .map(|image| ProductImageOutput {
                    content: None,
                    ..ProductImageOutput::from(image)
                })
                .collect(),
            created_at: product.created_at(),
            updated_at: product.updated_at(),
        }
    }
}

/// Append an error when the referenced category does not exist.
pub(crate) fn check_category<C: CategoryGateway>(
    categories: &C,
    category_id: Option<&CategoryId>,
    notification: &mut Notification,
) -> Result<(), UseCaseError> {
    if let Some(id) = category_id {
        if !categories.exists_by_id(id)? {
            notification.append(ValidationError::new(format!(
                "Category with ID: {id} could not be found"
            )))?;
        }
    }
    Ok(())
}

/// Append an error when the referenced store does not exist.
///
/// A store without an id is left to the product validator.
pub(crate) fn check_store<S: StoreGateway>(
    stores: &S,
    store: Option<&Store>,
    notification: &mut Notification,
) -> Result<(), UseCaseError> {
    if let Some(store) = store.filter(|s| s.has_id()) {
        if !stores.exists_by_id(store.id())? {
            notification.append(ValidationError::new(format!(
                "Store with ID: {} could not be found",
                store.id()
            )))?;
        }
    }
    Ok(())
}
