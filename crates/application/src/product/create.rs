use serde::{Deserialize, Serialize};

use catalog_core::{CategoryId, Entity, Notification, ProductId, ValidationHandler};
use catalog_products::image::checksum_of;
use catalog_products::{Money, Product, ProductDetails, ProductImage, ProductStatus, Store};

use super::{check_category, check_store};
use crate::error::UseCaseError;
use crate::gateway::{CategoryGateway, ProductGateway, ProductImageGateway, StoreGateway};

const CREATE_FAILED: &str = "Could not create Aggregate Product";

/// Location prefix used when none is configured.
pub const DEFAULT_IMAGE_BASE: &str = "images";

/// Raw image bytes sent along with a new product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpload {
    pub name: String,
    pub content: Vec<u8>,
    #[serde(default)]
    pub featured: bool,
}

impl ImageUpload {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>, featured: bool) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            featured,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProductCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub stock: i32,
    #[serde(default)]
    pub status: ProductStatus,
    pub category_id: Option<CategoryId>,
    pub store: Option<Store>,
    #[serde(default)]
    pub images: Vec<ImageUpload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateProductOutput {
    pub id: ProductId,
}

/// Validate a new product against its category and store, upload its images
/// and persist it.
#[derive(Debug)]
pub struct CreateProduct<P, C, S, I> {
    products: P,
    categories: C,
    stores: S,
    images: I,
    image_base: String,
}

impl<P, C, S, I> CreateProduct<P, C, S, I>
where
    P: ProductGateway,
    C: CategoryGateway,
    S: StoreGateway,
    I: ProductImageGateway,
{
    pub fn new(products: P, categories: C, stores: S, images: I) -> Self {
        Self {
            products,
            categories,
            stores,
            images,
            image_base: DEFAULT_IMAGE_BASE.to_string(),
        }
    }

    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = base.into();
        self
    }

    pub fn execute(&self, command: CreateProductCommand) -> Result<CreateProductOutput, UseCaseError> {
        let CreateProductCommand {
            name,
            description,
            price,
            stock,
            status,
            category_id,
            store,
            images: uploads,
        } = command;

        let mut notification = Notification::create();
        check_category(&self.categories, category_id.as_ref(), &mut notification)?;
        check_store(&self.stores, store.as_ref(), &mut notification)?;

        let details = ProductDetails {
            name,
            description,
            price,
            stock,
            status,
            category_id,
            store,
            images: Vec::new(),
        };
        let product = notification.validate(|| Product::new_product(details))?;
        let pending = match &product {
            Some(product) => self.build_images(product, &uploads, &mut notification)?,
            None => Vec::new(),
        };

        let product = match product {
            Some(product) if !notification.has_error() => product,
            _ => {
                tracing::debug!(errors = notification.errors().len(), "product rejected");
                return Err(UseCaseError::notification(CREATE_FAILED, notification));
            }
        };

        let created = match product.store().cloned() {
            Some(store) if !pending.is_empty() => self.persist_with_images(product, &store, pending)?,
            _ => self.products.create(product)?,
        };
        tracing::info!(
            product_id = %created.id(),
            images = created.images().len(),
            "product created"
        );
        Ok(CreateProductOutput {
            id: created.id().clone(),
        })
    }

    fn build_images(
        &self,
        product: &Product,
        uploads: &[ImageUpload],
        notification: &mut Notification,
    ) -> Result<Vec<ProductImage>, UseCaseError> {
        let Some(store) = product.store() else {
            return Ok(Vec::new());
        };

        let mut images = Vec::with_capacity(uploads.len());
        for (order, upload) in (0u32..).zip(uploads) {
            let checksum = checksum_of(&upload.content);
            let location = image_location(&self.image_base, store.id(), product.id(), &checksum);
            let image = notification.validate(|| {
                ProductImage::new(
                    Some(checksum),
                    Some(upload.content.clone()),
                    Some(upload.name.clone()),
                    Some(location),
                    order,
                    upload.featured,
                )
            })?;
            // same bytes map to the same location; upload them once
            if let Some(image) = image.filter(|image| !images.contains(image)) {
                images.push(image);
            }
        }
        Ok(images)
    }

    fn persist_with_images(
        &self,
        mut product: Product,
        store: &Store,
        images: Vec<ProductImage>,
    ) -> Result<Product, UseCaseError> {
        let product_id = product.id().clone();
        let result = self
            .images
            .create_many(store, &product_id, images)
            .map_err(UseCaseError::from)
            .and_then(|uploaded| {
                product.add_images(uploaded)?;
                Ok(self.products.create(product)?)
            });

        if let Err(cause) = &result {
            tracing::warn!(product_id = %product_id, error = %cause, "clearing images of failed product");
            if let Err(cleanup) = self.images.clear_images(store, &product_id) {
                tracing::error!(
                    product_id = %product_id,
                    error = %cleanup,
                    "failed to clear uploaded images"
                );
            }
        }
        result
    }
}

/// `<base>/<store id>/<product id>/<checksum>`
pub fn image_location(base: &str, store_id: &str, product_id: &ProductId, checksum: &str) -> String {
    format!(
        "{}/{store_id}/{product_id}/{checksum}",
        base.trim_end_matches('/')
    )
}
