use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{
    AggregateRoot, CategoryId, DomainResult, Entity, ProductId, ValidationHandler, Validator, time,
};

use crate::image::ProductImage;
use crate::money::Money;
use crate::store::Store;
use crate::validator::ProductValidator;

/// Product status lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

/// The mutable state of a product, as supplied by a caller.
///
/// Optional fields are validated by the aggregate; a missing required field is
/// reported rather than rejected at the type level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDetails {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub stock: i32,
    pub status: ProductStatus,
    pub category_id: Option<CategoryId>,
    pub store: Option<Store>,
    pub images: Vec<ProductImage>,
}

/// Aggregate root: Product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: Option<String>,
    description: Option<String>,
    price: Option<Money>,
    stock: i32,
    status: ProductStatus,
    category_id: Option<CategoryId>,
    store: Option<Store>,
    images: Vec<ProductImage>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with a fresh identifier.
    pub fn new_product(details: ProductDetails) -> DomainResult<Self> {
        let now = time::now();
        let product = Self::with(ProductId::unique(), details, now, now);
        product.self_validate()?;
        Ok(product)
    }

    /// Rehydrate a persisted product. No validation is performed.
    ///
    /// Duplicate images (same checksum and location) are collapsed.
    pub fn with(
        id: ProductId,
        details: ProductDetails,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let ProductDetails {
            name,
            description,
            price,
            stock,
            status,
            category_id,
            store,
            images,
        } = details;
        let mut product = Self {
            id,
            name,
            description,
            price,
            stock,
            status,
            category_id,
            store,
            images: Vec::with_capacity(images.len()),
            created_at,
            updated_at,
        };
        product.insert_images(images);
        product
    }

    pub fn with_aggregate(other: &Product) -> Self {
        other.clone()
    }

    /// Rewrite every mutable field.
    ///
    /// `category_id` and `store` keep their current value when `None` is
    /// supplied. On error `self` is left untouched.
    pub fn update(&mut self, details: ProductDetails) -> DomainResult<()> {
        let mut candidate = self.clone();
        candidate.name = details.name;
        candidate.description = details.description;
        candidate.price = details.price;
        candidate.stock = details.stock;
        candidate.status = details.status;
        if let Some(category_id) = details.category_id {
            candidate.category_id = Some(category_id);
        }
        if let Some(store) = details.store {
            candidate.store = Some(store);
        }
        candidate.images.clear();
        candidate.insert_images(details.images);
        candidate.updated_at = time::next_after(candidate.updated_at);
        self.commit(candidate)
    }

    /// Attach images, skipping any equal to one already held.
    pub fn add_images(&mut self, images: Vec<ProductImage>) -> DomainResult<()> {
        let mut candidate = self.clone();
        candidate.insert_images(images);
        candidate.updated_at = time::next_after(candidate.updated_at);
        self.commit(candidate)
    }

    fn commit(&mut self, candidate: Product) -> DomainResult<()> {
        candidate.self_validate()?;
        *self = candidate;
        Ok(())
    }

    fn insert_images(&mut self, images: Vec<ProductImage>) {
        for image in images {
            if !self.images.contains(&image) {
                self.images.push(image);
            }
        }
    }

    /// The current state as details, e.g. to feed back into [`Product::update`].
    pub fn details(&self) -> ProductDetails {
        ProductDetails {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            stock: self.stock,
            status: self.status,
            category_id: self.category_id.clone(),
            store: self.store.clone(),
            images: self.images.clone(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Option<&Money> {
        self.price.as_ref()
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn category_id(&self) -> Option<&CategoryId> {
        self.category_id.as_ref()
    }

    pub fn store(&self) -> Option<&Store> {
        self.store.as_ref()
    }

    pub fn images(&self) -> &[ProductImage] {
        &self.images
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Product {
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        ProductValidator::new(self).validate(handler)
    }
}
