//! Gateway contracts consumed by the use cases.
//!
//! Gateways are synchronous and take `&self`; implementations own whatever
//! synchronisation they need. The core never retries or wraps their errors.

use std::sync::Arc;

use thiserror::Error;

use catalog_categories::Category;
use catalog_core::{CategoryId, Pagination, ProductId, ProductImageId, SearchQuery};
use catalog_products::{Product, ProductImage, Store};

/// Gateway operation error (storage, transport, anything non-domain).
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("storage failure: {0}")]
    Storage(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

pub trait CategoryGateway: Send + Sync {
    fn create(&self, category: Category) -> GatewayResult<Category>;
    fn update(&self, category: Category) -> GatewayResult<Category>;
    fn find_by_id(&self, id: &CategoryId) -> GatewayResult<Option<Category>>;
    fn exists_by_id(&self, id: &CategoryId) -> GatewayResult<bool>;
    fn find_all(&self, query: &SearchQuery) -> GatewayResult<Pagination<Category>>;
}

pub trait ProductGateway: Send + Sync {
    fn create(&self, product: Product) -> GatewayResult<Product>;
    fn update(&self, product: Product) -> GatewayResult<Product>;
    fn find_by_id(&self, id: &ProductId) -> GatewayResult<Option<Product>>;
    fn find_by_image_id(&self, id: &ProductImageId) -> GatewayResult<Option<Product>>;
    fn find_all(&self, query: &SearchQuery) -> GatewayResult<Pagination<Product>>;
    /// The subset of `ids` that exist, in input order.
    fn exists_by_ids(&self, ids: &[ProductId]) -> GatewayResult<Vec<ProductId>>;
}

pub trait StoreGateway: Send + Sync {
    fn create(&self, store: Store) -> GatewayResult<Store>;
    fn exists_by_id(&self, id: &str) -> GatewayResult<bool>;
}

/// Binary storage for product images.
pub trait ProductImageGateway: Send + Sync {
    fn create(
        &self,
        store: &Store,
        product_id: &ProductId,
        image: ProductImage,
    ) -> GatewayResult<ProductImage>;

    fn create_many(
        &self,
        store: &Store,
        product_id: &ProductId,
        images: Vec<ProductImage>,
    ) -> GatewayResult<Vec<ProductImage>>;

    fn get_image(
        &self,
        store: &Store,
        product_id: &ProductId,
        image_id: &ProductImageId,
    ) -> GatewayResult<Option<ProductImage>>;

    /// Remove every stored image of a product.
    fn clear_images(&self, store: &Store, product_id: &ProductId) -> GatewayResult<()>;
}

impl<G> CategoryGateway for Arc<G>
where
    G: CategoryGateway + ?Sized,
{
    fn create(&self, category: Category) -> GatewayResult<Category> {
        (**self).create(category)
    }

    fn update(&self, category: Category) -> GatewayResult<Category> {
        (**self).update(category)
    }

    fn find_by_id(&self, id: &CategoryId) -> GatewayResult<Option<Category>> {
        (**self).find_by_id(id)
    }

    fn exists_by_id(&self, id: &CategoryId) -> GatewayResult<bool> {
        (**self).exists_by_id(id)
    }

    fn find_all(&self, query: &SearchQuery) -> GatewayResult<Pagination<Category>> {
        (**self).find_all(query)
    }
}

impl<G> ProductGateway for Arc<G>
where
    G: ProductGateway + ?Sized,
{
    fn create(&self, product: Product) -> GatewayResult<Product> {
        (**self).create(product)
    }

    fn update(&self, product: Product) -> GatewayResult<Product> {
        (**self).update(product)
    }

    fn find_by_id(&self, id: &ProductId) -> GatewayResult<Option<Product>> {
        (**self).find_by_id(id)
    }

    fn find_by_image_id(&self, id: &ProductImageId) -> GatewayResult<Option<Product>> {
        (**self).find_by_image_id(id)
    }

    fn find_all(&self, query: &SearchQuery) -> GatewayResult<Pagination<Product>> {
        (**self).find_all(query)
    }

    fn exists_by_ids(&self, ids: &[ProductId]) -> GatewayResult<Vec<ProductId>> {
        (**self).exists_by_ids(ids)
    }
}

impl<G> StoreGateway for Arc<G>
where
    G: StoreGateway + ?Sized,
{
    fn create(&self, store: Store) -> GatewayResult<Store> {
        (**self).create(store)
    }

    fn exists_by_id(&self, id: &str) -> GatewayResult<bool> {
        (**self).exists_by_id(id)
    }
}

impl<G> ProductImageGateway for Arc<G>
where
    G: ProductImageGateway + ?Sized,
{
    fn create(
        &self,
        store: &Store,
        product_id: &ProductId,
        image: ProductImage,
    ) -> GatewayResult<ProductImage> {
        (**self).create(store, product_id, image)
    }

    fn create_many(
        &self,
        store: &Store,
        product_id: &ProductId,
        images: Vec<ProductImage>,
    ) -> GatewayResult<Vec<ProductImage>> {
        (**self).create_many(store, product_id, images)
    }

    fn get_image(
        &self,
        store: &Store,
        product_id: &ProductId,
        image_id: &ProductImageId,
    ) -> GatewayResult<Option<ProductImage>> {
        (**self).get_image(store, product_id, image_id)
    }

    fn clear_images(&self, store: &Store, product_id: &ProductId) -> GatewayResult<()> {
        (**self).clear_images(store, product_id)
    }
}
