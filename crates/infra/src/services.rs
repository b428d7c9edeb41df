//! Wiring of the catalog use cases over the in-memory gateways.

use std::sync::Arc;

use catalog_application::category::{
    CreateCategory, GetCategoryById, ListCategories, UpdateCategory,
};
use catalog_application::product::{
    CreateProduct, GetProductById, GetProductImage, ListProducts, UpdateProduct,
};
use catalog_application::store::CreateStore;
use catalog_core::{SearchQuery, SortDirection};

use crate::config::CatalogConfig;
use crate::gateways::{
    InMemoryCategoryGateway, InMemoryProductGateway, InMemoryProductImageGateway,
    InMemoryStoreGateway,
};

type Categories = Arc<InMemoryCategoryGateway>;
type Products = Arc<InMemoryProductGateway>;
type Stores = Arc<InMemoryStoreGateway>;
type Images = Arc<InMemoryProductImageGateway>;

/// Shared gateways plus factories for every use case.
#[derive(Debug, Clone)]
pub struct CatalogServices {
    config: CatalogConfig,
    categories: Categories,
    products: Products,
    stores: Stores,
    images: Images,
}

impl CatalogServices {
    pub fn in_memory(config: CatalogConfig) -> Self {
        Self {
            config,
            categories: Arc::new(InMemoryCategoryGateway::new()),
            products: Arc::new(InMemoryProductGateway::new()),
            stores: Arc::new(InMemoryStoreGateway::new()),
            images: Arc::new(InMemoryProductImageGateway::new()),
        }
    }

    /// Read configuration from the environment, install tracing and wire
    /// the in-memory gateways.
    pub fn bootstrap() -> Self {
        let config = CatalogConfig::from_env();
        catalog_observability::init_with(&config.tracing());
        tracing::info!(
            image_base = %config.image_base_location,
            max_page_size = config.max_page_size,
            "catalog services ready"
        );
        Self::in_memory(config)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn images(&self) -> &Images {
        &self.images
    }

    /// First page with the configured default size.
    pub fn default_query(&self) -> SearchQuery {
        SearchQuery::new(0, self.config.default_page_size, "", "name", SortDirection::Asc)
    }

    /// Apply the configured page-size ceiling to a caller-supplied query.
    pub fn bounded(&self, query: SearchQuery) -> SearchQuery {
        query.clamped(self.config.max_page_size)
    }

    pub fn create_category(&self) -> CreateCategory<Categories> {
        CreateCategory::new(self.categories.clone())
    }

    pub fn update_category(&self) -> UpdateCategory<Categories> {
        UpdateCategory::new(self.categories.clone())
    }

    pub fn get_category(&self) -> GetCategoryById<Categories> {
        GetCategoryById::new(self.categories.clone())
    }

    pub fn list_categories(&self) -> ListCategories<Categories> {
        ListCategories::new(self.categories.clone())
    }

    pub fn create_store(&self) -> CreateStore<Stores> {
        CreateStore::new(self.stores.clone())
    }

    pub fn create_product(&self) -> CreateProduct<Products, Categories, Stores, Images> {
        CreateProduct::new(
            self.products.clone(),
            self.categories.clone(),
            self.stores.clone(),
            self.images.clone(),
        )
        .with_image_base(self.config.image_base_location.clone())
    }

    pub fn update_product(&self) -> UpdateProduct<Products, Categories, Stores> {
        UpdateProduct::new(
            self.products.clone(),
            self.categories.clone(),
            self.stores.clone(),
        )
    }

    pub fn get_product(&self) -> GetProductById<Products> {
        GetProductById::new(self.products.clone())
    }

    pub fn list_products(&self) -> ListProducts<Products> {
        ListProducts::new(self.products.clone())
    }

    pub fn get_product_image(&self) -> GetProductImage<Products, Images> {
        GetProductImage::new(self.products.clone(), self.images.clone())
    }
}

impl Default for CatalogServices {
    fn default() -> Self {
        Self::in_memory(CatalogConfig::default())
    }
}
