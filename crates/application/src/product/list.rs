use serde::Serialize;

use catalog_core::{CategoryId, Entity, Pagination, ProductId, SearchQuery};
use catalog_products::{Money, Product, ProductStatus};

use crate::error::UseCaseError;
use crate::gateway::ProductGateway;

/// Summary row of a product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListOutput {
    pub id: ProductId,
    pub name: String,
    pub price: Option<Money>,
    pub stock: i32,
    pub status: ProductStatus,
    pub category_id: Option<CategoryId>,
    pub store_id: Option<String>,
    pub featured_image: Option<String>,
}

impl From<Product> for ProductListOutput {
    fn from(product: Product) -> Self {
        Self {
            id: product.id().clone(),
            name: product.name().unwrap_or_default().to_string(),
            price: product.price().cloned(),
            stock: product.stock(),
            status: product.status(),
            category_id: product.category_id().cloned(),
            store_id: product.store().map(|s| s.id().to_string()),
            featured_image: product
                .images()
                .iter()
                .find(|image| image.is_featured())
                .and_then(|image| image.location())
                .map(str::to_string),
        }
    }
}

#[derive(Debug)]
pub struct ListProducts<G> {
    products: G,
}

impl<G: ProductGateway> ListProducts<G> {
    pub fn new(products: G) -> Self {
        Self { products }
    }

    pub fn execute(&self, query: &SearchQuery) -> Result<Pagination<ProductListOutput>, UseCaseError> {
        let page = self.products.find_all(query)?;
        tracing::debug!(total = page.total, page = page.current_page, "products listed");
        Ok(page.map(ProductListOutput::from))
    }
}
