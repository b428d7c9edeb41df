use std::collections::HashMap;
use std::sync::RwLock;

use catalog_application::{GatewayError, GatewayResult, ProductGateway};
use catalog_core::{Entity, Pagination, ProductId, ProductImageId, SearchQuery};
use catalog_products::Product;

use super::search::search;
use super::{read, write};

#[derive(Debug, Default)]
pub struct InMemoryProductGateway {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductGateway for InMemoryProductGateway {
    fn create(&self, product: Product) -> GatewayResult<Product> {
        let mut map = write(&self.inner, "product")?;
        if map.contains_key(product.id()) {
            return Err(GatewayError::Conflict(format!(
                "product {} already exists",
                product.id()
            )));
        }
        map.insert(product.id().clone(), product.clone());
        Ok(product)
    }

    fn update(&self, product: Product) -> GatewayResult<Product> {
        let mut map = write(&self.inner, "product")?;
        match map.get_mut(product.id()) {
            Some(slot) => {
                *slot = product.clone();
                Ok(product)
            }
            None => Err(GatewayError::Storage(format!(
                "product {} does not exist",
                product.id()
            ))),
        }
    }

    fn find_by_id(&self, id: &ProductId) -> GatewayResult<Option<Product>> {
        Ok(read(&self.inner, "product")?.get(id).cloned())
    }

    fn find_by_image_id(&self, id: &ProductImageId) -> GatewayResult<Option<Product>> {
        Ok(read(&self.inner, "product")?
            .values()
            .find(|product| product.images().iter().any(|image| image.id() == id))
            .cloned())
    }

    fn find_all(&self, query: &SearchQuery) -> GatewayResult<Pagination<Product>> {
        Ok(search(read(&self.inner, "product")?.values(), query))
    }

    fn exists_by_ids(&self, ids: &[ProductId]) -> GatewayResult<Vec<ProductId>> {
        let map = read(&self.inner, "product")?;
        Ok(ids.iter().filter(|id| map.contains_key(*id)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::CategoryId;
    use catalog_products::{Money, ProductDetails, ProductImage, Store};

    fn product(name: &str) -> Product {
        Product::new_product(ProductDetails {
            name: Some(name.to_string()),
            description: Some("A product".to_string()),
            price: Some(Money::parse("10", "BRL").unwrap()),
            stock: 1,
            category_id: Some(CategoryId::from("c1")),
            store: Some(Store::new("s1", "Main")),
            ..ProductDetails::default()
        })
        .unwrap()
    }

    #[test]
    fn exists_by_ids_keeps_input_order() {
        let gateway = InMemoryProductGateway::new();
        let a = gateway.create(product("Alpha")).unwrap();
        let b = gateway.create(product("Bravo")).unwrap();

        let found = gateway
            .exists_by_ids(&[b.id().clone(), ProductId::from("ghost"), a.id().clone()])
            .unwrap();

        assert_eq!(found, vec![b.id().clone(), a.id().clone()]);
    }

    #[test]
    fn finds_owner_of_an_image() {
        let gateway = InMemoryProductGateway::new();
        let image = ProductImage::from_content("a.png", b"a".to_vec(), "images/a", 0, false).unwrap();
        let mut owner = product("Alpha");
        owner.add_images(vec![image.clone()]).unwrap();
        gateway.create(owner.clone()).unwrap();
        gateway.create(product("Bravo")).unwrap();

        let found = gateway.find_by_image_id(image.id()).unwrap();

        assert_eq!(found.map(|p| p.id().clone()), Some(owner.id().clone()));
        assert!(
            gateway
                .find_by_image_id(&ProductImageId::from("ghost"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn update_replaces_stored_product() {
        let gateway = InMemoryProductGateway::new();
        let mut stored = gateway.create(product("Alpha")).unwrap();
        stored
            .update(ProductDetails {
                stock: 7,
                ..stored.details()
            })
            .unwrap();

        gateway.update(stored.clone()).unwrap();

        assert_eq!(gateway.find_by_id(stored.id()).unwrap().unwrap().stock(), 7);
    }
}
