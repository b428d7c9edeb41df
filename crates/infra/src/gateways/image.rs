use std::collections::HashMap;
use std::sync::RwLock;

use catalog_application::{GatewayResult, ProductImageGateway};
use catalog_core::{Entity, ProductId, ProductImageId};
use catalog_products::{ProductImage, Store};

use super::{read, write};

type ImageKey = (String, ProductId, ProductImageId);

/// Image bytes keyed by (store, product, image).
#[derive(Debug, Default)]
pub struct InMemoryProductImageGateway {
    inner: RwLock<HashMap<ImageKey, ProductImage>>,
}

impl InMemoryProductImageGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images held for a product.
    pub fn count_for(&self, store: &Store, product_id: &ProductId) -> usize {
        self.inner
            .read()
            .map(|map| {
                map.keys()
                    .filter(|(s, p, _)| s == store.id() && p == product_id)
                    .count()
            })
            .unwrap_or(0)
    }
}

fn key(store: &Store, product_id: &ProductId, image_id: &ProductImageId) -> ImageKey {
    (store.id().to_string(), product_id.clone(), image_id.clone())
}

impl ProductImageGateway for InMemoryProductImageGateway {
    fn create(
        &self,
        store: &Store,
        product_id: &ProductId,
        image: ProductImage,
    ) -> GatewayResult<ProductImage> {
        let reference = image.without_content();
        write(&self.inner, "image")?.insert(key(store, product_id, image.id()), image);
        Ok(reference)
    }

    fn create_many(
        &self,
        store: &Store,
        product_id: &ProductId,
        images: Vec<ProductImage>,
    ) -> GatewayResult<Vec<ProductImage>> {
        let mut map = write(&self.inner, "image")?;
        Ok(images
            .into_iter()
            .map(|image| {
                let reference = image.without_content();
                map.insert(key(store, product_id, image.id()), image);
                reference
            })
            .collect())
    }

    fn get_image(
        &self,
        store: &Store,
        product_id: &ProductId,
        image_id: &ProductImageId,
    ) -> GatewayResult<Option<ProductImage>> {
        Ok(read(&self.inner, "image")?
            .get(&key(store, product_id, image_id))
            .cloned())
    }

    fn clear_images(&self, store: &Store, product_id: &ProductId) -> GatewayResult<()> {
        let removed = {
            let mut map = write(&self.inner, "image")?;
            let before = map.len();
            map.retain(|(s, p, _), _| !(s == store.id() && p == product_id));
            before - map.len()
        };
        tracing::debug!(store_id = store.id(), product_id = %product_id, removed, "images cleared");
        Ok(())
    }
}
