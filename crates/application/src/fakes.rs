//! Counting in-memory gateways for use-case tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use catalog_categories::Category;
use catalog_core::{CategoryId, Entity, Pagination, ProductId, ProductImageId, SearchQuery};
use catalog_products::{Product, ProductImage, Store};

use crate::gateway::{
    CategoryGateway, GatewayError, GatewayResult, ProductGateway, ProductImageGateway,
    StoreGateway,
};

#[derive(Debug, Default)]
pub struct Calls(AtomicUsize);

impl Calls {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Default)]
pub struct FakeCategories {
    pub items: Mutex<HashMap<CategoryId, Category>>,
    pub exists_calls: Calls,
    pub create_calls: Calls,
    pub update_calls: Calls,
    pub fail_writes: AtomicBool,
}

impl FakeCategories {
    pub fn with(categories: Vec<Category>) -> Self {
        let fake = Self::default();
        {
            let mut items = fake.items.lock().unwrap();
            for category in categories {
                items.insert(category.id().clone(), category);
            }
        }
        fake
    }

    fn write(&self, category: Category) -> GatewayResult<Category> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(GatewayError::Storage("category table unavailable".to_string()));
        }
        self.items
            .lock()
            .unwrap()
            .insert(category.id().clone(), category.clone());
        Ok(category)
    }
}

impl CategoryGateway for FakeCategories {
    fn create(&self, category: Category) -> GatewayResult<Category> {
        self.create_calls.hit();
        self.write(category)
    }

    fn update(&self, category: Category) -> GatewayResult<Category> {
        self.update_calls.hit();
        self.write(category)
    }

    fn find_by_id(&self, id: &CategoryId) -> GatewayResult<Option<Category>> {
        Ok(self.items.lock().unwrap().get(id).cloned())
    }

    fn exists_by_id(&self, id: &CategoryId) -> GatewayResult<bool> {
        self.exists_calls.hit();
        Ok(self.items.lock().unwrap().contains_key(id))
    }

    fn find_all(&self, query: &SearchQuery) -> GatewayResult<Pagination<Category>> {
        let mut items: Vec<_> = self.items.lock().unwrap().values().cloned().collect();
        items.sort_by(|a, b| a.name().cmp(&b.name()));
        let total = items.len() as u64;
        Ok(Pagination::new(query.page, query.per_page, total, items))
    }
}

#[derive(Debug, Default)]
pub struct FakeProducts {
    pub items: Mutex<HashMap<ProductId, Product>>,
    pub create_calls: Calls,
    pub update_calls: Calls,
    pub fail_writes: AtomicBool,
}

impl FakeProducts {
    pub fn with(products: Vec<Product>) -> Self {
        let fake = Self::default();
        {
            let mut items = fake.items.lock().unwrap();
            for product in products {
                items.insert(product.id().clone(), product);
            }
        }
        fake
    }

    fn write(&self, product: Product) -> GatewayResult<Product> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(GatewayError::Storage("product table unavailable".to_string()));
        }
        self.items
            .lock()
            .unwrap()
            .insert(product.id().clone(), product.clone());
        Ok(product)
    }
}

impl ProductGateway for FakeProducts {
    fn create(&self, product: Product) -> GatewayResult<Product> {
        self.create_calls.hit();
        self.write(product)
    }

    fn update(&self, product: Product) -> GatewayResult<Product> {
        self.update_calls.hit();
        self.write(product)
    }

    fn find_by_id(&self, id: &ProductId) -> GatewayResult<Option<Product>> {
        Ok(self.items.lock().unwrap().get(id).cloned())
    }

    fn find_by_image_id(&self, id: &ProductImageId) -> GatewayResult<Option<Product>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .find(|p| p.images().iter().any(|i| i.id() == id))
            .cloned())
    }

    fn find_all(&self, query: &SearchQuery) -> GatewayResult<Pagination<Product>> {
        let mut items: Vec<_> = self.items.lock().unwrap().values().cloned().collect();
        items.sort_by(|a, b| a.name().cmp(&b.name()));
        let total = items.len() as u64;
        Ok(Pagination::new(query.page, query.per_page, total, items))
    }

    fn exists_by_ids(&self, ids: &[ProductId]) -> GatewayResult<Vec<ProductId>> {
        let items = self.items.lock().unwrap();
        Ok(ids.iter().filter(|id| items.contains_key(*id)).cloned().collect())
    }
}

#[derive(Debug, Default)]
pub struct FakeStores {
    pub ids: Mutex<HashSet<String>>,
    pub exists_calls: Calls,
    pub create_calls: Calls,
}

impl FakeStores {
    pub fn with(ids: &[&str]) -> Self {
        let fake = Self::default();
        fake.ids
            .lock()
            .unwrap()
            .extend(ids.iter().map(|id| id.to_string()));
        fake
    }
}

impl StoreGateway for FakeStores {
    fn create(&self, store: Store) -> GatewayResult<Store> {
        self.create_calls.hit();
        self.ids.lock().unwrap().insert(store.id().to_string());
        Ok(store)
    }

    fn exists_by_id(&self, id: &str) -> GatewayResult<bool> {
        self.exists_calls.hit();
        Ok(self.ids.lock().unwrap().contains(id))
    }
}

#[derive(Debug, Default)]
pub struct FakeImages {
    pub stored: Mutex<HashMap<(String, ProductId), Vec<ProductImage>>>,
    pub clear_calls: Calls,
}

impl FakeImages {
    pub fn stored_for(&self, store: &str, product_id: &ProductId) -> usize {
        self.stored
            .lock()
            .unwrap()
            .get(&(store.to_string(), product_id.clone()))
            .map_or(0, Vec::len)
    }
}

impl ProductImageGateway for FakeImages {
    fn create(
        &self,
        store: &Store,
        product_id: &ProductId,
        image: ProductImage,
    ) -> GatewayResult<ProductImage> {
        self.stored
            .lock()
            .unwrap()
            .entry((store.id().to_string(), product_id.clone()))
            .or_default()
            .push(image.clone());
        Ok(image.without_content())
    }

    fn create_many(
        &self,
        store: &Store,
        product_id: &ProductId,
        images: Vec<ProductImage>,
    ) -> GatewayResult<Vec<ProductImage>> {
        images
            .into_iter()
            .map(|image| self.create(store, product_id, image))
            .collect()
    }

    fn get_image(
        &self,
        store: &Store,
        product_id: &ProductId,
        image_id: &ProductImageId,
    ) -> GatewayResult<Option<ProductImage>> {
        Ok(self
            .stored
            .lock()
            .unwrap()
            .get(&(store.id().to_string(), product_id.clone()))
            .and_then(|images| images.iter().find(|i| i.id() == image_id).cloned()))
    }

    fn clear_images(&self, store: &Store, product_id: &ProductId) -> GatewayResult<()> {
        self.clear_calls.hit();
        self.stored
            .lock()
            .unwrap()
            .remove(&(store.id().to_string(), product_id.clone()));
        Ok(())
    }
}
