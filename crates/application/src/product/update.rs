use serde::{Deserialize, Serialize};

use catalog_core::{CategoryId, Entity, Notification, ProductId, ValidationHandler};
use catalog_products::{Money, ProductDetails, ProductStatus, Store};

use super::{check_category, check_store};
use crate::error::UseCaseError;
use crate::gateway::{CategoryGateway, ProductGateway, StoreGateway};

const UPDATE_FAILED: &str = "Could not update Aggregate Product";

/// New state for an existing product.
///
/// `category_id` and `store` keep their current value when absent. Images are
/// not touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub stock: i32,
    #[serde(default)]
    pub status: ProductStatus,
    pub category_id: Option<CategoryId>,
    pub store: Option<Store>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateProductOutput {
    pub id: ProductId,
}

#[derive(Debug)]
pub struct UpdateProduct<P, C, S> {
    products: P,
    categories: C,
    stores: S,
}

impl<P, C, S> UpdateProduct<P, C, S>
where
    P: ProductGateway,
    C: CategoryGateway,
    S: StoreGateway,
{
    pub fn new(products: P, categories: C, stores: S) -> Self {
        Self {
            products,
            categories,
            stores,
        }
    }

    pub fn execute(&self, command: UpdateProductCommand) -> Result<UpdateProductOutput, UseCaseError> {
        let UpdateProductCommand {
            id,
            name,
            description,
            price,
            stock,
            status,
            category_id,
            store,
        } = command;

        let mut product = self
            .products
            .find_by_id(&id)?
            .ok_or_else(|| UseCaseError::not_found("Product", &id))?;

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
            images: product.images().to_vec(),
        };
        notification.validate(|| product.update(details))?;
        if notification.has_error() {
            tracing::debug!(product_id = %id, errors = notification.errors().len(), "product update rejected");
            return Err(UseCaseError::notification(UPDATE_FAILED, notification));
        }

        let updated = self.products.update(product)?;
        tracing::info!(product_id = %updated.id(), "product updated");
        Ok(UpdateProductOutput {
            id: updated.id().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{FakeCategories, FakeProducts, FakeStores};
    use crate::product::test_support;
    use catalog_categories::Category;
    use catalog_products::{Product, ProductImage};
    use std::sync::Arc;

    struct Fixture {
        products: Arc<FakeProducts>,
        categories: Arc<FakeCategories>,
        stores: Arc<FakeStores>,
        existing: Product,
    }

    impl Fixture {
        fn new() -> Self {
            let category = Category::new_category(Some("Peripherals".into()), None, true).unwrap();
            let image =
                ProductImage::from_content("front.png", b"front".to_vec(), "images/front", 0, true)
                    .unwrap()
                    .without_content();
            let existing = Product::new_product(ProductDetails {
                images: vec![image],
                ..test_support::details(category.id().value(), "store-1")
            })
            .unwrap();
            Self {
                products: Arc::new(FakeProducts::with(vec![existing.clone()])),
                categories: Arc::new(FakeCategories::with(vec![category])),
                stores: Arc::new(FakeStores::with(&["store-1", "store-2"])),
                existing,
            }
        }

        fn use_case(&self) -> UpdateProduct<Arc<FakeProducts>, Arc<FakeCategories>, Arc<FakeStores>> {
            UpdateProduct::new(
                self.products.clone(),
                self.categories.clone(),
                self.stores.clone(),
            )
        }

        fn command(&self) -> UpdateProductCommand {
            UpdateProductCommand {
                id: self.existing.id().clone(),
                name: Some("Quiet keyboard".into()),
                description: Some("Silent switches".into()),
                price: Some(Money::parse("299.00", "BRL").unwrap()),
                stock: 3,
                status: ProductStatus::Inactive,
                category_id: None,
                store: None,
            }
        }

        fn stored(&self) -> Product {
            self.products
                .items
                .lock()
                .unwrap()
                .get(self.existing.id())
                .cloned()
                .unwrap()
        }
    }

    #[test]
    fn updates_fields_and_keeps_images_and_references() {
        let fx = Fixture::new();

        fx.use_case().execute(fx.command()).unwrap();

        let stored = fx.stored();
        assert_eq!(stored.name(), Some("Quiet keyboard"));
        assert_eq!(stored.status(), ProductStatus::Inactive);
        assert_eq!(stored.category_id(), fx.existing.category_id());
        assert_eq!(stored.store(), fx.existing.store());
        assert_eq!(stored.images(), fx.existing.images());
        assert!(stored.updated_at() > fx.existing.updated_at());
        assert_eq!(fx.categories.exists_calls.count(), 0);
        assert_eq!(fx.stores.exists_calls.count(), 0);
    }

    #[test]
    fn moves_to_another_existing_store() {
        let fx = Fixture::new();
        let command = UpdateProductCommand {
            store: Some(Store::new("store-2", "Harbour")),
            ..fx.command()
        };

        fx.use_case().execute(command).unwrap();

        assert_eq!(fx.stores.exists_calls.count(), 1);
        assert_eq!(fx.stored().store().map(Store::id), Some("store-2"));
    }

    #[test]
    fn unknown_product_is_not_found() {
        let fx = Fixture::new();
        let command = UpdateProductCommand {
            id: ProductId::from("missing"),
            ..fx.command()
        };

        let err = fx.use_case().execute(command).unwrap_err();

        assert_eq!(err.to_string(), "Product with ID missing was not found");
        assert_eq!(fx.products.update_calls.count(), 0);
    }

    #[test]
    fn invalid_update_collects_errors_and_leaves_store_untouched() {
        let fx = Fixture::new();
        let command = UpdateProductCommand {
            price: None,
            category_id: Some(CategoryId::from("c-404")),
            ..fx.command()
        };

        let err = fx.use_case().execute(command).unwrap_err();

        assert_eq!(err.to_string(), "Could not update Aggregate Product");
        let messages: Vec<_> = err.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Category with ID: c-404 could not be found",
                "'price' should not be null",
            ]
        );
        assert_eq!(fx.products.update_calls.count(), 0);
        assert_eq!(fx.stored(), fx.existing);
    }
}
