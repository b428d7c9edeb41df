use catalog_core::validation::check_text_length;
use catalog_core::{DomainResult, ValidationError, ValidationHandler, Validator};

use crate::product::Product;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MIN_LENGTH: usize = 1;
pub const DESCRIPTION_MAX_LENGTH: usize = 4000;

/// Smallest accepted price, in minor units (0.01).
pub const MIN_PRICE_MINOR: i64 = 1;

/// Field rules of a [`Product`].
///
/// Checks run in a fixed order: name, description, stock, price, category,
/// store.
#[derive(Debug, Clone, Copy)]
pub struct ProductValidator<'a> {
    product: &'a Product,
}

impl<'a> ProductValidator<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self { product }
    }

    fn check_stock<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        if self.product.stock() < 0 {
            handler.append(ValidationError::new("'stock' cannot have invalid values"))?;
        }
        Ok(())
    }

    fn check_price<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        match self.product.price() {
            None => handler.append(ValidationError::new("'price' should not be null")),
            Some(price) if price.amount_minor() < MIN_PRICE_MINOR => {
                handler.append(ValidationError::new("'price' must be greater than zero"))
            }
            Some(_) => Ok(()),
        }
    }

    fn check_category<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        if self.product.category_id().is_none() {
            handler.append(ValidationError::new("'category' should not be null"))?;
        }
        Ok(())
    }

    fn check_store<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        match self.product.store() {
            None => handler.append(ValidationError::new("'store' should not be null")),
            Some(store) if !store.has_id() => {
                handler.append(ValidationError::new("'store.id' should not be null"))
            }
            Some(_) => Ok(()),
        }
    }
}

impl Validator for ProductValidator<'_> {
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        check_text_length(
            handler,
            "name",
            self.product.name(),
            NAME_MIN_LENGTH,
            NAME_MAX_LENGTH,
        )?;
        check_text_length(
            handler,
            "description",
            self.product.description(),
            DESCRIPTION_MIN_LENGTH,
            DESCRIPTION_MAX_LENGTH,
        )?;
        self.check_stock(handler)?;
        self.check_price(handler)?;
        self.check_category(handler)?;
        self.check_store(handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::product::{ProductDetails, ProductStatus};
    use crate::store::Store;
    use catalog_core::{CategoryId, Notification, ProductId};
    use chrono::Utc;

    fn details() -> ProductDetails {
        ProductDetails {
            name: Some("Keyboard".to_string()),
            description: Some("Mechanical keyboard".to_string()),
            price: Some(Money::parse("199.90", "BRL").unwrap()),
            stock: 10,
            status: ProductStatus::Active,
            category_id: Some(CategoryId::from("c1")),
            store: Some(Store::new("s1", "Main")),
            images: vec![],
        }
    }

    fn messages(details: ProductDetails) -> Vec<String> {
        let now = Utc::now();
        let product = Product::with(ProductId::unique(), details, now, now);
        let mut notification = Notification::create();
        ProductValidator::new(&product)
            .validate(&mut notification)
            .unwrap();
        notification.into_errors().into_iter().map(|e| e.message).collect()
    }

    #[test]
    fn valid_product_has_no_errors() {
        assert!(messages(details()).is_empty());
    }

    #[test]
    fn reports_every_rule_in_fixed_order() {
        let broken = ProductDetails {
            name: None,
            description: Some("  ".to_string()),
            price: Some(Money::parse("0", "BRL").unwrap()),
            stock: -1,
            category_id: None,
            store: Some(Store::new("", "Nameless")),
            ..details()
        };

        assert_eq!(
            messages(broken),
            vec![
                "'name' should not be null",
                "'description' should not be empty",
                "'stock' cannot have invalid values",
                "'price' must be greater than zero",
                "'category' should not be null",
                "'store.id' should not be null",
            ]
        );
    }

    #[test]
    fn missing_price_and_store() {
        let broken = ProductDetails {
            price: None,
            store: None,
            ..details()
        };
        assert_eq!(
            messages(broken),
            vec!["'price' should not be null", "'store' should not be null"]
        );
    }

    #[test]
    fn description_length_bounds() {
        let long = ProductDetails {
            description: Some("d".repeat(4001)),
            ..details()
        };
        assert_eq!(
            messages(long),
            vec!["'description' must be between 1 and 4000 characters"]
        );

        let max = ProductDetails {
            description: Some("d".repeat(4000)),
            ..details()
        };
        assert!(messages(max).is_empty());
    }

    #[test]
    fn smallest_positive_price_is_accepted() {
        let cheap = ProductDetails {
            price: Some(Money::parse("0.01", "BRL").unwrap()),
            ..details()
        };
        assert!(messages(cheap).is_empty());
    }
}
