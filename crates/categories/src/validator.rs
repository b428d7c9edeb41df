use catalog_core::validation::check_text_length;
use catalog_core::{DomainResult, ValidationHandler, Validator};

use crate::category::Category;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

/// Field rules of a [`Category`].
#[derive(Debug, Clone, Copy)]
pub struct CategoryValidator<'a> {
    category: &'a Category,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(category: &'a Category) -> Self {
        Self { category }
    }
}

impl Validator for CategoryValidator<'_> {
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        check_text_length(
            handler,
            "name",
            self.category.name(),
            NAME_MIN_LENGTH,
            NAME_MAX_LENGTH,
        )
    }
}
