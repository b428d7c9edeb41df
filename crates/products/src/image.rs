use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use catalog_core::validation::check_required_text;
use catalog_core::{
    DomainResult, Entity, ProductImageId, ThrowsValidationHandler, ValidationHandler, Validator,
};

/// An image attached to a product.
///
/// Identity is the [`ProductImageId`], but two images are the *same image*
/// when checksum and location match. A stored reference may carry no bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    id: ProductImageId,
    checksum: Option<String>,
    #[serde(default, skip_serializing)]
    content: Option<Vec<u8>>,
    name: Option<String>,
    location: Option<String>,
    order: u32,
    featured: bool,
}

/// Lowercase hex SHA-256 of `content`.
pub fn checksum_of(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

impl ProductImage {
    /// Create a new image with a fresh identifier.
    pub fn new(
        checksum: Option<String>,
        content: Option<Vec<u8>>,
        name: Option<String>,
        location: Option<String>,
        order: u32,
        featured: bool,
    ) -> DomainResult<Self> {
        let image = Self {
            id: ProductImageId::unique(),
            checksum,
            content,
            name,
            location,
            order,
            featured,
        };
        image.validate(&mut ThrowsValidationHandler)?;
        Ok(image)
    }

    /// Create a new image from uploaded bytes, deriving the checksum.
    pub fn from_content(
        name: impl Into<String>,
        content: Vec<u8>,
        location: impl Into<String>,
        order: u32,
        featured: bool,
    ) -> DomainResult<Self> {
        let checksum = checksum_of(&content);
        Self::new(
            Some(checksum),
            Some(content),
            Some(name.into()),
            Some(location.into()),
            order,
            featured,
        )
    }

    /// Rehydrate a persisted image. No validation is performed.
    pub fn with(
        id: ProductImageId,
        checksum: impl Into<String>,
        content: Option<Vec<u8>>,
        name: impl Into<String>,
        location: impl Into<String>,
        order: u32,
        featured: bool,
    ) -> Self {
        Self {
            id,
            checksum: Some(checksum.into()),
            content,
            name: Some(name.into()),
            location: Some(location.into()),
            order,
            featured,
        }
    }

    /// The same image as a stored reference, without its bytes.
    pub fn without_content(&self) -> Self {
        Self {
            content: None,
            ..self.clone()
        }
    }

    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        ProductImageValidator::new(self).validate(handler)
    }

    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_deref()
    }

    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Entity for ProductImage {
    type Id = ProductImageId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for ProductImage {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum && self.location == other.location
    }
}

impl Eq for ProductImage {}

impl core::hash::Hash for ProductImage {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.checksum.hash(state);
        self.location.hash(state);
    }
}

/// Field rules of a [`ProductImage`]: checksum, name, location.
#[derive(Debug, Clone, Copy)]
pub struct ProductImageValidator<'a> {
    image: &'a ProductImage,
}

impl<'a> ProductImageValidator<'a> {
    pub fn new(image: &'a ProductImage) -> Self {
        Self { image }
    }
}

impl Validator for ProductImageValidator<'_> {
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        check_required_text(handler, "checksum", self.image.checksum())?;
        check_required_text(handler, "name", self.image.name())?;
        check_required_text(handler, "location", self.image.location())?;
        Ok(())
    }
}
