use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{
    AggregateRoot, CategoryId, DomainResult, Entity, ValidationHandler, Validator, time,
};

use crate::validator::CategoryValidator;

/// Aggregate root: Category.
///
/// `deleted_at` is set exactly when the category is inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Create a new category with a fresh identifier.
    ///
    /// Inactive categories start with `deleted_at == created_at`.
    pub fn new_category(
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> DomainResult<Self> {
        let now = time::now();
        let category = Self {
            id: CategoryId::unique(),
            name,
            description,
            active: is_active,
            created_at: now,
            updated_at: now,
            deleted_at: if is_active { None } else { Some(now) },
        };
        category.self_validate()?;
        Ok(category)
    }

    /// Rehydrate a persisted category. No validation is performed.
    pub fn with(
        id: CategoryId,
        name: impl Into<String>,
        description: Option<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn with_aggregate(other: &Category) -> Self {
        other.clone()
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        let mut candidate = self.clone();
        candidate.mark_active();
        candidate.self_validate()?;
        *self = candidate;
        Ok(())
    }

    pub fn deactivate(&mut self) -> DomainResult<()> {
        let mut candidate = self.clone();
        candidate.mark_inactive();
        candidate.self_validate()?;
        *self = candidate;
        Ok(())
    }

    /// Rewrite name, description and active state.
    ///
    /// On error `self` is left untouched.
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> DomainResult<()> {
        let mut candidate = self.clone();
        if is_active {
            candidate.mark_active();
        } else {
            candidate.mark_inactive();
        }
        candidate.name = name;
        candidate.description = description;
        candidate.updated_at = time::next_after(candidate.updated_at);
        candidate.self_validate()?;
        *self = candidate;
        Ok(())
    }

    fn mark_active(&mut self) {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = time::next_after(self.updated_at);
    }

    fn mark_inactive(&mut self) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(time::next_after(self.updated_at));
        }
        self.active = false;
        self.updated_at = time::next_after(self.updated_at);
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Category {
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        CategoryValidator::new(self).validate(handler)
    }
}
