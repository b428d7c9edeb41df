//! Search parameters and paged results exchanged with gateways.
//!
//! The core only builds queries and maps results; paging itself is done by
//! the gateway implementation.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(DomainError::validation(format!(
                "'direction' must be asc or desc, got '{other}'"
            ))),
        }
    }
}

/// Parameters of a list query (0-based page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub page: u32,
    pub per_page: u32,
    pub terms: String,
    pub sort: String,
    pub direction: SortDirection,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 10,
            terms: String::new(),
            sort: "name".to_string(),
            direction: SortDirection::Asc,
        }
    }
}

impl SearchQuery {
    pub fn new(
        page: u32,
        per_page: u32,
        terms: impl Into<String>,
        sort: impl Into<String>,
        direction: SortDirection,
    ) -> Self {
        Self {
            page,
            per_page,
            terms: terms.into(),
            sort: sort.into(),
            direction,
        }
    }

    /// Keep `per_page` within `1..=max_per_page`.
    pub fn clamped(mut self, max_per_page: u32) -> Self {
        self.per_page = self.per_page.clamp(1, max_per_page.max(1));
        self
    }

    /// Number of items to skip for this page.
    pub fn offset(&self) -> usize {
        self.page as usize * self.per_page as usize
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub current_page: u32,
    pub per_page: u32,
    /// Total number of matching items across all pages.
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: u32, per_page: u32, total: u64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
