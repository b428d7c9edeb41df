//! Term filtering, sorting and paging shared by the in-memory gateways.

use core::cmp::Ordering;

use chrono::{DateTime, Utc};

use catalog_categories::Category;
use catalog_core::{Entity, Pagination, SearchQuery, SortDirection};
use catalog_products::Product;

/// What a listable aggregate exposes to [`search`].
pub trait Searchable: Clone {
    fn search_name(&self) -> &str;
    fn search_description(&self) -> &str;
    fn search_created_at(&self) -> DateTime<Utc>;
    fn search_id(&self) -> &str;
}

impl Searchable for Category {
    fn search_name(&self) -> &str {
        self.name().unwrap_or_default()
    }

    fn search_description(&self) -> &str {
        self.description().unwrap_or_default()
    }

    fn search_created_at(&self) -> DateTime<Utc> {
        self.created_at()
    }

    fn search_id(&self) -> &str {
        self.id().value()
    }
}

impl Searchable for Product {
    fn search_name(&self) -> &str {
        self.name().unwrap_or_default()
    }

    fn search_description(&self) -> &str {
        self.description().unwrap_or_default()
    }

    fn search_created_at(&self) -> DateTime<Utc> {
        self.created_at()
    }

    fn search_id(&self) -> &str {
        self.id().value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    Name,
    CreatedAt,
}

impl SortKey {
    /// Unknown keys sort by name.
    fn parse(sort: &str) -> Self {
        match sort.trim().to_ascii_lowercase().as_str() {
            "created_at" | "createdat" => SortKey::CreatedAt,
            _ => SortKey::Name,
        }
    }

    fn compare<T: Searchable>(self, a: &T, b: &T) -> Ordering {
        let primary = match self {
            SortKey::Name => a
                .search_name()
                .to_lowercase()
                .cmp(&b.search_name().to_lowercase()),
            SortKey::CreatedAt => a.search_created_at().cmp(&b.search_created_at()),
        };
        primary.then_with(|| a.search_id().cmp(b.search_id()))
    }
}

fn matches<T: Searchable>(item: &T, terms: &str) -> bool {
    terms.is_empty()
        || item.search_name().to_lowercase().contains(terms)
        || item.search_description().to_lowercase().contains(terms)
}

/// Filter `items` by the query terms (case-insensitive, name or description),
/// sort them and cut out the requested page.
pub fn search<'a, T, I>(items: I, query: &SearchQuery) -> Pagination<T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let terms = query.terms.trim().to_lowercase();
    let mut found: Vec<&T> = items.into_iter().filter(|i| matches(*i, &terms)).collect();

    let key = SortKey::parse(&query.sort);
    found.sort_by(|a, b| match query.direction {
        SortDirection::Asc => key.compare(*a, *b),
        SortDirection::Desc => key.compare(*b, *a),
    });

    let total = found.len() as u64;
    let items = found
        .into_iter()
        .skip(query.offset())
        .take(query.per_page as usize)
        .cloned()
        .collect();
    Pagination::new(query.page, query.per_page, total, items)
}
