//! Product list filtering and sorting.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::Product;
use crate::search::SearchTerm;

/// Category value meaning "no category filter".
const ALL_CATEGORIES: &str = "all";

/// Sort order of the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductSort {
    /// Alphabetical by name.
    #[default]
    Name,
    /// Cheapest first.
    Price,
    /// Alphabetical by category.
    Category,
    /// Newest first.
    Created,
}

impl ProductSort {
    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::Price => a.price.cmp(&b.price),
            Self::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            Self::Created => b.created_at.cmp(&a.created_at),
        }
    }
}

/// Filter for the product list.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Matches name, description or category.
    pub search: Option<SearchTerm>,
    /// Exact category, `None` for all.
    pub category: Option<String>,
    /// Sort order.
    pub sort: ProductSort,
}

impl ProductFilter {
    /// Builds a filter from raw query values. A blank or `all` category
    /// disables the category filter.
    #[must_use]
    pub fn new(search: Option<&str>, category: Option<&str>, sort: ProductSort) -> Self {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES))
            .map(ToString::to_string);

        Self {
            search: SearchTerm::parse(search),
            category,
            sort,
        }
    }

    /// Returns true if the product passes the search and category filters.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|category| product.category == category);

        category_ok
            && self.search.as_ref().is_none_or(|term| {
                term.matches_any([
                    product.name.as_str(),
                    product.description.as_str(),
                    product.category.as_str(),
                ])
            })
    }

    /// Filters and sorts products.
    #[must_use]
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut products: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        products.sort_by(|a, b| self.sort.compare(a, b));
        products
    }
}

/// Distinct categories in use, sorted.
#[must_use]
pub fn categories<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<String> {
    products
        .into_iter()
        .map(|product| product.category.as_str())
        .filter(|category| !category.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}
