//! The filter → sort → aggregate → paginate pipeline behind product queries.
//!
//! Queries never reorder the backing collection: sorting happens on a
//! filtered list of references, and aggregates always cover the whole
//! collection so a filtered page still reports inventory-wide totals.

mod error;
mod filter;
mod page;
mod sort;
mod summary;

use std::collections::BTreeMap;

use crate::domain::Product;

pub use error::QueryError;
pub use filter::ProductFilter;
pub use page::{PageRequest, DEFAULT_PAGE_SIZE};
pub use sort::{compare, sort_products, SortKey, SortOrder};
pub use summary::InventorySummary;

/// Everything a caller can ask of the product listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub page: PageRequest,
}

impl ProductQuery {
    pub fn filtered(mut self, filter: ProductFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn sorted(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_key = key;
        self.sort_order = order;
        self
    }

    pub fn paged(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

/// One page of products plus whole-inventory totals.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub products: Vec<Product>,
    /// Number of products that passed the filter.
    pub total_products: usize,
    pub total_pages: usize,
    pub total_stock: u64,
    pub total_value: f64,
    pub category_stock: BTreeMap<String, u64>,
    pub category_value: BTreeMap<String, f64>,
    pub current_page: usize,
}

pub fn run_query(products: &[Product], query: &ProductQuery) -> QueryResult {
    let mut matched = query.filter.apply(products);
    sort_products(&mut matched, query.sort_key, query.sort_order);

    let summary = InventorySummary::from_products(products);

    let total_products = matched.len();
    let page = query
        .page
        .slice(&matched)
        .iter()
        .map(|product| (*product).clone())
        .collect();

    QueryResult {
        products: page,
        total_products,
        total_pages: query.page.total_pages(total_products),
        total_stock: summary.total_stock,
        total_value: summary.total_value,
        category_stock: summary.category_stock,
        category_value: summary.category_value,
        current_page: query.page.page(),
    }
}
