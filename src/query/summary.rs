use std::collections::BTreeMap;

use crate::domain::Product;

/// Stock and value totals over the whole collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySummary {
    pub total_stock: u64,
    pub total_value: f64,
    pub category_stock: BTreeMap<String, u64>,
    pub category_value: BTreeMap<String, f64>,
}

impl InventorySummary {
    /// Aggregates every product, regardless of any active filter.
    pub fn from_products(products: &[Product]) -> Self {
        let mut summary = Self::default();
        for product in products {
            let stock = u64::from(product.quantity_in_stock);
            let value = product.stock_value();

            *summary
                .category_stock
                .entry(product.category.clone())
                .or_insert(0) += stock;
            *summary
                .category_value
                .entry(product.category.clone())
                .or_insert(0.0) += value;

            summary.total_stock += stock;
            summary.total_value += value;
        }

        summary.total_value = summary.total_value.max(0.0);
        for value in summary.category_value.values_mut() {
            *value = value.max(0.0);
        }
        summary
    }
}
