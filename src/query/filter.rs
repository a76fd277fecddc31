use crate::domain::Product;

/// Conjunctive filter criteria. An absent criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name.
    pub name_contains: Option<String>,
    /// Case-insensitive exact category.
    pub category: Option<String>,
    /// `true` keeps products with stock, `false` keeps sold-out products.
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    pub fn name_contains(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = Some(needle.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        let name_ok = self.name_contains.as_deref().map_or(true, |needle| {
            product.name.to_lowercase().contains(&needle.to_lowercase())
        });
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |category| product.category.to_lowercase() == category.to_lowercase());
        let stock_ok = self
            .in_stock
            .map_or(true, |wanted| product.is_in_stock() == wanted);

        name_ok && category_ok && stock_ok
    }

    /// Returns the matching products in collection order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|product| self.matches(product)).collect()
    }
}
