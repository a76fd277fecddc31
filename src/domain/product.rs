use chrono::NaiveDate;

/// Identifier assigned by the store when a product is added. Never reused.
pub type ProductId = u64;

/// Represents a product in the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    /// `None` means the product does not expire.
    pub expiration_date: Option<NaiveDate>,
    /// `0` means out of stock.
    pub quantity_in_stock: u32,
    pub creation_date: NaiveDate,
    pub update_date: NaiveDate,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.quantity_in_stock > 0
    }

    /// Value of the units currently on hand.
    pub fn stock_value(&self) -> f64 {
        self.unit_price * f64::from(self.quantity_in_stock)
    }
}

/// Payload for adding a new product. The store assigns the id and dates.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub expiration_date: Option<NaiveDate>,
    pub quantity_in_stock: u32,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: f64,
        quantity_in_stock: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            unit_price,
            expiration_date: None,
            quantity_in_stock,
        }
    }

    pub fn expiring(mut self, date: NaiveDate) -> Self {
        self.expiration_date = Some(date);
        self
    }
}

/// Payload for updating an existing product.
///
/// Every field overwrites the stored value except `expiration_date`:
/// when it is `None` the stored expiration date is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity_in_stock: u32,
    pub expiration_date: Option<NaiveDate>,
}

impl From<ProductDraft> for ProductUpdate {
    fn from(draft: ProductDraft) -> Self {
        Self {
            name: draft.name,
            category: draft.category,
            unit_price: draft.unit_price,
            quantity_in_stock: draft.quantity_in_stock,
            expiration_date: draft.expiration_date,
        }
    }
}
