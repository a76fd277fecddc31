/// Stock level a product is set to when its stock is restored.
pub const RESTOCK_QUANTITY: u32 = 10;

/// Custom actions for Product entities.
///
/// These actions represent stock toggles that can be performed on a product
/// beyond standard CRUD operations. Both refresh the product's update date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    /// Sets the stock to zero.
    MarkOutOfStock,
    /// Sets the stock to [`RESTOCK_QUANTITY`].
    RestoreStock,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductActionResult {
    MarkedOutOfStock,
    /// Carries the new stock level.
    Restocked(u32),
}
