use chrono::NaiveDate;

use crate::actor_framework::Entity;
use crate::domain::{Product, ProductDraft, ProductId, ProductUpdate};
use crate::query::{run_query, ProductQuery, QueryResult};
use super::actions::{ProductAction, ProductActionResult, RESTOCK_QUANTITY};

fn validate_price(price: f64) -> Result<(), String> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(format!("unit price must be a non-negative number, got {price}"))
    }
}

impl Entity for Product {
    type Id = ProductId;
    type CreateParams = ProductDraft;
    type Patch = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Query = ProductQuery;
    type QueryResult = QueryResult;

    fn id(&self) -> &ProductId { &self.id }

    /// Creates a new Product from a draft.
    ///
    /// Both the creation and update dates are set to `today`.
    fn from_create_params(id: ProductId, params: ProductDraft, today: NaiveDate) -> Result<Self, String> {
        validate_price(params.unit_price)?;
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            unit_price: params.unit_price,
            expiration_date: params.expiration_date,
            quantity_in_stock: params.quantity_in_stock,
            creation_date: today,
            update_date: today,
        })
    }

    /// Overwrites the mutable fields.
    ///
    /// An absent expiration date in the patch keeps the stored one.
    fn on_update(&mut self, patch: ProductUpdate, today: NaiveDate) -> Result<(), String> {
        validate_price(patch.unit_price)?;
        self.name = patch.name;
        self.category = patch.category;
        self.unit_price = patch.unit_price;
        self.quantity_in_stock = patch.quantity_in_stock;
        if let Some(date) = patch.expiration_date {
            self.expiration_date = Some(date);
        }
        self.update_date = today;
        Ok(())
    }

    fn handle_action(&mut self, action: ProductAction, today: NaiveDate) -> Result<ProductActionResult, String> {
        let result = match action {
            ProductAction::MarkOutOfStock => {
                self.quantity_in_stock = 0;
                ProductActionResult::MarkedOutOfStock
            }
            ProductAction::RestoreStock => {
                self.quantity_in_stock = RESTOCK_QUANTITY;
                ProductActionResult::Restocked(RESTOCK_QUANTITY)
            }
        };
        self.update_date = today;
        Ok(result)
    }

    fn query(items: &[Self], query: &ProductQuery) -> QueryResult {
        run_query(items, query)
    }
}
