//! Demo catalog loaded into a fresh store.

use chrono::NaiveDate;

use crate::domain::ProductDraft;

fn draft(name: &str, category: &str, unit_price: f64, stock: u32, expires: Option<NaiveDate>) -> ProductDraft {
    ProductDraft {
        expiration_date: expires,
        ..ProductDraft::new(name, category, unit_price, stock)
    }
}

/// Eleven products over three categories. The lamp is sold out and only
/// the food expires.
pub fn demo_catalog() -> Vec<ProductDraft> {
    vec![
        draft("Mouse", "Electronics", 10.0, 2, None),
        draft("Pants", "Clothing", 11.0, 2, None),
        draft("Keyboard", "Electronics", 12.0, 4, None),
        draft("Speaker", "Electronics", 12.0, 6, None),
        draft("PC", "Electronics", 14.0, 2, None),
        draft("Socks", "Clothing", 12.0, 4, None),
        draft("Lamp", "Electronics", 10.0, 0, None),
        draft("Cake", "Food", 30.0, 2, NaiveDate::from_ymd_opt(2025, 4, 10)),
        draft("Pasta", "Food", 20.0, 2, NaiveDate::from_ymd_opt(2025, 4, 9)),
        draft("Tacos", "Food", 300.0, 4, NaiveDate::from_ymd_opt(2025, 5, 7)),
        draft("Hat", "Clothing", 14.0, 6, None),
    ]
}
