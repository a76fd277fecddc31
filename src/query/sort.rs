use std::cmp::Ordering;

use crate::domain::Product;

/// Field the filtered products are ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Category,
    Price,
    Stock,
    Expiration,
}

impl SortKey {
    /// Parses the raw `sortBy` parameter. Unknown or absent keys sort by name.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("category") => Self::Category,
            Some("price") => Self::Price,
            Some("stock") => Self::Stock,
            Some("expiration") => Self::Expiration,
            _ => Self::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses the raw `sortOrder` parameter. Anything but `desc` is ascending.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Compares two products by `key` in `order`.
///
/// Products without an expiration date go after every dated product in
/// both directions.
pub fn compare(a: &Product, b: &Product, key: SortKey, order: SortOrder) -> Ordering {
    match key {
        SortKey::Name => order.apply(a.name.cmp(&b.name)),
        SortKey::Category => order.apply(a.category.cmp(&b.category)),
        SortKey::Price => order.apply(a.unit_price.total_cmp(&b.unit_price)),
        SortKey::Stock => order.apply(a.quantity_in_stock.cmp(&b.quantity_in_stock)),
        SortKey::Expiration => match (a.expiration_date, b.expiration_date) {
            (Some(left), Some(right)) => order.apply(left.cmp(&right)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Stable in-place sort; ties keep their filtered order.
pub fn sort_products(products: &mut [&Product], key: SortKey, order: SortOrder) {
    products.sort_by(|a, b| compare(a, b, key, order));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    fn product(id: u64, name: &str, price: f64, stock: u32, expires: Option<NaiveDate>) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: "Food".to_string(),
            unit_price: price,
            expiration_date: expires,
            quantity_in_stock: stock,
            creation_date: date(1, 1),
            update_date: date(1, 1),
        }
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn parses_params_with_defaults() {
        assert_eq!(SortKey::from_param(None), SortKey::Name);
        assert_eq!(SortKey::from_param(Some("bogus")), SortKey::Name);
        assert_eq!(SortKey::from_param(Some("expiration")), SortKey::Expiration);
        assert_eq!(SortOrder::from_param(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::from_param(Some("DESC")), SortOrder::Asc);
        assert_eq!(SortOrder::from_param(None), SortOrder::Asc);
    }

    #[test]
    fn equal_keys_keep_input_order_in_both_directions() {
        let a = product(1, "A", 10.0, 1, None);
        let b = product(2, "B", 10.0, 1, None);
        let c = product(3, "C", 5.0, 1, None);

        let mut asc = vec![&a, &b, &c];
        sort_products(&mut asc, SortKey::Price, SortOrder::Asc);
        assert_eq!(ids(&asc), vec![3, 1, 2]);

        let mut desc = vec![&a, &b, &c];
        sort_products(&mut desc, SortKey::Price, SortOrder::Desc);
        assert_eq!(ids(&desc), vec![1, 2, 3]);
    }

    #[test]
    fn undated_products_sort_last_ascending() {
        let undated = product(1, "Salt", 1.0, 1, None);
        let late = product(2, "Tacos", 1.0, 1, Some(date(5, 7)));
        let early = product(3, "Pasta", 1.0, 1, Some(date(4, 9)));

        let mut products = vec![&undated, &late, &early];
        sort_products(&mut products, SortKey::Expiration, SortOrder::Asc);
        assert_eq!(ids(&products), vec![3, 2, 1]);
    }

    #[test]
    fn undated_products_sort_last_descending() {
        let undated = product(1, "Salt", 1.0, 1, None);
        let late = product(2, "Tacos", 1.0, 1, Some(date(5, 7)));
        let early = product(3, "Pasta", 1.0, 1, Some(date(4, 9)));
        let also_undated = product(4, "Sugar", 1.0, 1, None);

        let mut products = vec![&undated, &early, &also_undated, &late];
        sort_products(&mut products, SortKey::Expiration, SortOrder::Desc);
        assert_eq!(ids(&products), vec![2, 3, 1, 4]);
    }

    #[test]
    fn text_keys_compare_lexicographically() {
        let mut pc = product(1, "PC", 1.0, 1, None);
        pc.category = "Electronics".to_string();
        let hat = product(2, "Hat", 1.0, 1, None);

        let mut by_name = vec![&pc, &hat];
        sort_products(&mut by_name, SortKey::Name, SortOrder::Asc);
        assert_eq!(ids(&by_name), vec![2, 1]);

        let mut by_category = vec![&hat, &pc];
        sort_products(&mut by_category, SortKey::Category, SortOrder::Asc);
        assert_eq!(ids(&by_category), vec![1, 2]);
    }
}
