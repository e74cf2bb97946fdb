//! Sales Record Model
//!
//! One row of the joined order-line dataset extracted by the report
//! generator.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SalesRecord {
    pub order_id: i64,
    pub order_date: NaiveDateTime,
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub product_id: i64,
    pub product_name: String,
    pub category_name: String,
    pub quantity: i64,
    pub subtotal: f64,
}

impl SalesRecord {
    /// Month bucket of the order date (`YYYY-MM`)
    pub fn order_month(&self) -> String {
        self.order_date.format("%Y-%m").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_month_is_zero_padded() {
        let record = SalesRecord {
            order_id: 1,
            order_date: NaiveDateTime::parse_from_str("2024-03-09 08:15:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            customer_id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            city: "London".into(),
            product_id: 1,
            product_name: "Laptop".into(),
            category_name: "Electronics".into(),
            quantity: 1,
            subtotal: 10.0,
        };
        assert_eq!(record.order_month(), "2024-03");
    }
}
