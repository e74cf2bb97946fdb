//! Breakdown Models (分组统计)

use serde::{Deserialize, Serialize};

/// Sales total for one `YYYY-MM` month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "PascalCase")]
pub struct MonthlySales {
    pub order_month: String,
    pub total_sales: f64,
}

/// Sales total for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "PascalCase")]
pub struct CategorySales {
    pub category_name: String,
    pub total_sales: f64,
}

/// Sales total for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "PascalCase")]
pub struct ProductSales {
    pub product_name: String,
    pub total_sales: f64,
}

/// Order revenue for one customer city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "PascalCase")]
pub struct CitySales {
    pub city: String,
    pub total_sales: f64,
}

/// Number of payments made with one method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "PascalCase")]
pub struct PaymentMethodUsage {
    pub payment_method: String,
    pub usage_count: i64,
}

/// One line item in the recent-orders feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "PascalCase")]
pub struct RecentOrderLine {
    #[serde(rename = "OrderID")]
    pub order_id: i64,
    /// `FirstName LastName`
    pub customer_name: String,
    pub product_name: String,
    pub category_name: String,
    pub subtotal: f64,
}
