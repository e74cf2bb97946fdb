//! Reporting Models
//!
//! One record per query shape. Field names on the wire follow the
//! dashboard's PascalCase contract (`TotalSales`, `OrderID`, ...), while
//! SQL column aliases stay snake_case so `FromRow` maps them directly.

pub mod breakdown;
pub mod kpi;
pub mod sales;

pub use breakdown::{
    CategorySales, CitySales, MonthlySales, PaymentMethodUsage, ProductSales, RecentOrderLine,
};
pub use kpi::{KpiTotals, Kpis};
pub use sales::SalesRecord;
