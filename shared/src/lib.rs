//! Shared types for the e-commerce reporting backend
//!
//! Typed records for every reporting query, plus the per-operation
//! data-access layer used by both the dashboard API and the report
//! generator.

#[cfg(feature = "db")]
pub mod db;
pub mod models;

// Re-exports
pub use models::{
    CategorySales, CitySales, KpiTotals, Kpis, MonthlySales, PaymentMethodUsage, ProductSales,
    RecentOrderLine, SalesRecord,
};
