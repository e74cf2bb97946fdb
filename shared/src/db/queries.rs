//! Reporting queries
//!
//! Each function is one round trip: open, run a fixed statement, close.
//! Aggregation happens in SQL; rows come back as typed records.

use super::{Database, DbResult};
use crate::models::{
    CategorySales, CitySales, KpiTotals, Kpis, MonthlySales, PaymentMethodUsage, ProductSales,
    RecentOrderLine, SalesRecord,
};

/// Row limit of the top-products breakdown
pub const TOP_PRODUCTS_LIMIT: usize = 5;
/// Row limit of the sales-by-city breakdown
pub const TOP_CITIES_LIMIT: usize = 5;
/// Row limit of the recent-orders feed
pub const RECENT_ORDERS_LIMIT: usize = 20;

const KPIS_SQL: &str = r#"
    SELECT
        CAST(COALESCE(SUM(o.TotalAmount), 0) AS REAL) AS total_revenue,
        COUNT(DISTINCT o.OrderID) AS total_orders,
        CAST(COALESCE(AVG(o.TotalAmount), 0) AS REAL) AS avg_order_value,
        COUNT(DISTINCT o.CustomerID) AS unique_customers,
        CAST(COALESCE(SUM(t.total_quantity), 0) AS INTEGER) AS total_items
    FROM Orders o
    LEFT JOIN (
        SELECT OrderID, SUM(Quantity) AS total_quantity
        FROM OrderDetails
        GROUP BY OrderID
    ) t ON t.OrderID = o.OrderID
"#;

const MONTHLY_SALES_SQL: &str = r#"
    SELECT
        strftime('%Y-%m', OrderDate) AS order_month,
        CAST(SUM(TotalAmount) AS REAL) AS total_sales
    FROM Orders
    GROUP BY strftime('%Y-%m', OrderDate)
    ORDER BY order_month
"#;

const CATEGORY_SALES_SQL: &str = r#"
    SELECT
        c.CategoryName AS category_name,
        CAST(SUM(od.Subtotal) AS REAL) AS total_sales
    FROM OrderDetails od
    JOIN Products p ON od.ProductID = p.ProductID
    JOIN Categories c ON p.CategoryID = c.CategoryID
    GROUP BY c.CategoryName
    ORDER BY total_sales DESC, category_name
"#;

const TOP_PRODUCTS_SQL: &str = r#"
    SELECT
        p.ProductName AS product_name,
        CAST(SUM(od.Subtotal) AS REAL) AS total_sales
    FROM OrderDetails od
    JOIN Products p ON od.ProductID = p.ProductID
    GROUP BY p.ProductName
    ORDER BY total_sales DESC, product_name
    LIMIT 5
"#;

const SALES_BY_CITY_SQL: &str = r#"
    SELECT
        c.City AS city,
        CAST(SUM(o.TotalAmount) AS REAL) AS total_sales
    FROM Orders o
    JOIN Customers c ON o.CustomerID = c.CustomerID
    GROUP BY c.City
    ORDER BY total_sales DESC, city
    LIMIT 5
"#;

const PAYMENT_METHODS_SQL: &str = r#"
    SELECT
        PaymentMethod AS payment_method,
        COUNT(PaymentID) AS usage_count
    FROM Payment
    GROUP BY PaymentMethod
    ORDER BY usage_count DESC, payment_method
"#;

const RECENT_ORDERS_SQL: &str = r#"
    SELECT
        o.OrderID AS order_id,
        c.FirstName || ' ' || c.LastName AS customer_name,
        p.ProductName AS product_name,
        cat.CategoryName AS category_name,
        CAST(od.Subtotal AS REAL) AS subtotal
    FROM OrderDetails od
    JOIN Orders o ON od.OrderID = o.OrderID
    JOIN Products p ON od.ProductID = p.ProductID
    JOIN Categories cat ON p.CategoryID = cat.CategoryID
    JOIN Customers c ON o.CustomerID = c.CustomerID
    ORDER BY o.OrderDate DESC, o.OrderID DESC
    LIMIT 20
"#;

const SALES_RECORDS_SQL: &str = r#"
    SELECT
        o.OrderID AS order_id,
        datetime(o.OrderDate) AS order_date,
        c.CustomerID AS customer_id,
        c.FirstName AS first_name,
        c.LastName AS last_name,
        c.City AS city,
        p.ProductID AS product_id,
        p.ProductName AS product_name,
        cat.CategoryName AS category_name,
        od.Quantity AS quantity,
        CAST(od.Subtotal AS REAL) AS subtotal
    FROM OrderDetails od
    JOIN Orders o ON od.OrderID = o.OrderID
    JOIN Products p ON od.ProductID = p.ProductID
    JOIN Categories cat ON p.CategoryID = cat.CategoryID
    JOIN Customers c ON o.CustomerID = c.CustomerID
"#;

/// Revenue, order count, average order value, unique customers and
/// items per order in one round trip. An empty `Orders` table yields zeros.
pub async fn kpis(db: &Database) -> DbResult<Kpis> {
    let totals: KpiTotals = db.fetch_one(KPIS_SQL).await?;
    Ok(totals.into())
}

/// Order revenue per `YYYY-MM`, oldest month first
pub async fn monthly_sales(db: &Database) -> DbResult<Vec<MonthlySales>> {
    db.fetch_all(MONTHLY_SALES_SQL).await
}

/// Line-item revenue per category, highest first
pub async fn category_sales(db: &Database) -> DbResult<Vec<CategorySales>> {
    db.fetch_all(CATEGORY_SALES_SQL).await
}

/// The `TOP_PRODUCTS_LIMIT` best-selling products by line-item revenue
pub async fn top_products(db: &Database) -> DbResult<Vec<ProductSales>> {
    db.fetch_all(TOP_PRODUCTS_SQL).await
}

/// The `TOP_CITIES_LIMIT` customer cities with the highest order revenue
pub async fn sales_by_city(db: &Database) -> DbResult<Vec<CitySales>> {
    db.fetch_all(SALES_BY_CITY_SQL).await
}

/// Payment count per method, most used first
pub async fn payment_methods(db: &Database) -> DbResult<Vec<PaymentMethodUsage>> {
    db.fetch_all(PAYMENT_METHODS_SQL).await
}

/// The latest `RECENT_ORDERS_LIMIT` order lines, newest order first
pub async fn recent_orders(db: &Database) -> DbResult<Vec<RecentOrderLine>> {
    db.fetch_all(RECENT_ORDERS_SQL).await
}

/// Full joined order-line dataset for the report generator
pub async fn sales_records(db: &Database) -> DbResult<Vec<SalesRecord>> {
    db.fetch_all(SALES_RECORDS_SQL).await
}
