//! In-memory aggregation over the extracted order lines
//!
//! Mirrors the dashboard queries without going back to the database:
//! group, sum `Subtotal`, sort, optionally truncate.

use std::collections::{BTreeMap, HashMap};

use shared::models::{CategorySales, MonthlySales, ProductSales, SalesRecord};

/// Sum values per key, then order by total descending (key ascending on ties)
fn sum_by_key<'a, I>(pairs: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for (key, value) in pairs {
        *totals.entry(key).or_insert(0.0) += value;
    }

    let mut rows: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(key, total)| (key.to_string(), total))
        .collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Line-item revenue per category, highest first
pub fn sales_by_category(records: &[SalesRecord]) -> Vec<CategorySales> {
    sum_by_key(records.iter().map(|r| (r.category_name.as_str(), r.subtotal)))
        .into_iter()
        .map(|(category_name, total_sales)| CategorySales {
            category_name,
            total_sales,
        })
        .collect()
}

/// The `limit` products with the highest line-item revenue
pub fn top_products(records: &[SalesRecord], limit: usize) -> Vec<ProductSales> {
    sum_by_key(records.iter().map(|r| (r.product_name.as_str(), r.subtotal)))
        .into_iter()
        .take(limit)
        .map(|(product_name, total_sales)| ProductSales {
            product_name,
            total_sales,
        })
        .collect()
}

/// Line-item revenue per `YYYY-MM`, oldest month first
pub fn monthly_sales_trend(records: &[SalesRecord]) -> Vec<MonthlySales> {
    // "YYYY-MM" keys sort chronologically
    let mut months: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        *months.entry(record.order_month()).or_insert(0.0) += record.subtotal;
    }

    months
        .into_iter()
        .map(|(order_month, total_sales)| MonthlySales {
            order_month,
            total_sales,
        })
        .collect()
}
