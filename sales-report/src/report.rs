//! Report assembly: extract once, aggregate in memory, write one workbook

use std::path::Path;

use shared::db::{Database, queries};
use shared::models::{CategorySales, MonthlySales, ProductSales, SalesRecord};

use crate::aggregate;
use crate::chart::{ChartKind, ChartSpec};
use crate::config::Config;
use crate::error::ReportResult;
use crate::workbook::{CellValue, Sheet, SheetTable, write_workbook};

pub const RAW_SHEET: &str = "Raw Sales Data";
pub const CATEGORY_SHEET: &str = "Sales by Category";
pub const PRODUCTS_SHEET: &str = "Top Products";
pub const MONTHLY_SHEET: &str = "Monthly Sales Trend";

const RAW_HEADERS: &[&str] = &[
    "OrderID",
    "OrderDate",
    "CustomerID",
    "FirstName",
    "LastName",
    "City",
    "ProductID",
    "ProductName",
    "CategoryName",
    "Quantity",
    "Subtotal",
];

/// Charts sit to the right of the two-column aggregate tables, at D2
const CHART_ANCHOR: (u32, u32) = (3, 1);

/// What a finished run produced
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub raw_rows: usize,
    pub categories: Vec<CategorySales>,
    pub top_products: Vec<ProductSales>,
    pub monthly: Vec<MonthlySales>,
}

/// Run the whole report: one connection, one query, one file
pub async fn generate(config: &Config) -> ReportResult<ReportSummary> {
    let db = Database::new(&config.database_url)?;

    let records = queries::sales_records(&db).await?;
    tracing::info!(rows = records.len(), "Raw sales data extracted");

    let summary = ReportSummary {
        raw_rows: records.len(),
        categories: aggregate::sales_by_category(&records),
        top_products: aggregate::top_products(&records, config.top_n),
        monthly: aggregate::monthly_sales_trend(&records),
    };

    log_table(
        "Sales by Category",
        summary
            .categories
            .iter()
            .map(|c| (c.category_name.as_str(), c.total_sales)),
    );
    log_table(
        &format!("Top {} Products by Sales", config.top_n),
        summary
            .top_products
            .iter()
            .map(|p| (p.product_name.as_str(), p.total_sales)),
    );
    log_table(
        "Monthly Sales Trend",
        summary
            .monthly
            .iter()
            .map(|m| (m.order_month.as_str(), m.total_sales)),
    );

    let sheets = build_sheets(&records, &summary, config.top_n);
    write_workbook(Path::new(&config.output_path), &sheets)?;
    tracing::info!(
        path = %config.output_path,
        "All analyses complete, dashboard report saved with embedded charts"
    );

    Ok(summary)
}

/// Raw data sheet plus one sheet and chart per aggregate
pub fn build_sheets(records: &[SalesRecord], summary: &ReportSummary, top_n: usize) -> Vec<Sheet> {
    let mut raw = SheetTable::new(RAW_SHEET, RAW_HEADERS);
    for r in records {
        raw.push_row(vec![
            r.order_id.into(),
            r.order_date.into(),
            r.customer_id.into(),
            r.first_name.as_str().into(),
            r.last_name.as_str().into(),
            r.city.as_str().into(),
            r.product_id.into(),
            r.product_name.as_str().into(),
            r.category_name.as_str().into(),
            r.quantity.into(),
            r.subtotal.into(),
        ]);
    }

    let categories = aggregate_table(
        CATEGORY_SHEET,
        "CategoryName",
        summary
            .categories
            .iter()
            .map(|c| (c.category_name.as_str(), c.total_sales)),
    );
    let products = aggregate_table(
        PRODUCTS_SHEET,
        "ProductName",
        summary
            .top_products
            .iter()
            .map(|p| (p.product_name.as_str(), p.total_sales)),
    );
    let monthly = aggregate_table(
        MONTHLY_SHEET,
        "OrderMonth",
        summary
            .monthly
            .iter()
            .map(|m| (m.order_month.as_str(), m.total_sales)),
    );

    let category_chart = chart_for(&categories, ChartKind::Column, "Sales by Category", "Category");
    let products_chart = chart_for(
        &products,
        ChartKind::Bar,
        &format!("Top {top_n} Products by Sales"),
        "Product",
    );
    let monthly_chart = chart_for(&monthly, ChartKind::Line, "Monthly Sales Trend", "Month");

    vec![
        Sheet {
            table: raw,
            chart: None,
        },
        Sheet {
            table: categories,
            chart: Some(category_chart),
        },
        Sheet {
            table: products,
            chart: Some(products_chart),
        },
        Sheet {
            table: monthly,
            chart: Some(monthly_chart),
        },
    ]
}

fn aggregate_table<'a>(
    sheet: &str,
    key_header: &str,
    rows: impl Iterator<Item = (&'a str, f64)>,
) -> SheetTable {
    let mut table = SheetTable::new(sheet, &[key_header, "Subtotal"]);
    for (key, total) in rows {
        table.push_row(vec![CellValue::from(key), CellValue::from(total)]);
    }
    table
}

fn chart_for(table: &SheetTable, kind: ChartKind, title: &str, x_axis: &str) -> ChartSpec {
    ChartSpec {
        kind,
        title: title.to_string(),
        x_axis: x_axis.to_string(),
        y_axis: "Total Sales".to_string(),
        anchor: CHART_ANCHOR,
        series: table.binding(0, 1),
    }
}

fn log_table<'a>(title: &str, rows: impl Iterator<Item = (&'a str, f64)>) {
    tracing::info!("--- {title} ---");
    for (key, total) in rows {
        tracing::info!("{key:<24} {total:>14.2}");
    }
}
