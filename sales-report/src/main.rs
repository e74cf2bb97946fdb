//! sales-report: one-shot Excel dashboard report
//!
//! Extracts the joined order-line dataset once, aggregates it in memory
//! and writes a workbook with one sheet and chart per aggregate.

mod aggregate;
mod chart;
mod config;
mod error;
mod report;
mod workbook;

use config::Config;

#[tokio::main]
async fn main() {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sales_report=info,shared=info".into()),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(output = %config.output_path, "Generating sales report");

    if let Err(e) = report::generate(&config).await {
        if e.is_connection() {
            tracing::error!("Error connecting to the database: {e}");
        } else {
            tracing::error!("Report generation failed: {e}");
        }
        std::process::exit(1);
    }
}
