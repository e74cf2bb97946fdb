//! Report generator configuration

/// Report generator configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (env: DATABASE_URL)
    pub database_url: String,
    /// Workbook path, overwritten on every run (env: REPORT_OUTPUT)
    pub output_path: String,
    /// Number of products on the top-products sheet (env: REPORT_TOP_N)
    pub top_n: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://ecommerce.db".into()),
            output_path: std::env::var("REPORT_OUTPUT")
                .unwrap_or_else(|_| "e_commerce_dashboard_report.xlsx".into()),
            top_n: std::env::var("REPORT_TOP_N")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(5),
        }
    }
}
