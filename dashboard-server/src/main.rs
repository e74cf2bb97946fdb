//! dashboard-server: HTTP JSON backend for the sales dashboard
//!
//! Serves KPIs and sales breakdowns computed from the shop database.
//! Each request opens its own database connection and closes it again;
//! nothing is cached between requests.

mod api;
mod config;
mod error;
mod state;

use config::Config;
use shared::db::Database;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard_server=info,shared=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    // Connection parameters are resolved once; connections are per request
    let db = Database::new(&config.database_url)?;
    let state = AppState::new(db);

    let app = api::router(state, config.request_timeout);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("dashboard-server listening on http://{http_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("dashboard-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
