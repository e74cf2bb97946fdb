//! API routes for dashboard-server

pub mod dashboard;
pub mod health;

use std::time::Duration;

use axum::Router;
use axum::routing::get;
use http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the dashboard router with all middleware and state
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let api = Router::new()
        .route("/api/kpis", get(dashboard::get_kpis))
        .route("/api/monthly-sales", get(dashboard::get_monthly_sales))
        .route("/api/category-sales", get(dashboard::get_category_sales))
        .route("/api/top-products", get(dashboard::get_top_products))
        .route("/api/sales-by-city", get(dashboard::get_sales_by_city))
        .route("/api/payment-methods", get(dashboard::get_payment_methods))
        .route("/api/sales-data", get(dashboard::get_sales_data));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(api)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::Router;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use shared::db::Database;
    use tower::ServiceExt;

    use crate::state::AppState;

    pub fn app(db: Database) -> Router {
        super::router(AppState::new(db), std::time::Duration::from_secs(5))
    }

    /// GET `uri` and decode the JSON body
    pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
