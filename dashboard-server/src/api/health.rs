//! Health check endpoint

use axum::Json;
use axum::extract::State;

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_ok = state.db.ping().await;
    let status = if db_ok { "ok" } else { "degraded" };
    Json(serde_json::json!({
        "status": status,
        "service": "dashboard-server",
        "version": env!("CARGO_PKG_VERSION"),
        "db": db_ok,
    }))
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use shared::db::Database;
    use shared::db::fixtures::FixtureDb;

    use crate::api::test_support::{app, get_json};

    #[tokio::test]
    async fn test_health_ok() {
        let fixture = FixtureDb::empty().await;
        let (status, body) = get_json(app(fixture.database()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["db"], true);
    }

    #[tokio::test]
    async fn test_health_degraded_without_database() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("none/shop.db").display());
        let (status, body) = get_json(app(Database::new(&url).unwrap()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["db"], false);
    }
}
