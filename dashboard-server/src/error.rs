//! Error responses for dashboard-server
//!
//! Only the KPI endpoint surfaces failures to the client. List endpoints
//! log the failure and answer `[]` instead (see `api::dashboard`).

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use shared::db::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The store could not be reached
    #[error("Database connection failed")]
    Unavailable(#[source] DbError),

    /// The statement ran but failed
    #[error("Failed to fetch {resource}")]
    Query {
        resource: &'static str,
        #[source]
        source: DbError,
    },
}

impl DashboardError {
    pub fn from_db(resource: &'static str, err: DbError) -> Self {
        if err.is_connection() {
            DashboardError::Unavailable(err)
        } else {
            DashboardError::Query {
                resource,
                source: err,
            }
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match &self {
            DashboardError::Unavailable(e) => {
                tracing::error!(error = %e, "Database connection failed");
            }
            DashboardError::Query { resource, source } => {
                tracing::error!(resource = %resource, error = %source, "Database query failed");
            }
        }

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
