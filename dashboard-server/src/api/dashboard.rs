//! Dashboard endpoints: KPIs and breakdowns
//!
//! Every handler runs exactly one query. `/api/kpis` reports failures as
//! HTTP 500; the list endpoints treat a failure as "no data" and answer `[]`.

use axum::Json;
use axum::extract::State;
use shared::db::{DbResult, queries};
use shared::models::{
    CategorySales, CitySales, Kpis, MonthlySales, PaymentMethodUsage, ProductSales,
    RecentOrderLine,
};

use crate::error::DashboardError;
use crate::state::AppState;

/// Collapse a failed list query into an empty response
fn rows_or_empty<T>(endpoint: &'static str, result: DbResult<Vec<T>>) -> Json<Vec<T>> {
    match result {
        Ok(rows) => {
            tracing::debug!(endpoint, rows = rows.len(), "Query served");
            Json(rows)
        }
        Err(e) => {
            tracing::error!(endpoint, error = %e, "Query failed, serving empty list");
            Json(Vec::new())
        }
    }
}

/// GET /api/kpis
pub async fn get_kpis(State(state): State<AppState>) -> Result<Json<Kpis>, DashboardError> {
    let kpis = queries::kpis(&state.db)
        .await
        .map_err(|e| DashboardError::from_db("KPIs", e))?;
    Ok(Json(kpis))
}

/// GET /api/monthly-sales
pub async fn get_monthly_sales(State(state): State<AppState>) -> Json<Vec<MonthlySales>> {
    rows_or_empty("monthly-sales", queries::monthly_sales(&state.db).await)
}

/// GET /api/category-sales
pub async fn get_category_sales(State(state): State<AppState>) -> Json<Vec<CategorySales>> {
    rows_or_empty("category-sales", queries::category_sales(&state.db).await)
}

/// GET /api/top-products
pub async fn get_top_products(State(state): State<AppState>) -> Json<Vec<ProductSales>> {
    rows_or_empty("top-products", queries::top_products(&state.db).await)
}

/// GET /api/sales-by-city
pub async fn get_sales_by_city(State(state): State<AppState>) -> Json<Vec<CitySales>> {
    rows_or_empty("sales-by-city", queries::sales_by_city(&state.db).await)
}

/// GET /api/payment-methods
pub async fn get_payment_methods(
    State(state): State<AppState>,
) -> Json<Vec<PaymentMethodUsage>> {
    rows_or_empty("payment-methods", queries::payment_methods(&state.db).await)
}

/// GET /api/sales-data - most recent order lines for the live feed
pub async fn get_sales_data(State(state): State<AppState>) -> Json<Vec<RecentOrderLine>> {
    rows_or_empty("sales-data", queries::recent_orders(&state.db).await)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use http::{Request, StatusCode};
    use serde_json::{Value, json};
    use shared::db::Database;
    use shared::db::fixtures::FixtureDb;
    use tower::ServiceExt;

    use crate::api::test_support::{app, get_json};

    const LIST_ENDPOINTS: &[&str] = &[
        "/api/monthly-sales",
        "/api/category-sales",
        "/api/top-products",
        "/api/sales-by-city",
        "/api/payment-methods",
        "/api/sales-data",
    ];

    fn unreachable_database() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("offline/shop.db").display());
        let db = Database::new(&url).unwrap();
        (dir, db)
    }

    fn as_array(body: &Value) -> &Vec<Value> {
        body.as_array().expect("JSON array")
    }

    #[tokio::test]
    async fn test_kpis_seeded() {
        let fixture = FixtureDb::seeded().await;
        let (status, body) = get_json(app(fixture.database()), "/api/kpis").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["TotalOrders"], 12);
        assert_eq!(body["UniqueCustomers"], 7);
        assert!(body["TotalRevenue"].as_f64().unwrap() > 0.0);
        assert!(body["ItemsPerOrder"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn test_empty_database_scenario() {
        let fixture = FixtureDb::empty().await;

        let (status, body) = get_json(app(fixture.database()), "/api/kpis").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "TotalRevenue": 0.0,
                "TotalOrders": 0,
                "AvgOrderValue": 0.0,
                "UniqueCustomers": 0,
                "ItemsPerOrder": 0.0,
            })
        );

        for uri in LIST_ENDPOINTS {
            let (status, body) = get_json(app(fixture.database()), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, json!([]), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unreachable_database_scenario() {
        let (_dir, db) = unreachable_database();

        let (status, body) = get_json(app(db.clone()), "/api/kpis").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Database connection failed");

        let (status, body) = get_json(app(db), "/api/monthly-sales").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_missing_schema_scenario() {
        // Reachable store without the shop tables
        let fixture = FixtureDb::empty().await;
        fixture.execute("DROP TABLE OrderDetails; DROP TABLE Orders;").await;

        let (status, body) = get_json(app(fixture.database()), "/api/kpis").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch KPIs");

        let (status, body) = get_json(app(fixture.database()), "/api/sales-data").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_category_sales_single_order() {
        let fixture = FixtureDb::empty().await;
        fixture
            .execute(
                "INSERT INTO Categories VALUES (1, 'Books');
                 INSERT INTO Products VALUES (1, 'Novel', 1), (2, 'Atlas', 1);
                 INSERT INTO Customers VALUES (1, 'Ada', 'Lovelace', 'London');
                 INSERT INTO Orders VALUES (1, '2024-05-01 09:00:00', 1, 25.0);
                 INSERT INTO OrderDetails (OrderID, ProductID, Quantity, Subtotal)
                     VALUES (1, 1, 1, 10.0), (1, 2, 1, 15.0);",
            )
            .await;

        let (status, body) = get_json(app(fixture.database()), "/api/category-sales").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{"CategoryName": "Books", "TotalSales": 25.0}]));
    }

    #[tokio::test]
    async fn test_top_lists_limited_and_sorted() {
        let fixture = FixtureDb::seeded().await;

        for uri in ["/api/top-products", "/api/sales-by-city"] {
            let (_, body) = get_json(app(fixture.database()), uri).await;
            let rows = as_array(&body);
            assert!(rows.len() <= 5, "{uri}");
            let sales: Vec<f64> = rows
                .iter()
                .map(|r| r["TotalSales"].as_f64().unwrap())
                .collect();
            assert!(sales.windows(2).all(|w| w[0] >= w[1]), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_monthly_sales_shape() {
        let fixture = FixtureDb::seeded().await;
        let (_, body) = get_json(app(fixture.database()), "/api/monthly-sales").await;

        let months: Vec<&str> = as_array(&body)
            .iter()
            .map(|r| r["OrderMonth"].as_str().unwrap())
            .collect();
        assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);
    }

    #[tokio::test]
    async fn test_payment_methods_shape() {
        let fixture = FixtureDb::seeded().await;
        let (_, body) = get_json(app(fixture.database()), "/api/payment-methods").await;

        assert_eq!(body[0], json!({"PaymentMethod": "Card", "UsageCount": 6}));
    }

    #[tokio::test]
    async fn test_sales_data_feed() {
        let fixture = FixtureDb::seeded().await;
        let (_, body) = get_json(app(fixture.database()), "/api/sales-data").await;

        let rows = as_array(&body);
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0]["OrderID"], 12);
        assert_eq!(rows[0]["CustomerName"], "Ken Thompson");
        for key in ["ProductName", "CategoryName", "Subtotal"] {
            assert!(rows[0].get(key).is_some(), "missing {key}");
        }
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let fixture = FixtureDb::seeded().await;
        let response = app(fixture.database())
            .oneshot(
                Request::builder()
                    .uri("/api/top-products")
                    .header("origin", "http://dashboard.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
