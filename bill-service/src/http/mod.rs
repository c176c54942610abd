pub mod download_data;
pub mod home;
pub mod manual_save;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::store::BillStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BillStore>,
}

impl AppState {
    pub fn new(store: impl BillStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/manual-save", post(manual_save::manual_save))
        .route("/download-data", get(download_data::download_data))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteBillStore;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct TestApp {
        router: Router,
        _dir: tempfile::TempDir,
    }

    async fn app() -> TestApp {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bills.db");
        let store = SqliteBillStore::open(path.to_str().unwrap()).await.unwrap();

        TestApp {
            router: router(AppState::new(store)),
            _dir: dir,
        }
    }

    fn alice() -> Value {
        json!({
            "consumer_name": "Alice",
            "Industry_name": "Textile",
            "contact_detail": "a@x.com",
            "bill_month": "2024-01",
            "net_consumption": "120.5",
            "total_amount": "1000"
        })
    }

    async fn send(app: &TestApp, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let resp = app.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn post_raw(app: &TestApp, body: impl Into<Body>) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/manual-save")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();
        let (status, body) = send(app, req).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post(app: &TestApp, payload: &Value) -> (StatusCode, Value) {
        post_raw(app, payload.to_string()).await
    }

    async fn download(app: &TestApp) -> (StatusCode, Value) {
        let req = Request::builder().uri("/download-data").body(Body::empty()).unwrap();
        let (status, body) = send(app, req).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn home_page_serves_html() {
        let app = app().await;
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();

        let resp = app.router.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("/manual-save"));
        assert!(html.contains("/download-data"));
    }

    #[tokio::test]
    async fn save_then_download_round_trip() {
        let app = app().await;

        let (status, body) = post(&app, &alice()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "status": "saved",
                "preview": {
                    "consumer_name": "Alice",
                    "Industry_name": "Textile",
                    "contact_detail": "a@x.com",
                    "bill_month": "2024-01",
                    "net_consumption": 120.5,
                    "total_amount": 1000.0
                },
                "savings": 30.0
            })
        );

        let (status, body) = download(&app).await;
        assert_eq!(status, StatusCode::OK);
        let records = body["records"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["industry_name"], "Textile");
        assert_eq!(records[0]["savings"], 30.0);
        assert_eq!(records[0]["total_amount"], 1000.0);
        assert!(records[0].get("Industry_name").is_none());
        assert!(records[0]["id"].is_i64());
    }

    #[tokio::test]
    async fn empty_store_reports_no_data() {
        let app = app().await;

        let (status, body) = download(&app).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "No data available" }));
    }

    #[tokio::test]
    async fn rejected_submissions_insert_nothing() {
        let app = app().await;

        let mut missing = alice();
        missing.as_object_mut().unwrap().remove("contact_detail");
        let (status, body) = post(&app, &missing).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "All fields are required" }));

        let mut zero_total = alice();
        zero_total["total_amount"] = json!(0);
        let (status, body) = post(&app, &zero_total).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "All fields are required" }));

        let mut bad_number = alice();
        bad_number["net_consumption"] = json!("lots");
        let (status, body) = post(&app, &bad_number).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Numeric fields must contain numbers" }));

        let (status, body) = post_raw(&app, "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid JSON received" }));

        let (status, _) = download(&app).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn oversized_body_gets_a_json_error() {
        let app = app().await;

        let mut huge = alice();
        huge["consumer_name"] = json!("x".repeat(3 * 1024 * 1024));
        let (status, body) = post(&app, &huge).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid JSON received" }));

        let (status, _) = download(&app).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn every_write_gets_a_distinct_ascending_id() {
        let app = app().await;

        for total in ["10", "20", "30"] {
            let mut payload = alice();
            payload["total_amount"] = json!(total);
            assert_eq!(post(&app, &payload).await.0, StatusCode::OK);
        }
        // Identical payloads are not deduplicated.
        assert_eq!(post(&app, &alice()).await.0, StatusCode::OK);
        assert_eq!(post(&app, &alice()).await.0, StatusCode::OK);

        let (_, body) = download(&app).await;
        let records = body["records"].as_array().unwrap();
        assert_eq!(records.len(), 5);

        let ids: Vec<i64> = records.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let savings: Vec<f64> = records.iter().map(|r| r["savings"].as_f64().unwrap()).collect();
        assert_eq!(savings, [0.3, 0.6, 0.9, 30.0, 30.0]);
    }

    #[tokio::test]
    async fn client_supplied_savings_are_ignored() {
        let app = app().await;

        let mut payload = alice();
        payload["savings"] = json!(999.0);
        let (status, body) = post(&app, &payload).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["savings"], 30.0);

        let (_, body) = download(&app).await;
        assert_eq!(body["records"][0]["savings"], 30.0);
    }
}
