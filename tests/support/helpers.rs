// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::util::ServiceExt as _;

use publishing_core::application::ports::time::Clock;
use publishing_core::application::services::ApplicationServices;
use publishing_core::config::SiteConfig;
use publishing_core::domain::article::ArticleStore;
use publishing_core::infrastructure::{
    repositories::InMemoryArticleStore, util::DefaultSlugGenerator,
};
use publishing_core::presentation::http::{routes::build_router, state::HttpState};

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn build_services(store: Arc<dyn ArticleStore>) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        store,
        Arc::new(FixedClock::default()),
        Arc::new(DefaultSlugGenerator),
    ))
}

pub fn make_test_router_with_store(store: Arc<dyn ArticleStore>) -> axum::Router {
    let state = HttpState {
        services: build_services(store),
        site: Arc::new(SiteConfig::default()),
    };
    build_router(state, &[])
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with_store(Arc::new(InMemoryArticleStore::new()))
}

pub async fn send(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn read_body(resp: Response) -> (StatusCode, String, String) {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    (parts.status, ct, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let (status, _, text) = read_body(resp).await;
    let json = serde_json::from_str(&text).expect("expected a JSON body");
    (status, json)
}

/// Assert that a response is an `ErrorResponse` with the expected status and
/// canonical reason, returning its message.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    let (status, ct, text) = read_body(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {text}");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_str(&text).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_string()
}

pub fn ids(json: &Value) -> Vec<u64> {
    json.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|article| article["id"].as_u64().expect("article id"))
        .collect()
}
