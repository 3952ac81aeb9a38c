// src/presentation/http/routes.rs
use crate::presentation::graphql::build_schema;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, events, feeds},
    openapi::{self, StatusResponse},
};
use async_graphql_axum::GraphQL;
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::{sync::Arc, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router. An empty `allowed_origins` list allows any
/// origin.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            post(articles::create_article).put(articles::update_article),
        )
        .route("/api/v1/articles/latest", get(articles::latest_articles))
        .route("/api/v1/articles/{id}", get(articles::fetch_article))
        .route("/api/v1/events/{kind}", post(events::relay_event))
        .route("/feed", get(feeds::feed))
        .route("/feed/{category}", get(feeds::category_feed))
        .route("/sitemap", get(feeds::sitemap))
        .route_service(
            "/graphql",
            GraphQL::new(build_schema(Arc::clone(&state.services))),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
