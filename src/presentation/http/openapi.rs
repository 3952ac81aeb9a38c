// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

pub const DEFAULT_SNAPSHOT_PATH: &str = "openapi/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::fetch_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::latest_articles,
        crate::presentation::http::controllers::events::relay_event,
        crate::presentation::http::controllers::feeds::feed,
        crate::presentation::http::controllers::feeds::category_feed,
        crate::presentation::http::controllers::feeds::sitemap,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleRequest,
            crate::presentation::http::controllers::articles::LatestArticlesParams,
            crate::presentation::http::controllers::events::ArticleEventRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleStatusDto,
            crate::application::dto::EventArticleDto,
            crate::application::dto::EventAckDto
        )
    ),
    tags(
        (name = "Articles", description = "Article store operations"),
        (name = "Events", description = "Article notification relay"),
        (name = "Feeds", description = "RSS feed and sitemap renderers"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Publishing API",
        description = "Article store with recency queries, feeds and sitemaps",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}

/// Path the snapshot binary writes to, from `OPENAPI_SNAPSHOT_PATH`.
pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
