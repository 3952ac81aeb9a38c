// src/presentation/http/controllers/feeds.rs
use crate::application::{dto::ArticleDto, queries::articles::LatestArticlesQuery};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult};
use crate::presentation::http::renderers::{
    RenderError,
    rss::{RSS_CONTENT_TYPE, render_feed},
    sitemap::{SITEMAP_CONTENT_TYPE, render_sitemap},
};
use crate::presentation::http::extractors::ApiPath;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    http::header,
    response::{IntoResponse, Response},
};

#[utoipa::path(
    get,
    path = "/feed",
    responses(
        (status = 200, description = "RSS 2.0 feed of the latest published articles.", content_type = "application/rss+xml", body = String),
        (status = 500, description = "Query or rendering failed.", body = ErrorResponse)
    ),
    tag = "Feeds"
)]
pub async fn feed(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    rss_response(&state, String::new()).await
}

#[utoipa::path(
    get,
    path = "/feed/{category}",
    params(("category" = String, Path, description = "Category to restrict the feed to")),
    responses(
        (status = 200, description = "RSS 2.0 feed of one category.", content_type = "application/rss+xml", body = String),
        (status = 500, description = "Query or rendering failed.", body = ErrorResponse)
    ),
    tag = "Feeds"
)]
pub async fn category_feed(
    Extension(state): Extension<HttpState>,
    ApiPath(category): ApiPath<String>,
) -> HttpResult<Response> {
    rss_response(&state, category).await
}

#[utoipa::path(
    get,
    path = "/sitemap",
    responses(
        (status = 200, description = "Sitemap with news entries for the latest published articles.", content_type = "application/xml", body = String),
        (status = 500, description = "Query or rendering failed.", body = ErrorResponse)
    ),
    tag = "Feeds"
)]
pub async fn sitemap(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let articles = latest_published(&state, String::new()).await?;
    let slugger = state.services.slugger();
    let body = render_sitemap(&state.site, slugger.as_ref(), &articles)
        .map_err(|err| render_failure("sitemap", &err))?;
    Ok(([(header::CONTENT_TYPE, SITEMAP_CONTENT_TYPE)], body).into_response())
}

async fn rss_response(state: &HttpState, category: String) -> HttpResult<Response> {
    let articles = latest_published(state, category).await?;
    let slugger = state.services.slugger();
    let built_at = state.services.clock().now();
    let body = render_feed(&state.site, slugger.as_ref(), built_at, &articles)
        .map_err(|err| render_failure("RSS feed", &err))?;
    Ok(([(header::CONTENT_TYPE, RSS_CONTENT_TYPE)], body).into_response())
}

async fn latest_published(state: &HttpState, category: String) -> HttpResult<Vec<ArticleDto>> {
    state
        .services
        .article_queries
        .latest_articles(LatestArticlesQuery::published(
            category,
            state.site.feed_item_count,
        ))
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "failed to fetch articles");
            HttpError::internal("failed to query articles")
        })
}

fn render_failure(what: &str, err: &RenderError) -> HttpError {
    tracing::error!(error = %err, "failed to generate {what}");
    HttpError::internal(format!("failed to generate {what}"))
}
