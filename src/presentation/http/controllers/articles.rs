// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleStatusDto},
    queries::articles::{FetchArticleQuery, LatestArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query string of `GET /api/v1/articles/latest`. Omitted values take their
/// zero value, so `count` must be supplied explicitly.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct LatestArticlesParams {
    /// Category to match exactly; empty or absent matches all.
    pub category: String,
    /// Number of articles wanted, 1 to 50.
    pub count: u32,
    /// Status to match; `UNKNOWN` or absent matches all.
    pub status: ArticleStatusDto,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ArticleRequest {
    pub article: Option<ArticleDto>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = u32, Path, description = "Article id")),
    responses(
        (status = 200, description = "The first article with this id.", body = ArticleDto),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 500, description = "No such article, or the store failed.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn fetch_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<u32>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .fetch_article(FetchArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article stored at the front of the collection.", body = ArticleDto),
        (status = 400, description = "Malformed body or validation failed.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<ArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        article: payload.article.map(Into::into),
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles",
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article replaced in place.", body = ArticleDto),
        (status = 400, description = "Malformed body or validation failed.", body = ErrorResponse),
        (status = 500, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<ArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        article: payload.article.map(Into::into),
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/latest",
    params(LatestArticlesParams),
    responses(
        (status = 200, description = "Matching articles, newest first.", body = [ArticleDto]),
        (status = 400, description = "Malformed query or count out of range.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn latest_articles(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<LatestArticlesParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let query = LatestArticlesQuery {
        category: params.category,
        count: params.count,
        status: params.status.into(),
    };

    state
        .services
        .article_queries
        .latest_articles(query)
        .await
        .into_http()
        .map(Json)
}
