use crate::application::dto::{EventAckDto, EventArticleDto};
use crate::domain::article::{ArticleEvent, ArticleEventKind};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ArticleEventRequest {
    pub article: EventArticleDto,
}

#[utoipa::path(
    post,
    path = "/api/v1/events/{kind}",
    params((
        "kind" = String,
        Path,
        description = "One of created, updated, retracted, draft-created, draft-updated"
    )),
    request_body = ArticleEventRequest,
    responses(
        (status = 200, description = "Event logged and acknowledged.", body = EventAckDto),
        (status = 400, description = "Unknown event kind or malformed body.", body = ErrorResponse)
    ),
    tag = "Events"
)]
pub async fn relay_event(
    Extension(state): Extension<HttpState>,
    ApiPath(kind): ApiPath<String>,
    ApiJson(payload): ApiJson<ArticleEventRequest>,
) -> HttpResult<Json<EventAckDto>> {
    let kind = kind
        .parse::<ArticleEventKind>()
        .map_err(HttpError::bad_request)?;
    let event = ArticleEvent {
        kind,
        article: payload.article.into(),
    };

    state.services.event_relay.relay(event).into_http().map(Json)
}
