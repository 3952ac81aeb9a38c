use crate::domain::article::{ArticleEventKind, ArticleId, AuthorId, EventArticle};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EventArticleDto {
    pub id: u32,
    pub title: String,
    pub body: String,
    pub category: String,
    pub author_id: u32,
    pub author_name: String,
}

impl From<EventArticleDto> for EventArticle {
    fn from(dto: EventArticleDto) -> Self {
        Self {
            id: ArticleId::new(dto.id),
            title: dto.title,
            body: dto.body,
            category: dto.category,
            author_id: AuthorId::new(dto.author_id),
            author_name: dto.author_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventAckDto {
    pub status: String,
    pub kind: String,
    pub article_id: u32,
}

impl EventAckDto {
    pub fn accepted(kind: ArticleEventKind, article_id: ArticleId) -> Self {
        Self {
            status: "ACCEPTED".into(),
            kind: kind.as_str().into(),
            article_id: article_id.into(),
        }
    }
}
