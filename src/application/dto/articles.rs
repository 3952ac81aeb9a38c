use crate::domain::article::{Article, ArticleId, ArticleStatus, AuthorId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleStatusDto {
    #[default]
    Unknown,
    Draft,
    Published,
    Retracted,
}

impl From<ArticleStatus> for ArticleStatusDto {
    fn from(status: ArticleStatus) -> Self {
        match status {
            ArticleStatus::Unknown => Self::Unknown,
            ArticleStatus::Draft => Self::Draft,
            ArticleStatus::Published => Self::Published,
            ArticleStatus::Retracted => Self::Retracted,
        }
    }
}

impl From<ArticleStatusDto> for ArticleStatus {
    fn from(status: ArticleStatusDto) -> Self {
        match status {
            ArticleStatusDto::Unknown => Self::Unknown,
            ArticleStatusDto::Draft => Self::Draft,
            ArticleStatusDto::Published => Self::Published,
            ArticleStatusDto::Retracted => Self::Retracted,
        }
    }
}

/// Wire form of an article. Missing fields take their zero value so that
/// the services, not the decoder, decide what is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ArticleDto {
    pub id: u32,
    pub title: String,
    pub body: String,
    pub category: String,
    pub author_id: u32,
    pub author_name: String,
    pub status: ArticleStatusDto,
    pub created: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            body: article.body,
            category: article.category,
            author_id: article.author_id.into(),
            author_name: article.author_name,
            status: article.status.into(),
            created: article.created,
        }
    }
}

impl From<ArticleDto> for Article {
    fn from(dto: ArticleDto) -> Self {
        Self {
            id: ArticleId::new(dto.id),
            title: dto.title,
            body: dto.body,
            category: dto.category,
            author_id: AuthorId::new(dto.author_id),
            author_name: dto.author_name,
            status: dto.status.into(),
            created: dto.created,
        }
    }
}
