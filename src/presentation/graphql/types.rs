// src/presentation/graphql/types.rs
use async_graphql::{Enum, ID, InputObject, Object, SimpleObject};
use thiserror::Error;

use super::relay::{ARTICLE_KIND, AUTHOR_KIND, global_id};
use crate::{
    application::dto::{ArticleDto, ArticleStatusDto},
    domain::article::{ArticleId, ArticleStatus, AuthorId, EventArticle},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[graphql(name = "ArticleStatus")]
pub enum GraphArticleStatus {
    Unknown,
    Draft,
    Published,
    Retracted,
}

impl From<ArticleStatusDto> for GraphArticleStatus {
    fn from(status: ArticleStatusDto) -> Self {
        match status {
            ArticleStatusDto::Unknown => Self::Unknown,
            ArticleStatusDto::Draft => Self::Draft,
            ArticleStatusDto::Published => Self::Published,
            ArticleStatusDto::Retracted => Self::Retracted,
        }
    }
}

impl From<GraphArticleStatus> for ArticleStatus {
    fn from(status: GraphArticleStatus) -> Self {
        match status {
            GraphArticleStatus::Unknown => Self::Unknown,
            GraphArticleStatus::Draft => Self::Draft,
            GraphArticleStatus::Published => Self::Published,
            GraphArticleStatus::Retracted => Self::Retracted,
        }
    }
}

pub struct GraphArticle(pub ArticleDto);

#[Object(name = "Article")]
impl GraphArticle {
    async fn id(&self) -> ID {
        global_id(ARTICLE_KIND, self.0.id)
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn body(&self) -> &str {
        &self.0.body
    }

    async fn category(&self) -> &str {
        &self.0.category
    }

    #[graphql(name = "author_id")]
    async fn author_id(&self) -> ID {
        global_id(AUTHOR_KIND, self.0.author_id)
    }

    #[graphql(name = "author_name")]
    async fn author_name(&self) -> &str {
        &self.0.author_name
    }

    async fn status(&self) -> GraphArticleStatus {
        self.0.status.into()
    }
}

/// Article submitted through `createArticle`. Omitted fields are zero
/// values and are caught by [`ArticleInput::validate`].
#[derive(Debug, Clone, Default, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct ArticleInput {
    #[graphql(default)]
    pub id: u32,
    #[graphql(default)]
    pub title: String,
    #[graphql(default)]
    pub body: String,
    #[graphql(default)]
    pub category: String,
    #[graphql(default)]
    pub author_id: u32,
    #[graphql(default)]
    pub author_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArticleInputError {
    #[error("missing title")]
    MissingTitle,
    #[error("missing category")]
    MissingCategory,
    #[error("missing author name")]
    MissingAuthorName,
    #[error("missing author id")]
    MissingAuthorId,
    #[error("missing article id")]
    MissingId,
}

impl ArticleInput {
    /// Checks title, category, author name, author id, then article id.
    /// The body may be empty.
    pub fn validate(&self) -> Result<(), ArticleInputError> {
        if self.title.is_empty() {
            return Err(ArticleInputError::MissingTitle);
        }
        if self.category.is_empty() {
            return Err(ArticleInputError::MissingCategory);
        }
        if self.author_name.is_empty() {
            return Err(ArticleInputError::MissingAuthorName);
        }
        if self.author_id == 0 {
            return Err(ArticleInputError::MissingAuthorId);
        }
        if self.id == 0 {
            return Err(ArticleInputError::MissingId);
        }
        Ok(())
    }
}

impl From<ArticleInput> for EventArticle {
    fn from(input: ArticleInput) -> Self {
        Self {
            id: ArticleId::new(input.id),
            title: input.title,
            body: input.body,
            category: input.category,
            author_id: AuthorId::new(input.author_id),
            author_name: input.author_name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum EventStatus {
    Failed,
    Accepted,
}

/// Outcome of a mutation. Failures are reported here, not as GraphQL errors.
#[derive(Debug, Clone, SimpleObject)]
pub struct EventResponse {
    pub id: ID,
    pub status: EventStatus,
    pub error: Option<String>,
}

impl EventResponse {
    pub fn accepted(id: ID) -> Self {
        Self {
            id,
            status: EventStatus::Accepted,
            error: None,
        }
    }

    pub fn failed(id: ID, error: impl Into<String>) -> Self {
        Self {
            id,
            status: EventStatus::Failed,
            error: Some(error.into()),
        }
    }
}
