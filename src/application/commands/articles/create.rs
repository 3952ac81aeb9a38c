// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, validate_article},
};

pub struct CreateArticleCommand {
    pub article: Option<Article>,
}

impl CreateArticleCommand {
    pub fn new(article: Article) -> Self {
        Self {
            article: Some(article),
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = validate_article(command.article).map_err(|err| {
            tracing::warn!(error = %err, "rejected article creation");
            ApplicationError::from(err)
        })?;

        let created = self
            .store
            .create(article)
            .await
            .map_err(|err| ApplicationError::internal("failed to create article", err))?;
        tracing::info!(article_id = %created.id, status = %created.status, "article created");
        Ok(created.into())
    }
}
