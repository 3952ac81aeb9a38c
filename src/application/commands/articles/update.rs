use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, validate_article},
};

/// Wholesale replacement of the stored article with the same id.
pub struct UpdateArticleCommand {
    pub article: Option<Article>,
}

impl UpdateArticleCommand {
    pub fn new(article: Article) -> Self {
        Self {
            article: Some(article),
        }
    }
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = validate_article(command.article).map_err(|err| {
            tracing::warn!(error = %err, "rejected article update");
            ApplicationError::from(err)
        })?;

        let id = article.id;
        let updated = self.store.update(article).await.map_err(|err| {
            tracing::warn!(article_id = %id, error = %err, "article update failed");
            ApplicationError::internal("failed to update article", err)
        })?;
        tracing::info!(article_id = %updated.id, status = %updated.status, "article updated");
        Ok(updated.into())
    }
}
