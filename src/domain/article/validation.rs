// src/domain/article/validation.rs
use crate::domain::article::entity::Article;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArticleValidationError {
    #[error("article is missing")]
    MissingArticle,
    #[error("article body is required")]
    MissingBody,
    #[error("article category is required")]
    MissingCategory,
    #[error("article title is required")]
    MissingTitle,
    #[error("unknown article status")]
    UnknownStatus,
}

/// Checks an article submitted for create or update. Checks run in a fixed
/// order (presence, body, category, title, status) and the first failure wins.
pub fn validate_article(article: Option<Article>) -> Result<Article, ArticleValidationError> {
    let article = article.ok_or(ArticleValidationError::MissingArticle)?;
    if article.body.is_empty() {
        return Err(ArticleValidationError::MissingBody);
    }
    if article.category.is_empty() {
        return Err(ArticleValidationError::MissingCategory);
    }
    if article.title.is_empty() {
        return Err(ArticleValidationError::MissingTitle);
    }
    if article.status.is_unknown() {
        return Err(ArticleValidationError::UnknownStatus);
    }
    Ok(article)
}
