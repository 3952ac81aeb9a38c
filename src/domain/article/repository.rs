use crate::domain::article::entity::{Article, ArticleStatus};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Ordered article collection, newest-inserted first.
///
/// Implementations must make every call atomic with respect to the others:
/// `get`/`latest` never observe a half-applied `create`/`update`.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// First article (scanning from the newest) whose id matches.
    async fn get(&self, id: ArticleId) -> DomainResult<Article>;

    /// Places the article at the front of the sequence. Ids are not checked
    /// for uniqueness.
    async fn create(&self, article: Article) -> DomainResult<Article>;

    /// Replaces the first article with the same id, keeping its position.
    async fn update(&self, article: Article) -> DomainResult<Article>;

    /// Up to `count` articles matching `category` (empty = any) and `status`
    /// (`Unknown` = any), newest first.
    async fn latest(
        &self,
        category: &str,
        count: u32,
        status: ArticleStatus,
    ) -> DomainResult<Vec<Article>>;
}
