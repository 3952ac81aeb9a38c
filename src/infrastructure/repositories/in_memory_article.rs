// src/infrastructure/repositories/in_memory_article.rs
use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::{
    article::{Article, ArticleId, ArticleStatus, ArticleStore, LatestArticlesSpec},
    errors::{DomainError, DomainResult},
};

/// Article store backed by a single deque, newest at the front.
///
/// One readers-writer lock guards the whole sequence. The guard is always
/// released before the async method returns, so it is never held across an
/// await point.
#[derive(Debug, Default)]
pub struct InMemoryArticleStore {
    articles: RwLock<VecDeque<Article>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored articles, counted even through a poisoned lock.
    /// Store operations on a poisoned lock still fail with `Persistence`.
    pub fn len(&self) -> usize {
        self.articles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, VecDeque<Article>>> {
        self.articles
            .read()
            .map_err(|_| DomainError::Persistence("article store lock poisoned".into()))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, VecDeque<Article>>> {
        self.articles
            .write()
            .map_err(|_| DomainError::Persistence("article store lock poisoned".into()))
    }
}

fn not_found() -> DomainError {
    DomainError::NotFound("article not found".into())
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn get(&self, id: ArticleId) -> DomainResult<Article> {
        let articles = self.read()?;
        articles
            .iter()
            .find(|article| article.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create(&self, article: Article) -> DomainResult<Article> {
        let mut articles = self.write()?;
        articles.push_front(article.clone());
        tracing::debug!(article_id = %article.id, size = articles.len(), "stored article");
        Ok(article)
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        let mut articles = self.write()?;
        let slot = articles
            .iter_mut()
            .find(|existing| existing.id == article.id)
            .ok_or_else(not_found)?;
        *slot = article.clone();
        tracing::debug!(article_id = %article.id, "replaced article");
        Ok(article)
    }

    async fn latest(
        &self,
        category: &str,
        count: u32,
        status: ArticleStatus,
    ) -> DomainResult<Vec<Article>> {
        let spec = LatestArticlesSpec::new(category, status);
        let limit = usize::try_from(count).unwrap_or(usize::MAX);
        let articles = self.read()?;
        Ok(articles
            .iter()
            .filter(|article| spec.is_satisfied_by(article))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::AuthorId;
    use chrono::Utc;

    fn article(id: u32, category: &str, status: ArticleStatus) -> Article {
        Article {
            id: ArticleId::new(id),
            title: format!("title {id}"),
            body: format!("body {id}"),
            category: category.into(),
            author_id: AuthorId::new(10),
            author_name: "Pavel".into(),
            status,
            created: Utc::now(),
        }
    }

    fn ids(articles: &[Article]) -> Vec<u32> {
        articles.iter().map(|a| a.id.0).collect()
    }

    #[tokio::test]
    async fn poisoned_lock_keeps_the_count_and_fails_operations() {
        let store = std::sync::Arc::new(InMemoryArticleStore::new());
        store
            .create(article(1, "news", ArticleStatus::Published))
            .await
            .unwrap();

        let holder = std::sync::Arc::clone(&store);
        let joined = std::thread::spawn(move || {
            let _guard = holder.articles.write().unwrap();
            panic!("writer died while holding the lock");
        })
        .join();
        assert!(joined.is_err());
        assert!(store.articles.is_poisoned());

        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        let err = store.get(ArticleId::new(1)).await.unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));
        let err = store
            .create(article(2, "news", ArticleStatus::Published))
            .await
            .unwrap_err();
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn get_on_empty_store_is_not_found() {
        let store = InMemoryArticleStore::new();
        let err = store.get(ArticleId::new(999)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn create_prepends() {
        let store = InMemoryArticleStore::new();
        for id in 1..=3 {
            store
                .create(article(id, "news", ArticleStatus::Published))
                .await
                .unwrap();
        }
        let latest = store.latest("", 3, ArticleStatus::Unknown).await.unwrap();
        assert_eq!(ids(&latest), vec![3, 2, 1]);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let store = InMemoryArticleStore::new();
        for id in 1..=3 {
            store
                .create(article(id, "news", ArticleStatus::Published))
                .await
                .unwrap();
        }
        let mut changed = article(2, "news", ArticleStatus::Published);
        changed.title = "B prime".into();
        store.update(changed).await.unwrap();

        let latest = store.latest("", 3, ArticleStatus::Unknown).await.unwrap();
        assert_eq!(ids(&latest), vec![3, 2, 1]);
        assert_eq!(latest[1].title, "B prime");
    }

    #[tokio::test]
    async fn update_of_missing_id_leaves_store_untouched() {
        let store = InMemoryArticleStore::new();
        store
            .create(article(1, "news", ArticleStatus::Published))
            .await
            .unwrap();
        let err = store
            .update(article(42, "news", ArticleStatus::Published))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(ArticleId::new(1)).await.unwrap().title, "title 1");
    }

    #[tokio::test]
    async fn duplicate_ids_resolve_to_the_newest() {
        let store = InMemoryArticleStore::new();
        let mut first = article(7, "news", ArticleStatus::Draft);
        first.title = "older".into();
        let mut second = article(7, "news", ArticleStatus::Draft);
        second.title = "newer".into();
        store.create(first).await.unwrap();
        store.create(second).await.unwrap();

        assert_eq!(store.get(ArticleId::new(7)).await.unwrap().title, "newer");
        let all = store.latest("", 10, ArticleStatus::Unknown).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn latest_stops_at_count() {
        let store = InMemoryArticleStore::new();
        for id in 1..=5 {
            store
                .create(article(id, "news", ArticleStatus::Published))
                .await
                .unwrap();
        }
        let latest = store.latest("news", 2, ArticleStatus::Published).await.unwrap();
        assert_eq!(ids(&latest), vec![5, 4]);
    }

    #[tokio::test]
    async fn latest_with_zero_count_is_empty() {
        let store = InMemoryArticleStore::new();
        store
            .create(article(1, "news", ArticleStatus::Published))
            .await
            .unwrap();
        assert!(store.latest("", 0, ArticleStatus::Unknown).await.unwrap().is_empty());
    }
}
