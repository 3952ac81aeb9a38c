// tests/support/mocks.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use publishing_core::domain::article::{Article, ArticleId, ArticleStatus, ArticleStore};
use publishing_core::domain::errors::{DomainError, DomainResult};
use publishing_core::infrastructure::repositories::InMemoryArticleStore;

/// Store double that forwards to a real in-memory store and counts calls, so
/// tests can assert that rejected requests never reached the store.
#[derive(Default)]
pub struct CountingStore {
    inner: InMemoryArticleStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ArticleStore for CountingStore {
    async fn get(&self, id: ArticleId) -> DomainResult<Article> {
        self.hit();
        self.inner.get(id).await
    }

    async fn create(&self, article: Article) -> DomainResult<Article> {
        self.hit();
        self.inner.create(article).await
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        self.hit();
        self.inner.update(article).await
    }

    async fn latest(
        &self,
        category: &str,
        count: u32,
        status: ArticleStatus,
    ) -> DomainResult<Vec<Article>> {
        self.hit();
        self.inner.latest(category, count, status).await
    }
}

/// Store whose every call fails as a broken backend would.
pub struct BrokenStore;

fn broken() -> DomainError {
    DomainError::Persistence("store unavailable".into())
}

#[async_trait]
impl ArticleStore for BrokenStore {
    async fn get(&self, _id: ArticleId) -> DomainResult<Article> {
        Err(broken())
    }

    async fn create(&self, _article: Article) -> DomainResult<Article> {
        Err(broken())
    }

    async fn update(&self, _article: Article) -> DomainResult<Article> {
        Err(broken())
    }

    async fn latest(
        &self,
        _category: &str,
        _count: u32,
        _status: ArticleStatus,
    ) -> DomainResult<Vec<Article>> {
        Err(broken())
    }
}
