// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};

use publishing_core::application::dto::ArticleDto;
use publishing_core::domain::article::{Article, ArticleId, ArticleStatus, AuthorId};

pub struct ArticleBuilder {
    id: u32,
    title: String,
    body: String,
    category: String,
    author_id: u32,
    author_name: String,
    status: ArticleStatus,
    created: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            title: format!("My article title {id}"),
            body: format!("some article text here {id}"),
            category: "business".into(),
            author_id: 10,
            author_name: "Pavel".into(),
            status: ArticleStatus::Published,
            created: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = name.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn draft(self) -> Self {
        self.status(ArticleStatus::Draft)
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id),
            title: self.title,
            body: self.body,
            category: self.category,
            author_id: AuthorId::new(self.author_id),
            author_name: self.author_name,
            status: self.status,
            created: self.created,
        }
    }

    pub fn build_dto(self) -> ArticleDto {
        self.build().into()
    }
}
