// src/application/queries/articles/latest.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleStatus,
};

pub const MAX_LATEST_COUNT: u32 = 50;

pub struct LatestArticlesQuery {
    /// Empty matches every category.
    pub category: String,
    pub count: u32,
    /// `Unknown` matches every status.
    pub status: ArticleStatus,
}

impl LatestArticlesQuery {
    pub fn published(category: impl Into<String>, count: u32) -> Self {
        Self {
            category: category.into(),
            count,
            status: ArticleStatus::Published,
        }
    }
}

impl ArticleQueryService {
    pub async fn latest_articles(
        &self,
        query: LatestArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        Self::check_count(query.count)?;

        let articles = self
            .store
            .latest(&query.category, query.count, query.status)
            .await
            .map_err(|err| ApplicationError::internal("failed to get latest articles", err))?;
        tracing::debug!(
            category = %query.category,
            status = %query.status,
            requested = query.count,
            returned = articles.len(),
            "latest articles query"
        );
        Ok(articles.into_iter().map(Into::into).collect())
    }

    fn check_count(count: u32) -> ApplicationResult<()> {
        if count == 0 {
            return Err(ApplicationError::invalid_argument("count cannot be 0"));
        }
        if count > MAX_LATEST_COUNT {
            return Err(ApplicationError::invalid_argument(format!(
                "count cannot be greater than {MAX_LATEST_COUNT}"
            )));
        }
        Ok(())
    }
}
