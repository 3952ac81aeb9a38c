use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct FetchArticleQuery {
    pub id: u32,
}

impl ArticleQueryService {
    pub async fn fetch_article(&self, query: FetchArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id);
        let article = self
            .store
            .get(id)
            .await
            .map_err(|err| ApplicationError::internal("failed to get article", err))?;
        Ok(article.into())
    }
}
