// src/presentation/graphql/schema.rs
use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Result, Schema};

use super::{
    relay::{ARTICLE_KIND, decode_global_id, global_id},
    types::{ArticleInput, EventResponse, GraphArticle, GraphArticleStatus},
};
use crate::{
    application::{
        error::ApplicationError,
        queries::articles::{FetchArticleQuery, LatestArticlesQuery},
        services::ApplicationServices,
    },
    domain::article::{ArticleEvent, ArticleEventKind},
};

pub type PublishingSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(services: Arc<ApplicationServices>) -> PublishingSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Article with the given global id.
    async fn article(&self, ctx: &Context<'_>, id: ID) -> Result<Option<GraphArticle>> {
        let article_id = match decode_global_id(&id) {
            Some((kind, value)) if kind == ARTICLE_KIND => value,
            _ => return Err(ApplicationError::invalid_argument("invalid article id").into()),
        };

        let services = ctx.data::<Arc<ApplicationServices>>()?;
        let article = services
            .article_queries
            .fetch_article(FetchArticleQuery { id: article_id })
            .await?;
        Ok(Some(GraphArticle(article)))
    }

    /// Latest articles, newest first. Without a category every category
    /// matches.
    async fn articles(
        &self,
        ctx: &Context<'_>,
        category: Option<String>,
        #[graphql(default = 10)] count: i32,
        #[graphql(default_with = "GraphArticleStatus::Published")] status: GraphArticleStatus,
    ) -> Result<Vec<GraphArticle>> {
        let count = u32::try_from(count)
            .map_err(|_| ApplicationError::invalid_argument("count cannot be negative"))?;
        let query = LatestArticlesQuery {
            category: category.unwrap_or_default(),
            count,
            status: status.into(),
        };

        let services = ctx.data::<Arc<ApplicationServices>>()?;
        let articles = services.article_queries.latest_articles(query).await?;
        Ok(articles.into_iter().map(GraphArticle).collect())
    }
}

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Announces a new article to the event relay. The store is not written.
    async fn create_article(
        &self,
        ctx: &Context<'_>,
        article: ArticleInput,
    ) -> Result<EventResponse> {
        let id = global_id(ARTICLE_KIND, article.id);
        if let Err(err) = article.validate() {
            tracing::warn!(error = %err, "rejected article announcement");
            return Ok(EventResponse::failed(id, err.to_string()));
        }

        let services = ctx.data::<Arc<ApplicationServices>>()?;
        let event = ArticleEvent {
            kind: ArticleEventKind::Created,
            article: article.into(),
        };
        Ok(match services.event_relay.relay(event) {
            Ok(_) => EventResponse::accepted(id),
            Err(err) => EventResponse::failed(id, format!("failed to relay event: {err}")),
        })
    }
}
