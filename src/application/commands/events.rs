// src/application/commands/events.rs
use crate::{
    application::{dto::EventAckDto, error::ApplicationResult},
    domain::article::ArticleEvent,
};

/// Receives article notifications from front-ends, records them in the log
/// and acknowledges them. It holds no store handle and mutates nothing.
#[derive(Debug, Default, Clone)]
pub struct EventRelayService;

impl EventRelayService {
    pub fn new() -> Self {
        Self
    }

    pub fn relay(&self, event: ArticleEvent) -> ApplicationResult<EventAckDto> {
        let ArticleEvent { kind, article } = event;
        tracing::info!(
            kind = %kind,
            article_id = %article.id,
            title = %article.title,
            category = %article.category,
            author_id = %article.author_id,
            author_name = %article.author_name,
            "received article event"
        );
        Ok(EventAckDto::accepted(kind, article.id))
    }
}
