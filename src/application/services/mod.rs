// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, events::EventRelayService},
        ports::{time::Clock, util::SlugGenerator},
        queries::articles::ArticleQueryService,
    },
    domain::article::ArticleStore,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub event_relay: Arc<EventRelayService>,
    clock: Arc<dyn Clock>,
    slugger: Arc<dyn SlugGenerator>,
}

impl ApplicationServices {
    pub fn new(
        store: Arc<dyn ArticleStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(&store)));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&store)));
        let event_relay = Arc::new(EventRelayService::new());

        Self {
            article_commands,
            article_queries,
            event_relay,
            clock,
            slugger,
        }
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    pub fn slugger(&self) -> Arc<dyn SlugGenerator> {
        Arc::clone(&self.slugger)
    }
}
