// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::article::ArticleStore;

pub struct ArticleCommandService {
    pub(super) store: Arc<dyn ArticleStore>,
}

impl ArticleCommandService {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }
}
