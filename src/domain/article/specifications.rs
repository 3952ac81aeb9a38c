use crate::domain::article::entity::{Article, ArticleStatus};

/// Selection rule for the latest-articles query.
#[derive(Debug, Clone, Copy)]
pub struct LatestArticlesSpec<'a> {
    category: &'a str,
    status: ArticleStatus,
}

impl<'a> LatestArticlesSpec<'a> {
    pub fn new(category: &'a str, status: ArticleStatus) -> Self {
        Self { category, status }
    }

    pub fn is_satisfied_by(&self, article: &Article) -> bool {
        self.matches_category(article) && self.matches_status(article)
    }

    fn matches_category(&self, article: &Article) -> bool {
        self.category.is_empty() || article.category == self.category
    }

    fn matches_status(&self, article: &Article) -> bool {
        self.status.is_unknown() || article.status == self.status
    }
}
