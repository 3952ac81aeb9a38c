// src/infrastructure/seed.rs
use crate::application::{
    ApplicationResult, commands::articles::CreateArticleCommand, ports::time::Clock,
    services::ApplicationServices,
};
use crate::domain::article::{Article, ArticleId, ArticleStatus, AuthorId};

const DEMO_ARTICLES: [(u32, &str, &str, ArticleStatus); 6] = [
    (1, "business", "Pavel", ArticleStatus::Published),
    (2, "politics", "Someone", ArticleStatus::Published),
    (3, "business", "Alicia G.", ArticleStatus::Published),
    (4, "lifestyle", "Peter Pan", ArticleStatus::Draft),
    (5, "lifestyle", "Peter H.", ArticleStatus::Published),
    (6, "environment", "John Smith", ArticleStatus::Retracted),
];

/// Sample content shown by a freshly started server, oldest first.
pub fn demo_articles(clock: &dyn Clock) -> Vec<Article> {
    DEMO_ARTICLES
        .iter()
        .map(|&(id, category, author_name, status)| Article {
            id: ArticleId::new(id),
            title: format!("My article title {id}"),
            body: format!("some article text here {id}"),
            category: category.into(),
            author_id: AuthorId::new(10),
            author_name: author_name.into(),
            status,
            created: clock.now(),
        })
        .collect()
}

/// Inserts the demo articles through the command service so they pass the
/// same validation as client writes.
pub async fn seed_demo_content(services: &ApplicationServices) -> ApplicationResult<usize> {
    let articles = demo_articles(services.clock().as_ref());
    let total = articles.len();
    for article in articles {
        services
            .article_commands
            .create_article(CreateArticleCommand::new(article))
            .await?;
    }
    tracing::info!(count = total, "seeded demo content");
    Ok(total)
}
