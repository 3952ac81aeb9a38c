use crate::application::{dto::ArticleDto, ports::util::SlugGenerator};

/// Public URL of an article: `{base}/{category}/{title}-{id}`, with category
/// and title reduced to slugs.
pub fn article_url(base_url: &str, slugger: &dyn SlugGenerator, article: &ArticleDto) -> String {
    format!(
        "{}/{}/{}-{}",
        base_url.trim_end_matches('/'),
        slugger.slugify(&article.category),
        slugger.slugify(&article.title),
        article.id
    )
}
