// src/presentation/http/renderers/rss.rs
use crate::application::{dto::ArticleDto, ports::util::SlugGenerator};
use crate::config::SiteConfig;
use chrono::{DateTime, Utc};
use rss::{Channel, Guid, Item};

use super::{RenderError, article_url};

pub const RSS_CONTENT_TYPE: &str = "application/rss+xml";

pub fn build_channel(
    site: &SiteConfig,
    slugger: &dyn SlugGenerator,
    built_at: DateTime<Utc>,
    articles: &[ArticleDto],
) -> Channel {
    let mut channel = Channel::default();
    channel.set_title(site.title.clone());
    channel.set_link(site.base_url.clone());
    channel.set_description(site.description.clone());
    channel.set_managing_editor(format!("contact@{} ({})", site.email_domain, site.title));
    channel.set_last_build_date(built_at.to_rfc2822());
    channel.set_items(
        articles
            .iter()
            .map(|article| build_item(site, slugger, article))
            .collect::<Vec<_>>(),
    );
    channel
}

fn build_item(site: &SiteConfig, slugger: &dyn SlugGenerator, article: &ArticleDto) -> Item {
    let link = article_url(&site.base_url, slugger, article);

    let mut guid = Guid::default();
    guid.set_value(link.clone());
    guid.set_permalink(true);

    let mut item = Item::default();
    item.set_title(article.title.clone());
    item.set_link(link);
    item.set_description(article.body.clone());
    item.set_author(format!(
        "{}@{} ({})",
        slugger.slugify(&article.author_name),
        site.email_domain,
        article.author_name
    ));
    item.set_pub_date(article.created.to_rfc2822());
    item.set_guid(guid);
    item
}

pub fn render_feed(
    site: &SiteConfig,
    slugger: &dyn SlugGenerator,
    built_at: DateTime<Utc>,
    articles: &[ArticleDto],
) -> Result<Vec<u8>, RenderError> {
    let channel = build_channel(site, slugger, built_at, articles);
    Ok(channel.write_to(Vec::new())?)
}
