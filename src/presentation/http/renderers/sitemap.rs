// src/presentation/http/renderers/sitemap.rs
use crate::application::{dto::ArticleDto, ports::util::SlugGenerator};
use crate::config::SiteConfig;
use chrono::SecondsFormat;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{RenderError, article_url};

pub const SITEMAP_CONTENT_TYPE: &str = "application/xml";

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const NEWS_NS: &str = "http://www.google.com/schemas/sitemap-news/0.9";

type XmlWriter = Writer<Vec<u8>>;

/// Renders a `urlset` with the site root, the about page and one news entry
/// per article, in the order given.
pub fn render_sitemap(
    site: &SiteConfig,
    slugger: &dyn SlugGenerator,
    articles: &[ArticleDto],
) -> Result<Vec<u8>, RenderError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    urlset.push_attribute(("xmlns:news", NEWS_NS));
    writer.write_event(Event::Start(urlset))?;

    write_page(&mut writer, &format!("{}/", site.base_url), Some("daily"))?;
    write_page(&mut writer, &format!("{}/about", site.base_url), None)?;
    for article in articles {
        write_news_entry(&mut writer, site, slugger, article)?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(writer.into_inner())
}

fn write_page(
    writer: &mut XmlWriter,
    loc: &str,
    changefreq: Option<&str>,
) -> Result<(), RenderError> {
    writer.write_event(Event::Start(BytesStart::new("url")))?;
    write_text(writer, "loc", loc)?;
    if let Some(freq) = changefreq {
        write_text(writer, "changefreq", freq)?;
    }
    writer.write_event(Event::End(BytesEnd::new("url")))?;
    Ok(())
}

fn write_news_entry(
    writer: &mut XmlWriter,
    site: &SiteConfig,
    slugger: &dyn SlugGenerator,
    article: &ArticleDto,
) -> Result<(), RenderError> {
    writer.write_event(Event::Start(BytesStart::new("url")))?;
    write_text(writer, "loc", &article_url(&site.base_url, slugger, article))?;

    writer.write_event(Event::Start(BytesStart::new("news:news")))?;
    writer.write_event(Event::Start(BytesStart::new("news:publication")))?;
    write_text(writer, "news:name", &site.title)?;
    write_text(writer, "news:language", "en")?;
    writer.write_event(Event::End(BytesEnd::new("news:publication")))?;
    write_text(writer, "news:access", "Subscription")?;
    write_text(writer, "news:genres", &article.category)?;
    write_text(
        writer,
        "news:publication_date",
        &article.created.to_rfc3339_opts(SecondsFormat::Secs, true),
    )?;
    write_text(writer, "news:title", &article.title)?;
    write_text(writer, "news:keywords", &keywords(&article.title))?;
    writer.write_event(Event::End(BytesEnd::new("news:news")))?;

    writer.write_event(Event::End(BytesEnd::new("url")))?;
    Ok(())
}

fn write_text(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), RenderError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn keywords(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(", ")
}
