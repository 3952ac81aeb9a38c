// src/presentation/http/renderers/mod.rs
mod links;
pub mod rss;
pub mod sitemap;

pub use links::article_url;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write feed: {0}")]
    Feed(#[from] ::rss::Error),
    #[error("failed to write sitemap: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write sitemap: {0}")]
    Xml(#[from] quick_xml::Error),
}
