// src/config.rs
use std::env;
use thiserror::Error;

use crate::application::queries::articles::MAX_LATEST_COUNT;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    seed_demo_content: bool,
    site: SiteConfig,
}

/// Settings the feed and sitemap renderers need to build absolute links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_url: String,
    pub title: String,
    pub description: String,
    pub email_domain: String,
    pub feed_item_count: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://example.com".into(),
            title: "Company Name Here".into(),
            description: "When news breaks, we fix it!".into(),
            email_domain: "example.com".into(),
            feed_item_count: default_feed_item_count(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

const fn default_feed_item_count() -> u32 {
    20
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset. A `.env` file is loaded by `main`
    /// beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| parse_origins(&s))
            .unwrap_or_else(default_allowed_origins);

        let seed_demo_content = lookup("SEED_DEMO_CONTENT")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        let defaults = SiteConfig::default();
        let base_url = lookup("SITE_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        if base_url.is_empty() {
            return Err(ConfigError::Invalid("SITE_BASE_URL must not be empty".into()));
        }

        let feed_item_count = match lookup("FEED_ITEM_COUNT") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                ConfigError::Invalid(format!("FEED_ITEM_COUNT must be a number, got {raw:?}"))
            })?,
            None => default_feed_item_count(),
        };
        if feed_item_count == 0 || feed_item_count > MAX_LATEST_COUNT {
            return Err(ConfigError::Invalid(format!(
                "FEED_ITEM_COUNT must be between 1 and {MAX_LATEST_COUNT}"
            )));
        }

        let site = SiteConfig {
            base_url,
            title: lookup("SITE_TITLE").unwrap_or(defaults.title),
            description: lookup("SITE_DESCRIPTION").unwrap_or(defaults.description),
            email_domain: lookup("SITE_EMAIL_DOMAIN").unwrap_or(defaults.email_domain),
            feed_item_count,
        };

        Ok(Self {
            listen_addr,
            allowed_origins,
            seed_demo_content,
            site,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn seed_demo_content(&self) -> bool {
        self.seed_demo_content
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.allowed_origins(), ["http://localhost:3000".to_string()]);
        assert!(config.seed_demo_content());
        assert_eq!(config.site(), &SiteConfig::default());
    }

    #[test]
    fn overrides_are_read_and_normalised() {
        let config = config_from(&[
            ("LISTEN_ADDR", "0.0.0.0:9000"),
            ("ALLOWED_ORIGINS", "https://a.test, https://b.test,"),
            ("SEED_DEMO_CONTENT", "false"),
            ("SITE_BASE_URL", "https://news.test/"),
            ("FEED_ITEM_COUNT", "50"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:9000");
        assert_eq!(config.allowed_origins().len(), 2);
        assert!(!config.seed_demo_content());
        assert_eq!(config.site().base_url, "https://news.test");
        assert_eq!(config.site().feed_item_count, 50);
    }

    #[test]
    fn feed_item_count_must_be_a_valid_latest_count() {
        assert!(config_from(&[("FEED_ITEM_COUNT", "0")]).is_err());
        assert!(config_from(&[("FEED_ITEM_COUNT", "51")]).is_err());
        assert!(config_from(&[("FEED_ITEM_COUNT", "many")]).is_err());
    }
}
