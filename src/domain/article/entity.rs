// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, AuthorId};
use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

/// Caller-assigned lifecycle tag. `Unknown` is a query wildcard and is never
/// a valid state for a stored article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArticleStatus {
    #[default]
    Unknown,
    Draft,
    Published,
    Retracted,
}

impl ArticleStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Retracted => "RETRACTED",
        }
    }

    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UNKNOWN" | "" => Ok(Self::Unknown),
            "DRAFT" => Ok(Self::Draft),
            "PUBLISHED" => Ok(Self::Published),
            "RETRACTED" => Ok(Self::Retracted),
            other => Err(format!("unrecognised article status: {other}")),
        }
    }
}

/// A stored article. Fields are raw values; non-emptiness is enforced by the
/// services, not by the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    pub category: String,
    pub author_id: AuthorId,
    pub author_name: String,
    pub status: ArticleStatus,
    pub created: DateTime<Utc>,
}
