use crate::domain::article::value_objects::{ArticleId, AuthorId};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleEventKind {
    Created,
    Updated,
    Retracted,
    DraftCreated,
    DraftUpdated,
}

impl ArticleEventKind {
    pub const ALL: [Self; 5] = [
        Self::Created,
        Self::Updated,
        Self::Retracted,
        Self::DraftCreated,
        Self::DraftUpdated,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Retracted => "retracted",
            Self::DraftCreated => "draft-created",
            Self::DraftUpdated => "draft-updated",
        }
    }
}

impl fmt::Display for ArticleEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown article event kind: {s}"))
    }
}

/// Article snapshot carried by a notification. Notifications have no status
/// or creation time; the kind conveys the transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventArticle {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    pub category: String,
    pub author_id: AuthorId,
    pub author_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleEvent {
    pub kind: ArticleEventKind,
    pub article: EventArticle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_from_their_path_names() {
        for kind in ArticleEventKind::ALL {
            assert_eq!(kind.as_str().parse::<ArticleEventKind>().unwrap(), kind);
        }
        assert!("deleted".parse::<ArticleEventKind>().is_err());
    }
}
