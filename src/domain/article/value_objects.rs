use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub u32);

impl ArticleId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl From<u32> for ArticleId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<ArticleId> for u32 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub u32);

impl AuthorId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl From<u32> for AuthorId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<AuthorId> for u32 {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
