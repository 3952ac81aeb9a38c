// src/application/error.rs
use crate::domain::{article::ArticleValidationError, errors::DomainError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("invalid input: {0}")]
    InvalidArgument(String),

    /// Any store failure surfaced through a service.
    ///
    /// A missing record is reported here too: callers cannot tell "no such
    /// article" from a store fault without inspecting the source. Use
    /// [`ApplicationError::is_not_found`] when the distinction matters.
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: DomainError,
    },
}

impl ApplicationError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn internal(context: &'static str, source: DomainError) -> Self {
        Self::Internal { context, source }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    /// True when the underlying store reported that no article matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Internal { source, .. } if source.is_not_found())
    }
}

impl From<ArticleValidationError> for ApplicationError {
    fn from(err: ArticleValidationError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_become_invalid_argument() {
        let err = ApplicationError::from(ArticleValidationError::MissingTitle);
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid input: article title is required");
    }

    #[test]
    fn internal_keeps_the_store_cause() {
        let err = ApplicationError::internal(
            "failed to get article",
            DomainError::NotFound("article not found".into()),
        );
        assert!(err.is_internal());
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "failed to get article: not found: article not found"
        );
    }

    #[test]
    fn persistence_failures_are_not_reported_as_not_found() {
        let err = ApplicationError::internal(
            "failed to create article",
            DomainError::Persistence("lock poisoned".into()),
        );
        assert!(err.is_internal());
        assert!(!err.is_not_found());
    }
}
