pub mod entity;
pub mod events;
pub mod repository;
pub mod specifications;
pub mod validation;
pub mod value_objects;

pub use entity::{Article, ArticleStatus};
pub use events::{ArticleEvent, ArticleEventKind, EventArticle};
pub use repository::ArticleStore;
pub use specifications::LatestArticlesSpec;
pub use validation::{ArticleValidationError, validate_article};
pub use value_objects::{ArticleId, AuthorId};
