pub mod articles;
pub mod events;

pub use articles::{ArticleDto, ArticleStatusDto};
pub use events::{EventAckDto, EventArticleDto};
