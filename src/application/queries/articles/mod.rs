mod get_by_id;
mod latest;
mod service;

pub use get_by_id::FetchArticleQuery;
pub use latest::{LatestArticlesQuery, MAX_LATEST_COUNT};
pub use service::ArticleQueryService;
