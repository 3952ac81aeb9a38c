// src/presentation/graphql/mod.rs
//! GraphQL front-end over the query services and the event relay.
//!
//! Reads go through `ArticleQueryService`. `createArticle` never writes to
//! the store: it validates the input and hands a `created` notification to
//! the event relay.
pub mod relay;
pub mod schema;
pub mod types;

pub use schema::{PublishingSchema, build_schema};
