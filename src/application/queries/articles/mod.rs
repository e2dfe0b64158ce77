// src/application/queries/articles/mod.rs
mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use list::{DEFAULT_LIMIT, ListArticlesQuery};
pub use service::ArticleQueryService;
