// tests/support/mocks/mod.rs
pub mod article_repos;

pub use article_repos::{InMemoryArticleRepo, PanickingArticleRepo, ScriptedArticleRepo};
