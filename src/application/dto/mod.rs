// src/application/dto/mod.rs
pub mod articles;

pub use articles::{ArticleDto, ArticleListDto};
