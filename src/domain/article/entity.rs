// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker. Nothing sets it yet.
    pub disabled_at: Option<DateTime<Utc>>,
}

/// Validated input shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCreateUpdate {
    pub title: ArticleTitle,
    pub body: ArticleBody,
}

impl ArticleCreateUpdate {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            title: ArticleTitle::new(title)?,
            body: ArticleBody::new(body)?,
        })
    }
}
