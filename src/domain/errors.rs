// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure categories shared by the repository and service layers.
///
/// Repositories translate every storage failure into one of the article
/// variants; raw driver errors are logged where they happen and never
/// travel upward.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("requested article could not be found")]
    ArticleNotFound,
    #[error("requested articles could not be retrieved base on the given criteria")]
    ArticleQuery,
    #[error("article could not be created")]
    ArticleCreate,
    #[error("article could not be updated")]
    ArticleUpdate,
    #[error("validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
