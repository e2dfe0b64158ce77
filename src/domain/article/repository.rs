// src/domain/article/repository.rs
use crate::context::RequestContext;
use crate::domain::article::entity::{Article, ArticleCreateUpdate};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persists a new article and returns the identifier storage assigned.
    async fn insert(&self, ctx: &RequestContext, input: &ArticleCreateUpdate)
    -> DomainResult<ArticleId>;

    /// Overwrites title and body. Does not report whether a row matched.
    async fn update(
        &self,
        ctx: &RequestContext,
        id: &ArticleId,
        input: &ArticleCreateUpdate,
    ) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, ctx: &RequestContext, id: &ArticleId) -> DomainResult<Article>;
    async fn list(&self, ctx: &RequestContext, limit: u32, offset: u32)
    -> DomainResult<Vec<Article>>;
}
