// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::dto::ArticleDto, context::RequestContext, domain::errors::DomainResult,
};

pub const DEFAULT_LIMIT: u32 = 25;

pub struct ListArticlesQuery {
    pub limit: u32,
    pub offset: u32,
}

impl Default for ListArticlesQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        ctx: &RequestContext,
        query: ListArticlesQuery,
    ) -> DomainResult<Vec<ArticleDto>> {
        let articles = self
            .read_repo
            .list(ctx, query.limit, query.offset)
            .await?;
        Ok(articles.into_iter().map(ArticleDto::from).collect())
    }
}
