// src/application/queries/articles/get_by_id.rs
use super::ArticleQueryService;
use crate::{
    application::dto::ArticleDto,
    context::RequestContext,
    domain::{
        article::ArticleId,
        errors::{DomainError, DomainResult},
    },
};
use tracing::info;

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        ctx: &RequestContext,
        query: GetArticleByIdQuery,
    ) -> DomainResult<ArticleDto> {
        // an id that can never be stored is simply not there
        let id = ArticleId::new(query.id).map_err(|err| {
            info!(parent: ctx.span(), error = %err, "select article error");
            DomainError::ArticleNotFound
        })?;
        let article = self.read_repo.find_by_id(ctx, &id).await?;
        Ok(article.into())
    }
}
