// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::dto::ArticleDto,
    context::RequestContext,
    domain::{article::ArticleCreateUpdate, errors::DomainResult},
};

pub struct CreateArticleCommand {
    pub input: ArticleCreateUpdate,
}

impl ArticleCommandService {
    /// Inserts the article, then reads it back.
    ///
    /// The two steps are not atomic. If the read-back fails the caller sees
    /// that error even though the row was written.
    pub async fn create_article(
        &self,
        ctx: &RequestContext,
        command: CreateArticleCommand,
    ) -> DomainResult<ArticleDto> {
        let id = self.write_repo.insert(ctx, &command.input).await?;
        let created = self.read_repo.find_by_id(ctx, &id).await?;
        Ok(created.into())
    }
}
