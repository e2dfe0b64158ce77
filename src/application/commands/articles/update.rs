// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::dto::ArticleDto,
    context::RequestContext,
    domain::{
        article::{ArticleCreateUpdate, ArticleId},
        errors::{DomainError, DomainResult},
    },
};
use tracing::error;

pub struct UpdateArticleCommand {
    pub id: String,
    pub input: ArticleCreateUpdate,
}

impl ArticleCommandService {
    /// Same write-then-read contract as [`Self::create_article`].
    pub async fn update_article(
        &self,
        ctx: &RequestContext,
        command: UpdateArticleCommand,
    ) -> DomainResult<ArticleDto> {
        let id = ArticleId::new(command.id).map_err(|err| {
            error!(parent: ctx.span(), error = %err, "unable to update article");
            DomainError::ArticleUpdate
        })?;
        self.write_repo.update(ctx, &id, &command.input).await?;
        let updated = self.read_repo.find_by_id(ctx, &id).await?;
        Ok(updated.into())
    }
}
