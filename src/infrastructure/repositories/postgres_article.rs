// src/infrastructure/repositories/postgres_article.rs
use crate::context::RequestContext;
use crate::domain::article::{
    Article, ArticleBody, ArticleCreateUpdate, ArticleId, ArticleReadRepository, ArticleTitle,
    ArticleWriteRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info, warn};

const SELECT_ARTICLE: &str = "SELECT id::text AS id, title, body, created_at, updated_at, disabled_at
     FROM articles WHERE id = $1::uuid";

const SELECT_MANY_ARTICLES: &str = "SELECT id::text AS id, title, body, created_at, updated_at, disabled_at
     FROM articles ORDER BY created_at, id LIMIT $1 OFFSET $2";

const INSERT_ARTICLE: &str = "INSERT INTO articles (title, body, created_at, updated_at)
     VALUES ($1, $2, now(), now()) RETURNING id::text";

const UPDATE_ARTICLE: &str = "UPDATE articles SET title = $1, body = $2, updated_at = GREATEST(now(), updated_at)
     WHERE id = $3::uuid";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    disabled_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            disabled_at: row.disabled_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(
        &self,
        ctx: &RequestContext,
        input: &ArticleCreateUpdate,
    ) -> DomainResult<ArticleId> {
        let id = sqlx::query_scalar::<_, String>(INSERT_ARTICLE)
            .bind(input.title.as_str())
            .bind(input.body.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                error!(parent: ctx.span(), error = %err, "unable to create article");
                DomainError::ArticleCreate
            })?;

        let id = ArticleId::new(id).map_err(|err| {
            error!(parent: ctx.span(), error = %err, "storage returned an unusable article id");
            DomainError::ArticleCreate
        })?;

        info!(parent: ctx.span(), article_id = %id, "created article");
        Ok(id)
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: &ArticleId,
        input: &ArticleCreateUpdate,
    ) -> DomainResult<()> {
        let result = sqlx::query(UPDATE_ARTICLE)
            .bind(input.title.as_str())
            .bind(input.body.as_str())
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!(parent: ctx.span(), article_id = %id, error = %err, "unable to update article");
                DomainError::ArticleUpdate
            })?;

        if result.rows_affected() == 0 {
            info!(parent: ctx.span(), article_id = %id, "update matched no article");
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, ctx: &RequestContext, id: &ArticleId) -> DomainResult<Article> {
        // absent rows and driver failures both surface as not-found
        let row = sqlx::query_as::<_, ArticleRow>(SELECT_ARTICLE)
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                info!(parent: ctx.span(), article_id = %id, error = %err, "select article error");
                DomainError::ArticleNotFound
            })?;

        Article::try_from(row).map_err(|err| {
            info!(parent: ctx.span(), article_id = %id, error = %err, "select article error");
            DomainError::ArticleNotFound
        })
    }

    async fn list(
        &self,
        ctx: &RequestContext,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(SELECT_MANY_ARTICLES)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                warn!(parent: ctx.span(), error = %err, "unable to query db");
                DomainError::ArticleQuery
            })?;

        rows.into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                error!(parent: ctx.span(), error = %err, "unable to scan db rows");
                DomainError::ArticleQuery
            })
    }
}
