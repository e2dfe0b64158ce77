// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleListDto},
    queries::articles::{DEFAULT_LIMIT, GetArticleByIdQuery, ListArticlesQuery},
};
use crate::context::RequestContext;
use crate::domain::article::ArticleCreateUpdate;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use tracing::info;

const fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Deserialize)]
pub struct ArticleCreateUpdateRequest {
    pub title: String,
    pub body: String,
}

fn parse_error(ctx: &RequestContext, err: impl std::fmt::Display) -> HttpError {
    info!(parent: ctx.span(), error = %err, "request parse error");
    HttpError::bad_request()
}

/// Turns the raw body into validated input. Any failure is a plain 400 and
/// the service is never called.
fn bind_article_input(
    ctx: &RequestContext,
    payload: Result<Json<ArticleCreateUpdateRequest>, JsonRejection>,
) -> HttpResult<ArticleCreateUpdate> {
    let Json(payload) = payload.map_err(|rejection| parse_error(ctx, rejection))?;
    ArticleCreateUpdate::new(payload.title, payload.body).map_err(|err| parse_error(ctx, err))
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    info!(parent: ctx.span(), article_id = %id, "retrieving article");

    state
        .services
        .article_queries
        .get_article_by_id(&ctx, GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    params: Result<Query<ArticleListParams>, QueryRejection>,
) -> HttpResult<Json<ArticleListDto>> {
    let Query(params) = params.map_err(|rejection| parse_error(&ctx, rejection))?;

    info!(
        parent: ctx.span(),
        limit = params.limit,
        offset = params.offset,
        "retrieving all articles"
    );

    let articles = state
        .services
        .article_queries
        .list_articles(
            &ctx,
            ListArticlesQuery {
                limit: params.limit,
                offset: params.offset,
            },
        )
        .await
        .into_http()?;

    Ok(Json(ArticleListDto::from(articles)))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    payload: Result<Json<ArticleCreateUpdateRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let input = bind_article_input(&ctx, payload)?;
    info!(parent: ctx.span(), title = %input.title, "creating article");

    let created = state
        .services
        .article_commands
        .create_article(&ctx, CreateArticleCommand { input })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    payload: Result<Json<ArticleCreateUpdateRequest>, JsonRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let input = bind_article_input(&ctx, payload)?;
    info!(parent: ctx.span(), article_id = %id, title = %input.title, "updating article");

    state
        .services
        .article_commands
        .update_article(&ctx, UpdateArticleCommand { id, input })
        .await
        .into_http()
        .map(Json)
}
