// tests/support/mocks/article_repos.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use article_api::context::RequestContext;
use article_api::domain::article::{
    Article, ArticleCreateUpdate, ArticleId, ArticleReadRepository, ArticleWriteRepository,
};
use article_api::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// In-memory store with the same observable behaviour as the PostgreSQL one.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
}

impl InMemoryArticleRepo {
    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(
        &self,
        _ctx: &RequestContext,
        input: &ArticleCreateUpdate,
    ) -> DomainResult<ArticleId> {
        let id = ArticleId::new(Uuid::new_v4().to_string())?;
        let now = Utc::now();
        self.articles.lock().unwrap().push(Article {
            id: id.clone(),
            title: input.title.clone(),
            body: input.body.clone(),
            created_at: now,
            updated_at: now,
            disabled_at: None,
        });
        Ok(id)
    }

    async fn update(
        &self,
        _ctx: &RequestContext,
        id: &ArticleId,
        input: &ArticleCreateUpdate,
    ) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        if let Some(article) = articles.iter_mut().find(|a| &a.id == id) {
            article.title = input.title.clone();
            article.body = input.body.clone();
            article.updated_at = Utc::now().max(article.updated_at);
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, _ctx: &RequestContext, id: &ArticleId) -> DomainResult<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or(DomainError::ArticleNotFound)
    }

    async fn list(
        &self,
        _ctx: &RequestContext,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/* -------------------------------- ScriptedArticleRepo -------------------------------- */

/// Returns a fixed result per operation and counts every call.
pub struct ScriptedArticleRepo {
    pub get: DomainResult<Article>,
    pub list: DomainResult<Vec<Article>>,
    pub insert: DomainResult<ArticleId>,
    pub update: DomainResult<()>,
    pub calls: AtomicUsize,
    pub last_page: Mutex<Option<(u32, u32)>>,
}

impl Default for ScriptedArticleRepo {
    fn default() -> Self {
        Self {
            get: Err(DomainError::ArticleNotFound),
            list: Ok(Vec::new()),
            insert: Err(DomainError::ArticleCreate),
            update: Ok(()),
            calls: AtomicUsize::new(0),
            last_page: Mutex::new(None),
        }
    }
}

impl ScriptedArticleRepo {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_page(&self) -> Option<(u32, u32)> {
        *self.last_page.lock().unwrap()
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ArticleWriteRepository for ScriptedArticleRepo {
    async fn insert(
        &self,
        _ctx: &RequestContext,
        _input: &ArticleCreateUpdate,
    ) -> DomainResult<ArticleId> {
        self.record();
        self.insert.clone()
    }

    async fn update(
        &self,
        _ctx: &RequestContext,
        _id: &ArticleId,
        _input: &ArticleCreateUpdate,
    ) -> DomainResult<()> {
        self.record();
        self.update.clone()
    }
}

#[async_trait]
impl ArticleReadRepository for ScriptedArticleRepo {
    async fn find_by_id(&self, _ctx: &RequestContext, _id: &ArticleId) -> DomainResult<Article> {
        self.record();
        self.get.clone()
    }

    async fn list(
        &self,
        _ctx: &RequestContext,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>> {
        self.record();
        *self.last_page.lock().unwrap() = Some((limit, offset));
        self.list.clone()
    }
}

/* -------------------------------- PanickingArticleRepo -------------------------------- */

/// Every operation panics.
pub struct PanickingArticleRepo;

#[async_trait]
impl ArticleWriteRepository for PanickingArticleRepo {
    async fn insert(
        &self,
        _ctx: &RequestContext,
        _input: &ArticleCreateUpdate,
    ) -> DomainResult<ArticleId> {
        panic!("insert exploded")
    }

    async fn update(
        &self,
        _ctx: &RequestContext,
        _id: &ArticleId,
        _input: &ArticleCreateUpdate,
    ) -> DomainResult<()> {
        panic!("update exploded")
    }
}

#[async_trait]
impl ArticleReadRepository for PanickingArticleRepo {
    async fn find_by_id(&self, _ctx: &RequestContext, _id: &ArticleId) -> DomainResult<Article> {
        panic!("find_by_id exploded")
    }

    async fn list(
        &self,
        _ctx: &RequestContext,
        _limit: u32,
        _offset: u32,
    ) -> DomainResult<Vec<Article>> {
        panic!("list exploded")
    }
}
