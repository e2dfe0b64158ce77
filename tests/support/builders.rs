// tests/support/builders.rs
use chrono::{DateTime, Utc};

use article_api::domain::article::*;

pub struct ArticleBuilder {
    id: String,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: "6f1c2a7e-3b4d-4e5f-8a9b-0c1d2e3f4a5b".into(),
            title: "Test Article".into(),
            body: "Test body".into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            created_at: self.created_at,
            updated_at: self.created_at,
            disabled_at: None,
        }
    }
}
