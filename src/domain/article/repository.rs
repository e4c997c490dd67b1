use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::status::ArticleStatus;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Persist every mutable column of `article` in a single statement, provided
    /// the stored row still carries `expected_updated_at`. A stale row yields
    /// `DomainError::Conflict`; a missing row yields `DomainError::NotFound`.
    async fn update(
        &self,
        article: &Article,
        expected_updated_at: DateTime<Utc>,
    ) -> DomainResult<Article>;

    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Matching articles, newest first.
    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub author_id: Option<UserId>,
    pub title_query: Option<String>,
}

impl ArticleFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn published() -> Self {
        Self {
            status: Some(ArticleStatus::Disetujui),
            ..Self::default()
        }
    }

    pub fn by_author(author_id: UserId) -> Self {
        Self {
            author_id: Some(author_id),
            ..Self::default()
        }
    }

    /// Blank queries are dropped.
    pub fn with_title_query(mut self, query: Option<&str>) -> Self {
        self.title_query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);
        self
    }

    /// In-process evaluation with the same semantics as the SQL filter.
    pub fn matches(&self, article: &Article) -> bool {
        if self.status.is_some_and(|status| status != article.status) {
            return false;
        }
        if self.author_id.is_some_and(|author| author != article.author_id) {
            return false;
        }
        match &self.title_query {
            Some(query) => article
                .title
                .as_str()
                .to_lowercase()
                .contains(&query.to_lowercase()),
            None => true,
        }
    }
}
