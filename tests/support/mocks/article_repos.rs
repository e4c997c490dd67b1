// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use berita_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleWriteRepository,
    ModerationReason, NewArticle,
};
use berita_core::domain::errors::{DomainError, DomainResult};

use super::{Journal, new_journal};

/// In-memory article table implementing both repository ports. Writes are
/// appended to the shared journal; `set_unavailable(true)` simulates an outage
/// and `set_writes_failing(true)` one that only hits writes.
pub struct InMemoryArticleStore {
    articles: Mutex<BTreeMap<i64, Article>>,
    next_id: AtomicI64,
    unavailable: AtomicBool,
    writes_failing: AtomicBool,
    journal: Journal,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::with_journal(new_journal())
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            articles: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            unavailable: AtomicBool::new(false),
            writes_failing: AtomicBool::new(false),
            journal,
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn set_writes_failing(&self, failing: bool) {
        self.writes_failing.store(failing, Ordering::SeqCst);
    }

    /// Put a prepared article straight into the table.
    pub fn seed(&self, article: Article) {
        let id = i64::from(article.id);
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self.articles.lock().unwrap().insert(id, article);
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.articles.lock().unwrap().get(&id).cloned()
    }

    /// Simulate a concurrent writer touching the row.
    pub fn touch(&self, id: i64, updated_at: DateTime<Utc>) {
        if let Some(article) = self.articles.lock().unwrap().get_mut(&id) {
            article.updated_at = updated_at;
        }
    }

    pub fn journal(&self) -> Journal {
        self.journal.clone()
    }

    fn ensure_available(&self) -> DomainResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::persistence("store offline"))
        } else {
            Ok(())
        }
    }

    fn ensure_writable(&self) -> DomainResult<()> {
        self.ensure_available()?;
        if self.writes_failing.load(Ordering::SeqCst) {
            Err(DomainError::persistence("disk full"))
        } else {
            Ok(())
        }
    }

    fn record(&self, entry: String) {
        self.journal.lock().unwrap().push(entry);
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, new_article: NewArticle) -> DomainResult<Article> {
        self.ensure_writable()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let article = Article {
            id: ArticleId::new(id)?,
            status: new_article.status(),
            title: new_article.title,
            summary: new_article.summary,
            body: new_article.body,
            category: new_article.category,
            image_url: new_article.image_url,
            author_id: new_article.author_id,
            moderation_reason: ModerationReason::none(),
            created_at: new_article.created_at,
            updated_at: new_article.created_at,
        };
        self.articles.lock().unwrap().insert(id, article.clone());
        self.record(format!("insert:{id}"));
        Ok(article)
    }

    async fn update(
        &self,
        article: &Article,
        expected_updated_at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        self.ensure_writable()?;
        let id = i64::from(article.id);
        {
            let mut articles = self.articles.lock().unwrap();
            let stored = articles
                .get_mut(&id)
                .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
            if stored.updated_at != expected_updated_at {
                return Err(DomainError::Conflict(
                    "article was modified concurrently, reload and retry".into(),
                ));
            }
            *stored = article.clone();
        }
        self.record(format!("update:{id}"));
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.ensure_writable()?;
        let id = i64::from(id);
        self.articles
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        self.record(format!("delete:{id}"));
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.ensure_available()?;
        Ok(self.articles.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        self.ensure_available()?;
        let mut items: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|article| filter.matches(article))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(items)
    }
}
