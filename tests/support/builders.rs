// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use berita_core::domain::article::{
    Article, ArticleBody, ArticleCategory, ArticleId, ArticleStatus, ArticleSummary, ArticleTitle,
    ModerationReason,
};
use berita_core::domain::user::UserId;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    author_id: i64,
    status: ArticleStatus,
    reason: String,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Berita Uji".into(),
            author_id: 2,
            status: ArticleStatus::Pending,
            reason: String::new(),
            created_at: super::time::fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn published(mut self) -> Self {
        self.status = ArticleStatus::Disetujui;
        self
    }

    pub fn rejected(mut self, reason: impl Into<String>) -> Self {
        self.status = ArticleStatus::Ditolak;
        self.reason = reason.into();
        self
    }

    /// Minutes after the fixed test clock.
    pub fn created_minutes_later(mut self, minutes: i64) -> Self {
        self.created_at = super::time::fixed_now() + Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            summary: ArticleSummary::new("Ringkasan berita").unwrap(),
            body: ArticleBody::new("Isi lengkap berita").unwrap(),
            category: ArticleCategory::default(),
            image_url: None,
            author_id: UserId::new(self.author_id).unwrap(),
            status: self.status,
            moderation_reason: ModerationReason::new(self.reason),
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
