// src/domain/article/entity.rs
use crate::domain::article::events::ArticleSnapshot;
use crate::domain::article::status::{ArticleStatus, ModerationDecision};
use crate::domain::article::value_objects::{
    ArticleBody, ArticleCategory, ArticleId, ArticleSummary, ArticleTitle, ImageUrl,
    ModerationReason,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub summary: ArticleSummary,
    pub body: ArticleBody,
    pub category: ArticleCategory,
    pub image_url: Option<ImageUrl>,
    pub author_id: UserId,
    pub status: ArticleStatus,
    pub moderation_reason: ModerationReason,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Status movement produced by a mutation of an [`Article`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub from: ArticleStatus,
    pub to: ArticleStatus,
}

impl StatusChange {
    /// The article was visible to the public before and is not anymore.
    pub fn retracts(&self) -> bool {
        self.from.is_published() && !self.to.is_published()
    }

    /// The article just became visible to the public.
    pub fn publishes(&self) -> bool {
        !self.from.is_published() && self.to.is_published()
    }
}

/// Partial edit of an article's content. `image_url: Some(None)` removes the image.
#[derive(Debug, Clone, Default)]
pub struct ArticleChanges {
    pub title: Option<ArticleTitle>,
    pub summary: Option<ArticleSummary>,
    pub body: Option<ArticleBody>,
    pub category: Option<ArticleCategory>,
    pub image_url: Option<Option<ImageUrl>>,
}

impl ArticleChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.summary.is_none()
            && self.body.is_none()
            && self.category.is_none()
            && self.image_url.is_none()
    }
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Apply an edit. A published article goes back to review.
    pub fn revise(&mut self, changes: ArticleChanges, now: DateTime<Utc>) -> StatusChange {
        let ArticleChanges {
            title,
            summary,
            body,
            category,
            image_url,
        } = changes;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(summary) = summary {
            self.summary = summary;
        }
        if let Some(body) = body {
            self.body = body;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }

        let from = self.status;
        if from.is_published() {
            self.status = ArticleStatus::Pending;
            self.moderation_reason = ModerationReason::none();
        }
        self.updated_at = now;
        StatusChange {
            from,
            to: self.status,
        }
    }

    pub fn moderate(
        &mut self,
        decision: ModerationDecision,
        reason: ModerationReason,
        now: DateTime<Utc>,
    ) -> StatusChange {
        match decision {
            ModerationDecision::Approve => self.approve(now),
            ModerationDecision::Reject => self.reject(reason, now),
        }
    }

    pub fn approve(&mut self, now: DateTime<Utc>) -> StatusChange {
        let from = self.status;
        self.status = ArticleStatus::Disetujui;
        self.moderation_reason = ModerationReason::none();
        self.updated_at = now;
        StatusChange {
            from,
            to: self.status,
        }
    }

    pub fn reject(&mut self, reason: ModerationReason, now: DateTime<Utc>) -> StatusChange {
        let from = self.status;
        self.status = ArticleStatus::Ditolak;
        self.moderation_reason = reason;
        self.updated_at = now;
        StatusChange {
            from,
            to: self.status,
        }
    }

    pub fn snapshot(&self) -> ArticleSnapshot {
        ArticleSnapshot {
            id: self.id.into(),
            title: self.title.as_str().to_string(),
            summary: self.summary.as_str().to_string(),
            category: self.category.as_str().to_string(),
            image_url: self.image_url.as_ref().map(|url| url.as_str().to_string()),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A freshly submitted article. There is no way to choose its status.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub summary: ArticleSummary,
    pub body: ArticleBody,
    pub category: ArticleCategory,
    pub image_url: Option<ImageUrl>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn status(&self) -> ArticleStatus {
        ArticleStatus::Pending
    }
}
