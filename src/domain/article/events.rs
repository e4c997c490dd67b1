use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public view of a published article pushed to live viewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSnapshot {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Visibility change of an article as seen by connected viewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PublicationEvent {
    Publish { article: ArticleSnapshot },
    Unpublish { id: i64 },
}

impl PublicationEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            PublicationEvent::Publish { .. } => "publish",
            PublicationEvent::Unpublish { .. } => "unpublish",
        }
    }

    pub fn article_id(&self) -> i64 {
        match self {
            PublicationEvent::Publish { article } => article.id,
            PublicationEvent::Unpublish { id } => *id,
        }
    }
}
