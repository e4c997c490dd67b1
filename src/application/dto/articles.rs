use crate::domain::article::{Article, ArticleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub author_id: i64,
    #[schema(value_type = String, example = "Pending")]
    pub status: ArticleStatus,
    #[serde(default)]
    pub moderation_reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            summary: article.summary.into_inner(),
            body: article.body.into_inner(),
            category: article.category.into_inner(),
            image_url: article.image_url.map(|url| url.into_inner()),
            author_id: article.author_id.into(),
            status: article.status,
            moderation_reason: article.moderation_reason.into_inner(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
