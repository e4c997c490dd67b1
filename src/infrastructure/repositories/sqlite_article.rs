use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleCategory, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleStatus, ArticleSummary, ArticleTitle, ArticleWriteRepository, ImageUrl,
    ModerationReason, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, title, summary, body, category, image_url, author_id, status, moderation_reason, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    summary: String,
    body: String,
    category: String,
    image_url: Option<String>,
    author_id: i64,
    status: String,
    moderation_reason: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            summary: ArticleSummary::new(row.summary)?,
            body: ArticleBody::new(row.body)?,
            category: ArticleCategory::new(row.category)?,
            image_url: row.image_url.map(ImageUrl::parse).transpose()?.flatten(),
            author_id: UserId::new(row.author_id)?,
            status: row.status.parse::<ArticleStatus>()?,
            moderation_reason: ModerationReason::new(row.moderation_reason),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let status = article.status();
        let NewArticle {
            title,
            summary,
            body,
            category,
            image_url,
            author_id,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, summary, body, category, image_url, author_id, status, moderation_reason, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, '', ?, ?)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(summary.as_str())
        .bind(body.as_str())
        .bind(category.as_str())
        .bind(image_url.as_ref().map(ImageUrl::as_str))
        .bind(i64::from(author_id))
        .bind(status.as_str())
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(
        &self,
        article: &Article,
        expected_updated_at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles
             SET title = ?, summary = ?, body = ?, category = ?, image_url = ?,
                 status = ?, moderation_reason = ?, updated_at = ?
             WHERE id = ? AND updated_at = ?
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(article.title.as_str())
        .bind(article.summary.as_str())
        .bind(article.body.as_str())
        .bind(article.category.as_str())
        .bind(article.image_url.as_ref().map(ImageUrl::as_str))
        .bind(article.status.as_str())
        .bind(article.moderation_reason.as_str())
        .bind(article.updated_at)
        .bind(i64::from(article.id))
        .bind(expected_updated_at)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Article::try_from(row),
            None => {
                let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM articles WHERE id = ?")
                    .bind(i64::from(article.id))
                    .fetch_optional(&*self.pool)
                    .await
                    .map_err(map_sqlx)?;
                Err(match exists {
                    Some(_) => DomainError::Conflict(
                        "article was modified concurrently, reload and retry".into(),
                    ),
                    None => DomainError::NotFound("article not found".into()),
                })
            }
        }
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Sqlite>, filter: &'a ArticleFilter) {
    let mut separator = " WHERE ";

    if let Some(status) = filter.status {
        builder.push(separator);
        builder.push("status = ");
        builder.push_bind(status.as_str());
        separator = " AND ";
    }

    if let Some(author_id) = filter.author_id {
        builder.push(separator);
        builder.push("author_id = ");
        builder.push_bind(i64::from(author_id));
        separator = " AND ";
    }

    if let Some(query) = filter.title_query.as_deref() {
        builder.push(separator);
        builder.push("LOWER(title) LIKE ");
        builder.push_bind(escape_like(&query.to_lowercase()));
        builder.push(" ESCAPE '\\'");
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        apply_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
