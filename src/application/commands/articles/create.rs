// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{
        ArticleBody, ArticleCategory, ArticleSummary, ArticleTitle, ImageUrl, NewArticle,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    summary: Option<String>,
    body: Option<String>,
    category: Option<String>,
    image_url: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            summary: self.summary.ok_or("summary is required")?,
            body: self.body.ok_or("body is required")?,
            category: self.category,
            image_url: self.image_url,
        })
    }
}

impl ArticleCommandService {
    /// Submit a new article for review. The article always starts out `Pending`.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let new_article = NewArticle {
            title: ArticleTitle::new(command.title)?,
            summary: ArticleSummary::new(command.summary)?,
            body: ArticleBody::new(command.body)?,
            category: ArticleCategory::from_optional(command.category)?,
            image_url: command.image_url.map(ImageUrl::parse).transpose()?.flatten(),
            author_id: actor.id,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            article_id = %created.id,
            author_id = %created.author_id,
            "article submitted for review"
        );
        Ok(created.into())
    }
}
