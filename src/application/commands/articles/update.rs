use super::{ArticleCommandService, access::ensure_can_manage};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleBody, ArticleCategory, ArticleChanges, ArticleSummary, ArticleTitle, ImageUrl,
    },
};

/// Content patch. Absent fields are left untouched; an empty `image_url`
/// removes the image.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl UpdateArticleCommand {
    fn into_changes(self) -> ApplicationResult<ArticleChanges> {
        Ok(ArticleChanges {
            title: self.title.map(ArticleTitle::new).transpose()?,
            summary: self.summary.map(ArticleSummary::new).transpose()?,
            body: self.body.map(ArticleBody::new).transpose()?,
            category: self.category.map(ArticleCategory::new).transpose()?,
            image_url: self.image_url.map(ImageUrl::parse).transpose()?,
        })
    }
}

impl ArticleCommandService {
    /// Edit an article. Editing a published article withdraws it from the
    /// public listing and sends it back to review; viewers are told to drop
    /// it before the new content is stored.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load(command.id).await?;
        ensure_can_manage(actor.identity(), &article, "edit")?;

        let changes = command.into_changes()?;
        if changes.is_empty() {
            return Err(ApplicationError::validation("no changes supplied"));
        }

        let original_updated_at = article.updated_at;
        let change = article.revise(changes, self.clock.now());

        if change.retracts() {
            tracing::info!(
                article_id = %article.id,
                editor_id = %actor.id,
                "published article edited, returning to review"
            );
            self.notifier.unpublish(article.id);
        }

        match self.write_repo.update(&article, original_updated_at).await {
            Ok(updated) => Ok(updated.into()),
            Err(err) => {
                if change.retracts() {
                    self.reannounce_if_still_public(article.id).await;
                }
                Err(err.into())
            }
        }
    }
}
