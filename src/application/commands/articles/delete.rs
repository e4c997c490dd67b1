// src/application/commands/articles/delete.rs
use super::{ArticleCommandService, access::ensure_can_manage};
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load(command.id).await?;
        ensure_can_manage(actor.identity(), &article, "delete")?;

        if article.is_published() {
            self.notifier.unpublish(article.id);
        }

        if let Err(err) = self.write_repo.delete(article.id).await {
            if article.is_published() {
                self.reannounce_if_still_public(article.id).await;
            }
            return Err(err.into());
        }
        tracing::info!(
            article_id = %article.id,
            actor_id = %actor.id,
            was_published = article.is_published(),
            "article deleted"
        );
        Ok(())
    }
}
