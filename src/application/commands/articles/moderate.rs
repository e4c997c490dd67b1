// src/application/commands/articles/moderate.rs
use super::{ArticleCommandService, access::ensure_can_moderate};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ModerationDecision, ModerationReason},
};

pub struct ModerateArticleCommand {
    pub id: i64,
    pub decision: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ModerationPolicy {
    /// Rejections must explain themselves to the writer.
    pub require_rejection_reason: bool,
}

impl Default for ModerationPolicy {
    fn default() -> Self {
        Self {
            require_rejection_reason: true,
        }
    }
}

impl ArticleCommandService {
    /// Approve or reject an article.
    ///
    /// Approval clears any earlier rejection reason and announces the article
    /// to live viewers once the new status is stored. Rejecting an article
    /// that is currently public retracts it from viewers first.
    pub async fn moderate_article(
        &self,
        actor: &AuthenticatedUser,
        command: ModerateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_can_moderate(actor.identity())?;
        let mut article = self.load(command.id).await?;

        let decision: ModerationDecision = command.decision.parse()?;
        let reason = ModerationReason::new(command.reason.unwrap_or_default());
        if decision == ModerationDecision::Reject
            && reason.is_empty()
            && self.policy.require_rejection_reason
        {
            return Err(ApplicationError::validation(
                "a reason is required when rejecting an article",
            ));
        }

        if decision == ModerationDecision::Approve && article.is_published() {
            return Ok(article.into());
        }

        let original_updated_at = article.updated_at;
        let change = article.moderate(decision, reason, self.clock.now());

        if change.retracts() {
            self.notifier.unpublish(article.id);
        }

        let updated = match self.write_repo.update(&article, original_updated_at).await {
            Ok(updated) => updated,
            Err(err) => {
                if change.retracts() {
                    self.reannounce_if_still_public(article.id).await;
                }
                return Err(err.into());
            }
        };

        tracing::info!(
            article_id = %updated.id,
            moderator_id = %actor.id,
            from = %change.from,
            to = %change.to,
            "article moderated"
        );

        if change.publishes() {
            self.notifier.publish(updated.snapshot());
        }

        Ok(updated.into())
    }
}
