use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{notifier::PublicationNotifier, time::Clock},
    },
    domain::article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository},
};

use super::ModerationPolicy;

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) notifier: Arc<dyn PublicationNotifier>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) policy: ModerationPolicy,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        notifier: Arc<dyn PublicationNotifier>,
        clock: Arc<dyn Clock>,
        policy: ModerationPolicy,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            notifier,
            clock,
            policy,
        }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// Viewers were told to drop `id` but the write behind that failed.
    /// Whatever the store still holds as public is announced again.
    pub(super) async fn reannounce_if_still_public(&self, id: ArticleId) {
        match self.read_repo.find_by_id(id).await {
            Ok(Some(current)) if current.is_published() => {
                tracing::warn!(article_id = %id, "write failed after unpublish, re-announcing article");
                self.notifier.publish(current.snapshot());
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(article_id = %id, error = %err, "could not reload article after failed write");
            }
        }
    }
}
