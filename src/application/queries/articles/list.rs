use super::ArticleQueryService;
use crate::{
    application::{
        commands::articles::ensure_can_moderate,
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleFilter,
};

#[derive(Debug, Default)]
pub struct ListPublishedQuery {
    /// Case-insensitive fragment of the title.
    pub q: Option<String>,
}

impl ArticleQueryService {
    /// Public front page: approved articles only, newest first.
    ///
    /// A store outage degrades to an empty page instead of an error so the
    /// site stays up for readers.
    pub async fn list_published(
        &self,
        query: ListPublishedQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let filter = ArticleFilter::published().with_title_query(query.q.as_deref());
        match self.read_repo.list(&filter).await {
            Ok(articles) => Ok(articles.into_iter().map(Into::into).collect()),
            Err(err) => {
                let err = ApplicationError::from(err);
                if err.is_store_unavailable() {
                    tracing::warn!(error = %err, "article store unavailable, serving empty front page");
                    Ok(Vec::new())
                } else {
                    Err(err)
                }
            }
        }
    }

    /// Moderation queue: every article regardless of status, newest first.
    pub async fn list_for_admin(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        ensure_can_moderate(actor.identity())?;
        let articles = self.read_repo.list(&ArticleFilter::all()).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    /// The caller's own submissions, newest first.
    pub async fn list_for_owner(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self
            .read_repo
            .list(&ArticleFilter::by_author(actor.id))
            .await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
