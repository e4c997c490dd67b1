use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleId,
        specifications::{ArticleSpecification, CanViewArticleSpec},
    },
};

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Fetch a single article. Anything not yet public is reported as missing
    /// unless the caller owns it or is an administrator.
    pub async fn get_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let identity = actor.map(AuthenticatedUser::identity);
        if !CanViewArticleSpec::new(identity, &article).is_satisfied() {
            return Err(ApplicationError::not_found("article not found"));
        }

        Ok(article.into())
    }
}
