// src/application/commands/articles/access.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{
        Article, Identity,
        specifications::{ArticleSpecification, CanManageArticleSpec, CanModerateSpec},
    },
};

pub(crate) fn ensure_can_manage(
    identity: Identity,
    article: &Article,
    action: &str,
) -> ApplicationResult<()> {
    if CanManageArticleSpec::new(identity, article).is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "only the owner or an administrator may {action} this article"
        )))
    }
}

pub(crate) fn ensure_can_moderate(identity: Identity) -> ApplicationResult<()> {
    if CanModerateSpec::new(identity).is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "administrative privileges are required",
        ))
    }
}
