use crate::domain::article::entity::Article;
use crate::domain::user::UserId;

/// Identity facts the article rules need about the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub is_admin: bool,
}

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Owners and administrators may edit or delete an article.
pub struct CanManageArticleSpec<'a> {
    identity: Identity,
    article: &'a Article,
}

impl<'a> CanManageArticleSpec<'a> {
    pub fn new(identity: Identity, article: &'a Article) -> Self {
        Self { identity, article }
    }
}

impl ArticleSpecification for CanManageArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.identity.is_admin || self.article.is_owned_by(self.identity.user_id)
    }
}

/// Unpublished articles are visible to their owner and administrators only.
pub struct CanViewArticleSpec<'a> {
    identity: Option<Identity>,
    article: &'a Article,
}

impl<'a> CanViewArticleSpec<'a> {
    pub fn new(identity: Option<Identity>, article: &'a Article) -> Self {
        Self { identity, article }
    }
}

impl ArticleSpecification for CanViewArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.is_published()
            || self
                .identity
                .is_some_and(|identity| CanManageArticleSpec::new(identity, self.article).is_satisfied())
    }
}

pub struct CanModerateSpec {
    identity: Identity,
}

impl CanModerateSpec {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }
}

impl ArticleSpecification for CanModerateSpec {
    fn is_satisfied(&self) -> bool {
        self.identity.is_admin
    }
}
