use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::{ArticleCommandService, ModerationPolicy},
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationResult,
        ports::{
            notifier::PublicationNotifier,
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{articles::ArticleQueryService, users::UserQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
    notifier: Arc<dyn PublicationNotifier>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        notifier: Arc<dyn PublicationNotifier>,
        clock: Arc<dyn Clock>,
        policy: ModerationPolicy,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&notifier),
            Arc::clone(&clock),
            policy,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            user_commands,
            article_commands,
            article_queries,
            user_queries,
            token_manager,
            notifier,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    pub fn notifier(&self) -> Arc<dyn PublicationNotifier> {
        Arc::clone(&self.notifier)
    }

    /// Resolve a raw bearer token into the caller's identity.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
