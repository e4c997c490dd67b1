use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::{PasswordHash, UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new account. `NewUser::admin` is resolved against the table
    /// contents atomically with the insert.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Grant admin rights and replace the credential in one write. Used by
    /// bootstrap seeding of the configured administrator account.
    async fn promote(&self, id: UserId, password_hash: PasswordHash) -> DomainResult<User>;
}
