use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{NewUser, PasswordHash, Username},
};

pub struct EnsureAdminCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    /// Make sure the configured administrator account exists with the
    /// configured password. Safe to run on every start.
    pub async fn ensure_admin(&self, command: EnsureAdminCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;
        let password_hash = PasswordHash::new(self.password_hasher.hash(&command.password).await?)?;

        let user = match self.user_repo.find_by_username(&username).await? {
            Some(existing) => {
                self.user_repo
                    .promote(existing.id, password_hash)
                    .await?
            }
            None => {
                self.user_repo
                    .insert(NewUser::admin(username, password_hash, self.clock.now()))
                    .await?
            }
        };

        tracing::info!(user_id = %user.id, username = %user.username, "administrator account ensured");
        Ok(user.into())
    }
}
