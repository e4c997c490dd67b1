use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    /// Open self-registration. The very first account becomes the
    /// administrator; everybody after that registers as a writer.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let password_hash = PasswordHash::new(self.password_hasher.hash(&command.password).await?)?;
        let new_user = NewUser::self_registered(username, password_hash, self.clock.now());

        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, is_admin = user.is_admin, "user registered");
        Ok(user.into())
    }
}
