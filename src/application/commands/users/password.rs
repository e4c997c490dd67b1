use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    if password.trim().is_empty() {
        return Err(ApplicationError::validation(
            "password cannot consist of whitespace only",
        ));
    }

    Ok(())
}
