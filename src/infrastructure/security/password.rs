use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with the crate defaults. Hashing is CPU bound and runs off the
/// async workers.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

async fn off_runtime<T, F>(work: F) -> ApplicationResult<T>
where
    F: FnOnce() -> ApplicationResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| ApplicationError::infrastructure(format!("password task failed: {err}")))?
}

fn hash_blocking(password: &str) -> ApplicationResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn verify_blocking(password: &str, stored: &str) -> ApplicationResult<()> {
    // A stored value that is not a PHC string never matches.
    let parsed = PasswordHash::new(stored).map_err(|err| {
        tracing::warn!(error = %err, "stored password hash is not a valid PHC string");
        ApplicationError::unauthorized("invalid credentials")
    })?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| ApplicationError::unauthorized("invalid credentials"))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        off_runtime(move || hash_blocking(&password)).await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        off_runtime(move || verify_blocking(&password, &expected_hash)).await
    }
}
