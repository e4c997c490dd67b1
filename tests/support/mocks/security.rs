// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use berita_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use berita_core::domain::user::UserId;

/// テスト用トークン定数（タイポ防止とIDE補完のため）
pub const ADMIN_TOKEN: &str = "admin-token";
pub const WRITER_TOKEN: &str = "writer-token";
pub const OTHER_WRITER_TOKEN: &str = "other-writer-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

/* -------------------------------- TokenManager -------------------------------- */

/// Resolves the fixed test tokens above; `issue` mints `token-for-<id>`.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("token-for-{}", subject.user_id),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(admin_user()),
            WRITER_TOKEN => Ok(writer_user()),
            OTHER_WRITER_TOKEN => Ok(other_writer_user()),
            // Expired tokens should be rejected at authentication time
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

fn user(id: i64, username: &str, is_admin: bool, now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        is_admin,
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

pub fn admin_user() -> AuthenticatedUser {
    user(1, "redaksi", true, super::time::fixed_now())
}

pub fn writer_user() -> AuthenticatedUser {
    user(2, "penulis", false, super::time::fixed_now())
}

pub fn other_writer_user() -> AuthenticatedUser {
    user(3, "kontributor", false, super::time::fixed_now())
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// 寛容なパスワードハッシャー（大半のテストで使用）
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<String> {
        Ok("hash".into())
    }

    async fn verify(&self, _password: &str, _expected_hash: &str) -> ApplicationResult<()> {
        Ok(())
    }
}

/// 厳密なパスワードハッシャー（ネガティブパステスト用）
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
