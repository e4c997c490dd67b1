// src/domain/user/entity.rs
use crate::domain::user::value_objects::{PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn promote(&mut self) {
        self.is_admin = true;
    }

    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }
}

/// How a new account obtains administrator rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminGrant {
    Never,
    Always,
    /// Only when no account exists yet. The store decides this in the same
    /// write as the insert.
    IfFirstAccount,
}

impl AdminGrant {
    pub fn resolve(self, no_accounts_yet: bool) -> bool {
        match self {
            AdminGrant::Never => false,
            AdminGrant::Always => true,
            AdminGrant::IfFirstAccount => no_accounts_yet,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub admin: AdminGrant,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn writer(
        username: Username,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            password_hash,
            admin: AdminGrant::Never,
            created_at,
        }
    }

    pub fn admin(
        username: Username,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            admin: AdminGrant::Always,
            ..Self::writer(username, password_hash, created_at)
        }
    }

    /// Open registration: the very first account becomes the administrator.
    pub fn self_registered(
        username: Username,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            admin: AdminGrant::IfFirstAccount,
            ..Self::writer(username, password_hash, created_at)
        }
    }
}
