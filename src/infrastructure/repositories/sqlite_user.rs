use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    AdminGrant, NewUser, PasswordHash, User, UserId, UserRepository, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            is_admin: row.is_admin,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            password_hash,
            admin,
            created_at,
        } = new_user;

        // The emptiness check runs inside the INSERT, under the write lock.
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, password_hash, is_admin, created_at)
             SELECT ?, ?, (? OR (? AND NOT EXISTS (SELECT 1 FROM users))), ?
             RETURNING id, username, password_hash, is_admin, created_at",
        )
        .bind(username.as_str())
        .bind(password_hash.as_str())
        .bind(admin == AdminGrant::Always)
        .bind(admin == AdminGrant::IfFirstAccount)
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, is_admin, created_at
             FROM users WHERE username = ?",
        )
        .bind(username.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, is_admin, created_at
             FROM users WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn promote(&self, id: UserId, password_hash: PasswordHash) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "UPDATE users SET is_admin = 1, password_hash = ?
             WHERE id = ?
             RETURNING id, username, password_hash, is_admin, created_at",
        )
        .bind(password_hash.as_str())
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }
}
