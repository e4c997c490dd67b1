// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use berita_core::domain::errors::{DomainError, DomainResult};
use berita_core::domain::user::{NewUser, PasswordHash, User, UserId, UserRepository, Username};

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<BTreeMap<i64, User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts matching the identities resolved by `DummyTokenManager`.
    pub fn with_test_accounts() -> Self {
        let repo = Self::new();
        for (id, name, is_admin) in [
            (1, "redaksi", true),
            (2, "penulis", false),
            (3, "kontributor", false),
        ] {
            repo.users.lock().unwrap().insert(
                id,
                User {
                    id: UserId::new(id).unwrap(),
                    username: Username::new(name).unwrap(),
                    password_hash: PasswordHash::new(format!("hash::{name}")).unwrap(),
                    is_admin,
                    created_at: super::time::fixed_now(),
                },
            );
        }
        repo
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.username.as_str() == new_user.username.as_str())
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let id = users.keys().next_back().copied().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            password_hash: new_user.password_hash,
            is_admin: new_user.admin.resolve(users.is_empty()),
            created_at: new_user.created_at,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn promote(&self, id: UserId, password_hash: PasswordHash) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.promote();
        user.set_password(password_hash);
        Ok(user.clone())
    }
}
