use std::sync::Arc;

mod support;

use berita_core::application::commands::users::{
    EnsureAdminCommand, LoginUserCommand, RegisterUserCommand, UserCommandService,
};
use berita_core::application::error::ApplicationError;
use berita_core::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use berita_core::domain::user::UserRepository;

use support::{DummyClock, DummyTokenManager, InMemoryUserRepo, StrictPasswordHasher};

fn service_with(repo: Arc<InMemoryUserRepo>) -> UserCommandService {
    UserCommandService::new(
        repo as Arc<dyn UserRepository>,
        Arc::new(StrictPasswordHasher) as Arc<dyn PasswordHasher>,
        Arc::new(DummyTokenManager) as Arc<dyn TokenManager>,
        Arc::new(DummyClock) as Arc<dyn Clock>,
    )
}

fn register(username: &str, password: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        username: username.into(),
        password: password.into(),
    }
}

fn login(username: &str, password: &str) -> LoginUserCommand {
    LoginUserCommand {
        username: username.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn first_registered_user_becomes_admin() {
    let repo = Arc::new(InMemoryUserRepo::new());
    let service = service_with(repo.clone());

    let first = service.register(register("redaksi", "rahasia-panjang")).await.unwrap();
    let second = service.register(register("penulis", "rahasia-panjang")).await.unwrap();

    assert!(first.is_admin);
    assert!(!second.is_admin);
    assert_eq!(repo.get(first.id).unwrap().password_hash.as_str(), "hash::rahasia-panjang");
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let service = service_with(Arc::new(InMemoryUserRepo::with_test_accounts()));

    let err = service
        .register(register("penulis", "rahasia-panjang"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)), "got {err:?}");
}

#[tokio::test]
async fn short_password_is_rejected() {
    let service = service_with(Arc::new(InMemoryUserRepo::new()));

    let err = service.register(register("penulis", "pendek")).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn blank_username_is_rejected() {
    let service = service_with(Arc::new(InMemoryUserRepo::new()));

    let err = service.register(register("   ", "rahasia-panjang")).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn login_checks_the_password() {
    let service = service_with(Arc::new(InMemoryUserRepo::new()));
    let user = service.register(register("penulis", "rahasia-panjang")).await.unwrap();

    let err = service.login(login("penulis", "salah-sandi")).await.err().unwrap();
    assert!(matches!(err, ApplicationError::Unauthorized(_)), "got {err:?}");

    let ok = service.login(login("penulis", "rahasia-panjang")).await.unwrap();
    assert_eq!(ok.token.token, format!("token-for-{}", user.id));
    assert_eq!(ok.user.username, "penulis");
}

#[tokio::test]
async fn unknown_user_cannot_log_in() {
    let service = service_with(Arc::new(InMemoryUserRepo::new()));

    let err = service.login(login("hantu", "rahasia-panjang")).await.err().unwrap();
    assert!(matches!(err, ApplicationError::Unauthorized(_)), "got {err:?}");
}

#[tokio::test]
async fn ensure_admin_creates_missing_account() {
    let repo = Arc::new(InMemoryUserRepo::new());
    let service = service_with(repo.clone());

    let admin = service
        .ensure_admin(EnsureAdminCommand {
            username: "redaksi".into(),
            password: "rahasia-redaksi".into(),
        })
        .await
        .unwrap();

    assert!(admin.is_admin);
    assert!(service.login(login("redaksi", "rahasia-redaksi")).await.is_ok());
}

#[tokio::test]
async fn ensure_admin_promotes_existing_writer_and_resets_password() {
    let repo = Arc::new(InMemoryUserRepo::new());
    let service = service_with(repo.clone());
    service.register(register("pemilik", "rahasia-panjang")).await.unwrap();
    let writer = service.register(register("penulis", "rahasia-panjang")).await.unwrap();
    assert!(!writer.is_admin);

    let promoted = service
        .ensure_admin(EnsureAdminCommand {
            username: "penulis".into(),
            password: "sandi-baru-redaksi".into(),
        })
        .await
        .unwrap();

    assert_eq!(promoted.id, writer.id);
    assert!(promoted.is_admin);
    assert!(repo.get(writer.id).unwrap().is_admin);
    assert!(service.login(login("penulis", "rahasia-panjang")).await.is_err());
    assert!(service.login(login("penulis", "sandi-baru-redaksi")).await.is_ok());
}
