// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;

use berita_core::application::commands::articles::{ArticleCommandService, ModerationPolicy};
use berita_core::application::ports::{
    notifier::PublicationNotifier,
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use berita_core::application::queries::articles::ArticleQueryService;
use berita_core::application::services::ApplicationServices;
use berita_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use berita_core::domain::user::UserRepository;
use berita_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{
    DummyClock, DummyPasswordHasher, DummyTokenManager, InMemoryArticleStore, InMemoryUserRepo,
    Journal, RecordingNotifier, new_journal,
};

/// Article services wired to in-memory doubles that share one journal.
pub struct ArticleHarness {
    pub commands: ArticleCommandService,
    pub queries: ArticleQueryService,
    pub store: Arc<InMemoryArticleStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub journal: Journal,
}

pub fn article_harness() -> ArticleHarness {
    article_harness_with(Arc::new(DummyClock), ModerationPolicy::default())
}

pub fn article_harness_with(clock: Arc<dyn Clock>, policy: ModerationPolicy) -> ArticleHarness {
    let journal = new_journal();
    let store = Arc::new(InMemoryArticleStore::with_journal(journal.clone()));
    let notifier = Arc::new(RecordingNotifier::with_journal(journal.clone()));

    let commands = ArticleCommandService::new(
        store.clone() as Arc<dyn ArticleWriteRepository>,
        store.clone() as Arc<dyn ArticleReadRepository>,
        notifier.clone() as Arc<dyn PublicationNotifier>,
        clock,
        policy,
    );
    let queries = ArticleQueryService::new(store.clone() as Arc<dyn ArticleReadRepository>);

    ArticleHarness {
        commands,
        queries,
        store,
        notifier,
        journal,
    }
}

/// Router plus handles on the doubles behind it.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryArticleStore>,
    pub users: Arc<InMemoryUserRepo>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn build_test_app() -> TestApp {
    let store = Arc::new(InMemoryArticleStore::new());
    let users = Arc::new(InMemoryUserRepo::with_test_accounts());
    let notifier = Arc::new(RecordingNotifier::new());

    let services = Arc::new(ApplicationServices::new(
        users.clone() as Arc<dyn UserRepository>,
        store.clone() as Arc<dyn ArticleWriteRepository>,
        store.clone() as Arc<dyn ArticleReadRepository>,
        Arc::new(DummyPasswordHasher) as Arc<dyn PasswordHasher>,
        Arc::new(DummyTokenManager) as Arc<dyn TokenManager>,
        notifier.clone() as Arc<dyn PublicationNotifier>,
        Arc::new(DummyClock) as Arc<dyn Clock>,
        ModerationPolicy::default(),
    ));

    let router = build_router(HttpState { services }, &[]);

    TestApp {
        router,
        store,
        users,
        notifier,
    }
}

pub async fn make_test_router() -> Router {
    build_test_app().router
}

/// Fire one request at the router. `body` is sent as JSON when present.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    router.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
