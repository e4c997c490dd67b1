// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod notifier;
pub mod security;
pub mod time;
pub mod user_repo;
pub mod util;

use std::sync::{Arc, Mutex};

/// Ordered record of side effects shared between the store and the notifier,
/// e.g. `["unpublish:1", "update:1"]`.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn new_journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

/* -------------------------------- 再エクスポート -------------------------------- */

// 時刻関連
pub use time::fixed_now;

// セキュリティ関連
pub use security::{
    ADMIN_TOKEN, DummyPasswordHasher, DummyTokenManager, EXPIRED_TOKEN, OTHER_WRITER_TOKEN,
    StrictPasswordHasher, WRITER_TOKEN, admin_user, other_writer_user, writer_user,
};

// ユーティリティ関連
pub use util::{DummyClock, SteppingClock};

// リポジトリ関連
pub use article_repos::InMemoryArticleStore;
pub use user_repo::InMemoryUserRepo;

// 通知
pub use notifier::RecordingNotifier;
