// src/application/commands/articles/mod.rs
mod access;
mod create;
mod delete;
mod moderate;
mod service;
mod update;

pub(crate) use access::ensure_can_moderate;
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use moderate::{ModerateArticleCommand, ModerationPolicy};
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
