// src/application/ports/notifier.rs
use crate::domain::article::{ArticleId, ArticleSnapshot, PublicationEvent};
use tokio::sync::broadcast;

/// Fan-out of article visibility changes to every connected viewer.
///
/// Both send operations are fire-and-forget: they never block and never fail
/// the command that triggered them. Implementations log undeliverable events
/// and drop them.
pub trait PublicationNotifier: Send + Sync {
    fn publish(&self, snapshot: ArticleSnapshot);

    fn unpublish(&self, article_id: ArticleId);

    /// Attach a new viewer. The subscription ends when the receiver is dropped.
    fn subscribe(&self) -> broadcast::Receiver<PublicationEvent>;

    fn subscriber_count(&self) -> usize;
}
