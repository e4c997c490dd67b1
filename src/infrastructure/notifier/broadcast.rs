use crate::application::ports::notifier::PublicationNotifier;
use crate::domain::article::{ArticleId, ArticleSnapshot, PublicationEvent};
use tokio::sync::broadcast;

pub const DEFAULT_CAPACITY: usize = 128;

/// In-process fan-out over a `tokio` broadcast channel.
///
/// Viewers that fall more than `capacity` events behind lose the oldest ones;
/// the SSE layer reports the gap and keeps the stream open.
#[derive(Clone)]
pub struct BroadcastPublicationNotifier {
    sender: broadcast::Sender<PublicationEvent>,
}

impl BroadcastPublicationNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    fn send(&self, event: PublicationEvent) {
        let kind = event.kind();
        let article_id = event.article_id();
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::debug!(kind, article_id, receivers, "publication event sent");
            }
            Err(_) => {
                tracing::debug!(kind, article_id, "no live viewers, publication event dropped");
            }
        }
    }
}

impl Default for BroadcastPublicationNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl PublicationNotifier for BroadcastPublicationNotifier {
    fn publish(&self, snapshot: ArticleSnapshot) {
        self.send(PublicationEvent::Publish { article: snapshot });
    }

    fn unpublish(&self, article_id: ArticleId) {
        self.send(PublicationEvent::Unpublish {
            id: article_id.into(),
        });
    }

    fn subscribe(&self) -> broadcast::Receiver<PublicationEvent> {
        self.sender.subscribe()
    }

    fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
