// tests/support/mocks/notifier.rs
use std::sync::Mutex;
use tokio::sync::broadcast;

use berita_core::application::ports::notifier::PublicationNotifier;
use berita_core::domain::article::{ArticleId, ArticleSnapshot, PublicationEvent};

use super::{Journal, new_journal};

/// Keeps every event it is asked to send and forwards it to subscribers.
pub struct RecordingNotifier {
    events: Mutex<Vec<PublicationEvent>>,
    sender: broadcast::Sender<PublicationEvent>,
    journal: Journal,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::with_journal(new_journal())
    }

    pub fn with_journal(journal: Journal) -> Self {
        let (sender, _) = broadcast::channel(16);
        Self {
            events: Mutex::new(Vec::new()),
            sender,
            journal,
        }
    }

    pub fn events(&self) -> Vec<PublicationEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, kind: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.kind() == kind)
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn record(&self, event: PublicationEvent) {
        self.journal
            .lock()
            .unwrap()
            .push(format!("{}:{}", event.kind(), event.article_id()));
        self.events.lock().unwrap().push(event.clone());
        let _ = self.sender.send(event);
    }
}

impl PublicationNotifier for RecordingNotifier {
    fn publish(&self, snapshot: ArticleSnapshot) {
        self.record(PublicationEvent::Publish { article: snapshot });
    }

    fn unpublish(&self, article_id: ArticleId) {
        self.record(PublicationEvent::Unpublish {
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
