mod broadcast;

pub use broadcast::BroadcastPublicationNotifier;
