use crate::domain::article::PublicationEvent;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    response::sse::{Event, KeepAlive, Sse},
};
use std::convert::Infallible;
use tokio_stream::{
    Stream, StreamExt,
    wrappers::{BroadcastStream, errors::BroadcastStreamRecvError},
};

fn to_sse_event(event: &PublicationEvent) -> Option<Event> {
    match Event::default().event(event.kind()).json_data(event) {
        Ok(sse) => Some(sse),
        Err(err) => {
            tracing::warn!(error = %err, kind = event.kind(), "failed to encode publication event");
            None
        }
    }
}

#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "Server-sent stream of `publish` and `unpublish` events.", content_type = "text/event-stream", body = String)
    ),
    tag = "Events"
)]
pub async fn stream_events(
    Extension(state): Extension<HttpState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let notifier = state.services.notifier();
    let receiver = notifier.subscribe();
    tracing::info!(viewers = notifier.subscriber_count(), "live viewer connected");

    let stream = BroadcastStream::new(receiver).filter_map(|item| match item {
        Ok(event) => to_sse_event(&event).map(Ok),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!(skipped, "live viewer lagged, events dropped");
            None
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
