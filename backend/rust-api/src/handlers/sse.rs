use axum::{
    extract::{Path, State},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
};
use futures::stream::{self, Stream};
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::{
    extractors::ClientId,
    metrics::SSE_CONNECTIONS_ACTIVE,
    models::timer::TimerEvent,
    services::AppState,
};

use super::ApiError;

/// SSE endpoint for timer events
/// GET /api/v1/attempts/{id}/stream
pub async fn attempt_stream(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Path(attempt_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let receiver = state.quizzes.subscribe(&client_id, &attempt_id).await?;
    tracing::info!("Client connected to SSE stream: attempt={}", attempt_id);

    let stream = create_timer_stream(attempt_id, receiver);
    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

/// Decrements the connection gauge when the stream is dropped, including on
/// client disconnect.
struct ConnectionGuard {
    attempt_id: String,
}

impl ConnectionGuard {
    fn new(attempt_id: String) -> Self {
        SSE_CONNECTIONS_ACTIVE.inc();
        Self { attempt_id }
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        SSE_CONNECTIONS_ACTIVE.dec();
        tracing::debug!("SSE stream closed: attempt={}", self.attempt_id);
    }
}

/// Relays countdown events until the final one has been sent.
fn create_timer_stream(
    attempt_id: String,
    receiver: broadcast::Receiver<TimerEvent>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let guard = ConnectionGuard::new(attempt_id);

    stream::unfold(
        (receiver, guard, false),
        |(mut receiver, guard, final_sent)| async move {
            if final_sent {
                return None;
            }

            loop {
                match receiver.recv().await {
                    Ok(timer_event) => {
                        let is_final = timer_event.is_final();
                        let event = Event::default()
                            .event(timer_event.event_name())
                            .data(timer_event.to_sse_data());
                        return Some((Ok(event), (receiver, guard, is_final)));
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            "SSE stream lagged by {} events: attempt={}",
                            skipped,
                            guard.attempt_id
                        );
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        },
    )
}
