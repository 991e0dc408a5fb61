//! Server-Sent Events (SSE) stream of status snapshots.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::WatchStream;

use simio_app::ports::{Clock, ConfigStore, EventLog};

use crate::state::AppState;
use crate::wire::WireStatus;

/// `GET /simio/stream` — one snapshot per generation change.
///
/// The current snapshot is sent as soon as the client connects. Generations
/// that change faster than the client reads are coalesced; the client always
/// ends up with the latest snapshot. Each frame carries the generation as its
/// SSE `id`.
pub async fn stream<S, C, L>(
    State(state): State<AppState<S, C, L>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>
where
    S: ConfigStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    L: EventLog + Send + Sync + 'static,
{
    let points = Arc::clone(&state.points);
    let snapshots = WatchStream::new(points.subscribe()).filter_map(move |_generation| {
        let status = points.snapshot();
        match serde_json::to_string(&WireStatus(&status)) {
            Ok(json) => Some(Ok(Event::default()
                .id(status.generation.to_string())
                .data(json))),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize status for SSE stream");
                None
            }
        }
    });

    Sse::new(snapshots).keep_alive(KeepAlive::default())
}
