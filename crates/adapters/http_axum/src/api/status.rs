//! `GET /simio/status` with generation-based change detection.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use simio_app::ports::{Clock, ConfigStore, EventLog};
use simio_domain::status::{Status, StatusView};

use crate::state::AppState;
use crate::wire::WireStatus;

/// Query parameters of the status endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    /// Generation the client already has.
    pub known: Option<u64>,
}

/// Possible responses from the status endpoint.
pub enum StatusResponse {
    Ok(Status),
    NotModified,
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(status) => Json(WireStatus(&status)).into_response(),
            Self::NotModified => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /simio/status?known=<generation>`
pub async fn get<S, C, L>(
    State(state): State<AppState<S, C, L>>,
    Query(query): Query<StatusQuery>,
) -> StatusResponse
where
    S: ConfigStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    L: EventLog + Send + Sync + 'static,
{
    match state.points.get_status(query.known) {
        StatusView::Unchanged => StatusResponse::NotModified,
        StatusView::Snapshot(status) => StatusResponse::Ok(status),
    }
}
