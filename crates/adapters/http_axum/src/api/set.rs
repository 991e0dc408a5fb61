//! `GET|POST /simio/set` — command one point or every point.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use simio_app::ports::{Clock, ConfigStore, EventLog};
use simio_domain::command::CommandRequest;
use simio_domain::status::Status;

use crate::error::ApiError;
use crate::state::AppState;
use crate::wire::WireStatus;

/// Possible responses from the set endpoint.
pub enum SetResponse {
    Ok(Status),
}

impl IntoResponse for SetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(status) => Json(WireStatus(&status)).into_response(),
        }
    }
}

/// `GET|POST /simio/set?point=&state=&pulse=&cause=`
///
/// Responds with the snapshot taken right after the command.
pub async fn apply<S, C, L>(
    State(state): State<AppState<S, C, L>>,
    Query(request): Query<CommandRequest>,
) -> Result<SetResponse, ApiError>
where
    S: ConfigStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    L: EventLog + Send + Sync + 'static,
{
    let status = state.points.apply_command(&request)?;
    Ok(SetResponse::Ok(status))
}
