//! JSON API handler modules, mounted under `/simio`.

#[allow(clippy::missing_errors_doc)]
pub mod config;
#[allow(clippy::missing_errors_doc)]
pub mod set;
pub mod status;
pub mod stream;

use axum::Router;
use axum::routing::get;

use simio_app::ports::{Clock, ConfigStore, EventLog};

use crate::state::AppState;

/// Build the `/simio` sub-router.
pub fn routes<S, C, L>() -> Router<AppState<S, C, L>>
where
    S: ConfigStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    L: EventLog + Send + Sync + 'static,
{
    Router::new()
        .route("/status", get(status::get::<S, C, L>))
        .route("/set", get(set::apply::<S, C, L>).post(set::apply::<S, C, L>))
        .route(
            "/config",
            get(config::get::<S, C, L>).post(config::update::<S, C, L>),
        )
        .route("/stream", get(stream::stream::<S, C, L>))
}
