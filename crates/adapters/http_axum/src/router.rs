//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use simio_app::ports::{Clock, ConfigStore, EventLog};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the simio API under `/simio`. Any other path is looked up in
/// `public_dir` when one is given, so the bundled web UI is served from the
/// same port. Cross-origin `GET` requests are allowed from anywhere so
/// dashboards can poll status. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S, C, L>(state: AppState<S, C, L>, public_dir: Option<&Path>) -> Router
where
    S: ConfigStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    L: EventLog + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/simio", crate::api::routes());
    if let Some(dir) = public_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
