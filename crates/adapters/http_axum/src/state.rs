//! Shared application state for axum handlers.

use std::sync::Arc;

use simio_app::ports::{Clock, ConfigStore, EventLog};
use simio_app::services::config_service::ConfigService;
use simio_app::services::point_service::PointService;

/// Application state shared across all axum handlers.
///
/// Generic over the config store, clock and event log to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<S, C, L> {
    /// Live point registry.
    pub points: Arc<PointService<C, L>>,
    /// Points configuration document.
    pub config: Arc<ConfigService<S, C, L>>,
}

impl<S, C, L> Clone for AppState<S, C, L> {
    fn clone(&self) -> Self {
        Self {
            points: Arc::clone(&self.points),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S, C, L> AppState<S, C, L>
where
    S: ConfigStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    L: EventLog + Send + Sync + 'static,
{
    /// Create the state from a config service; the point service is the one
    /// it reconciles into.
    pub fn new(config: Arc<ConfigService<S, C, L>>) -> Self {
        Self {
            points: Arc::clone(config.points()),
            config,
        }
    }
}
