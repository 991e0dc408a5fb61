//! Fixtures shared by the handler tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use tower::ServiceExt;

use simio_app::config_store::InMemoryConfigStore;
use simio_app::event_log::TracingEventLog;
use simio_app::ports::Clock;
use simio_app::services::config_service::ConfigService;
use simio_app::services::point_service::PointService;
use simio_domain::time::{self, Timestamp};

use crate::state::AppState;

pub(crate) const NOW: i64 = 1_700_000_000;

pub(crate) const DOCUMENT: &str =
    r#"{"simio":{"points":[{"name":"lamp1","gear":"light"},{"name":"siren"}]}}"#;

pub(crate) struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        time::from_epoch_secs(NOW)
    }
}

pub(crate) type TestState = AppState<InMemoryConfigStore, FixedClock, TracingEventLog>;

pub(crate) async fn test_state() -> TestState {
    let points = Arc::new(PointService::new("testhost", FixedClock, TracingEventLog));
    let config = Arc::new(ConfigService::new(
        InMemoryConfigStore::with_document(DOCUMENT),
        points,
    ));
    config.load_initial().await.unwrap();
    AppState::new(config)
}

pub(crate) async fn send(state: TestState, request: Request<Body>) -> Response {
    crate::router::build(state, None).oneshot(request).await.unwrap()
}

pub(crate) fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub(crate) async fn json_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
