//! End-to-end smoke tests for the full simiod stack.
//!
//! Each test spins up the complete application (file-backed config store in a
//! scratch directory, real services, real axum router) and exercises the HTTP
//! layer via `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use simio_adapter_config_file::FileConfigStore;
use simio_adapter_http_axum::router;
use simio_adapter_http_axum::state::AppState;
use simio_app::event_log::TracingEventLog;
use simio_app::ports::SystemClock;
use simio_app::services::config_service::ConfigService;
use simio_app::services::point_service::PointService;
use tower::ServiceExt;

const DOCUMENT: &str = r#"{"simio":{"points":[
    {"name":"lamp1","gear":"light"},
    {"name":"lamp2","gear":"light"},
    {"name":"siren"}
]}}"#;

type Points = Arc<PointService<SystemClock, TracingEventLog>>;

fn scratch_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("simiod-it-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir.join("simio.json")
}

/// Build a fully-wired router whose points document lives at `path`.
async fn app_at(path: &PathBuf) -> (axum::Router, Points) {
    let points = Arc::new(PointService::new("it-host", SystemClock, TracingEventLog));
    let config = Arc::new(ConfigService::new(
        FileConfigStore::new(path),
        Arc::clone(&points),
    ));
    config
        .load_initial()
        .await
        .expect("stored document should load");
    (router::build(AppState::new(config), None), points)
}

async fn app(name: &str) -> (axum::Router, Points, PathBuf) {
    let path = scratch_file(name);
    std::fs::write(&path, DOCUMENT).unwrap();
    let (router, points) = app_at(&path).await;
    (router, points, path)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _, _) = app("health").await;

    let resp = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_report_configured_points_in_order() {
    let (app, _, _) = app("status").await;

    let resp = app.oneshot(get("/simio/status")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let lamp1 = text.find("\"lamp1\"").unwrap();
    let lamp2 = text.find("\"lamp2\"").unwrap();
    let siren = text.find("\"siren\"").unwrap();
    assert!(lamp1 < lamp2 && lamp2 < siren);

    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["host"], "it-host");
    assert_eq!(body["control"]["status"]["lamp1"]["gear"], "light");
    assert!(body["control"]["status"]["siren"].get("gear").is_none());
}

#[tokio::test]
async fn should_only_report_changes_since_known_generation() {
    let (app, _, _) = app("known").await;

    let body = body_json(app.clone().oneshot(get("/simio/status")).await.unwrap()).await;
    let latest = body["latest"].as_u64().unwrap();

    let resp = app
        .clone()
        .oneshot(get(&format!("/simio/status?known={latest}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    app.clone()
        .oneshot(get("/simio/set?point=siren&state=on"))
        .await
        .unwrap();

    let resp = app
        .oneshot(get(&format!("/simio/status?known={latest}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["latest"].as_u64().unwrap() > latest);
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_raise_and_clear_alerts_on_every_point() {
    let (app, _, _) = app("alert").await;

    app.clone()
        .oneshot(get("/simio/set?point=lamp2&state=dim"))
        .await
        .unwrap();
    app.clone()
        .oneshot(get("/simio/set?point=lamp1&state=alert"))
        .await
        .unwrap();
    app.clone()
        .oneshot(get("/simio/set?point=siren&state=alert"))
        .await
        .unwrap();

    let resp = app
        .oneshot(get("/simio/set?point=all&state=clear&cause=operator"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let status = &body["control"]["status"];
    assert_eq!(status["lamp1"]["state"], "on");
    assert_eq!(status["lamp2"]["state"], "dim");
    assert_eq!(status["siren"]["state"], "on");
}

#[tokio::test]
async fn should_expire_pulse_on_sweep() {
    let (app, points, _) = app("pulse").await;

    let resp = app
        .oneshot(get("/simio/set?point=lamp1&state=on&pulse=30"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    let deadline = body["control"]["status"]["lamp1"]["pulse"].as_i64().unwrap();

    assert_eq!(points.sweep(simio_domain::time::from_epoch_secs(deadline - 1)), 0);
    assert_eq!(points.sweep(simio_domain::time::from_epoch_secs(deadline + 1)), 1);

    let lamp1 = points.snapshot();
    let lamp1 = lamp1.point("lamp1").unwrap();
    assert_eq!(lamp1.state, "off");
    assert_eq!(lamp1.pulse, None);
}

#[tokio::test]
async fn should_reject_invalid_commands() {
    let (app, _, _) = app("invalid").await;

    let cases = [
        ("/simio/set?state=on", StatusCode::NOT_FOUND),
        ("/simio/set?point=lamp1", StatusCode::BAD_REQUEST),
        ("/simio/set?point=lamp1&state=on&pulse=-1", StatusCode::BAD_REQUEST),
        ("/simio/set?point=lamp1&state=on&pulse=soon", StatusCode::BAD_REQUEST),
        ("/simio/set?point=ghost&state=on", StatusCode::NOT_FOUND),
    ];
    for (uri, expected) in cases {
        let resp = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), expected, "{uri}");
        let body = body_json(resp).await;
        assert!(body["error"].is_string(), "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_persist_config_and_keep_surviving_state() {
    let (app, _, path) = app("config").await;

    app.clone()
        .oneshot(get("/simio/set?point=lamp1&state=on&pulse=60"))
        .await
        .unwrap();

    let document = r#"{"simio":{"points":[{"name":"lamp1","gear":"light"},{"name":"fan"}]}}"#;
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/simio/config")
                .body(Body::from(document))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let status = &body["control"]["status"];
    assert_eq!(status["lamp1"]["state"], "on");
    assert!(status["lamp1"]["pulse"].is_i64());
    assert_eq!(status["fan"]["state"], "off");
    assert!(status.get("siren").is_none());

    assert_eq!(std::fs::read_to_string(&path).unwrap(), document);

    let resp = app.oneshot(get("/simio/config")).await.unwrap();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(bytes, document.as_bytes());
}

#[tokio::test]
async fn should_keep_file_and_points_when_config_is_malformed() {
    let (app, points, path) = app("malformed").await;
    let before = points.snapshot();

    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/simio/config")
                .body(Body::from(r#"{"simio":{"points":[{"gear":"x"}]}}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), DOCUMENT);
    assert_eq!(points.snapshot().points, before.points);
    assert_eq!(points.generation(), before.generation);
}

#[tokio::test]
async fn should_start_empty_without_config_file() {
    let path = scratch_file("empty");
    let (app, _) = app_at(&path).await;

    let body = body_json(app.clone().oneshot(get("/simio/status")).await.unwrap()).await;
    assert_eq!(body["control"]["status"], serde_json::json!({}));

    let resp = app.oneshot(get("/simio/config")).await.unwrap();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(bytes, r#"{"simio":{"points":[]}}"#.as_bytes());
}
