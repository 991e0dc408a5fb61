//! `GET|POST /simio/config` — read back and replace the points document.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use simio_app::ports::{Clock, ConfigStore, EventLog};
use simio_domain::status::Status;

use crate::error::ApiError;
use crate::state::AppState;
use crate::wire::WireStatus;

/// Possible responses from the config endpoints.
pub enum ConfigResponse {
    /// The stored document, verbatim.
    Document(String),
    /// Snapshot after a successful update.
    Updated(Status),
}

impl IntoResponse for ConfigResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Document(text) => {
                ([(header::CONTENT_TYPE, "application/json")], text).into_response()
            }
            Self::Updated(status) => Json(WireStatus(&status)).into_response(),
        }
    }
}

/// `GET /simio/config`
pub async fn get<S, C, L>(State(state): State<AppState<S, C, L>>) -> ConfigResponse
where
    S: ConfigStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    L: EventLog + Send + Sync + 'static,
{
    ConfigResponse::Document(state.config.current().await)
}

/// `POST /simio/config` — the body is the new document.
pub async fn update<S, C, L>(
    State(state): State<AppState<S, C, L>>,
    body: String,
) -> Result<ConfigResponse, ApiError>
where
    S: ConfigStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    L: EventLog + Send + Sync + 'static,
{
    let count = state.config.update(body).await?;
    tracing::info!(points = count, "points configuration replaced");
    Ok(ConfigResponse::Updated(state.points.snapshot()))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};

    use crate::test_support::{DOCUMENT, get, json_body, send, test_state};

    fn post(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/simio/config")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_current_document() {
        let response = send(test_state().await, get("/simio/config")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(bytes, DOCUMENT.as_bytes());
    }

    #[tokio::test]
    async fn should_round_trip_updated_document() {
        let state = test_state().await;
        let document = r#"{"simio":{"points":[{"name":"siren"},{"name":"fan"}]}}"#;

        let response = send(state.clone(), post(document)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(
            body["control"]["status"],
            serde_json::json!({ "siren": { "state": "off" }, "fan": { "state": "off" } })
        );

        let response = send(state, get("/simio/config")).await;
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(bytes, document.as_bytes());
    }

    #[tokio::test]
    async fn should_reject_malformed_document() {
        let state = test_state().await;
        let generation = state.points.generation();

        let response = send(state.clone(), post("{not json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].is_string());
        assert_eq!(state.points.generation(), generation);
    }
}
