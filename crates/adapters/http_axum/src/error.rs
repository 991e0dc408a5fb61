//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use simio_domain::error::{MissingField, SimioError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SimioError`] to an HTTP response with appropriate status code.
pub struct ApiError(SimioError);

impl From<SimioError> for ApiError {
    fn from(err: SimioError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SimioError::MissingField(err @ MissingField::PointName) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            SimioError::MissingField(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SimioError::InvalidValue(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SimioError::UnknownPoint(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SimioError::ConfigMalformed(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SimioError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
