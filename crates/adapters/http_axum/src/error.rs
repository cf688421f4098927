//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use luxbridge_domain::error::BridgeError;

/// JSON error body returned by all endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BridgeError`] to an HTTP response with appropriate status code.
pub struct ApiError(BridgeError);

impl From<BridgeError> for ApiError {
    fn from(err: BridgeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BridgeError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            BridgeError::Gateway(err) => {
                tracing::error!(error = %err, "gateway error");
                (
                    StatusCode::BAD_GATEWAY,
                    "gateway unavailable".to_string(),
                )
            }
            BridgeError::PartialFanout(err) => {
                tracing::warn!(error = %err, "partial fan-out failure");
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
