use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::detector::DetectError;
use crate::http::dtos::ErrorResponse;

pub const INVALID_URL_MESSAGE: &str = "Invalid video URL";
pub const INVALID_ID_MESSAGE: &str = "Invalid video id";
pub const NOT_FOUND_MESSAGE: &str = "Video description not found";
pub const PROVIDER_FAILURE_MESSAGE: &str = "Failed to process request";

impl IntoResponse for DetectError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            debug!(error = %self, "Rejected detection input");
            let message = match &self {
                DetectError::InvalidIdentifier(_) => INVALID_ID_MESSAGE,
                _ => INVALID_URL_MESSAGE,
            };
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response();
        }

        error!(error = %self, stage = ?self.stage(), "Detection failed");
        let body = match &self {
            DetectError::NotFound(_) => {
                ErrorResponse::with_details(NOT_FOUND_MESSAGE, self.to_string())
            }
            DetectError::ProviderUnavailable(source) => {
                ErrorResponse::with_details(PROVIDER_FAILURE_MESSAGE, source.to_string())
            }
            _ => ErrorResponse::with_details(PROVIDER_FAILURE_MESSAGE, self.to_string()),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
