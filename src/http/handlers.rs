use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header::ALLOW},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{
    app_state::AppState,
    http::{
        dtos::{CheckSponsorshipRequest, CheckSponsorshipResponse, ErrorResponse},
        errors::INVALID_URL_MESSAGE,
    },
};

#[utoipa::path(
    post,
    path = "/api/check-sponsorship",
    tag = "detection",
    request_body = CheckSponsorshipRequest,
    responses(
        (status = 200, description = "Detection finished", body = CheckSponsorshipResponse),
        (status = 400, description = "Video URL missing or not a watch-page URL", body = ErrorResponse),
        (status = 405, description = "Only POST is supported", body = ErrorResponse),
        (status = 500, description = "Metadata provider failed or video not found", body = ErrorResponse)
    )
)]
pub async fn check_sponsorship(
    State(state): State<AppState>,
    payload: Result<Json<CheckSponsorshipRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected check request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(INVALID_URL_MESSAGE)),
            )
                .into_response();
        }
    };

    match state.pipeline.detect(&payload.video_url).await {
        Ok(verdict) => (
            StatusCode::OK,
            Json(CheckSponsorshipResponse {
                sponsorship_detected: verdict.sponsorship_detected,
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(ALLOW, "POST")],
        Json(ErrorResponse::new("Method not allowed")),
    )
        .into_response()
}
