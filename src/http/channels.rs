//! Callback endpoint for channel upload notifications.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::{
    app_state::AppState,
    detector,
    http::dtos::{ErrorResponse, PublicationVerdict},
    notifications::{HubVerification, parse_publication},
};

pub const INVALID_VERIFICATION_MESSAGE: &str = "Invalid hub verification request";
pub const VERIFY_TOKEN_MESSAGE: &str = "Verify token mismatch";
pub const MALFORMED_FEED_MESSAGE: &str = "Malformed notification";

#[utoipa::path(
    get,
    path = "/channels",
    tag = "notifications",
    params(
        ("hub.mode" = Option<String>, Query, description = "subscribe or unsubscribe"),
        ("hub.topic" = Option<String>, Query, description = "Channel feed URL"),
        ("hub.challenge" = String, Query, description = "Value to echo back"),
        ("hub.lease_seconds" = Option<u64>, Query, description = "Subscription lifetime"),
        ("hub.verify_token" = Option<String>, Query, description = "Shared secret")
    ),
    responses(
        (status = 200, description = "Challenge echoed", body = String, content_type = "text/plain"),
        (status = 400, description = "Challenge missing or query unreadable", body = ErrorResponse),
        (status = 403, description = "Verify token does not match", body = ErrorResponse)
    )
)]
pub async fn verify_subscription(
    State(state): State<AppState>,
    query: Result<Query<HubVerification>, QueryRejection>,
) -> Response {
    let Query(verification) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected hub verification query");
            return bad_request(INVALID_VERIFICATION_MESSAGE);
        }
    };

    let token_matches = match state.verify_token.as_deref() {
        Some(expected) => verification.verify_token.as_deref() == Some(expected),
        None => true,
    };
    if !token_matches {
        warn!(topic = ?verification.topic, "Hub verification token mismatch");
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new(VERIFY_TOKEN_MESSAGE)),
        )
            .into_response();
    }

    let Some(challenge) = verification.challenge.as_deref().filter(|c| !c.is_empty()) else {
        return bad_request(INVALID_VERIFICATION_MESSAGE);
    };

    info!(
        mode = ?verification.mode,
        channel_id = ?verification.channel_id(),
        lease_seconds = ?verification.lease_seconds,
        "Confirmed hub subscription"
    );
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        challenge.to_string(),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/channels",
    tag = "notifications",
    request_body(content = String, content_type = "application/atom+xml"),
    responses(
        (status = 200, description = "Entry classified, or nothing to classify", body = PublicationVerdict),
        (status = 400, description = "Body is not a readable Atom feed", body = ErrorResponse),
        (status = 500, description = "Metadata provider failed or video not found", body = ErrorResponse)
    )
)]
pub async fn receive_publication(State(state): State<AppState>, body: String) -> Response {
    let publication = match parse_publication(&body) {
        Ok(Some(publication)) => publication,
        Ok(None) => {
            info!("Notification carried no video entry");
            return StatusCode::OK.into_response();
        }
        Err(error) => {
            warn!(%error, "Rejected hub notification");
            return bad_request(MALFORMED_FEED_MESSAGE);
        }
    };

    let id = match detector::from_video_id(&publication.video_id) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };

    info!(
        video_id = %id,
        channel_id = ?publication.channel_id,
        title = ?publication.title,
        "Received publication"
    );
    match state.pipeline.detect_id(id).await {
        Ok(verdict) => (
            StatusCode::OK,
            Json(PublicationVerdict {
                video_id: verdict.identifier.to_string(),
                sponsorship_detected: verdict.sponsorship_detected,
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}
