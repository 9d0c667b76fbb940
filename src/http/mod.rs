pub mod channels;
pub mod dtos;
pub mod errors;
pub mod handlers;

use axum::{
    Router,
    body::Body,
    http::Request,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;

use crate::{app_state::AppState, docs, health::health_check};

pub const CHECK_SPONSORSHIP_PATH: &str = "/api/check-sponsorship";
pub const HEALTH_PATH: &str = "/healthz";
pub const CHANNELS_PATH: &str = "/channels";

/// Full HTTP surface with request ids and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            CHECK_SPONSORSHIP_PATH,
            post(handlers::check_sponsorship).fallback(handlers::method_not_allowed),
        )
        .route(
            CHANNELS_PATH,
            get(channels::verify_subscription).post(channels::receive_publication),
        )
        .route(HEALTH_PATH, get(health_check))
        .merge(docs::swagger_ui())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");
                    info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id,
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
