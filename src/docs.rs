use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    health::HealthResponse,
    http::dtos::{
        CheckSponsorshipRequest, CheckSponsorshipResponse, ErrorResponse, PublicationVerdict,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "sponsorscan", description = "Sponsorship detection for YouTube video descriptions"),
    paths(
        crate::http::handlers::check_sponsorship,
        crate::http::channels::verify_subscription,
        crate::http::channels::receive_publication,
        crate::health::health_check
    ),
    components(schemas(
        CheckSponsorshipRequest,
        CheckSponsorshipResponse,
        ErrorResponse,
        PublicationVerdict,
        HealthResponse
    )),
    tags(
        (name = "detection", description = "Sponsorship detection"),
        (name = "notifications", description = "Channel upload notifications"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, ApiDoc::openapi())
}
