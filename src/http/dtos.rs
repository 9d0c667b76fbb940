use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckSponsorshipRequest {
    #[serde(rename = "videoUrl")]
    pub video_url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckSponsorshipResponse {
    #[serde(rename = "sponsorshipDetected")]
    pub sponsorship_detected: bool,
}

/// Verdict for a video announced by a hub notification.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicationVerdict {
    #[serde(rename = "videoId")]
    pub video_id: String,
    #[serde(rename = "sponsorshipDetected")]
    pub sponsorship_detected: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
