use thiserror::Error;

use crate::detector::{model::ContentIdentifier, pipeline::Stage};
use crate::provider::ProviderError;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("invalid video url: {0:?}")]
    InvalidUrl(String),

    #[error("invalid video id: {0:?}")]
    InvalidIdentifier(String),

    #[error("metadata provider unavailable: {0}")]
    ProviderUnavailable(#[source] ProviderError),

    #[error("no video found for id {0}")]
    NotFound(ContentIdentifier),
}

impl DetectError {
    /// Pipeline stage the failure originated in.
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidUrl(_) | Self::InvalidIdentifier(_) => Stage::Parsing,
            Self::ProviderUnavailable(_) | Self::NotFound(_) => Stage::Fetching,
        }
    }

    /// Whether the caller supplied bad input, as opposed to an upstream failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidUrl(_) | Self::InvalidIdentifier(_))
    }
}

impl From<ProviderError> for DetectError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound(id) => Self::NotFound(id),
            other => Self::ProviderUnavailable(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_not_found_is_routed_to_not_found() {
        let id = ContentIdentifier::new("abc");
        let err: DetectError = ProviderError::NotFound(id.clone()).into();
        match err {
            DetectError::NotFound(got) => assert_eq!(got, id),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_transport_errors_are_unavailable() {
        let err: DetectError = ProviderError::RequestTimeout.into();
        assert!(matches!(err, DetectError::ProviderUnavailable(_)));
        assert_eq!(err.stage(), Stage::Fetching);
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_invalid_url_is_client_error() {
        let err = DetectError::InvalidUrl("nope".to_string());
        assert!(err.is_client_error());
        assert_eq!(err.stage(), Stage::Parsing);
    }
}
