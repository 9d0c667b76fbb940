use thiserror::Error;

use crate::detector::ContentIdentifier;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("connect timeout")]
    ConnectTimeout,

    #[error("request timeout")]
    RequestTimeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("http error {status}")]
    Http { status: reqwest::StatusCode },

    #[error("malformed provider response: {0}")]
    Decode(String),

    #[error("no video found for id {0}")]
    NotFound(ContentIdentifier),

    #[error("unknown: {0}")]
    Unknown(String),
}

impl ProviderError {
    /// The provider answered but had no such video. Everything else means the
    /// provider could not be consulted.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::RequestTimeout
            }
        } else if let Some(status) = err.status() {
            Self::Http { status }
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_connect() || err.is_request() {
            Self::Connect(err.to_string())
        } else {
            Self::Unknown(err.to_string())
        }
    }
}
