pub mod client;
pub mod errors;
pub mod types;

use async_trait::async_trait;

use crate::detector::ContentIdentifier;

pub use client::{ProviderSettings, YouTubeProvider};
pub use errors::ProviderError;

/// Source of a video's description text.
///
/// `Ok(None)` means the video exists but carries no description; callers
/// treat that as "nothing to detect", not as a failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider {
    async fn fetch(&self, id: &ContentIdentifier) -> Result<Option<String>, ProviderError>;
}
