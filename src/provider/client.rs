use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::detector::ContentIdentifier;
use crate::provider::{MetadataProvider, errors::ProviderError, types::VideoListResponse};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const USER_AGENT: &str = "sponsorscan/0.1";

/// Connection details for the YouTube Data API.
#[derive(Clone)]
pub struct ProviderSettings {
    pub base_url: Url,
    pub api_key: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// `videos.list` client. One GET per lookup, no retries, no caching.
#[derive(Clone)]
pub struct YouTubeProvider {
    client: Client,
    videos_url: Url,
    api_key: String,
}

impl YouTubeProvider {
    pub fn new(settings: ProviderSettings) -> Result<Self, ProviderError> {
        let client = ClientBuilder::new()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProviderError::Unknown(e.to_string()))?;

        Ok(Self {
            client,
            videos_url: videos_endpoint(&settings.base_url),
            api_key: settings.api_key,
        })
    }
}

fn videos_endpoint(base_url: &Url) -> Url {
    let mut url = base_url.clone();
    let path = format!("{}/videos", url.path().trim_end_matches('/'));
    url.set_path(&path);
    url
}

#[async_trait]
impl MetadataProvider for YouTubeProvider {
    #[instrument(skip_all, fields(video_id = %id))]
    async fn fetch(&self, id: &ContentIdentifier) -> Result<Option<String>, ProviderError> {
        let response = self
            .client
            .get(self.videos_url.clone())
            .query(&[
                ("id", id.as_str()),
                ("part", "snippet"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(ProviderError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http { status });
        }

        let body: VideoListResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let Some(item) = body.items.first() else {
            return Err(ProviderError::NotFound(id.clone()));
        };

        let description = item.description().map(str::to_owned);
        debug!(
            has_description = description.is_some(),
            "Fetched video metadata"
        );

        Ok(description)
    }
}
