use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_HUB_URL: &str = "https://pubsubhubbub.appspot.com/subscribe";
const TOPIC_BASE_URL: &str = "https://www.youtube.com/xml/feeds/videos.xml";
const USER_AGENT: &str = "sponsorscan/0.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HubMode {
    Subscribe,
    Unsubscribe,
}

impl HubMode {
    pub fn as_str(self) -> &'static str {
        match self {
            HubMode::Subscribe => "subscribe",
            HubMode::Unsubscribe => "unsubscribe",
        }
    }
}

/// Query string of the hub's intent-verification `GET`.
#[derive(Debug, Deserialize)]
pub struct HubVerification {
    #[serde(rename = "hub.mode")]
    pub mode: Option<HubMode>,
    #[serde(rename = "hub.topic")]
    pub topic: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
    #[serde(rename = "hub.lease_seconds")]
    pub lease_seconds: Option<u64>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
}

impl HubVerification {
    /// Channel id carried by the topic URL, if any.
    pub fn channel_id(&self) -> Option<String> {
        let topic = Url::parse(self.topic.as_deref()?).ok()?;
        topic
            .query_pairs()
            .find(|(key, _)| key == "channel_id")
            .map(|(_, value)| value.into_owned())
    }
}

#[derive(Error, Debug)]
pub enum HubError {
    #[error("invalid channel id: {0:?}")]
    InvalidChannelId(String),

    #[error("hub rejected the {mode} request with status {status}")]
    Rejected { mode: &'static str, status: u16 },

    #[error("hub request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct HubSettings {
    pub hub_url: Url,
    pub callback_url: Url,
    pub verify_token: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for HubSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubSettings")
            .field("hub_url", &self.hub_url.as_str())
            .field("callback_url", &self.callback_url.as_str())
            .field("verify_token", &self.verify_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Subscribes the service's callback to channel upload feeds.
#[derive(Clone)]
pub struct HubClient {
    client: Client,
    settings: HubSettings,
}

impl HubClient {
    pub fn new(settings: HubSettings) -> Result<Self, HubError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { client, settings })
    }

    pub fn topic_url(channel_id: &str) -> String {
        format!("{TOPIC_BASE_URL}?channel_id={channel_id}")
    }

    pub async fn subscribe(&self, channel_id: &str) -> Result<(), HubError> {
        self.send(HubMode::Subscribe, channel_id).await
    }

    pub async fn unsubscribe(&self, channel_id: &str) -> Result<(), HubError> {
        self.send(HubMode::Unsubscribe, channel_id).await
    }

    #[instrument(skip(self), fields(mode = mode.as_str()))]
    async fn send(&self, mode: HubMode, channel_id: &str) -> Result<(), HubError> {
        let channel_id = validate_channel_id(channel_id)?;
        let topic = Self::topic_url(channel_id);

        let mut form = vec![
            ("hub.callback", self.settings.callback_url.as_str()),
            ("hub.topic", topic.as_str()),
            ("hub.verify", "sync"),
            ("hub.mode", mode.as_str()),
        ];
        if let Some(token) = self.settings.verify_token.as_deref() {
            form.push(("hub.verify_token", token));
        }

        let response = self
            .client
            .post(self.settings.hub_url.clone())
            .form(&form)
            .send()
            .await?;

        match response.status() {
            StatusCode::ACCEPTED | StatusCode::NO_CONTENT => {
                info!(channel_id, "Hub accepted request");
                Ok(())
            }
            status => Err(HubError::Rejected {
                mode: mode.as_str(),
                status: status.as_u16(),
            }),
        }
    }
}

fn validate_channel_id(raw: &str) -> Result<&str, HubError> {
    let id = raw.trim();
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(id)
    } else {
        Err(HubError::InvalidChannelId(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verification(topic: Option<&str>) -> HubVerification {
        HubVerification {
            mode: Some(HubMode::Subscribe),
            topic: topic.map(str::to_string),
            challenge: Some("abc".to_string()),
            lease_seconds: Some(432000),
            verify_token: None,
        }
    }

    #[test]
    fn test_topic_url() {
        assert_eq!(
            HubClient::topic_url("UC123"),
            "https://www.youtube.com/xml/feeds/videos.xml?channel_id=UC123"
        );
    }

    #[test]
    fn test_channel_id_from_topic() {
        let topic = HubClient::topic_url("UCuAXFkgsw1L7xaCfnd5JJOw");
        assert_eq!(
            verification(Some(&topic)).channel_id().as_deref(),
            Some("UCuAXFkgsw1L7xaCfnd5JJOw")
        );
        assert_eq!(verification(Some("not a url")).channel_id(), None);
        assert_eq!(verification(None).channel_id(), None);
    }

    #[test]
    fn test_validate_channel_id() {
        assert_eq!(validate_channel_id(" UC_a-1 ").unwrap(), "UC_a-1");
        assert!(validate_channel_id("").is_err());
        assert!(validate_channel_id("UC1&hub.mode=unsubscribe").is_err());
    }

    #[test]
    fn test_settings_debug_redacts_token() {
        let settings = HubSettings {
            hub_url: Url::parse(DEFAULT_HUB_URL).unwrap(),
            callback_url: Url::parse("http://localhost:8080/channels").unwrap(),
            verify_token: Some("hunter2".to_string()),
            timeout: Duration::from_secs(5),
        };
        assert!(!format!("{settings:?}").contains("hunter2"));
    }
}
