use anyhow::{Context, Result, bail};
use sponsorscan::{
    config::{Config, keywords},
    detector::{DetectionPipeline, KeywordMatcher},
    notifications::HubClient,
    provider::YouTubeProvider,
    telemetry,
};
use std::sync::Arc;

const USAGE: &str =
    "usage: check <video-url> | check subscribe <channel-id> | check unsubscribe <channel-id>";

/// `check <video-url>` prints the verdict as JSON. `check subscribe|unsubscribe
/// <channel-id>` manages hub notifications for a channel.
#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = Config::from_env().context("Failed to load configuration")?;
    telemetry::init(config.log_format());

    match args.as_slice() {
        [command, channel_id] if command == "subscribe" => {
            let hub = HubClient::new(config.hub_settings()).context("Failed to build hub client")?;
            hub.subscribe(channel_id)
                .await
                .with_context(|| format!("Failed to subscribe to channel {channel_id}"))?;
            println!("Subscribed to channel {channel_id}");
        }
        [command, channel_id] if command == "unsubscribe" => {
            let hub = HubClient::new(config.hub_settings()).context("Failed to build hub client")?;
            hub.unsubscribe(channel_id)
                .await
                .with_context(|| format!("Failed to unsubscribe from channel {channel_id}"))?;
            println!("Unsubscribed from channel {channel_id}");
        }
        [url] => check(&config, url).await?,
        _ => bail!(USAGE),
    }
    Ok(())
}

async fn check(config: &Config, url: &str) -> Result<()> {
    let keywords = keywords::load_or_empty(config.keywords_path());
    let provider = YouTubeProvider::new(config.provider_settings())
        .context("Failed to build metadata provider")?;
    let pipeline = DetectionPipeline::new(Arc::new(provider), KeywordMatcher::new(keywords));

    let verdict = pipeline
        .detect(url)
        .await
        .with_context(|| format!("Detection failed for {url}"))?;

    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}
