#![allow(dead_code)]

use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use sponsorscan::{
    app_state::AppState,
    detector::{DetectionPipeline, KeywordMatcher, KeywordSet},
    http::router,
    provider::{ProviderSettings, YouTubeProvider},
};

pub const API_KEY: &str = "test-api-key";

pub fn provider_for(base_url: &str) -> YouTubeProvider {
    YouTubeProvider::new(ProviderSettings {
        base_url: Url::parse(base_url).expect("mock server uri is a valid url"),
        api_key: API_KEY.to_string(),
        connect_timeout: Duration::from_secs(2),
        timeout: Duration::from_secs(2),
    })
    .expect("Failed to build provider")
}

pub fn test_app(base_url: &str, keywords: KeywordSet) -> Router {
    test_app_with_token(base_url, keywords, None)
}

pub fn test_app_with_token(
    base_url: &str,
    keywords: KeywordSet,
    verify_token: Option<&str>,
) -> Router {
    let pipeline = DetectionPipeline::new(
        Arc::new(provider_for(base_url)),
        KeywordMatcher::new(keywords),
    );
    router(AppState::new(pipeline).with_verify_token(verify_token.map(str::to_string)))
}
