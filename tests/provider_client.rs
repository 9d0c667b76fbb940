mod helpers;

use helpers::{API_KEY, provider_for};
use serde_json::json;
use sponsorscan::{
    detector::extract,
    provider::{MetadataProvider, ProviderError},
};
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn videos(items: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "kind": "youtube#videoListResponse", "items": items }))
}

#[tokio::test]
async fn test_fetch_description() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "abc123"))
        .and(query_param("part", "snippet"))
        .and(query_param("key", API_KEY))
        .respond_with(videos(json!([
            { "id": "abc123", "snippet": { "title": "T", "description": "Sponsored by Acme" } }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server.uri());
    let id = extract("https://www.youtube.com/watch?v=abc123").unwrap();
    let description = provider.fetch(&id).await.unwrap();

    assert_eq!(description.as_deref(), Some("Sponsored by Acme"));
}

#[tokio::test]
async fn test_fetch_empty_description_is_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(videos(json!([{ "snippet": { "description": "" } }])))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server.uri());
    let id = extract("youtube.com/watch?v=abc123").unwrap();

    assert_eq!(provider.fetch(&id).await.unwrap(), None);
}

#[tokio::test]
async fn test_fetch_missing_description_is_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(videos(json!([{ "snippet": { "title": "No description" } }])))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server.uri());
    let id = extract("youtube.com/watch?v=abc123").unwrap();

    assert_eq!(provider.fetch(&id).await.unwrap(), None);
}

#[tokio::test]
async fn test_fetch_no_items_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(videos(json!([])))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server.uri());
    let id = extract("youtube.com/watch?v=missing").unwrap();

    match provider.fetch(&id).await {
        Err(ProviderError::NotFound(got)) => assert_eq!(got, id),
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server.uri());
    let id = extract("youtube.com/watch?v=abc123").unwrap();

    match provider.fetch(&id).await {
        Err(ProviderError::Http { status }) => assert_eq!(status.as_u16(), 403),
        other => panic!("Expected HTTP 403 error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server.uri());
    let id = extract("youtube.com/watch?v=abc123").unwrap();
    let err = provider.fetch(&id).await.unwrap_err();

    assert!(!err.is_not_found());
    // `expect(1)` is verified when the server drops.
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server.uri());
    let id = extract("youtube.com/watch?v=abc123").unwrap();

    assert!(matches!(
        provider.fetch(&id).await,
        Err(ProviderError::Decode(_))
    ));
}

#[tokio::test]
async fn test_fetch_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(videos(json!([])).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server.uri());
    let id = extract("youtube.com/watch?v=slow").unwrap();

    assert!(matches!(
        provider.fetch(&id).await,
        Err(ProviderError::RequestTimeout)
    ));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Nothing listens on port 9 (discard) in test environments.
    let provider = provider_for("http://127.0.0.1:9");
    let id = extract("youtube.com/watch?v=abc123").unwrap();
    let err = provider.fetch(&id).await.unwrap_err();

    assert!(!err.is_not_found());
}
