use serde::Deserialize;

/// Subset of the `videos.list` response the detector reads.
#[derive(Debug, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VideoItem {
    #[serde(default)]
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub description: Option<String>,
}

impl VideoItem {
    /// Description text, or `None` when it is missing or blank.
    pub fn description(&self) -> Option<&str> {
        self.snippet
            .as_ref()
            .and_then(|snippet| snippet.description.as_deref())
            .filter(|description| !description.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_description() {
        let body = r#"{"items":[{"id":"x","snippet":{"title":"T","description":"Hello"}}]}"#;
        let parsed: VideoListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.items[0].description(), Some("Hello"));
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let parsed: VideoListResponse = serde_json::from_str(r#"{"kind":"x"}"#).unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn test_blank_or_missing_description_is_none() {
        let body = r#"{"items":[{"snippet":{"description":"  \n"}},{"snippet":{}},{}]}"#;
        let parsed: VideoListResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.items.iter().all(|item| item.description().is_none()));
    }
}
