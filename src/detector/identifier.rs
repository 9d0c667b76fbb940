use regex::Regex;
use std::sync::LazyLock;

use crate::detector::{errors::DetectError, model::ContentIdentifier};

// Only the canonical watch page is accepted. `v` must be the first query
// parameter; the id runs until `&`, `#` or end of input.
static WATCH_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?youtube\.com/watch\?v=([^&#?/\s]+)(?:[&#]\S*)?$")
        .expect("Failed to compile watch url regex")
});

static VIDEO_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^&#?/\s]+$").expect("Failed to compile video id regex")
});

pub fn extract(url: &str) -> Result<ContentIdentifier, DetectError> {
    let candidate = url.trim();

    WATCH_URL_REGEX
        .captures(candidate)
        .and_then(|captures| captures.get(1))
        .map(|id| ContentIdentifier::new(id.as_str()))
        .ok_or_else(|| DetectError::InvalidUrl(url.to_string()))
}

/// Accept a bare video id, as delivered by push notifications.
pub fn from_video_id(raw: &str) -> Result<ContentIdentifier, DetectError> {
    let candidate = raw.trim();

    if VIDEO_ID_REGEX.is_match(candidate) {
        Ok(ContentIdentifier::new(candidate))
    } else {
        Err(DetectError::InvalidIdentifier(raw.to_string()))
    }
}


#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(input in ".*") {
            let _ = extract(&input);
        }

        #[test]
        fn test_extracted_ids_have_no_delimiters(
            id in "[A-Za-z0-9_-]{1,16}",
            tail in "(&[a-z]=[0-9]{1,3}){0,3}",
        ) {
            let url = format!("https://www.youtube.com/watch?v={id}{tail}");
            let extracted = extract(&url).unwrap();
            prop_assert_eq!(extracted.as_str(), id.as_str());
            prop_assert!(!extracted.as_str().contains(['&', '#', '?', '/']));
        }
    }
}
