use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Opaque token addressing one video at the metadata provider.
///
/// Only [`crate::detector::identifier::extract`] constructs these, so a value
/// in hand is always non-empty and free of URL delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContentIdentifier(String);

impl ContentIdentifier {
    pub(crate) fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContentIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Outcome of one pipeline run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionVerdict {
    pub identifier: ContentIdentifier,
    pub sponsorship_detected: bool,
    pub matched_keyword: Option<String>,
    pub description_present: bool,
    pub degraded: bool,
}

impl DetectionVerdict {
    pub(crate) fn absent(identifier: ContentIdentifier, degraded: bool) -> Self {
        Self {
            identifier,
            sponsorship_detected: false,
            matched_keyword: None,
            description_present: false,
            degraded,
        }
    }

    pub(crate) fn matched(
        identifier: ContentIdentifier,
        matched_keyword: Option<String>,
        degraded: bool,
    ) -> Self {
        Self {
            identifier,
            sponsorship_detected: matched_keyword.is_some(),
            matched_keyword,
            description_present: true,
            degraded,
        }
    }
}
