use std::sync::Arc;
use tracing::debug;

/// Lower-cased, trimmed sponsorship phrases in configuration order.
///
/// Internal whitespace runs are collapsed to a single space so phrases line up
/// with normalized text. Blank entries are dropped, which keeps every element
/// non-empty. Cloning is cheap; the phrases are shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Arc<[String]>,
}

impl KeywordSet {
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = raw
            .into_iter()
            .map(|keyword| {
                keyword
                    .as_ref()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .to_lowercase()
            })
            .filter(|keyword| !keyword.is_empty())
            .collect();

        Self {
            keywords: keywords.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: KeywordSet,
}

impl KeywordMatcher {
    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// No keywords configured; every match is a fail-open `false`.
    pub fn is_degraded(&self) -> bool {
        self.keywords.is_empty()
    }

    /// First keyword, in configuration order, contained in `normalized`.
    ///
    /// Plain substring containment: "sponsor" matches inside "sponsorship".
    pub fn find(&self, normalized: &str) -> Option<&str> {
        if self.is_degraded() {
            debug!("No sponsorship keywords configured; reporting no sponsorship");
            return None;
        }

        self.keywords.iter().find(|keyword| normalized.contains(keyword))
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.find(normalized).is_some()
    }
}
