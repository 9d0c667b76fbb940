use regex::Regex;
use std::sync::LazyLock;

// Case-insensitive so a second pass over lower-cased output removes nothing new.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S+").expect("Failed to compile url regex"));

static MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\S+").expect("Failed to compile mention regex"));

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

/// Reduce a raw description to the form keywords are matched against.
///
/// Links and `@mentions` are dropped before whitespace is collapsed so the
/// holes they leave disappear; case folding runs last.
pub fn normalize(text: &str) -> String {
    let without_urls = URL_REGEX.replace_all(text, "");
    let without_mentions = MENTION_REGEX.replace_all(&without_urls, "");
    let collapsed = WHITESPACE_REGEX.replace_all(&without_mentions, " ");

    collapsed.trim().to_lowercase()
}


#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_normalize_is_idempotent(text in ".*") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn test_normalize_output_shape(text in "\\PC*") {
            let out = normalize(&text);
            prop_assert_eq!(out.trim(), out.as_str());
            prop_assert!(!out.contains("  "));
        }
    }
}
