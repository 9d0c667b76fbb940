//! Sponsorship keyword document.
//!
//! ```yaml
//! sponsorship_detector:
//!   sponsorship_keywords:
//!     - sponsor
//!     - use code
//! ```
//!
//! A bad or missing document never stops the process: [`load_or_empty`]
//! logs the problem and hands back an empty set, which makes every verdict
//! "not sponsored" until the file is fixed.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::detector::KeywordSet;

#[derive(Error, Debug)]
pub enum KeywordConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse keyword document: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Deserialize)]
struct KeywordDocument {
    sponsorship_detector: DetectorSection,
}

#[derive(Debug, Deserialize)]
struct DetectorSection {
    sponsorship_keywords: Vec<String>,
}

pub fn parse(yaml: &str) -> Result<KeywordSet, KeywordConfigError> {
    let document: KeywordDocument = serde_yaml::from_str(yaml)?;
    Ok(KeywordSet::new(
        document.sponsorship_detector.sponsorship_keywords,
    ))
}

pub fn load(path: &Path) -> Result<KeywordSet, KeywordConfigError> {
    let yaml = fs::read_to_string(path).map_err(|source| KeywordConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&yaml)
}

/// Load the keyword set, degrading to an empty set on any failure.
pub fn load_or_empty(path: &Path) -> KeywordSet {
    match load(path) {
        Ok(keywords) if keywords.is_empty() => {
            warn!(path = %path.display(), "Keyword document lists no usable keywords; detection is degraded");
            keywords
        }
        Ok(keywords) => {
            info!(path = %path.display(), count = keywords.len(), "Loaded sponsorship keywords");
            keywords
        }
        Err(error) => {
            warn!(
                path = %path.display(),
                %error,
                "Invalid keyword configuration; detection is degraded"
            );
            KeywordSet::empty()
        }
    }
}
