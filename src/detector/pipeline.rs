use serde::Serialize;
use std::sync::Arc;
use tracing::{Span, debug, info, instrument, warn};

use crate::detector::{
    errors::DetectError,
    identifier,
    matcher::KeywordMatcher,
    model::{ContentIdentifier, DetectionVerdict},
    normalize,
};
use crate::provider::MetadataProvider;

/// Stages of one detection run. Transitions only move forward; a failure in
/// any stage ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Parsing,
    Fetching,
    Normalizing,
    Matching,
    Done,
}

/// URL in, verdict out. Holds no per-request state, so one instance is shared
/// across all requests.
#[derive(Clone)]
pub struct DetectionPipeline {
    provider: Arc<dyn MetadataProvider + Send + Sync>,
    matcher: KeywordMatcher,
}

impl DetectionPipeline {
    pub fn new(
        provider: Arc<dyn MetadataProvider + Send + Sync>,
        matcher: KeywordMatcher,
    ) -> Self {
        Self { provider, matcher }
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    #[instrument(skip_all, fields(video_id, stage))]
    pub async fn detect(&self, url: &str) -> Result<DetectionVerdict, DetectError> {
        let span = Span::current();

        record_stage(&span, Stage::Parsing);
        let id = identifier::extract(url).inspect_err(|err| {
            warn!(error = %err, "Rejected video url");
        })?;

        self.classify(id, &span).await
    }

    /// Same as [`detect`](Self::detect) for callers that already hold an id,
    /// such as feed notifications. Starts at the fetching stage.
    #[instrument(skip_all, fields(video_id, stage))]
    pub async fn detect_id(
        &self,
        id: ContentIdentifier,
    ) -> Result<DetectionVerdict, DetectError> {
        self.classify(id, &Span::current()).await
    }

    async fn classify(
        &self,
        id: ContentIdentifier,
        span: &Span,
    ) -> Result<DetectionVerdict, DetectError> {
        span.record("video_id", tracing::field::display(&id));

        record_stage(span, Stage::Fetching);
        let degraded = self.matcher.is_degraded();
        let description = self.provider.fetch(&id).await.map_err(|err| {
            if err.is_not_found() {
                info!(error = %err, "Provider has no such video");
            } else {
                warn!(error = %err, "Metadata provider call failed");
            }
            DetectError::from(err)
        })?;

        let Some(description) = description else {
            record_stage(span, Stage::Done);
            info!("Video has no description; reporting no sponsorship");
            return Ok(DetectionVerdict::absent(id, degraded));
        };

        record_stage(span, Stage::Normalizing);
        let normalized = normalize::normalize(&description);
        debug!(chars = normalized.chars().count(), "Normalized description");

        record_stage(span, Stage::Matching);
        let matched = self.matcher.find(&normalized).map(str::to_owned);

        record_stage(span, Stage::Done);
        info!(
            sponsorship_detected = matched.is_some(),
            matched_keyword = matched.as_deref(),
            degraded,
            "Detection complete"
        );
        Ok(DetectionVerdict::matched(id, matched, degraded))
    }
}

fn record_stage(span: &Span, stage: Stage) {
    span.record("stage", tracing::field::debug(stage));
}
