use std::sync::Arc;

use crate::detector::DetectionPipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<DetectionPipeline>,
    /// Token the hub must echo when verifying a subscription, if one was set.
    pub verify_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(pipeline: DetectionPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            verify_token: None,
        }
    }

    pub fn with_verify_token(mut self, token: Option<String>) -> Self {
        self.verify_token = token.map(Arc::from);
        self
    }
}
