pub mod errors;
pub mod identifier;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod pipeline;

pub use errors::DetectError;
pub use identifier::{extract, from_video_id};
pub use matcher::{KeywordMatcher, KeywordSet};
pub use model::{ContentIdentifier, DetectionVerdict};
pub use normalize::normalize;
pub use pipeline::{DetectionPipeline, Stage};
