// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: batch normalization orchestration

mod orchestrator;
mod processor;
mod progress;

pub use orchestrator::{NormalizationOutput, NormalizationPipeline, count_duplicates};
pub use processor::{ListingProcessor, ProcessingResult};
pub use progress::{PipelineStats, ProgressTracker};
