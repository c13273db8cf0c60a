use std::sync::Arc;

use thiserror::Error;

use crate::features::FeatureExtractionError;
use crate::scoring::ModelLoadError;
use crate::types::ScoreError;

/// Any failure inside the pipeline. Never leaves `RiskAssessmentPipeline::assess`.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("Feature extraction failed: {0}")]
    FeatureExtraction(#[from] FeatureExtractionError),
    #[error("Scoring model unavailable: {0}")]
    ModelLoad(#[from] Arc<ModelLoadError>),
    #[error("Model [{version}] produced an invalid score: {source}")]
    InvalidScore {
        version: String,
        #[source]
        source: ScoreError
    },
    #[error("Model [{version}] panicked while scoring")]
    ModelPanicked {
        version: String
    }
}
