mod classifier;
mod errors;
mod insights;
mod pipeline;
mod red_flags;

pub use classifier::RiskClassifier;
pub use errors::AssessmentError;
pub use insights::{InsightGenerator, Insights};
pub use pipeline::RiskAssessmentPipeline;
pub use red_flags::RedFlagEvaluator;
