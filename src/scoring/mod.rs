//! Scoring models and the process-scoped cache that hands them out.

mod errors;
mod model_cache;
mod rule_model;

use std::sync::Arc;

use crate::models::FeatureVector;

pub use errors::ModelLoadError;
pub use model_cache::ModelCache;
pub use rule_model::{ArtifactModelLoader, ModelArtifact, RuleBasedModel, RuleModelLoader, RuleWeights};

/// A versioned model mapping features to a fraud-risk score.
///
/// Implementations must be deterministic: the same features and version
/// always produce the same score, and that score lies in `[0, 1]`.
pub trait ScoringModel: Send + Sync + 'static {
    fn version(&self) -> &str;
    fn predict(&self, features: &FeatureVector) -> f64;
}

/// Constructs the model served by a `ModelCache`. Runs on the blocking pool.
pub trait ModelLoader: Send + Sync + 'static {
    fn load(&self) -> Result<Arc<dyn ScoringModel>, ModelLoadError>;
}
