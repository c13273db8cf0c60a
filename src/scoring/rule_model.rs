use crate::models::FeatureVector;
use crate::scoring::errors::ModelLoadError;
use crate::scoring::{ModelLoader, ScoringModel};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Additive weights of the reference rule set.
///
/// Kept as decimals so sums like `0.1 + 0.2 + 0.2` land exactly on threshold values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleWeights {
    pub amount_over_1000: Decimal,
    pub amount_over_500: Decimal,
    pub amount_over_200: Decimal,
    pub new_ip: Decimal,
    pub new_device: Decimal,
    pub velocity_over_5: Decimal,
    pub velocity_over_2: Decimal,
    pub location_mismatch: Decimal
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            amount_over_1000: Decimal::new(3, 1),
            amount_over_500: Decimal::new(2, 1),
            amount_over_200: Decimal::new(1, 1),
            new_ip: Decimal::new(2, 1),
            new_device: Decimal::new(2, 1),
            velocity_over_5: Decimal::new(3, 1),
            velocity_over_2: Decimal::new(1, 1),
            location_mismatch: Decimal::new(3, 1)
        }
    }
}

/// Rule-based reference model: sums the weights of every matching condition
/// and clamps the total into `[0, 1]`. Amount and velocity tiers are exclusive.
#[derive(Debug, Clone)]
pub struct RuleBasedModel {
    version: String,
    weights: RuleWeights
}

impl RuleBasedModel {
    pub fn new(version: impl Into<String>, weights: RuleWeights) -> Self {
        Self {
            version: version.into(),
            weights
        }
    }

    pub fn weights(&self) -> &RuleWeights {
        &self.weights
    }
}

impl ScoringModel for RuleBasedModel {
    fn version(&self) -> &str {
        &self.version
    }

    fn predict(&self, features: &FeatureVector) -> f64 {
        let weights = &self.weights;
        let mut score = Decimal::ZERO;

        if features.amount > Decimal::ONE_THOUSAND {
            score += weights.amount_over_1000;
        } else if features.amount > Decimal::from(500) {
            score += weights.amount_over_500;
        } else if features.amount > Decimal::from(200) {
            score += weights.amount_over_200;
        }

        if features.is_new_ip {
            score += weights.new_ip;
        }

        if features.is_new_device {
            score += weights.new_device;
        }

        if features.transaction_count_24h > 5 {
            score += weights.velocity_over_5;
        } else if features.transaction_count_24h > 2 {
            score += weights.velocity_over_2;
        }

        if features.is_location_mismatch {
            score += weights.location_mismatch;
        }

        score.clamp(Decimal::ZERO, Decimal::ONE).to_f64().unwrap_or(f64::NAN)
    }
}

/// Serialized form of a rule model: `{"version": "...", "weights": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: String,
    #[serde(default)]
    pub weights: RuleWeights
}

/// Builds the reference model with its built-in weights. Never fails.
pub struct RuleModelLoader {
    version: String
}

impl RuleModelLoader {
    pub fn new(version: impl Into<String>) -> Self {
        Self { version: version.into() }
    }
}

impl ModelLoader for RuleModelLoader {
    fn load(&self) -> Result<Arc<dyn ScoringModel>, ModelLoadError> {
        Ok(Arc::new(RuleBasedModel::new(self.version.clone(), RuleWeights::default())))
    }
}

/// Loads a rule model from a JSON artifact on disk.
pub struct ArtifactModelLoader {
    path: PathBuf
}

impl ArtifactModelLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl ModelLoader for ArtifactModelLoader {
    fn load(&self) -> Result<Arc<dyn ScoringModel>, ModelLoadError> {
        let path = self.path.display().to_string();

        let content = fs::read_to_string(&self.path).map_err(|error| match error.kind() {
            ErrorKind::NotFound => ModelLoadError::ArtifactMissing { path: path.clone() },
            _ => ModelLoadError::Unreadable { path: path.clone(), source: error }
        })?;

        let artifact: ModelArtifact = serde_json::from_str(&content)
            .map_err(|error| ModelLoadError::Corrupt { path, source: error })?;

        Ok(Arc::new(RuleBasedModel::new(artifact.version, artifact.weights)))
    }
}
