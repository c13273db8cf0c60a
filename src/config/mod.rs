//! Process-start configuration for the risk engine.
//!
//! Sources are layered: built-in defaults, an optional TOML file, then
//! `RISK_ENGINE__*` environment variables.

mod errors;
mod thresholds;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::Deserialize;

pub use errors::ConfigError;
pub use thresholds::Thresholds;

pub const DEFAULT_CONFIG_PATH: &str = "config/risk.toml";
pub const CONFIG_PATH_VARIABLE: &str = "RISK_ENGINE_CONFIG";
const ENVIRONMENT_PREFIX: &str = "RISK_ENGINE";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub risk: RiskConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub engine: EngineConfig
}

/// Decision settings shared by the extractor and the classifier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskConfig {
    #[serde(default)]
    pub thresholds: Thresholds,
    /// Countries whose transactions are always treated as a red flag.
    #[serde(default)]
    pub high_risk_countries: Vec<String>
}

impl RiskConfig {
    /// High-risk countries normalized for case-insensitive lookup.
    pub fn high_risk_country_set(&self) -> HashSet<String> {
        self.high_risk_countries
            .iter()
            .map(|country| country.trim().to_lowercase())
            .filter(|country| !country.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Version reported by the built-in rule model.
    #[serde(default = "default_model_version")]
    pub version: String,
    /// Optional JSON rule-weight artifact; the built-in weights are used when absent.
    #[serde(default)]
    pub artifact_path: Option<PathBuf>
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            version: default_model_version(),
            artifact_path: None
        }
    }
}

fn default_model_version() -> String {
    "rules-v1".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryConfig {
    /// CSV snapshot of user profiles used to hydrate the in-memory history.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
    #[serde(default = "default_backpressure")]
    pub backpressure: usize
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_in_flight: default_max_in_flight(),
            backpressure: default_backpressure()
        }
    }
}

fn default_max_in_flight() -> usize {
    64
}

fn default_backpressure() -> usize {
    256
}

/// `RISK_ENGINE__SECTION__KEY` variables; list keys take comma-separated values.
fn environment() -> Environment {
    Environment::with_prefix(ENVIRONMENT_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("risk.high_risk_countries")
}

impl AppConfig {
    /// Loads from `RISK_ENGINE_CONFIG` if set, otherwise `config/risk.toml` when it exists.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_VARIABLE)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        Self::load_from_path(path)
    }

    /// Loads from a specific path. A missing file falls back to defaults and environment.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_environment(path.as_ref(), environment())
    }

    fn load_with_environment(path: &Path, environment: Environment) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(environment)
            .build()
            .context("Failed to build configuration")?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validated()
    }

    fn validated(self) -> Result<Self> {
        self.risk.thresholds.validated()?;

        if self.engine.max_in_flight == 0 {
            return Err(ConfigError::ZeroCapacity("engine.max_in_flight").into())
        }

        if self.engine.backpressure == 0 {
            return Err(ConfigError::ZeroCapacity("engine.backpressure").into())
        }

        Ok(self)
    }
}
