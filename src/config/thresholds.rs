use crate::config::errors::ConfigError;
use serde::Deserialize;

/// Cut points mapping a score to a risk band.
///
/// `low` is validated but intentionally never consulted when classifying:
/// there is no band below "low". It is kept as an inert floor for future
/// refinement.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub low: f64,
    pub medium: f64,
    pub high: f64
}

impl Thresholds {
    pub fn new(low: f64, medium: f64, high: f64) -> Result<Self, ConfigError> {
        Self { low, medium, high }.validated()
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        let ordered = 0.0 <= self.low
            && self.low <= self.medium
            && self.medium <= self.high
            && self.high <= 1.0;

        if !ordered {
            return Err(ConfigError::InvalidThresholds {
                low: self.low,
                medium: self.medium,
                high: self.high
            })
        }

        Ok(self)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low: 0.3,
            medium: 0.7,
            high: 0.9
        }
    }
}
