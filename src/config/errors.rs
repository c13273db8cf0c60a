use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid thresholds: expected 0 <= low <= medium <= high <= 1, got low={low}, medium={medium}, high={high}")]
    InvalidThresholds {
        low: f64,
        medium: f64,
        high: f64
    },
    #[error("Invalid engine setting: {0} must be greater than zero")]
    ZeroCapacity(&'static str)
}
