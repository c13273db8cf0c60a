use crate::types::errors::ScoreError;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A risk score, always within `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    pub const MIN: RiskScore = RiskScore(0.0);
    pub const MAX: RiskScore = RiskScore(1.0);
    /// Score reported when an assessment could not be completed.
    pub const FAIL_SAFE: RiskScore = RiskScore(0.5);

    /// Clamps a raw model output into the score range.
    ///
    /// # Errors
    /// Returns `ScoreError::NotFinite` for NaN or infinite input, since clamping
    /// those would hide a broken model.
    pub fn clamped(raw: f64) -> Result<Self, ScoreError> {
        if !raw.is_finite() {
            return Err(ScoreError::NotFinite(raw))
        }

        Ok(RiskScore(raw.clamp(0.0, 1.0)))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Display for RiskScore {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.2}", self.0)
    }
}
