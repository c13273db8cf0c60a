use crate::config::Thresholds;
use crate::types::{RiskLevel, RiskScore};

/// Maps a score to a risk band. Upper bands are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct RiskClassifier {
    thresholds: Thresholds
}

impl RiskClassifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn classify(&self, score: RiskScore) -> RiskLevel {
        //NOTE: thresholds.low is not consulted, nothing sits below the low band
        if score.value() >= self.thresholds.high {
            RiskLevel::High
        } else if score.value() >= self.thresholds.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
