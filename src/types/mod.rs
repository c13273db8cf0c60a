mod errors;
mod score;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use errors::ScoreError;
pub use score::RiskScore;

pub type TransactionId = String;
pub type UserId = String;

/// Risk band a score falls into.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high"
        }
    }

    /// Capitalized form used in alert descriptions ("Low", "Medium", "High").
    pub fn title(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High"
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Category attached to an investigative alert.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    HighRiskTransaction,
    UnusualIpLocation,
    HighRiskCountry,
    VelocityCheck,
    MultipleTransactions,
    SystemError
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::HighRiskTransaction => "high_risk_transaction",
            AlertType::UnusualIpLocation => "unusual_ip_location",
            AlertType::HighRiskCountry => "high_risk_country",
            AlertType::VelocityCheck => "velocity_check",
            AlertType::MultipleTransactions => "multiple_transactions",
            AlertType::SystemError => "system_error"
        }
    }
}

impl Display for AlertType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Credit,
    Debit,
    Prepaid,
    Other
}
