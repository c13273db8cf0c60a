use crate::models::{FeatureVector, Transaction};
use crate::types::{AlertType, RiskLevel, RiskScore};
use rust_decimal::Decimal;

const FALLBACK_REASON: &str = "Combination of factors resulted in elevated risk score";

/// Human-readable explanation attached to an assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub reasons: Vec<String>,
    pub alert_type: AlertType,
    pub alert_severity: RiskLevel,
    pub description: String,
    pub recommended_action: String
}

/// One entry of the ordered checklist. `alert_type`, when present, replaces
/// whatever an earlier entry set.
struct Check {
    applies: fn(&FeatureVector) -> bool,
    reason: &'static str,
    alert_type: Option<AlertType>
}

//NOTE: Order is observable: the last matching entry decides the alert type
const CHECKLIST: [Check; 7] = [
    Check {
        applies: is_large_amount,
        reason: "Unusually high transaction amount",
        alert_type: None
    },
    Check {
        applies: is_new_ip,
        reason: "Transaction from new IP address",
        alert_type: None
    },
    Check {
        applies: is_new_device,
        reason: "Transaction from new device",
        alert_type: None
    },
    Check {
        applies: is_location_mismatch,
        reason: "Location mismatch with billing address",
        alert_type: Some(AlertType::UnusualIpLocation)
    },
    Check {
        applies: is_high_risk_country,
        reason: "Transaction from high-risk country",
        alert_type: Some(AlertType::HighRiskCountry)
    },
    Check {
        applies: is_high_velocity,
        reason: "Unusual number of transactions in last 24 hours",
        alert_type: Some(AlertType::VelocityCheck)
    },
    Check {
        applies: has_repeated_declines,
        reason: "Multiple declined transactions in last 24 hours",
        alert_type: Some(AlertType::MultipleTransactions)
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct InsightGenerator;

impl InsightGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, _tx: &Transaction, features: &FeatureVector, score: RiskScore, level: RiskLevel) -> Insights {
        let mut reasons = Vec::new();
        let mut alert_type = AlertType::HighRiskTransaction;

        for check in CHECKLIST.iter().filter(|check| (check.applies)(features)) {
            reasons.push(check.reason.to_string());

            if let Some(overriding) = check.alert_type {
                alert_type = overriding;
            }
        }

        if reasons.is_empty() {
            reasons.push(FALLBACK_REASON.to_string());
        }

        Insights {
            reasons,
            alert_type,
            alert_severity: level,
            description: format!("{} risk transaction detected (score: {})", level.title(), score),
            recommended_action: recommended_action(level).to_string()
        }
    }
}

fn recommended_action(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "Hold transaction for manual review",
        RiskLevel::Medium => "Additional verification recommended",
        RiskLevel::Low => "Normal processing"
    }
}

fn is_large_amount(features: &FeatureVector) -> bool {
    features.amount > Decimal::ONE_THOUSAND
}

fn is_new_ip(features: &FeatureVector) -> bool {
    features.is_new_ip
}

fn is_new_device(features: &FeatureVector) -> bool {
    features.is_new_device
}

fn is_location_mismatch(features: &FeatureVector) -> bool {
    features.is_location_mismatch
}

fn is_high_risk_country(features: &FeatureVector) -> bool {
    features.is_high_risk_country
}

fn is_high_velocity(features: &FeatureVector) -> bool {
    features.transaction_count_24h > 5
}

fn has_repeated_declines(features: &FeatureVector) -> bool {
    features.declined_count_24h > 1
}
