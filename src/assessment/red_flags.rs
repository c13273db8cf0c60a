use crate::models::{FeatureVector, Transaction};
use crate::types::RiskLevel;
use rust_decimal::Decimal;

/// Independent rules that escalate a medium-risk transaction to an alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedFlagEvaluator;

impl RedFlagEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn has_red_flag(&self, _tx: &Transaction, features: &FeatureVector) -> bool {
        let amount = features.amount;

        features.is_high_risk_country
            || (features.is_location_mismatch && amount > Decimal::from(200))
            || (features.is_new_ip && features.is_new_device && amount > Decimal::from(300))
            || features.transaction_count_24h > 5
            || features.declined_count_24h > 1
    }

    /// High risk always alerts; medium risk alerts only with a red flag; low risk never does.
    pub fn should_alert(&self, level: RiskLevel, tx: &Transaction, features: &FeatureVector) -> bool {
        match level {
            RiskLevel::High => true,
            RiskLevel::Medium => self.has_red_flag(tx, features),
            RiskLevel::Low => false
        }
    }
}
