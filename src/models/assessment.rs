use serde::Serialize;

use crate::types::{AlertType, RiskLevel, RiskScore, TransactionId};

/// Outcome of assessing a single transaction.
///
/// Constructed per call and handed back to the intake workflow, which persists
/// `score`/`level` with the transaction and, when `create_alert` is set, an
/// alert built from `alert_draft`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub score: RiskScore,
    pub level: RiskLevel,
    pub create_alert: bool,
    pub alert_type: AlertType,
    /// Always mirrors `level`.
    pub alert_severity: RiskLevel,
    pub description: String,
    pub reasons: Vec<String>,
    pub recommended_action: String
}

impl RiskAssessment {
    /// The fixed result returned whenever any stage of an assessment fails.
    ///
    /// Flags the transaction for manual review instead of letting it through.
    pub fn fail_safe() -> Self {
        Self {
            score: RiskScore::FAIL_SAFE,
            level: RiskLevel::Medium,
            create_alert: true,
            alert_type: AlertType::SystemError,
            alert_severity: RiskLevel::Medium,
            description: "Risk assessment failed, flagged as precaution".to_string(),
            reasons: vec!["Risk assessment system error".to_string()],
            recommended_action: "Manual review required due to assessment failure".to_string()
        }
    }

    pub fn is_fail_safe(&self) -> bool {
        self.alert_type == AlertType::SystemError
    }

    /// Builds the alert record the intake workflow should persist, if any.
    pub fn alert_draft(&self, transaction_id: &str) -> Option<AlertDraft> {
        if !self.create_alert {
            return None
        }

        Some(AlertDraft {
            transaction_id: transaction_id.to_string(),
            alert_type: self.alert_type,
            severity: self.alert_severity,
            description: self.description.clone(),
            risk_score: self.score,
            reasons: self.reasons.clone(),
            recommended_action: self.recommended_action.clone()
        })
    }
}

/// Alert payload for the investigative queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDraft {
    pub transaction_id: TransactionId,
    pub alert_type: AlertType,
    pub severity: RiskLevel,
    pub description: String,
    pub risk_score: RiskScore,
    pub reasons: Vec<String>,
    pub recommended_action: String
}
