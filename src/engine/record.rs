use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::AssessedTransaction;
use crate::models::{Coordinates, Location, Transaction};
use crate::types::{AlertType, CardType, RiskLevel, TransactionId, UserId};

const REASON_SEPARATOR: &str = "|";

/// A single row of the input CSV file.
///
/// The CSV format is flat, so location fields are spread over their own
/// columns and folded back into a `Location` on conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: TransactionId,
    pub user_id: UserId,
    pub merchant_id: String,
    pub amount: Option<Decimal>,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
    pub card_type: Option<CardType>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub ip_address: Option<String>,
    pub device_id: Option<String>,
    pub merchant_category: Option<String>
}

impl From<TransactionRecord> for Transaction {
    fn from(record: TransactionRecord) -> Self {
        let coordinates = match (record.latitude, record.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
            _ => None
        };

        let location = Location {
            country: record.country,
            city: record.city,
            postal_code: record.postal_code,
            coordinates
        };

        Transaction {
            transaction_id: record.transaction_id,
            user_id: record.user_id,
            merchant_id: record.merchant_id,
            amount: record.amount,
            currency: record.currency,
            timestamp: record.timestamp,
            card_type: record.card_type,
            location: (location != Location::default()).then_some(location),
            ip_address: record.ip_address,
            device_id: record.device_id,
            merchant_category: record.merchant_category
        }
    }
}

/// A single row of the output CSV file.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentRecord {
    pub transaction_id: TransactionId,
    pub risk_score: String,
    pub risk_level: RiskLevel,
    pub create_alert: bool,
    pub alert_type: AlertType,
    pub alert_severity: RiskLevel,
    pub description: String,
    pub reasons: String,
    pub recommended_action: String
}

impl AssessmentRecord {
    pub const HEADERS: [&'static str; 9] = [
        "transaction_id",
        "risk_score",
        "risk_level",
        "create_alert",
        "alert_type",
        "alert_severity",
        "description",
        "reasons",
        "recommended_action",
    ];
}

impl From<&AssessedTransaction> for AssessmentRecord {
    fn from(assessed: &AssessedTransaction) -> Self {
        let assessment = &assessed.assessment;

        Self {
            transaction_id: assessed.transaction.transaction_id.clone(),
            risk_score: assessment.score.to_string(),
            risk_level: assessment.level,
            create_alert: assessment.create_alert,
            alert_type: assessment.alert_type,
            alert_severity: assessment.alert_severity,
            description: assessment.description.clone(),
            reasons: assessment.reasons.join(REASON_SEPARATOR),
            recommended_action: assessment.recommended_action.clone()
        }
    }
}
