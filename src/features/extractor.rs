use crate::features::errors::FeatureExtractionError;
use crate::history::HistoryProvider;
use crate::models::{FeatureVector, Transaction};
use crate::types::CardType;
use chrono::{Datelike, Timelike, Weekday};
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Placeholder used for categorical features the transaction does not carry.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Derives a `FeatureVector` from a transaction and the user's history.
///
/// Defaults for missing optional fields: amount is zero, country and merchant
/// category are `"unknown"`, card type flags are false, and a missing IP address
/// or device id counts as new.
pub struct FeatureExtractor {
    high_risk_countries: HashSet<String>
}

impl FeatureExtractor {
    /// `high_risk_countries` is expected in lowercase, as produced by `RiskConfig::high_risk_country_set`.
    pub fn new(high_risk_countries: HashSet<String>) -> Self {
        Self { high_risk_countries }
    }

    /// # Errors
    /// Returns `FeatureExtractionError` if the transaction is malformed (blank
    /// user id, negative amount) or a history lookup fails.
    pub fn extract<H: HistoryProvider + ?Sized>(&self, tx: &Transaction, history: &H) -> Result<FeatureVector, FeatureExtractionError> {
        if tx.user_id.trim().is_empty() {
            return Err(FeatureExtractionError::missing_user(tx))
        }

        let amount = tx.amount_or_zero();

        if amount < Decimal::ZERO {
            return Err(FeatureExtractionError::negative_amount(tx))
        }

        let velocity = history.lookup_velocity(&tx.user_id)
            .map_err(|error| FeatureExtractionError::history(tx, error))?;

        let is_new_ip = match tx.ip_address.as_deref() {
            Some(ip) => !history.lookup_known_ip(ip).map_err(|error| FeatureExtractionError::history(tx, error))?,
            None => true
        };

        let is_new_device = match tx.device_id.as_deref() {
            Some(device_id) => !history.lookup_known_device(device_id).map_err(|error| FeatureExtractionError::history(tx, error))?,
            None => true
        };

        let billing_location = history.lookup_billing_location(&tx.user_id)
            .map_err(|error| FeatureExtractionError::history(tx, error))?;

        let is_location_mismatch = match (tx.country(), billing_location.country.as_deref()) {
            (Some(origin), Some(billing)) => !origin.trim().eq_ignore_ascii_case(billing.trim()),
            _ => false
        };

        let weekday = tx.timestamp.weekday();
        let country = tx.country()
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());

        Ok(FeatureVector {
            amount,
            hour_of_day: tx.timestamp.hour(),
            day_of_week: weekday.num_days_from_sunday(),
            is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
            is_debit: tx.card_type == Some(CardType::Debit),
            is_credit: tx.card_type == Some(CardType::Credit),
            is_prepaid: tx.card_type == Some(CardType::Prepaid),
            is_high_risk_country: self.is_high_risk_country(&country),
            country,
            is_location_mismatch,
            is_new_ip,
            is_new_device,
            transaction_count_24h: velocity.count_24h,
            transaction_count_7d: velocity.count_7d,
            amount_sum_24h: velocity.sum_24h,
            declined_count_24h: velocity.declined_24h,
            merchant_category: tx.merchant_category
                .clone()
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
        })
    }

    fn is_high_risk_country(&self, country: &str) -> bool {
        self.high_risk_countries.contains(&country.trim().to_lowercase())
    }
}
