use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CardType, TransactionId, UserId};

/// A transaction as handed over by the intake workflow.
///
/// The pipeline only ever reads this struct. Optional fields resolve to the
/// defaults documented on `FeatureExtractor` when features are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier assigned by the transaction store.
    pub transaction_id: TransactionId,
    /// The account holder that initiated the transaction.
    pub user_id: UserId,
    /// The merchant the funds are going to.
    pub merchant_id: String,
    /// Currency-denominated amount; treated as zero when absent.
    pub amount: Option<Decimal>,
    pub currency: String,
    /// When the transaction happened. Time features are derived from this, never from the wall clock.
    pub timestamp: DateTime<Utc>,
    pub card_type: Option<CardType>,
    /// Location resolved from the originating IP address.
    pub location: Option<Location>,
    pub ip_address: Option<String>,
    pub device_id: Option<String>,
    pub merchant_category: Option<String>
}

impl Transaction {
    /// Amount with the zero default applied.
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }

    /// Country of the IP-derived location, if one is known.
    pub fn country(&self) -> Option<&str> {
        self.location.as_ref().and_then(|location| location.country.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub country: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub coordinates: Option<Coordinates>
}

impl Location {
    pub fn in_country(country: &str) -> Self {
        Self {
            country: Some(country.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64
}
