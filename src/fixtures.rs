//! Shared builders and deterministic history fakes for unit tests.

use std::io;
use std::io::Write;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::subscriber::DefaultGuard;

use crate::history::{HistoryError, HistoryProvider, Velocity};
use crate::models::{FeatureVector, Location, Transaction};
use crate::types::CardType;

/// A Wednesday afternoon transaction from a familiar IP/device in the billing country.
pub fn create_transaction(transaction_id: &str, amount: Option<Decimal>) -> Transaction {
    Transaction {
        transaction_id: transaction_id.to_string(),
        user_id: "user-1".to_string(),
        merchant_id: "merchant-1".to_string(),
        amount,
        currency: "USD".to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 3, 13, 14, 30, 0).unwrap(),
        card_type: Some(CardType::Credit),
        location: Some(Location::in_country("US")),
        ip_address: Some("10.0.0.1".to_string()),
        device_id: Some("device-1".to_string()),
        merchant_category: Some("shopping".to_string())
    }
}

/// Features with every risk signal switched off and a 100.00 amount.
pub fn baseline_features() -> FeatureVector {
    FeatureVector {
        amount: Decimal::from(100),
        hour_of_day: 14,
        day_of_week: 3,
        is_weekend: false,
        is_debit: false,
        is_credit: true,
        is_prepaid: false,
        country: "US".to_string(),
        is_high_risk_country: false,
        is_location_mismatch: false,
        is_new_ip: false,
        is_new_device: false,
        transaction_count_24h: 0,
        transaction_count_7d: 0,
        amount_sum_24h: Decimal::ZERO,
        declined_count_24h: 0,
        merchant_category: "shopping".to_string()
    }
}

/// History that answers every lookup with the same fixed values.
#[derive(Debug, Clone)]
pub struct StaticHistory {
    pub velocity: Velocity,
    pub billing_location: Location,
    pub known_ip: bool,
    pub known_device: bool
}

impl StaticHistory {
    /// The user's IP and device are known and billing is in the US.
    pub fn familiar() -> Self {
        Self {
            velocity: Velocity::default(),
            billing_location: Location::in_country("US"),
            known_ip: true,
            known_device: true
        }
    }
}

impl HistoryProvider for StaticHistory {
    fn lookup_velocity(&self, _user_id: &str) -> Result<Velocity, HistoryError> {
        Ok(self.velocity.clone())
    }

    fn lookup_known_device(&self, _device_id: &str) -> Result<bool, HistoryError> {
        Ok(self.known_device)
    }

    fn lookup_known_ip(&self, _ip: &str) -> Result<bool, HistoryError> {
        Ok(self.known_ip)
    }

    fn lookup_billing_location(&self, _user_id: &str) -> Result<Location, HistoryError> {
        Ok(self.billing_location.clone())
    }
}

/// History whose every lookup fails, as a timed-out remote store would.
pub struct UnavailableHistory;

impl HistoryProvider for UnavailableHistory {
    fn lookup_velocity(&self, user_id: &str) -> Result<Velocity, HistoryError> {
        Err(HistoryError::Timeout { key: user_id.to_string() })
    }

    fn lookup_known_device(&self, device_id: &str) -> Result<bool, HistoryError> {
        Err(HistoryError::Timeout { key: device_id.to_string() })
    }

    fn lookup_known_ip(&self, ip: &str) -> Result<bool, HistoryError> {
        Err(HistoryError::Timeout { key: ip.to_string() })
    }

    fn lookup_billing_location(&self, user_id: &str) -> Result<Location, HistoryError> {
        Err(HistoryError::Unavailable(format!("billing location for {user_id}")))
    }
}

/// In-memory sink for log lines emitted while a test runs.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>
}

impl CapturedLogs {
    /// Routes this thread's logs into the buffer until the guard is dropped.
    pub fn install(&self) -> DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
