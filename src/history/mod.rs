mod errors;
mod memory_history;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Location;

pub use errors::HistoryError;
pub use memory_history::{InMemoryHistory, UserProfile};

/// Trailing-window activity for a single user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub count_24h: u32,
    pub count_7d: u32,
    pub sum_24h: Decimal,
    pub declined_24h: u32
}

/// Read-only access to historical aggregates the features are derived from.
///
/// Lookups must be deterministic for a given snapshot. Implementations backed
/// by remote stores are expected to enforce their own timeouts and report them
/// as `HistoryError` rather than block.
pub trait HistoryProvider: Send + Sync + 'static {
    fn lookup_velocity(&self, user_id: &str) -> Result<Velocity, HistoryError>;
    fn lookup_known_device(&self, device_id: &str) -> Result<bool, HistoryError>;
    fn lookup_known_ip(&self, ip: &str) -> Result<bool, HistoryError>;
    fn lookup_billing_location(&self, user_id: &str) -> Result<Location, HistoryError>;
}
