use crate::history::{HistoryError, HistoryProvider, Velocity};
use crate::models::Location;
use crate::types::UserId;
use csv::{ReaderBuilder, Trim};
use dashmap::{DashMap, DashSet};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

const LIST_SEPARATOR: char = ';';

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub velocity: Velocity,
    pub billing_location: Location
}

/// History provider holding a snapshot of user profiles in memory.
///
/// Users without a profile resolve to zero velocity and an unknown billing
/// location, which never produces a location mismatch.
///
/// Known devices and IPs form one global set shared by every user: a device
/// remembered for one user also counts as known for any other.
pub struct InMemoryHistory {
    profiles: DashMap<UserId, UserProfile>,
    known_devices: DashSet<String>,
    known_ips: DashSet<String>
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self {
            profiles: DashMap::new(),
            known_devices: DashSet::new(),
            known_ips: DashSet::new()
        }
    }

    /// Hydrates a history from a CSV snapshot of user profiles.
    ///
    /// Rows that fail to deserialize are skipped with a warning; an unreadable
    /// file is an error.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, HistoryError> {
        let path = path.as_ref();
        let snapshot_error = |source| HistoryError::Snapshot {
            path: path.display().to_string(),
            source
        };

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_path(path)
            .map_err(snapshot_error)?;

        let history = Self::new();

        for result in reader.deserialize::<ProfileRecord>() {
            match result {
                Ok(record) => history.insert_record(record),
                Err(error) => warn!("History snapshot row skipped: {error}")
            }
        }

        debug!("Loaded {} user profiles from {}", history.profiles.len(), path.display());

        Ok(history)
    }

    pub fn insert_profile(&self, user_id: &str, profile: UserProfile) {
        self.profiles.insert(user_id.to_string(), profile);
    }

    pub fn remember_device(&self, device_id: &str) {
        self.known_devices.insert(device_id.to_string());
    }

    pub fn remember_ip(&self, ip: &str) {
        self.known_ips.insert(ip.to_string());
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    fn insert_record(&self, record: ProfileRecord) {
        for device_id in split_list(&record.known_devices) {
            self.remember_device(device_id);
        }

        for ip in split_list(&record.known_ips) {
            self.remember_ip(ip);
        }

        let billing_location = match record.billing_country {
            Some(country) if !country.is_empty() => Location::in_country(&country),
            _ => Location::default()
        };

        self.insert_profile(&record.user_id, UserProfile {
            velocity: Velocity {
                count_24h: record.count_24h,
                count_7d: record.count_7d,
                sum_24h: record.sum_24h,
                declined_24h: record.declined_24h
            },
            billing_location
        });
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryProvider for InMemoryHistory {
    fn lookup_velocity(&self, user_id: &str) -> Result<Velocity, HistoryError> {
        Ok(self.profiles
            .get(user_id)
            .map(|profile| profile.velocity.clone())
            .unwrap_or_default())
    }

    fn lookup_known_device(&self, device_id: &str) -> Result<bool, HistoryError> {
        Ok(self.known_devices.contains(device_id))
    }

    fn lookup_known_ip(&self, ip: &str) -> Result<bool, HistoryError> {
        Ok(self.known_ips.contains(ip))
    }

    fn lookup_billing_location(&self, user_id: &str) -> Result<Location, HistoryError> {
        Ok(self.profiles
            .get(user_id)
            .map(|profile| profile.billing_location.clone())
            .unwrap_or_default())
    }
}

/// A single row of the user profile snapshot.
#[derive(Debug, Deserialize)]
struct ProfileRecord {
    user_id: UserId,
    #[serde(default)]
    count_24h: u32,
    #[serde(default)]
    count_7d: u32,
    #[serde(default)]
    sum_24h: Decimal,
    #[serde(default)]
    declined_24h: u32,
    billing_country: Option<String>,
    #[serde(default)]
    known_devices: String,
    #[serde(default)]
    known_ips: String
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}
