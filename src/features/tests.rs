use super::{FeatureExtractionError, FeatureExtractor, UNKNOWN_CATEGORY};

use std::collections::HashSet;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use crate::fixtures::{create_transaction, StaticHistory, UnavailableHistory};
use crate::history::Velocity;
use crate::models::Location;
use crate::types::CardType;

fn create_extractor(countries: &[&str]) -> FeatureExtractor {
    FeatureExtractor::new(countries.iter().map(|country| country.to_lowercase()).collect::<HashSet<_>>())
}

#[test]
fn test_familiar_transaction_produces_benign_features() -> Result<()> {
    let extractor = create_extractor(&[]);
    let transaction = create_transaction("tx-1", Some(Decimal::from(100)));

    let features = extractor.extract(&transaction, &StaticHistory::familiar())?;

    assert_eq!(features.amount, Decimal::from(100));
    assert_eq!(features.hour_of_day, 14);
    assert_eq!(features.day_of_week, 3);
    assert!(!features.is_weekend);
    assert!(features.is_credit);
    assert!(!features.is_debit);
    assert!(!features.is_prepaid);
    assert_eq!(features.country, "US");
    assert!(!features.is_high_risk_country);
    assert!(!features.is_location_mismatch);
    assert!(!features.is_new_ip);
    assert!(!features.is_new_device);
    assert_eq!(features.merchant_category, "shopping");

    Ok(())
}

#[test]
fn test_missing_optional_fields_resolve_to_defaults() -> Result<()> {
    let extractor = create_extractor(&[]);
    let mut transaction = create_transaction("tx-1", None);
    transaction.card_type = None;
    transaction.location = None;
    transaction.ip_address = None;
    transaction.device_id = None;
    transaction.merchant_category = None;

    let features = extractor.extract(&transaction, &StaticHistory::familiar())?;

    assert_eq!(features.amount, Decimal::ZERO);
    assert_eq!(features.country, UNKNOWN_CATEGORY);
    assert_eq!(features.merchant_category, UNKNOWN_CATEGORY);
    assert!(!features.is_debit && !features.is_credit && !features.is_prepaid);
    assert!(!features.is_location_mismatch);
    assert!(features.is_new_ip);
    assert!(features.is_new_device);

    Ok(())
}

#[test]
fn test_time_features_follow_transaction_timestamp() -> Result<()> {
    let extractor = create_extractor(&[]);
    let mut transaction = create_transaction("tx-1", Some(Decimal::from(10)));
    transaction.timestamp = Utc.with_ymd_and_hms(2024, 3, 17, 23, 5, 0).unwrap();

    let features = extractor.extract(&transaction, &StaticHistory::familiar())?;

    assert_eq!(features.hour_of_day, 23);
    assert_eq!(features.day_of_week, 0);
    assert!(features.is_weekend);

    Ok(())
}

#[test]
fn test_high_risk_country_is_matched_case_insensitively() -> Result<()> {
    let extractor = create_extractor(&["XA"]);
    let mut transaction = create_transaction("tx-1", Some(Decimal::from(10)));
    transaction.location = Some(Location::in_country("xa"));

    let history = StaticHistory {
        billing_location: Location::in_country("XA"),
        ..StaticHistory::familiar()
    };

    let features = extractor.extract(&transaction, &history)?;

    assert!(features.is_high_risk_country);
    assert!(!features.is_location_mismatch);

    Ok(())
}

#[test]
fn test_location_mismatch_requires_both_countries() -> Result<()> {
    let extractor = create_extractor(&[]);
    let mut transaction = create_transaction("tx-1", Some(Decimal::from(10)));
    transaction.location = Some(Location::in_country("GB"));

    let mismatched = extractor.extract(&transaction, &StaticHistory::familiar())?;
    assert!(mismatched.is_location_mismatch);

    let unknown_billing = StaticHistory {
        billing_location: Location::default(),
        ..StaticHistory::familiar()
    };
    let unresolved = extractor.extract(&transaction, &unknown_billing)?;
    assert!(!unresolved.is_location_mismatch);

    Ok(())
}

#[test]
fn test_unknown_identifiers_are_new_and_velocity_is_copied() -> Result<()> {
    let extractor = create_extractor(&[]);
    let transaction = create_transaction("tx-1", Some(Decimal::from(10)));
    let history = StaticHistory {
        velocity: Velocity {
            count_24h: 6,
            count_7d: 21,
            sum_24h: Decimal::from(1800),
            declined_24h: 2
        },
        known_ip: false,
        known_device: false,
        ..StaticHistory::familiar()
    };

    let features = extractor.extract(&transaction, &history)?;

    assert!(features.is_new_ip);
    assert!(features.is_new_device);
    assert_eq!(features.transaction_count_24h, 6);
    assert_eq!(features.transaction_count_7d, 21);
    assert_eq!(features.amount_sum_24h, Decimal::from(1800));
    assert_eq!(features.declined_count_24h, 2);

    Ok(())
}

#[test]
fn test_card_type_flags_are_exclusive() -> Result<()> {
    let extractor = create_extractor(&[]);
    let mut transaction = create_transaction("tx-1", Some(Decimal::from(10)));

    transaction.card_type = Some(CardType::Prepaid);
    let prepaid = extractor.extract(&transaction, &StaticHistory::familiar())?;
    assert!(prepaid.is_prepaid && !prepaid.is_credit && !prepaid.is_debit);

    transaction.card_type = Some(CardType::Other);
    let other = extractor.extract(&transaction, &StaticHistory::familiar())?;
    assert!(!other.is_prepaid && !other.is_credit && !other.is_debit);

    Ok(())
}

#[test]
fn test_malformed_transactions_are_rejected() {
    let extractor = create_extractor(&[]);

    let negative = create_transaction("tx-1", Some(Decimal::from(-5)));
    assert!(matches!(
        extractor.extract(&negative, &StaticHistory::familiar()),
        Err(FeatureExtractionError::NegativeAmount { .. })
    ));

    let mut anonymous = create_transaction("tx-2", Some(Decimal::from(5)));
    anonymous.user_id = "  ".to_string();
    assert!(matches!(
        extractor.extract(&anonymous, &StaticHistory::familiar()),
        Err(FeatureExtractionError::MissingUser { .. })
    ));
}

#[test]
fn test_history_failures_are_wrapped() {
    let extractor = create_extractor(&[]);
    let transaction = create_transaction("tx-1", Some(Decimal::from(5)));

    let result = extractor.extract(&transaction, &UnavailableHistory);

    assert!(matches!(result, Err(FeatureExtractionError::History { ref transaction_id, .. }) if transaction_id == "tx-1"));
}

#[test]
fn test_extraction_is_deterministic() -> Result<()> {
    let extractor = create_extractor(&["XA"]);
    let transaction = create_transaction("tx-1", Some(Decimal::new(123456, 2)));
    let history = StaticHistory::familiar();

    assert_eq!(extractor.extract(&transaction, &history)?, extractor.extract(&transaction, &history)?);

    Ok(())
}
