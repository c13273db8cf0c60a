use rust_decimal::Decimal;
use serde::Serialize;

/// Derived, fixed-shape summary of a transaction used as scoring input.
///
/// Created fresh for every assessment and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    pub amount: Decimal,
    /// 0-23, UTC.
    pub hour_of_day: u32,
    /// 0 = Sunday through 6 = Saturday.
    pub day_of_week: u32,
    pub is_weekend: bool,
    pub is_debit: bool,
    pub is_credit: bool,
    pub is_prepaid: bool,
    pub country: String,
    pub is_high_risk_country: bool,
    pub is_location_mismatch: bool,
    pub is_new_ip: bool,
    pub is_new_device: bool,
    pub transaction_count_24h: u32,
    pub transaction_count_7d: u32,
    pub amount_sum_24h: Decimal,
    pub declined_count_24h: u32,
    pub merchant_category: String
}

/// A single feature value, used by the ordered name/value view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(Decimal),
    Count(u32),
    Flag(bool),
    Category(String)
}

impl FeatureVector {
    pub const FEATURE_COUNT: usize = 17;

    /// Features as ordered `(name, value)` pairs, mainly for diagnostics.
    pub fn entries(&self) -> Vec<(&'static str, FeatureValue)> {
        vec![
            ("amount", FeatureValue::Number(self.amount)),
            ("hour_of_day", FeatureValue::Count(self.hour_of_day)),
            ("day_of_week", FeatureValue::Count(self.day_of_week)),
            ("is_weekend", FeatureValue::Flag(self.is_weekend)),
            ("is_debit", FeatureValue::Flag(self.is_debit)),
            ("is_credit", FeatureValue::Flag(self.is_credit)),
            ("is_prepaid", FeatureValue::Flag(self.is_prepaid)),
            ("country", FeatureValue::Category(self.country.clone())),
            ("is_high_risk_country", FeatureValue::Flag(self.is_high_risk_country)),
            ("is_location_mismatch", FeatureValue::Flag(self.is_location_mismatch)),
            ("is_new_ip", FeatureValue::Flag(self.is_new_ip)),
            ("is_new_device", FeatureValue::Flag(self.is_new_device)),
            ("transaction_count_24h", FeatureValue::Count(self.transaction_count_24h)),
            ("transaction_count_7d", FeatureValue::Count(self.transaction_count_7d)),
            ("amount_sum_24h", FeatureValue::Number(self.amount_sum_24h)),
            ("declined_count_24h", FeatureValue::Count(self.declined_count_24h)),
            ("merchant_category", FeatureValue::Category(self.merchant_category.clone())),
        ]
    }
}
