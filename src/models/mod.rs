mod assessment;
mod features;
mod transaction;

pub use assessment::{AlertDraft, RiskAssessment};
pub use features::{FeatureValue, FeatureVector};
pub use transaction::{Coordinates, Location, Transaction};
