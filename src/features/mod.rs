mod errors;
mod extractor;
#[cfg(test)]
mod tests;

pub use errors::FeatureExtractionError;
pub use extractor::{FeatureExtractor, UNKNOWN_CATEGORY};
