//! Transaction fraud-risk assessment.
//!
//! A `RiskAssessmentPipeline` derives features from a transaction and the
//! user's history, scores them with a cached model, classifies the score into
//! a risk band and decides whether an investigative alert is warranted. Any
//! internal failure yields a fixed fail-safe assessment instead of an error.

pub mod assessment;
pub mod config;
pub mod engine;
pub mod features;
pub mod history;
pub mod models;
pub mod scoring;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use assessment::{AssessmentError, RiskAssessmentPipeline};
pub use crate::config::{AppConfig, Thresholds};
pub use history::{HistoryProvider, InMemoryHistory};
pub use models::{AlertDraft, RiskAssessment, Transaction};
pub use scoring::{ModelCache, ScoringModel};
