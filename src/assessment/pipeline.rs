use crate::assessment::classifier::RiskClassifier;
use crate::assessment::errors::AssessmentError;
use crate::assessment::insights::InsightGenerator;
use crate::assessment::red_flags::RedFlagEvaluator;
use crate::config::RiskConfig;
use crate::features::FeatureExtractor;
use crate::history::HistoryProvider;
use crate::models::{RiskAssessment, Transaction};
use crate::scoring::ModelCache;
use crate::types::RiskScore;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error, trace};

/// Scores a transaction and decides whether it warrants an alert.
///
/// Stateless between calls apart from the shared model cache, so a single
/// pipeline can serve any number of concurrent callers.
pub struct RiskAssessmentPipeline<H: HistoryProvider + ?Sized> {
    extractor: FeatureExtractor,
    models: Arc<ModelCache>,
    history: Arc<H>,
    classifier: RiskClassifier,
    red_flags: RedFlagEvaluator,
    insights: InsightGenerator
}

impl<H: HistoryProvider + ?Sized> RiskAssessmentPipeline<H> {
    pub fn new(config: &RiskConfig, models: Arc<ModelCache>, history: Arc<H>) -> Self {
        Self {
            extractor: FeatureExtractor::new(config.high_risk_country_set()),
            models,
            history,
            classifier: RiskClassifier::new(config.thresholds),
            red_flags: RedFlagEvaluator::new(),
            insights: InsightGenerator::new()
        }
    }

    /// Assesses a transaction, never failing.
    ///
    /// Any internal error is logged and replaced by `RiskAssessment::fail_safe`,
    /// which flags the transaction for manual review.
    pub async fn assess(&self, tx: &Transaction) -> RiskAssessment {
        match self.try_assess(tx).await {
            Ok(assessment) => assessment,
            Err(error) => {
                error!("Risk assessment for transaction [{}] failed, flagged as precaution: {error}", tx.transaction_id);
                RiskAssessment::fail_safe()
            }
        }
    }

    /// Runs the stages in order and surfaces the first failure.
    pub async fn try_assess(&self, tx: &Transaction) -> Result<RiskAssessment, AssessmentError> {
        let features = self.extractor.extract(tx, self.history.as_ref())?;
        trace!("Transaction [{}] features: {:?}", tx.transaction_id, features.entries());

        let model = self.models.get().await?;

        //NOTE: Models are pluggable, a panic in one must still end in the fail-safe result
        let raw_score = catch_unwind(AssertUnwindSafe(|| model.predict(&features)))
            .map_err(|_| AssessmentError::ModelPanicked { version: model.version().to_string() })?;

        let score = RiskScore::clamped(raw_score).map_err(|source| AssessmentError::InvalidScore {
            version: model.version().to_string(),
            source
        })?;

        let level = self.classifier.classify(score);
        let create_alert = self.red_flags.should_alert(level, tx, &features);
        let insights = self.insights.generate(tx, &features, score, level);

        debug!(
            "Transaction [{}] scored {} ({}) by model [{}], alert: {}",
            tx.transaction_id, score, level, model.version(), create_alert
        );

        Ok(RiskAssessment {
            score,
            level,
            create_alert,
            alert_type: insights.alert_type,
            alert_severity: insights.alert_severity,
            description: insights.description,
            reasons: insights.reasons,
            recommended_action: insights.recommended_action
        })
    }
}
