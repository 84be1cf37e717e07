mod config;
mod policy;
mod rules;

pub use config::{ClassificationThresholds, ScoreWeights, ScoringConfig};

use super::domain::{ApplicationStatus, ApplicationSubmission, Classification};
use serde::{Deserialize, Serialize};

/// Stateless scorer applying the configured weights and thresholds to a raw
/// submission. Pure and total: absent or garbled numeric input has already
/// degraded to zero by the time it arrives here, so there is no failure path.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, submission: &ApplicationSubmission) -> ScoreResult {
        let (components, sub_scores) = rules::score_submission(submission, &self.config.weights);
        let classification = policy::classify(
            sub_scores.repayment,
            sub_scores.need,
            &self.config.thresholds,
        );

        ScoreResult {
            repayment_score: sub_scores.repayment,
            need_score: sub_scores.need,
            composite_score: sub_scores.repayment + sub_scores.need,
            classification,
            status: classification.initial_status(),
            components,
        }
    }
}

/// Discrete contribution of one input factor, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u16,
    pub notes: String,
}

/// Input factors feeding the two sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreFactor {
    RepaymentBase,
    PreviousLoans,
    BusinessIncome,
    ElectricityBill,
    MobileRecharge,
    UtilityPayments,
}

/// Engine output: bounded integer sub-scores, their exact sum, and the decision
/// the threshold matrix seeds. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub repayment_score: u16,
    pub need_score: u16,
    pub composite_score: u16,
    pub classification: Classification,
    pub status: ApplicationStatus,
    pub components: Vec<ScoreComponent>,
}
