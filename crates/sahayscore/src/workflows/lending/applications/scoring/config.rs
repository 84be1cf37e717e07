use serde::{Deserialize, Serialize};

/// Scoring configuration shared by every caller of the engine: term weights for
/// the two sub-scores plus the classification thresholds. A single structure so
/// duplicate constant tables cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub thresholds: ClassificationThresholds,
}

/// Term weights and caps for the repayment and need sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub base_repayment: f64,
    pub previous_loan_multiplier: f64,
    pub previous_loan_max: f64,
    pub business_income_divisor: f64,
    pub business_income_multiplier: f64,
    pub business_income_max: f64,
    pub max_repayment: f64,
    pub electricity_base: f64,
    pub electricity_divisor: f64,
    pub mobile_base: f64,
    pub mobile_divisor: f64,
    pub utility_base: f64,
    pub utility_divisor: f64,
    pub max_need: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base_repayment: 150.0,
            previous_loan_multiplier: 80.0,
            previous_loan_max: 200.0,
            business_income_divisor: 1000.0,
            business_income_multiplier: 3.0,
            business_income_max: 150.0,
            max_repayment: 500.0,
            electricity_base: 200.0,
            electricity_divisor: 20.0,
            mobile_base: 150.0,
            mobile_divisor: 5.0,
            utility_base: 150.0,
            utility_divisor: 10.0,
            max_need: 500.0,
        }
    }
}

/// Cut points for the 2x2 decision matrix. The high and low pairs deliberately
/// do not partition the plane with the same values; the residual gray zone
/// routes to manual review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    pub high_repayment: u16,
    pub high_need: u16,
    pub low_repayment: u16,
    pub low_need: u16,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            high_repayment: 350,
            high_need: 300,
            low_repayment: 250,
            low_need: 200,
        }
    }
}
