use super::super::domain::Classification;
use super::config::ClassificationThresholds;

/// Assign a classification bucket from the rounded integer sub-scores.
///
/// Evaluated in fixed priority order, first match wins. The high pair
/// (350/300) and the low pair (250/200) overlap deliberately; the residual
/// middle band falls through to the manual-review catch-all. This asymmetry is
/// the review-biased risk policy and must not be normalized away.
pub(crate) fn classify(
    repayment: u16,
    need: u16,
    thresholds: &ClassificationThresholds,
) -> Classification {
    if repayment >= thresholds.high_repayment && need >= thresholds.high_need {
        Classification::HighNeedGoodRepayment
    } else if repayment < thresholds.low_repayment && need < thresholds.low_need {
        Classification::LowNeedPoorRepayment
    } else if repayment >= thresholds.high_repayment && need < thresholds.high_need {
        Classification::GoodRepaymentLowerNeed
    } else if repayment < thresholds.high_repayment && need >= thresholds.high_need {
        Classification::HighNeedRiskyRepayment
    } else {
        Classification::MediumScores
    }
}
