use super::super::domain::{sanitize_amount, ApplicationSubmission};
use super::config::ScoreWeights;
use super::{ScoreComponent, ScoreFactor};

pub(crate) struct SubScores {
    pub repayment: u16,
    pub need: u16,
}

/// Apply the weighted terms to a submission. Each factor is individually capped
/// so no single input dominates, and the additive base keeps every applicant
/// above zero. Returns the audit components alongside the rounded sub-scores.
pub(crate) fn score_submission(
    submission: &ApplicationSubmission,
    weights: &ScoreWeights,
) -> (Vec<ScoreComponent>, SubScores) {
    let mut components = Vec::with_capacity(6);

    let previous_loans_term = (f64::from(submission.previous_loans)
        * weights.previous_loan_multiplier)
        .min(weights.previous_loan_max);
    let business_income = sanitize_amount(submission.business_income);
    let business_income_term = (business_income / weights.business_income_divisor
        * weights.business_income_multiplier)
        .min(weights.business_income_max);

    let repayment = (weights.base_repayment + previous_loans_term + business_income_term)
        .min(weights.max_repayment)
        .max(0.0);

    components.push(ScoreComponent {
        factor: ScoreFactor::RepaymentBase,
        points: weights.base_repayment.round() as u16,
        notes: "additive base granted to every applicant".to_string(),
    });
    components.push(ScoreComponent {
        factor: ScoreFactor::PreviousLoans,
        points: previous_loans_term.round() as u16,
        notes: format!(
            "{} prior loan(s) earn {:.0} of {:.0} points",
            submission.previous_loans, previous_loans_term, weights.previous_loan_max
        ),
    });
    components.push(ScoreComponent {
        factor: ScoreFactor::BusinessIncome,
        points: business_income_term.round() as u16,
        notes: format!(
            "monthly income {:.0} earns {:.0} of {:.0} points",
            business_income, business_income_term, weights.business_income_max
        ),
    });

    // Lower consumption reads as higher need; each bill is an inverse proxy for
    // income where payslips are unavailable.
    let electricity_bill = sanitize_amount(submission.electricity_bill);
    let electricity_term =
        (weights.electricity_base - electricity_bill / weights.electricity_divisor).max(0.0);
    let mobile_recharge = sanitize_amount(submission.mobile_recharge);
    let mobile_term = (weights.mobile_base - mobile_recharge / weights.mobile_divisor).max(0.0);
    let utility_payments = sanitize_amount(submission.utility_payments);
    let utility_term = (weights.utility_base - utility_payments / weights.utility_divisor).max(0.0);

    let need = (electricity_term + mobile_term + utility_term)
        .min(weights.max_need)
        .max(0.0);

    components.push(ScoreComponent {
        factor: ScoreFactor::ElectricityBill,
        points: electricity_term.round() as u16,
        notes: format!(
            "electricity spend {:.0} leaves {:.0} of {:.0} points",
            electricity_bill, electricity_term, weights.electricity_base
        ),
    });
    components.push(ScoreComponent {
        factor: ScoreFactor::MobileRecharge,
        points: mobile_term.round() as u16,
        notes: format!(
            "mobile spend {:.0} leaves {:.0} of {:.0} points",
            mobile_recharge, mobile_term, weights.mobile_base
        ),
    });
    components.push(ScoreComponent {
        factor: ScoreFactor::UtilityPayments,
        points: utility_term.round() as u16,
        notes: format!(
            "utility spend {:.0} leaves {:.0} of {:.0} points",
            utility_payments, utility_term, weights.utility_base
        ),
    });

    (
        components,
        SubScores {
            repayment: repayment.round() as u16,
            need: need.round() as u16,
        },
    )
}
