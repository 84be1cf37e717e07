use serde::{Deserialize, Serialize};

use super::domain::ApplicationStatus;
use super::repository::ApplicationRecord;

// Fixed histogram cut points consumed by the dashboard charts.
const UPPER_CUT: u16 = 400;
const MID_CUT: u16 = 300;
const LOWER_CUT: u16 = 200;

/// Headline aggregates for the dashboard: workflow counts, the rounded mean
/// composite score, and the disbursement total across approved applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
    pub avg_composite: u32,
    pub total_approved: f64,
}

/// Histogram of both sub-scores at the fixed 400/300/200 cut points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub repayment: RepaymentBands,
    pub need: NeedBands,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepaymentBands {
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub poor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedBands {
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
    pub very_low: usize,
}

pub(crate) fn dashboard_stats(records: &[ApplicationRecord]) -> DashboardStats {
    let approved: Vec<&ApplicationRecord> = records
        .iter()
        .filter(|record| record.status == ApplicationStatus::Approved)
        .collect();

    let avg_composite = if records.is_empty() {
        0
    } else {
        let sum: u64 = records
            .iter()
            .map(|record| u64::from(record.composite_score))
            .sum();
        (sum as f64 / records.len() as f64).round() as u32
    };

    DashboardStats {
        total: records.len(),
        approved: approved.len(),
        pending: count_status(records, ApplicationStatus::Pending),
        rejected: count_status(records, ApplicationStatus::Rejected),
        avg_composite,
        total_approved: approved.iter().map(|record| record.amount).sum(),
    }
}

pub(crate) fn score_distribution(records: &[ApplicationRecord]) -> ScoreDistribution {
    ScoreDistribution {
        repayment: RepaymentBands {
            excellent: count_band(records, |r| r.repayment_score, UPPER_CUT, u16::MAX),
            good: count_band(records, |r| r.repayment_score, MID_CUT, UPPER_CUT),
            average: count_band(records, |r| r.repayment_score, LOWER_CUT, MID_CUT),
            poor: count_band(records, |r| r.repayment_score, 0, LOWER_CUT),
        },
        need: NeedBands {
            high: count_band(records, |r| r.need_score, UPPER_CUT, u16::MAX),
            moderate: count_band(records, |r| r.need_score, MID_CUT, UPPER_CUT),
            low: count_band(records, |r| r.need_score, LOWER_CUT, MID_CUT),
            very_low: count_band(records, |r| r.need_score, 0, LOWER_CUT),
        },
    }
}

fn count_status(records: &[ApplicationRecord], status: ApplicationStatus) -> usize {
    records
        .iter()
        .filter(|record| record.status == status)
        .count()
}

fn count_band(
    records: &[ApplicationRecord],
    score: impl Fn(&ApplicationRecord) -> u16,
    floor: u16,
    ceiling: u16,
) -> usize {
    records
        .iter()
        .filter(|record| {
            let value = score(record);
            value >= floor && (ceiling == u16::MAX || value < ceiling)
        })
        .count()
}
