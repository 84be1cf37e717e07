//! Loan application intake, scoring, and workflow tracking.
//!
//! The scoring engine is the only part carrying decision logic: a pure mapping
//! from declared applicant attributes to bounded sub-scores, a composite, and a
//! classification bucket. Storage and notification sit behind traits so the
//! service can be exercised without any I/O.

pub mod domain;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod stats;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationId, ApplicationStatus, ApplicationSubmission, BorrowerCategory, Classification,
};
pub use repository::{
    ApplicationRecord, ApplicationRepository, DecisionAlert, DecisionNotifier, NotifyError,
    RepositoryError,
};
pub use router::application_router;
pub use scoring::{
    ClassificationThresholds, ScoreComponent, ScoreFactor, ScoreResult, ScoreWeights,
    ScoringConfig, ScoringEngine,
};
pub use service::{
    next_application_id, ApplicationFilter, ApplicationServiceError, LoanApplicationService,
};
pub use stats::{DashboardStats, NeedBands, RepaymentBands, ScoreDistribution};
