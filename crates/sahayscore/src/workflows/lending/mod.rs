//! Lending workflow: applicant scoring, record keeping, and dashboard feeds.

pub mod applications;

pub use applications::{
    application_router, ApplicationFilter, ApplicationId, ApplicationRecord,
    ApplicationRepository, ApplicationServiceError, ApplicationStatus, ApplicationSubmission,
    BorrowerCategory, Classification, DashboardStats, DecisionAlert, DecisionNotifier,
    LoanApplicationService, NotifyError, RepositoryError, ScoreDistribution, ScoreResult,
    ScoringConfig, ScoringEngine,
};
