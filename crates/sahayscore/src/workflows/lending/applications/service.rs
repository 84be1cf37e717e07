use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Local;

use super::domain::{ApplicationId, ApplicationStatus, ApplicationSubmission};
use super::repository::{
    ApplicationRecord, ApplicationRepository, DecisionAlert, DecisionNotifier, NotifyError,
    RepositoryError,
};
use super::scoring::{ScoreResult, ScoringConfig, ScoringEngine};
use super::stats::{DashboardStats, ScoreDistribution};

const APPLICATION_ID_PREFIX: &str = "SHS";
const APPLICATION_ID_WIDTH: usize = 3;

/// Service composing the scoring engine, the storage seam, and the decision
/// notifier behind the CRUD and statistics operations.
pub struct LoanApplicationService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
    engine: Arc<ScoringEngine>,
}

/// Optional constraints applied by the list operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationFilter {
    pub status: Option<ApplicationStatus>,
    pub search: Option<String>,
}

impl<R, N> LoanApplicationService<R, N>
where
    R: ApplicationRepository + 'static,
    N: DecisionNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>, config: ScoringConfig) -> Self {
        Self {
            repository,
            notifier,
            engine: Arc::new(ScoringEngine::new(config)),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Score a submission and persist the assembled record. The id and date are
    /// assigned here, once; scores are never recomputed afterwards.
    pub fn create(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let result = self.engine.score(&submission);
        let existing = self.repository.list()?;
        let id = next_application_id(&existing);

        let record = assemble_record(id, &submission, &result);
        let stored = self.repository.insert(record)?;

        if stored.status == ApplicationStatus::Approved {
            self.publish_approval(&stored)?;
        }

        Ok(stored)
    }

    /// List records newest first, optionally narrowed by status and a
    /// case-insensitive name substring.
    pub fn list(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<ApplicationRecord>, ApplicationServiceError> {
        let mut records = self.repository.list()?;

        if let Some(status) = filter.status {
            records.retain(|record| record.status == status);
        }
        if let Some(search) = filter.search.as_deref() {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                records.retain(|record| record.name.to_lowercase().contains(&needle));
            }
        }

        records.sort_by_key(|record| Reverse(record.sequence().unwrap_or(0)));
        Ok(records)
    }

    pub fn get(&self, id: &ApplicationId) -> Result<ApplicationRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Admin status override. The raw value is validated against the allowed
    /// vocabulary before anything touches storage; an invalid value leaves the
    /// stored record untouched.
    pub fn update_status(
        &self,
        id: &ApplicationId,
        raw_status: &str,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let status = ApplicationStatus::parse(raw_status).ok_or_else(|| {
            ApplicationServiceError::InvalidStatus {
                provided: raw_status.to_string(),
            }
        })?;

        let mut record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let was_approved = record.status == ApplicationStatus::Approved;
        record.status = status;
        self.repository.update(record.clone())?;

        if status == ApplicationStatus::Approved && !was_approved {
            self.publish_approval(&record)?;
        }

        Ok(record)
    }

    /// Remove a record and hand it back to the caller.
    pub fn delete(&self, id: &ApplicationId) -> Result<ApplicationRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        self.repository.delete(id)?;
        Ok(record)
    }

    pub fn stats(&self) -> Result<DashboardStats, ApplicationServiceError> {
        let records = self.repository.list()?;
        Ok(super::stats::dashboard_stats(&records))
    }

    pub fn score_distribution(&self) -> Result<ScoreDistribution, ApplicationServiceError> {
        let records = self.repository.list()?;
        Ok(super::stats::score_distribution(&records))
    }

    fn publish_approval(&self, record: &ApplicationRecord) -> Result<(), NotifyError> {
        let mut details = BTreeMap::new();
        details.insert(
            "compositeScore".to_string(),
            record.composite_score.to_string(),
        );
        details.insert(
            "classification".to_string(),
            record.classification.label().to_string(),
        );
        self.notifier.notify(DecisionAlert {
            topic: "applicant_approved".to_string(),
            application_id: record.id.clone(),
            details,
        })
    }
}

/// Allocate the next id from the highest numeric suffix among stored
/// "SHS"-prefixed ids, zero-padded to width 3. Deleting the current maximum
/// lets that sequence number be handed out again; survivors never renumber.
pub fn next_application_id(records: &[ApplicationRecord]) -> ApplicationId {
    let max = records
        .iter()
        .filter_map(ApplicationRecord::sequence)
        .max()
        .unwrap_or(0);
    ApplicationId(format!(
        "{APPLICATION_ID_PREFIX}{:0width$}",
        max + 1,
        width = APPLICATION_ID_WIDTH
    ))
}

fn assemble_record(
    id: ApplicationId,
    submission: &ApplicationSubmission,
    result: &ScoreResult,
) -> ApplicationRecord {
    ApplicationRecord {
        id,
        name: submission.display_name(),
        category: submission.category,
        amount: submission.loan_amount,
        date: Local::now().date_naive(),
        previous_loans: submission.previous_loans,
        business_income: submission.business_income,
        electricity_bill: submission.electricity_bill,
        mobile_recharge: submission.mobile_recharge,
        utility_payments: submission.utility_payments,
        repayment_score: result.repayment_score,
        need_score: result.need_score,
        composite_score: result.composite_score,
        classification: result.classification,
        status: result.status,
    }
}

/// Error raised by the application service. Repository and notifier failures
/// pass through so callers can tell "does not exist" from "storage is down".
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error("invalid status value: {provided:?}")]
    InvalidStatus { provided: String },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
