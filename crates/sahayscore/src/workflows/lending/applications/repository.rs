use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationId, ApplicationStatus, BorrowerCategory, Classification};

/// Persisted application: the submission fields, the scores assigned at
/// creation, and the workflow metadata. Scores are never recomputed after
/// creation; only `status` may change, through the admin update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub name: String,
    pub category: BorrowerCategory,
    pub amount: f64,
    pub date: NaiveDate,
    pub previous_loans: u32,
    pub business_income: f64,
    pub electricity_bill: f64,
    pub mobile_recharge: f64,
    pub utility_payments: f64,
    pub repayment_score: u16,
    pub need_score: u16,
    pub composite_score: u16,
    pub classification: Classification,
    pub status: ApplicationStatus,
}

impl ApplicationRecord {
    /// Numeric sequence carried by ids of the form "SHS" + digits. Foreign ids
    /// are ignored by the allocator.
    pub fn sequence(&self) -> Option<u32> {
        self.id.0.strip_prefix("SHS")?.parse().ok()
    }
}

/// Storage abstraction so the service can be exercised in isolation. The store
/// serializes mutations internally (one writer at a time per record); callers
/// needing cross-call atomicity, e.g. id allocation before insert, serialize
/// their own create path.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn delete(&self, id: &ApplicationId) -> Result<(), RepositoryError>;
    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures. `Unavailable` keeps transport
/// failures distinguishable from "record does not exist".
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook fired when the workflow reaches a decision worth announcing
/// (auto-approval at intake, admin approval afterwards).
pub trait DecisionNotifier: Send + Sync {
    fn notify(&self, alert: DecisionAlert) -> Result<(), NotifyError>;
}

/// Payload handed to notifier implementations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionAlert {
    pub topic: String,
    pub application_id: ApplicationId,
    pub details: BTreeMap<String, String>,
}

/// Notifier dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
