use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::lending::applications::domain::{
    ApplicationId, ApplicationSubmission, BorrowerCategory,
};
use crate::workflows::lending::applications::repository::{
    ApplicationRecord, ApplicationRepository, DecisionAlert, DecisionNotifier, NotifyError,
    RepositoryError,
};
use crate::workflows::lending::applications::scoring::{ScoringConfig, ScoringEngine};
use crate::workflows::lending::applications::{application_router, LoanApplicationService};

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(super) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(scoring_config())
}

/// Repeat borrower with steady income and low consumption: lands in the
/// approved corner of the matrix (500/400).
pub(super) fn strong_repeat_borrower() -> ApplicationSubmission {
    ApplicationSubmission {
        name: "Ramesh Kumar".to_string(),
        previous_loans: 3,
        business_income: 75_000.0,
        electricity_bill: 1_200.0,
        mobile_recharge: 200.0,
        utility_payments: 0.0,
        loan_amount: 50_000.0,
        category: BorrowerCategory::RepeatBorrower,
    }
}

/// First-time applicant with no declared income and heavy consumption: lands in
/// the rejected corner (150/75).
pub(super) fn high_consumption_first_timer() -> ApplicationSubmission {
    ApplicationSubmission {
        name: "Amit Singh".to_string(),
        previous_loans: 0,
        business_income: 0.0,
        electricity_bill: 3_500.0,
        mobile_recharge: 800.0,
        utility_payments: 1_000.0,
        loan_amount: 75_000.0,
        category: BorrowerCategory::NewBorrower,
    }
}

/// Mid-band applicant (270/250) caught by neither threshold pair: the
/// gray-zone catch-all routes it to manual review.
pub(super) fn gray_zone_borrower() -> ApplicationSubmission {
    ApplicationSubmission {
        name: "Meena Joshi".to_string(),
        previous_loans: 0,
        business_income: 40_000.0,
        electricity_bill: 1_000.0,
        mobile_recharge: 500.0,
        utility_payments: 1_000.0,
        loan_amount: 20_000.0,
        category: BorrowerCategory::NewBorrower,
    }
}

pub(super) fn build_service() -> (
    LoanApplicationService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service =
        LoanApplicationService::new(repository.clone(), notifier.clone(), scoring_config());
    (service, repository, notifier)
}

pub(super) fn build_router() -> axum::Router {
    let (service, _, _) = build_service();
    application_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn delete(&self, id: &ApplicationId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<DecisionAlert>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<DecisionAlert> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl DecisionNotifier for MemoryNotifier {
    fn notify(&self, alert: DecisionAlert) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: &ApplicationId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Accepts reads but refuses every insert, for duplicate-id surface tests.
pub(super) struct ConflictRepository;

impl ApplicationRepository for ConflictRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(None)
    }

    fn delete(&self, _id: &ApplicationId) -> Result<(), RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
