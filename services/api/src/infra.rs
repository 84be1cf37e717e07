use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use sahayscore::workflows::lending::applications::{
    ApplicationId, ApplicationRecord, ApplicationRepository, ApplicationServiceError,
    ApplicationSubmission, BorrowerCategory, DecisionAlert, DecisionNotifier,
    LoanApplicationService, NotifyError, RepositoryError, ScoringConfig,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for InMemoryApplicationRepository {
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

/// Notifier for the running service: approvals land in the structured log
/// stream until a disbursement integration exists.
#[derive(Default, Clone)]
pub(crate) struct TracingDecisionNotifier;

impl DecisionNotifier for TracingDecisionNotifier {
    fn notify(&self, alert: DecisionAlert) -> Result<(), NotifyError> {
        tracing::info!(
            topic = %alert.topic,
            application_id = %alert.application_id.0,
            details = ?alert.details,
            "loan decision announced"
        );
        Ok(())
    }
}

/// Notifier for demos and tests; keeps the alerts in memory.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDecisionNotifier {
    events: Arc<Mutex<Vec<DecisionAlert>>>,
}

impl InMemoryDecisionNotifier {
    pub(crate) fn events(&self) -> Vec<DecisionAlert> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl DecisionNotifier for InMemoryDecisionNotifier {
    fn notify(&self, alert: DecisionAlert) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

/// Sample applicants from the field pilot, replayed through the engine so the
/// stored scores always honor the current formula. One lands in each corner of
/// the decision matrix plus one in the review band.
pub(crate) fn sample_submissions() -> Vec<ApplicationSubmission> {
    vec![
        ApplicationSubmission {
            name: "Ramesh Kumar".to_string(),
            previous_loans: 3,
            business_income: 75_000.0,
            electricity_bill: 1_200.0,
            mobile_recharge: 200.0,
            utility_payments: 0.0,
            loan_amount: 50_000.0,
            category: BorrowerCategory::RepeatBorrower,
        },
        ApplicationSubmission {
            name: "Savita Devi".to_string(),
            previous_loans: 0,
            business_income: 40_000.0,
            electricity_bill: 800.0,
            mobile_recharge: 150.0,
            utility_payments: 200.0,
            loan_amount: 30_000.0,
            category: BorrowerCategory::NewBorrower,
        },
        ApplicationSubmission {
            name: "Amit Singh".to_string(),
            previous_loans: 0,
            business_income: 0.0,
            electricity_bill: 3_500.0,
            mobile_recharge: 800.0,
            utility_payments: 1_000.0,
            loan_amount: 75_000.0,
            category: BorrowerCategory::NewBorrower,
        },
        ApplicationSubmission {
            name: "Priya Sharma".to_string(),
            previous_loans: 2,
            business_income: 60_000.0,
            electricity_bill: 2_000.0,
            mobile_recharge: 400.0,
            utility_payments: 500.0,
            loan_amount: 40_000.0,
            category: BorrowerCategory::RepeatBorrower,
        },
    ]
}

pub(crate) fn seed_applications<R, N>(
    service: &LoanApplicationService<R, N>,
) -> Result<usize, ApplicationServiceError>
where
    R: ApplicationRepository + 'static,
    N: DecisionNotifier + 'static,
{
    let submissions = sample_submissions();
    let count = submissions.len();
    for submission in submissions {
        service.create(submission)?;
    }
    Ok(count)
}
