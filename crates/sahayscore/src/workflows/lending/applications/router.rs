use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicationId, ApplicationStatus, ApplicationSubmission};
use super::repository::{ApplicationRepository, DecisionNotifier, RepositoryError};
use super::service::{ApplicationFilter, ApplicationServiceError, LoanApplicationService};

/// Router builder exposing the CRUD and statistics endpoints consumed by the
/// dashboard.
pub fn application_router<R, N>(service: Arc<LoanApplicationService<R, N>>) -> Router
where
    R: ApplicationRepository + 'static,
    N: DecisionNotifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/applications",
            get(list_handler::<R, N>).post(create_handler::<R, N>),
        )
        .route(
            "/api/v1/applications/:id",
            get(get_handler::<R, N>)
                .patch(update_status_handler::<R, N>)
                .delete(delete_handler::<R, N>),
        )
        .route("/api/v1/stats", get(stats_handler::<R, N>))
        .route(
            "/api/v1/score-distribution",
            get(distribution_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListQuery {
    pub(crate) status: Option<String>,
    pub(crate) search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdateRequest {
    pub(crate) status: String,
}

pub(crate) async fn list_handler<R, N>(
    State(service): State<Arc<LoanApplicationService<R, N>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: DecisionNotifier + 'static,
{
    let status = match query.status.as_deref() {
        Some(raw) => match ApplicationStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                return error_response(ApplicationServiceError::InvalidStatus {
                    provided: raw.to_string(),
                })
            }
        },
        None => None,
    };

    let filter = ApplicationFilter {
        status,
        search: query.search,
    };
    match service.list(&filter) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_handler<R, N>(
    State(service): State<Arc<LoanApplicationService<R, N>>>,
    axum::Json(submission): axum::Json<ApplicationSubmission>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: DecisionNotifier + 'static,
{
    match service.create(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R, N>(
    State(service): State<Arc<LoanApplicationService<R, N>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: DecisionNotifier + 'static,
{
    match service.get(&ApplicationId(id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_status_handler<R, N>(
    State(service): State<Arc<LoanApplicationService<R, N>>>,
    Path(id): Path<String>,
    axum::Json(request): axum::Json<StatusUpdateRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: DecisionNotifier + 'static,
{
    match service.update_status(&ApplicationId(id), &request.status) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R, N>(
    State(service): State<Arc<LoanApplicationService<R, N>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: DecisionNotifier + 'static,
{
    match service.delete(&ApplicationId(id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stats_handler<R, N>(
    State(service): State<Arc<LoanApplicationService<R, N>>>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: DecisionNotifier + 'static,
{
    match service.stats() {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn distribution_handler<R, N>(
    State(service): State<Arc<LoanApplicationService<R, N>>>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: DecisionNotifier + 'static,
{
    match service.score_distribution() {
        Ok(distribution) => (StatusCode::OK, axum::Json(distribution)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Map service failures onto the dashboard's error contract. Domain errors
/// (invalid status, missing record) stay in the 4xx range; storage outages
/// surface as 503 so clients can tell them apart.
fn error_response(error: ApplicationServiceError) -> Response {
    let status = match &error {
        ApplicationServiceError::InvalidStatus { .. } => StatusCode::BAD_REQUEST,
        ApplicationServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ApplicationServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ApplicationServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ApplicationServiceError::Notify(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
