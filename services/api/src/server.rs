use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{
    default_scoring_config, seed_applications, AppState, InMemoryApplicationRepository,
    TracingDecisionNotifier,
};
use crate::routes::with_application_routes;
use sahayscore::config::AppConfig;
use sahayscore::error::AppError;
use sahayscore::telemetry;
use sahayscore::workflows::lending::applications::LoanApplicationService;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryApplicationRepository::default());
    let notifier = Arc::new(TracingDecisionNotifier);
    let application_service = Arc::new(LoanApplicationService::new(
        repository,
        notifier,
        default_scoring_config(),
    ));

    if config.seed_demo_data {
        let seeded = seed_applications(application_service.as_ref())?;
        info!(seeded, "sample applications loaded into the in-memory store");
    }

    let app = with_application_routes(application_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
