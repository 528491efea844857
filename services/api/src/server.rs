use crate::cli::ServeArgs;
use crate::infra::{registry_service, AppState};
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use employee_registry::config::AppConfig;
use employee_registry::error::AppError;
use employee_registry::registry::employee_router;
use employee_registry::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let ServeArgs { host, port } = args;
    let mut config = AppConfig::load()?;
    config.server = config.server.with_overrides(host, port);

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = registry_service();
    let app = with_operational_routes(employee_router(service))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.label(),
        %addr,
        "employee registry ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
