use chrono::NaiveDate;
use employee_registry::registry::{
    EmployeeService, InMemoryEmployeeRepository, SystemClock,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type RegistryService = EmployeeService<InMemoryEmployeeRepository, SystemClock>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Fresh, empty registry backed by the local clock.
pub(crate) fn registry_service() -> Arc<RegistryService> {
    Arc::new(EmployeeService::new(
        Arc::new(InMemoryEmployeeRepository::new()),
        Arc::new(SystemClock),
    ))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
