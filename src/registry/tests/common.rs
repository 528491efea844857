use std::sync::Arc;

use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::registry::domain::{Employee, EmployeeId, EmployeeSubmission, Position};
use crate::registry::repository::{
    EmployeeRepository, InMemoryEmployeeRepository, RepositoryError,
};
use crate::registry::service::{EmployeeService, FixedClock};

pub(crate) type TestService = EmployeeService<InMemoryEmployeeRepository, FixedClock>;

pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
}

pub(crate) fn hire_date() -> NaiveDate {
    today() + Duration::days(30)
}

pub(crate) fn employee(id: EmployeeId) -> Employee {
    Employee {
        id,
        name: "Jordan Blake".to_string(),
        email: "j@x.com".to_string(),
        phone: "0512345678".to_string(),
        age: 30,
        position: Position::Coordinator,
        on_leave: false,
        hire_date: hire_date(),
        annual_leave: 5,
    }
}

pub(crate) fn submission(id: EmployeeId) -> EmployeeSubmission {
    EmployeeSubmission::from(employee(id))
}

pub(crate) fn supervisor_submission(id: EmployeeId) -> EmployeeSubmission {
    EmployeeSubmission {
        name: Some("Avery Stone".to_string()),
        position: Some("supervisor".to_string()),
        age: Some(45),
        ..submission(id)
    }
}

pub(crate) fn build_service() -> (Arc<TestService>, InMemoryEmployeeRepository) {
    let repository = InMemoryEmployeeRepository::new();
    let service = EmployeeService::new(
        Arc::new(repository.clone()),
        Arc::new(FixedClock(today())),
    );
    (Arc::new(service), repository)
}

pub(crate) fn stored(repository: &InMemoryEmployeeRepository, id: EmployeeId) -> Option<Employee> {
    repository
        .read(|employees| employees.iter().find(|employee| employee.id == id).cloned())
        .expect("repository readable")
}

pub(crate) struct FailingRepository;

impl EmployeeRepository for FailingRepository {
    fn read<T>(&self, _f: impl FnOnce(&[Employee]) -> T) -> Result<T, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn write<T>(&self, _f: impl FnOnce(&mut Vec<Employee>) -> T) -> Result<T, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
