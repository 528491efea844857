use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::error;

use super::domain::{ApiMessage, Employee, EmployeeId, EmployeeSubmission};
use super::repository::EmployeeRepository;
use super::service::{Clock, EmployeeService, EmployeeServiceError};

pub const API_PREFIX: &str = "/api/v1/employee-management-system";

type SharedService<R, C> = State<Arc<EmployeeService<R, C>>>;

/// Router builder exposing the registry endpoints.
pub fn employee_router<R, C>(service: Arc<EmployeeService<R, C>>) -> Router
where
    R: EmployeeRepository + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route(&format!("{API_PREFIX}/get"), get(list_handler::<R, C>))
        .route(&format!("{API_PREFIX}/add"), post(add_handler::<R, C>))
        .route(
            &format!("{API_PREFIX}/update/:id"),
            put(update_handler::<R, C>),
        )
        .route(
            &format!("{API_PREFIX}/delete/:id"),
            delete(delete_handler::<R, C>),
        )
        .route(
            &format!("{API_PREFIX}/search/:position"),
            get(search_handler::<R, C>),
        )
        .route(
            &format!("{API_PREFIX}/get-by-age/:min_age/:max_age"),
            get(age_range_handler::<R, C>),
        )
        .route(
            &format!("{API_PREFIX}/apply-annual-leave/:id"),
            put(apply_leave_handler::<R, C>),
        )
        .route(
            &format!("{API_PREFIX}/get-all-employees-with-no-annual-leave"),
            get(no_leave_handler::<R, C>),
        )
        .route(
            &format!("{API_PREFIX}/promote/:supervisor_id/:coordinator_id"),
            put(promote_handler::<R, C>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<R, C>(State(service): SharedService<R, C>) -> Response
where
    R: EmployeeRepository + 'static,
    C: Clock + 'static,
{
    employees_response(service.list_all())
}

pub(crate) async fn add_handler<R, C>(
    State(service): SharedService<R, C>,
    body: Result<Json<EmployeeSubmission>, JsonRejection>,
) -> Response
where
    R: EmployeeRepository + 'static,
    C: Clock + 'static,
{
    let Json(submission) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejected(rejection),
    };
    message_response(service.add(submission), "Employee added successfully")
}

pub(crate) async fn update_handler<R, C>(
    State(service): SharedService<R, C>,
    id: Result<Path<EmployeeId>, PathRejection>,
    body: Result<Json<EmployeeSubmission>, JsonRejection>,
) -> Response
where
    R: EmployeeRepository + 'static,
    C: Clock + 'static,
{
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return path_rejected(rejection),
    };
    let Json(submission) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejected(rejection),
    };
    message_response(
        service.update(id, submission),
        "Employee updated successfully",
    )
}

pub(crate) async fn delete_handler<R, C>(
    State(service): SharedService<R, C>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> Response
where
    R: EmployeeRepository + 'static,
    C: Clock + 'static,
{
    match id {
        Ok(Path(id)) => message_response(service.delete(id), "Employee deleted successfully"),
        Err(rejection) => path_rejected(rejection),
    }
}

pub(crate) async fn search_handler<R, C>(
    State(service): SharedService<R, C>,
    Path(position): Path<String>,
) -> Response
where
    R: EmployeeRepository + 'static,
    C: Clock + 'static,
{
    employees_response(service.search_by_position(&position))
}

pub(crate) async fn age_range_handler<R, C>(
    State(service): SharedService<R, C>,
    bounds: Result<Path<(i64, i64)>, PathRejection>,
) -> Response
where
    R: EmployeeRepository + 'static,
    C: Clock + 'static,
{
    match bounds {
        Ok(Path((min_age, max_age))) => {
            employees_response(service.filter_by_age_range(min_age, max_age))
        }
        Err(rejection) => path_rejected(rejection),
    }
}

pub(crate) async fn apply_leave_handler<R, C>(
    State(service): SharedService<R, C>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> Response
where
    R: EmployeeRepository + 'static,
    C: Clock + 'static,
{
    match id {
        Ok(Path(id)) => message_response(
            service.apply_annual_leave(id),
            "Annual leave applied successfully",
        ),
        Err(rejection) => path_rejected(rejection),
    }
}

pub(crate) async fn no_leave_handler<R, C>(State(service): SharedService<R, C>) -> Response
where
    R: EmployeeRepository + 'static,
    C: Clock + 'static,
{
    employees_response(service.list_with_no_annual_leave())
}

pub(crate) async fn promote_handler<R, C>(
    State(service): SharedService<R, C>,
    ids: Result<Path<(EmployeeId, EmployeeId)>, PathRejection>,
) -> Response
where
    R: EmployeeRepository + 'static,
    C: Clock + 'static,
{
    match ids {
        Ok(Path((supervisor_id, coordinator_id))) => message_response(
            service.promote(supervisor_id, coordinator_id),
            "Promotion successful",
        ),
        Err(rejection) => path_rejected(rejection),
    }
}

fn employees_response(result: Result<Vec<Employee>, EmployeeServiceError>) -> Response {
    match result {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(err) => failure(err),
    }
}

fn message_response<T>(result: Result<T, EmployeeServiceError>, success: &str) -> Response {
    match result {
        Ok(_) => message(StatusCode::OK, success),
        Err(err) => failure(err),
    }
}

fn failure(err: EmployeeServiceError) -> Response {
    if err.is_rejection() {
        return message(StatusCode::BAD_REQUEST, err.to_string());
    }
    error!(error = %err, "employee storage failure");
    message(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

fn body_rejected(rejection: JsonRejection) -> Response {
    message(StatusCode::BAD_REQUEST, rejection.body_text())
}

fn path_rejected(rejection: PathRejection) -> Response {
    message(StatusCode::BAD_REQUEST, rejection.body_text())
}

fn message(status: StatusCode, text: impl Into<String>) -> Response {
    (status, Json(ApiMessage::new(text))).into_response()
}
