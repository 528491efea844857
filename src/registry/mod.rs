//! Employee registry: record model, field validation, storage seam, business rules, and the
//! HTTP router that exposes them.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
pub(crate) mod tests;

pub use domain::{
    ApiMessage, Employee, EmployeeId, EmployeeSubmission, Position, UnknownPosition,
    PROMOTION_MINIMUM_AGE,
};
pub use repository::{EmployeeRepository, InMemoryEmployeeRepository, RepositoryError};
pub use router::{employee_router, API_PREFIX};
pub use service::{
    Clock, EmployeeService, EmployeeServiceError, EmptyQuery, FixedClock, InvalidArgument,
    LookupRole, SystemClock,
};
pub use validation::{validate_submission, EmployeeField, ValidationError};
