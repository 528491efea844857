use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use super::domain::{Employee, EmployeeId, EmployeeSubmission, Position};
use super::repository::{EmployeeRepository, RepositoryError};
use super::validation::{validate_submission, ValidationError};

/// Source of the current calendar date used for hire date checks.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Registry operations with their business rules.
pub struct EmployeeService<R, C> {
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> EmployeeService<R, C>
where
    R: EmployeeRepository + 'static,
    C: Clock + 'static,
{
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// All employees in insertion order.
    pub fn list_all(&self) -> Result<Vec<Employee>, EmployeeServiceError> {
        let employees = self.repository.read(|employees| employees.to_vec())?;
        non_empty(employees, EmptyQuery::Registry)
    }

    pub fn add(&self, submission: EmployeeSubmission) -> Result<Employee, EmployeeServiceError> {
        let employee = self.validate(submission)?;

        let stored = self.repository.write(|employees| {
            if employees.iter().any(|existing| existing.id == employee.id) {
                return Err(EmployeeServiceError::DuplicateId { id: employee.id });
            }
            employees.push(employee.clone());
            Ok(employee)
        })??;

        info!(employee_id = stored.id, position = %stored.position, "employee added");
        Ok(stored)
    }

    /// Replace every field except `id` on the employee stored under `id`.
    pub fn update(
        &self,
        id: EmployeeId,
        submission: EmployeeSubmission,
    ) -> Result<Employee, EmployeeServiceError> {
        let replacement = self.validate(submission)?;

        let updated = self.repository.write(|employees| {
            let stored = employees
                .iter_mut()
                .find(|employee| employee.id == id)
                .ok_or(EmployeeServiceError::NotFound(LookupRole::Employee))?;
            if replacement.id != id {
                debug!(path_id = id, body_id = replacement.id, "rejected id change");
                return Err(EmployeeServiceError::IdMismatch {
                    path_id: id,
                    body_id: replacement.id,
                });
            }
            stored.overwrite_from(replacement);
            Ok::<_, EmployeeServiceError>(stored.clone())
        })??;

        info!(employee_id = id, "employee updated");
        Ok(updated)
    }

    pub fn delete(&self, id: EmployeeId) -> Result<Employee, EmployeeServiceError> {
        ensure_non_negative_id(id)?;

        let removed = self.repository.write(|employees| {
            let index = employees
                .iter()
                .position(|employee| employee.id == id)
                .ok_or(EmployeeServiceError::NotFound(LookupRole::Employee))?;
            Ok::<_, EmployeeServiceError>(employees.remove(index))
        })??;

        info!(employee_id = id, "employee deleted");
        Ok(removed)
    }

    /// Employees holding `position`, matched case-insensitively.
    pub fn search_by_position(&self, position: &str) -> Result<Vec<Employee>, EmployeeServiceError> {
        let position = position
            .parse::<Position>()
            .map_err(|_| EmployeeServiceError::InvalidArgument(InvalidArgument::UnknownPosition))?;

        let matches = self.repository.read(|employees| {
            employees
                .iter()
                .filter(|employee| employee.position == position)
                .cloned()
                .collect::<Vec<_>>()
        })?;
        non_empty(matches, EmptyQuery::Position(position))
    }

    /// Employees whose age lies in `[min_age, max_age]`.
    pub fn filter_by_age_range(
        &self,
        min_age: i64,
        max_age: i64,
    ) -> Result<Vec<Employee>, EmployeeServiceError> {
        if min_age < 0 || max_age < 0 {
            return Err(EmployeeServiceError::InvalidArgument(
                InvalidArgument::NegativeAge,
            ));
        }
        if min_age > max_age {
            return Err(EmployeeServiceError::InvalidArgument(
                InvalidArgument::InvertedAgeRange,
            ));
        }

        let matches = self.repository.read(|employees| {
            employees
                .iter()
                .filter(|employee| (min_age..=max_age).contains(&i64::from(employee.age)))
                .cloned()
                .collect::<Vec<_>>()
        })?;
        non_empty(matches, EmptyQuery::AgeRange)
    }

    /// Put the employee on leave and consume one unit of annual leave.
    pub fn apply_annual_leave(&self, id: EmployeeId) -> Result<Employee, EmployeeServiceError> {
        ensure_non_negative_id(id)?;

        let employee = self.repository.write(|employees| {
            let employee = employees
                .iter_mut()
                .find(|employee| employee.id == id)
                .ok_or(EmployeeServiceError::NotFound(LookupRole::Employee))?;
            if employee.on_leave {
                return Err(EmployeeServiceError::AlreadyOnLeave);
            }
            if !employee.has_leave_balance() {
                return Err(EmployeeServiceError::NoLeaveAvailable);
            }
            employee.on_leave = true;
            employee.annual_leave -= 1;
            Ok::<_, EmployeeServiceError>(employee.clone())
        })??;

        info!(
            employee_id = id,
            remaining = employee.annual_leave,
            "annual leave applied"
        );
        Ok(employee)
    }

    pub fn list_with_no_annual_leave(&self) -> Result<Vec<Employee>, EmployeeServiceError> {
        let matches = self.repository.read(|employees| {
            employees
                .iter()
                .filter(|employee| !employee.has_leave_balance())
                .cloned()
                .collect::<Vec<_>>()
        })?;
        non_empty(matches, EmptyQuery::NoAnnualLeave)
    }

    /// Promote a coordinator to supervisor.
    ///
    /// `supervisor_id` must name a current supervisor; that record is only checked for
    /// existence and is otherwise left untouched.
    pub fn promote(
        &self,
        supervisor_id: EmployeeId,
        coordinator_id: EmployeeId,
    ) -> Result<Employee, EmployeeServiceError> {
        ensure_non_negative_id(supervisor_id)?;
        ensure_non_negative_id(coordinator_id)?;

        let promoted = self.repository.write(|employees| {
            let supervisor_present = employees.iter().any(|employee| {
                employee.id == supervisor_id && employee.position == Position::Supervisor
            });
            if !supervisor_present {
                return Err(EmployeeServiceError::NotFound(LookupRole::Supervisor));
            }

            let coordinator = employees
                .iter_mut()
                .find(|employee| {
                    employee.id == coordinator_id && employee.position == Position::Coordinator
                })
                .ok_or(EmployeeServiceError::NotFound(LookupRole::Coordinator))?;
            if !coordinator.eligible_for_promotion() {
                return Err(EmployeeServiceError::PromotionIneligible);
            }
            coordinator.position = Position::Supervisor;
            Ok(coordinator.clone())
        })??;

        info!(
            employee_id = coordinator_id,
            supervisor_id, "coordinator promoted to supervisor"
        );
        Ok(promoted)
    }

    fn validate(&self, submission: EmployeeSubmission) -> Result<Employee, EmployeeServiceError> {
        validate_submission(submission, self.clock.today()).map_err(|err| {
            debug!(field = err.field.wire_name(), reason = err.message, "rejected employee payload");
            EmployeeServiceError::Validation(err)
        })
    }
}

fn ensure_non_negative_id(id: EmployeeId) -> Result<(), EmployeeServiceError> {
    if id < 0 {
        return Err(EmployeeServiceError::InvalidArgument(
            InvalidArgument::NegativeId,
        ));
    }
    Ok(())
}

fn non_empty(
    employees: Vec<Employee>,
    query: EmptyQuery,
) -> Result<Vec<Employee>, EmployeeServiceError> {
    if employees.is_empty() {
        return Err(EmployeeServiceError::EmptyResult(query));
    }
    Ok(employees)
}

/// Which lookup failed to find a matching employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupRole {
    Employee,
    Supervisor,
    Coordinator,
}

impl fmt::Display for LookupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            LookupRole::Employee => "Employee not found",
            LookupRole::Supervisor => "Supervisor not found",
            LookupRole::Coordinator => "Coordinator not found",
        };
        f.write_str(message)
    }
}

/// Rejected path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    NegativeId,
    NegativeAge,
    InvertedAgeRange,
    UnknownPosition,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            InvalidArgument::NegativeId => "ID must be a positive number",
            InvalidArgument::NegativeAge => "Age must be a positive number",
            InvalidArgument::InvertedAgeRange => "Minimum age cannot be greater than maximum age",
            InvalidArgument::UnknownPosition => "Invalid position specified",
        };
        f.write_str(message)
    }
}

/// Query that matched no employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyQuery {
    Registry,
    Position(Position),
    AgeRange,
    NoAnnualLeave,
}

impl fmt::Display for EmptyQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            EmptyQuery::Registry => "No employees found",
            EmptyQuery::Position(Position::Supervisor) => "No supervisors found",
            EmptyQuery::Position(Position::Coordinator) => "No coordinators found",
            EmptyQuery::AgeRange => "No employees found in this age range",
            EmptyQuery::NoAnnualLeave => "No employees found with no annual leave",
        };
        f.write_str(message)
    }
}

/// Error raised by the employee service.
#[derive(Debug, thiserror::Error)]
pub enum EmployeeServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Employee with this ID already exists")]
    DuplicateId { id: EmployeeId },
    #[error("Cannot change employee ID")]
    IdMismatch {
        path_id: EmployeeId,
        body_id: EmployeeId,
    },
    #[error("{0}")]
    NotFound(LookupRole),
    #[error("{0}")]
    InvalidArgument(InvalidArgument),
    #[error("{0}")]
    EmptyResult(EmptyQuery),
    #[error("Employee is already on leave")]
    AlreadyOnLeave,
    #[error("No annual leave available")]
    NoLeaveAvailable,
    #[error("Coordinator must be at least 30 years old and not on leave to be promoted")]
    PromotionIneligible,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl EmployeeServiceError {
    /// Business rule failures, as opposed to storage faults.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, EmployeeServiceError::Repository(_))
    }
}
