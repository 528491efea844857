//! Field rules applied to every inbound employee payload.
//!
//! Checks run field by field in declaration order and stop at the first violation, so the
//! message returned to callers always names a single field.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::{Employee, EmployeeSubmission, Position};

pub const MINIMUM_ID: i64 = 100;
pub const MINIMUM_NAME_LENGTH: usize = 5;
pub const MINIMUM_AGE: i32 = 26;

/// Employee fields in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Id,
    Name,
    Email,
    Phone,
    Age,
    Position,
    HireDate,
    AnnualLeave,
}

impl EmployeeField {
    pub const fn wire_name(self) -> &'static str {
        match self {
            EmployeeField::Id => "id",
            EmployeeField::Name => "name",
            EmployeeField::Email => "email",
            EmployeeField::Phone => "phone",
            EmployeeField::Age => "age",
            EmployeeField::Position => "position",
            EmployeeField::HireDate => "hireDate",
            EmployeeField::AnnualLeave => "annualLeave",
        }
    }
}

/// First constraint violated by a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: EmployeeField,
    pub message: &'static str,
}

impl ValidationError {
    const fn new(field: EmployeeField, message: &'static str) -> Self {
        Self { field, message }
    }
}

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("valid name regex"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$")
        .expect("valid email regex")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^05[0-9]{8}$").expect("valid phone regex"));

pub fn validate_id(id: Option<i64>) -> Result<i64, ValidationError> {
    let id = id.ok_or(ValidationError::new(EmployeeField::Id, "ID cannot be null"))?;
    if id < MINIMUM_ID {
        return Err(ValidationError::new(
            EmployeeField::Id,
            "ID must have at least 3 digits",
        ));
    }
    Ok(id)
}

pub fn validate_name(name: Option<String>) -> Result<String, ValidationError> {
    let name = non_empty(name, EmployeeField::Name, "Name cannot be empty")?;
    if name.chars().count() < MINIMUM_NAME_LENGTH {
        return Err(ValidationError::new(
            EmployeeField::Name,
            "Name must be at least 5 characters long",
        ));
    }
    if !NAME_PATTERN.is_match(&name) {
        return Err(ValidationError::new(
            EmployeeField::Name,
            "Name must contain only letters and spaces",
        ));
    }
    Ok(name)
}

pub fn validate_email(email: Option<String>) -> Result<String, ValidationError> {
    let email = non_empty(email, EmployeeField::Email, "Email cannot be empty")?;
    if !EMAIL_PATTERN.is_match(&email) {
        return Err(ValidationError::new(
            EmployeeField::Email,
            "Email should be valid",
        ));
    }
    Ok(email)
}

pub fn validate_phone(phone: Option<String>) -> Result<String, ValidationError> {
    let phone = non_empty(phone, EmployeeField::Phone, "Phone cannot be empty")?;
    if !PHONE_PATTERN.is_match(&phone) {
        return Err(ValidationError::new(
            EmployeeField::Phone,
            "Phone must start with '05' and consist of exactly 10 digits",
        ));
    }
    Ok(phone)
}

pub fn validate_age(age: Option<i32>) -> Result<i32, ValidationError> {
    let age = age.ok_or(ValidationError::new(
        EmployeeField::Age,
        "Age cannot be null",
    ))?;
    if age <= 0 {
        return Err(ValidationError::new(
            EmployeeField::Age,
            "Age must be a positive number",
        ));
    }
    if age < MINIMUM_AGE {
        return Err(ValidationError::new(
            EmployeeField::Age,
            "Age must be at least 26",
        ));
    }
    Ok(age)
}

pub fn validate_position(position: Option<String>) -> Result<Position, ValidationError> {
    let position = non_empty(position, EmployeeField::Position, "Position cannot be empty")?;
    position.parse::<Position>().map_err(|_| {
        ValidationError::new(
            EmployeeField::Position,
            "Position must be either 'supervisor' or 'coordinator'",
        )
    })
}

pub fn validate_hire_date(
    hire_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    let hire_date = hire_date.ok_or(ValidationError::new(
        EmployeeField::HireDate,
        "Hire date cannot be null",
    ))?;
    if hire_date < today {
        return Err(ValidationError::new(
            EmployeeField::HireDate,
            "Hire date must be today or in the future",
        ));
    }
    Ok(hire_date)
}

pub fn validate_annual_leave(annual_leave: Option<i32>) -> Result<i32, ValidationError> {
    let annual_leave = annual_leave.ok_or(ValidationError::new(
        EmployeeField::AnnualLeave,
        "annualLeave cannot be null",
    ))?;
    if annual_leave <= 0 {
        return Err(ValidationError::new(
            EmployeeField::AnnualLeave,
            "annualLeave must be a positive number",
        ));
    }
    Ok(annual_leave)
}

/// Turn a submission into a storable employee, or report the first failing field.
pub fn validate_submission(
    submission: EmployeeSubmission,
    today: NaiveDate,
) -> Result<Employee, ValidationError> {
    let EmployeeSubmission {
        id,
        name,
        email,
        phone,
        age,
        position,
        on_leave,
        hire_date,
        annual_leave,
    } = submission;

    Ok(Employee {
        id: validate_id(id)?,
        name: validate_name(name)?,
        email: validate_email(email)?,
        phone: validate_phone(phone)?,
        age: validate_age(age)?,
        position: validate_position(position)?,
        hire_date: validate_hire_date(hire_date, today)?,
        annual_leave: validate_annual_leave(annual_leave)?,
        on_leave: on_leave.unwrap_or(false),
    })
}

fn non_empty(
    value: Option<String>,
    field: EmployeeField,
    message: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::new(field, message)),
    }
}
