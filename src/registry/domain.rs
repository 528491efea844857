use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier type for employees. Signed so that negative path ids can be rejected explicitly.
pub type EmployeeId = i64;

/// Role held by an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Supervisor,
    Coordinator,
}

impl Position {
    pub const fn label(self) -> &'static str {
        match self {
            Position::Supervisor => "supervisor",
            Position::Coordinator => "coordinator",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when text does not name a known position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position '{0}'")]
pub struct UnknownPosition(pub String);

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("supervisor") {
            Ok(Position::Supervisor)
        } else if raw.eq_ignore_ascii_case("coordinator") {
            Ok(Position::Coordinator)
        } else {
            Err(UnknownPosition(raw.to_string()))
        }
    }
}

/// A stored employee. Every field is present once a record has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub position: Position,
    pub on_leave: bool,
    pub hire_date: NaiveDate,
    pub annual_leave: i32,
}

impl Employee {
    pub fn has_leave_balance(&self) -> bool {
        self.annual_leave > 0
    }

    /// Coordinators become eligible for promotion at thirty while not on leave.
    pub fn eligible_for_promotion(&self) -> bool {
        self.age >= PROMOTION_MINIMUM_AGE && !self.on_leave
    }

    /// Replace every mutable field with the values from `other`, keeping `id`.
    pub(crate) fn overwrite_from(&mut self, other: Employee) {
        let Employee {
            id: _,
            name,
            email,
            phone,
            age,
            position,
            on_leave,
            hire_date,
            annual_leave,
        } = other;

        self.name = name;
        self.email = email;
        self.phone = phone;
        self.age = age;
        self.position = position;
        self.on_leave = on_leave;
        self.hire_date = hire_date;
        self.annual_leave = annual_leave;
    }
}

pub const PROMOTION_MINIMUM_AGE: i32 = 30;

/// Inbound employee payload as received from clients.
///
/// Fields are optional so a missing value is reported by the validator with a field-specific
/// message instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSubmission {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub on_leave: Option<bool>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub annual_leave: Option<i32>,
}

impl From<Employee> for EmployeeSubmission {
    fn from(employee: Employee) -> Self {
        Self {
            id: Some(employee.id),
            name: Some(employee.name),
            email: Some(employee.email),
            phone: Some(employee.phone),
            age: Some(employee.age),
            position: Some(employee.position.label().to_string()),
            on_leave: Some(employee.on_leave),
            hire_date: Some(employee.hire_date),
            annual_leave: Some(employee.annual_leave),
        }
    }
}

/// Simple `{ "message": ... }` body used for mutation results and failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
