use crate::infra::{registry_service, RegistryService};
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use employee_registry::error::AppError;
use employee_registry::registry::{
    Employee, EmployeeId, EmployeeServiceError, EmployeeSubmission,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Hire date for the demo employees (YYYY-MM-DD). Defaults to one week from today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) hire_date: Option<NaiveDate>,
    /// Stop after the leave scenario.
    #[arg(long)]
    pub(crate) skip_promotion: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        hire_date,
        skip_promotion,
    } = args;
    let hire_date = hire_date.unwrap_or_else(|| Local::now().date_naive() + Duration::days(7));

    let service = registry_service();

    println!("Employee registry demo (hire date {hire_date})");
    let jordan = demo_coordinator(hire_date);
    report("Add coordinator 101", service.add(jordan).map(|e| summary(&e)));

    report(
        "Promote 101 under missing supervisor 999",
        service.promote(999, 101).map(|e| summary(&e)),
    );

    println!("\nLeave applications for 101");
    for (attempt, outcome) in leave_attempts(&service, 101).into_iter().enumerate() {
        report(&format!("Attempt {}", attempt + 1), outcome);
    }

    if skip_promotion {
        return Ok(());
    }

    println!("\nPromotion");
    report(
        "Add supervisor 150",
        service.add(demo_supervisor(hire_date)).map(|e| summary(&e)),
    );
    report(
        "Promote 101 while on leave",
        service.promote(150, 101).map(|e| summary(&e)),
    );

    let back_from_leave = EmployeeSubmission {
        on_leave: Some(false),
        annual_leave: Some(4),
        ..demo_coordinator(hire_date)
    };
    report(
        "Return 101 from leave",
        service.update(101, back_from_leave).map(|e| summary(&e)),
    );
    report(
        "Promote 101",
        service.promote(150, 101).map(|e| summary(&e)),
    );

    println!("\nRegistry contents");
    match service.list_all() {
        Ok(employees) => {
            for employee in &employees {
                println!("- {}", summary(employee));
            }
        }
        Err(err) => println!("- {err}"),
    }

    Ok(())
}

const LEAVE_ATTEMPTS: usize = 5;

fn leave_attempts(
    service: &RegistryService,
    id: EmployeeId,
) -> Vec<Result<String, EmployeeServiceError>> {
    (0..LEAVE_ATTEMPTS)
        .map(|_| service.apply_annual_leave(id).map(|e| summary(&e)))
        .collect()
}

fn demo_coordinator(hire_date: NaiveDate) -> EmployeeSubmission {
    EmployeeSubmission {
        id: Some(101),
        name: Some("Jordan Blake".to_string()),
        email: Some("j@x.com".to_string()),
        phone: Some("0512345678".to_string()),
        age: Some(30),
        position: Some("coordinator".to_string()),
        on_leave: None,
        hire_date: Some(hire_date),
        annual_leave: Some(5),
    }
}

fn demo_supervisor(hire_date: NaiveDate) -> EmployeeSubmission {
    EmployeeSubmission {
        id: Some(150),
        name: Some("Avery Stone".to_string()),
        email: Some("avery.stone@example.com".to_string()),
        phone: Some("0598765432".to_string()),
        age: Some(44),
        position: Some("Supervisor".to_string()),
        on_leave: None,
        hire_date: Some(hire_date),
        annual_leave: Some(21),
    }
}

fn summary(employee: &Employee) -> String {
    format!(
        "{} {} | {} | age {} | leave {}{}",
        employee.id,
        employee.name,
        employee.position,
        employee.age,
        employee.annual_leave,
        if employee.on_leave { " (on leave)" } else { "" }
    )
}

fn report(step: &str, outcome: Result<String, EmployeeServiceError>) {
    match outcome {
        Ok(detail) => println!("  {step}: ok -> {detail}"),
        Err(err) => println!("  {step}: rejected ({err})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_against_a_future_hire_date() {
        let args = DemoArgs {
            hire_date: Some(Local::now().date_naive() + Duration::days(30)),
            skip_promotion: false,
        };
        assert!(run_demo(args).is_ok());
    }

    #[test]
    fn leave_attempts_only_consume_one_unit() {
        let service = registry_service();
        let hire_date = Local::now().date_naive() + Duration::days(30);
        service
            .add(demo_coordinator(hire_date))
            .expect("coordinator added");

        let outcomes = leave_attempts(&service, 101);
        assert_eq!(outcomes.len(), 5);
        assert_eq!(
            outcomes[0].as_ref().ok().map(String::as_str),
            Some("101 Jordan Blake | coordinator | age 30 | leave 4 (on leave)")
        );
        assert!(outcomes[1..]
            .iter()
            .all(|outcome| matches!(outcome, Err(EmployeeServiceError::AlreadyOnLeave))));
    }

    #[test]
    fn summary_flags_employees_on_leave() {
        let mut employee = Employee {
            id: 101,
            name: "Jordan Blake".to_string(),
            email: "j@x.com".to_string(),
            phone: "0512345678".to_string(),
            age: 30,
            position: employee_registry::registry::Position::Coordinator,
            on_leave: false,
            hire_date: NaiveDate::from_ymd_opt(2030, 1, 1).expect("valid date"),
            annual_leave: 5,
        };
        assert_eq!(summary(&employee), "101 Jordan Blake | coordinator | age 30 | leave 5");

        employee.on_leave = true;
        assert!(summary(&employee).ends_with("(on leave)"));
    }
}
