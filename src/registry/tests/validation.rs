use super::common::*;
use crate::registry::domain::{EmployeeSubmission, Position};
use crate::registry::validation::{
    validate_email, validate_name, validate_phone, validate_submission, EmployeeField,
};

fn rejection(submission: EmployeeSubmission) -> (EmployeeField, &'static str) {
    let err = validate_submission(submission, today()).expect_err("submission rejected");
    (err.field, err.message)
}

#[test]
fn valid_submission_becomes_employee() {
    let employee = validate_submission(submission(101), today()).expect("valid submission");
    assert_eq!(employee, self::employee(101));
}

#[test]
fn missing_on_leave_defaults_to_false() {
    let submission = EmployeeSubmission {
        on_leave: None,
        ..submission(101)
    };
    let employee = validate_submission(submission, today()).expect("valid submission");
    assert!(!employee.on_leave);
}

#[test]
fn position_is_normalized() {
    let submission = EmployeeSubmission {
        position: Some("SUPERVISOR".to_string()),
        ..submission(101)
    };
    let employee = validate_submission(submission, today()).expect("valid submission");
    assert_eq!(employee.position, Position::Supervisor);
}

#[test]
fn first_failing_field_wins() {
    let submission = EmployeeSubmission {
        id: Some(5),
        name: Some("Al".to_string()),
        age: Some(12),
        ..submission(101)
    };
    assert_eq!(
        rejection(submission),
        (EmployeeField::Id, "ID must have at least 3 digits")
    );

    let submission = EmployeeSubmission {
        phone: Some("0612345678".to_string()),
        annual_leave: Some(0),
        ..self::submission(101)
    };
    assert_eq!(
        rejection(submission),
        (
            EmployeeField::Phone,
            "Phone must start with '05' and consist of exactly 10 digits"
        )
    );
}

#[test]
fn empty_submission_reports_missing_id() {
    assert_eq!(
        rejection(EmployeeSubmission::default()),
        (EmployeeField::Id, "ID cannot be null")
    );
}

#[test]
fn missing_fields_report_their_own_messages() {
    let cases = [
        (
            EmployeeSubmission {
                name: None,
                ..submission(101)
            },
            "Name cannot be empty",
        ),
        (
            EmployeeSubmission {
                email: Some(String::new()),
                ..submission(101)
            },
            "Email cannot be empty",
        ),
        (
            EmployeeSubmission {
                age: None,
                ..submission(101)
            },
            "Age cannot be null",
        ),
        (
            EmployeeSubmission {
                position: None,
                ..submission(101)
            },
            "Position cannot be empty",
        ),
        (
            EmployeeSubmission {
                hire_date: None,
                ..submission(101)
            },
            "Hire date cannot be null",
        ),
        (
            EmployeeSubmission {
                annual_leave: None,
                ..submission(101)
            },
            "annualLeave cannot be null",
        ),
    ];

    for (submission, expected) in cases {
        let (_, message) = rejection(submission);
        assert_eq!(message, expected);
    }
}

#[test]
fn name_rules_apply_in_order() {
    assert_eq!(
        validate_name(Some("Ana".to_string())).map_err(|err| err.message),
        Err("Name must be at least 5 characters long")
    );
    assert_eq!(
        validate_name(Some("Agent 007".to_string())).map_err(|err| err.message),
        Err("Name must contain only letters and spaces")
    );
    assert!(validate_name(Some("Mary Ann".to_string())).is_ok());
}

#[test]
fn email_syntax_is_checked() {
    assert!(validate_email(Some("j@x.com".to_string())).is_ok());
    assert!(validate_email(Some("first.last+hr@corp.example".to_string())).is_ok());
    for invalid in ["plainaddress", "@x.com", "a@", "a b@x.com", "a@x..com"] {
        assert!(
            validate_email(Some(invalid.to_string())).is_err(),
            "{invalid} should be rejected"
        );
    }
}

#[test]
fn phone_needs_prefix_and_ten_ascii_digits() {
    assert!(validate_phone(Some("0512345678".to_string())).is_ok());
    for invalid in ["051234567", "05123456789", "0412345678", "05123456a8", "05١٢٣٤٥٦٧٨"] {
        assert!(
            validate_phone(Some(invalid.to_string())).is_err(),
            "{invalid} should be rejected"
        );
    }
}

#[test]
fn age_checks_positive_before_minimum() {
    let zero = EmployeeSubmission {
        age: Some(0),
        ..submission(101)
    };
    assert_eq!(rejection(zero).1, "Age must be a positive number");

    let young = EmployeeSubmission {
        age: Some(25),
        ..submission(101)
    };
    assert_eq!(rejection(young).1, "Age must be at least 26");

    let boundary = EmployeeSubmission {
        age: Some(26),
        ..submission(101)
    };
    assert!(validate_submission(boundary, today()).is_ok());
}

#[test]
fn unknown_position_is_rejected() {
    let submission = EmployeeSubmission {
        position: Some("manager".to_string()),
        ..submission(101)
    };
    assert_eq!(
        rejection(submission),
        (
            EmployeeField::Position,
            "Position must be either 'supervisor' or 'coordinator'"
        )
    );
}

#[test]
fn hire_date_may_be_today_but_not_earlier() {
    let on_the_day = EmployeeSubmission {
        hire_date: Some(today()),
        ..submission(101)
    };
    assert!(validate_submission(on_the_day, today()).is_ok());

    let yesterday = EmployeeSubmission {
        hire_date: today().pred_opt(),
        ..submission(101)
    };
    assert_eq!(
        rejection(yesterday),
        (
            EmployeeField::HireDate,
            "Hire date must be today or in the future"
        )
    );
}

#[test]
fn annual_leave_must_start_positive() {
    let submission = EmployeeSubmission {
        annual_leave: Some(-2),
        ..submission(101)
    };
    assert_eq!(
        rejection(submission),
        (
            EmployeeField::AnnualLeave,
            "annualLeave must be a positive number"
        )
    );
}
