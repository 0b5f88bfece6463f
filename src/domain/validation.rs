//! Field validation rules for example payloads.
//!
//! Each rule is a pure function returning the first violated constraint.
//! `validate` composes them in a fixed order and stops at the first failure.
//! Callers see exactly one message, so the order of the rules is part of
//! the contract and the checks are plain functions rather than derive rules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{
    MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH,
};
use crate::domain::ExampleDraft;
use crate::errors::{AppError, AppResult};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\A[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\z",
    )
    .expect("email pattern is a valid regex")
});

/// Validate a draft: first name, surname, email, password, in that order.
pub fn validate(draft: &ExampleDraft) -> AppResult<()> {
    validate_first_name(&draft.first_name)?;
    validate_surname(&draft.surname)?;
    validate_email(&draft.email)?;
    validate_password(&draft.password)
}

pub fn validate_first_name(first_name: &str) -> AppResult<()> {
    check_length("First Name", first_name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)
}

pub fn validate_surname(surname: &str) -> AppResult<()> {
    check_length("Surname", surname, MIN_NAME_LENGTH, MAX_NAME_LENGTH)
}

pub fn validate_email(email: &str) -> AppResult<()> {
    check_length("Email", email, 1, MAX_EMAIL_LENGTH)?;

    if !EMAIL_PATTERN.is_match(email) {
        return Err(AppError::validation(
            "The Email is not a valid e-mail address.",
        ));
    }

    Ok(())
}

pub fn validate_password(password: &str) -> AppResult<()> {
    check_length("Password", password, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
}

/// Required plus inclusive length bounds, counted in characters.
fn check_length(field: &str, value: &str, min: usize, max: usize) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::validation(format!("The {} is required.", field)));
    }

    let length = value.chars().count();
    if length < min {
        return Err(AppError::validation(format!(
            "The {} must be at least {} characters long.",
            field, min
        )));
    }
    if length > max {
        return Err(AppError::validation(format!(
            "The {} must be at most {} characters long.",
            field, max
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: AppResult<()>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    fn valid_draft() -> ExampleDraft {
        ExampleDraft::new("Ann", "Lee", "ann@x.com", "Passw0rd1")
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate(&valid_draft()).is_ok());
    }

    #[test]
    fn test_name_boundaries() {
        assert!(validate_first_name("Al").is_ok());
        assert!(validate_first_name(&"a".repeat(100)).is_ok());
        assert!(validate_surname("Li").is_ok());
        assert!(validate_surname(&"b".repeat(100)).is_ok());

        assert_eq!(
            message(validate_first_name("")),
            "The First Name is required."
        );
        assert_eq!(
            message(validate_first_name("A")),
            "The First Name must be at least 2 characters long."
        );
        assert_eq!(
            message(validate_surname(&"b".repeat(101))),
            "The Surname must be at most 100 characters long."
        );
    }

    #[test]
    fn test_lengths_count_characters() {
        assert!(validate_first_name("Zoë").is_ok());
        assert!(validate_surname(&"é".repeat(100)).is_ok());
    }

    #[test]
    fn test_password_boundaries() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password(&"x".repeat(20)).is_ok());

        assert_eq!(message(validate_password("")), "The Password is required.");
        assert_eq!(
            message(validate_password("1234567")),
            "The Password must be at least 8 characters long."
        );
        assert_eq!(
            message(validate_password(&"x".repeat(21))),
            "The Password must be at most 20 characters long."
        );
    }

    #[test]
    fn test_email_grammar() {
        assert!(validate_email("ann@x.com").is_ok());
        assert!(validate_email("Ann.Lee+tag@Mail.Example.ORG").is_ok());

        assert_eq!(message(validate_email("")), "The Email is required.");
        for bad in ["ann", "ann@x", "ann@@x.com", "ann@x.com.", ".ann@x.com", "a b@x.com"] {
            assert_eq!(
                message(validate_email(bad)),
                "The Email is not a valid e-mail address.",
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_email_too_long() {
        let email = format!("{}@x.com", "a".repeat(95));
        assert_eq!(
            message(validate_email(&email)),
            "The Email must be at most 100 characters long."
        );
    }

    #[test]
    fn test_pipeline_reports_first_failure_only() {
        let draft = ExampleDraft::new("", "", "not-an-email", "short");
        assert_eq!(message(validate(&draft)), "The First Name is required.");

        let draft = ExampleDraft::new("Ann", "L", "not-an-email", "short");
        assert_eq!(
            message(validate(&draft)),
            "The Surname must be at least 2 characters long."
        );

        let draft = ExampleDraft::new("Ann", "Lee", "not-an-email", "short");
        assert_eq!(
            message(validate(&draft)),
            "The Email is not a valid e-mail address."
        );

        let draft = ExampleDraft::new("Ann", "Lee", "ann@x.com", "short");
        assert_eq!(
            message(validate(&draft)),
            "The Password must be at least 8 characters long."
        );
    }
}
