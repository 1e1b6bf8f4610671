use crate::core::errors::{FieldError, UserError};
use crate::core::models::user::UserRequest;
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 50;
pub const PASSWORD_MIN_LENGTH: usize = 10;
pub const PASSWORD_MAX_LENGTH: usize = 50;

pub const NOT_BLANK_MESSAGE: &str = "must not be null or empty";
pub const INVALID_EMAIL_MESSAGE: &str = "invalid email";
pub const BLANK_SPACES_MESSAGE: &str = "Field cannot have blank spaces";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let atom = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+";
    let label = r"[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?";
    let pattern = format!(r"^{atom}(?:\.{atom})*@{label}(?:\.{label})*$");
    Regex::new(&pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
});

/// Whether fields missing from the request count as null or are simply skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Patch,
}

/// Checks every field of `request` and collects all violations in field order.
pub fn validate_user_request(request: &UserRequest, mode: ValidationMode) -> Result<(), UserError> {
    let mut errors = Vec::new();

    if mode == ValidationMode::Create || request.name.is_some() {
        validate_name(request.name.as_deref(), &mut errors);
    }
    if mode == ValidationMode::Create || request.email.is_some() {
        validate_email(request.email.as_deref(), &mut errors);
    }
    if mode == ValidationMode::Create || request.password.is_some() {
        validate_password(request.password.as_deref(), &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(UserError::Validation(errors))
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

pub fn validate_name(name: Option<&str>, errors: &mut Vec<FieldError>) {
    if let Some(name) = name {
        let length = name.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            errors.push(FieldError::new(
                "name",
                format!("must be between {} and {} characters", NAME_MIN_LENGTH, NAME_MAX_LENGTH),
            ));
        }
    }
    if is_blank(name) {
        errors.push(FieldError::new("name", NOT_BLANK_MESSAGE));
    }
}

pub fn validate_email(email: Option<&str>, errors: &mut Vec<FieldError>) {
    // An empty address is left to the not-blank check.
    if let Some(email) = email.filter(|e| !e.is_empty()) {
        if !EMAIL_RE.is_match(email) {
            errors.push(FieldError::new("email", INVALID_EMAIL_MESSAGE));
        }
    }
    if is_blank(email) {
        errors.push(FieldError::new("email", NOT_BLANK_MESSAGE));
    }
    if let Some(email) = email {
        if email.trim() != email {
            errors.push(FieldError::new("email", BLANK_SPACES_MESSAGE));
        }
    }
}

pub fn validate_password(password: Option<&str>, errors: &mut Vec<FieldError>) {
    let Some(password) = password else {
        errors.push(FieldError::new("password", NOT_BLANK_MESSAGE));
        return;
    };

    let length = password.chars().count();
    if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length) {
        errors.push(FieldError::new(
            "password",
            format!(
                "must be between {} and {} characters",
                PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
            ),
        ));
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        errors.push(FieldError::new("password", "must contain at least one uppercase letter"));
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        errors.push(FieldError::new("password", "must contain at least one lowercase letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new("password", "must contain at least one digit"));
    }
    if !password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()) {
        errors.push(FieldError::new("password", "must contain at least one special character"));
    }
}
