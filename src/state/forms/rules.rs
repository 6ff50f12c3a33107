//! Field validation rules
//!
//! Each field has an ordered chain of pure rules. The chain stops at the first
//! failing rule, so only one message is ever reported per field.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum password length for new accounts
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// Minimum username length
pub const USERNAME_MIN_LENGTH: usize = 3;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").unwrap());

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingValue,
    TooShort,
    InvalidFormat,
    /// Password lacks an uppercase letter, lowercase letter or digit
    WeakComposition,
    MismatchedConfirmation,
    DisallowedCharacters,
}

/// A user-correctable validation failure with the message shown next to the field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: &'static str,
}

impl ValidationError {
    pub const fn new(kind: ValidationErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

/// Result of validating one field
pub type ValidationResult = Result<(), ValidationError>;

/// A single check over a field value
pub type Rule = fn(&str) -> ValidationResult;

/// Run rules in order; the first failure wins
pub fn first_failure(value: &str, rules: &[Rule]) -> ValidationResult {
    rules.iter().try_for_each(|rule| rule(value))
}

fn require(value: &str, message: &'static str) -> ValidationResult {
    if value.is_empty() {
        Err(ValidationError::new(
            ValidationErrorKind::MissingValue,
            message,
        ))
    } else {
        Ok(())
    }
}

// Email

fn email_required(value: &str) -> ValidationResult {
    require(value, "Email is required")
}

fn email_format(value: &str) -> ValidationResult {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidFormat,
            "Please enter a valid email address",
        ))
    }
}

pub const EMAIL_RULES: &[Rule] = &[email_required, email_format];

// Password

fn password_required(value: &str) -> ValidationResult {
    require(value, "Password is required")
}

fn password_length(value: &str) -> ValidationResult {
    if value.chars().count() < PASSWORD_MIN_LENGTH {
        Err(ValidationError::new(
            ValidationErrorKind::TooShort,
            "Password must be at least 8 characters",
        ))
    } else {
        Ok(())
    }
}

fn password_composition(value: &str) -> ValidationResult {
    if PasswordStrength::of(value).has_composition() {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::WeakComposition,
            "Password must contain uppercase, lowercase, and a number",
        ))
    }
}

/// Login only checks presence; the account service verifies the rest
pub const LOGIN_PASSWORD_RULES: &[Rule] = &[password_required];

pub const NEW_PASSWORD_RULES: &[Rule] = &[password_required, password_length, password_composition];

// Username

fn username_required(value: &str) -> ValidationResult {
    require(value, "Username is required")
}

fn username_length(value: &str) -> ValidationResult {
    if value.chars().count() < USERNAME_MIN_LENGTH {
        Err(ValidationError::new(
            ValidationErrorKind::TooShort,
            "Username must be at least 3 characters",
        ))
    } else {
        Ok(())
    }
}

fn username_charset(value: &str) -> ValidationResult {
    if USERNAME_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::DisallowedCharacters,
            "Username can only contain letters, numbers, and underscores",
        ))
    }
}

pub const USERNAME_RULES: &[Rule] = &[username_required, username_length, username_charset];

// Confirmation

/// Confirmation depends on a second field, so it is not a plain `Rule`
pub fn validate_confirmation(password: &str, confirmation: &str) -> ValidationResult {
    require(confirmation, "Please confirm your password")?;
    if password != confirmation {
        return Err(ValidationError::new(
            ValidationErrorKind::MismatchedConfirmation,
            "Passwords do not match",
        ));
    }
    Ok(())
}

/// Which composition rules a password currently meets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordStrength {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_length: bool,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        Self {
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_length: password.chars().count() >= PASSWORD_MIN_LENGTH,
        }
    }

    fn has_composition(&self) -> bool {
        self.has_upper && self.has_lower && self.has_digit
    }

    /// All rules met
    pub fn is_strong(&self) -> bool {
        self.has_composition() && self.has_length
    }
}
