//! Form traits and the account form structs

use super::field::{FieldTone, FormField};
use super::rules::{
    first_failure, validate_confirmation, PasswordStrength, ValidationResult, EMAIL_RULES,
    LOGIN_PASSWORD_RULES, NEW_PASSWORD_RULES, USERNAME_RULES,
};
use super::submission::{FormKind, Submission};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.get_field_mut(index)
    }
}

/// A form whose submission is gated by client-side validation
pub trait ValidatedForm: Form {
    const KIND: FormKind;
    /// Button label while idle
    const SUBMIT_LABEL: &'static str;
    /// Button label once the submission is under way
    const LOADING_LABEL: &'static str;

    /// Field indices in the order they are validated on submit
    fn validation_order(&self) -> &'static [usize];

    /// Validate one field against its current value
    fn validate_field(&self, index: usize) -> ValidationResult;

    /// Advisory feedback after a field was edited. Never blocks submission.
    fn live_feedback(&mut self, _index: usize) {}

    fn submission(&self) -> Submission;
}

// Login Form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl LoginForm {
    pub const EMAIL: usize = 0;
    pub const PASSWORD: usize = 1;

    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            Self::EMAIL => Some(&self.email),
            Self::PASSWORD => Some(&self.password),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            Self::EMAIL => Some(&mut self.email),
            Self::PASSWORD => Some(&mut self.password),
            _ => None,
        }
    }
}

impl ValidatedForm for LoginForm {
    const KIND: FormKind = FormKind::Login;
    const SUBMIT_LABEL: &'static str = "Login";
    const LOADING_LABEL: &'static str = "Logging in...";

    fn validation_order(&self) -> &'static [usize] {
        &[Self::EMAIL, Self::PASSWORD]
    }

    fn validate_field(&self, index: usize) -> ValidationResult {
        match index {
            Self::EMAIL => first_failure(self.email.trimmed(), EMAIL_RULES),
            Self::PASSWORD => first_failure(self.password.trimmed(), LOGIN_PASSWORD_RULES),
            _ => Ok(()),
        }
    }

    fn submission(&self) -> Submission {
        Submission::new(Self::KIND)
            .field(&self.email.name, self.email.as_text())
            .field(&self.password.name, self.password.as_text())
    }
}

// Signup Form
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub username: FormField,
    pub email: FormField,
    pub password1: FormField,
    pub password2: FormField,
    pub active_field_index: usize,
}

impl SignupForm {
    pub const USERNAME: usize = 0;
    pub const EMAIL: usize = 1;
    pub const PASSWORD: usize = 2;
    pub const CONFIRMATION: usize = 3;

    pub fn new() -> Self {
        Self {
            username: FormField::text("username", "Username"),
            email: FormField::text("email", "Email"),
            password1: FormField::secret("password1", "Password"),
            password2: FormField::secret("password2", "Confirm Password"),
            active_field_index: 0,
        }
    }

    /// Recolor the primary password by how many composition rules it meets
    fn update_strength_tone(&mut self) {
        let password = self.password1.as_text();
        if password.is_empty() {
            return;
        }
        self.password1.tone = if PasswordStrength::of(password).is_strong() {
            FieldTone::Valid
        } else {
            FieldTone::Pending
        };
    }

    /// Recolor the confirmation by whether it matches the primary password
    fn update_match_tone(&mut self) {
        if self.password2.is_empty() || self.password1.is_empty() {
            return;
        }
        if self.password2.as_text() == self.password1.as_text() {
            self.password2.clear_error();
            self.password2.tone = FieldTone::Valid;
        } else {
            self.password2.tone = FieldTone::Errored;
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        4
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            Self::USERNAME => Some(&self.username),
            Self::EMAIL => Some(&self.email),
            Self::PASSWORD => Some(&self.password1),
            Self::CONFIRMATION => Some(&self.password2),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            Self::USERNAME => Some(&mut self.username),
            Self::EMAIL => Some(&mut self.email),
            Self::PASSWORD => Some(&mut self.password1),
            Self::CONFIRMATION => Some(&mut self.password2),
            _ => None,
        }
    }
}

impl ValidatedForm for SignupForm {
    const KIND: FormKind = FormKind::Signup;
    const SUBMIT_LABEL: &'static str = "Create Account";
    const LOADING_LABEL: &'static str = "Creating account...";

    fn validation_order(&self) -> &'static [usize] {
        &[
            Self::USERNAME,
            Self::EMAIL,
            Self::PASSWORD,
            Self::CONFIRMATION,
        ]
    }

    fn validate_field(&self, index: usize) -> ValidationResult {
        // Passwords are compared as typed; only the text fields are trimmed
        match index {
            Self::USERNAME => first_failure(self.username.trimmed(), USERNAME_RULES),
            Self::EMAIL => first_failure(self.email.trimmed(), EMAIL_RULES),
            Self::PASSWORD => first_failure(self.password1.as_text(), NEW_PASSWORD_RULES),
            Self::CONFIRMATION => {
                validate_confirmation(self.password1.as_text(), self.password2.as_text())
            }
            _ => Ok(()),
        }
    }

    fn live_feedback(&mut self, index: usize) {
        match index {
            Self::PASSWORD => self.update_strength_tone(),
            Self::CONFIRMATION => self.update_match_tone(),
            _ => {}
        }
    }

    fn submission(&self) -> Submission {
        Submission::new(Self::KIND)
            .field(&self.username.name, self.username.as_text())
            .field(&self.email.name, self.email.as_text())
            .field(&self.password1.name, self.password1.as_text())
            .field(&self.password2.name, self.password2.as_text())
    }
}
