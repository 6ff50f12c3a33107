//! Submission gate for account forms
//!
//! `FormValidator` owns a form, clears annotations as fields are edited, and on
//! submit validates every field in form order. Submission is handed to the
//! target only when no field fails, and at most once per validator.

use super::form_state::ValidatedForm;
use super::rules::ValidationResult;
use crate::submit::SubmissionTarget;
use anyhow::Result;

/// Presentation state of the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    /// Disabled and dimmed; there is no way back to Idle
    Loading,
}

/// Submit button with its idle and in-progress labels
#[derive(Debug, Clone)]
pub struct SubmitButton {
    original_label: &'static str,
    loading_label: &'static str,
    pub state: ButtonState,
}

impl SubmitButton {
    pub fn new(original_label: &'static str, loading_label: &'static str) -> Self {
        Self {
            original_label,
            loading_label,
            state: ButtonState::Idle,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.state {
            ButtonState::Idle => self.original_label,
            ButtonState::Loading => self.loading_label,
        }
    }

    /// Idle to Loading. Returns false if already loading.
    fn start_loading(&mut self) -> bool {
        if self.state == ButtonState::Loading {
            return false;
        }
        self.state = ButtonState::Loading;
        true
    }
}

/// Where a form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    /// Errors shown; the next edit returns to Idle
    Blocked,
    /// Submission handed off; terminal
    Proceeding,
}

/// What a submit attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; nothing was submitted
    Blocked { failures: usize },
    /// Submission was handed to the target
    Proceeding,
    /// Already submitted; the attempt was ignored
    Ignored,
}

/// Gates a form's submission behind its field validators
#[derive(Debug, Clone)]
pub struct FormValidator<F: ValidatedForm> {
    pub form: F,
    pub button: SubmitButton,
    phase: SubmitPhase,
}

impl<F: ValidatedForm + Default> Default for FormValidator<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: ValidatedForm> FormValidator<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            button: SubmitButton::new(F::SUBMIT_LABEL, F::LOADING_LABEL),
            phase: SubmitPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// True once the submission has been handed off; edits are ignored from then on
    pub fn is_locked(&self) -> bool {
        self.phase == SubmitPhase::Proceeding
    }

    /// Validate a single field without touching its annotation
    pub fn validate(&self, index: usize) -> ValidationResult {
        self.form.validate_field(index)
    }

    /// A field was edited: drop its annotation, then apply live feedback
    pub fn on_input(&mut self, index: usize) {
        if self.is_locked() {
            return;
        }
        if let Some(field) = self.form.get_field_mut(index) {
            field.clear_error();
        }
        if self.phase == SubmitPhase::Blocked {
            self.phase = SubmitPhase::Idle;
        }
        self.form.live_feedback(index);
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if self.is_locked() {
            return;
        }
        let index = self.form.active_field();
        if let Some(field) = self.form.get_field_mut(index) {
            field.push_char(c);
        }
        self.on_input(index);
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if self.is_locked() {
            return;
        }
        let index = self.form.active_field();
        if let Some(field) = self.form.get_field_mut(index) {
            field.pop_char();
        }
        self.on_input(index);
    }

    /// Number of fields currently showing an error annotation
    pub fn error_count(&self) -> usize {
        (0..self.form.field_count())
            .filter_map(|i| self.form.get_field(i))
            .filter(|f| f.has_error())
            .count()
    }

    /// Run every validator in form order and either block or hand off the submission
    pub fn on_submit(&mut self, target: &mut dyn SubmissionTarget) -> Result<SubmitOutcome> {
        if self.is_locked() {
            tracing::debug!("{} form already submitted, ignoring", F::KIND.label());
            return Ok(SubmitOutcome::Ignored);
        }

        self.phase = SubmitPhase::Validating;
        let order = self.form.validation_order();

        for &index in order {
            if let Some(field) = self.form.get_field_mut(index) {
                field.clear_error();
            }
        }

        let mut failures = 0;
        for &index in order {
            if let Err(err) = self.validate(index) {
                if let Some(field) = self.form.get_field_mut(index) {
                    tracing::debug!(field = %field.name, kind = ?err.kind, "validation failed");
                    field.annotate(err.message);
                }
                failures += 1;
            }
        }

        if failures > 0 {
            self.phase = SubmitPhase::Blocked;
            tracing::info!("{} submission blocked: {failures} invalid field(s)", F::KIND.label());
            return Ok(SubmitOutcome::Blocked { failures });
        }

        tracing::info!("{} form valid, submitting", F::KIND.label());
        if let Err(err) = target.submit(self.form.submission()) {
            // Nothing was handed off; the form stays editable
            self.phase = SubmitPhase::Idle;
            return Err(err);
        }
        self.button.start_loading();
        self.phase = SubmitPhase::Proceeding;
        Ok(SubmitOutcome::Proceeding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::FieldTone;
    use crate::state::forms::form_state::{Form, LoginForm, SignupForm};
    use crate::state::forms::submission::FormKind;
    use crate::submit::MockSubmissionTarget;

    fn valid_signup() -> FormValidator<SignupForm> {
        let mut validator = FormValidator::<SignupForm>::default();
        validator.form.username.set_text("ab_1");
        validator.form.email.set_text("a@b.com");
        validator.form.password1.set_text("Abcdefg1");
        validator.form.password2.set_text("Abcdefg1");
        validator
    }

    fn type_text<F: ValidatedForm>(validator: &mut FormValidator<F>, text: &str) {
        for c in text.chars() {
            validator.input_char(c);
        }
    }

    mod submit_button {
        use super::*;

        #[test]
        fn test_idle_shows_original_label() {
            let button = SubmitButton::new("Login", "Logging in...");
            assert_eq!(button.label(), "Login");
            assert_eq!(button.state, ButtonState::Idle);
        }

        #[test]
        fn test_loading_is_one_way() {
            let mut button = SubmitButton::new("Login", "Logging in...");
            assert!(button.start_loading());
            assert!(!button.start_loading());
            assert_eq!(button.label(), "Logging in...");
            assert_eq!(button.state, ButtonState::Loading);
        }
    }

    mod signup {
        use super::*;

        #[test]
        fn test_valid_signup_submits_exactly_once() {
            let mut validator = valid_signup();
            let mut target = MockSubmissionTarget::new();
            target
                .expect_submit()
                .withf(|s| s.form == FormKind::Signup && s.value("username") == Some("ab_1"))
                .times(1)
                .returning(|_| Ok(()));

            let outcome = validator.on_submit(&mut target).unwrap();
            assert_eq!(outcome, SubmitOutcome::Proceeding);
            assert_eq!(validator.button.state, ButtonState::Loading);
            assert_eq!(validator.button.label(), "Creating account...");
            assert_eq!(validator.phase(), SubmitPhase::Proceeding);
            assert_eq!(validator.error_count(), 0);

            // A second press while loading is swallowed
            let again = validator.on_submit(&mut target).unwrap();
            assert_eq!(again, SubmitOutcome::Ignored);
        }

        #[test]
        fn test_invalid_signup_annotates_each_failing_field() {
            let mut validator = FormValidator::<SignupForm>::default();
            validator.form.username.set_text("ab!");
            validator.form.email.set_text("a@b.com");
            validator.form.password1.set_text("abcdefgh");
            let mut target = MockSubmissionTarget::new();
            target.expect_submit().never();

            let outcome = validator.on_submit(&mut target).unwrap();
            assert_eq!(outcome, SubmitOutcome::Blocked { failures: 3 });
            assert_eq!(validator.button.state, ButtonState::Idle);
            assert_eq!(
                validator.form.username.error(),
                Some("Username can only contain letters, numbers, and underscores")
            );
            assert!(validator.form.email.error().is_none());
            assert_eq!(
                validator.form.password1.error(),
                Some("Password must contain uppercase, lowercase, and a number")
            );
            assert_eq!(
                validator.form.password2.error(),
                Some("Please confirm your password")
            );
        }

        #[test]
        fn test_resubmit_replaces_annotations() {
            let mut validator = FormValidator::<SignupForm>::default();
            let mut target = MockSubmissionTarget::new();
            target.expect_submit().never();

            validator.on_submit(&mut target).unwrap();
            validator.on_submit(&mut target).unwrap();
            assert_eq!(validator.error_count(), 4);
            assert_eq!(validator.form.username.error(), Some("Username is required"));
        }

        #[test]
        fn test_typing_password_updates_strength_tone() {
            let mut validator = FormValidator::<SignupForm>::default();
            validator.form.set_active_field(SignupForm::PASSWORD);
            type_text(&mut validator, "Abc");
            assert_eq!(validator.form.password1.tone, FieldTone::Pending);
            type_text(&mut validator, "defg1");
            assert_eq!(validator.form.password1.tone, FieldTone::Valid);
        }

        #[test]
        fn test_typing_matching_confirmation_turns_valid() {
            let mut validator = FormValidator::<SignupForm>::default();
            validator.form.password1.set_text("Abcdefg1");
            validator.form.set_active_field(SignupForm::CONFIRMATION);
            type_text(&mut validator, "Abcdefg");
            assert_eq!(validator.form.password2.tone, FieldTone::Errored);
            validator.input_char('1');
            assert_eq!(validator.form.password2.tone, FieldTone::Valid);
        }
    }

    mod login {
        use super::*;

        #[test]
        fn test_empty_password_shows_one_annotation() {
            let mut validator = FormValidator::<LoginForm>::default();
            validator.form.email.set_text("a@b.com");
            let mut target = MockSubmissionTarget::new();
            target.expect_submit().never();

            let outcome = validator.on_submit(&mut target).unwrap();
            assert_eq!(outcome, SubmitOutcome::Blocked { failures: 1 });
            assert_eq!(validator.error_count(), 1);
            assert_eq!(validator.form.password.error(), Some("Password is required"));
            assert_eq!(validator.form.password.tone, FieldTone::Errored);
            assert_eq!(validator.button.state, ButtonState::Idle);
            assert_eq!(validator.phase(), SubmitPhase::Blocked);
        }

        #[test]
        fn test_edit_clears_only_the_edited_field() {
            let mut validator = FormValidator::<LoginForm>::default();
            let mut target = MockSubmissionTarget::new();
            target.expect_submit().never();
            validator.on_submit(&mut target).unwrap();
            assert_eq!(validator.error_count(), 2);

            validator.form.set_active_field(LoginForm::PASSWORD);
            validator.input_char('x');
            assert!(!validator.form.password.has_error());
            assert_eq!(validator.form.password.tone, FieldTone::Neutral);
            // Email still carries its annotation; it was not re-validated
            assert_eq!(validator.form.email.error(), Some("Email is required"));
            assert_eq!(validator.phase(), SubmitPhase::Idle);
        }

        #[test]
        fn test_on_input_twice_on_clean_field_is_noop() {
            let mut validator = FormValidator::<LoginForm>::default();
            validator.on_input(LoginForm::EMAIL);
            validator.on_input(LoginForm::EMAIL);
            assert_eq!(validator.error_count(), 0);
            assert_eq!(validator.phase(), SubmitPhase::Idle);
        }

        #[test]
        fn test_on_input_out_of_range_is_noop() {
            let mut validator = FormValidator::<LoginForm>::default();
            validator.on_input(42);
            assert_eq!(validator.error_count(), 0);
        }

        #[test]
        fn test_valid_login_locks_form() {
            let mut validator = FormValidator::<LoginForm>::default();
            type_text(&mut validator, "a@b.com");
            validator.form.next_field();
            type_text(&mut validator, "pw");

            let mut target = MockSubmissionTarget::new();
            target.expect_submit().times(1).returning(|_| Ok(()));
            assert_eq!(
                validator.on_submit(&mut target).unwrap(),
                SubmitOutcome::Proceeding
            );

            validator.backspace();
            validator.input_char('z');
            assert_eq!(validator.form.password.as_text(), "pw");
            assert!(validator.is_locked());
        }

        #[test]
        fn test_target_error_leaves_form_editable() {
            let mut validator = FormValidator::<LoginForm>::default();
            validator.form.email.set_text("a@b.com");
            validator.form.password.set_text("pw");
            let mut failing = MockSubmissionTarget::new();
            failing
                .expect_submit()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("account service unavailable")));

            assert!(validator.on_submit(&mut failing).is_err());
            assert_eq!(validator.button.state, ButtonState::Idle);
            assert_eq!(validator.button.label(), "Login");
            assert_eq!(validator.phase(), SubmitPhase::Idle);
            assert!(!validator.is_locked());
            assert_eq!(validator.error_count(), 0);

            // The same valid form goes through once the target recovers
            let mut target = MockSubmissionTarget::new();
            target.expect_submit().times(1).returning(|_| Ok(()));
            assert_eq!(
                validator.on_submit(&mut target).unwrap(),
                SubmitOutcome::Proceeding
            );
            assert_eq!(validator.button.state, ButtonState::Loading);
        }

        #[test]
        fn test_validate_does_not_annotate() {
            let validator = FormValidator::<LoginForm>::default();
            assert!(validator.validate(LoginForm::EMAIL).is_err());
            assert!(!validator.form.email.has_error());
        }
    }
}
