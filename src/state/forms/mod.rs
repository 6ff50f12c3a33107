//! Form domain layer
//!
//! Field value objects, per-field validation rules, the login/signup/profile
//! forms, and the validator that gates account form submission.

mod field;
mod form_state;
mod profile;
mod rules;
mod submission;
mod validator;

pub use field::{FieldTone, FormField};
pub use form_state::{Form, LoginForm, SignupForm, ValidatedForm};
pub use profile::{AvatarPreview, ProfileForm, BIO_MAX_CHARS};
pub use submission::{FormKind, Submission};
pub use validator::{ButtonState, FormValidator, SubmitButton, SubmitOutcome, SubmitPhase};
