//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `account_form`: Login and signup forms
//! - `profile_form`: Create profile form

mod account_form;
mod field_renderer;
mod profile_form;

pub use account_form::{draw_login, draw_signup};
pub use profile_form::draw_profile;
