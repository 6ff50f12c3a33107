//! Application state definitions

use super::blog::BlogFeed;
use super::forms::{FormValidator, LoginForm, ProfileForm, SignupForm};
use super::nav::{NavLink, NavState};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Blogs,
    Login,
    Signup,
    CreateProfile,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Blogs => "Blogs",
            Self::Login => "Login",
            Self::Signup => "Create Account",
            Self::CreateProfile => "Create Profile",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub nav: NavState,

    // Feed page
    pub feed: BlogFeed,
    /// Keystrokes go to the search box
    pub search_focused: bool,

    // Account pages
    pub login: FormValidator<LoginForm>,
    pub signup: FormValidator<SignupForm>,
    pub profile: ProfileForm,

    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(feed: BlogFeed) -> Self {
        Self {
            feed,
            ..Default::default()
        }
    }

    /// Open a view as a fresh page: forms start empty and unlocked
    pub fn open_view(&mut self, view: View) {
        match view {
            View::Blogs => self.search_focused = false,
            View::Login => self.login = FormValidator::default(),
            View::Signup => self.signup = FormValidator::default(),
            View::CreateProfile => self.profile = ProfileForm::new(),
        }
        self.nav.select_link(NavLink::for_view(&view));
        self.current_view = view;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
