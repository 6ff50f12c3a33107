//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::SAVE_MODIFIER;
use crate::state::{
    AppState, BlogFeed, Form, FormKind, ProfileForm, SubmitOutcome, View,
};
use crate::submit::{Outbox, SubmissionTarget};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Main application struct
pub struct App<T: SubmissionTarget = Outbox> {
    /// Current application state
    pub state: AppState,
    /// Receives validated form submissions
    pub target: T,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &TuiConfig) -> Self {
        let (feed, load_error) = match &config.feed_path {
            Some(path) => match BlogFeed::load(path) {
                Ok(feed) => (feed, None),
                Err(err) => {
                    tracing::warn!("Falling back to sample feed: {err:#}");
                    (BlogFeed::sample(), Some(format!("Could not load feed: {err}")))
                }
            },
            None => (BlogFeed::sample(), None),
        };

        let mut app = Self::with_target(AppState::new(feed), Outbox::new());
        if let Some(category) = &config.default_category {
            app.state.feed.filter_by_category(category, Instant::now());
        }
        app.state.status_message = load_error;
        app
    }
}

impl<T: SubmissionTarget> App<T> {
    pub fn with_target(state: AppState, target: T) -> Self {
        Self {
            state,
            target,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time-based state such as card fades
    pub fn tick(&mut self) {
        self.state.feed.tick(Instant::now());
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::F(2) {
            self.state.nav.toggle_menu();
            return Ok(());
        }

        // Open menu is modal
        if self.state.nav.menu_open {
            self.handle_menu_key(key);
            return Ok(());
        }

        match self.state.current_view {
            View::Blogs => self.handle_blogs_key(key),
            View::Login => self.handle_login_key(key),
            View::Signup => self.handle_signup_key(key),
            View::CreateProfile => self.handle_profile_key(key),
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.nav.highlight_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.nav.highlight_next(),
            KeyCode::Enter => {
                let link = self.state.nav.highlighted_link();
                self.state.open_view(link.view());
            }
            KeyCode::Esc => self.state.nav.toggle_menu(),
            _ => {}
        }
    }

    /// Handle keys in the Blogs view
    fn handle_blogs_key(&mut self, key: KeyEvent) {
        let now = Instant::now();

        if self.state.search_focused {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.state.search_focused = false,
                KeyCode::Backspace => self.state.feed.pop_query_char(now),
                KeyCode::Char(c) => self.state.feed.push_query_char(c, now),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('/') => self.state.search_focused = true,
            KeyCode::Char('m') => self.state.nav.toggle_menu(),
            KeyCode::Left | KeyCode::Char('h') => self.state.feed.prev_chip(now),
            KeyCode::Right | KeyCode::Char('l') => self.state.feed.next_chip(now),
            KeyCode::Up | KeyCode::Char('k') => self.state.feed.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.feed.select_next(),
            KeyCode::Char(' ') => {
                if let Some(liked) = self.state.feed.toggle_like_selected() {
                    tracing::debug!("like toggled: {liked}");
                }
            }
            KeyCode::Enter => {
                if let Some(card) = self.state.feed.selected_card() {
                    let message = format!("Opening blog post #{}...", card.id);
                    self.state.set_status(message);
                }
            }
            KeyCode::Char('n') => self
                .state
                .set_status("Redirecting to blog creation page..."),
            KeyCode::Char('p') => {
                self.state.open_view(View::CreateProfile);
                self.state.set_status("Opening your profile...");
            }
            _ => {}
        }
    }

    /// Handle keys in the Login view
    fn handle_login_key(&mut self, key: KeyEvent) {
        let login = &mut self.state.login;
        match key.code {
            KeyCode::Tab | KeyCode::Down => login.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => login.form.prev_field(),
            KeyCode::Enter => {
                let result = login.on_submit(&mut self.target);
                self.report_submit(FormKind::Login, result);
            }
            KeyCode::Esc => self.state.open_view(View::Blogs),
            KeyCode::Backspace => login.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                login.input_char(c)
            }
            _ => {}
        }
    }

    /// Handle keys in the Signup view
    fn handle_signup_key(&mut self, key: KeyEvent) {
        let signup = &mut self.state.signup;
        match key.code {
            KeyCode::Tab | KeyCode::Down => signup.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => signup.form.prev_field(),
            KeyCode::Enter => {
                let result = signup.on_submit(&mut self.target);
                self.report_submit(FormKind::Signup, result);
            }
            KeyCode::Esc => self.state.open_view(View::Blogs),
            KeyCode::Backspace => signup.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                signup.input_char(c)
            }
            _ => {}
        }
    }

    /// Handle keys in the Create Profile view
    fn handle_profile_key(&mut self, key: KeyEvent) {
        let profile = &mut self.state.profile;
        match key.code {
            KeyCode::Tab | KeyCode::Down => profile.next_field(),
            KeyCode::BackTab | KeyCode::Up => profile.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(SAVE_MODIFIER) => {
                let submission = profile.submission();
                match self.target.submit(submission) {
                    Ok(()) => self.state.set_status("Profile submitted"),
                    Err(err) => {
                        tracing::warn!("profile submission failed: {err:#}");
                        self.state.set_status(format!("Submission failed: {err}"));
                    }
                }
            }
            KeyCode::Enter if profile.active_field() == ProfileForm::PICTURE => {
                if let Err(err) = profile.load_avatar() {
                    self.state.set_status(err.to_string());
                }
            }
            KeyCode::Enter if profile.active_field() == ProfileForm::BIO => {
                profile.input_char('\n')
            }
            KeyCode::Esc => self.state.open_view(View::Blogs),
            KeyCode::Backspace => profile.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                profile.input_char(c)
            }
            _ => {}
        }
    }

    /// Surface a submit attempt in the status bar
    fn report_submit(&mut self, kind: FormKind, result: Result<SubmitOutcome>) {
        match result {
            Ok(SubmitOutcome::Blocked { failures }) => {
                let noun = if failures == 1 { "field" } else { "fields" };
                self.state
                    .set_status(format!("Please fix {failures} {noun} before continuing"));
            }
            Ok(SubmitOutcome::Proceeding) => {
                self.state
                    .set_status(format!("{} submitted", capitalize(kind.label())));
            }
            Ok(SubmitOutcome::Ignored) => {}
            Err(err) => {
                tracing::warn!("{} submission failed: {err:#}", kind.label());
                self.state.set_status(format!("Submission failed: {err}"));
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ButtonState, LoginForm, NavLink, SignupForm, SubmitPhase};
    use crate::submit::MockSubmissionTarget;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str<T: SubmissionTarget>(app: &mut App<T>, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn test_app() -> App {
        App::with_target(AppState::new(BlogFeed::sample()), Outbox::new())
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_starts_on_blogs() {
            let app = test_app();
            assert_eq!(app.state.current_view, View::Blogs);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_q_quits_from_blogs() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_menu_selects_view() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::F(2))).unwrap();
            assert!(app.state.nav.menu_open);
            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(!app.state.nav.menu_open);
            assert_eq!(app.state.current_view, View::Login);
            assert_eq!(app.state.nav.active, NavLink::Login);
        }

        #[test]
        fn test_menu_is_modal() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('m'))).unwrap();
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.state.nav.menu_open);
        }

        #[test]
        fn test_esc_leaves_form() {
            let mut app = test_app();
            app.state.open_view(View::Signup);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.current_view, View::Blogs);
        }
    }

    mod blogs {
        use super::*;

        #[test]
        fn test_search_typing_filters_cards() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('/'))).unwrap();
            assert!(app.state.search_focused);
            type_str(&mut app, "lisbon");
            assert_eq!(app.state.feed.query, "lisbon");
            // q is text while searching
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.state.search_focused);
        }

        #[test]
        fn test_arrow_keys_cycle_chips() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(app.state.feed.active_chip(), "technology");
            app.handle_key(key(KeyCode::Left)).unwrap();
            assert_eq!(app.state.feed.active_chip(), "all");
        }

        #[test]
        fn test_space_toggles_like() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char(' '))).unwrap();
            assert!(app.state.feed.cards[0].liked);
        }

        #[test]
        fn test_enter_reports_opening_post() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Opening blog post #2...")
            );
        }

        #[test]
        fn test_p_opens_profile_with_status() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('p'))).unwrap();
            assert_eq!(app.state.current_view, View::CreateProfile);
            assert_eq!(app.state.nav.active, NavLink::Profile);
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Opening your profile...")
            );
        }

        #[test]
        fn test_default_category_applied_on_start() {
            let config = TuiConfig {
                default_category: Some("Food".to_string()),
                ..Default::default()
            };
            let app = App::new(&config);
            assert_eq!(app.state.feed.active_chip(), "food");
        }

        #[test]
        fn test_missing_feed_falls_back_to_sample() {
            let config = TuiConfig {
                feed_path: Some("/definitely/not/feed.json".into()),
                ..Default::default()
            };
            let app = App::new(&config);
            assert_eq!(app.state.feed.cards.len(), 4);
            assert!(app
                .state
                .status_message
                .as_deref()
                .is_some_and(|m| m.starts_with("Could not load feed")));
        }
    }

    mod login {
        use super::*;

        #[test]
        fn test_empty_password_blocks_with_one_annotation() {
            let mut app = test_app();
            app.state.open_view(View::Login);
            type_str(&mut app, "a@b.com");
            app.handle_key(key(KeyCode::Enter)).unwrap();

            assert_eq!(app.state.login.error_count(), 1);
            assert_eq!(
                app.state.login.form.password.error(),
                Some("Password is required")
            );
            assert_eq!(app.state.login.button.state, ButtonState::Idle);
            assert!(app.target.pending().is_empty());
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Please fix 1 field before continuing")
            );

            // Editing the password removes its annotation
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_str(&mut app, "p");
            assert_eq!(app.state.login.error_count(), 0);
            assert_eq!(app.state.login.form.active_field(), LoginForm::PASSWORD);
        }

        #[test]
        fn test_valid_login_reaches_outbox_once() {
            let mut app = test_app();
            app.state.open_view(View::Login);
            type_str(&mut app, "a@b.com");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_str(&mut app, "hunter22");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();

            assert_eq!(app.target.pending().len(), 1);
            assert_eq!(app.target.pending()[0].form, FormKind::Login);
            assert_eq!(app.state.login.button.label(), "Logging in...");
            assert_eq!(app.state.status_message.as_deref(), Some("Login submitted"));
        }

        #[test]
        fn test_repeated_logins_all_reach_outbox() {
            let mut app = test_app();
            for _ in 0..40 {
                app.state.open_view(View::Login);
                app.state.login.form.email.set_text("a@b.com");
                app.state.login.form.password.set_text("pw");
                app.handle_key(key(KeyCode::Enter)).unwrap();
                assert_eq!(app.state.status_message.as_deref(), Some("Login submitted"));
            }
            assert_eq!(app.target.pending().len(), 40);
        }

        #[test]
        fn test_reopening_login_starts_fresh_page() {
            let mut app = test_app();
            app.state.open_view(View::Login);
            app.state.login.form.email.set_text("a@b.com");
            app.state.login.form.password.set_text("pw");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.login.phase(), SubmitPhase::Proceeding);

            app.state.open_view(View::Login);
            assert_eq!(app.state.login.phase(), SubmitPhase::Idle);
            assert_eq!(app.state.login.button.state, ButtonState::Idle);
        }

        #[test]
        fn test_target_failure_is_reported() {
            let mut target = MockSubmissionTarget::new();
            target
                .expect_submit()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("backend unavailable")));
            let mut app = App::with_target(AppState::default(), target);
            app.state.open_view(View::Login);
            app.state.login.form.email.set_text("a@b.com");
            app.state.login.form.password.set_text("pw");

            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Submission failed: backend unavailable")
            );
            assert_eq!(app.state.login.button.state, ButtonState::Idle);
            assert_eq!(app.state.login.phase(), SubmitPhase::Idle);

            // Still editable after the failure
            type_str(&mut app, "x");
            assert_eq!(app.state.login.form.email.as_text(), "a@b.comx");
        }
    }

    mod signup {
        use super::*;

        #[test]
        fn test_full_signup_flow() {
            let mut app = test_app();
            app.state.open_view(View::Signup);
            type_str(&mut app, "ab_1");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_str(&mut app, "a@b.com");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_str(&mut app, "Abcdefg1");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_str(&mut app, "Abcdefg1");
            assert_eq!(
                app.state.signup.form.active_field(),
                SignupForm::CONFIRMATION
            );
            app.handle_key(key(KeyCode::Enter)).unwrap();

            assert_eq!(app.state.signup.error_count(), 0);
            assert_eq!(app.state.signup.button.state, ButtonState::Loading);
            assert_eq!(app.target.pending().len(), 1);
            let submission = &app.target.pending()[0];
            assert_eq!(submission.value("password1"), Some("Abcdefg1"));
        }

        #[test]
        fn test_blocked_signup_counts_failures() {
            let mut app = test_app();
            app.state.open_view(View::Signup);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Please fix 4 fields before continuing")
            );
        }

        #[test]
        fn test_control_chars_are_not_typed() {
            let mut app = test_app();
            app.state.open_view(View::Signup);
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL))
                .unwrap();
            assert_eq!(app.state.signup.form.username.as_text(), "");
        }
    }

    mod profile {
        use super::*;

        #[test]
        fn test_bio_enter_inserts_newline() {
            let mut app = test_app();
            app.state.open_view(View::CreateProfile);
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_str(&mut app, "hi");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.profile.bio.as_text(), "hi\n");
            assert_eq!(app.state.profile.bio_counter(), "3/300");
        }

        #[test]
        fn test_missing_picture_reports_status() {
            let mut app = test_app();
            app.state.open_view(View::CreateProfile);
            app.state.profile.set_active_field(ProfileForm::PICTURE);
            type_str(&mut app, "/nope.png");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("No picture found at /nope.png")
            );
        }

        #[test]
        fn test_save_shortcut_submits_profile() {
            let mut app = test_app();
            app.state.open_view(View::CreateProfile);
            type_str(&mut app, "Ada");
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), SAVE_MODIFIER))
                .unwrap();
            assert_eq!(app.target.pending().len(), 1);
            assert_eq!(app.target.pending()[0].form, FormKind::Profile);
            assert_eq!(app.target.pending()[0].value("name"), Some("Ada"));
            assert_eq!(app.state.status_message.as_deref(), Some("Profile submitted"));
        }

        #[test]
        fn test_save_failure_is_reported_not_returned() {
            let mut target = MockSubmissionTarget::new();
            target
                .expect_submit()
                .times(2)
                .returning(|_| Err(anyhow::anyhow!("backend unavailable")));
            let mut app = App::with_target(AppState::default(), target);
            app.state.open_view(View::CreateProfile);

            let save = KeyEvent::new(KeyCode::Char('s'), SAVE_MODIFIER);
            assert!(app.handle_key(save).is_ok());
            assert!(app.handle_key(save).is_ok());
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Submission failed: backend unavailable")
            );
            assert!(!app.should_quit());
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("signup"), "Signup");
        assert_eq!(capitalize(""), "");
    }
}
