//! UI module for rendering the TUI

mod blogs;
mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (nav_area, main_area) = layout::create_layout(frame.area());

    layout::draw_nav_bar(frame, nav_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Blogs => blogs::draw(frame, main_area, app),
        View::Login => forms::draw_login(frame, main_area, app),
        View::Signup => forms::draw_signup(frame, main_area, app),
        View::CreateProfile => forms::draw_profile(frame, main_area, app),
    }

    if app.state.nav.menu_open {
        layout::draw_menu(frame, main_area, app);
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
