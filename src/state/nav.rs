//! Navigation menu state

use super::app_state::View;

/// Links in the top navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavLink {
    #[default]
    Blogs,
    Profile,
    Login,
    Signup,
}

impl NavLink {
    pub const ALL: [NavLink; 4] = [Self::Blogs, Self::Profile, Self::Login, Self::Signup];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Blogs => "Blogs",
            Self::Profile => "Profile",
            Self::Login => "Login",
            Self::Signup => "Sign Up",
        }
    }

    /// View this link opens
    pub fn view(&self) -> View {
        match self {
            Self::Blogs => View::Blogs,
            Self::Profile => View::CreateProfile,
            Self::Login => View::Login,
            Self::Signup => View::Signup,
        }
    }

    /// Link that owns a view
    pub fn for_view(view: &View) -> Self {
        match view {
            View::Blogs => Self::Blogs,
            View::CreateProfile => Self::Profile,
            View::Login => Self::Login,
            View::Signup => Self::Signup,
        }
    }
}

/// Collapsible menu with a single active link
#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub menu_open: bool,
    pub active: NavLink,
    /// Link under the cursor while the menu is open
    pub highlighted: usize,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.highlighted = NavLink::ALL
                .iter()
                .position(|l| *l == self.active)
                .unwrap_or(0);
        }
    }

    /// Mark a link active and close the menu
    pub fn select_link(&mut self, link: NavLink) {
        self.active = link;
        self.menu_open = false;
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % NavLink::ALL.len();
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = self
            .highlighted
            .checked_sub(1)
            .unwrap_or(NavLink::ALL.len() - 1);
    }

    pub fn highlighted_link(&self) -> NavLink {
        NavLink::ALL[self.highlighted % NavLink::ALL.len()]
    }
}
