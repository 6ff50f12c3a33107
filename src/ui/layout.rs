//! Layout components (nav bar, menu, status bar)

use crate::app::App;
use crate::platform::{MENU_SHORTCUT, SAVE_SHORTCUT};
use crate::state::{NavLink, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Width of the dropdown menu
const MENU_WIDTH: u16 = 20;

/// Split the screen into nav bar and main content, leaving the last row for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the top navigation bar with the active link highlighted
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let nav = &app.state.nav;
    let toggle = if nav.menu_open { " ✕ " } else { " ☰ " };

    let mut spans = vec![
        Span::styled(toggle, Style::default().fg(Color::Cyan)),
        Span::styled(
            "Inkpost ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for link in NavLink::ALL {
        let style = if link == nav.active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(link.label(), style));
    }

    let queued = app.target.pending().len();
    if queued > 0 {
        spans.push(Span::styled(
            format!("  ✉ {queued} queued"),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the dropdown menu over the top-left of the content area
pub fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let nav = &app.state.nav;
    let menu_area = Rect {
        x: area.x,
        y: area.y,
        width: MENU_WIDTH.min(area.width),
        height: (NavLink::ALL.len() as u16 + 2).min(area.height),
    };

    let items: Vec<ListItem> = NavLink::ALL
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            let marker = if *link == nav.active { "● " } else { "  " };
            let style = if idx == nav.highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{marker}{}", link.label())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, menu_area);
    frame.render_widget(list, menu_area);
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.title()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    // Status message goes first; long hints are the part that gets clipped
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::styled(
            format!(" {msg} "),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::raw("|"));
    }

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view, app.state.search_focused);
    spans.push(Span::styled(
        format!(" {hints}"),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}

/// Key hints for the current view
fn get_view_hints(view: &View, search_focused: bool) -> String {
    match view {
        View::Blogs if search_focused => "type to search | Enter/Esc: done".to_string(),
        View::Blogs => format!(
            "/: search | ←/→: category | ↑/↓: select | Space: like | Enter: open | {MENU_SHORTCUT}: menu | q: quit"
        ),
        View::Login | View::Signup => {
            format!("Tab: next field | Enter: submit | Esc: back | {MENU_SHORTCUT}: menu")
        }
        View::CreateProfile => format!(
            "Tab: next field | Enter: preview picture | {SAVE_SHORTCUT}: save | Esc: back"
        ),
    }
}
