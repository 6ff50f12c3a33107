//! Button component for TUI

use crate::state::{ButtonState, SubmitButton};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button; disabled buttons are dimmed
fn render_button(frame: &mut Frame, area: Rect, content: &str, is_enabled: bool) {
    let (border_style, text_style) = if is_enabled {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a form's submit button; a loading button is dimmed and disabled
pub fn render_submit_button(frame: &mut Frame, area: Rect, button: &SubmitButton) {
    let is_enabled = button.state == ButtonState::Idle;
    render_button(frame, area, button.label(), is_enabled);
}
