//! Login and signup form rendering

use super::field_renderer::{draw_field, draw_help_text, ERROR_TEXT};
use crate::app::App;
use crate::state::{FormValidator, SubmitPhase, ValidatedForm};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Maximum width of the account card
const FORM_WIDTH: u16 = 60;

/// Draw login form
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    draw_account_form(
        frame,
        area,
        " Welcome Back ",
        &app.state.login,
        "Don't have an account? Open Sign Up from the menu",
    );
}

/// Draw signup form
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    draw_account_form(
        frame,
        area,
        " Create Account ",
        &app.state.signup,
        "Already have an account? Open Login from the menu",
    );
}

fn draw_account_form<F: ValidatedForm>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    validator: &FormValidator<F>,
    footer: &str,
) {
    let width = FORM_WIDTH.min(area.width);
    let card = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, card);

    let form = &validator.form;
    let mut constraints: Vec<Constraint> = (0..form.field_count())
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit button
    constraints.push(Constraint::Length(1)); // Footer
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(card);

    for index in 0..form.field_count() {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[index], field, form.active_field() == index);
        }
    }

    let count = form.field_count();
    render_submit_button(frame, chunks[count], &validator.button);

    if validator.phase() == SubmitPhase::Blocked {
        let errors = validator.error_count();
        let noun = if errors == 1 { "field needs" } else { "fields need" };
        let summary = Paragraph::new(Line::from(Span::styled(
            format!("{errors} {noun} attention"),
            Style::default().fg(ERROR_TEXT),
        )));
        frame.render_widget(summary, chunks[count + 1]);
    } else {
        draw_help_text(frame, chunks[count + 1], footer);
    }
}
