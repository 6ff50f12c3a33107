//! Create profile form rendering

use super::field_renderer::{draw_field, draw_field_with_icon, draw_help_text};
use crate::app::App;
use crate::state::{AvatarPreview, Form, ProfileForm, BIO_MAX_CHARS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Input icon color while its field has focus
const ICON_FOCUSED: Color = Color::Rgb(59, 130, 246);
/// Input icon color otherwise
const ICON_BLURRED: Color = Color::Rgb(148, 163, 184);

fn icon_color(form: &ProfileForm, index: usize) -> Color {
    if form.is_focused(index) {
        ICON_FOCUSED
    } else {
        ICON_BLURRED
    }
}

/// Draw create profile form
pub fn draw_profile(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.profile;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Avatar
            Constraint::Length(3), // Name
            Constraint::Min(4),    // Bio
            Constraint::Length(1), // Bio counter
            Constraint::Length(3), // Website
            Constraint::Length(3), // Picture path
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Create Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    draw_avatar(frame, chunks[0], &form.avatar);

    draw_field_with_icon(
        frame,
        chunks[1],
        &form.name,
        form.is_focused(ProfileForm::NAME),
        Some(("👤", icon_color(form, ProfileForm::NAME))),
    );
    draw_field(frame, chunks[2], &form.bio, form.is_focused(ProfileForm::BIO));

    let counter_style = if form.bio_char_count() >= BIO_MAX_CHARS {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(form.bio_counter(), counter_style)))
            .alignment(ratatui::layout::Alignment::Right),
        chunks[3],
    );

    draw_field_with_icon(
        frame,
        chunks[4],
        &form.website,
        form.is_focused(ProfileForm::WEBSITE),
        Some(("🔗", icon_color(form, ProfileForm::WEBSITE))),
    );
    draw_field_with_icon(
        frame,
        chunks[5],
        &form.picture,
        form.is_focused(ProfileForm::PICTURE),
        Some(("🖼", icon_color(form, ProfileForm::PICTURE))),
    );

    let active = form
        .get_field(form.active_field())
        .map(|f| f.label.as_str())
        .unwrap_or_default();
    draw_help_text(frame, chunks[6], &format!("Editing: {active}"));
}

fn draw_avatar(frame: &mut Frame, area: Rect, avatar: &AvatarPreview) {
    let line = match avatar {
        AvatarPreview::Icon => Line::from(Span::styled(
            "  ( 👤 )  No picture selected",
            Style::default().fg(ICON_BLURRED),
        )),
        AvatarPreview::Image {
            file_name,
            size_bytes,
        } => Line::from(vec![
            Span::styled("  [ 🖼 ]  ", Style::default().fg(ICON_FOCUSED)),
            Span::raw(format!("{file_name} ({} KB)", size_bytes.div_ceil(1024))),
        ]),
    };
    let block = Block::default()
        .title(" Avatar ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(line).block(block), area);
}
