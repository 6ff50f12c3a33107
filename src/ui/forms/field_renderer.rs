//! Field rendering utilities for forms

use crate::state::{FieldTone, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Inline error text
pub const ERROR_TEXT: Color = Color::Rgb(220, 38, 38);

/// Border color for a field's tone. Active neutral fields use the focus color.
fn tone_color(tone: FieldTone, is_active: bool) -> Color {
    match tone {
        FieldTone::Errored => Color::Rgb(252, 165, 165),
        FieldTone::Valid => Color::Rgb(134, 239, 172),
        FieldTone::Pending => Color::Rgb(251, 191, 36),
        FieldTone::Neutral if is_active => Color::Cyan,
        FieldTone::Neutral => Color::DarkGray,
    }
}

/// Draw a form field with its error annotation on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    draw_field_with_icon(frame, area, field, is_active, None);
}

/// Draw a form field, optionally prefixed by an icon in the given color
pub fn draw_field_with_icon(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    icon: Option<(&str, Color)>,
) {
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let border_style = Style::default().fg(tone_color(field.tone, is_active));

    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        let mut spans = Vec::new();
        if let Some((symbol, color)) = icon {
            spans.push(Span::styled(format!("{symbol} "), Style::default().fg(color)));
        }
        spans.push(Span::styled(display_value, text_style));
        spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        Paragraph::new(Line::from(spans))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(error) = field.error() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(ERROR_TEXT),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
