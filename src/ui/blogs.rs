//! Blog feed rendering: search box, category chips and cards

use crate::app::App;
use crate::state::BlogCard;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::time::Instant;

/// Heart color for a liked card
const LIKED: Color = Color::Rgb(239, 68, 68);

/// Draw the feed page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Chips
            Constraint::Min(0),    // Cards
        ])
        .split(area);

    draw_search_box(frame, chunks[0], app);
    draw_chips(frame, chunks[1], app);
    draw_cards(frame, chunks[2], app);
}

fn draw_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.search_focused;
    let query = &app.state.feed.query;

    let content = if query.is_empty() && !focused {
        Line::from(Span::styled(
            "Search posts, authors... (/)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let cursor = if focused { "▌" } else { "" };
        Line::from(vec![
            Span::raw(query.as_str()),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(" 🔍 Search ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn draw_chips(frame: &mut Frame, area: Rect, app: &App) {
    let feed = &app.state.feed;
    let mut spans = vec![Span::raw(" ")];
    for (idx, chip) in feed.chips().iter().enumerate() {
        let style = if feed.is_chip_active(idx) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {chip} "), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_cards(frame: &mut Frame, area: Rect, app: &App) {
    let feed = &app.state.feed;
    let now = Instant::now();

    let items: Vec<ListItem> = feed
        .listed()
        .map(|(_, card)| card_item(card, now))
        .collect();

    let title = format!(" Posts: {} ({}) ", feed.active_chip(), feed.listed_count());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    if feed.listed_count() > 0 {
        list_state.select(Some(feed.selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn card_item(card: &BlogCard, now: Instant) -> ListItem<'static> {
    // Fading cards drop to gray, then dim, before disappearing
    let opacity = card.opacity(now);
    let base = if opacity >= 1.0 {
        Style::default()
    } else if opacity > 0.5 {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };

    let heart = if card.liked {
        Span::styled("♥", Style::default().fg(LIKED))
    } else {
        Span::styled("♡", base)
    };

    let header = Line::from(vec![
        Span::styled(format!("[{}] ", card.category), base.fg(Color::Magenta)),
        Span::styled(card.title.clone(), base.add_modifier(Modifier::BOLD)),
    ]);
    let excerpt = Line::from(Span::styled(format!("  {}", card.excerpt), base));
    let meta = Line::from(vec![
        Span::styled(
            format!(
                "  {} · {} · ",
                card.author_name,
                card.published_at.format("%b %d, %Y")
            ),
            base.fg(Color::DarkGray),
        ),
        heart,
        Span::styled(format!(" {}", card.like_count()), base),
    ]);

    ListItem::new(vec![header, excerpt, meta, Line::raw("")])
}
