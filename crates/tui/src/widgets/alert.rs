//! The blocking alert overlay.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::widgets::help::centered_rect;

/// Renders a centered modal with the alert message.
///
/// Drawn over everything else; the application swallows input until the
/// alert is dismissed.
pub fn render_alert(message: &str, area: Rect, buf: &mut Buffer) {
    let width = (message.chars().count() as u16 + 8).min(area.width);
    let popup = centered_rect(width, 5, area);

    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            "Alert",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(popup);
    block.render(popup, buf);

    let lines = vec![
        Line::from(Span::raw(message)),
        Line::from(Span::styled(
            "press any key to dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);
}
