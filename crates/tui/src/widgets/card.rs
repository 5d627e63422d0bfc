//! Item card rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Height of each item card in rows.
pub const CARD_HEIGHT: u16 = 5;

/// Renders one item card to the buffer.
///
/// A card shows the title, the assignment label, and a truncated
/// description. The selected card gets a cyan border; a card in flight
/// during a drag gets a yellow border.
pub fn render_card(
    title: &str,
    label: &str,
    description: &str,
    is_selected: bool,
    is_dragging: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let border_style = if is_dragging {
        Style::default().fg(Color::Yellow)
    } else if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(border_style);

    let inner = block.inner(area);
    block.render(area, buf);

    let title_style = if is_selected || is_dragging {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let width = inner.width as usize;
    let lines = vec![
        Line::from(Span::styled(truncate(title, width), title_style)),
        Line::from(Span::styled(
            truncate(label, width),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            truncate(description, width),
            Style::default().fg(Color::Gray),
        )),
    ];

    Paragraph::new(lines).render(inner, buf);
}

/// Cuts a string to fit a column width, marking the cut with an ellipsis.
fn truncate(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let count = text.chars().count();
    if count <= max_width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
