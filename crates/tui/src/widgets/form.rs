//! Input form rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::state::Focus;
use crate::views::{FormField, InputView};

/// Rows the form needs: one per field plus the border.
pub const FORM_HEIGHT: u16 = 5;

/// Renders the three-field input form.
///
/// The focused field shows a cursor mark after its value; the block border
/// is highlighted while any field holds focus.
pub fn render_form(form: &InputView, focus: &Focus, area: Rect, buf: &mut Buffer) {
    let focused_field = match focus {
        Focus::Form(field) => Some(*field),
        Focus::Board => None,
    };

    let border_style = if focused_field.is_some() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(Span::styled(
            "New Item",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(border_style);

    let inner = block.inner(area);
    block.render(area, buf);

    let lines: Vec<Line> = FormField::all()
        .into_iter()
        .map(|field| {
            let is_focused = focused_field == Some(field);
            let label_style = if is_focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let mut spans = vec![
                Span::styled(format!("{:<12}", field.label()), label_style),
                Span::raw(form.value(field)),
            ];
            if is_focused {
                spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect();

    Paragraph::new(lines).render(inner, buf);
}
