//! The help overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "cycle form fields and board"),
    ("Left / Right", "select bucket"),
    ("Up / Down", "select card"),
    ("Enter / Space", "grab or drop the card"),
    ("Esc", "cancel drag, close overlay"),
    ("?", "toggle this help"),
    ("Ctrl+C", "quit"),
];

/// Renders the centered keybinding overlay.
pub fn render_help(area: Rect, buf: &mut Buffer) {
    let height = BINDINGS.len() as u16 + 2;
    let popup = centered_rect(46, height, area);

    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            "Help",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup);
    block.render(popup, buf);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:<16}"), Style::default().fg(Color::Cyan)),
                Span::raw(*action),
            ])
        })
        .collect();

    Paragraph::new(lines).render(inner, buf);
}

/// A rect of the given size centered within `area`, clipped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_utils::buffer_to_string;

    #[test]
    fn renders_every_binding() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        render_help(area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Help"));
        for (key, _) in BINDINGS {
            let first_word = key.split_whitespace().next().unwrap();
            assert!(content.contains(first_word), "{key}");
        }
    }

    #[test]
    fn centered_rect_is_clipped_and_centered() {
        let area = Rect::new(0, 0, 20, 10);

        let popup = centered_rect(10, 4, area);
        assert_eq!(popup, Rect::new(5, 3, 10, 4));

        let oversized = centered_rect(100, 100, area);
        assert_eq!(oversized, area);
    }
}
