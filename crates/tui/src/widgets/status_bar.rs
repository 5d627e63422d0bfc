//! The footer hint line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::state::{AppState, Focus};

/// Renders one line of context-sensitive key hints.
pub fn render_status_bar(state: &AppState, area: Rect, buf: &mut Buffer) {
    let hints = if state.alert.is_some() {
        "any key: dismiss alert"
    } else if state.show_help {
        "esc / ?: close help"
    } else if state.drag.is_some() {
        "left/right: choose bucket | enter: drop | esc: cancel"
    } else {
        match state.focus {
            Focus::Form(_) => "type to fill | tab: next field | enter: submit | ctrl+c: quit",
            Focus::Board => {
                "arrows: navigate | enter: grab | tab: form | ?: help | ctrl+c: quit"
            }
        }
    };

    let line = Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    Paragraph::new(line).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::DragTransfer;
    use crate::state::DragContext;
    use crate::widgets::test_utils::buffer_to_string;
    use plank_core::{ItemId, Status};

    fn render(state: &AppState) -> String {
        let area = Rect::new(0, 0, 70, 1);
        let mut buf = Buffer::empty(area);
        render_status_bar(state, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn form_hints_by_default() {
        let content = render(&AppState::new());
        assert!(content.contains("enter: submit"));
    }

    #[test]
    fn board_hints_when_board_focused() {
        let mut state = AppState::new();
        state.focus = Focus::Board;
        let content = render(&state);
        assert!(content.contains("enter: grab"));
    }

    #[test]
    fn drag_hints_take_precedence() {
        let mut state = AppState::new();
        state.focus = Focus::Board;
        state.drag = Some(DragContext {
            item_id: ItemId::new_v4(),
            source: Status::Active,
            over: Status::Active,
            transfer: DragTransfer::new(),
        });
        let content = render(&state);
        assert!(content.contains("enter: drop"));
    }

    #[test]
    fn alert_hint_beats_everything() {
        let mut state = AppState::new();
        state.alert = Some("boom".to_string());
        state.show_help = true;
        let content = render(&state);
        assert!(content.contains("dismiss alert"));
    }
}
