//! The two-column board.

use std::rc::Rc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::dom::Document;
use crate::state::{AppState, Focus};
use crate::views::ListView;
use crate::widgets::list::{ListPosition, render_list};

/// Renders both bucket columns side by side.
///
/// The cursor highlight follows the selected bucket while the board holds
/// focus; the grabbed card keeps its drag highlight wherever it currently
/// renders.
pub fn render_board(
    doc: &Document,
    lists: &[Rc<ListView>; 2],
    state: &AppState,
    area: Rect,
    buf: &mut Buffer,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let board_focused = matches!(state.focus, Focus::Board);
    let dragging = state.drag.as_ref().map(|drag| drag.item_id);

    for (index, list) in lists.iter().enumerate() {
        let is_focused = board_focused && state.selected_bucket == list.status();
        let selected = is_focused.then_some(state.selected_item);
        let position = if index == 0 {
            ListPosition::First
        } else {
            ListPosition::Last
        };

        render_list(
            doc,
            list,
            is_focused,
            selected,
            dragging,
            columns[index],
            buf,
            position,
        );
    }
}
