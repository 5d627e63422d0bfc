//! Bucket column rendering.
//!
//! A column draws the heading the list view wrote into the document, the
//! item count, and the card stack. Adjacent columns share their middle
//! border, so each position gets its own border set.

use plank_core::ItemId;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::dom::Document;
use crate::views::{DROPPABLE_CLASS, ListView};
use crate::widgets::card::{CARD_HEIGHT, render_card};

/// Position of a column in the horizontal layout.
///
/// With exactly two buckets there is no middle position; the first column
/// skips its right border and the last column draws both, joined with
/// T-connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPosition {
    /// Leftmost column, rounded corners on the left.
    First,
    /// Rightmost column, T-connectors on the left, rounded on the right.
    Last,
}

/// Border set for the first column: rounded corners on the left, no right
/// border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last column: T-connectors joining the shared border,
/// rounded corners on the outer edge.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Renders one bucket column to the buffer.
///
/// `selected` is the highlighted card index when this column holds the
/// board cursor; `dragging` marks the card currently grabbed, wherever it
/// sits.
#[allow(clippy::too_many_arguments)]
pub fn render_list(
    doc: &Document,
    list: &ListView,
    is_focused: bool,
    selected: Option<usize>,
    dragging: Option<ItemId>,
    area: Rect,
    buf: &mut Buffer,
    position: ListPosition,
) {
    let droppable = doc
        .query_tag(list.root(), "ul")
        .is_some_and(|ul| doc.has_class(ul, DROPPABLE_CLASS));

    let border_style = if droppable {
        Style::default().fg(Color::Green)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let heading = doc
        .query_tag(list.root(), "h2")
        .and_then(|h2| doc.text(h2))
        .unwrap_or_default();
    let title = format!("{} ({})", heading, list.len());
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // The shared border between the two columns belongs to the last one
    let (borders, border_set) = match position {
        ListPosition::First => (
            Borders::TOP | Borders::BOTTOM | Borders::LEFT,
            BORDER_SET_FIRST,
        ),
        ListPosition::Last => (Borders::ALL, BORDER_SET_LAST),
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    let inner = block.inner(area);
    block.render(area, buf);

    if list.is_empty() {
        render_empty_placeholder(inner, buf);
        return;
    }

    let visible = (inner.height / CARD_HEIGHT).max(1) as usize;
    let offset = scroll_offset(selected, list.len(), visible);

    let shown = list.len().saturating_sub(offset).min(visible);
    let mut constraints: Vec<Constraint> =
        (0..shown).map(|_| Constraint::Length(CARD_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));

    let card_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (slot, card_area) in card_areas.iter().take(shown).enumerate() {
        let index = offset + slot;
        let Some(card) = list.child_root(index) else {
            break;
        };
        let title = doc
            .query_tag(card, "h2")
            .and_then(|n| doc.text(n))
            .unwrap_or_default();
        let label = doc
            .query_tag(card, "h3")
            .and_then(|n| doc.text(n))
            .unwrap_or_default();
        let description = doc
            .query_tag(card, "p")
            .and_then(|n| doc.text(n))
            .unwrap_or_default();

        let is_selected = is_focused && selected == Some(index);
        let is_dragging = dragging.is_some()
            && list.item_at(index).map(|item| item.id) == dragging;

        render_card(
            title,
            label,
            description,
            is_selected,
            is_dragging,
            *card_area,
            buf,
        );
    }
}

fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No items",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Scrolls just far enough to keep the selected card visible.
fn scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    if total <= visible {
        return 0;
    }
    let max_offset = total - visible;
    selected.saturating_sub(visible - 1).min(max_offset)
}
