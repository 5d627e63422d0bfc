//! Application UI state.
//!
//! Tracks focus, board selection, the in-flight drag gesture, and the
//! overlays. Pure state transitions live here so they can be tested without
//! a terminal; anything that touches the document or the store stays in the
//! application.

use plank_core::{ItemId, Status};

use crate::drag::DragTransfer;
use crate::views::input_view::FormField;

/// What currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A form field; printable keys are text input.
    Form(FormField),
    /// The board; keys are navigation and gesture shortcuts.
    Board,
}

impl Default for Focus {
    fn default() -> Self {
        Self::Form(FormField::Title)
    }
}

/// A drag gesture in flight.
#[derive(Debug)]
pub struct DragContext {
    /// The grabbed item.
    pub item_id: ItemId,
    /// Bucket the item was grabbed from.
    pub source: Status,
    /// Bucket currently hovered.
    pub over: Status,
    /// The payload channel for this gesture.
    pub transfer: DragTransfer,
}

/// The mutable UI state of the application.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current keyboard focus.
    pub focus: Focus,
    /// Bucket the board cursor is in.
    pub selected_bucket: Status,
    /// Card index within the selected bucket.
    pub selected_item: usize,
    /// The in-flight drag gesture, if any.
    pub drag: Option<DragContext>,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// A blocking alert awaiting dismissal.
    pub alert: Option<String>,
}

impl AppState {
    /// Creates the initial state: title field focused, Active bucket
    /// selected, nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a form field holds focus.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        matches!(self.focus, Focus::Form(_))
    }

    /// Moves focus forward: Title, Description, People, then the board,
    /// then back to Title.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Form(FormField::Title) => Focus::Form(FormField::Description),
            Focus::Form(FormField::Description) => Focus::Form(FormField::People),
            Focus::Form(FormField::People) => Focus::Board,
            Focus::Board => Focus::Form(FormField::Title),
        };
    }

    /// Moves focus backward.
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Form(FormField::Title) => Focus::Board,
            Focus::Form(FormField::Description) => Focus::Form(FormField::Title),
            Focus::Form(FormField::People) => Focus::Form(FormField::Description),
            Focus::Board => Focus::Form(FormField::People),
        };
    }

    /// Moves the card cursor up, wrapping to the bottom.
    pub fn navigate_up(&mut self, len: usize) {
        if len == 0 {
            self.selected_item = 0;
        } else if self.selected_item == 0 {
            self.selected_item = len - 1;
        } else {
            self.selected_item -= 1;
        }
    }

    /// Moves the card cursor down, wrapping to the top.
    pub fn navigate_down(&mut self, len: usize) {
        if len == 0 {
            self.selected_item = 0;
        } else {
            self.selected_item = (self.selected_item + 1) % len;
        }
    }

    /// Pulls the card cursor back into range after the bucket shrank or
    /// the cursor switched buckets.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected_item = 0;
        } else if self.selected_item >= len {
            self.selected_item = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = AppState::new();
        assert_eq!(state.focus, Focus::Form(FormField::Title));
        assert_eq!(state.selected_bucket, Status::Active);
        assert_eq!(state.selected_item, 0);
        assert!(state.drag.is_none());
        assert!(!state.show_help);
        assert!(state.alert.is_none());
        assert!(state.is_typing());
    }

    #[test]
    fn focus_cycles_forward_through_all_stops() {
        let mut state = AppState::new();
        let mut seen = vec![state.focus];
        for _ in 0..4 {
            state.focus_next();
            seen.push(state.focus);
        }
        assert_eq!(
            seen,
            vec![
                Focus::Form(FormField::Title),
                Focus::Form(FormField::Description),
                Focus::Form(FormField::People),
                Focus::Board,
                Focus::Form(FormField::Title),
            ]
        );
    }

    #[test]
    fn focus_prev_reverses_focus_next() {
        let mut state = AppState::new();
        for _ in 0..4 {
            let before = state.focus;
            state.focus_next();
            state.focus_prev();
            assert_eq!(state.focus, before);
            state.focus_next();
        }
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut state = AppState::new();

        state.navigate_up(3);
        assert_eq!(state.selected_item, 2);

        state.navigate_down(3);
        assert_eq!(state.selected_item, 0);

        state.navigate_down(3);
        state.navigate_down(3);
        state.navigate_down(3);
        assert_eq!(state.selected_item, 0);
    }

    #[test]
    fn navigation_in_empty_bucket_stays_at_zero() {
        let mut state = AppState::new();
        state.navigate_up(0);
        assert_eq!(state.selected_item, 0);
        state.navigate_down(0);
        assert_eq!(state.selected_item, 0);
    }

    #[test]
    fn clamp_pulls_cursor_into_range() {
        let mut state = AppState::new();
        state.selected_item = 5;

        state.clamp_selection(3);
        assert_eq!(state.selected_item, 2);

        state.clamp_selection(0);
        assert_eq!(state.selected_item, 0);

        state.selected_item = 1;
        state.clamp_selection(3);
        assert_eq!(state.selected_item, 1);
    }
}
