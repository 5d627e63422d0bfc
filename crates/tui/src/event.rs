//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. The mapping is focus-sensitive: while a form
//! field holds focus, printable keys are text input rather than shortcuts.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use plank_core::Message;

/// Polls for a terminal event.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal key event to an application message.
///
/// `typing` is true while a form field holds focus; in that mode printable
/// keys become [`Message::Input`] instead of shortcuts, Enter submits the
/// form, and Backspace deletes.
///
/// Returns `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit (always) |
/// | `Esc` | Escape (cancel drag or close overlay) |
/// | `Tab` / `Shift+Tab` | Cycle focus between form fields and board |
/// | `Left` / `Right` / `Up` / `Down` | Navigate the board |
/// | `Enter` or `Space` | Grab or drop the selected card |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent, typing: bool) -> Option<Message> {
    // Check for Ctrl+C first; it quits regardless of focus
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    // Keys that behave the same in both focus modes
    match key.code {
        KeyCode::Esc => return Some(Message::Escape),
        KeyCode::Tab => return Some(Message::FocusNext),
        KeyCode::BackTab => return Some(Message::FocusPrev),
        _ => {}
    }

    if typing {
        // A focused form field consumes printable keys
        return match key.code {
            KeyCode::Enter => Some(Message::Submit),
            KeyCode::Backspace => Some(Message::DeleteChar),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Input(c))
            }
            _ => None,
        };
    }

    match key.code {
        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        // Grab / drop
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),

        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    #[test]
    fn ctrl_c_quits_in_both_modes() {
        let key = make_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_message(key, false), Some(Message::Quit));
        assert_eq!(key_to_message(key, true), Some(Message::Quit));
    }

    #[test]
    fn escape_and_tab_ignore_focus_mode() {
        for typing in [false, true] {
            assert_eq!(
                key_to_message(make_key(KeyCode::Esc), typing),
                Some(Message::Escape)
            );
            assert_eq!(
                key_to_message(make_key(KeyCode::Tab), typing),
                Some(Message::FocusNext)
            );
            assert_eq!(
                key_to_message(make_key(KeyCode::BackTab), typing),
                Some(Message::FocusPrev)
            );
        }
    }

    #[test]
    fn navigation_keys_on_board() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Left), false),
            Some(Message::NavigateLeft)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Right), false),
            Some(Message::NavigateRight)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Up), false),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down), false),
            Some(Message::NavigateDown)
        );
    }

    #[test]
    fn selection_keys_on_board() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter), false),
            Some(Message::Select)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(' ')), false),
            Some(Message::Select)
        );
    }

    #[test]
    fn typing_mode_captures_printable_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('a')), true),
            Some(Message::Input('a'))
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?')), true),
            Some(Message::Input('?'))
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(' ')), true),
            Some(Message::Input(' '))
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Backspace), true),
            Some(Message::DeleteChar)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter), true),
            Some(Message::Submit)
        );
    }

    #[test]
    fn board_shortcuts_unavailable_while_typing() {
        assert_eq!(key_to_message(make_key(KeyCode::Left), true), None);
        assert_eq!(key_to_message(make_key(KeyCode::Up), true), None);
    }

    #[test]
    fn help_key_on_board_only() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?')), false),
            Some(Message::ToggleHelp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?')), true),
            Some(Message::Input('?'))
        );
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::F(1)), false), None);
        assert_eq!(key_to_message(make_key(KeyCode::Char('x')), false), None);
    }
}
