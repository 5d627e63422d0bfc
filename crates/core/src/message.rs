//! Messages the terminal UI dispatches in response to user input.

use serde::{Deserialize, Serialize};

/// A user-intent message produced by the key mapping layer.
///
/// # Examples
///
/// ```
/// use plank_core::Message;
///
/// assert!(Message::Quit.is_terminating());
/// assert!(Message::NavigateLeft.is_navigation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Exit the application.
    Quit,
    /// Cancel the current interaction (drag, overlay).
    Escape,
    /// Move focus to the next form field, or from the last field to the board.
    FocusNext,
    /// Move focus to the previous form field, or from the board back to it.
    FocusPrev,
    /// Select the bucket to the left.
    NavigateLeft,
    /// Select the bucket to the right.
    NavigateRight,
    /// Select the previous card in the bucket.
    NavigateUp,
    /// Select the next card in the bucket.
    NavigateDown,
    /// Grab the selected card, or drop a grabbed one.
    Select,
    /// Submit the input form.
    Submit,
    /// A printable character typed into the focused form field.
    Input(char),
    /// Delete the last character of the focused form field.
    DeleteChar,
    /// Show or hide the help overlay.
    ToggleHelp,
}

impl Message {
    /// Returns `true` for messages that move the board selection.
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` for messages that end the application.
    #[must_use]
    pub const fn is_terminating(self) -> bool {
        matches!(self, Self::Quit)
    }
}
