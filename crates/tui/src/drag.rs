//! The drag-and-drop payload channel.
//!
//! A [`DragTransfer`] travels with a drag gesture from the source card to
//! whichever list is hovered. It carries at most one tagged payload (the
//! dragged item's id) plus the target's permission for the drop.

/// Payload format tag for plain-text data, the only format the views use.
pub const TEXT_PLAIN: &str = "text/plain";

/// The visual effect a drag source requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    /// No effect requested.
    #[default]
    None,
    /// The dragged element moves to the target.
    Move,
}

/// Data carrier for one drag gesture.
///
/// # Examples
///
/// ```
/// use plank_tui::drag::{DragTransfer, TEXT_PLAIN};
///
/// let mut transfer = DragTransfer::new();
/// transfer.set_data(TEXT_PLAIN, "some-id");
/// assert_eq!(transfer.first_format(), Some(TEXT_PLAIN));
/// assert_eq!(transfer.data(TEXT_PLAIN), Some("some-id"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DragTransfer {
    data: Option<(String, String)>,
    effect: DropEffect,
    drop_allowed: bool,
}

impl DragTransfer {
    /// Creates an empty transfer with no payload and drops disallowed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the payload under a format tag, replacing any previous one.
    pub fn set_data(&mut self, format: impl Into<String>, payload: impl Into<String>) {
        self.data = Some((format.into(), payload.into()));
    }

    /// The format tag of the stored payload, if any.
    #[must_use]
    pub fn first_format(&self) -> Option<&str> {
        self.data.as_ref().map(|(format, _)| format.as_str())
    }

    /// The payload stored under the given format, if any.
    #[must_use]
    pub fn data(&self, format: &str) -> Option<&str> {
        self.data
            .as_ref()
            .filter(|(f, _)| f == format)
            .map(|(_, payload)| payload.as_str())
    }

    /// Sets the requested drop effect.
    pub fn set_effect(&mut self, effect: DropEffect) {
        self.effect = effect;
    }

    /// The requested drop effect.
    #[must_use]
    pub fn effect(&self) -> DropEffect {
        self.effect
    }

    /// Marks the hovered target as accepting the drop.
    pub fn allow_drop(&mut self) {
        self.drop_allowed = true;
    }

    /// Whether the hovered target accepted the drop.
    #[must_use]
    pub fn is_drop_allowed(&self) -> bool {
        self.drop_allowed
    }

    /// Withdraws drop permission. Called when the hover moves to a new
    /// target, which must grant permission itself.
    pub fn reset_drop(&mut self) {
        self.drop_allowed = false;
    }
}

/// The operations of an element cards can be dragged from.
pub trait DragSource {
    /// Called once when the gesture starts; loads the transfer.
    fn drag_start(&self, transfer: &mut DragTransfer);

    /// Called once when the gesture ends, however it ends.
    fn drag_end(&self);
}

/// The operations of an element cards can be dropped onto.
pub trait DropTarget {
    /// Called while the gesture hovers this target; may allow the drop.
    fn drag_over(&self, transfer: &mut DragTransfer);

    /// Called when the payload is delivered here.
    fn accept_drop(&self, transfer: &DragTransfer);

    /// Called when the hover leaves this target.
    fn drag_leave(&self);
}
