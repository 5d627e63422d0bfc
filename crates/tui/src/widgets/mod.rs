//! Pure rendering functions for the terminal UI.
//!
//! Widgets draw from the document tree the views populate plus the UI
//! state; they never mutate either.

pub mod alert;
pub mod board;
pub mod card;
pub mod form;
pub mod help;
pub mod list;
pub mod status_bar;

pub use alert::render_alert;
pub use board::render_board;
pub use card::{CARD_HEIGHT, render_card};
pub use form::render_form;
pub use help::render_help;
pub use list::{ListPosition, render_list};
pub use status_bar::render_status_bar;

#[cfg(test)]
pub(crate) mod test_utils {
    use ratatui::buffer::Buffer;

    /// Flattens a buffer into a newline-separated string for content
    /// assertions.
    pub fn buffer_to_string(buf: &Buffer) -> String {
        let mut result = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    result.push_str(cell.symbol());
                }
            }
            result.push('\n');
        }
        result
    }
}
