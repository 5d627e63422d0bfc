//! The concrete views: item cards, bucket lists, and the input form.

pub mod input_view;
pub mod item_view;
pub mod list_view;

pub use input_view::{FormField, InputView};
pub use item_view::ItemView;
pub use list_view::{DROPPABLE_CLASS, ListView};
