//! Terminal interface for the plank project tracker.
//!
//! The crate is built in two layers. The lower layer is a small retained
//! component framework: an element-tree [`dom::Document`] standing in for a
//! browser document, template mounting in [`component`], an [`events::EventHub`]
//! for per-node handlers, and the [`drag`] payload channel. The three concrete
//! [`views`] (input form, two bucket lists, item cards) live entirely in that
//! layer and never touch the terminal.
//!
//! The upper layer is the ratatui shell: [`app::App`] owns the document, the
//! store, and the views, translates key events to messages, drives the
//! keyboard drag-and-drop gesture, and renders the document tree through the
//! [`widgets`].

pub mod app;
pub mod component;
pub mod dom;
pub mod drag;
pub mod event;
pub mod events;
pub mod state;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use component::{ComponentError, View};
pub use dom::{Document, InsertPosition, NodeId, TemplateNode};
pub use drag::{DragSource, DragTransfer, DropEffect, DropTarget, TEXT_PLAIN};
pub use events::EventHub;
