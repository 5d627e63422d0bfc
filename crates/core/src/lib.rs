//! Shared types for the plank project tracker.
//!
//! This crate defines the domain model (items and their status buckets), the
//! observable state store that every view subscribes to, the declarative
//! validation helper used by the input form, the message enum the TUI speaks,
//! and demo data.

pub mod demo;
pub mod item;
pub mod message;
pub mod store;
pub mod validate;

pub use item::{Item, ItemId, Status};
pub use message::Message;
pub use store::{ItemStore, Listener};
pub use validate::{Check, Value};
