//! Item-related types for the project tracker.
//!
//! This module defines the trackable unit of work (the item), its unique
//! identifier, and the two status buckets items move between.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an item.
///
/// Uses UUID v4 for globally unique identification. Ids are generated at
/// creation, never reused, and never change for the lifetime of an item.
pub type ItemId = uuid::Uuid;

/// The status bucket an item currently belongs to.
///
/// There are exactly two buckets; each one is rendered by its own list view.
///
/// # Examples
///
/// ```
/// use plank_core::Status;
///
/// let status = Status::Active;
/// assert_eq!(status.display_name(), "Active");
/// assert_eq!(status.slug(), "active");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Items still being worked on. Newly created items start here.
    #[default]
    Active,
    /// Completed items.
    Finished,
}

impl Status {
    /// Returns both statuses in display order.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_core::Status;
    ///
    /// let all = Status::all();
    /// assert_eq!(all, [Status::Active, Status::Finished]);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Active, Self::Finished]
    }

    /// Returns a human-readable display name for the bucket.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Finished => "Finished",
        }
    }

    /// Returns the lowercase identifier used to derive element ids.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Returns the index of this bucket in display order (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Active => 0,
            Self::Finished => 1,
        }
    }

    /// Creates a `Status` from its display-order index.
    ///
    /// Returns `None` if the index is out of range (>= 2).
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_core::Status;
    ///
    /// assert_eq!(Status::from_index(1), Some(Status::Finished));
    /// assert_eq!(Status::from_index(2), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Active),
            1 => Some(Self::Finished),
            _ => None,
        }
    }

    /// Returns the other bucket.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Active => Self::Finished,
            Self::Finished => Self::Active,
        }
    }
}

/// A trackable unit of work.
///
/// Items are normally created through [`ItemStore::add_item`] and moved
/// between buckets through [`ItemStore::move_item`]; views never construct
/// or mutate them directly.
///
/// [`ItemStore::add_item`]: crate::store::ItemStore::add_item
/// [`ItemStore::move_item`]: crate::store::ItemStore::move_item
///
/// # Examples
///
/// ```
/// use plank_core::{Item, Status};
///
/// let item = Item::new("Learn Rust", "Read the book cover to cover", 2);
/// assert_eq!(item.status, Status::Active);
/// assert_eq!(item.people, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Short summary of the item.
    pub title: String,
    /// Longer description of what needs to be done.
    pub description: String,
    /// Number of people assigned, expected to be in `1..=5`.
    pub people: u32,
    /// Which bucket this item currently resides in.
    pub status: Status,
    /// When this item was created.
    pub created_at: DateTime<Utc>,
    /// When this item was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item in the `Active` bucket with a fresh id.
    ///
    /// Timestamps are set to the current time.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: Status::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a new item with a specific id.
    ///
    /// Useful for tests that need a predictable id.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_core::{Item, ItemId};
    ///
    /// let id = ItemId::new_v4();
    /// let item = Item::with_id(id, "Title", "Description", 1);
    /// assert_eq!(item.id, id);
    /// ```
    #[must_use]
    pub fn with_id(
        id: ItemId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        let mut item = Self::new(title, description, people);
        item.id = id;
        item
    }

    /// Moves the item to a different bucket and refreshes `updated_at`.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_default_is_active() {
        assert_eq!(Status::default(), Status::Active);
    }

    #[test]
    fn status_index_roundtrip() {
        for status in Status::all() {
            assert_eq!(Status::from_index(status.index()), Some(status));
        }
    }

    #[test]
    fn status_other_flips() {
        assert_eq!(Status::Active.other(), Status::Finished);
        assert_eq!(Status::Finished.other(), Status::Active);
    }

    #[test]
    fn status_json_format() {
        let json = serde_json::to_string(&Status::Finished).expect("serialize");
        assert_eq!(json, r#""finished""#);
    }

    #[test]
    fn item_new_starts_active() {
        let item = Item::new("Test", "Description", 3);

        assert_eq!(item.title, "Test");
        assert_eq!(item.description, "Description");
        assert_eq!(item.people, 3);
        assert_eq!(item.status, Status::Active);
    }

    #[test]
    fn item_ids_are_unique() {
        let a = Item::new("A", "Desc", 1);
        let b = Item::new("B", "Desc", 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn item_set_status_updates_timestamp() {
        let mut item = Item::new("Test", "Description", 1);
        let original_updated = item.updated_at;

        // Small delay to ensure the timestamp changes
        std::thread::sleep(std::time::Duration::from_millis(10));

        item.set_status(Status::Finished);

        assert_eq!(item.status, Status::Finished);
        assert!(item.updated_at > original_updated);
    }

    #[test]
    fn item_serialization_roundtrip() {
        let item = Item::new("Test item", "A description", 4);
        let json = serde_json::to_string(&item).expect("serialize");
        let parsed: Item = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(item, parsed);
    }
}
