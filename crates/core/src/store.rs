//! The observable item store.
//!
//! A single store instance is shared (as `Rc<ItemStore>`) between the input
//! form, which adds items, and the bucket lists, which subscribe and
//! re-render whenever the collection changes.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::item::{Item, ItemId, Status};

/// A change listener. Receives a snapshot of the full item collection.
pub type Listener = Rc<dyn Fn(&[Item])>;

/// Owns the item collection and notifies listeners on every change.
///
/// Items are kept in insertion order and never resorted. Listener
/// registration is append-only; there is no unsubscribe.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use plank_core::{ItemStore, Status};
///
/// let store = Rc::new(ItemStore::new());
/// let id = store.add_item("Ship it", "Cut the release", 2);
///
/// assert!(store.move_item(id, Status::Finished));
/// assert_eq!(store.snapshot()[0].status, Status::Finished);
/// ```
#[derive(Default)]
pub struct ItemStore {
    items: RefCell<Vec<Item>>,
    listeners: RefCell<Vec<Listener>>,
}

impl ItemStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a change listener.
    ///
    /// The listener is not invoked at registration time; it only fires on
    /// subsequent changes. Duplicate registrations each fire.
    pub fn subscribe(&self, listener: impl Fn(&[Item]) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Creates a new item in the `Active` bucket and notifies listeners.
    ///
    /// Returns the id of the new item.
    pub fn add_item(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ItemId {
        let item = Item::new(title, description, people);
        let id = item.id;
        self.items.borrow_mut().push(item);
        self.notify();
        id
    }

    /// Moves an item to a different bucket and notifies listeners.
    ///
    /// A silent no-op when the id is unknown or the item is already in the
    /// requested bucket; listeners are only notified when something actually
    /// changed. Returns whether a change occurred.
    pub fn move_item(&self, id: ItemId, new_status: Status) -> bool {
        let moved = {
            let mut items = self.items.borrow_mut();
            match items.iter_mut().find(|item| item.id == id) {
                Some(item) if item.status != new_status => {
                    item.set_status(new_status);
                    true
                }
                _ => false,
            }
        };
        if moved {
            self.notify();
        }
        moved
    }

    /// Returns a copy of the full item collection, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }

    /// Returns the number of items in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Invokes every listener with a fresh snapshot.
    ///
    /// Both the listener list and the item collection are copied up front and
    /// no borrow is held across the calls, so a listener may add items or
    /// subscribe without panicking. Listeners registered during a
    /// notification do not receive that notification.
    fn notify(&self) {
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        let snapshot = self.snapshot();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemStore")
            .field("items", &self.items.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_store() -> (Rc<ItemStore>, Rc<RefCell<usize>>) {
        let store = Rc::new(ItemStore::new());
        let count = Rc::new(RefCell::new(0));
        let count_in = Rc::clone(&count);
        store.subscribe(move |_| *count_in.borrow_mut() += 1);
        (store, count)
    }

    #[test]
    fn add_item_appends_active_and_notifies_once() {
        let (store, count) = counting_store();

        let id = store.add_item("Title", "Description", 3);

        let items = store.snapshot();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].status, Status::Active);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let store = ItemStore::new();
        store.add_item("First", "Desc", 1);
        store.add_item("Second", "Desc", 1);
        store.add_item("Third", "Desc", 1);

        let titles: Vec<_> = store.snapshot().into_iter().map(|i| i.title).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn listener_receives_snapshot_copy() {
        let store = Rc::new(ItemStore::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in = Rc::clone(&seen);
        store.subscribe(move |items| *seen_in.borrow_mut() = items.to_vec());

        store.add_item("Title", "Description", 2);

        assert_eq!(*seen.borrow(), store.snapshot());
    }

    #[test]
    fn every_listener_is_notified() {
        let store = Rc::new(ItemStore::new());
        let count = Rc::new(RefCell::new(0));
        for _ in 0..3 {
            let count_in = Rc::clone(&count);
            store.subscribe(move |_| *count_in.borrow_mut() += 1);
        }

        store.add_item("Title", "Description", 1);

        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn move_item_changes_status_and_notifies() {
        let (store, count) = counting_store();
        let id = store.add_item("Title", "Description", 1);

        assert!(store.move_item(id, Status::Finished));

        assert_eq!(store.snapshot()[0].status, Status::Finished);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn move_to_same_status_is_silent() {
        let (store, count) = counting_store();
        let id = store.add_item("Title", "Description", 1);

        assert!(!store.move_item(id, Status::Active));

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn move_unknown_id_is_silent() {
        let (store, count) = counting_store();
        store.add_item("Title", "Description", 1);

        assert!(!store.move_item(ItemId::new_v4(), Status::Finished));

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn listener_registered_during_notification_misses_it() {
        let store = Rc::new(ItemStore::new());
        let late_count = Rc::new(RefCell::new(0));

        let store_in = Rc::clone(&store);
        let late_in = Rc::clone(&late_count);
        store.subscribe(move |_| {
            let late = Rc::clone(&late_in);
            store_in.subscribe(move |_| *late.borrow_mut() += 1);
        });

        store.add_item("First", "Desc", 1);
        assert_eq!(*late_count.borrow(), 0);

        store.add_item("Second", "Desc", 1);
        // Only the listener registered during the first notification fires;
        // the one registered during the second does not.
        assert_eq!(*late_count.borrow(), 1);
    }

    #[test]
    fn listener_may_reenter_the_store() {
        let store = Rc::new(ItemStore::new());
        let seen_len = Rc::new(RefCell::new(0));
        let seen_in = Rc::clone(&seen_len);
        let store_in = Rc::clone(&store);
        store.subscribe(move |items| {
            *seen_in.borrow_mut() = items.len();
            // Querying the store from inside a notification must not panic.
            let _ = store_in.len();
        });

        store.add_item("Title", "Description", 1);
        assert_eq!(*seen_len.borrow(), 1);
    }
}
