//! The bucket list view, one per status.

use std::cell::RefCell;
use std::rc::Rc;

use plank_core::{Item, ItemId, ItemStore, Status};

use crate::component::{ComponentError, View, mount};
use crate::dom::{Document, InsertPosition, NodeId};
use crate::drag::{DragTransfer, DropTarget, TEXT_PLAIN};
use crate::events::{EventHub, NotifyEvent, TransferEvent};
use crate::views::item_view::ItemView;

/// Class set on a list element while a compatible drag hovers it.
pub const DROPPABLE_CLASS: &str = "droppable";

/// Renders one status bucket: a heading and the cards of every item
/// currently in that bucket.
///
/// The view subscribes to the store and rebuilds its cards wholesale on
/// every change. It is also the board's drop target: a hovering drag with a
/// plain-text payload is accepted and delivered as a `move_item` call.
pub struct ListView {
    doc: Rc<RefCell<Document>>,
    hub: Rc<EventHub>,
    store: Rc<ItemStore>,
    status: Status,
    root: NodeId,
    items: RefCell<Vec<Item>>,
    children: RefCell<Vec<Rc<ItemView>>>,
}

impl ListView {
    /// Template this view clones.
    pub const TEMPLATE: &'static str = "item-list";

    /// Element id of the host both bucket lists mount into.
    pub const HOST: &'static str = "app";

    /// Mounts the list for `status` at the end of the host, subscribes to
    /// the store, and renders the static content (heading, list id).
    ///
    /// The root element id is `"{slug}-items"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template or the host is missing.
    pub fn new(
        doc: Rc<RefCell<Document>>,
        hub: Rc<EventHub>,
        store: Rc<ItemStore>,
        status: Status,
    ) -> Result<Rc<Self>, ComponentError> {
        let root_id = format!("{}-items", status.slug());
        let root = mount(
            &mut doc.borrow_mut(),
            Self::TEMPLATE,
            Self::HOST,
            InsertPosition::End,
            Some(&root_id),
        )?;
        let view = Rc::new(Self {
            doc,
            hub,
            store,
            status,
            root,
            items: RefCell::new(Vec::new()),
            children: RefCell::new(Vec::new()),
        });
        Rc::clone(&view).configure();
        view.render_content();
        Ok(view)
    }

    /// The bucket this list renders.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The list's root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Element id of the inner list element, `"{slug}-items-list"`.
    #[must_use]
    pub fn list_id(&self) -> String {
        format!("{}-items-list", self.status.slug())
    }

    /// Number of items currently in this bucket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether this bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// The item at `index` within this bucket, if any.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<Item> {
        self.items.borrow().get(index).cloned()
    }

    /// The card root node at `index`, if any.
    #[must_use]
    pub fn child_root(&self, index: usize) -> Option<NodeId> {
        self.children.borrow().get(index).map(|view| view.root())
    }

    /// The card root node for the item with this id, if present here.
    #[must_use]
    pub fn node_for(&self, item_id: ItemId) -> Option<NodeId> {
        self.children
            .borrow()
            .iter()
            .find(|view| view.item().id == item_id)
            .map(|view| view.root())
    }

    /// The inner list element, looked up by tag under the root.
    fn list_node(&self) -> Option<NodeId> {
        self.doc.borrow().query_tag(self.root, "ul")
    }

    /// Filters the full collection down to this bucket and re-renders.
    fn assign_items(&self, all: &[Item]) {
        let relevant: Vec<Item> = all
            .iter()
            .filter(|item| item.status == self.status)
            .cloned()
            .collect();
        *self.items.borrow_mut() = relevant;
        self.render_items();
    }

    /// Discards every card and builds fresh ones from the stashed items.
    fn render_items(&self) {
        let Some(list) = self.list_node() else {
            return;
        };

        // Clearing the list element destroys the old card subtrees; their
        // event registrations must go with them
        let removed = self.doc.borrow_mut().remove_children(list);
        self.hub.remove_all(&removed);
        self.children.borrow_mut().clear();

        let items = self.items.borrow().clone();
        let list_id = self.list_id();
        let mut children = Vec::with_capacity(items.len());
        for item in items {
            // The host list was just verified to exist, so this only fails
            // if the card template was never registered
            if let Ok(view) =
                ItemView::new(Rc::clone(&self.doc), Rc::clone(&self.hub), &list_id, item)
            {
                children.push(view);
            }
        }
        *self.children.borrow_mut() = children;
    }
}

impl View for ListView {
    fn configure(self: Rc<Self>) {
        let weak = Rc::downgrade(&self);
        self.store.subscribe(move |items| {
            if let Some(view) = weak.upgrade() {
                view.assign_items(items);
            }
        });

        let weak = Rc::downgrade(&self);
        self.hub
            .on_transfer(self.root, TransferEvent::DragOver, move |transfer| {
                if let Some(view) = weak.upgrade() {
                    view.drag_over(transfer);
                }
            });
        let weak = Rc::downgrade(&self);
        self.hub
            .on_transfer(self.root, TransferEvent::Drop, move |transfer| {
                if let Some(view) = weak.upgrade() {
                    view.accept_drop(transfer);
                }
            });
        let weak = Rc::downgrade(&self);
        self.hub
            .on_notify(self.root, NotifyEvent::DragLeave, move || {
                if let Some(view) = weak.upgrade() {
                    view.drag_leave();
                }
            });
    }

    fn render_content(&self) {
        let list = self.list_node();
        let heading = self.doc.borrow().query_tag(self.root, "h2");

        let mut doc = self.doc.borrow_mut();
        if let Some(list) = list {
            doc.set_elem_id(list, self.list_id());
        }
        if let Some(heading) = heading {
            doc.set_text(heading, self.status.display_name().to_uppercase());
        }
    }
}

impl DropTarget for ListView {
    fn drag_over(&self, transfer: &mut DragTransfer) {
        if transfer.first_format() == Some(TEXT_PLAIN) {
            transfer.allow_drop();
            if let Some(list) = self.list_node() {
                self.doc.borrow_mut().add_class(list, DROPPABLE_CLASS);
            }
        }
    }

    fn accept_drop(&self, transfer: &DragTransfer) {
        if let Some(payload) = transfer.data(TEXT_PLAIN) {
            if let Ok(item_id) = ItemId::parse_str(payload) {
                self.store.move_item(item_id, self.status);
            }
        }
    }

    fn drag_leave(&self) {
        if let Some(list) = self.list_node() {
            self.doc.borrow_mut().remove_class(list, DROPPABLE_CLASS);
        }
    }
}
