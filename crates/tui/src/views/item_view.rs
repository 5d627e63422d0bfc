//! The card view for a single item.

use std::cell::RefCell;
use std::rc::Rc;

use plank_core::Item;

use crate::component::{ComponentError, View, mount};
use crate::dom::{Document, InsertPosition, NodeId};
use crate::drag::{DragSource, DragTransfer, DropEffect, TEXT_PLAIN};
use crate::events::{EventHub, NotifyEvent, TransferEvent};

/// Renders one item as a card inside a bucket's list element.
///
/// An item view is immutable for its lifetime; when the item changes, the
/// owning list discards the view and creates a fresh one. The card is the
/// drag source of the board: grabbing it loads the transfer with the item's
/// id.
pub struct ItemView {
    doc: Rc<RefCell<Document>>,
    hub: Rc<EventHub>,
    item: Item,
    root: NodeId,
}

impl ItemView {
    /// Template this view clones.
    pub const TEMPLATE: &'static str = "single-item";

    /// Mounts a card for `item` at the end of the element with id
    /// `host_list_id`, wires its drag handlers, and renders its content.
    ///
    /// The card's root element id is the item's id.
    ///
    /// # Errors
    ///
    /// Returns an error if the template or the host list is missing.
    pub fn new(
        doc: Rc<RefCell<Document>>,
        hub: Rc<EventHub>,
        host_list_id: &str,
        item: Item,
    ) -> Result<Rc<Self>, ComponentError> {
        let root = mount(
            &mut doc.borrow_mut(),
            Self::TEMPLATE,
            host_list_id,
            InsertPosition::End,
            Some(&item.id.to_string()),
        )?;
        let view = Rc::new(Self {
            doc,
            hub,
            item,
            root,
        });
        Rc::clone(&view).configure();
        view.render_content();
        Ok(view)
    }

    /// The item this card renders.
    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The card's root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The pluralized assignment label for the card's `h3` line.
    #[must_use]
    pub fn assignment_label(&self) -> String {
        assignment_label(self.item.people)
    }
}

/// Formats the "people assigned" line, singular for exactly one.
#[must_use]
pub fn assignment_label(people: u32) -> String {
    if people == 1 {
        "1 person assigned".to_string()
    } else {
        format!("{people} persons assigned")
    }
}

impl View for ItemView {
    fn configure(self: Rc<Self>) {
        let weak = Rc::downgrade(&self);
        self.hub
            .on_transfer(self.root, TransferEvent::DragStart, move |transfer| {
                if let Some(view) = weak.upgrade() {
                    view.drag_start(transfer);
                }
            });
        let weak = Rc::downgrade(&self);
        self.hub.on_notify(self.root, NotifyEvent::DragEnd, move || {
            if let Some(view) = weak.upgrade() {
                view.drag_end();
            }
        });
    }

    fn render_content(&self) {
        let mut doc = self.doc.borrow_mut();
        if let Some(h2) = doc.query_tag(self.root, "h2") {
            doc.set_text(h2, self.item.title.as_str());
        }
        if let Some(h3) = doc.query_tag(self.root, "h3") {
            doc.set_text(h3, self.assignment_label());
        }
        if let Some(p) = doc.query_tag(self.root, "p") {
            doc.set_text(p, self.item.description.as_str());
        }
    }
}

impl DragSource for ItemView {
    fn drag_start(&self, transfer: &mut DragTransfer) {
        transfer.set_data(TEXT_PLAIN, self.item.id.to_string());
        transfer.set_effect(DropEffect::Move);
    }

    fn drag_end(&self) {}
}
