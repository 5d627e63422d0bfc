//! Per-node event handler registration and dispatch.
//!
//! The [`EventHub`] is the document's event plumbing: views register
//! closures against their own nodes during `configure`, and the application
//! shell dispatches to those nodes as the user interacts. The closures
//! capture a `Weak` reference to their view, so the receiver is fixed at
//! registration time and a dropped view's handlers become no-ops.
//!
//! Dispatch clones the handler list before invoking it, so a handler may
//! register or remove handlers (a drop that triggers a re-render does both).

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::dom::NodeId;
use crate::drag::DragTransfer;

/// Handler for events that carry the drag transfer.
pub type TransferHandler = Rc<dyn Fn(&mut DragTransfer)>;

/// Handler for events with no payload.
pub type NotifyHandler = Rc<dyn Fn()>;

/// Events dispatched with mutable access to the drag transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferEvent {
    /// The gesture starts on a drag source.
    DragStart,
    /// The gesture hovers a drop target.
    DragOver,
    /// The payload is delivered to a drop target.
    Drop,
}

/// Events dispatched without a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifyEvent {
    /// The gesture ended on the source, however it ended.
    DragEnd,
    /// The hover left a drop target.
    DragLeave,
    /// A form was submitted.
    Submit,
}

#[derive(Default)]
struct Registry {
    transfer: HashMap<(NodeId, TransferEvent), Vec<TransferHandler>>,
    notify: HashMap<(NodeId, NotifyEvent), Vec<NotifyHandler>>,
}

/// Registry of event handlers keyed by node and event kind.
#[derive(Default)]
pub struct EventHub {
    inner: RefCell<Registry>,
}

impl EventHub {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a transfer-event handler on a node.
    pub fn on_transfer(
        &self,
        node: NodeId,
        event: TransferEvent,
        handler: impl Fn(&mut DragTransfer) + 'static,
    ) {
        self.inner
            .borrow_mut()
            .transfer
            .entry((node, event))
            .or_default()
            .push(Rc::new(handler));
    }

    /// Registers a payload-free handler on a node.
    pub fn on_notify(&self, node: NodeId, event: NotifyEvent, handler: impl Fn() + 'static) {
        self.inner
            .borrow_mut()
            .notify
            .entry((node, event))
            .or_default()
            .push(Rc::new(handler));
    }

    /// Invokes every handler registered for the node and event, in
    /// registration order, with access to the transfer.
    pub fn dispatch_transfer(&self, node: NodeId, event: TransferEvent, transfer: &mut DragTransfer) {
        let handlers: Vec<TransferHandler> = self
            .inner
            .borrow()
            .transfer
            .get(&(node, event))
            .cloned()
            .unwrap_or_default();
        for handler in handlers {
            handler(transfer);
        }
    }

    /// Invokes every payload-free handler registered for the node and event.
    pub fn dispatch_notify(&self, node: NodeId, event: NotifyEvent) {
        let handlers: Vec<NotifyHandler> = self
            .inner
            .borrow()
            .notify
            .get(&(node, event))
            .cloned()
            .unwrap_or_default();
        for handler in handlers {
            handler();
        }
    }

    /// Drops every handler registered on any of the given nodes.
    ///
    /// Called after a re-render removed nodes from the document; their
    /// handles are never allocated again, so stale registrations would
    /// otherwise accumulate forever.
    pub fn remove_all(&self, nodes: &[NodeId]) {
        let mut inner = self.inner.borrow_mut();
        inner.transfer.retain(|(node, _), _| !nodes.contains(node));
        inner.notify.retain(|(node, _), _| !nodes.contains(node));
    }

    /// Total number of handlers registered on a node, across all events.
    #[must_use]
    pub fn handler_count(&self, node: NodeId) -> usize {
        let inner = self.inner.borrow();
        let transfer: usize = inner
            .transfer
            .iter()
            .filter(|((n, _), _)| *n == node)
            .map(|(_, handlers)| handlers.len())
            .sum();
        let notify: usize = inner
            .notify
            .iter()
            .filter(|((n, _), _)| *n == node)
            .map(|(_, handlers)| handlers.len())
            .sum();
        transfer + notify
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("EventHub")
            .field("transfer_keys", &inner.transfer.len())
            .field("notify_keys", &inner.notify.len())
            .finish()
    }
}
