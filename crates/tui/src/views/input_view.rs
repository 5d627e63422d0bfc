//! The input form view.

use std::cell::RefCell;
use std::rc::Rc;

use plank_core::{Check, ItemStore};

use crate::component::{ComponentError, View, mount};
use crate::dom::{Document, InsertPosition, NodeId};
use crate::events::{EventHub, NotifyEvent};

/// The three fields of the input form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    /// All fields in focus order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Title, Self::Description, Self::People]
    }

    /// Element id of the field's input element.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }

    /// Display label for the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::People => "People",
        }
    }
}

/// The form for creating new items.
///
/// Submission validates the three fields as one unit: on success the item is
/// added to the store and the fields are cleared; on failure a blocking
/// alert is raised and the fields keep their values.
pub struct InputView {
    doc: Rc<RefCell<Document>>,
    hub: Rc<EventHub>,
    store: Rc<ItemStore>,
    root: NodeId,
}

impl InputView {
    /// Template this view clones.
    pub const TEMPLATE: &'static str = "item-input";

    /// Element id of the host the form mounts into.
    pub const HOST: &'static str = "app";

    /// Element id assigned to the form's root.
    pub const ROOT_ID: &'static str = "user-input";

    /// Message of the alert raised on validation failure.
    pub const INVALID_INPUT_MSG: &'static str = "Invalid input, please try again!";

    /// Mounts the form at the start of the host and wires its submit
    /// handler.
    ///
    /// # Errors
    ///
    /// Returns an error if the template or the host is missing.
    pub fn new(
        doc: Rc<RefCell<Document>>,
        hub: Rc<EventHub>,
        store: Rc<ItemStore>,
    ) -> Result<Rc<Self>, ComponentError> {
        let root = mount(
            &mut doc.borrow_mut(),
            Self::TEMPLATE,
            Self::HOST,
            InsertPosition::Start,
            Some(Self::ROOT_ID),
        )?;
        let view = Rc::new(Self {
            doc,
            hub,
            store,
            root,
        });
        Rc::clone(&view).configure();
        view.render_content();
        Ok(view)
    }

    /// The form's root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The current value of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> String {
        let doc = self.doc.borrow();
        doc.get_element_by_id(field.element_id())
            .and_then(|node| doc.value(node))
            .unwrap_or_default()
            .to_string()
    }

    /// Appends a typed character to a field.
    pub fn append_char(&self, field: FormField, c: char) {
        let mut doc = self.doc.borrow_mut();
        if let Some(node) = doc.get_element_by_id(field.element_id()) {
            let mut value = doc.value(node).unwrap_or_default().to_string();
            value.push(c);
            doc.set_value(node, value);
        }
    }

    /// Removes the last character of a field.
    pub fn delete_char(&self, field: FormField) {
        let mut doc = self.doc.borrow_mut();
        if let Some(node) = doc.get_element_by_id(field.element_id()) {
            let mut value = doc.value(node).unwrap_or_default().to_string();
            value.pop();
            doc.set_value(node, value);
        }
    }

    /// Submits the form through the event hub, as if the user pressed the
    /// form's submit control.
    pub fn submit(&self) {
        self.hub.dispatch_notify(self.root, NotifyEvent::Submit);
    }

    fn handle_submit(&self) {
        match self.gather_input() {
            Some((title, description, people)) => {
                self.store.add_item(title, description, people);
                self.clear_inputs();
            }
            None => self.doc.borrow_mut().alert(Self::INVALID_INPUT_MSG),
        }
    }

    /// Reads and validates the three fields as a unit.
    ///
    /// Returns `None` when any field is invalid; no partial result escapes.
    fn gather_input(&self) -> Option<(String, String, u32)> {
        let title = self.value(FormField::Title);
        let description = self.value(FormField::Description);
        let people_raw = self.value(FormField::People);

        // A blank, non-numeric, or fractional people field counts as zero,
        // which the range check below rejects; only whole numbers can be
        // stored
        let people = people_raw.trim().parse::<u32>().unwrap_or(0);

        let valid = Check::text("title", title.clone()).required().is_valid()
            && Check::text("description", description.clone())
                .required()
                .min_length(5)
                .is_valid()
            && Check::number("people", f64::from(people))
                .required()
                .min(1.0)
                .max(5.0)
                .is_valid();

        if valid {
            Some((title, description, people))
        } else {
            None
        }
    }

    fn clear_inputs(&self) {
        let mut doc = self.doc.borrow_mut();
        for field in FormField::all() {
            if let Some(node) = doc.get_element_by_id(field.element_id()) {
                doc.set_value(node, "");
            }
        }
    }
}

impl View for InputView {
    fn configure(self: Rc<Self>) {
        let weak = Rc::downgrade(&self);
        self.hub.on_notify(self.root, NotifyEvent::Submit, move || {
            if let Some(view) = weak.upgrade() {
                view.handle_submit();
            }
        });
    }

    fn render_content(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::TemplateNode;
    use plank_core::Status;

    fn framework() -> (Rc<RefCell<Document>>, Rc<EventHub>, Rc<ItemStore>) {
        let mut doc = Document::new();
        doc.register_template(
            InputView::TEMPLATE,
            TemplateNode::new("form")
                .child(TemplateNode::new("input").with_id("title"))
                .child(TemplateNode::new("textarea").with_id("description"))
                .child(TemplateNode::new("input").with_id("people")),
        );
        let host = doc.create_element("div");
        doc.set_elem_id(host, InputView::HOST);
        let root = doc.root();
        doc.append_child(root, host);
        (
            Rc::new(RefCell::new(doc)),
            Rc::new(EventHub::new()),
            Rc::new(ItemStore::new()),
        )
    }

    fn form_view() -> (Rc<InputView>, Rc<ItemStore>) {
        let (doc, hub, store) = framework();
        let view = InputView::new(doc, hub, Rc::clone(&store)).unwrap();
        (view, store)
    }

    fn fill(view: &InputView, field: FormField, text: &str) {
        for c in text.chars() {
            view.append_char(field, c);
        }
    }

    #[test]
    fn mounts_at_start_with_root_id() {
        let (doc, hub, store) = framework();
        let view = InputView::new(Rc::clone(&doc), hub, store).unwrap();

        let doc = doc.borrow();
        assert_eq!(doc.elem_id(view.root()), Some(InputView::ROOT_ID));
        let host = doc.get_element_by_id(InputView::HOST).unwrap();
        assert_eq!(doc.children(host).first(), Some(&view.root()));
    }

    #[test]
    fn typing_and_deleting() {
        let (view, _store) = form_view();

        fill(&view, FormField::Title, "Plan");
        assert_eq!(view.value(FormField::Title), "Plan");

        view.delete_char(FormField::Title);
        assert_eq!(view.value(FormField::Title), "Pla");

        // Deleting from an empty field is harmless
        view.delete_char(FormField::Description);
        assert_eq!(view.value(FormField::Description), "");
    }

    #[test]
    fn valid_submit_adds_item_and_clears() {
        let (view, store) = form_view();
        fill(&view, FormField::Title, "Plan sprint");
        fill(&view, FormField::Description, "Write down the backlog");
        fill(&view, FormField::People, "3");

        view.submit();

        let items = store.snapshot();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Plan sprint");
        assert_eq!(items[0].description, "Write down the backlog");
        assert_eq!(items[0].people, 3);
        assert_eq!(items[0].status, Status::Active);

        for field in FormField::all() {
            assert_eq!(view.value(field), "");
        }
    }

    #[test]
    fn invalid_submit_alerts_and_keeps_fields() {
        let (view, store) = form_view();
        fill(&view, FormField::Title, "Plan sprint");
        fill(&view, FormField::Description, "tiny");
        fill(&view, FormField::People, "3");

        view.submit();

        assert!(store.is_empty());
        assert_eq!(view.value(FormField::Title), "Plan sprint");
        assert_eq!(view.value(FormField::Description), "tiny");
        assert_eq!(view.value(FormField::People), "3");
    }

    #[test]
    fn invalid_submit_raises_the_alert() {
        let (doc, hub, store) = framework();
        let view = InputView::new(Rc::clone(&doc), hub, store).unwrap();

        view.submit();

        assert_eq!(
            doc.borrow().pending_alert(),
            Some(InputView::INVALID_INPUT_MSG)
        );
    }

    #[test]
    fn people_bounds_are_enforced() {
        for (people, ok) in [("0", false), ("1", true), ("5", true), ("6", false)] {
            let (view, store) = form_view();
            fill(&view, FormField::Title, "Title");
            fill(&view, FormField::Description, "A long enough description");
            fill(&view, FormField::People, people);

            view.submit();

            assert_eq!(!store.is_empty(), ok, "people = {people}");
        }
    }

    #[test]
    fn fractional_people_is_rejected() {
        let (view, store) = form_view();
        fill(&view, FormField::Title, "Title");
        fill(&view, FormField::Description, "A long enough description");
        fill(&view, FormField::People, "3.7");

        view.submit();

        assert!(store.is_empty());
    }

    #[test]
    fn non_numeric_people_is_rejected() {
        let (view, store) = form_view();
        fill(&view, FormField::Title, "Title");
        fill(&view, FormField::Description, "A long enough description");
        fill(&view, FormField::People, "many");

        view.submit();

        assert!(store.is_empty());
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let (view, store) = form_view();
        fill(&view, FormField::Title, "   ");
        fill(&view, FormField::Description, "A long enough description");
        fill(&view, FormField::People, "2");

        view.submit();

        assert!(store.is_empty());
    }
}
