//! Template mounting and the view contract.
//!
//! [`mount`] is the shared half of every view's constructor: it clones a
//! named template and attaches the clone into a host element. The view-
//! specific half is the [`View`] trait, which each concrete view's
//! constructor calls on itself after mounting; `mount` never calls it.

use std::rc::Rc;

use crate::dom::{Document, InsertPosition, NodeId};

/// Errors raised while wiring components into the document.
///
/// These indicate a broken document setup (a template or host that was never
/// registered), not user input; construction propagates them and startup
/// aborts.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ComponentError {
    /// No template registered under the requested name.
    #[error("no template registered under {0:?}")]
    TemplateNotFound(String),

    /// No attached element carries the requested host id.
    #[error("no element with id {0:?} to mount into")]
    HostNotFound(String),

    /// An element the view relies on is missing from its subtree.
    #[error("no element with id {0:?}")]
    ElementNotFound(String),
}

/// Clones a template and attaches the clone into a host element.
///
/// Looks up the template by name, deep-clones its content, optionally
/// assigns `new_elem_id` to the clone's root, and inserts the root into the
/// element with id `host_id` at the given position. Returns the clone's
/// root node.
///
/// # Errors
///
/// Returns [`ComponentError::TemplateNotFound`] or
/// [`ComponentError::HostNotFound`] when the document lacks the named
/// template or host.
///
/// # Examples
///
/// ```
/// use plank_tui::component::mount;
/// use plank_tui::dom::{Document, InsertPosition, TemplateNode};
///
/// let mut doc = Document::new();
/// doc.register_template("card", TemplateNode::new("li"));
/// let host = doc.create_element("div");
/// doc.set_elem_id(host, "app");
/// let root = doc.root();
/// doc.append_child(root, host);
///
/// let card = mount(&mut doc, "card", "app", InsertPosition::End, Some("card-1")).unwrap();
/// assert_eq!(doc.elem_id(card), Some("card-1"));
/// ```
pub fn mount(
    doc: &mut Document,
    template_id: &str,
    host_id: &str,
    position: InsertPosition,
    new_elem_id: Option<&str>,
) -> Result<NodeId, ComponentError> {
    let host = doc
        .get_element_by_id(host_id)
        .ok_or_else(|| ComponentError::HostNotFound(host_id.to_string()))?;
    let root = doc
        .instantiate(template_id)
        .ok_or_else(|| ComponentError::TemplateNotFound(template_id.to_string()))?;
    if let Some(elem_id) = new_elem_id {
        doc.set_elem_id(root, elem_id);
    }
    doc.insert_child(host, root, position);
    Ok(root)
}

/// The two operations every mounted view provides.
///
/// Constructors mount their subtree, then call `configure` (wiring event
/// handlers and subscriptions; closures capture a `Weak` of the view so the
/// receiver is fixed at registration time) followed by `render_content`
/// (populating the subtree).
pub trait View {
    /// Wires event handlers and store subscriptions.
    fn configure(self: Rc<Self>);

    /// Writes the view's content into its mounted subtree.
    fn render_content(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::TemplateNode;

    fn doc_with_host() -> Document {
        let mut doc = Document::new();
        let host = doc.create_element("div");
        doc.set_elem_id(host, "app");
        let root = doc.root();
        doc.append_child(root, host);
        doc
    }

    #[test]
    fn mount_attaches_clone_at_end() {
        let mut doc = doc_with_host();
        doc.register_template("card", TemplateNode::new("li"));

        let first = mount(&mut doc, "card", "app", InsertPosition::End, None).unwrap();
        let second = mount(&mut doc, "card", "app", InsertPosition::End, None).unwrap();

        let host = doc.get_element_by_id("app").unwrap();
        assert_eq!(doc.children(host), vec![first, second]);
    }

    #[test]
    fn mount_attaches_clone_at_start() {
        let mut doc = doc_with_host();
        doc.register_template("card", TemplateNode::new("li"));

        let first = mount(&mut doc, "card", "app", InsertPosition::End, None).unwrap();
        let second = mount(&mut doc, "card", "app", InsertPosition::Start, None).unwrap();

        let host = doc.get_element_by_id("app").unwrap();
        assert_eq!(doc.children(host), vec![second, first]);
    }

    #[test]
    fn mount_assigns_requested_id() {
        let mut doc = doc_with_host();
        doc.register_template("form", TemplateNode::new("form"));

        let root = mount(
            &mut doc,
            "form",
            "app",
            InsertPosition::Start,
            Some("user-input"),
        )
        .unwrap();

        assert_eq!(doc.elem_id(root), Some("user-input"));
        assert_eq!(doc.get_element_by_id("user-input"), Some(root));
    }

    #[test]
    fn mount_without_template_fails() {
        let mut doc = doc_with_host();
        let err = mount(&mut doc, "missing", "app", InsertPosition::End, None).unwrap_err();
        assert_eq!(err, ComponentError::TemplateNotFound("missing".to_string()));
    }

    #[test]
    fn mount_without_host_fails() {
        let mut doc = Document::new();
        doc.register_template("card", TemplateNode::new("li"));
        let err = mount(&mut doc, "card", "nowhere", InsertPosition::End, None).unwrap_err();
        assert_eq!(err, ComponentError::HostNotFound("nowhere".to_string()));
    }
}
