//! A retained element tree standing in for a browser document.
//!
//! Views mount template clones into this tree and write their content into
//! it; the ratatui widgets read the same nodes back when drawing a frame.
//! Node handles are monotonically allocated and never reused, so a handle to
//! a removed node simply stops resolving.

use std::collections::HashMap;

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// Where a new child is attached relative to its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPosition {
    /// Before all existing children.
    Start,
    /// After all existing children.
    #[default]
    End,
}

/// Blueprint for a subtree, registered under a name and cloned on mount.
///
/// # Examples
///
/// ```
/// use plank_tui::dom::TemplateNode;
///
/// let template = TemplateNode::new("li")
///     .child(TemplateNode::new("h2"))
///     .child(TemplateNode::new("p").with_text("placeholder"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateNode {
    tag: String,
    elem_id: Option<String>,
    text: String,
    children: Vec<TemplateNode>,
}

impl TemplateNode {
    /// Creates a template node with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets the element id cloned instances will carry.
    #[must_use]
    pub fn with_id(mut self, elem_id: impl Into<String>) -> Self {
        self.elem_id = Some(elem_id.into());
        self
    }

    /// Sets the initial text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends a child template node.
    #[must_use]
    pub fn child(mut self, child: TemplateNode) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    elem_id: Option<String>,
    classes: Vec<String>,
    text: String,
    value: String,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            elem_id: None,
            classes: Vec::new(),
            text: String::new(),
            value: String::new(),
            children: Vec::new(),
        }
    }
}

/// The element tree.
///
/// Holds one attached tree rooted at a `body` node, a registry of named
/// templates, and a pending-alert slot (the stand-in for a blocking
/// `alert()` dialog, drained and rendered by the application shell).
///
/// Freshly created and instantiated nodes are detached until inserted under
/// an attached parent; id lookup only sees attached nodes.
#[derive(Debug)]
pub struct Document {
    nodes: HashMap<NodeId, Node>,
    templates: HashMap<String, TemplateNode>,
    root: NodeId,
    next_id: u64,
    pending_alert: Option<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding only the `body` root.
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: HashMap::new(),
            templates: HashMap::new(),
            root: NodeId(0),
            next_id: 0,
            pending_alert: None,
        };
        doc.root = doc.create_element("body");
        doc
    }

    /// The `body` node every attached subtree hangs off.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Creates a new detached element.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(tag));
        id
    }

    /// Registers a template under a name, replacing any previous one.
    pub fn register_template(&mut self, name: impl Into<String>, template: TemplateNode) {
        self.templates.insert(name.into(), template);
    }

    /// Returns whether a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Deep-clones a template's content into detached nodes.
    ///
    /// Returns the root of the clone, or `None` if no such template exists.
    /// Each call produces an independent subtree.
    pub fn instantiate(&mut self, name: &str) -> Option<NodeId> {
        let template = self.templates.get(name)?.clone();
        Some(self.instantiate_node(&template))
    }

    fn instantiate_node(&mut self, template: &TemplateNode) -> NodeId {
        let id = self.create_element(template.tag.clone());
        if let Some(node) = self.nodes.get_mut(&id) {
            node.elem_id = template.elem_id.clone();
            node.text = template.text.clone();
        }
        for child_template in &template.children {
            let child = self.instantiate_node(child_template);
            self.append_child(id, child);
        }
        id
    }

    /// Attaches a child after the parent's existing children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.insert_child(parent, child, InsertPosition::End);
    }

    /// Attaches a child at the given position among the parent's children.
    pub fn insert_child(&mut self, parent: NodeId, child: NodeId, position: InsertPosition) {
        if !self.nodes.contains_key(&child) {
            return;
        }
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            match position {
                InsertPosition::Start => parent_node.children.insert(0, child),
                InsertPosition::End => parent_node.children.push(child),
            }
        }
    }

    /// Finds an attached element by its element id.
    ///
    /// Only the tree under the root is searched; detached subtrees are
    /// invisible to lookup.
    #[must_use]
    pub fn get_element_by_id(&self, elem_id: &str) -> Option<NodeId> {
        self.find_from(self.root, &|node: &Node| {
            node.elem_id.as_deref() == Some(elem_id)
        })
    }

    /// Finds the first descendant of `scope` with the given tag,
    /// depth-first in document order.
    #[must_use]
    pub fn query_tag(&self, scope: NodeId, tag: &str) -> Option<NodeId> {
        let children = self.nodes.get(&scope)?.children.clone();
        for child in children {
            if let Some(found) = self.find_from(child, &|node: &Node| node.tag == tag) {
                return Some(found);
            }
        }
        None
    }

    fn find_from(&self, start: NodeId, pred: &dyn Fn(&Node) -> bool) -> Option<NodeId> {
        let node = self.nodes.get(&start)?;
        if pred(node) {
            return Some(start);
        }
        for child in &node.children {
            if let Some(found) = self.find_from(*child, pred) {
                return Some(found);
            }
        }
        None
    }

    /// The node's tag, if the node still exists.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|n| n.tag.as_str())
    }

    /// The node's element id, if the node exists and has one.
    #[must_use]
    pub fn elem_id(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).and_then(|n| n.elem_id.as_deref())
    }

    /// Assigns the node's element id.
    pub fn set_elem_id(&mut self, node: NodeId, elem_id: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.elem_id = Some(elem_id.into());
        }
    }

    /// The node's text content.
    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|n| n.text.as_str())
    }

    /// Replaces the node's text content.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.text = text.into();
        }
    }

    /// The node's input value.
    #[must_use]
    pub fn value(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|n| n.value.as_str())
    }

    /// Replaces the node's input value.
    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.value = value.into();
        }
    }

    /// Adds a class to the node, once.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        }
    }

    /// Removes a class from the node.
    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.classes.retain(|c| c != class);
        }
    }

    /// Returns whether the node carries the class.
    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    /// The node's children, in order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Removes all children of the node, destroying their subtrees.
    ///
    /// Returns every removed node handle so callers can drop the event
    /// registrations that pointed at them.
    pub fn remove_children(&mut self, node: NodeId) -> Vec<NodeId> {
        let children = match self.nodes.get_mut(&node) {
            Some(n) => std::mem::take(&mut n.children),
            None => return Vec::new(),
        };
        let mut removed = Vec::new();
        for child in children {
            self.remove_subtree(child, &mut removed);
        }
        removed
    }

    fn remove_subtree(&mut self, node: NodeId, removed: &mut Vec<NodeId>) {
        if let Some(n) = self.nodes.remove(&node) {
            removed.push(node);
            for child in n.children {
                self.remove_subtree(child, removed);
            }
        }
    }

    /// Raises a blocking alert, replacing any pending one.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.pending_alert = Some(message.into());
    }

    /// The pending alert, if any, without consuming it.
    #[must_use]
    pub fn pending_alert(&self) -> Option<&str> {
        self.pending_alert.as_deref()
    }

    /// Takes the pending alert, leaving the slot empty.
    pub fn take_alert(&mut self) -> Option<String> {
        self.pending_alert.take()
    }
}
