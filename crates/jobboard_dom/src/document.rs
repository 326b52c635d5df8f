use std::collections::BTreeMap;

use ego_tree::{NodeId, NodeRef, Tree};
use thiserror::Error;

/// Stable handle to one element of a [`Document`].
///
/// Handles stay valid after a detach (the arena never frees nodes), so handle
/// equality is a reliable identity test for the lifetime of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(NodeId);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("element {child:?} is already attached to a parent")]
    AlreadyAttached { child: ElementId },
    #[error("appending {child:?} under {parent:?} would create a cycle")]
    WouldCycle { parent: ElementId, child: ElementId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ElementData {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: Option<String>,
    hidden: bool,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            text: None,
            hidden: false,
        }
    }
}

/// An element tree standing in for the page markup.
///
/// The tree always has a `body` root. Elements carry a tag, a class list, an
/// attribute map, optional own text, and a hidden flag; structure lives in an
/// [`ego_tree::Tree`] arena addressed by [`ElementId`].
#[derive(Debug, Clone)]
pub struct Document {
    tree: Tree<ElementData>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            tree: Tree::new(ElementData::new("body")),
        }
    }

    pub fn root(&self) -> ElementId {
        ElementId(self.tree.root().id())
    }

    /// Creates a new detached element.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        ElementId(self.tree.orphan(ElementData::new(tag)).id())
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// The child must currently be detached, and `parent` must not live in
    /// the subtree rooted at `child`.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), DomError> {
        if self.node(child).parent().is_some() {
            return Err(DomError::AlreadyAttached { child });
        }
        if parent == child
            || self
                .node(parent)
                .ancestors()
                .any(|ancestor| ancestor.id() == child.0)
        {
            return Err(DomError::WouldCycle { parent, child });
        }
        self.push_child(parent, child);
        Ok(())
    }

    /// Links a known-detached child under `parent` without re-validating.
    pub(crate) fn push_child(&mut self, parent: ElementId, child: ElementId) {
        self.tree
            .get_mut(parent.0)
            .expect("element id belongs to another document")
            .append_id(child.0);
    }

    /// Removes `id` from its parent's child list, keeping the subtree alive
    /// in the arena. Detaching an already-detached element (or the root) is
    /// a no-op.
    pub fn detach(&mut self, id: ElementId) {
        self.tree
            .get_mut(id.0)
            .expect("element id belongs to another document")
            .detach();
    }

    /// True when the element can be reached from the root.
    pub fn is_attached(&self, id: ElementId) -> bool {
        id == self.root()
            || self
                .node(id)
                .ancestors()
                .any(|ancestor| ancestor.id() == self.root().0)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).parent().map(|node| ElementId(node.id()))
    }

    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.node(id)
            .children()
            .map(|node| ElementId(node.id()))
            .collect()
    }

    pub fn tag(&self, id: ElementId) -> &str {
        &self.node(id).value().tag
    }

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.node(id).value().text.as_deref()
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        let text = text.into();
        self.with_value(id, |value| value.text = Some(text));
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.node(id).value().attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: impl Into<String>) {
        let (name, value) = (name.to_string(), value.into());
        self.with_value(id, |data| {
            data.attrs.insert(name, value);
        });
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.node(id).value().classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if !self.has_class(id, class) {
            let class = class.to_string();
            self.with_value(id, |value| value.classes.push(class));
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.with_value(id, |value| value.classes.retain(|c| c != class));
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.node(id).value().hidden
    }

    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        self.with_value(id, |value| value.hidden = hidden);
    }

    /// Walks from `id` through its ancestors and returns the first element
    /// matching the predicate, the element itself included.
    pub fn closest(
        &self,
        id: ElementId,
        pred: impl Fn(&Document, ElementId) -> bool,
    ) -> Option<ElementId> {
        if pred(self, id) {
            return Some(id);
        }
        self.node(id)
            .ancestors()
            .map(|node| ElementId(node.id()))
            .find(|&ancestor| pred(self, ancestor))
    }

    /// Pre-order traversal of the subtree below `id`, the element itself
    /// excluded.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        self.node(id)
            .descendants()
            .skip(1)
            .map(|node| ElementId(node.id()))
            .collect()
    }

    /// First descendant (pre-order) matching the predicate.
    pub fn find_descendant(
        &self,
        id: ElementId,
        pred: impl Fn(&Document, ElementId) -> bool,
    ) -> Option<ElementId> {
        self.descendants(id)
            .into_iter()
            .find(|&candidate| pred(self, candidate))
    }

    /// Concatenated text of the element and its subtree, in document order.
    /// The analog of the page's `textContent`, used for control labels and
    /// summary-card headings.
    pub fn label_text(&self, id: ElementId) -> String {
        self.node(id)
            .descendants()
            .filter_map(|node| node.value().text.as_deref())
            .collect()
    }

    fn node(&self, id: ElementId) -> NodeRef<'_, ElementData> {
        self.tree
            .get(id.0)
            .expect("element id belongs to another document")
    }

    fn with_value<R>(&mut self, id: ElementId, f: impl FnOnce(&mut ElementData) -> R) -> R {
        let mut node = self
            .tree
            .get_mut(id.0)
            .expect("element id belongs to another document");
        f(node.value())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
