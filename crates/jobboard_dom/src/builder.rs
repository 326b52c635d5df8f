use crate::document::{Document, ElementId};

/// Fluent construction of a single element.
///
/// The element starts out detached; [`ElementBuilder::child_of`] attaches it
/// and hands back its id. Building markup this way keeps page construction
/// readable in the app and in tests.
pub struct ElementBuilder<'a> {
    doc: &'a mut Document,
    id: ElementId,
}

impl Document {
    /// Starts building a new detached element with the given tag.
    pub fn element(&mut self, tag: &str) -> ElementBuilder<'_> {
        let id = self.create_element(tag);
        ElementBuilder { doc: self, id }
    }
}

impl ElementBuilder<'_> {
    pub fn class(self, class: &str) -> Self {
        self.doc.add_class(self.id, class);
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.doc.set_attr(self.id, name, value);
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.doc.set_text(self.id, text);
        self
    }

    /// Attaches the element as the last child of `parent` and returns its id.
    pub fn child_of(self, parent: ElementId) -> ElementId {
        // The element is freshly created and detached, so the checked append
        // cannot fail here.
        self.doc.push_child(parent, self.id);
        self.id
    }

    /// Returns the id without attaching the element.
    pub fn into_id(self) -> ElementId {
        self.id
    }
}
