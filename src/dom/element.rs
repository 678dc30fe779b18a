use crate::dom::text::VisibleText;
use crate::dom::{Document, NodeData, NodeId, NodeKind};
use std::fmt;

/// Borrowed handle to an element node of a [`Document`]
#[derive(Clone, Copy)]
pub struct Element<'a> {
    document: &'a Document,
    id: NodeId,
}

impl<'a> Element<'a> {
    /// Wraps `id` if it refers to an element (not a text or comment node)
    pub(crate) fn new(document: &'a Document, id: NodeId) -> Option<Self> {
        match document.node(id).kind {
            NodeKind::Element { .. } => Some(Self { document, id }),
            NodeKind::Text(_) | NodeKind::Comment(_) => None,
        }
    }

    fn data(&self) -> &'a NodeData {
        self.document.node(self.id)
    }

    fn parts(&self) -> (&'a str, &'a [(String, String)]) {
        match &self.data().kind {
            NodeKind::Element { name, attrs } => (name.as_str(), attrs.as_slice()),
            // Element handles are only ever created over element nodes
            NodeKind::Text(_) | NodeKind::Comment(_) => ("", &[]),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// Lowercase tag name, e.g. `"a"` or `"script"`
    pub fn tag_name(&self) -> &'a str {
        self.parts().0
    }

    /// Returns true if the element carries the attribute, whatever its value
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Value of the attribute, if present
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.parts()
            .1
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in parser order
    pub fn attributes(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.parts()
            .1
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// The element's direct string
    ///
    /// `Some` when the element has exactly one child and that child is a
    /// text or comment node, or when its only child is an element that
    /// itself has a direct string. Elements with no children or several
    /// children (comments included) have none. The text is returned as-is,
    /// without trimming.
    pub fn text(&self) -> Option<&'a str> {
        let mut current = self.data();
        loop {
            let [only_child] = current.children.as_slice() else {
                return None;
            };
            let child = self.document.node(*only_child);
            match &child.kind {
                NodeKind::Text(text) | NodeKind::Comment(text) => return Some(text.as_str()),
                NodeKind::Element { .. } => current = child,
            }
        }
    }

    /// Parent element; `None` for the document element
    pub fn parent(&self) -> Option<Element<'a>> {
        self.data()
            .parent
            .and_then(|id| Element::new(self.document, id))
    }

    /// Direct child elements, skipping text and comment nodes
    pub fn children(&self) -> impl Iterator<Item = Element<'a>> + 'a {
        let document = self.document;
        self.data()
            .children
            .iter()
            .filter_map(move |id| Element::new(document, *id))
    }

    /// Descendant elements in document order, excluding `self`
    pub fn descendants(&self) -> Descendants<'a> {
        let mut iter = self.descendants_inclusive();
        iter.next();
        iter
    }

    /// `self` followed by its descendant elements in document order
    pub fn descendants_inclusive(&self) -> Descendants<'a> {
        Descendants {
            document: self.document,
            stack: vec![self.id],
        }
    }

    /// Visible text fragments beneath this element, trimmed, in document order
    pub fn stripped_strings(&self) -> VisibleText<'a> {
        VisibleText::new(self.document, self.id)
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("tag_name", &self.tag_name())
            .field("attributes", &self.parts().1)
            .finish()
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.id == other.id
    }
}

impl Eq for Element<'_> {}

/// Pre-order iterator over element nodes
pub struct Descendants<'a> {
    document: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn empty(document: &'a Document) -> Self {
        Self {
            document,
            stack: Vec::new(),
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = self.document.node(id);
            if let NodeKind::Element { .. } = node.kind {
                self.stack.extend(node.children.iter().rev().copied());
                return Element::new(self.document, id);
            }
        }
        None
    }
}
