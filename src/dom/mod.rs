//! Owned markup tree
//!
//! Pages are parsed with `scraper` and copied into a [`Document`], an arena
//! that owns every node. Children are listed by [`NodeId`]; each node keeps
//! the id of its parent for lookup only, so the tree has a single owner and
//! no reference cycles.
//!
//! [`Element`] is a cheap borrowed handle into the arena and exposes the
//! attribute accessors, direct text and parent lookup used by the scrape
//! passes.

mod element;
mod text;

pub use element::{Descendants, Element};
pub use text::VisibleText;

use scraper::{Html, Node};

/// Index of a node inside its [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Payload of a single node
#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// A parsed page: the arena owning all of its nodes
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Parses an HTML document
    ///
    /// Parsing never fails: malformed markup is repaired by the HTML5
    /// tree builder, so a garbage page simply yields few or no elements.
    ///
    /// # Example
    ///
    /// ```
    /// use policy_scout::dom::Document;
    ///
    /// let doc = Document::parse(r#"<html><body><a href="/p">Privacy Policy</a></body></html>"#);
    /// let link = doc.elements().find(|el| el.tag_name() == "a").unwrap();
    /// assert_eq!(link.attr("href"), Some("/p"));
    /// assert_eq!(link.text(), Some("Privacy Policy"));
    /// ```
    pub fn parse(html: &str) -> Self {
        let parsed = Html::parse_document(html);
        let mut document = Document::default();

        // Copied with a work stack, so nesting depth never touches the call
        // stack. Children go on reversed to pop in document order.
        let mut pending = vec![(*parsed.root_element(), None)];
        while let Some((source, parent)) = pending.pop() {
            let kind = match source.value() {
                Node::Element(element) => NodeKind::Element {
                    name: element.name().to_string(),
                    attrs: element
                        .attrs()
                        .map(|(name, val)| (name.to_string(), val.to_string()))
                        .collect(),
                },
                Node::Text(text) => NodeKind::Text(text.to_string()),
                Node::Comment(comment) => NodeKind::Comment(comment.to_string()),
                // Doctypes and processing instructions are dropped
                _ => continue,
            };

            let is_element = matches!(kind, NodeKind::Element { .. });
            let id = document.push(kind, parent);
            if is_element {
                pending.extend(source.children().rev().map(|child| (child, Some(id))));
            }
        }

        document
    }

    fn push(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    /// Number of nodes (elements, text and comments) in the document
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The document element (`<html>`), if any
    pub fn root(&self) -> Option<Element<'_>> {
        if self.nodes.is_empty() {
            None
        } else {
            Element::new(self, NodeId(0))
        }
    }

    /// The first `<body>` element
    pub fn body(&self) -> Option<Element<'_>> {
        self.elements().find(|el| el.tag_name() == "body")
    }

    /// Every element of the document in document order
    pub fn elements(&self) -> Descendants<'_> {
        match self.root() {
            Some(root) => root.descendants_inclusive(),
            None => Descendants::empty(self),
        }
    }

    /// Every element matching `predicate`, in document order
    pub fn find_all<F>(&self, mut predicate: F) -> Vec<Element<'_>>
    where
        F: FnMut(&Element<'_>) -> bool,
    {
        self.elements().filter(|el| predicate(el)).collect()
    }

    /// Every element with the given tag name, in document order
    pub fn find_all_by_tag(&self, tag_name: &str) -> Vec<Element<'_>> {
        self.find_all(|el| el.tag_name() == tag_name)
    }
}
