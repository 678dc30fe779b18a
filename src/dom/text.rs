use crate::dom::{Document, NodeId, NodeKind};

/// Elements whose text content is never rendered
const INVISIBLE_TAGS: &[&str] = &["script", "style", "template", "noscript"];

/// Lazy, forward-only sequence of the visible text beneath an element
///
/// Each text node is yielded trimmed of surrounding whitespace; nodes that
/// trim to nothing are skipped. Comments and the text inside `script`,
/// `style`, `template` and `noscript` are skipped. The cursor only moves
/// forward and cannot be rewound: ask the element for a fresh sequence
/// instead.
pub struct VisibleText<'a> {
    document: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> VisibleText<'a> {
    pub(crate) fn new(document: &'a Document, start: NodeId) -> Self {
        Self {
            document,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for VisibleText<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = self.document.node(id);
            match &node.kind {
                NodeKind::Text(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        return Some(trimmed);
                    }
                }
                NodeKind::Comment(_) => {}
                NodeKind::Element { name, .. } => {
                    if !INVISIBLE_TAGS.contains(&name.as_str()) {
                        self.stack.extend(node.children.iter().rev().copied());
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::Document;

    #[test]
    fn test_strings_in_document_order() {
        let doc = Document::parse(
            "<body><h1>Privacy Policy</h1>\n  <p>We collect <b>some</b> data.</p>\n</body>",
        );
        let strings: Vec<&str> = doc.body().unwrap().stripped_strings().collect();
        assert_eq!(
            strings,
            vec!["Privacy Policy", "We collect", "some", "data."]
        );
    }

    #[test]
    fn test_invisible_content_skipped() {
        let doc = Document::parse(
            r#"<body><script>var x = 1;</script><style>p { color: red }</style><p>Visible</p></body>"#,
        );
        let strings: Vec<&str> = doc.body().unwrap().stripped_strings().collect();
        assert_eq!(strings, vec!["Visible"]);
    }

    #[test]
    fn test_comments_not_visible() {
        let doc = Document::parse("<body><p>Before<!-- note -->After</p><!--x--></body>");
        let strings: Vec<&str> = doc.body().unwrap().stripped_strings().collect();
        assert_eq!(strings, vec!["Before", "After"]);
    }

    #[test]
    fn test_sequence_is_lazy() {
        let doc = Document::parse("<body><p>one</p><p>two</p><p>three</p></body>");
        let body = doc.body().unwrap();

        let mut strings = body.stripped_strings();
        assert_eq!(strings.next(), Some("one"));
        assert_eq!(strings.next(), Some("two"));

        // A new sequence starts over independently
        assert_eq!(body.stripped_strings().next(), Some("one"));
        assert_eq!(strings.next(), Some("three"));
        assert_eq!(strings.next(), None);
    }

    #[test]
    fn test_empty_body_yields_nothing() {
        let doc = Document::parse("<html><body>   </body></html>");
        assert_eq!(doc.body().unwrap().stripped_strings().count(), 0);
    }
}
