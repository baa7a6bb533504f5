//! Document-order traversal helpers.

use crate::document::Document;
use crate::node::{NodeId, NodeKind};

impl Document {
    /// Collect all text leaves under `root` in document order.
    ///
    /// The ids are collected up front, so callers can rewrite contents
    /// while iterating the result without corrupting the walk.
    pub fn text_nodes(&self, root: NodeId) -> Vec<NodeId> {
        let nodes = self.read();
        if self.slot(&nodes, root).is_none() {
            return Vec::new();
        }

        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let node = &nodes[id.index];
            match node.kind {
                NodeKind::Text { .. } => out.push(id),
                NodeKind::Element { .. } => {
                    for child in node.children.iter().rev() {
                        stack.push(*child);
                    }
                }
            }
        }
        out
    }

    /// Render the subtree as indented plain text, one node per line.
    pub fn render(&self, root: NodeId) -> String {
        let nodes = self.read();
        if self.slot(&nodes, root).is_none() {
            return String::new();
        }

        let mut out = String::new();
        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &nodes[id.index];
            for _ in 0..depth {
                out.push_str("  ");
            }
            match node.kind {
                NodeKind::Element { ref tag } => {
                    out.push('<');
                    out.push_str(tag);
                    out.push_str(">\n");
                    for child in node.children.iter().rev() {
                        stack.push((*child, depth + 1));
                    }
                }
                NodeKind::Text { ref content } => {
                    out.push_str(content);
                    out.push('\n');
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::document::Document;

    #[test]
    fn test_text_nodes_document_order() {
        let doc = Document::new("body");
        let nav = doc.create_element("nav");
        let first = doc.create_text("first");
        let main = doc.create_element("main");
        let second = doc.create_text("second");
        let third = doc.create_text("third");
        doc.append_child(doc.root(), nav).unwrap();
        doc.append_child(nav, first).unwrap();
        doc.append_child(doc.root(), main).unwrap();
        doc.append_child(main, second).unwrap();
        doc.append_child(main, third).unwrap();

        let texts: Vec<String> = doc
            .text_nodes(doc.root())
            .into_iter()
            .filter_map(|id| doc.text(id))
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_text_nodes_skips_detached_subtree() {
        let doc = Document::new("body");
        let nav = doc.create_element("nav");
        let inside = doc.create_text("inside");
        let outside = doc.create_text("outside");
        doc.append_child(doc.root(), nav).unwrap();
        doc.append_child(nav, inside).unwrap();
        doc.append_child(doc.root(), outside).unwrap();

        doc.remove(nav).unwrap();
        assert_eq!(doc.text_nodes(doc.root()), vec![outside]);
    }

    #[test]
    fn test_text_nodes_unknown_root_is_empty() {
        let doc = Document::new("body");
        let other = Document::new("body");
        let foreign = other.create_text("elsewhere");
        assert!(doc.text_nodes(foreign).is_empty());
    }

    #[test]
    fn test_render_indents_by_depth() {
        let doc = Document::new("body");
        let nav = doc.create_element("nav");
        let label = doc.create_text("Models");
        doc.append_child(doc.root(), nav).unwrap();
        doc.append_child(nav, label).unwrap();

        assert_eq!(doc.render(doc.root()), "<body>\n  <nav>\n    Models\n");
    }
}
