//! Page rewriter — overwrites matching text leaves with table values.

use tracing::debug;
use wayaku_core::table::TranslationTable;

use crate::document::Document;
use crate::node::NodeId;

/// Outcome of a rewrite pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Text leaves visited.
    pub scanned: usize,
    /// Text leaves overwritten with a table value.
    pub rewritten: usize,
}

/// Rewrite every matching text leaf under the document root.
pub fn rewrite_page(doc: &Document, table: &TranslationTable) -> RewriteOutcome {
    rewrite_subtree(doc, doc.root(), table)
}

/// Rewrite every matching text leaf under `root` in document order.
///
/// Leaf ids are collected before any mutation. A leaf matches when its
/// trimmed content is a table key; the whole content is then replaced
/// with the mapped value, surrounding whitespace included. Unmapped
/// leaves and leaves already holding their mapped value are left
/// untouched, so a second pass rewrites nothing.
///
/// An absent root is a logged no-op. Removal only detaches nodes, so a
/// leaf collected here stays writable and is still overwritten if it
/// leaves the tree mid-pass.
pub fn rewrite_subtree(doc: &Document, root: NodeId, table: &TranslationTable) -> RewriteOutcome {
    let mut outcome = RewriteOutcome::default();

    if !doc.contains(root) {
        debug!("rewrite: root {root:?} is not in the document, skipping");
        return outcome;
    }

    for id in doc.text_nodes(root) {
        outcome.scanned += 1;
        let content = match doc.text(id) {
            Some(c) => c,
            None => continue,
        };
        let value = match table.lookup(&content) {
            Some(v) => v,
            None => continue,
        };
        if content == value {
            continue;
        }
        if doc.set_text(id, value).is_ok() {
            debug!("rewrite: \"{}\" -> \"{value}\"", content.trim());
            outcome.rewritten += 1;
        }
    }

    outcome
}
