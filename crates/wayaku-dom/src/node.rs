//! Node handles and node kinds for the document arena.

/// Handle to a node in a [`Document`](crate::document::Document) arena.
///
/// A handle carries the id of the issuing document; every other document
/// rejects it, even when the slot index happens to be in range there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) doc: u64,
    pub(crate) index: usize,
}

/// What a node holds: an element with a tag, or a text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element { tag: String },
    Text { content: String },
}

/// Arena slot: kind plus tree links.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}
