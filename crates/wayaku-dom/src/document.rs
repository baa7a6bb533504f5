//! Mutable document arena with structural notifications and a readiness
//! signal.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::{broadcast, watch};
use wayaku_core::error::WayakuError;

use crate::node::{Node, NodeId, NodeKind};

/// Capacity of the structural-notification channel.
const MUTATION_CHANNEL_CAPACITY: usize = 256;

/// Process-wide document id source, so handles from one document are
/// never valid in another.
static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(0);

/// Structural change to the tree, broadcast to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// A detached node (and its subtree) was appended under `parent`.
    ChildAdded { parent: NodeId, child: NodeId },
    /// A child (and its subtree) was detached from `parent`.
    ChildRemoved { parent: NodeId, child: NodeId },
}

/// In-memory document tree.
///
/// Nodes live in an arena addressed by [`NodeId`]. All operations take
/// `&self`, so the tree can be shared as `Arc<Document>` between tasks.
/// Only child-list changes emit a [`Mutation`] — text edits are silent.
pub struct Document {
    id: u64,
    nodes: RwLock<Vec<Node>>,
    root: NodeId,
    mutations: broadcast::Sender<Mutation>,
    readiness: watch::Sender<bool>,
}

impl Document {
    /// Create a document whose root is an element with the given tag.
    pub fn new(root_tag: &str) -> Self {
        let id = NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed);
        let root = Node {
            kind: NodeKind::Element {
                tag: root_tag.to_string(),
            },
            parent: None,
            children: Vec::new(),
        };
        let (mutations, _) = broadcast::channel(MUTATION_CHANNEL_CAPACITY);
        let (readiness, _) = watch::channel(false);
        Self {
            id,
            nodes: RwLock::new(vec![root]),
            root: NodeId { doc: id, index: 0 },
            mutations,
            readiness,
        }
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    // Every write is a single-node update, so a poisoned lock still holds
    // a consistent arena.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<Node>> {
        self.nodes.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Node>> {
        self.nodes.write().unwrap_or_else(|e| e.into_inner())
    }

    /// The arena slot for `id`, or `None` when another document issued it.
    pub(crate) fn slot<'a>(&self, nodes: &'a [Node], id: NodeId) -> Option<&'a Node> {
        if id.doc != self.id {
            return None;
        }
        nodes.get(id.index)
    }

    fn check_id(&self, nodes: &[Node], id: NodeId) -> Result<(), WayakuError> {
        if id.doc != self.id {
            return Err(WayakuError::Document(format!(
                "node {id:?} belongs to another document"
            )));
        }
        if id.index >= nodes.len() {
            return Err(WayakuError::Document(format!("unknown node {id:?}")));
        }
        Ok(())
    }

    /// Create a detached element node.
    pub fn create_element(&self, tag: &str) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_string(),
        })
    }

    /// Create a detached text leaf.
    pub fn create_text(&self, content: &str) -> NodeId {
        self.push(NodeKind::Text {
            content: content.to_string(),
        })
    }

    fn push(&self, kind: NodeKind) -> NodeId {
        let mut nodes = self.write();
        let id = NodeId {
            doc: self.id,
            index: nodes.len(),
        };
        nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append a detached node under `parent`.
    ///
    /// Only nodes without a parent can be appended; re-parenting is
    /// remove-then-append, which also rules out cycles. Emits
    /// [`Mutation::ChildAdded`].
    pub fn append_child(&self, parent: NodeId, child: NodeId) -> Result<(), WayakuError> {
        {
            let mut nodes = self.write();
            self.check_id(&nodes, parent)?;
            self.check_id(&nodes, child)?;
            if child == self.root {
                return Err(WayakuError::Document(
                    "cannot move the document root".into(),
                ));
            }
            if let NodeKind::Text { .. } = nodes[parent.index].kind {
                return Err(WayakuError::Document(
                    "text leaves cannot have children".into(),
                ));
            }
            if nodes[child.index].parent.is_some() {
                return Err(WayakuError::Document(format!(
                    "node {child:?} is already attached"
                )));
            }
            nodes[child.index].parent = Some(parent);
            nodes[parent.index].children.push(child);
        }
        let _ = self.mutations.send(Mutation::ChildAdded { parent, child });
        Ok(())
    }

    /// Detach `node` (and its subtree) from its parent.
    ///
    /// The subtree keeps its internal structure and can be re-appended.
    /// Emits [`Mutation::ChildRemoved`]. The root cannot be removed.
    pub fn remove(&self, node: NodeId) -> Result<(), WayakuError> {
        let parent = {
            let mut nodes = self.write();
            self.check_id(&nodes, node)?;
            if node == self.root {
                return Err(WayakuError::Document(
                    "cannot remove the document root".into(),
                ));
            }
            let parent = match nodes[node.index].parent.take() {
                Some(p) => p,
                None => {
                    return Err(WayakuError::Document(format!(
                        "node {node:?} is not attached"
                    )))
                }
            };
            nodes[parent.index].children.retain(|c| *c != node);
            parent
        };
        let _ = self.mutations.send(Mutation::ChildRemoved {
            parent,
            child: node,
        });
        Ok(())
    }

    /// Text content of a leaf, or `None` for elements and foreign ids.
    pub fn text(&self, node: NodeId) -> Option<String> {
        let nodes = self.read();
        match self.slot(&nodes, node)?.kind {
            NodeKind::Text { ref content } => Some(content.clone()),
            NodeKind::Element { .. } => None,
        }
    }

    /// Overwrite the content of a text leaf. Emits no notification.
    pub fn set_text(&self, node: NodeId, content: &str) -> Result<(), WayakuError> {
        let mut nodes = self.write();
        self.check_id(&nodes, node)?;
        match nodes[node.index].kind {
            NodeKind::Text {
                content: ref mut c,
            } => {
                *c = content.to_string();
                Ok(())
            }
            NodeKind::Element { .. } => Err(WayakuError::Document(format!(
                "node {node:?} is not a text leaf"
            ))),
        }
    }

    /// Element tag, or `None` for text leaves and foreign ids.
    pub fn tag(&self, node: NodeId) -> Option<String> {
        let nodes = self.read();
        match self.slot(&nodes, node)?.kind {
            NodeKind::Element { ref tag } => Some(tag.clone()),
            NodeKind::Text { .. } => None,
        }
    }

    /// Ordered children of a node (empty for leaves and foreign ids).
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        let nodes = self.read();
        self.slot(&nodes, node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Whether `node` is currently reachable from the root.
    pub fn contains(&self, node: NodeId) -> bool {
        let nodes = self.read();
        if self.slot(&nodes, node).is_none() {
            return false;
        }
        let mut current = node;
        loop {
            if current == self.root {
                return true;
            }
            match nodes[current.index].parent {
                Some(p) => current = p,
                None => return false,
            }
        }
    }

    /// Mark the document loaded. Idempotent.
    pub fn mark_ready(&self) {
        if !*self.readiness.borrow() {
            self.readiness.send_replace(true);
        }
    }

    /// Whether the document has been marked loaded.
    pub fn is_ready(&self) -> bool {
        *self.readiness.borrow()
    }

    /// Watch the readiness flag (`false` until [`Document::mark_ready`]).
    pub fn ready_changed(&self) -> watch::Receiver<bool> {
        self.readiness.subscribe()
    }

    /// Subscribe to structural mutations.
    pub fn subscribe(&self) -> broadcast::Receiver<Mutation> {
        self.mutations.subscribe()
    }
}
