use crate::annotations::Annotations;
use crate::arena::{Arena, Idx};
use crate::nodes::NodeKind;

pub type NodeId = Idx<NodeData>;

#[derive(Debug, Clone)]
pub struct NodeData {
    pub kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub annotations: Annotations,
}

impl NodeData {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// A syntax tree stored in an arena.
///
/// Nodes own their children through ids; the parent link of a node is a plain id
/// pointing back into the same arena. Nodes that were detached by a replacement stay
/// allocated but are no longer reachable from the root.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    nodes: Arena<NodeData>,
    root: Option<NodeId>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Arena::with_capacity(capacity), root: None }
    }

    /// Allocates a node and attaches every child it names to it.
    ///
    /// Children must already be allocated in this tree and must not have a parent yet.
    pub fn alloc(&mut self, kind: impl Into<NodeKind>) -> NodeId {
        let kind = kind.into();
        let children = kind.children();
        let id =
            self.nodes.alloc(NodeData { kind, parent: None, annotations: Annotations::default() });

        for child in children {
            debug_assert!(self.nodes[child].parent.is_none(), "{child:?} already has a parent");
            self.nodes[child].parent = Some(id);
        }

        id
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of every allocated node, reachable or not.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        self.nodes.keys()
    }

    pub fn get(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node)
    }

    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node].kind
    }

    pub fn kind_mut(&mut self, node: NodeId) -> &mut NodeKind {
        &mut self.nodes[node].kind
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].parent
    }

    pub(crate) fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) {
        self.nodes[node].parent = parent;
    }

    pub fn annotations(&self, node: NodeId) -> &Annotations {
        &self.nodes[node].annotations
    }

    pub fn annotations_mut(&mut self, node: NodeId) -> &mut Annotations {
        &mut self.nodes[node].annotations
    }

    /// Moves the parent link from `old` to `new` after `new` took `old`'s place in `parent`.
    ///
    /// Only the node replacer should call this; it is what keeps the parent links
    /// consistent with the child fields.
    pub fn reparent(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        self.set_parent(old, None);
        self.set_parent(new, Some(parent));
    }
}

impl std::ops::Index<NodeId> for Ast {
    type Output = NodeData;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index]
    }
}
