use crate::{Ast, NodeId};

impl Ast {
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.kind(node).children()
    }

    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        let mut first = None;
        self.kind(node).for_each_child(|child| {
            first.get_or_insert(child);
        });
        first
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let mut seen = false;
        let mut next = None;
        self.kind(parent).for_each_child(|child| {
            if next.is_some() {
                return;
            }
            if seen {
                next = Some(child);
            } else {
                seen = child == node;
            }
        });
        next
    }

    /// The node itself, then its parent, up to the root.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), |&node| self.parent(node))
    }

    pub fn preorder(&self, node: NodeId) -> Preorder<'_> {
        Preorder::new(self, node)
    }

    /// The node and everything below it, parents before children.
    pub fn descendants(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.preorder(node).filter_map(|event| match event {
            WalkEvent::Enter(node) => Some(node),
            WalkEvent::Leave(_) => None,
        })
    }
}

pub struct Preorder<'a> {
    ast: &'a Ast,
    start: Option<NodeId>,
    /// Entered nodes, each with its children and the index of the next child to enter.
    stack: Vec<(NodeId, Vec<NodeId>, usize)>,
}

impl<'a> Preorder<'a> {
    pub fn new(ast: &'a Ast, start: NodeId) -> Self {
        Self { ast, start: Some(start), stack: Vec::new() }
    }

    /// Skips the children of the node just entered. Only meaningful right after `Enter`.
    pub fn skip_subtree(&mut self) {
        if let Some((_, children, next)) = self.stack.last_mut() {
            *next = children.len();
        }
    }

    fn enter(&mut self, node: NodeId) -> WalkEvent {
        self.stack.push((node, self.ast.children(node), 0));
        WalkEvent::Enter(node)
    }
}

impl Iterator for Preorder<'_> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(self.enter(start));
        }

        let (_, children, next) = self.stack.last_mut()?;
        if let Some(&child) = children.get(*next) {
            *next += 1;
            return Some(self.enter(child));
        }

        let (node, ..) = self.stack.pop()?;
        Some(WalkEvent::Leave(node))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent {
    Enter(NodeId),
    Leave(NodeId),
}
