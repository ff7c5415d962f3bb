use sprig_syntax::NodeId;
use thiserror::Error;

/// Why [`replace`](crate::replace) refused to touch the tree.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceError {
    #[error("{0:?} is not a node of this tree")]
    UnknownNode(NodeId),
    #[error("{0:?} is not attached to a tree")]
    Detached(NodeId),
    #[error("{0:?} already has a parent")]
    AlreadyAttached(NodeId),
    #[error("{0:?} would become its own descendant")]
    Cycle(NodeId),
    /// The parent link of `child` points at a node that does not contain it.
    #[error("{parent:?} is recorded as the parent of {child:?} but does not contain it")]
    NotAChild { parent: NodeId, child: NodeId },
}
