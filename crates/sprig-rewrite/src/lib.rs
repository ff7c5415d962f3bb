//! Algorithms over syntax trees: structural clone, structural equality,
//! clone-with-substitution for incremental re-analysis, and in-place replacement.
//!
//! Only [`replace`] mutates a tree. The other entry points read their input and build
//! a new [`Ast`], so they may run concurrently on a tree nobody is replacing into.

mod cloner;
mod comparator;
mod errors;
mod incremental;
mod replacer;


use sprig_span::TokenMap;
use sprig_syntax::{Ast, NodeId};

pub use cloner::AstCloner;
pub use comparator::{AstComparator, TokenComparison};
pub use errors::ReplaceError;
pub use incremental::{IncrementalAstCloner, IncrementalClone};
pub use replacer::NodeReplacer;

/// Deep copy of the subtree under `root` into a new tree, without annotations.
#[tracing::instrument(level = "debug", skip(source))]
pub fn clone_tree(source: &Ast, root: NodeId) -> Ast {
    let mut target = Ast::with_capacity(source.len());
    let root = AstCloner::new(source, &mut target).clone_node(root);
    target.set_root(root);
    target
}

/// Copies the subtree under `node` into `target` as it is, annotations included, and
/// returns the id of the copy. The copy is not attached to anything.
pub fn graft(target: &mut Ast, source: &Ast, node: NodeId) -> NodeId {
    AstCloner::new(source, target).keep_annotations().clone_node(node)
}

/// Structural equality with exact token comparison (offset, length and text).
pub fn equal(first: &Ast, a: Option<NodeId>, second: &Ast, b: Option<NodeId>) -> bool {
    AstComparator::new(first, second, TokenComparison::Exact).is_equal(a, b)
}

/// Structural equality that only looks at token text, so `1+2` equals `1 + 2`.
pub fn equal_ignoring_offsets(
    first: &Ast,
    a: Option<NodeId>,
    second: &Ast,
    b: Option<NodeId>,
) -> bool {
    AstComparator::new(first, second, TokenComparison::Lexeme).is_equal(a, b)
}

/// Clones the tree under `root` with `old` replaced by the subtree `new` of `new_tree`.
///
/// Tokens are remapped through `token_map` and annotations are preserved. When `old`
/// is not reachable from `root` the result is a plain copy; check
/// [`IncrementalClone::substituted`].
pub fn clone_with_substitution(
    source: &Ast,
    root: NodeId,
    old: NodeId,
    new_tree: &Ast,
    new: NodeId,
    token_map: &TokenMap,
) -> IncrementalClone {
    IncrementalAstCloner::new(source, old, new_tree, new, token_map).clone_tree(root)
}

/// Replaces `old` with `new` inside `old`'s parent.
pub fn replace(ast: &mut Ast, old: NodeId, new: NodeId) -> Result<(), ReplaceError> {
    NodeReplacer::replace(ast, old, new)
}
