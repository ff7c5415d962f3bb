//! Lexically visible local bindings at a point in a syntax tree.

mod finder;
mod scope;

#[cfg(test)]
mod tests;

pub use finder::ScopedNameFinder;
pub use scope::LocalScope;
use sprig_span::TextSize;
use sprig_syntax::{Ast, NodeId};

/// Collects the locals visible from `node`, walking up to the nearest enclosing declaration.
///
/// Only bindings whose declaring identifier ends strictly before `position` are reported.
/// `None` admits every binding regardless of where it is declared.
#[tracing::instrument(level = "debug", skip(ast))]
pub fn find_scope(ast: &Ast, node: NodeId, position: Option<TextSize>) -> LocalScope {
    ScopedNameFinder::new(ast, position).find(node)
}
