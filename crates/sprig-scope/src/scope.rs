use std::hash::BuildHasherDefault;

use rustc_hash::FxHasher;
use sprig_syntax::NodeId;

type FxIndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Locals visible at a point, innermost first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocalScope {
    bindings: FxIndexMap<Box<str>, NodeId>,
    enclosing_declaration: Option<NodeId>,
}

impl LocalScope {
    /// The declaring `SimpleIdentifier` of `name`.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.bindings.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.bindings.iter().map(|(name, &binding)| (&**name, binding))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.bindings.keys().map(|name| &**name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The function, method, constructor, field or top-level variable the walk stopped at.
    pub fn enclosing_declaration(&self) -> Option<NodeId> {
        self.enclosing_declaration
    }

    /// Returns `false` when `name` was already bound by an inner scope.
    pub(crate) fn insert(&mut self, name: &str, binding: NodeId) -> bool {
        if self.bindings.contains_key(name) {
            return false;
        }
        self.bindings.insert(name.into(), binding);
        true
    }

    pub(crate) fn set_enclosing_declaration(&mut self, declaration: NodeId) {
        self.enclosing_declaration = Some(declaration);
    }
}
