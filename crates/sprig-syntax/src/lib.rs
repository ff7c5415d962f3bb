//! Syntax tree model: node variants, the arena they live in, parent links,
//! semantic annotations and traversal.

pub mod annotations;
mod arena;
mod ast;
mod children;
mod cursor;
mod debug;
pub mod factory;
pub mod nodes;

#[cfg(test)]
mod tests;

pub use annotations::{Annotations, AnnotationSlots, AuxiliaryElements, ElementId, TypeId};
pub use arena::{Arena, Idx};
pub use ast::{Ast, NodeData, NodeId};
pub use cursor::{Preorder, WalkEvent};
pub use nodes::{NodeKind, NodeList};
pub use sprig_span::{TextRange, TextSize, Token, TokenMap};
