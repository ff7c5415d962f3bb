//! Property tests over generated function bodies.
//!
//! Every generated tree is `main(p) { var x = <expr>; return x; }`, with `<expr>` drawn
//! from a small expression grammar.

use proptest::prelude::*;
use proptest::sample::Index;
use sprig_rewrite::{clone_tree, clone_with_substitution, equal, graft, replace};
use sprig_span::TokenMap;
use sprig_syntax::factory::AstFactory;
use sprig_syntax::{Annotations, Ast, AuxiliaryElements, ElementId, NodeId, TypeId, WalkEvent};

const NAMES: [&str; 4] = ["p", "x", "foo", "bar"];

#[derive(Debug, Clone)]
enum Expr {
    Int(u16),
    Name(usize),
    Binary(Box<Expr>, &'static str, Box<Expr>),
    Prefix(&'static str, Box<Expr>),
    Paren(Box<Expr>),
    Call(usize, Vec<Expr>),
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![any::<u16>().prop_map(Expr::Int), (0..NAMES.len()).prop_map(Expr::Name)];
    leaf.prop_recursive(5, 48, 4, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["+", "-", "*", "<"]), inner.clone())
                .prop_map(|(left, op, right)| Expr::Binary(Box::new(left), op, Box::new(right))),
            (prop::sample::select(vec!["-", "!"]), inner.clone())
                .prop_map(|(op, operand)| Expr::Prefix(op, Box::new(operand))),
            inner.clone().prop_map(|inner| Expr::Paren(Box::new(inner))),
            (0..NAMES.len(), prop::collection::vec(inner, 0..3))
                .prop_map(|(name, arguments)| Expr::Call(name, arguments)),
        ]
    })
}

fn build(f: &mut AstFactory, expr: &Expr) -> NodeId {
    match expr {
        Expr::Int(value) => f.integer(&value.to_string()),
        Expr::Name(name) => f.identifier(NAMES[*name]),
        Expr::Binary(left, op, right) => f.binary(|f| build(f, left), op, |f| build(f, right)),
        Expr::Prefix(op, operand) => f.prefix(op, |f| build(f, operand)),
        Expr::Paren(inner) => f.parenthesized(|f| build(f, inner)),
        Expr::Call(name, arguments) => {
            f.call(NAMES[*name], |f| arguments.iter().map(|argument| build(f, argument)).collect())
        }
    }
}

fn function(expr: &Expr) -> (Ast, NodeId, TokenMap) {
    let mut f = AstFactory::new();
    let root = f.function_declaration(
        None,
        "main",
        |f| vec![f.parameter("p")],
        |f| {
            f.block_body(|f| {
                vec![
                    f.local_variable("var", "x", |f| Some(build(f, expr))),
                    f.return_statement(|f| Some(f.identifier("x"))),
                ]
            })
        },
    );
    let token_map = TokenMap::identity(f.tokens());
    (f.finish(root), root, token_map)
}

/// Preorder ids under `root`, leaving out the subtree rooted at `hole`.
fn preorder_without(ast: &Ast, root: NodeId, hole: Option<NodeId>) -> Vec<NodeId> {
    let mut nodes = Vec::new();
    let mut preorder = ast.preorder(root);
    while let Some(event) = preorder.next() {
        if let WalkEvent::Enter(node) = event {
            if Some(node) == hole {
                preorder.skip_subtree();
            } else {
                nodes.push(node);
            }
        }
    }
    nodes
}

fn annotate_everything(ast: &mut Ast, root: NodeId) {
    let nodes: Vec<_> = ast.descendants(root).collect();
    for node in nodes {
        let id = node.index();
        *ast.annotations_mut(node) = Annotations {
            element: Some(ElementId(id)),
            static_element: Some(ElementId(id + 1000)),
            propagated_element: Some(ElementId(id + 2000)),
            static_type: Some(TypeId(id)),
            propagated_type: Some(TypeId(id + 1000)),
            auxiliary: Some(AuxiliaryElements {
                static_element: Some(ElementId(id + 3000)),
                propagated_element: None,
            }),
        };
    }
}

fn replacement() -> (Ast, NodeId) {
    let mut f = AstFactory::new();
    let node = f.call("replaced", |f| vec![f.integer("42")]);
    (f.into_ast(), node)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn clone_round_trips(expr in expr()) {
        let (ast, root, _) = function(&expr);

        let copy = clone_tree(&ast, root);

        prop_assert!(equal(&ast, Some(root), &copy, copy.root()));
        prop_assert_eq!(copy.len(), ast.descendants(root).count());
    }

    #[test]
    fn clone_is_independent(expr in expr(), pick in any::<Index>()) {
        let (ast, root, _) = function(&expr);
        let before = ast.debug_tree(root);

        let mut copy = clone_tree(&ast, root);
        let copy_root = copy.root().unwrap();
        let nodes: Vec<_> = copy.descendants(copy_root).skip(1).collect();
        let old = *pick.get(&nodes);
        let (r_tree, r) = replacement();
        let new = graft(&mut copy, &r_tree, r);
        replace(&mut copy, old, new).unwrap();

        prop_assert_eq!(ast.debug_tree(root), before);
        prop_assert!(!equal(&ast, Some(root), &copy, Some(copy_root)));
    }

    #[test]
    fn replace_agrees_with_substitution(expr in expr(), pick in any::<Index>()) {
        let (ast, root, token_map) = function(&expr);
        let nodes: Vec<_> = ast.descendants(root).skip(1).collect();
        let old = *pick.get(&nodes);
        let (r_tree, r) = replacement();

        let substituted = clone_with_substitution(&ast, root, old, &r_tree, r, &token_map);

        let mut mutated = ast.clone();
        let new = graft(&mut mutated, &r_tree, r);
        replace(&mut mutated, old, new).unwrap();

        prop_assert!(substituted.substituted());
        prop_assert!(equal(&substituted.tree, Some(substituted.root), &mutated, Some(root)));
        let placed = substituted.replacement.unwrap();
        prop_assert!(equal(&substituted.tree, Some(placed), &r_tree, Some(r)));
    }

    #[test]
    fn substitution_keeps_annotations(expr in expr(), pick in any::<Index>()) {
        let (mut ast, root, token_map) = function(&expr);
        annotate_everything(&mut ast, root);
        let nodes: Vec<_> = ast.descendants(root).skip(1).collect();
        let old = *pick.get(&nodes);
        let (r_tree, r) = replacement();

        let result = clone_with_substitution(&ast, root, old, &r_tree, r, &token_map);

        let retained = preorder_without(&ast, root, Some(old));
        let copies = preorder_without(&result.tree, result.root, result.replacement);
        prop_assert_eq!(retained.len(), copies.len());
        for (node, copy) in retained.into_iter().zip(copies) {
            let expected = ast.annotations(node).restrict(ast.kind(node).annotation_slots());
            prop_assert_eq!(*result.tree.annotations(copy), expected);
            prop_assert_eq!(ast.kind(node).name(), result.tree.kind(copy).name());
        }
    }
}
