use expect_test::expect;

use crate::factory::AstFactory;
use crate::nodes::{FunctionDeclaration, NodeKind};
use crate::{AnnotationSlots, Annotations, ElementId, TypeId, WalkEvent};

#[test]
fn factory_places_tokens_from_source() {
    let mut f = AstFactory::with_source("1 + a * 2");
    let root = f.binary(
        |f| f.integer("1"),
        "+",
        |f| f.binary(|f| f.identifier("a"), "*", |f| f.integer("2")),
    );
    let ast = f.finish(root);

    expect![[r#"
        BinaryExpression@2..3 "+"
          IntegerLiteral@0..1 "1"
          BinaryExpression@6..7 "*"
            SimpleIdentifier@4..5 "a"
            IntegerLiteral@8..9 "2"
    "#]]
    .assert_eq(&ast.debug_tree(root));
}

#[test]
fn synthetic_tokens_are_one_space_apart() {
    let mut f = AstFactory::new();
    let root = f.binary(|f| f.integer("10"), "-", |f| f.integer("2"));
    let ast = f.finish(root);

    expect![[r#"
        BinaryExpression@3..4 "-"
          IntegerLiteral@0..2 "10"
          IntegerLiteral@5..6 "2"
    "#]]
    .assert_eq(&ast.debug_tree(root));
}

#[test]
fn word_lexemes_match_whole_words() {
    let mut f = AstFactory::with_source("if (i) in;");
    let keyword = f.token("if");
    let i = f.token("i");
    let r#in = f.token("in");

    assert_eq!(u32::from(keyword.offset()), 0);
    assert_eq!(u32::from(i.offset()), 4);
    assert_eq!(u32::from(r#in.offset()), 7);
}

#[test]
fn alloc_sets_parents() {
    let mut f = AstFactory::with_source("f(x) { return x; }");
    let root = f.function_declaration(
        None,
        "f",
        |f| vec![f.parameter("x")],
        |f| f.block_body(|f| vec![f.return_statement(|f| Some(f.identifier("x")))]),
    );
    let ast = f.finish(root);

    assert_eq!(ast.parent(root), None);
    for node in ast.descendants(root) {
        for child in ast.children(node) {
            assert_eq!(ast.parent(child), Some(node));
        }
    }

    let NodeKind::FunctionDeclaration(FunctionDeclaration { function_expression, .. }) =
        ast.kind(root)
    else {
        panic!("expected a function declaration");
    };
    assert_eq!(ast.parent(*function_expression), Some(root));

    expect![[r#"
        FunctionDeclaration
          SimpleIdentifier@0..1 "f"
          FunctionExpression
            FormalParameterList
              SimpleFormalParameter
                SimpleIdentifier@2..3 "x"
            BlockFunctionBody
              Block
                ReturnStatement
                  SimpleIdentifier@14..15 "x"
    "#]]
    .assert_eq(&ast.debug_tree(root));
}

#[test]
fn ancestors_walk_to_the_root() {
    let mut f = AstFactory::new();
    let mut inner = None;
    let root = f.parenthesized(|f| {
        f.prefix("-", |f| {
            let id = f.identifier("x");
            inner = Some(id);
            id
        })
    });
    let ast = f.finish(root);
    let inner = inner.unwrap();

    let names: Vec<_> = ast.ancestors(inner).map(|node| ast.kind(node).name()).collect();
    assert_eq!(names, ["SimpleIdentifier", "PrefixExpression", "ParenthesizedExpression"]);
}

#[test]
fn preorder_skips_subtrees() {
    let mut f = AstFactory::new();
    let root = f.block(|f| {
        vec![
            f.expression_statement(|f| f.binary(|f| f.integer("1"), "+", |f| f.integer("2"))),
            f.return_statement(|f| Some(f.identifier("y"))),
        ]
    });
    let ast = f.finish(root);

    let mut entered = Vec::new();
    let mut preorder = ast.preorder(root);
    while let Some(event) = preorder.next() {
        if let WalkEvent::Enter(node) = event {
            let name = ast.kind(node).name();
            entered.push(name);
            if name == "BinaryExpression" {
                preorder.skip_subtree();
            }
        }
    }

    assert_eq!(
        entered,
        ["Block", "ExpressionStatement", "BinaryExpression", "ReturnStatement", "SimpleIdentifier"]
    );
}

#[test]
fn siblings_and_preorder_over_a_wide_block() {
    let mut f = AstFactory::new();
    let root = f.block(|f| {
        (0..200).map(|i| f.expression_statement(|f| f.integer(&i.to_string()))).collect()
    });
    let ast = f.finish(root);
    let statements = ast.children(root);

    let mut walked = Vec::new();
    let mut next = ast.first_child(root);
    while let Some(node) = next {
        walked.push(node);
        next = ast.next_sibling(node);
    }
    assert_eq!(walked, statements);
    assert_eq!(ast.next_sibling(root), None);

    let events: Vec<_> = ast.preorder(root).collect();
    assert_eq!(events.len(), 2 * (1 + 200 * 2));
    assert_eq!(events.first(), Some(&WalkEvent::Enter(root)));
    assert_eq!(events.last(), Some(&WalkEvent::Leave(root)));
    assert_eq!(events[1], WalkEvent::Enter(statements[0]));
    assert_eq!(events[3], WalkEvent::Leave(ast.children(statements[0])[0]));
    assert_eq!(events[4], WalkEvent::Leave(statements[0]));
    assert_eq!(events[5], WalkEvent::Enter(statements[1]));
}

#[test]
fn restrict_keeps_declared_slots() {
    let annotations = Annotations {
        element: Some(ElementId(1)),
        static_element: Some(ElementId(2)),
        propagated_element: Some(ElementId(3)),
        static_type: Some(TypeId(4)),
        propagated_type: Some(TypeId(5)),
        auxiliary: None,
    };

    let restricted = annotations.restrict(AnnotationSlots::STATIC_ELEMENT | AnnotationSlots::TYPES);

    assert_eq!(restricted.element, None);
    assert_eq!(restricted.static_element, Some(ElementId(2)));
    assert_eq!(restricted.propagated_element, None);
    assert_eq!(restricted.static_type, Some(TypeId(4)));
    assert_eq!(restricted.propagated_type, Some(TypeId(5)));
    assert!(Annotations::default().is_empty());
}

#[test]
fn identifiers_carry_elements_and_types() {
    let mut f = AstFactory::new();
    let name = f.identifier("x");
    let ty = f.type_name("int");
    let ast = f.into_ast();

    let slots = ast.kind(name).annotation_slots();
    assert!(slots.contains(AnnotationSlots::RESOLVED_ELEMENTS | AnnotationSlots::AUXILIARY));
    assert!(slots.contains(AnnotationSlots::TYPES));
    assert_eq!(ast.kind(ty).annotation_slots(), AnnotationSlots::STATIC_TYPE);
}
