use expect_test::{Expect, expect};
use sprig_span::TextSize;
use sprig_syntax::factory::AstFactory;
use sprig_syntax::nodes::NodeKind;
use sprig_syntax::{Ast, NodeId};

use crate::{LocalScope, find_scope};

/// Offset of the `|` marker in a test source.
fn caret(text: &str) -> Option<TextSize> {
    text.find('|').map(|offset| TextSize::new(offset as u32))
}

fn check(ast: &Ast, scope: &LocalScope, expect: Expect) {
    let actual: String = scope
        .iter()
        .map(|(name, binding)| {
            let NodeKind::SimpleIdentifier(identifier) = ast.kind(binding) else {
                panic!("{name} is bound to {}", ast.kind(binding).name());
            };
            format!("{name}@{:?}\n", identifier.token.range())
        })
        .collect();
    expect.assert_eq(&actual);
}

fn first(ast: &Ast, root: NodeId, kind: &str) -> NodeId {
    ast.descendants(root).find(|&node| ast.kind(node).name() == kind).unwrap()
}

#[test]
fn inner_declaration_shadows_outer() {
    let text = "f() { var a = 1; { var a = 2; return |; } }";
    let mut f = AstFactory::with_source(text);
    let mut start = None;
    let root = f.function_declaration(None, "f", |_| Vec::new(), |f| {
        f.block_body(|f| {
            vec![
                f.local_variable("var", "a", |f| Some(f.integer("1"))),
                f.block(|f| {
                    let inner = f.local_variable("var", "a", |f| Some(f.integer("2")));
                    let statement = f.return_statement(|_| None);
                    start = Some(statement);
                    vec![inner, statement]
                }),
            ]
        })
    });
    let ast = f.finish(root);

    let scope = find_scope(&ast, start.unwrap(), caret(text));

    check(
        &ast,
        &scope,
        expect![[r#"
            a@23..24
        "#]],
    );
    assert_eq!(scope.enclosing_declaration(), Some(root));
}

#[test]
fn later_statements_are_not_visible() {
    let text = "f() { var a = 1; g(|); var b = 2; }";
    let mut f = AstFactory::with_source(text);
    let mut start = None;
    let root = f.function_declaration(None, "f", |_| Vec::new(), |f| {
        f.block_body(|f| {
            let a = f.local_variable("var", "a", |f| Some(f.integer("1")));
            let call = f.expression_statement(|f| f.call("g", |_| Vec::new()));
            start = Some(call);
            let b = f.local_variable("var", "b", |f| Some(f.integer("2")));
            vec![a, call, b]
        })
    });
    let ast = f.finish(root);

    let scope = find_scope(&ast, start.unwrap(), None);

    assert!(scope.contains("a"));
    assert!(!scope.contains("b"));
}

fn two_locals(text: &str) -> (Ast, NodeId) {
    let mut f = AstFactory::with_source(text);
    let root = f.function_declaration(None, "f", |_| Vec::new(), |f| {
        f.block_body(|f| {
            vec![
                f.local_variable("var", "a", |f| Some(f.integer("1"))),
                f.local_variable("var", "b", |f| Some(f.integer("2"))),
            ]
        })
    });
    (f.finish(root), root)
}

#[test]
fn position_excludes_declarations_after_it() {
    let text = "f() { var a = 1; | var b = 2; }";
    let (ast, root) = two_locals(text);
    let block = first(&ast, root, "Block");

    let scope = find_scope(&ast, block, caret(text));

    check(
        &ast,
        &scope,
        expect![[r#"
            a@10..11
        "#]],
    );
}

#[test]
fn unbounded_position_admits_everything() {
    let text = "f() { var a = 1; | var b = 2; }";
    let (ast, root) = two_locals(text);
    let block = first(&ast, root, "Block");

    let scope = find_scope(&ast, block, None);

    check(
        &ast,
        &scope,
        expect![[r#"
            a@10..11
            b@23..24
        "#]],
    );
}

#[test]
fn parameters_are_visible_in_the_body() {
    let text = "class A { m(x, y = 1) { var z; return |; } }";
    let mut f = AstFactory::with_source(text);
    let mut start = None;
    let mut method = None;
    let root = f.class_declaration("A", |f| {
        let declaration = f.method_declaration(
            "m",
            |f| vec![f.parameter("x"), f.optional_parameter("y", |f| f.integer("1"))],
            |f| {
                f.block_body(|f| {
                    let z = f.local_variable("var", "z", |_| None);
                    let statement = f.return_statement(|_| None);
                    start = Some(statement);
                    vec![z, statement]
                })
            },
        );
        method = Some(declaration);
        vec![declaration]
    });
    let ast = f.finish(root);

    let scope = find_scope(&ast, start.unwrap(), caret(text));

    check(
        &ast,
        &scope,
        expect![[r#"
            z@28..29
            x@12..13
            y@15..16
        "#]],
    );
    assert_eq!(scope.enclosing_declaration(), method);
}

#[test]
fn parameter_does_not_see_its_siblings() {
    let text = "f(x, y = x) {}";
    let mut f = AstFactory::with_source(text);
    let mut start = None;
    let root = f.function_declaration(
        None,
        "f",
        |f| {
            let x = f.parameter("x");
            let y = f.optional_parameter("y", |f| {
                let default = f.identifier("x");
                start = Some(default);
                default
            });
            vec![x, y]
        },
        |f| f.block_body(|_| Vec::new()),
    );
    let ast = f.finish(root);

    let scope = find_scope(&ast, start.unwrap(), None);

    assert!(scope.is_empty());
    assert_eq!(scope.enclosing_declaration(), Some(root));
}

#[test]
fn catch_clause_binds_exception_and_stack_trace() {
    let text = "f() { try {} catch (e, s) { | } }";
    let mut f = AstFactory::with_source(text);
    let mut start = None;
    let mut try_body = None;
    let root = f.function_declaration(None, "f", |_| Vec::new(), |f| {
        f.block_body(|f| {
            vec![f.try_statement(
                |f| {
                    let body = f.block(|_| Vec::new());
                    try_body = Some(body);
                    body
                },
                |f| {
                    vec![f.catch_clause("e", Some("s"), |f| {
                        let body = f.block(|_| Vec::new());
                        start = Some(body);
                        body
                    })]
                },
            )]
        })
    });
    let ast = f.finish(root);

    let scope = find_scope(&ast, start.unwrap(), caret(text));
    check(
        &ast,
        &scope,
        expect![[r#"
            e@20..21
            s@23..24
        "#]],
    );

    assert!(find_scope(&ast, try_body.unwrap(), None).is_empty());
}

#[test]
fn for_loop_variables() {
    let text = "f() { for (var i = 0; i < n; i++) { | } }";
    let mut f = AstFactory::with_source(text);
    let mut body = None;
    let mut initializer = None;
    let root = f.function_declaration(None, "f", |_| Vec::new(), |f| {
        f.block_body(|f| {
            vec![f.for_statement(
                |f| {
                    Some(f.variable_list("var", |f| {
                        vec![f.variable("i", |f| {
                            let zero = f.integer("0");
                            initializer = Some(zero);
                            Some(zero)
                        })]
                    }))
                },
                |f| Some(f.binary(|f| f.identifier("i"), "<", |f| f.identifier("n"))),
                |f| vec![f.postfix(|f| f.identifier("i"), "++")],
                |f| {
                    let block = f.block(|_| Vec::new());
                    body = Some(block);
                    block
                },
            )]
        })
    });
    let ast = f.finish(root);

    let scope = find_scope(&ast, body.unwrap(), caret(text));
    check(
        &ast,
        &scope,
        expect![[r#"
            i@15..16
        "#]],
    );

    assert!(!find_scope(&ast, initializer.unwrap(), None).contains("i"));
}

#[test]
fn for_each_binds_loop_variable() {
    let text = "f(items) { for (final item in items) { | } }";
    let mut f = AstFactory::with_source(text);
    let mut body = None;
    let root = f.function_declaration(
        None,
        "f",
        |f| vec![f.parameter("items")],
        |f| {
            f.block_body(|f| {
                vec![f.for_each_statement(
                    "final",
                    "item",
                    |f| f.identifier("items"),
                    |f| {
                        let block = f.block(|_| Vec::new());
                        body = Some(block);
                        block
                    },
                )]
            })
        },
    );
    let ast = f.finish(root);

    let scope = find_scope(&ast, body.unwrap(), caret(text));

    check(
        &ast,
        &scope,
        expect![[r#"
            item@22..26
            items@2..7
        "#]],
    );
}

fn local_function(text: &str) -> (Ast, NodeId, NodeId) {
    let mut f = AstFactory::with_source(text);
    let mut start = None;
    let root = f.function_declaration(None, "f", |_| Vec::new(), |f| {
        f.block_body(|f| {
            vec![
                f.local_variable("var", "a", |f| Some(f.integer("1"))),
                f.local_function(
                    "g",
                    |f| vec![f.parameter("p")],
                    |f| {
                        f.block_body(|f| {
                            let statement = f.return_statement(|_| None);
                            start = Some(statement);
                            vec![statement]
                        })
                    },
                ),
                f.local_variable("var", "b", |_| None),
            ]
        })
    });
    let start = start.unwrap();
    (f.finish(root), root, start)
}

#[test]
fn local_function_sees_itself_and_enclosing_locals() {
    let text = "f() { var a = 1; g(p) { return |; } var b; }";
    let (ast, root, start) = local_function(text);

    let scope = find_scope(&ast, start, caret(text));

    check(
        &ast,
        &scope,
        expect![[r#"
            p@19..20
            g@17..18
            a@10..11
        "#]],
    );
    assert_eq!(scope.enclosing_declaration(), Some(root));
}

#[test]
fn local_function_name_is_a_block_binding() {
    let text = "f() { var a = 1; g(p) { return |; } var b; }";
    let (ast, root, _) = local_function(text);
    let block = first(&ast, root, "Block");

    let scope = find_scope(&ast, block, None);

    check(
        &ast,
        &scope,
        expect![[r#"
            a@10..11
            g@17..18
            b@40..41
        "#]],
    );
}

#[test]
fn switch_members_bind_their_statements() {
    let text = "f(v) { switch (v) { case 1: var a = 1; return |; default: var b; } }";
    let mut f = AstFactory::with_source(text);
    let mut start = None;
    let root = f.function_declaration(
        None,
        "f",
        |f| vec![f.parameter("v")],
        |f| {
            f.block_body(|f| {
                vec![f.switch_statement(
                    |f| f.identifier("v"),
                    |f| {
                        vec![
                            f.switch_case(
                                |f| f.integer("1"),
                                |f| {
                                    let a = f.local_variable("var", "a", |f| Some(f.integer("1")));
                                    let statement = f.return_statement(|_| None);
                                    start = Some(statement);
                                    vec![a, statement]
                                },
                            ),
                            f.switch_default(|f| vec![f.local_variable("var", "b", |_| None)]),
                        ]
                    },
                )]
            })
        },
    );
    let ast = f.finish(root);

    let scope = find_scope(&ast, start.unwrap(), caret(text));

    check(
        &ast,
        &scope,
        expect![[r#"
            a@32..33
            v@2..3
        "#]],
    );
}

#[test]
fn case_expression_does_not_see_its_statements() {
    let text = "f(v) { switch (v) { case c: var a = 1; } }";
    let mut f = AstFactory::with_source(text);
    let mut start = None;
    let root = f.function_declaration(
        None,
        "f",
        |f| vec![f.parameter("v")],
        |f| {
            f.block_body(|f| {
                vec![f.switch_statement(
                    |f| f.identifier("v"),
                    |f| {
                        vec![f.switch_case(
                            |f| {
                                let c = f.identifier("c");
                                start = Some(c);
                                c
                            },
                            |f| vec![f.local_variable("var", "a", |f| Some(f.integer("1")))],
                        )]
                    },
                )]
            })
        },
    );
    let ast = f.finish(root);

    let scope = find_scope(&ast, start.unwrap(), None);

    assert!(!scope.contains("a"));
    check(
        &ast,
        &scope,
        expect![[r#"
            v@2..3
        "#]],
    );
}

#[test]
fn field_and_top_level_initializers_stop_at_their_declaration() {
    let mut f = AstFactory::with_source("class A { var x = null; }");
    let mut initializer = None;
    let mut field = None;
    let root = f.class_declaration("A", |f| {
        let declaration = f.field_declaration("var", |f| {
            vec![f.variable("x", |f| {
                let null = f.null();
                initializer = Some(null);
                Some(null)
            })]
        });
        field = Some(declaration);
        vec![declaration]
    });
    let ast = f.finish(root);

    let scope = find_scope(&ast, initializer.unwrap(), None);
    assert!(scope.is_empty());
    assert_eq!(scope.enclosing_declaration(), field);

    let mut f = AstFactory::with_source("var top = 1;");
    let root = f.top_level_variable("var", |f| vec![f.variable("top", |f| Some(f.integer("1")))]);
    let ast = f.finish(root);
    let literal = first(&ast, root, "IntegerLiteral");

    let scope = find_scope(&ast, literal, None);
    assert!(scope.is_empty());
    assert_eq!(scope.enclosing_declaration(), Some(root));
}

#[test]
fn detached_node_has_no_enclosing_declaration() {
    let mut f = AstFactory::new();
    let block = f.block(|f| vec![f.local_variable("var", "a", |_| None)]);
    let ast = f.finish(block);

    let scope = find_scope(&ast, block, None);

    assert_eq!(scope.names().collect::<Vec<_>>(), ["a"]);
    assert_eq!(scope.len(), 1);
    assert_eq!(scope.enclosing_declaration(), None);
}
