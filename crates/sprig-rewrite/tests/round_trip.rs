//! Clone, compare and substitute over a compilation unit that contains every variant.

use std::collections::BTreeSet;

use sprig_rewrite::{
    clone_tree, clone_with_substitution, equal, equal_ignoring_offsets, graft, replace,
};
use sprig_span::TokenMap;
use sprig_syntax::factory::AstFactory;
use sprig_syntax::nodes::*;
use sprig_syntax::{Ast, NodeId};

fn header() -> DeclarationHeader {
    DeclarationHeader::default()
}

fn directives(f: &mut AstFactory) -> Vec<NodeId> {
    let library_keyword = f.token("library");
    let components = vec![f.identifier("app"), f.identifier("core")];
    let name = f.alloc(LibraryIdentifier { components });
    let semicolon = f.token(";");
    let library = f.alloc(LibraryDirective { header: header(), library_keyword, name, semicolon });

    let keyword = f.token("import");
    let uri = f.string("'dart:math'");
    let deferred_keyword = Some(f.token("deferred"));
    let as_keyword = Some(f.token("as"));
    let prefix = Some(f.identifier("math"));
    let show = f.token("show");
    let shown_names = vec![f.identifier("max"), f.identifier("min")];
    let combinator = f.alloc(ShowCombinator { keyword: show, shown_names });
    let semicolon = f.token(";");
    let import = f.alloc(ImportDirective {
        header: header(),
        keyword,
        uri,
        deferred_keyword,
        as_keyword,
        prefix,
        combinators: vec![combinator],
        semicolon,
        uri_content: Some("dart:math".into()),
    });

    let keyword = f.token("export");
    let uri = f.string("'src/a.dart'");
    let hide = f.token("hide");
    let hidden_names = vec![f.identifier("secret")];
    let combinator = f.alloc(HideCombinator { keyword: hide, hidden_names });
    let semicolon = f.token(";");
    let export = f.alloc(ExportDirective {
        header: header(),
        keyword,
        uri,
        combinators: vec![combinator],
        semicolon,
        uri_content: Some("src/a.dart".into()),
    });

    let part_keyword = f.token("part");
    let uri = f.string("'b.dart'");
    let semicolon = f.token(";");
    let part = f.alloc(PartDirective {
        header: header(),
        part_keyword,
        uri,
        semicolon,
        uri_content: Some("b.dart".into()),
    });

    let part_keyword = f.token("part");
    let of_keyword = f.token("of");
    let components = vec![f.identifier("app")];
    let library_name = f.alloc(LibraryIdentifier { components });
    let semicolon = f.token(";");
    let part_of = f.alloc(PartOfDirective {
        header: header(),
        part_keyword,
        of_keyword,
        library_name,
        semicolon,
    });

    vec![library, import, export, part, part_of]
}

fn class(f: &mut AstFactory) -> NodeId {
    let comment_token = f.token("/// See [Base].");
    let identifier = f.identifier("Base");
    let reference = f.alloc(CommentReference { new_keyword: None, identifier });
    let documentation_comment = Some(f.alloc(Comment {
        kind: CommentKind::Documentation,
        tokens: vec![comment_token],
        references: vec![reference],
    }));
    let at_sign = f.token("@");
    let name = f.identifier("deprecated");
    let annotation = f.alloc(Annotation {
        at_sign,
        name,
        period: None,
        constructor_name: None,
        arguments: None,
    });
    let class_header = DeclarationHeader { documentation_comment, metadata: vec![annotation] };

    let abstract_keyword = Some(f.token("abstract"));
    let class_keyword = f.token("class");
    let class_name = f.identifier("A");
    let left_bracket = f.token("<");
    let t = f.identifier("T");
    let extends = Some(f.token("extends"));
    let bound = Some(f.type_name("Object"));
    let parameter = f.alloc(TypeParameter { header: header(), name: t, keyword: extends, bound });
    let right_bracket = f.token(">");
    let type_parameters = Some(f.alloc(TypeParameterList {
        left_bracket,
        type_parameters: vec![parameter],
        right_bracket,
    }));
    let keyword = f.token("extends");
    let superclass = f.type_name("Base");
    let extends_clause = Some(f.alloc(ExtendsClause { keyword, superclass }));
    let with_keyword = f.token("with");
    let mixin_types = vec![f.type_name("Mixin")];
    let with_clause = Some(f.alloc(WithClause { with_keyword, mixin_types }));
    let keyword = f.token("implements");
    let interfaces = vec![f.type_name("I"), f.type_name("J")];
    let implements_clause = Some(f.alloc(ImplementsClause { keyword, interfaces }));
    let keyword = f.token("native");
    let name = Some(f.string("'AImpl'"));
    let native_clause = Some(f.alloc(NativeClause { keyword, name }));
    let left_brace = f.token("{");

    let static_keyword = Some(f.token("static"));
    let fields = f.variable_list("var", |f| vec![f.variable("count", |f| Some(f.integer("0")))]);
    let semicolon = f.token(";");
    let field = f.alloc(FieldDeclaration { header: header(), static_keyword, fields, semicolon });

    let members = vec![field, constructor(f), redirecting_constructor(f), method(f)];
    let right_brace = f.token("}");

    f.alloc(ClassDeclaration {
        header: class_header,
        abstract_keyword,
        class_keyword,
        name: class_name,
        type_parameters,
        extends_clause,
        with_clause,
        implements_clause,
        native_clause,
        left_bracket: left_brace,
        members,
        right_bracket: right_brace,
    })
}

fn constructor(f: &mut AstFactory) -> NodeId {
    let const_keyword = Some(f.token("const"));
    let return_type = f.identifier("A");
    let left_parenthesis = f.token("(");
    let this_keyword = f.token("this");
    let period = f.token(".");
    let identifier = f.identifier("x");
    let field_parameter = f.alloc(FieldFormalParameter {
        header: header(),
        keyword: None,
        ty: None,
        this_keyword,
        period,
        identifier,
        parameters: None,
    });
    let left_delimiter = Some(f.token("["));
    let optional = f.optional_parameter("y", |f| f.integer("1"));
    let right_delimiter = Some(f.token("]"));
    let right_parenthesis = f.token(")");
    let parameters = f.alloc(FormalParameterList {
        left_parenthesis,
        parameters: vec![field_parameter, optional],
        left_delimiter,
        right_delimiter,
        right_parenthesis,
    });
    let separator = Some(f.token(":"));
    let field_name = f.identifier("z");
    let equals = f.token("=");
    let expression = f.this();
    let initializer = f.alloc(ConstructorFieldInitializer {
        this_keyword: None,
        period: None,
        field_name,
        equals,
        expression,
    });
    let keyword = f.token("super");
    let argument_list = f.argument_list(|_| Vec::new());
    let super_call = f.alloc(SuperConstructorInvocation {
        keyword,
        period: None,
        constructor_name: None,
        argument_list,
    });
    let semicolon = f.token(";");
    let body = Some(f.alloc(EmptyFunctionBody { semicolon }));

    f.alloc(ConstructorDeclaration {
        header: header(),
        external_keyword: None,
        const_keyword,
        factory_keyword: None,
        return_type,
        period: None,
        name: None,
        parameters,
        separator,
        initializers: vec![initializer, super_call],
        redirected_constructor: None,
        body,
    })
}

fn redirecting_constructor(f: &mut AstFactory) -> NodeId {
    let return_type = f.identifier("A");
    let period = Some(f.token("."));
    let name = Some(f.identifier("other"));
    let parameters = f.formal_parameters(|_| Vec::new());
    let separator = Some(f.token(":"));
    let keyword = f.token("this");
    let invocation_period = Some(f.token("."));
    let constructor_name = Some(f.identifier("named"));
    let argument_list = f.argument_list(|f| vec![f.integer("2")]);
    let redirect = f.alloc(RedirectingConstructorInvocation {
        keyword,
        period: invocation_period,
        constructor_name,
        argument_list,
    });
    let native_keyword = f.token("native");
    let string_literal = Some(f.string("'A_other'"));
    let semicolon = f.token(";");
    let body = Some(f.alloc(NativeFunctionBody { native_keyword, string_literal, semicolon }));

    f.alloc(ConstructorDeclaration {
        header: header(),
        external_keyword: None,
        const_keyword: None,
        factory_keyword: None,
        return_type,
        period,
        name,
        parameters,
        separator,
        initializers: vec![redirect],
        redirected_constructor: None,
        body,
    })
}

fn method(f: &mut AstFactory) -> NodeId {
    f.method_declaration(
        "run",
        |f| vec![f.typed_parameter("List", "items")],
        |f| {
            f.block_body(|f| {
                vec![
                    try_statement(f),
                    for_statement(f),
                    f.for_each_statement(
                        "final",
                        "item",
                        |f| f.identifier("items"),
                        |f| {
                            f.expression_statement(|f| {
                                f.method_call(|f| f.identifier("item"), "go", |_| Vec::new())
                            })
                        },
                    ),
                    f.switch_statement(
                        |f| f.identifier("mode"),
                        |f| {
                            vec![
                                f.switch_case(|f| f.integer("1"), |f| vec![break_statement(f)]),
                                f.switch_default(|f| vec![f.return_statement(|_| None)]),
                            ]
                        },
                    ),
                    f.while_statement(|f| f.boolean(false), |f| f.block(|_| Vec::new())),
                    f.if_statement(
                        |f| f.prefix("!", |f| f.identifier("done")),
                        |f| {
                            let semicolon = f.token(";");
                            f.alloc(EmptyStatement { semicolon })
                        },
                        |f| Some(f.local_variable("var", "k", |f| Some(f.prefix("-", super_hash)))),
                    ),
                    do_statement(f),
                    f.expression_statement(cascade),
                    f.expression_statement(|f| {
                        f.assignment(
                            |f| f.index(|f| f.identifier("m"), |f| f.string("'k'")),
                            "=",
                            map_literal,
                        )
                    }),
                    f.expression_statement(|f| {
                        f.conditional(is_expression, as_expression, |f| f.null())
                    }),
                    f.expression_statement(interpolation),
                    f.local_function(
                        "inner",
                        |f| vec![f.parameter("v")],
                        |f| f.expression_body(|f| f.identifier("v")),
                    ),
                    assert_statement(f),
                    f.return_statement(|f| Some(instance_creation(f))),
                ]
            })
        },
    )
}

fn for_statement(f: &mut AstFactory) -> NodeId {
    f.for_statement(
        |f| Some(f.variable_list("var", |f| vec![f.variable("i", |f| Some(f.integer("0")))])),
        |f| Some(f.binary(|f| f.identifier("i"), "<", |f| f.integer("10"))),
        |f| vec![f.postfix(|f| f.identifier("i"), "++")],
        |f| f.block(|f| vec![continue_statement(f)]),
    )
}

fn try_statement(f: &mut AstFactory) -> NodeId {
    let try_keyword = f.token("try");
    let body = f.block(|f| {
        vec![f.expression_statement(|f| {
            let keyword = f.token("throw");
            let expression = f.string("'boom'");
            f.alloc(ThrowExpression { keyword, expression })
        })]
    });
    let on_keyword = Some(f.token("on"));
    let exception_type = Some(f.type_name("StateError"));
    let catch_keyword = Some(f.token("catch"));
    let left_parenthesis = Some(f.token("("));
    let exception_parameter = Some(f.identifier("e"));
    let comma = Some(f.token(","));
    let stack_trace_parameter = Some(f.identifier("s"));
    let right_parenthesis = Some(f.token(")"));
    let catch_body = f.block(|f| {
        vec![f.expression_statement(|f| {
            let keyword = f.token("rethrow");
            f.alloc(RethrowExpression { keyword })
        })]
    });
    let catch_clause = f.alloc(CatchClause {
        on_keyword,
        exception_type,
        catch_keyword,
        left_parenthesis,
        exception_parameter,
        comma,
        stack_trace_parameter,
        right_parenthesis,
        body: catch_body,
    });
    let catch_all = f.catch_clause("error", None, |f| f.block(|_| Vec::new()));
    let finally_keyword = Some(f.token("finally"));
    let finally_block = Some(f.block(|f| {
        vec![f.expression_statement(|f| {
            let await_keyword = f.token("await");
            let expression = f.call("close", |_| Vec::new());
            f.alloc(AwaitExpression { await_keyword, expression })
        })]
    }));
    f.alloc(TryStatement {
        try_keyword,
        body,
        catch_clauses: vec![catch_clause, catch_all],
        finally_keyword,
        finally_block,
    })
}

fn continue_statement(f: &mut AstFactory) -> NodeId {
    let keyword = f.token("continue");
    let label = Some(f.identifier("outer"));
    let semicolon = f.token(";");
    f.alloc(ContinueStatement { keyword, label, semicolon })
}

fn break_statement(f: &mut AstFactory) -> NodeId {
    let label = f.identifier("done");
    let colon = f.token(":");
    let label = f.alloc(Label { label, colon });
    let keyword = f.token("break");
    let semicolon = f.token(";");
    let statement = f.alloc(BreakStatement { keyword, label: None, semicolon });
    f.alloc(LabeledStatement { labels: vec![label], statement })
}

fn do_statement(f: &mut AstFactory) -> NodeId {
    let do_keyword = f.token("do");
    let body = f.block(|f| {
        let yield_keyword = f.token("yield");
        let star = Some(f.token("*"));
        let expression = f.identifier("stream");
        let semicolon = f.token(";");
        vec![f.alloc(YieldStatement { yield_keyword, star, expression, semicolon })]
    });
    let while_keyword = f.token("while");
    let left_parenthesis = f.token("(");
    let condition = f.boolean(true);
    let right_parenthesis = f.token(")");
    let semicolon = f.token(";");
    f.alloc(DoStatement {
        do_keyword,
        body,
        while_keyword,
        left_parenthesis,
        condition,
        right_parenthesis,
        semicolon,
    })
}

fn super_hash(f: &mut AstFactory) -> NodeId {
    let keyword = f.token("super");
    let target = Some(f.alloc(SuperExpression { keyword }));
    let operator = f.token(".");
    let property_name = f.identifier("hashCode");
    f.alloc(PropertyAccess { target, operator, property_name })
}

fn cascade(f: &mut AstFactory) -> NodeId {
    let target = f.identifier("buffer");
    let operator = f.token("..");
    let property_name = f.identifier("length");
    let section = f.alloc(PropertyAccess { target: None, operator, property_name });
    let period = Some(f.token(".."));
    let method_name = f.identifier("clear");
    let argument_list = f.argument_list(|_| Vec::new());
    let call = f.alloc(MethodInvocation { target: None, period, method_name, argument_list });
    f.alloc(CascadeExpression { target, cascade_sections: vec![section, call] })
}

fn map_literal(f: &mut AstFactory) -> NodeId {
    let const_keyword = Some(f.token("const"));
    let left_bracket = f.token("<");
    let arguments = vec![f.type_name("String"), f.type_name("int")];
    let right_bracket = f.token(">");
    let type_arguments = Some(f.alloc(TypeArgumentList { left_bracket, arguments, right_bracket }));
    let left_bracket = f.token("{");
    let key = f.string("'one'");
    let separator = f.token(":");
    let value = f.double("1.0");
    let entry = f.alloc(MapLiteralEntry { key, separator, value });
    let right_bracket = f.token("}");
    f.alloc(MapLiteral {
        const_keyword,
        type_arguments,
        left_bracket,
        entries: vec![entry],
        right_bracket,
    })
}

fn is_expression(f: &mut AstFactory) -> NodeId {
    let expression = f.identifier("value");
    let is_operator = f.token("is");
    let not_operator = Some(f.token("!"));
    let ty = f.type_name("String");
    f.alloc(IsExpression { expression, is_operator, not_operator, ty })
}

fn as_expression(f: &mut AstFactory) -> NodeId {
    let expression = f.identifier("value");
    let as_operator = f.token("as");
    let ty = f.type_name("num");
    f.alloc(AsExpression { expression, as_operator, ty })
}

fn interpolation(f: &mut AstFactory) -> NodeId {
    let head = f.token("'a");
    let head = f.alloc(InterpolationString { contents: head, value: "a".into() });
    let left_bracket = f.token("${");
    let expression = f.prefixed_identifier("math", "pi");
    let right_bracket = Some(f.token("}"));
    let inner = f.alloc(InterpolationExpression { left_bracket, expression, right_bracket });
    let tail = f.token("b'");
    let tail = f.alloc(InterpolationString { contents: tail, value: "b".into() });
    let interpolated = f.alloc(StringInterpolation { elements: vec![head, inner, tail] });
    let plain = f.string("'c'");
    f.alloc(AdjacentStrings { strings: vec![interpolated, plain] })
}

fn assert_statement(f: &mut AstFactory) -> NodeId {
    let keyword = f.token("assert");
    let left_parenthesis = f.token("(");
    let function = f.parenthesized(|f| {
        f.function_expression(
            |f| vec![f.parameter("q")],
            |f| f.expression_body(|f| f.boolean(true)),
        )
    });
    let argument_list = f.argument_list(|f| {
        let name = f.identifier("flag");
        let colon = f.token(":");
        let name = f.alloc(Label { label: name, colon });
        let expression = f.symbol(&["on"]);
        vec![f.alloc(NamedExpression { name, expression })]
    });
    let condition = f.alloc(FunctionExpressionInvocation { function, argument_list });
    let right_parenthesis = f.token(")");
    let semicolon = f.token(";");
    f.alloc(AssertStatement { keyword, left_parenthesis, condition, right_parenthesis, semicolon })
}

fn instance_creation(f: &mut AstFactory) -> NodeId {
    let keyword = f.token("new");
    let ty = f.type_name("A");
    let period = Some(f.token("."));
    let name = Some(f.identifier("named"));
    let constructor_name = f.alloc(ConstructorName { ty, period, name });
    let argument_list = f.argument_list(|f| vec![f.list_literal(|f| vec![f.integer("1")])]);
    f.alloc(InstanceCreationExpression { keyword, constructor_name, argument_list })
}

fn declarations(f: &mut AstFactory) -> Vec<NodeId> {
    let keyword = f.token("enum");
    let name = f.identifier("Color");
    let left_bracket = f.token("{");
    let constants = vec![
        {
            let name = f.identifier("red");
            f.alloc(EnumConstantDeclaration { header: header(), name })
        },
        {
            let name = f.identifier("green");
            f.alloc(EnumConstantDeclaration { header: header(), name })
        },
    ];
    let right_bracket = f.token("}");
    let enumeration = f.alloc(EnumDeclaration {
        header: header(),
        keyword,
        name,
        left_bracket,
        constants,
        right_bracket,
    });

    let keyword = f.token("typedef");
    let return_type = Some(f.type_name("void"));
    let name = f.identifier("Callback");
    let parameters = f.formal_parameters(|f| {
        let return_type = Some(f.type_name("int"));
        let identifier = f.identifier("compare");
        let parameters = f.formal_parameters(|_| Vec::new());
        vec![f.alloc(FunctionTypedFormalParameter {
            header: header(),
            return_type,
            identifier,
            parameters,
        })]
    });
    let semicolon = f.token(";");
    let typedef = f.alloc(FunctionTypeAlias {
        header: header(),
        keyword,
        return_type,
        name,
        type_parameters: None,
        parameters,
        semicolon,
    });

    let keyword = f.token("class");
    let name = f.identifier("M");
    let equals = f.token("=");
    let superclass = f.type_name("Object");
    let with_keyword = f.token("with");
    let mixin_types = vec![f.type_name("Mixin")];
    let with_clause = Some(f.alloc(WithClause { with_keyword, mixin_types }));
    let semicolon = f.token(";");
    let alias = f.alloc(ClassTypeAlias {
        header: header(),
        keyword,
        name,
        type_parameters: None,
        equals,
        abstract_keyword: None,
        superclass,
        with_clause,
        implements_clause: None,
        semicolon,
    });

    let variable = f.top_level_variable("final", |f| {
        vec![f.variable("answer", |f| Some(f.integer("42"))), f.variable("unset", |_| None)]
    });
    let main = f.function_declaration(Some("void"), "main", |_| Vec::new(), |f| {
        f.block_body(|f| vec![f.expression_statement(|f| f.call("run", |_| Vec::new()))])
    });

    vec![class(f), enumeration, typedef, alias, variable, main]
}

fn unit() -> (Ast, NodeId, TokenMap) {
    let mut f = AstFactory::new();
    let begin_token = f.token("");
    let script = f.token("#!/usr/bin/env dart");
    let script_tag = Some(f.alloc(ScriptTag { script_tag: script }));
    let directives = directives(&mut f);
    let declarations = declarations(&mut f);
    let end_token = f.token("");
    let root = f.alloc(CompilationUnit {
        begin_token,
        script_tag,
        directives,
        declarations,
        end_token,
        line_info: Some(LineInfo::new("#!/usr/bin/env dart\n")),
    });
    let token_map = TokenMap::identity(f.tokens());
    (f.finish(root), root, token_map)
}

#[test]
fn unit_contains_every_variant() {
    let (ast, root, _) = unit();

    let present: BTreeSet<&str> = ast.descendants(root).map(|node| ast.kind(node).name()).collect();
    let missing: Vec<_> = NodeKind::NAMES.iter().filter(|name| !present.contains(*name)).collect();

    assert!(missing.is_empty(), "missing variants: {missing:?}");
}

#[test]
fn every_variant_survives_a_clone() {
    let (ast, root, _) = unit();

    let copy = clone_tree(&ast, root);
    let copy_root = copy.root().unwrap();

    assert!(equal(&ast, Some(root), &copy, Some(copy_root)));
    assert_eq!(ast.debug_tree(root), copy.debug_tree(copy_root));
    assert_eq!(copy.len(), ast.descendants(root).count());

    let (NodeKind::CompilationUnit(original), NodeKind::CompilationUnit(cloned)) =
        (ast.kind(root), copy.kind(copy_root))
    else {
        panic!("expected compilation units");
    };
    assert!(original.line_info.as_ref().unwrap().ptr_eq(cloned.line_info.as_ref().unwrap()));
}

#[test]
fn independently_built_units_are_equal() {
    let (first, a, _) = unit();
    let (second, b, _) = unit();

    assert!(equal(&first, Some(a), &second, Some(b)));
}

#[test]
fn every_node_can_be_substituted() {
    let (ast, root, token_map) = unit();
    let mut r = AstFactory::new();
    let replacement = r.identifier("replacement");
    let new_tree = r.into_ast();

    for old in ast.descendants(root).skip(1) {
        let result = clone_with_substitution(&ast, root, old, &new_tree, replacement, &token_map);
        assert!(result.substituted(), "{} was not reached", ast.kind(old).name());

        let mut mutated = ast.clone();
        let new = graft(&mut mutated, &new_tree, replacement);
        replace(&mut mutated, old, new).unwrap();

        assert!(
            equal(&result.tree, Some(result.root), &mutated, Some(root)),
            "replacing {} disagrees with substitution",
            ast.kind(old).name()
        );
    }
}

#[test]
fn shifted_unit_only_matches_by_lexeme() {
    let (first, a, _) = unit();
    let mut f = AstFactory::new();
    f.token("padding");
    let begin_token = f.token("");
    let script = f.token("#!/usr/bin/env dart");
    let script_tag = Some(f.alloc(ScriptTag { script_tag: script }));
    let directives = directives(&mut f);
    let declarations = declarations(&mut f);
    let end_token = f.token("");
    let b = f.alloc(CompilationUnit {
        begin_token,
        script_tag,
        directives,
        declarations,
        end_token,
        line_info: None,
    });
    let second = f.finish(b);

    assert!(!equal(&first, Some(a), &second, Some(b)));
    assert!(equal_ignoring_offsets(&first, Some(a), &second, Some(b)));
}
