//! Generated inputs shared by the benchmarks.

use sprig_span::TokenMap;
use sprig_syntax::factory::AstFactory;
use sprig_syntax::{Ast, NodeId};

pub struct Fixture {
    pub ast: Ast,
    pub root: NodeId,
    pub token_map: TokenMap,
}

/// A compilation unit of `functions` functions, each with locals, a loop and a branch.
pub fn compilation_unit(functions: usize) -> Fixture {
    let mut f = AstFactory::new();
    let root = f.compilation_unit(|f| (0..functions).map(|index| function(f, index)).collect());
    let token_map = TokenMap::identity(f.tokens());
    Fixture { ast: f.finish(root), root, token_map }
}

fn function(f: &mut AstFactory, index: usize) -> NodeId {
    let name = format!("f{index}");
    f.function_declaration(
        Some("int"),
        &name,
        |f| vec![f.typed_parameter("int", "a"), f.typed_parameter("int", "b")],
        |f| {
            f.block_body(|f| {
                vec![
                    f.local_variable("var", "sum", |f| {
                        Some(f.binary(|f| f.identifier("a"), "+", |f| f.identifier("b")))
                    }),
                    f.for_statement(
                        |f| {
                            Some(f.variable_list("var", |f| {
                                vec![f.variable("i", |f| Some(f.integer("0")))]
                            }))
                        },
                        |f| Some(f.binary(|f| f.identifier("i"), "<", |f| f.identifier("b"))),
                        |f| vec![f.postfix(|f| f.identifier("i"), "++")],
                        |f| {
                            f.block(|f| {
                                vec![f.expression_statement(|f| {
                                    f.assignment(
                                        |f| f.identifier("sum"),
                                        "+=",
                                        |f| f.call("g", |f| vec![f.identifier("i")]),
                                    )
                                })]
                            })
                        },
                    ),
                    f.if_statement(
                        |f| f.binary(|f| f.identifier("sum"), ">", |f| f.integer("100")),
                        |f| f.return_statement(|f| Some(f.integer("100"))),
                        |_| None,
                    ),
                    f.return_statement(|f| Some(f.identifier("sum"))),
                ]
            })
        },
    )
}
