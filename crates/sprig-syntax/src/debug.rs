use std::fmt::Write as _;

use sprig_span::Token;

use crate::cursor::WalkEvent;
use crate::nodes::NodeKind;
use crate::{Ast, NodeId};

impl NodeKind {
    /// The token printed next to the variant name in [`Ast::debug_tree`]: the text of
    /// identifiers and literals, or the operator of an operator expression.
    pub fn display_token(&self) -> Option<&Token> {
        Some(match self {
            Self::SimpleIdentifier(n) => &n.token,
            Self::BooleanLiteral(n) => &n.literal,
            Self::DoubleLiteral(n) => &n.literal,
            Self::IntegerLiteral(n) => &n.literal,
            Self::NullLiteral(n) => &n.literal,
            Self::SimpleStringLiteral(n) => &n.literal,
            Self::InterpolationString(n) => &n.contents,
            Self::ScriptTag(n) => &n.script_tag,
            Self::ThisExpression(n) => &n.keyword,
            Self::SuperExpression(n) => &n.keyword,
            Self::RethrowExpression(n) => &n.keyword,
            Self::AssignmentExpression(n) => &n.operator,
            Self::BinaryExpression(n) => &n.operator,
            Self::PostfixExpression(n) => &n.operator,
            Self::PrefixExpression(n) => &n.operator,
            _ => return None,
        })
    }
}

impl Ast {
    /// Renders the subtree under `node` as an indented outline, one node per line.
    pub fn debug_tree(&self, node: NodeId) -> String {
        let mut buf = String::new();
        let mut indent = 0;

        for event in self.preorder(node) {
            match event {
                WalkEvent::Enter(node) => {
                    let kind = self.kind(node);
                    let _ = write!(buf, "{:indent$}{}", "", kind.name(), indent = indent * 2);
                    if let Some(token) = kind.display_token() {
                        let _ = write!(buf, "@{:?} {:?}", token.range(), token.lexeme());
                    }
                    buf.push('\n');
                    indent += 1;
                }
                WalkEvent::Leave(_) => indent -= 1,
            }
        }

        buf
    }
}
