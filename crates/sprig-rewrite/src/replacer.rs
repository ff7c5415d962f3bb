use sprig_syntax::nodes::*;
use sprig_syntax::{Ast, NodeId};

use crate::errors::ReplaceError;

/// In-place substitution of one child of a node.
///
/// Each variant checks its child fields in order for the old node; variants that share
/// field shapes finish with a shared fallback (`annotated`, `normal_parameter`,
/// `uri_directive`, `namespace_directive`, `switch_member`).
#[derive(Debug, Clone, Copy)]
pub struct NodeReplacer {
    old: NodeId,
    new: NodeId,
}

impl NodeReplacer {
    /// Puts `new` where `old` is in `old`'s parent.
    ///
    /// Every precondition is checked before the tree is touched, so an error leaves it as
    /// it was. On success `old` is detached and `new` has `old`'s former parent. `new` may
    /// be a descendant of `old`, which unwraps it.
    #[tracing::instrument(level = "debug", skip(ast))]
    pub fn replace(ast: &mut Ast, old: NodeId, new: NodeId) -> Result<(), ReplaceError> {
        for node in [old, new] {
            if !ast.contains(node) {
                return Err(ReplaceError::UnknownNode(node));
            }
        }

        if old == new {
            return Ok(());
        }

        let parent = ast.parent(old).ok_or(ReplaceError::Detached(old))?;
        // A node from inside `old` moves up; `old` is discarded along with its stale link.
        if ast.parent(new).is_some() && !ast.ancestors(new).any(|ancestor| ancestor == old) {
            return Err(ReplaceError::AlreadyAttached(new));
        }
        if ast.ancestors(parent).any(|ancestor| ancestor == new) {
            return Err(ReplaceError::Cycle(new));
        }

        let replacer = Self { old, new };
        if !replacer.replace_child(ast.kind_mut(parent)) {
            tracing::error!(?parent, child = ?old, "parent does not contain its child");
            return Err(ReplaceError::NotAChild { parent, child: old });
        }

        ast.reparent(parent, old, new);
        Ok(())
    }

    fn replace_child(self, kind: &mut NodeKind) -> bool {
        match kind {
            NodeKind::AdjacentStrings(n) => self.list(&mut n.strings),
            NodeKind::Annotation(n) => {
                self.slot(&mut n.name)
                    || self.opt_slot(&mut n.constructor_name)
                    || self.opt_slot(&mut n.arguments)
            }
            NodeKind::ArgumentList(n) => self.list(&mut n.arguments),
            NodeKind::AsExpression(n) => self.slot(&mut n.expression) || self.slot(&mut n.ty),
            NodeKind::AssertStatement(n) => self.slot(&mut n.condition),
            NodeKind::AssignmentExpression(n) => {
                self.slot(&mut n.left_hand_side) || self.slot(&mut n.right_hand_side)
            }
            NodeKind::AwaitExpression(n) => self.slot(&mut n.expression),
            NodeKind::BinaryExpression(n) => {
                self.slot(&mut n.left_operand) || self.slot(&mut n.right_operand)
            }
            NodeKind::Block(n) => self.list(&mut n.statements),
            NodeKind::BlockFunctionBody(n) => self.slot(&mut n.block),
            NodeKind::BooleanLiteral(_) => false,
            NodeKind::BreakStatement(n) => self.opt_slot(&mut n.label),
            NodeKind::CascadeExpression(n) => {
                self.slot(&mut n.target) || self.list(&mut n.cascade_sections)
            }
            NodeKind::CatchClause(n) => {
                self.opt_slot(&mut n.exception_type)
                    || self.opt_slot(&mut n.exception_parameter)
                    || self.opt_slot(&mut n.stack_trace_parameter)
                    || self.slot(&mut n.body)
            }
            NodeKind::ClassDeclaration(n) => {
                self.slot(&mut n.name)
                    || self.opt_slot(&mut n.type_parameters)
                    || self.opt_slot(&mut n.extends_clause)
                    || self.opt_slot(&mut n.with_clause)
                    || self.opt_slot(&mut n.implements_clause)
                    || self.opt_slot(&mut n.native_clause)
                    || self.list(&mut n.members)
                    || self.annotated(&mut n.header)
            }
            NodeKind::ClassTypeAlias(n) => {
                self.slot(&mut n.name)
                    || self.opt_slot(&mut n.type_parameters)
                    || self.slot(&mut n.superclass)
                    || self.opt_slot(&mut n.with_clause)
                    || self.opt_slot(&mut n.implements_clause)
                    || self.annotated(&mut n.header)
            }
            NodeKind::Comment(n) => self.list(&mut n.references),
            NodeKind::CommentReference(n) => self.slot(&mut n.identifier),
            NodeKind::CompilationUnit(n) => {
                self.opt_slot(&mut n.script_tag)
                    || self.list(&mut n.directives)
                    || self.list(&mut n.declarations)
            }
            NodeKind::ConditionalExpression(n) => {
                self.slot(&mut n.condition)
                    || self.slot(&mut n.then_expression)
                    || self.slot(&mut n.else_expression)
            }
            NodeKind::ConstructorDeclaration(n) => {
                self.slot(&mut n.return_type)
                    || self.opt_slot(&mut n.name)
                    || self.slot(&mut n.parameters)
                    || self.list(&mut n.initializers)
                    || self.opt_slot(&mut n.redirected_constructor)
                    || self.opt_slot(&mut n.body)
                    || self.annotated(&mut n.header)
            }
            NodeKind::ConstructorFieldInitializer(n) => {
                self.slot(&mut n.field_name) || self.slot(&mut n.expression)
            }
            NodeKind::ConstructorName(n) => self.slot(&mut n.ty) || self.opt_slot(&mut n.name),
            NodeKind::ContinueStatement(n) => self.opt_slot(&mut n.label),
            NodeKind::DeclaredIdentifier(n) => {
                self.opt_slot(&mut n.ty)
                    || self.slot(&mut n.identifier)
                    || self.annotated(&mut n.header)
            }
            NodeKind::DefaultFormalParameter(n) => {
                self.slot(&mut n.parameter) || self.opt_slot(&mut n.default_value)
            }
            NodeKind::DoStatement(n) => self.slot(&mut n.body) || self.slot(&mut n.condition),
            NodeKind::DoubleLiteral(_) => false,
            NodeKind::EmptyFunctionBody(_) => false,
            NodeKind::EmptyStatement(_) => false,
            NodeKind::EnumConstantDeclaration(n) => {
                self.slot(&mut n.name) || self.annotated(&mut n.header)
            }
            NodeKind::EnumDeclaration(n) => {
                self.slot(&mut n.name)
                    || self.list(&mut n.constants)
                    || self.annotated(&mut n.header)
            }
            NodeKind::ExportDirective(n) => {
                self.namespace_directive(&mut n.combinators, &mut n.uri, &mut n.header)
            }
            NodeKind::ExpressionFunctionBody(n) => self.slot(&mut n.expression),
            NodeKind::ExpressionStatement(n) => self.slot(&mut n.expression),
            NodeKind::ExtendsClause(n) => self.slot(&mut n.superclass),
            NodeKind::FieldDeclaration(n) => {
                self.slot(&mut n.fields) || self.annotated(&mut n.header)
            }
            NodeKind::FieldFormalParameter(n) => {
                self.opt_slot(&mut n.ty)
                    || self.opt_slot(&mut n.parameters)
                    || self.normal_parameter(&mut n.identifier, &mut n.header)
            }
            NodeKind::ForEachStatement(n) => {
                self.opt_slot(&mut n.loop_variable)
                    || self.opt_slot(&mut n.identifier)
                    || self.slot(&mut n.iterable)
                    || self.slot(&mut n.body)
            }
            NodeKind::FormalParameterList(n) => self.list(&mut n.parameters),
            NodeKind::ForStatement(n) => {
                self.opt_slot(&mut n.variables)
                    || self.opt_slot(&mut n.initialization)
                    || self.opt_slot(&mut n.condition)
                    || self.list(&mut n.updaters)
                    || self.slot(&mut n.body)
            }
            NodeKind::FunctionDeclaration(n) => {
                self.opt_slot(&mut n.return_type)
                    || self.slot(&mut n.name)
                    || self.slot(&mut n.function_expression)
                    || self.annotated(&mut n.header)
            }
            NodeKind::FunctionDeclarationStatement(n) => self.slot(&mut n.function_declaration),
            NodeKind::FunctionExpression(n) => {
                self.opt_slot(&mut n.parameters) || self.opt_slot(&mut n.body)
            }
            NodeKind::FunctionExpressionInvocation(n) => {
                self.slot(&mut n.function) || self.slot(&mut n.argument_list)
            }
            NodeKind::FunctionTypeAlias(n) => {
                self.opt_slot(&mut n.return_type)
                    || self.slot(&mut n.name)
                    || self.opt_slot(&mut n.type_parameters)
                    || self.slot(&mut n.parameters)
                    || self.annotated(&mut n.header)
            }
            NodeKind::FunctionTypedFormalParameter(n) => {
                self.opt_slot(&mut n.return_type)
                    || self.slot(&mut n.parameters)
                    || self.normal_parameter(&mut n.identifier, &mut n.header)
            }
            NodeKind::HideCombinator(n) => self.list(&mut n.hidden_names),
            NodeKind::IfStatement(n) => {
                self.slot(&mut n.condition)
                    || self.slot(&mut n.then_statement)
                    || self.opt_slot(&mut n.else_statement)
            }
            NodeKind::ImplementsClause(n) => self.list(&mut n.interfaces),
            NodeKind::ImportDirective(n) => {
                self.opt_slot(&mut n.prefix)
                    || self.namespace_directive(&mut n.combinators, &mut n.uri, &mut n.header)
            }
            NodeKind::IndexExpression(n) => self.opt_slot(&mut n.target) || self.slot(&mut n.index),
            NodeKind::InstanceCreationExpression(n) => {
                self.slot(&mut n.constructor_name) || self.slot(&mut n.argument_list)
            }
            NodeKind::IntegerLiteral(_) => false,
            NodeKind::InterpolationExpression(n) => self.slot(&mut n.expression),
            NodeKind::InterpolationString(_) => false,
            NodeKind::IsExpression(n) => self.slot(&mut n.expression) || self.slot(&mut n.ty),
            NodeKind::Label(n) => self.slot(&mut n.label),
            NodeKind::LabeledStatement(n) => {
                self.list(&mut n.labels) || self.slot(&mut n.statement)
            }
            NodeKind::LibraryDirective(n) => {
                self.slot(&mut n.name) || self.annotated(&mut n.header)
            }
            NodeKind::LibraryIdentifier(n) => self.list(&mut n.components),
            NodeKind::ListLiteral(n) => {
                self.opt_slot(&mut n.type_arguments) || self.list(&mut n.elements)
            }
            NodeKind::MapLiteral(n) => {
                self.opt_slot(&mut n.type_arguments) || self.list(&mut n.entries)
            }
            NodeKind::MapLiteralEntry(n) => self.slot(&mut n.key) || self.slot(&mut n.value),
            NodeKind::MethodDeclaration(n) => {
                self.opt_slot(&mut n.return_type)
                    || self.slot(&mut n.name)
                    || self.opt_slot(&mut n.parameters)
                    || self.slot(&mut n.body)
                    || self.annotated(&mut n.header)
            }
            NodeKind::MethodInvocation(n) => {
                self.opt_slot(&mut n.target)
                    || self.slot(&mut n.method_name)
                    || self.slot(&mut n.argument_list)
            }
            NodeKind::NamedExpression(n) => self.slot(&mut n.name) || self.slot(&mut n.expression),
            NodeKind::NativeClause(n) => self.opt_slot(&mut n.name),
            NodeKind::NativeFunctionBody(n) => self.opt_slot(&mut n.string_literal),
            NodeKind::NullLiteral(_) => false,
            NodeKind::ParenthesizedExpression(n) => self.slot(&mut n.expression),
            NodeKind::PartDirective(n) => self.uri_directive(&mut n.uri, &mut n.header),
            NodeKind::PartOfDirective(n) => {
                self.slot(&mut n.library_name) || self.annotated(&mut n.header)
            }
            NodeKind::PostfixExpression(n) => self.slot(&mut n.operand),
            NodeKind::PrefixedIdentifier(n) => {
                self.slot(&mut n.prefix) || self.slot(&mut n.identifier)
            }
            NodeKind::PrefixExpression(n) => self.slot(&mut n.operand),
            NodeKind::PropertyAccess(n) => {
                self.opt_slot(&mut n.target) || self.slot(&mut n.property_name)
            }
            NodeKind::RedirectingConstructorInvocation(n) => {
                self.opt_slot(&mut n.constructor_name) || self.slot(&mut n.argument_list)
            }
            NodeKind::RethrowExpression(_) => false,
            NodeKind::ReturnStatement(n) => self.opt_slot(&mut n.expression),
            NodeKind::ScriptTag(_) => false,
            NodeKind::ShowCombinator(n) => self.list(&mut n.shown_names),
            NodeKind::SimpleFormalParameter(n) => {
                self.opt_slot(&mut n.ty) || self.normal_parameter(&mut n.identifier, &mut n.header)
            }
            NodeKind::SimpleIdentifier(_) => false,
            NodeKind::SimpleStringLiteral(_) => false,
            NodeKind::StringInterpolation(n) => self.list(&mut n.elements),
            NodeKind::SuperConstructorInvocation(n) => {
                self.opt_slot(&mut n.constructor_name) || self.slot(&mut n.argument_list)
            }
            NodeKind::SuperExpression(_) => false,
            NodeKind::SwitchCase(n) => {
                self.slot(&mut n.expression) || self.switch_member(&mut n.labels, &mut n.statements)
            }
            NodeKind::SwitchDefault(n) => self.switch_member(&mut n.labels, &mut n.statements),
            NodeKind::SwitchStatement(n) => {
                self.slot(&mut n.expression) || self.list(&mut n.members)
            }
            NodeKind::SymbolLiteral(_) => false,
            NodeKind::ThisExpression(_) => false,
            NodeKind::ThrowExpression(n) => self.slot(&mut n.expression),
            NodeKind::TopLevelVariableDeclaration(n) => {
                self.slot(&mut n.variables) || self.annotated(&mut n.header)
            }
            NodeKind::TryStatement(n) => {
                self.slot(&mut n.body)
                    || self.list(&mut n.catch_clauses)
                    || self.opt_slot(&mut n.finally_block)
            }
            NodeKind::TypeArgumentList(n) => self.list(&mut n.arguments),
            NodeKind::TypeName(n) => self.slot(&mut n.name) || self.opt_slot(&mut n.type_arguments),
            NodeKind::TypeParameter(n) => {
                self.slot(&mut n.name)
                    || self.opt_slot(&mut n.bound)
                    || self.annotated(&mut n.header)
            }
            NodeKind::TypeParameterList(n) => self.list(&mut n.type_parameters),
            NodeKind::VariableDeclaration(n) => {
                self.slot(&mut n.name)
                    || self.opt_slot(&mut n.initializer)
                    || self.annotated(&mut n.header)
            }
            NodeKind::VariableDeclarationList(n) => {
                self.opt_slot(&mut n.ty)
                    || self.list(&mut n.variables)
                    || self.annotated(&mut n.header)
            }
            NodeKind::VariableDeclarationStatement(n) => self.slot(&mut n.variables),
            NodeKind::WhileStatement(n) => self.slot(&mut n.condition) || self.slot(&mut n.body),
            NodeKind::WithClause(n) => self.list(&mut n.mixin_types),
            NodeKind::YieldStatement(n) => self.slot(&mut n.expression),
        }
    }

    fn slot(self, slot: &mut NodeId) -> bool {
        if *slot == self.old {
            *slot = self.new;
            return true;
        }
        false
    }

    fn opt_slot(self, slot: &mut Option<NodeId>) -> bool {
        slot.as_mut().is_some_and(|slot| self.slot(slot))
    }

    fn list(self, list: &mut [NodeId]) -> bool {
        list.iter_mut().any(|slot| self.slot(slot))
    }

    fn annotated(self, header: &mut DeclarationHeader) -> bool {
        self.opt_slot(&mut header.documentation_comment) || self.list(&mut header.metadata)
    }

    fn normal_parameter(self, identifier: &mut NodeId, header: &mut DeclarationHeader) -> bool {
        self.slot(identifier) || self.annotated(header)
    }

    fn uri_directive(self, uri: &mut NodeId, header: &mut DeclarationHeader) -> bool {
        self.slot(uri) || self.annotated(header)
    }

    fn namespace_directive(
        self,
        combinators: &mut [NodeId],
        uri: &mut NodeId,
        header: &mut DeclarationHeader,
    ) -> bool {
        self.list(combinators) || self.uri_directive(uri, header)
    }

    fn switch_member(self, labels: &mut [NodeId], statements: &mut [NodeId]) -> bool {
        self.list(labels) || self.list(statements)
    }
}
