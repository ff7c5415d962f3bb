use std::ops::ControlFlow;

use sprig_span::TextSize;
use sprig_syntax::nodes::NodeKind;
use sprig_syntax::{Ast, NodeId};

use crate::LocalScope;

/// Walks from a node up through its ancestors, collecting the bindings each one introduces.
///
/// Every ancestor is visited together with the child the walk arrived from, which is what
/// keeps a parameter from seeing itself and a statement from seeing later declarations.
pub struct ScopedNameFinder<'a> {
    ast: &'a Ast,
    position: Option<TextSize>,
    scope: LocalScope,
}

impl<'a> ScopedNameFinder<'a> {
    pub fn new(ast: &'a Ast, position: Option<TextSize>) -> Self {
        Self { ast, position, scope: LocalScope::default() }
    }

    pub fn find(mut self, node: NodeId) -> LocalScope {
        let ast = self.ast;
        let mut arrived_from = None;
        for ancestor in ast.ancestors(node) {
            if self.visit(ancestor, arrived_from).is_break() {
                self.scope.set_enclosing_declaration(ancestor);
                break;
            }
            arrived_from = Some(ancestor);
        }
        self.scope
    }

    fn visit(&mut self, node: NodeId, arrived_from: Option<NodeId>) -> ControlFlow<()> {
        let ast = self.ast;
        match ast.kind(node) {
            NodeKind::Block(block) => self.statements(&block.statements, arrived_from),
            NodeKind::SwitchCase(member) => self.statements(&member.statements, arrived_from),
            NodeKind::SwitchDefault(member) => self.statements(&member.statements, arrived_from),
            NodeKind::CatchClause(clause) => {
                self.add_opt(clause.exception_parameter);
                self.add_opt(clause.stack_trace_parameter);
            }
            NodeKind::ForStatement(statement) => {
                if let Some(variables) = statement.variables
                    && arrived_from != Some(variables)
                {
                    self.variable_list(variables);
                }
            }
            NodeKind::ForEachStatement(statement) => {
                if let Some(loop_variable) = statement.loop_variable
                    && let NodeKind::DeclaredIdentifier(declared) = ast.kind(loop_variable)
                {
                    self.add(declared.identifier);
                }
            }
            NodeKind::FunctionExpression(function) => {
                self.parameters(function.parameters, arrived_from);
            }
            NodeKind::FunctionDeclaration(function) => {
                let is_local = ast.parent(node).is_some_and(|parent| {
                    matches!(ast.kind(parent), NodeKind::FunctionDeclarationStatement(_))
                });
                if !is_local {
                    return ControlFlow::Break(());
                }
                // A local function can call itself.
                self.add(function.name);
            }
            NodeKind::MethodDeclaration(method) => {
                self.parameters(method.parameters, arrived_from);
                return ControlFlow::Break(());
            }
            NodeKind::ConstructorDeclaration(constructor) => {
                self.parameters(Some(constructor.parameters), arrived_from);
                return ControlFlow::Break(());
            }
            NodeKind::FieldDeclaration(_) | NodeKind::TopLevelVariableDeclaration(_) => {
                return ControlFlow::Break(());
            }
            _ => {}
        }
        ControlFlow::Continue(())
    }

    /// Declarations among `statements` that come before `arrived_from`.
    fn statements(&mut self, statements: &[NodeId], arrived_from: Option<NodeId>) {
        // Arriving from a case expression or a label sees none of the member's statements.
        if let Some(from) = arrived_from
            && !statements.contains(&from)
        {
            return;
        }
        let ast = self.ast;
        for &statement in statements {
            if Some(statement) == arrived_from {
                break;
            }
            match ast.kind(statement) {
                NodeKind::VariableDeclarationStatement(declaration) => {
                    self.variable_list(declaration.variables);
                }
                NodeKind::FunctionDeclarationStatement(declaration) => {
                    if let NodeKind::FunctionDeclaration(function) =
                        ast.kind(declaration.function_declaration)
                    {
                        self.add(function.name);
                    }
                }
                _ => {}
            }
        }
    }

    fn variable_list(&mut self, list: NodeId) {
        let ast = self.ast;
        let NodeKind::VariableDeclarationList(list) = ast.kind(list) else {
            return;
        };
        for &variable in &list.variables {
            if let NodeKind::VariableDeclaration(variable) = ast.kind(variable) {
                self.add(variable.name);
            }
        }
    }

    fn parameters(&mut self, list: Option<NodeId>, arrived_from: Option<NodeId>) {
        let Some(list) = list.filter(|&list| Some(list) != arrived_from) else {
            return;
        };
        let ast = self.ast;
        let NodeKind::FormalParameterList(list) = ast.kind(list) else {
            return;
        };
        for &parameter in &list.parameters {
            if let Some(identifier) = self.parameter_identifier(parameter) {
                self.add(identifier);
            }
        }
    }

    fn parameter_identifier(&self, parameter: NodeId) -> Option<NodeId> {
        match self.ast.kind(parameter) {
            NodeKind::DefaultFormalParameter(default) => {
                self.parameter_identifier(default.parameter)
            }
            NodeKind::SimpleFormalParameter(parameter) => Some(parameter.identifier),
            NodeKind::FieldFormalParameter(parameter) => Some(parameter.identifier),
            NodeKind::FunctionTypedFormalParameter(parameter) => Some(parameter.identifier),
            _ => None,
        }
    }

    fn add_opt(&mut self, identifier: Option<NodeId>) {
        if let Some(identifier) = identifier {
            self.add(identifier);
        }
    }

    fn add(&mut self, identifier: NodeId) {
        let ast = self.ast;
        let NodeKind::SimpleIdentifier(simple) = ast.kind(identifier) else {
            return;
        };
        if let Some(position) = self.position
            && simple.token.end() >= position
        {
            return;
        }
        self.scope.insert(simple.token.lexeme(), identifier);
    }
}
