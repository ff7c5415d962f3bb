use crate::NodeId;
use crate::nodes::{DeclarationHeader, NodeKind};

struct Visit<F>(F);

impl<F: FnMut(NodeId)> Visit<F> {
    fn one(&mut self, node: NodeId) -> &mut Self {
        (self.0)(node);
        self
    }

    fn opt(&mut self, node: Option<NodeId>) -> &mut Self {
        if let Some(node) = node {
            (self.0)(node);
        }
        self
    }

    fn list(&mut self, nodes: &[NodeId]) -> &mut Self {
        nodes.iter().copied().for_each(&mut self.0);
        self
    }

    fn header(&mut self, header: &DeclarationHeader) -> &mut Self {
        self.opt(header.documentation_comment).list(&header.metadata)
    }
}

impl NodeKind {
    /// Calls `f` with every direct child, in source order.
    pub fn for_each_child(&self, f: impl FnMut(NodeId)) {
        let v = &mut Visit(f);

        match self {
            Self::AdjacentStrings(n) => v.list(&n.strings),
            Self::Annotation(n) => v.one(n.name).opt(n.constructor_name).opt(n.arguments),
            Self::ArgumentList(n) => v.list(&n.arguments),
            Self::AsExpression(n) => v.one(n.expression).one(n.ty),
            Self::AssertStatement(n) => v.one(n.condition),
            Self::AssignmentExpression(n) => v.one(n.left_hand_side).one(n.right_hand_side),
            Self::AwaitExpression(n) => v.one(n.expression),
            Self::BinaryExpression(n) => v.one(n.left_operand).one(n.right_operand),
            Self::Block(n) => v.list(&n.statements),
            Self::BlockFunctionBody(n) => v.one(n.block),
            Self::BooleanLiteral(_) => v,
            Self::BreakStatement(n) => v.opt(n.label),
            Self::CascadeExpression(n) => v.one(n.target).list(&n.cascade_sections),
            Self::CatchClause(n) => v
                .opt(n.exception_type)
                .opt(n.exception_parameter)
                .opt(n.stack_trace_parameter)
                .one(n.body),
            Self::ClassDeclaration(n) => v
                .header(&n.header)
                .one(n.name)
                .opt(n.type_parameters)
                .opt(n.extends_clause)
                .opt(n.with_clause)
                .opt(n.implements_clause)
                .opt(n.native_clause)
                .list(&n.members),
            Self::ClassTypeAlias(n) => v
                .header(&n.header)
                .one(n.name)
                .opt(n.type_parameters)
                .one(n.superclass)
                .opt(n.with_clause)
                .opt(n.implements_clause),
            Self::Comment(n) => v.list(&n.references),
            Self::CommentReference(n) => v.one(n.identifier),
            Self::CompilationUnit(n) => {
                v.opt(n.script_tag).list(&n.directives).list(&n.declarations)
            }
            Self::ConditionalExpression(n) => {
                v.one(n.condition).one(n.then_expression).one(n.else_expression)
            }
            Self::ConstructorDeclaration(n) => v
                .header(&n.header)
                .one(n.return_type)
                .opt(n.name)
                .one(n.parameters)
                .list(&n.initializers)
                .opt(n.redirected_constructor)
                .opt(n.body),
            Self::ConstructorFieldInitializer(n) => v.one(n.field_name).one(n.expression),
            Self::ConstructorName(n) => v.one(n.ty).opt(n.name),
            Self::ContinueStatement(n) => v.opt(n.label),
            Self::DeclaredIdentifier(n) => v.header(&n.header).opt(n.ty).one(n.identifier),
            Self::DefaultFormalParameter(n) => v.one(n.parameter).opt(n.default_value),
            Self::DoStatement(n) => v.one(n.body).one(n.condition),
            Self::DoubleLiteral(_) => v,
            Self::EmptyFunctionBody(_) => v,
            Self::EmptyStatement(_) => v,
            Self::EnumConstantDeclaration(n) => v.header(&n.header).one(n.name),
            Self::EnumDeclaration(n) => v.header(&n.header).one(n.name).list(&n.constants),
            Self::ExportDirective(n) => v.header(&n.header).one(n.uri).list(&n.combinators),
            Self::ExpressionFunctionBody(n) => v.one(n.expression),
            Self::ExpressionStatement(n) => v.one(n.expression),
            Self::ExtendsClause(n) => v.one(n.superclass),
            Self::FieldDeclaration(n) => v.header(&n.header).one(n.fields),
            Self::FieldFormalParameter(n) => {
                v.header(&n.header).opt(n.ty).one(n.identifier).opt(n.parameters)
            }
            Self::ForEachStatement(n) => {
                v.opt(n.loop_variable).opt(n.identifier).one(n.iterable).one(n.body)
            }
            Self::FormalParameterList(n) => v.list(&n.parameters),
            Self::ForStatement(n) => v
                .opt(n.variables)
                .opt(n.initialization)
                .opt(n.condition)
                .list(&n.updaters)
                .one(n.body),
            Self::FunctionDeclaration(n) => {
                v.header(&n.header).opt(n.return_type).one(n.name).one(n.function_expression)
            }
            Self::FunctionDeclarationStatement(n) => v.one(n.function_declaration),
            Self::FunctionExpression(n) => v.opt(n.parameters).opt(n.body),
            Self::FunctionExpressionInvocation(n) => v.one(n.function).one(n.argument_list),
            Self::FunctionTypeAlias(n) => v
                .header(&n.header)
                .opt(n.return_type)
                .one(n.name)
                .opt(n.type_parameters)
                .one(n.parameters),
            Self::FunctionTypedFormalParameter(n) => {
                v.header(&n.header).opt(n.return_type).one(n.identifier).one(n.parameters)
            }
            Self::HideCombinator(n) => v.list(&n.hidden_names),
            Self::IfStatement(n) => v.one(n.condition).one(n.then_statement).opt(n.else_statement),
            Self::ImplementsClause(n) => v.list(&n.interfaces),
            Self::ImportDirective(n) => {
                v.header(&n.header).one(n.uri).opt(n.prefix).list(&n.combinators)
            }
            Self::IndexExpression(n) => v.opt(n.target).one(n.index),
            Self::InstanceCreationExpression(n) => v.one(n.constructor_name).one(n.argument_list),
            Self::IntegerLiteral(_) => v,
            Self::InterpolationExpression(n) => v.one(n.expression),
            Self::InterpolationString(_) => v,
            Self::IsExpression(n) => v.one(n.expression).one(n.ty),
            Self::Label(n) => v.one(n.label),
            Self::LabeledStatement(n) => v.list(&n.labels).one(n.statement),
            Self::LibraryDirective(n) => v.header(&n.header).one(n.name),
            Self::LibraryIdentifier(n) => v.list(&n.components),
            Self::ListLiteral(n) => v.opt(n.type_arguments).list(&n.elements),
            Self::MapLiteral(n) => v.opt(n.type_arguments).list(&n.entries),
            Self::MapLiteralEntry(n) => v.one(n.key).one(n.value),
            Self::MethodDeclaration(n) => v
                .header(&n.header)
                .opt(n.return_type)
                .one(n.name)
                .opt(n.parameters)
                .one(n.body),
            Self::MethodInvocation(n) => v.opt(n.target).one(n.method_name).one(n.argument_list),
            Self::NamedExpression(n) => v.one(n.name).one(n.expression),
            Self::NativeClause(n) => v.opt(n.name),
            Self::NativeFunctionBody(n) => v.opt(n.string_literal),
            Self::NullLiteral(_) => v,
            Self::ParenthesizedExpression(n) => v.one(n.expression),
            Self::PartDirective(n) => v.header(&n.header).one(n.uri),
            Self::PartOfDirective(n) => v.header(&n.header).one(n.library_name),
            Self::PostfixExpression(n) => v.one(n.operand),
            Self::PrefixedIdentifier(n) => v.one(n.prefix).one(n.identifier),
            Self::PrefixExpression(n) => v.one(n.operand),
            Self::PropertyAccess(n) => v.opt(n.target).one(n.property_name),
            Self::RedirectingConstructorInvocation(n) => {
                v.opt(n.constructor_name).one(n.argument_list)
            }
            Self::RethrowExpression(_) => v,
            Self::ReturnStatement(n) => v.opt(n.expression),
            Self::ScriptTag(_) => v,
            Self::ShowCombinator(n) => v.list(&n.shown_names),
            Self::SimpleFormalParameter(n) => v.header(&n.header).opt(n.ty).one(n.identifier),
            Self::SimpleIdentifier(_) => v,
            Self::SimpleStringLiteral(_) => v,
            Self::StringInterpolation(n) => v.list(&n.elements),
            Self::SuperConstructorInvocation(n) => v.opt(n.constructor_name).one(n.argument_list),
            Self::SuperExpression(_) => v,
            Self::SwitchCase(n) => v.list(&n.labels).one(n.expression).list(&n.statements),
            Self::SwitchDefault(n) => v.list(&n.labels).list(&n.statements),
            Self::SwitchStatement(n) => v.one(n.expression).list(&n.members),
            Self::SymbolLiteral(_) => v,
            Self::ThisExpression(_) => v,
            Self::ThrowExpression(n) => v.one(n.expression),
            Self::TopLevelVariableDeclaration(n) => v.header(&n.header).one(n.variables),
            Self::TryStatement(n) => {
                v.one(n.body).list(&n.catch_clauses).opt(n.finally_block)
            }
            Self::TypeArgumentList(n) => v.list(&n.arguments),
            Self::TypeName(n) => v.one(n.name).opt(n.type_arguments),
            Self::TypeParameter(n) => v.header(&n.header).one(n.name).opt(n.bound),
            Self::TypeParameterList(n) => v.list(&n.type_parameters),
            Self::VariableDeclaration(n) => v.header(&n.header).one(n.name).opt(n.initializer),
            Self::VariableDeclarationList(n) => {
                v.header(&n.header).opt(n.ty).list(&n.variables)
            }
            Self::VariableDeclarationStatement(n) => v.one(n.variables),
            Self::WhileStatement(n) => v.one(n.condition).one(n.body),
            Self::WithClause(n) => v.list(&n.mixin_types),
            Self::YieldStatement(n) => v.one(n.expression),
        };
    }

    pub fn children(&self) -> Vec<NodeId> {
        let mut children = Vec::new();
        self.for_each_child(|child| children.push(child));
        children
    }
}
