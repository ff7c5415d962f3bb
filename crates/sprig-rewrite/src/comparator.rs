use sprig_span::Token;
use sprig_syntax::nodes::*;
use sprig_syntax::{Ast, NodeId};

/// How two token leaves are matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenComparison {
    /// Same offset, same length and same text.
    #[default]
    Exact,
    /// Same text, wherever it sits in the source.
    Lexeme,
}

/// Structural equality of two subtrees, possibly from different trees.
///
/// Annotations, parent links and node ids never take part in the comparison.
pub struct AstComparator<'a> {
    first: &'a Ast,
    second: &'a Ast,
    tokens: TokenComparison,
}

impl<'a> AstComparator<'a> {
    pub fn new(first: &'a Ast, second: &'a Ast, tokens: TokenComparison) -> Self {
        Self { first, second, tokens }
    }

    /// Both absent, or both present and equal.
    pub fn is_equal(&self, first: Option<NodeId>, second: Option<NodeId>) -> bool {
        self.opt(first, second)
    }

    fn node(&self, first: NodeId, second: NodeId) -> bool {
        let other = self.second.kind(second);

        match self.first.kind(first) {
            NodeKind::AdjacentStrings(a) => {
                let NodeKind::AdjacentStrings(b) = other else { return false };
                self.list(&a.strings, &b.strings)
            }
            NodeKind::Annotation(a) => {
                let NodeKind::Annotation(b) = other else { return false };
                self.token(&a.at_sign, &b.at_sign)
                    && self.node(a.name, b.name)
                    && self.opt_token(&a.period, &b.period)
                    && self.opt(a.constructor_name, b.constructor_name)
                    && self.opt(a.arguments, b.arguments)
            }
            NodeKind::ArgumentList(a) => {
                let NodeKind::ArgumentList(b) = other else { return false };
                self.token(&a.left_parenthesis, &b.left_parenthesis)
                    && self.list(&a.arguments, &b.arguments)
                    && self.token(&a.right_parenthesis, &b.right_parenthesis)
            }
            NodeKind::AsExpression(a) => {
                let NodeKind::AsExpression(b) = other else { return false };
                self.node(a.expression, b.expression)
                    && self.token(&a.as_operator, &b.as_operator)
                    && self.node(a.ty, b.ty)
            }
            NodeKind::AssertStatement(a) => {
                let NodeKind::AssertStatement(b) = other else { return false };
                self.token(&a.keyword, &b.keyword)
                    && self.token(&a.left_parenthesis, &b.left_parenthesis)
                    && self.node(a.condition, b.condition)
                    && self.token(&a.right_parenthesis, &b.right_parenthesis)
                    && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::AssignmentExpression(a) => {
                let NodeKind::AssignmentExpression(b) = other else { return false };
                self.node(a.left_hand_side, b.left_hand_side)
                    && self.token(&a.operator, &b.operator)
                    && self.node(a.right_hand_side, b.right_hand_side)
            }
            NodeKind::AwaitExpression(a) => {
                let NodeKind::AwaitExpression(b) = other else { return false };
                self.token(&a.await_keyword, &b.await_keyword)
                    && self.node(a.expression, b.expression)
            }
            NodeKind::BinaryExpression(a) => {
                let NodeKind::BinaryExpression(b) = other else { return false };
                self.node(a.left_operand, b.left_operand)
                    && self.token(&a.operator, &b.operator)
                    && self.node(a.right_operand, b.right_operand)
            }
            NodeKind::Block(a) => {
                let NodeKind::Block(b) = other else { return false };
                self.token(&a.left_bracket, &b.left_bracket)
                    && self.list(&a.statements, &b.statements)
                    && self.token(&a.right_bracket, &b.right_bracket)
            }
            NodeKind::BlockFunctionBody(a) => {
                let NodeKind::BlockFunctionBody(b) = other else { return false };
                self.opt_token(&a.keyword, &b.keyword)
                    && self.opt_token(&a.star, &b.star)
                    && self.node(a.block, b.block)
            }
            NodeKind::BooleanLiteral(a) => {
                let NodeKind::BooleanLiteral(b) = other else { return false };
                self.token(&a.literal, &b.literal) && a.value == b.value
            }
            NodeKind::BreakStatement(a) => {
                let NodeKind::BreakStatement(b) = other else { return false };
                self.token(&a.keyword, &b.keyword)
                    && self.opt(a.label, b.label)
                    && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::CascadeExpression(a) => {
                let NodeKind::CascadeExpression(b) = other else { return false };
                self.node(a.target, b.target) && self.list(&a.cascade_sections, &b.cascade_sections)
            }
            NodeKind::CatchClause(a) => {
                let NodeKind::CatchClause(b) = other else { return false };
                self.opt_token(&a.on_keyword, &b.on_keyword)
                    && self.opt(a.exception_type, b.exception_type)
                    && self.opt_token(&a.catch_keyword, &b.catch_keyword)
                    && self.opt_token(&a.left_parenthesis, &b.left_parenthesis)
                    && self.opt(a.exception_parameter, b.exception_parameter)
                    && self.opt_token(&a.comma, &b.comma)
                    && self.opt(a.stack_trace_parameter, b.stack_trace_parameter)
                    && self.opt_token(&a.right_parenthesis, &b.right_parenthesis)
                    && self.node(a.body, b.body)
            }
            NodeKind::ClassDeclaration(a) => {
                let NodeKind::ClassDeclaration(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.opt_token(&a.abstract_keyword, &b.abstract_keyword)
                    && self.token(&a.class_keyword, &b.class_keyword)
                    && self.node(a.name, b.name)
                    && self.opt(a.type_parameters, b.type_parameters)
                    && self.opt(a.extends_clause, b.extends_clause)
                    && self.opt(a.with_clause, b.with_clause)
                    && self.opt(a.implements_clause, b.implements_clause)
                    && self.opt(a.native_clause, b.native_clause)
                    && self.token(&a.left_bracket, &b.left_bracket)
                    && self.list(&a.members, &b.members)
                    && self.token(&a.right_bracket, &b.right_bracket)
            }
            NodeKind::ClassTypeAlias(a) => {
                let NodeKind::ClassTypeAlias(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.token(&a.keyword, &b.keyword)
                    && self.node(a.name, b.name)
                    && self.opt(a.type_parameters, b.type_parameters)
                    && self.token(&a.equals, &b.equals)
                    && self.opt_token(&a.abstract_keyword, &b.abstract_keyword)
                    && self.node(a.superclass, b.superclass)
                    && self.opt(a.with_clause, b.with_clause)
                    && self.opt(a.implements_clause, b.implements_clause)
                    && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::Comment(a) => {
                let NodeKind::Comment(b) = other else { return false };
                a.kind == b.kind
                    && self.tokens(&a.tokens, &b.tokens)
                    && self.list(&a.references, &b.references)
            }
            NodeKind::CommentReference(a) => {
                let NodeKind::CommentReference(b) = other else { return false };
                self.opt_token(&a.new_keyword, &b.new_keyword)
                    && self.node(a.identifier, b.identifier)
            }
            NodeKind::CompilationUnit(a) => {
                let NodeKind::CompilationUnit(b) = other else { return false };
                self.token(&a.begin_token, &b.begin_token)
                    && self.opt(a.script_tag, b.script_tag)
                    && self.list(&a.directives, &b.directives)
                    && self.list(&a.declarations, &b.declarations)
                    && self.token(&a.end_token, &b.end_token)
            }
            NodeKind::ConditionalExpression(a) => {
                let NodeKind::ConditionalExpression(b) = other else { return false };
                self.node(a.condition, b.condition)
                    && self.token(&a.question, &b.question)
                    && self.node(a.then_expression, b.then_expression)
                    && self.token(&a.colon, &b.colon)
                    && self.node(a.else_expression, b.else_expression)
            }
            NodeKind::ConstructorDeclaration(a) => {
                let NodeKind::ConstructorDeclaration(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.opt_token(&a.external_keyword, &b.external_keyword)
                    && self.opt_token(&a.const_keyword, &b.const_keyword)
                    && self.opt_token(&a.factory_keyword, &b.factory_keyword)
                    && self.node(a.return_type, b.return_type)
                    && self.opt_token(&a.period, &b.period)
                    && self.opt(a.name, b.name)
                    && self.node(a.parameters, b.parameters)
                    && self.opt_token(&a.separator, &b.separator)
                    && self.list(&a.initializers, &b.initializers)
                    && self.opt(a.redirected_constructor, b.redirected_constructor)
                    && self.opt(a.body, b.body)
            }
            NodeKind::ConstructorFieldInitializer(a) => {
                let NodeKind::ConstructorFieldInitializer(b) = other else { return false };
                self.opt_token(&a.this_keyword, &b.this_keyword)
                    && self.opt_token(&a.period, &b.period)
                    && self.node(a.field_name, b.field_name)
                    && self.token(&a.equals, &b.equals)
                    && self.node(a.expression, b.expression)
            }
            NodeKind::ConstructorName(a) => {
                let NodeKind::ConstructorName(b) = other else { return false };
                self.node(a.ty, b.ty)
                    && self.opt_token(&a.period, &b.period)
                    && self.opt(a.name, b.name)
            }
            NodeKind::ContinueStatement(a) => {
                let NodeKind::ContinueStatement(b) = other else { return false };
                self.token(&a.keyword, &b.keyword)
                    && self.opt(a.label, b.label)
                    && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::DeclaredIdentifier(a) => {
                let NodeKind::DeclaredIdentifier(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.opt_token(&a.keyword, &b.keyword)
                    && self.opt(a.ty, b.ty)
                    && self.node(a.identifier, b.identifier)
            }
            NodeKind::DefaultFormalParameter(a) => {
                let NodeKind::DefaultFormalParameter(b) = other else { return false };
                self.node(a.parameter, b.parameter)
                    && a.kind == b.kind
                    && self.opt_token(&a.separator, &b.separator)
                    && self.opt(a.default_value, b.default_value)
            }
            NodeKind::DoStatement(a) => {
                let NodeKind::DoStatement(b) = other else { return false };
                self.token(&a.do_keyword, &b.do_keyword)
                    && self.node(a.body, b.body)
                    && self.token(&a.while_keyword, &b.while_keyword)
                    && self.token(&a.left_parenthesis, &b.left_parenthesis)
                    && self.node(a.condition, b.condition)
                    && self.token(&a.right_parenthesis, &b.right_parenthesis)
                    && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::DoubleLiteral(a) => {
                let NodeKind::DoubleLiteral(b) = other else { return false };
                self.token(&a.literal, &b.literal) && a.value == b.value
            }
            NodeKind::EmptyFunctionBody(a) => {
                let NodeKind::EmptyFunctionBody(b) = other else { return false };
                self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::EmptyStatement(a) => {
                let NodeKind::EmptyStatement(b) = other else { return false };
                self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::EnumConstantDeclaration(a) => {
                let NodeKind::EnumConstantDeclaration(b) = other else { return false };
                self.header(&a.header, &b.header) && self.node(a.name, b.name)
            }
            NodeKind::EnumDeclaration(a) => {
                let NodeKind::EnumDeclaration(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.token(&a.keyword, &b.keyword)
                    && self.node(a.name, b.name)
                    && self.token(&a.left_bracket, &b.left_bracket)
                    && self.list(&a.constants, &b.constants)
                    && self.token(&a.right_bracket, &b.right_bracket)
            }
            NodeKind::ExportDirective(a) => {
                let NodeKind::ExportDirective(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.token(&a.keyword, &b.keyword)
                    && self.node(a.uri, b.uri)
                    && self.list(&a.combinators, &b.combinators)
                    && self.token(&a.semicolon, &b.semicolon)
                    && a.uri_content == b.uri_content
            }
            NodeKind::ExpressionFunctionBody(a) => {
                let NodeKind::ExpressionFunctionBody(b) = other else { return false };
                self.opt_token(&a.keyword, &b.keyword)
                    && self.token(&a.function_definition, &b.function_definition)
                    && self.node(a.expression, b.expression)
                    && self.opt_token(&a.semicolon, &b.semicolon)
            }
            NodeKind::ExpressionStatement(a) => {
                let NodeKind::ExpressionStatement(b) = other else { return false };
                self.node(a.expression, b.expression) && self.opt_token(&a.semicolon, &b.semicolon)
            }
            NodeKind::ExtendsClause(a) => {
                let NodeKind::ExtendsClause(b) = other else { return false };
                self.token(&a.keyword, &b.keyword) && self.node(a.superclass, b.superclass)
            }
            NodeKind::FieldDeclaration(a) => {
                let NodeKind::FieldDeclaration(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.opt_token(&a.static_keyword, &b.static_keyword)
                    && self.node(a.fields, b.fields)
                    && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::FieldFormalParameter(a) => {
                let NodeKind::FieldFormalParameter(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.opt_token(&a.keyword, &b.keyword)
                    && self.opt(a.ty, b.ty)
                    && self.token(&a.this_keyword, &b.this_keyword)
                    && self.token(&a.period, &b.period)
                    && self.node(a.identifier, b.identifier)
                    && self.opt(a.parameters, b.parameters)
            }
            NodeKind::ForEachStatement(a) => {
                let NodeKind::ForEachStatement(b) = other else { return false };
                self.opt_token(&a.await_keyword, &b.await_keyword)
                    && self.token(&a.for_keyword, &b.for_keyword)
                    && self.token(&a.left_parenthesis, &b.left_parenthesis)
                    && self.opt(a.loop_variable, b.loop_variable)
                    && self.opt(a.identifier, b.identifier)
                    && self.token(&a.in_keyword, &b.in_keyword)
                    && self.node(a.iterable, b.iterable)
                    && self.token(&a.right_parenthesis, &b.right_parenthesis)
                    && self.node(a.body, b.body)
            }
            NodeKind::FormalParameterList(a) => {
                let NodeKind::FormalParameterList(b) = other else { return false };
                self.token(&a.left_parenthesis, &b.left_parenthesis)
                    && self.list(&a.parameters, &b.parameters)
                    && self.opt_token(&a.left_delimiter, &b.left_delimiter)
                    && self.opt_token(&a.right_delimiter, &b.right_delimiter)
                    && self.token(&a.right_parenthesis, &b.right_parenthesis)
            }
            NodeKind::ForStatement(a) => {
                let NodeKind::ForStatement(b) = other else { return false };
                self.token(&a.for_keyword, &b.for_keyword)
                    && self.token(&a.left_parenthesis, &b.left_parenthesis)
                    && self.opt(a.variables, b.variables)
                    && self.opt(a.initialization, b.initialization)
                    && self.token(&a.left_separator, &b.left_separator)
                    && self.opt(a.condition, b.condition)
                    && self.token(&a.right_separator, &b.right_separator)
                    && self.list(&a.updaters, &b.updaters)
                    && self.token(&a.right_parenthesis, &b.right_parenthesis)
                    && self.node(a.body, b.body)
            }
            NodeKind::FunctionDeclaration(a) => {
                let NodeKind::FunctionDeclaration(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.opt_token(&a.external_keyword, &b.external_keyword)
                    && self.opt(a.return_type, b.return_type)
                    && self.opt_token(&a.property_keyword, &b.property_keyword)
                    && self.node(a.name, b.name)
                    && self.node(a.function_expression, b.function_expression)
            }
            NodeKind::FunctionDeclarationStatement(a) => {
                let NodeKind::FunctionDeclarationStatement(b) = other else { return false };
                self.node(a.function_declaration, b.function_declaration)
            }
            NodeKind::FunctionExpression(a) => {
                let NodeKind::FunctionExpression(b) = other else { return false };
                self.opt(a.parameters, b.parameters) && self.opt(a.body, b.body)
            }
            NodeKind::FunctionExpressionInvocation(a) => {
                let NodeKind::FunctionExpressionInvocation(b) = other else { return false };
                self.node(a.function, b.function) && self.node(a.argument_list, b.argument_list)
            }
            NodeKind::FunctionTypeAlias(a) => {
                let NodeKind::FunctionTypeAlias(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.token(&a.keyword, &b.keyword)
                    && self.opt(a.return_type, b.return_type)
                    && self.node(a.name, b.name)
                    && self.opt(a.type_parameters, b.type_parameters)
                    && self.node(a.parameters, b.parameters)
                    && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::FunctionTypedFormalParameter(a) => {
                let NodeKind::FunctionTypedFormalParameter(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.opt(a.return_type, b.return_type)
                    && self.node(a.identifier, b.identifier)
                    && self.node(a.parameters, b.parameters)
            }
            NodeKind::HideCombinator(a) => {
                let NodeKind::HideCombinator(b) = other else { return false };
                self.token(&a.keyword, &b.keyword) && self.list(&a.hidden_names, &b.hidden_names)
            }
            NodeKind::IfStatement(a) => {
                let NodeKind::IfStatement(b) = other else { return false };
                self.token(&a.if_keyword, &b.if_keyword)
                    && self.token(&a.left_parenthesis, &b.left_parenthesis)
                    && self.node(a.condition, b.condition)
                    && self.token(&a.right_parenthesis, &b.right_parenthesis)
                    && self.node(a.then_statement, b.then_statement)
                    && self.opt_token(&a.else_keyword, &b.else_keyword)
                    && self.opt(a.else_statement, b.else_statement)
            }
            NodeKind::ImplementsClause(a) => {
                let NodeKind::ImplementsClause(b) = other else { return false };
                self.token(&a.keyword, &b.keyword) && self.list(&a.interfaces, &b.interfaces)
            }
            NodeKind::ImportDirective(a) => {
                let NodeKind::ImportDirective(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.token(&a.keyword, &b.keyword)
                    && self.node(a.uri, b.uri)
                    && self.opt_token(&a.deferred_keyword, &b.deferred_keyword)
                    && self.opt_token(&a.as_keyword, &b.as_keyword)
                    && self.opt(a.prefix, b.prefix)
                    && self.list(&a.combinators, &b.combinators)
                    && self.token(&a.semicolon, &b.semicolon)
                    && a.uri_content == b.uri_content
            }
            NodeKind::IndexExpression(a) => {
                let NodeKind::IndexExpression(b) = other else { return false };
                self.opt(a.target, b.target)
                    && self.opt_token(&a.period, &b.period)
                    && self.token(&a.left_bracket, &b.left_bracket)
                    && self.node(a.index, b.index)
                    && self.token(&a.right_bracket, &b.right_bracket)
            }
            NodeKind::InstanceCreationExpression(a) => {
                let NodeKind::InstanceCreationExpression(b) = other else { return false };
                self.token(&a.keyword, &b.keyword)
                    && self.node(a.constructor_name, b.constructor_name)
                    && self.node(a.argument_list, b.argument_list)
            }
            NodeKind::IntegerLiteral(a) => {
                let NodeKind::IntegerLiteral(b) = other else { return false };
                self.token(&a.literal, &b.literal) && a.value == b.value
            }
            NodeKind::InterpolationExpression(a) => {
                let NodeKind::InterpolationExpression(b) = other else { return false };
                self.token(&a.left_bracket, &b.left_bracket)
                    && self.node(a.expression, b.expression)
                    && self.opt_token(&a.right_bracket, &b.right_bracket)
            }
            NodeKind::InterpolationString(a) => {
                let NodeKind::InterpolationString(b) = other else { return false };
                self.token(&a.contents, &b.contents) && a.value == b.value
            }
            NodeKind::IsExpression(a) => {
                let NodeKind::IsExpression(b) = other else { return false };
                self.node(a.expression, b.expression)
                    && self.token(&a.is_operator, &b.is_operator)
                    && self.opt_token(&a.not_operator, &b.not_operator)
                    && self.node(a.ty, b.ty)
            }
            NodeKind::Label(a) => {
                let NodeKind::Label(b) = other else { return false };
                self.node(a.label, b.label) && self.token(&a.colon, &b.colon)
            }
            NodeKind::LabeledStatement(a) => {
                let NodeKind::LabeledStatement(b) = other else { return false };
                self.list(&a.labels, &b.labels) && self.node(a.statement, b.statement)
            }
            NodeKind::LibraryDirective(a) => {
                let NodeKind::LibraryDirective(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.token(&a.library_keyword, &b.library_keyword)
                    && self.node(a.name, b.name)
                    && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::LibraryIdentifier(a) => {
                let NodeKind::LibraryIdentifier(b) = other else { return false };
                self.list(&a.components, &b.components)
            }
            NodeKind::ListLiteral(a) => {
                let NodeKind::ListLiteral(b) = other else { return false };
                self.opt_token(&a.const_keyword, &b.const_keyword)
                    && self.opt(a.type_arguments, b.type_arguments)
                    && self.token(&a.left_bracket, &b.left_bracket)
                    && self.list(&a.elements, &b.elements)
                    && self.token(&a.right_bracket, &b.right_bracket)
            }
            NodeKind::MapLiteral(a) => {
                let NodeKind::MapLiteral(b) = other else { return false };
                self.opt_token(&a.const_keyword, &b.const_keyword)
                    && self.opt(a.type_arguments, b.type_arguments)
                    && self.token(&a.left_bracket, &b.left_bracket)
                    && self.list(&a.entries, &b.entries)
                    && self.token(&a.right_bracket, &b.right_bracket)
            }
            NodeKind::MapLiteralEntry(a) => {
                let NodeKind::MapLiteralEntry(b) = other else { return false };
                self.node(a.key, b.key)
                    && self.token(&a.separator, &b.separator)
                    && self.node(a.value, b.value)
            }
            NodeKind::MethodDeclaration(a) => {
                let NodeKind::MethodDeclaration(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.opt_token(&a.external_keyword, &b.external_keyword)
                    && self.opt_token(&a.modifier_keyword, &b.modifier_keyword)
                    && self.opt(a.return_type, b.return_type)
                    && self.opt_token(&a.property_keyword, &b.property_keyword)
                    && self.opt_token(&a.operator_keyword, &b.operator_keyword)
                    && self.node(a.name, b.name)
                    && self.opt(a.parameters, b.parameters)
                    && self.node(a.body, b.body)
            }
            NodeKind::MethodInvocation(a) => {
                let NodeKind::MethodInvocation(b) = other else { return false };
                self.opt(a.target, b.target)
                    && self.opt_token(&a.period, &b.period)
                    && self.node(a.method_name, b.method_name)
                    && self.node(a.argument_list, b.argument_list)
            }
            NodeKind::NamedExpression(a) => {
                let NodeKind::NamedExpression(b) = other else { return false };
                self.node(a.name, b.name) && self.node(a.expression, b.expression)
            }
            NodeKind::NativeClause(a) => {
                let NodeKind::NativeClause(b) = other else { return false };
                self.token(&a.keyword, &b.keyword) && self.opt(a.name, b.name)
            }
            NodeKind::NativeFunctionBody(a) => {
                let NodeKind::NativeFunctionBody(b) = other else { return false };
                self.token(&a.native_keyword, &b.native_keyword)
                    && self.opt(a.string_literal, b.string_literal)
                    && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::NullLiteral(a) => {
                let NodeKind::NullLiteral(b) = other else { return false };
                self.token(&a.literal, &b.literal)
            }
            NodeKind::ParenthesizedExpression(a) => {
                let NodeKind::ParenthesizedExpression(b) = other else { return false };
                self.token(&a.left_parenthesis, &b.left_parenthesis)
                    && self.node(a.expression, b.expression)
                    && self.token(&a.right_parenthesis, &b.right_parenthesis)
            }
            NodeKind::PartDirective(a) => {
                let NodeKind::PartDirective(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.token(&a.part_keyword, &b.part_keyword)
                    && self.node(a.uri, b.uri)
                    && self.token(&a.semicolon, &b.semicolon)
                    && a.uri_content == b.uri_content
            }
            NodeKind::PartOfDirective(a) => {
                let NodeKind::PartOfDirective(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.token(&a.part_keyword, &b.part_keyword)
                    && self.token(&a.of_keyword, &b.of_keyword)
                    && self.node(a.library_name, b.library_name)
                    && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::PostfixExpression(a) => {
                let NodeKind::PostfixExpression(b) = other else { return false };
                self.node(a.operand, b.operand) && self.token(&a.operator, &b.operator)
            }
            NodeKind::PrefixedIdentifier(a) => {
                let NodeKind::PrefixedIdentifier(b) = other else { return false };
                self.node(a.prefix, b.prefix)
                    && self.token(&a.period, &b.period)
                    && self.node(a.identifier, b.identifier)
            }
            NodeKind::PrefixExpression(a) => {
                let NodeKind::PrefixExpression(b) = other else { return false };
                self.token(&a.operator, &b.operator) && self.node(a.operand, b.operand)
            }
            NodeKind::PropertyAccess(a) => {
                let NodeKind::PropertyAccess(b) = other else { return false };
                self.opt(a.target, b.target)
                    && self.token(&a.operator, &b.operator)
                    && self.node(a.property_name, b.property_name)
            }
            NodeKind::RedirectingConstructorInvocation(a) => {
                let NodeKind::RedirectingConstructorInvocation(b) = other else { return false };
                self.token(&a.keyword, &b.keyword)
                    && self.opt_token(&a.period, &b.period)
                    && self.opt(a.constructor_name, b.constructor_name)
                    && self.node(a.argument_list, b.argument_list)
            }
            NodeKind::RethrowExpression(a) => {
                let NodeKind::RethrowExpression(b) = other else { return false };
                self.token(&a.keyword, &b.keyword)
            }
            NodeKind::ReturnStatement(a) => {
                let NodeKind::ReturnStatement(b) = other else { return false };
                self.token(&a.keyword, &b.keyword)
                    && self.opt(a.expression, b.expression)
                    && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::ScriptTag(a) => {
                let NodeKind::ScriptTag(b) = other else { return false };
                self.token(&a.script_tag, &b.script_tag)
            }
            NodeKind::ShowCombinator(a) => {
                let NodeKind::ShowCombinator(b) = other else { return false };
                self.token(&a.keyword, &b.keyword) && self.list(&a.shown_names, &b.shown_names)
            }
            NodeKind::SimpleFormalParameter(a) => {
                let NodeKind::SimpleFormalParameter(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.opt_token(&a.keyword, &b.keyword)
                    && self.opt(a.ty, b.ty)
                    && self.node(a.identifier, b.identifier)
            }
            NodeKind::SimpleIdentifier(a) => {
                let NodeKind::SimpleIdentifier(b) = other else { return false };
                self.token(&a.token, &b.token)
            }
            NodeKind::SimpleStringLiteral(a) => {
                let NodeKind::SimpleStringLiteral(b) = other else { return false };
                self.token(&a.literal, &b.literal) && a.value == b.value
            }
            NodeKind::StringInterpolation(a) => {
                let NodeKind::StringInterpolation(b) = other else { return false };
                self.list(&a.elements, &b.elements)
            }
            NodeKind::SuperConstructorInvocation(a) => {
                let NodeKind::SuperConstructorInvocation(b) = other else { return false };
                self.token(&a.keyword, &b.keyword)
                    && self.opt_token(&a.period, &b.period)
                    && self.opt(a.constructor_name, b.constructor_name)
                    && self.node(a.argument_list, b.argument_list)
            }
            NodeKind::SuperExpression(a) => {
                let NodeKind::SuperExpression(b) = other else { return false };
                self.token(&a.keyword, &b.keyword)
            }
            NodeKind::SwitchCase(a) => {
                let NodeKind::SwitchCase(b) = other else { return false };
                self.list(&a.labels, &b.labels)
                    && self.token(&a.keyword, &b.keyword)
                    && self.node(a.expression, b.expression)
                    && self.token(&a.colon, &b.colon)
                    && self.list(&a.statements, &b.statements)
            }
            NodeKind::SwitchDefault(a) => {
                let NodeKind::SwitchDefault(b) = other else { return false };
                self.list(&a.labels, &b.labels)
                    && self.token(&a.keyword, &b.keyword)
                    && self.token(&a.colon, &b.colon)
                    && self.list(&a.statements, &b.statements)
            }
            NodeKind::SwitchStatement(a) => {
                let NodeKind::SwitchStatement(b) = other else { return false };
                self.token(&a.keyword, &b.keyword)
                    && self.token(&a.left_parenthesis, &b.left_parenthesis)
                    && self.node(a.expression, b.expression)
                    && self.token(&a.right_parenthesis, &b.right_parenthesis)
                    && self.token(&a.left_bracket, &b.left_bracket)
                    && self.list(&a.members, &b.members)
                    && self.token(&a.right_bracket, &b.right_bracket)
            }
            NodeKind::SymbolLiteral(a) => {
                let NodeKind::SymbolLiteral(b) = other else { return false };
                self.token(&a.pound_sign, &b.pound_sign)
                    && self.tokens(&a.components, &b.components)
            }
            NodeKind::ThisExpression(a) => {
                let NodeKind::ThisExpression(b) = other else { return false };
                self.token(&a.keyword, &b.keyword)
            }
            NodeKind::ThrowExpression(a) => {
                let NodeKind::ThrowExpression(b) = other else { return false };
                self.token(&a.keyword, &b.keyword) && self.node(a.expression, b.expression)
            }
            NodeKind::TopLevelVariableDeclaration(a) => {
                let NodeKind::TopLevelVariableDeclaration(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.node(a.variables, b.variables)
                    && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::TryStatement(a) => {
                let NodeKind::TryStatement(b) = other else { return false };
                self.token(&a.try_keyword, &b.try_keyword)
                    && self.node(a.body, b.body)
                    && self.list(&a.catch_clauses, &b.catch_clauses)
                    && self.opt_token(&a.finally_keyword, &b.finally_keyword)
                    && self.opt(a.finally_block, b.finally_block)
            }
            NodeKind::TypeArgumentList(a) => {
                let NodeKind::TypeArgumentList(b) = other else { return false };
                self.token(&a.left_bracket, &b.left_bracket)
                    && self.list(&a.arguments, &b.arguments)
                    && self.token(&a.right_bracket, &b.right_bracket)
            }
            NodeKind::TypeName(a) => {
                let NodeKind::TypeName(b) = other else { return false };
                self.node(a.name, b.name) && self.opt(a.type_arguments, b.type_arguments)
            }
            NodeKind::TypeParameter(a) => {
                let NodeKind::TypeParameter(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.node(a.name, b.name)
                    && self.opt_token(&a.keyword, &b.keyword)
                    && self.opt(a.bound, b.bound)
            }
            NodeKind::TypeParameterList(a) => {
                let NodeKind::TypeParameterList(b) = other else { return false };
                self.token(&a.left_bracket, &b.left_bracket)
                    && self.list(&a.type_parameters, &b.type_parameters)
                    && self.token(&a.right_bracket, &b.right_bracket)
            }
            NodeKind::VariableDeclaration(a) => {
                let NodeKind::VariableDeclaration(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.node(a.name, b.name)
                    && self.opt_token(&a.equals, &b.equals)
                    && self.opt(a.initializer, b.initializer)
            }
            NodeKind::VariableDeclarationList(a) => {
                let NodeKind::VariableDeclarationList(b) = other else { return false };
                self.header(&a.header, &b.header)
                    && self.opt_token(&a.keyword, &b.keyword)
                    && self.opt(a.ty, b.ty)
                    && self.list(&a.variables, &b.variables)
            }
            NodeKind::VariableDeclarationStatement(a) => {
                let NodeKind::VariableDeclarationStatement(b) = other else { return false };
                self.node(a.variables, b.variables) && self.token(&a.semicolon, &b.semicolon)
            }
            NodeKind::WhileStatement(a) => {
                let NodeKind::WhileStatement(b) = other else { return false };
                self.token(&a.keyword, &b.keyword)
                    && self.token(&a.left_parenthesis, &b.left_parenthesis)
                    && self.node(a.condition, b.condition)
                    && self.token(&a.right_parenthesis, &b.right_parenthesis)
                    && self.node(a.body, b.body)
            }
            NodeKind::WithClause(a) => {
                let NodeKind::WithClause(b) = other else { return false };
                self.token(&a.with_keyword, &b.with_keyword)
                    && self.list(&a.mixin_types, &b.mixin_types)
            }
            NodeKind::YieldStatement(a) => {
                let NodeKind::YieldStatement(b) = other else { return false };
                self.token(&a.yield_keyword, &b.yield_keyword)
                    && self.opt_token(&a.star, &b.star)
                    && self.node(a.expression, b.expression)
                    && self.token(&a.semicolon, &b.semicolon)
            }
        }
    }

    fn opt(&self, first: Option<NodeId>, second: Option<NodeId>) -> bool {
        match (first, second) {
            (None, None) => true,
            (Some(first), Some(second)) => self.node(first, second),
            _ => false,
        }
    }

    fn list(&self, first: &[NodeId], second: &[NodeId]) -> bool {
        first.len() == second.len()
            && first.iter().zip(second).all(|(&first, &second)| self.node(first, second))
    }

    fn header(&self, first: &DeclarationHeader, second: &DeclarationHeader) -> bool {
        self.opt(first.documentation_comment, second.documentation_comment)
            && self.list(&first.metadata, &second.metadata)
    }

    fn token(&self, first: &Token, second: &Token) -> bool {
        match self.tokens {
            TokenComparison::Exact => first.is_equal(second),
            TokenComparison::Lexeme => first.same_lexeme(second),
        }
    }

    fn opt_token(&self, first: &Option<Token>, second: &Option<Token>) -> bool {
        match (first, second) {
            (None, None) => true,
            (Some(first), Some(second)) => self.token(first, second),
            _ => false,
        }
    }

    fn tokens(&self, first: &[Token], second: &[Token]) -> bool {
        first.len() == second.len()
            && first.iter().zip(second).all(|(first, second)| self.token(first, second))
    }
}
