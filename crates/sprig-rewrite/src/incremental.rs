use sprig_span::{Token, TokenMap};
use sprig_syntax::nodes::*;
use sprig_syntax::{Ast, NodeId};

use crate::cloner::AstCloner;

/// Result of [`IncrementalAstCloner::clone_tree`].
#[derive(Debug)]
pub struct IncrementalClone {
    pub tree: Ast,
    pub root: NodeId,
    /// Where the replacement landed in `tree`, if the old node was reached.
    pub replacement: Option<NodeId>,
}

impl IncrementalClone {
    pub fn substituted(&self) -> bool {
        self.replacement.is_some()
    }
}

/// Clones a resolved tree for incremental re-analysis.
///
/// The copy is structurally identical to the source except that `old_node` is replaced by
/// a verbatim copy of `new_node`. Every token is remapped through the token map, falling
/// back to the original token when the map has no entry for it, and every node keeps the
/// annotations its variant declares.
pub struct IncrementalAstCloner<'a> {
    source: &'a Ast,
    old_node: NodeId,
    new_tree: &'a Ast,
    new_node: NodeId,
    token_map: &'a TokenMap,
    target: Ast,
    replacement: Option<NodeId>,
}

impl<'a> IncrementalAstCloner<'a> {
    pub fn new(
        source: &'a Ast,
        old_node: NodeId,
        new_tree: &'a Ast,
        new_node: NodeId,
        token_map: &'a TokenMap,
    ) -> Self {
        Self {
            source,
            old_node,
            new_tree,
            new_node,
            token_map,
            target: Ast::with_capacity(source.len()),
            replacement: None,
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(root = ?root, old = ?self.old_node))]
    pub fn clone_tree(mut self, root: NodeId) -> IncrementalClone {
        let root = self.clone_node(root);
        self.target.set_root(root);

        if self.replacement.is_none() {
            tracing::debug!("old node is not reachable from the root, nothing was substituted");
        }

        IncrementalClone { tree: self.target, root, replacement: self.replacement }
    }

    fn clone_node(&mut self, node: NodeId) -> NodeId {
        if node == self.old_node {
            let replacement = AstCloner::new(self.new_tree, &mut self.target)
                .keep_annotations()
                .clone_node(self.new_node);
            self.replacement = Some(replacement);
            return replacement;
        }

        let source = self.source;
        let slots = source.kind(node).annotation_slots();
        let kind: NodeKind = match source.kind(node) {
            NodeKind::AdjacentStrings(n) => AdjacentStrings {
                strings: self.clone_list(&n.strings),
            }
            .into(),
            NodeKind::Annotation(n) => Annotation {
                at_sign: self.map_token(&n.at_sign),
                name: self.clone_node(n.name),
                period: self.map_opt_token(&n.period),
                constructor_name: self.clone_opt(n.constructor_name),
                arguments: self.clone_opt(n.arguments),
            }
            .into(),
            NodeKind::ArgumentList(n) => ArgumentList {
                left_parenthesis: self.map_token(&n.left_parenthesis),
                arguments: self.clone_list(&n.arguments),
                right_parenthesis: self.map_token(&n.right_parenthesis),
            }
            .into(),
            NodeKind::AsExpression(n) => AsExpression {
                expression: self.clone_node(n.expression),
                as_operator: self.map_token(&n.as_operator),
                ty: self.clone_node(n.ty),
            }
            .into(),
            NodeKind::AssertStatement(n) => AssertStatement {
                keyword: self.map_token(&n.keyword),
                left_parenthesis: self.map_token(&n.left_parenthesis),
                condition: self.clone_node(n.condition),
                right_parenthesis: self.map_token(&n.right_parenthesis),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::AssignmentExpression(n) => AssignmentExpression {
                left_hand_side: self.clone_node(n.left_hand_side),
                operator: self.map_token(&n.operator),
                right_hand_side: self.clone_node(n.right_hand_side),
            }
            .into(),
            NodeKind::AwaitExpression(n) => AwaitExpression {
                await_keyword: self.map_token(&n.await_keyword),
                expression: self.clone_node(n.expression),
            }
            .into(),
            NodeKind::BinaryExpression(n) => BinaryExpression {
                left_operand: self.clone_node(n.left_operand),
                operator: self.map_token(&n.operator),
                right_operand: self.clone_node(n.right_operand),
            }
            .into(),
            NodeKind::Block(n) => Block {
                left_bracket: self.map_token(&n.left_bracket),
                statements: self.clone_list(&n.statements),
                right_bracket: self.map_token(&n.right_bracket),
            }
            .into(),
            NodeKind::BlockFunctionBody(n) => BlockFunctionBody {
                keyword: self.map_opt_token(&n.keyword),
                star: self.map_opt_token(&n.star),
                block: self.clone_node(n.block),
            }
            .into(),
            NodeKind::BooleanLiteral(n) => BooleanLiteral {
                literal: self.map_token(&n.literal),
                value: n.value,
            }
            .into(),
            NodeKind::BreakStatement(n) => BreakStatement {
                keyword: self.map_token(&n.keyword),
                label: self.clone_opt(n.label),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::CascadeExpression(n) => CascadeExpression {
                target: self.clone_node(n.target),
                cascade_sections: self.clone_list(&n.cascade_sections),
            }
            .into(),
            NodeKind::CatchClause(n) => CatchClause {
                on_keyword: self.map_opt_token(&n.on_keyword),
                exception_type: self.clone_opt(n.exception_type),
                catch_keyword: self.map_opt_token(&n.catch_keyword),
                left_parenthesis: self.map_opt_token(&n.left_parenthesis),
                exception_parameter: self.clone_opt(n.exception_parameter),
                comma: self.map_opt_token(&n.comma),
                stack_trace_parameter: self.clone_opt(n.stack_trace_parameter),
                right_parenthesis: self.map_opt_token(&n.right_parenthesis),
                body: self.clone_node(n.body),
            }
            .into(),
            NodeKind::ClassDeclaration(n) => ClassDeclaration {
                header: self.clone_header(&n.header),
                abstract_keyword: self.map_opt_token(&n.abstract_keyword),
                class_keyword: self.map_token(&n.class_keyword),
                name: self.clone_node(n.name),
                type_parameters: self.clone_opt(n.type_parameters),
                extends_clause: self.clone_opt(n.extends_clause),
                with_clause: self.clone_opt(n.with_clause),
                implements_clause: self.clone_opt(n.implements_clause),
                native_clause: self.clone_opt(n.native_clause),
                left_bracket: self.map_token(&n.left_bracket),
                members: self.clone_list(&n.members),
                right_bracket: self.map_token(&n.right_bracket),
            }
            .into(),
            NodeKind::ClassTypeAlias(n) => ClassTypeAlias {
                header: self.clone_header(&n.header),
                keyword: self.map_token(&n.keyword),
                name: self.clone_node(n.name),
                type_parameters: self.clone_opt(n.type_parameters),
                equals: self.map_token(&n.equals),
                abstract_keyword: self.map_opt_token(&n.abstract_keyword),
                superclass: self.clone_node(n.superclass),
                with_clause: self.clone_opt(n.with_clause),
                implements_clause: self.clone_opt(n.implements_clause),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::Comment(n) => Comment {
                kind: n.kind,
                tokens: self.map_tokens(&n.tokens),
                references: self.clone_list(&n.references),
            }
            .into(),
            NodeKind::CommentReference(n) => CommentReference {
                new_keyword: self.map_opt_token(&n.new_keyword),
                identifier: self.clone_node(n.identifier),
            }
            .into(),
            NodeKind::CompilationUnit(n) => CompilationUnit {
                begin_token: self.map_token(&n.begin_token),
                script_tag: self.clone_opt(n.script_tag),
                directives: self.clone_list(&n.directives),
                declarations: self.clone_list(&n.declarations),
                end_token: self.map_token(&n.end_token),
                line_info: n.line_info.clone(),
            }
            .into(),
            NodeKind::ConditionalExpression(n) => ConditionalExpression {
                condition: self.clone_node(n.condition),
                question: self.map_token(&n.question),
                then_expression: self.clone_node(n.then_expression),
                colon: self.map_token(&n.colon),
                else_expression: self.clone_node(n.else_expression),
            }
            .into(),
            NodeKind::ConstructorDeclaration(n) => ConstructorDeclaration {
                header: self.clone_header(&n.header),
                external_keyword: self.map_opt_token(&n.external_keyword),
                const_keyword: self.map_opt_token(&n.const_keyword),
                factory_keyword: self.map_opt_token(&n.factory_keyword),
                return_type: self.clone_node(n.return_type),
                period: self.map_opt_token(&n.period),
                name: self.clone_opt(n.name),
                parameters: self.clone_node(n.parameters),
                separator: self.map_opt_token(&n.separator),
                initializers: self.clone_list(&n.initializers),
                redirected_constructor: self.clone_opt(n.redirected_constructor),
                body: self.clone_opt(n.body),
            }
            .into(),
            NodeKind::ConstructorFieldInitializer(n) => ConstructorFieldInitializer {
                this_keyword: self.map_opt_token(&n.this_keyword),
                period: self.map_opt_token(&n.period),
                field_name: self.clone_node(n.field_name),
                equals: self.map_token(&n.equals),
                expression: self.clone_node(n.expression),
            }
            .into(),
            NodeKind::ConstructorName(n) => ConstructorName {
                ty: self.clone_node(n.ty),
                period: self.map_opt_token(&n.period),
                name: self.clone_opt(n.name),
            }
            .into(),
            NodeKind::ContinueStatement(n) => ContinueStatement {
                keyword: self.map_token(&n.keyword),
                label: self.clone_opt(n.label),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::DeclaredIdentifier(n) => DeclaredIdentifier {
                header: self.clone_header(&n.header),
                keyword: self.map_opt_token(&n.keyword),
                ty: self.clone_opt(n.ty),
                identifier: self.clone_node(n.identifier),
            }
            .into(),
            NodeKind::DefaultFormalParameter(n) => DefaultFormalParameter {
                parameter: self.clone_node(n.parameter),
                kind: n.kind,
                separator: self.map_opt_token(&n.separator),
                default_value: self.clone_opt(n.default_value),
            }
            .into(),
            NodeKind::DoStatement(n) => DoStatement {
                do_keyword: self.map_token(&n.do_keyword),
                body: self.clone_node(n.body),
                while_keyword: self.map_token(&n.while_keyword),
                left_parenthesis: self.map_token(&n.left_parenthesis),
                condition: self.clone_node(n.condition),
                right_parenthesis: self.map_token(&n.right_parenthesis),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::DoubleLiteral(n) => DoubleLiteral {
                literal: self.map_token(&n.literal),
                value: n.value,
            }
            .into(),
            NodeKind::EmptyFunctionBody(n) => EmptyFunctionBody {
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::EmptyStatement(n) => EmptyStatement {
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::EnumConstantDeclaration(n) => EnumConstantDeclaration {
                header: self.clone_header(&n.header),
                name: self.clone_node(n.name),
            }
            .into(),
            NodeKind::EnumDeclaration(n) => EnumDeclaration {
                header: self.clone_header(&n.header),
                keyword: self.map_token(&n.keyword),
                name: self.clone_node(n.name),
                left_bracket: self.map_token(&n.left_bracket),
                constants: self.clone_list(&n.constants),
                right_bracket: self.map_token(&n.right_bracket),
            }
            .into(),
            NodeKind::ExportDirective(n) => ExportDirective {
                header: self.clone_header(&n.header),
                keyword: self.map_token(&n.keyword),
                uri: self.clone_node(n.uri),
                combinators: self.clone_list(&n.combinators),
                semicolon: self.map_token(&n.semicolon),
                uri_content: n.uri_content.clone(),
            }
            .into(),
            NodeKind::ExpressionFunctionBody(n) => ExpressionFunctionBody {
                keyword: self.map_opt_token(&n.keyword),
                function_definition: self.map_token(&n.function_definition),
                expression: self.clone_node(n.expression),
                semicolon: self.map_opt_token(&n.semicolon),
            }
            .into(),
            NodeKind::ExpressionStatement(n) => ExpressionStatement {
                expression: self.clone_node(n.expression),
                semicolon: self.map_opt_token(&n.semicolon),
            }
            .into(),
            NodeKind::ExtendsClause(n) => ExtendsClause {
                keyword: self.map_token(&n.keyword),
                superclass: self.clone_node(n.superclass),
            }
            .into(),
            NodeKind::FieldDeclaration(n) => FieldDeclaration {
                header: self.clone_header(&n.header),
                static_keyword: self.map_opt_token(&n.static_keyword),
                fields: self.clone_node(n.fields),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::FieldFormalParameter(n) => FieldFormalParameter {
                header: self.clone_header(&n.header),
                keyword: self.map_opt_token(&n.keyword),
                ty: self.clone_opt(n.ty),
                this_keyword: self.map_token(&n.this_keyword),
                period: self.map_token(&n.period),
                identifier: self.clone_node(n.identifier),
                parameters: self.clone_opt(n.parameters),
            }
            .into(),
            NodeKind::ForEachStatement(n) => ForEachStatement {
                await_keyword: self.map_opt_token(&n.await_keyword),
                for_keyword: self.map_token(&n.for_keyword),
                left_parenthesis: self.map_token(&n.left_parenthesis),
                loop_variable: self.clone_opt(n.loop_variable),
                identifier: self.clone_opt(n.identifier),
                in_keyword: self.map_token(&n.in_keyword),
                iterable: self.clone_node(n.iterable),
                right_parenthesis: self.map_token(&n.right_parenthesis),
                body: self.clone_node(n.body),
            }
            .into(),
            NodeKind::FormalParameterList(n) => FormalParameterList {
                left_parenthesis: self.map_token(&n.left_parenthesis),
                parameters: self.clone_list(&n.parameters),
                left_delimiter: self.map_opt_token(&n.left_delimiter),
                right_delimiter: self.map_opt_token(&n.right_delimiter),
                right_parenthesis: self.map_token(&n.right_parenthesis),
            }
            .into(),
            NodeKind::ForStatement(n) => ForStatement {
                for_keyword: self.map_token(&n.for_keyword),
                left_parenthesis: self.map_token(&n.left_parenthesis),
                variables: self.clone_opt(n.variables),
                initialization: self.clone_opt(n.initialization),
                left_separator: self.map_token(&n.left_separator),
                condition: self.clone_opt(n.condition),
                right_separator: self.map_token(&n.right_separator),
                updaters: self.clone_list(&n.updaters),
                right_parenthesis: self.map_token(&n.right_parenthesis),
                body: self.clone_node(n.body),
            }
            .into(),
            NodeKind::FunctionDeclaration(n) => FunctionDeclaration {
                header: self.clone_header(&n.header),
                external_keyword: self.map_opt_token(&n.external_keyword),
                return_type: self.clone_opt(n.return_type),
                property_keyword: self.map_opt_token(&n.property_keyword),
                name: self.clone_node(n.name),
                function_expression: self.clone_node(n.function_expression),
            }
            .into(),
            NodeKind::FunctionDeclarationStatement(n) => FunctionDeclarationStatement {
                function_declaration: self.clone_node(n.function_declaration),
            }
            .into(),
            NodeKind::FunctionExpression(n) => FunctionExpression {
                parameters: self.clone_opt(n.parameters),
                body: self.clone_opt(n.body),
            }
            .into(),
            NodeKind::FunctionExpressionInvocation(n) => FunctionExpressionInvocation {
                function: self.clone_node(n.function),
                argument_list: self.clone_node(n.argument_list),
            }
            .into(),
            NodeKind::FunctionTypeAlias(n) => FunctionTypeAlias {
                header: self.clone_header(&n.header),
                keyword: self.map_token(&n.keyword),
                return_type: self.clone_opt(n.return_type),
                name: self.clone_node(n.name),
                type_parameters: self.clone_opt(n.type_parameters),
                parameters: self.clone_node(n.parameters),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::FunctionTypedFormalParameter(n) => FunctionTypedFormalParameter {
                header: self.clone_header(&n.header),
                return_type: self.clone_opt(n.return_type),
                identifier: self.clone_node(n.identifier),
                parameters: self.clone_node(n.parameters),
            }
            .into(),
            NodeKind::HideCombinator(n) => HideCombinator {
                keyword: self.map_token(&n.keyword),
                hidden_names: self.clone_list(&n.hidden_names),
            }
            .into(),
            NodeKind::IfStatement(n) => IfStatement {
                if_keyword: self.map_token(&n.if_keyword),
                left_parenthesis: self.map_token(&n.left_parenthesis),
                condition: self.clone_node(n.condition),
                right_parenthesis: self.map_token(&n.right_parenthesis),
                then_statement: self.clone_node(n.then_statement),
                else_keyword: self.map_opt_token(&n.else_keyword),
                else_statement: self.clone_opt(n.else_statement),
            }
            .into(),
            NodeKind::ImplementsClause(n) => ImplementsClause {
                keyword: self.map_token(&n.keyword),
                interfaces: self.clone_list(&n.interfaces),
            }
            .into(),
            NodeKind::ImportDirective(n) => ImportDirective {
                header: self.clone_header(&n.header),
                keyword: self.map_token(&n.keyword),
                uri: self.clone_node(n.uri),
                deferred_keyword: self.map_opt_token(&n.deferred_keyword),
                as_keyword: self.map_opt_token(&n.as_keyword),
                prefix: self.clone_opt(n.prefix),
                combinators: self.clone_list(&n.combinators),
                semicolon: self.map_token(&n.semicolon),
                uri_content: n.uri_content.clone(),
            }
            .into(),
            NodeKind::IndexExpression(n) => IndexExpression {
                target: self.clone_opt(n.target),
                period: self.map_opt_token(&n.period),
                left_bracket: self.map_token(&n.left_bracket),
                index: self.clone_node(n.index),
                right_bracket: self.map_token(&n.right_bracket),
            }
            .into(),
            NodeKind::InstanceCreationExpression(n) => InstanceCreationExpression {
                keyword: self.map_token(&n.keyword),
                constructor_name: self.clone_node(n.constructor_name),
                argument_list: self.clone_node(n.argument_list),
            }
            .into(),
            NodeKind::IntegerLiteral(n) => IntegerLiteral {
                literal: self.map_token(&n.literal),
                value: n.value,
            }
            .into(),
            NodeKind::InterpolationExpression(n) => InterpolationExpression {
                left_bracket: self.map_token(&n.left_bracket),
                expression: self.clone_node(n.expression),
                right_bracket: self.map_opt_token(&n.right_bracket),
            }
            .into(),
            NodeKind::InterpolationString(n) => InterpolationString {
                contents: self.map_token(&n.contents),
                value: n.value.clone(),
            }
            .into(),
            NodeKind::IsExpression(n) => IsExpression {
                expression: self.clone_node(n.expression),
                is_operator: self.map_token(&n.is_operator),
                not_operator: self.map_opt_token(&n.not_operator),
                ty: self.clone_node(n.ty),
            }
            .into(),
            NodeKind::Label(n) => Label {
                label: self.clone_node(n.label),
                colon: self.map_token(&n.colon),
            }
            .into(),
            NodeKind::LabeledStatement(n) => LabeledStatement {
                labels: self.clone_list(&n.labels),
                statement: self.clone_node(n.statement),
            }
            .into(),
            NodeKind::LibraryDirective(n) => LibraryDirective {
                header: self.clone_header(&n.header),
                library_keyword: self.map_token(&n.library_keyword),
                name: self.clone_node(n.name),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::LibraryIdentifier(n) => LibraryIdentifier {
                components: self.clone_list(&n.components),
            }
            .into(),
            NodeKind::ListLiteral(n) => ListLiteral {
                const_keyword: self.map_opt_token(&n.const_keyword),
                type_arguments: self.clone_opt(n.type_arguments),
                left_bracket: self.map_token(&n.left_bracket),
                elements: self.clone_list(&n.elements),
                right_bracket: self.map_token(&n.right_bracket),
            }
            .into(),
            NodeKind::MapLiteral(n) => MapLiteral {
                const_keyword: self.map_opt_token(&n.const_keyword),
                type_arguments: self.clone_opt(n.type_arguments),
                left_bracket: self.map_token(&n.left_bracket),
                entries: self.clone_list(&n.entries),
                right_bracket: self.map_token(&n.right_bracket),
            }
            .into(),
            NodeKind::MapLiteralEntry(n) => MapLiteralEntry {
                key: self.clone_node(n.key),
                separator: self.map_token(&n.separator),
                value: self.clone_node(n.value),
            }
            .into(),
            NodeKind::MethodDeclaration(n) => MethodDeclaration {
                header: self.clone_header(&n.header),
                external_keyword: self.map_opt_token(&n.external_keyword),
                modifier_keyword: self.map_opt_token(&n.modifier_keyword),
                return_type: self.clone_opt(n.return_type),
                property_keyword: self.map_opt_token(&n.property_keyword),
                operator_keyword: self.map_opt_token(&n.operator_keyword),
                name: self.clone_node(n.name),
                parameters: self.clone_opt(n.parameters),
                body: self.clone_node(n.body),
            }
            .into(),
            NodeKind::MethodInvocation(n) => MethodInvocation {
                target: self.clone_opt(n.target),
                period: self.map_opt_token(&n.period),
                method_name: self.clone_node(n.method_name),
                argument_list: self.clone_node(n.argument_list),
            }
            .into(),
            NodeKind::NamedExpression(n) => NamedExpression {
                name: self.clone_node(n.name),
                expression: self.clone_node(n.expression),
            }
            .into(),
            NodeKind::NativeClause(n) => NativeClause {
                keyword: self.map_token(&n.keyword),
                name: self.clone_opt(n.name),
            }
            .into(),
            NodeKind::NativeFunctionBody(n) => NativeFunctionBody {
                native_keyword: self.map_token(&n.native_keyword),
                string_literal: self.clone_opt(n.string_literal),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::NullLiteral(n) => NullLiteral { literal: self.map_token(&n.literal) }.into(),
            NodeKind::ParenthesizedExpression(n) => ParenthesizedExpression {
                left_parenthesis: self.map_token(&n.left_parenthesis),
                expression: self.clone_node(n.expression),
                right_parenthesis: self.map_token(&n.right_parenthesis),
            }
            .into(),
            NodeKind::PartDirective(n) => PartDirective {
                header: self.clone_header(&n.header),
                part_keyword: self.map_token(&n.part_keyword),
                uri: self.clone_node(n.uri),
                semicolon: self.map_token(&n.semicolon),
                uri_content: n.uri_content.clone(),
            }
            .into(),
            NodeKind::PartOfDirective(n) => PartOfDirective {
                header: self.clone_header(&n.header),
                part_keyword: self.map_token(&n.part_keyword),
                of_keyword: self.map_token(&n.of_keyword),
                library_name: self.clone_node(n.library_name),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::PostfixExpression(n) => PostfixExpression {
                operand: self.clone_node(n.operand),
                operator: self.map_token(&n.operator),
            }
            .into(),
            NodeKind::PrefixedIdentifier(n) => PrefixedIdentifier {
                prefix: self.clone_node(n.prefix),
                period: self.map_token(&n.period),
                identifier: self.clone_node(n.identifier),
            }
            .into(),
            NodeKind::PrefixExpression(n) => PrefixExpression {
                operator: self.map_token(&n.operator),
                operand: self.clone_node(n.operand),
            }
            .into(),
            NodeKind::PropertyAccess(n) => PropertyAccess {
                target: self.clone_opt(n.target),
                operator: self.map_token(&n.operator),
                property_name: self.clone_node(n.property_name),
            }
            .into(),
            NodeKind::RedirectingConstructorInvocation(n) => RedirectingConstructorInvocation {
                keyword: self.map_token(&n.keyword),
                period: self.map_opt_token(&n.period),
                constructor_name: self.clone_opt(n.constructor_name),
                argument_list: self.clone_node(n.argument_list),
            }
            .into(),
            NodeKind::RethrowExpression(n) => RethrowExpression {
                keyword: self.map_token(&n.keyword),
            }
            .into(),
            NodeKind::ReturnStatement(n) => ReturnStatement {
                keyword: self.map_token(&n.keyword),
                expression: self.clone_opt(n.expression),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::ScriptTag(n) => ScriptTag {
                script_tag: self.map_token(&n.script_tag),
            }
            .into(),
            NodeKind::ShowCombinator(n) => ShowCombinator {
                keyword: self.map_token(&n.keyword),
                shown_names: self.clone_list(&n.shown_names),
            }
            .into(),
            NodeKind::SimpleFormalParameter(n) => SimpleFormalParameter {
                header: self.clone_header(&n.header),
                keyword: self.map_opt_token(&n.keyword),
                ty: self.clone_opt(n.ty),
                identifier: self.clone_node(n.identifier),
            }
            .into(),
            NodeKind::SimpleIdentifier(n) => SimpleIdentifier {
                token: self.map_token(&n.token),
            }
            .into(),
            NodeKind::SimpleStringLiteral(n) => SimpleStringLiteral {
                literal: self.map_token(&n.literal),
                value: n.value.clone(),
            }
            .into(),
            NodeKind::StringInterpolation(n) => StringInterpolation {
                elements: self.clone_list(&n.elements),
            }
            .into(),
            NodeKind::SuperConstructorInvocation(n) => SuperConstructorInvocation {
                keyword: self.map_token(&n.keyword),
                period: self.map_opt_token(&n.period),
                constructor_name: self.clone_opt(n.constructor_name),
                argument_list: self.clone_node(n.argument_list),
            }
            .into(),
            NodeKind::SuperExpression(n) => SuperExpression {
                keyword: self.map_token(&n.keyword),
            }
            .into(),
            NodeKind::SwitchCase(n) => SwitchCase {
                labels: self.clone_list(&n.labels),
                keyword: self.map_token(&n.keyword),
                expression: self.clone_node(n.expression),
                colon: self.map_token(&n.colon),
                statements: self.clone_list(&n.statements),
            }
            .into(),
            NodeKind::SwitchDefault(n) => SwitchDefault {
                labels: self.clone_list(&n.labels),
                keyword: self.map_token(&n.keyword),
                colon: self.map_token(&n.colon),
                statements: self.clone_list(&n.statements),
            }
            .into(),
            NodeKind::SwitchStatement(n) => SwitchStatement {
                keyword: self.map_token(&n.keyword),
                left_parenthesis: self.map_token(&n.left_parenthesis),
                expression: self.clone_node(n.expression),
                right_parenthesis: self.map_token(&n.right_parenthesis),
                left_bracket: self.map_token(&n.left_bracket),
                members: self.clone_list(&n.members),
                right_bracket: self.map_token(&n.right_bracket),
            }
            .into(),
            NodeKind::SymbolLiteral(n) => SymbolLiteral {
                pound_sign: self.map_token(&n.pound_sign),
                components: self.map_tokens(&n.components),
            }
            .into(),
            NodeKind::ThisExpression(n) => ThisExpression {
                keyword: self.map_token(&n.keyword),
            }
            .into(),
            NodeKind::ThrowExpression(n) => ThrowExpression {
                keyword: self.map_token(&n.keyword),
                expression: self.clone_node(n.expression),
            }
            .into(),
            NodeKind::TopLevelVariableDeclaration(n) => TopLevelVariableDeclaration {
                header: self.clone_header(&n.header),
                variables: self.clone_node(n.variables),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::TryStatement(n) => TryStatement {
                try_keyword: self.map_token(&n.try_keyword),
                body: self.clone_node(n.body),
                catch_clauses: self.clone_list(&n.catch_clauses),
                finally_keyword: self.map_opt_token(&n.finally_keyword),
                finally_block: self.clone_opt(n.finally_block),
            }
            .into(),
            NodeKind::TypeArgumentList(n) => TypeArgumentList {
                left_bracket: self.map_token(&n.left_bracket),
                arguments: self.clone_list(&n.arguments),
                right_bracket: self.map_token(&n.right_bracket),
            }
            .into(),
            NodeKind::TypeName(n) => TypeName {
                name: self.clone_node(n.name),
                type_arguments: self.clone_opt(n.type_arguments),
            }
            .into(),
            NodeKind::TypeParameter(n) => TypeParameter {
                header: self.clone_header(&n.header),
                name: self.clone_node(n.name),
                keyword: self.map_opt_token(&n.keyword),
                bound: self.clone_opt(n.bound),
            }
            .into(),
            NodeKind::TypeParameterList(n) => TypeParameterList {
                left_bracket: self.map_token(&n.left_bracket),
                type_parameters: self.clone_list(&n.type_parameters),
                right_bracket: self.map_token(&n.right_bracket),
            }
            .into(),
            NodeKind::VariableDeclaration(n) => VariableDeclaration {
                header: self.clone_header(&n.header),
                name: self.clone_node(n.name),
                equals: self.map_opt_token(&n.equals),
                initializer: self.clone_opt(n.initializer),
            }
            .into(),
            NodeKind::VariableDeclarationList(n) => VariableDeclarationList {
                header: self.clone_header(&n.header),
                keyword: self.map_opt_token(&n.keyword),
                ty: self.clone_opt(n.ty),
                variables: self.clone_list(&n.variables),
            }
            .into(),
            NodeKind::VariableDeclarationStatement(n) => VariableDeclarationStatement {
                variables: self.clone_node(n.variables),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
            NodeKind::WhileStatement(n) => WhileStatement {
                keyword: self.map_token(&n.keyword),
                left_parenthesis: self.map_token(&n.left_parenthesis),
                condition: self.clone_node(n.condition),
                right_parenthesis: self.map_token(&n.right_parenthesis),
                body: self.clone_node(n.body),
            }
            .into(),
            NodeKind::WithClause(n) => WithClause {
                with_keyword: self.map_token(&n.with_keyword),
                mixin_types: self.clone_list(&n.mixin_types),
            }
            .into(),
            NodeKind::YieldStatement(n) => YieldStatement {
                yield_keyword: self.map_token(&n.yield_keyword),
                star: self.map_opt_token(&n.star),
                expression: self.clone_node(n.expression),
                semicolon: self.map_token(&n.semicolon),
            }
            .into(),
        };

        let clone = self.target.alloc(kind);
        *self.target.annotations_mut(clone) = source.annotations(node).restrict(slots);
        clone
    }

    fn clone_opt(&mut self, node: Option<NodeId>) -> Option<NodeId> {
        node.map(|node| self.clone_node(node))
    }

    fn clone_list(&mut self, nodes: &[NodeId]) -> NodeList {
        nodes.iter().map(|&node| self.clone_node(node)).collect()
    }

    fn clone_header(&mut self, header: &DeclarationHeader) -> DeclarationHeader {
        DeclarationHeader {
            documentation_comment: self.clone_opt(header.documentation_comment),
            metadata: self.clone_list(&header.metadata),
        }
    }

    fn map_token(&self, token: &Token) -> Token {
        self.token_map.map(token)
    }

    fn map_opt_token(&self, token: &Option<Token>) -> Option<Token> {
        token.as_ref().map(|token| self.map_token(token))
    }

    fn map_tokens(&self, tokens: &[Token]) -> Vec<Token> {
        tokens.iter().map(|token| self.map_token(token)).collect()
    }
}
