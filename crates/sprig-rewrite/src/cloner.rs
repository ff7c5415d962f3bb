use sprig_syntax::nodes::*;
use sprig_syntax::{Ast, NodeId};

/// Deep structural copy of a subtree into another tree.
///
/// Every node of the copy is freshly allocated in the target tree, leaf values are copied
/// and tokens are shared with the source. Semantic annotations are dropped unless the
/// cloner was built with [`AstCloner::keep_annotations`].
pub struct AstCloner<'a> {
    source: &'a Ast,
    target: &'a mut Ast,
    keep_annotations: bool,
}

impl<'a> AstCloner<'a> {
    pub fn new(source: &'a Ast, target: &'a mut Ast) -> Self {
        Self { source, target, keep_annotations: false }
    }

    /// Copies the annotations of every node along with its structure.
    pub fn keep_annotations(mut self) -> Self {
        self.keep_annotations = true;
        self
    }

    pub fn clone_node(&mut self, node: NodeId) -> NodeId {
        let source = self.source;
        let kind: NodeKind = match source.kind(node) {
            NodeKind::AdjacentStrings(n) => AdjacentStrings {
                strings: self.clone_list(&n.strings),
            }
            .into(),
            NodeKind::Annotation(n) => Annotation {
                at_sign: n.at_sign.clone(),
                name: self.clone_node(n.name),
                period: n.period.clone(),
                constructor_name: self.clone_opt(n.constructor_name),
                arguments: self.clone_opt(n.arguments),
            }
            .into(),
            NodeKind::ArgumentList(n) => ArgumentList {
                left_parenthesis: n.left_parenthesis.clone(),
                arguments: self.clone_list(&n.arguments),
                right_parenthesis: n.right_parenthesis.clone(),
            }
            .into(),
            NodeKind::AsExpression(n) => AsExpression {
                expression: self.clone_node(n.expression),
                as_operator: n.as_operator.clone(),
                ty: self.clone_node(n.ty),
            }
            .into(),
            NodeKind::AssertStatement(n) => AssertStatement {
                keyword: n.keyword.clone(),
                left_parenthesis: n.left_parenthesis.clone(),
                condition: self.clone_node(n.condition),
                right_parenthesis: n.right_parenthesis.clone(),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::AssignmentExpression(n) => AssignmentExpression {
                left_hand_side: self.clone_node(n.left_hand_side),
                operator: n.operator.clone(),
                right_hand_side: self.clone_node(n.right_hand_side),
            }
            .into(),
            NodeKind::AwaitExpression(n) => AwaitExpression {
                await_keyword: n.await_keyword.clone(),
                expression: self.clone_node(n.expression),
            }
            .into(),
            NodeKind::BinaryExpression(n) => BinaryExpression {
                left_operand: self.clone_node(n.left_operand),
                operator: n.operator.clone(),
                right_operand: self.clone_node(n.right_operand),
            }
            .into(),
            NodeKind::Block(n) => Block {
                left_bracket: n.left_bracket.clone(),
                statements: self.clone_list(&n.statements),
                right_bracket: n.right_bracket.clone(),
            }
            .into(),
            NodeKind::BlockFunctionBody(n) => BlockFunctionBody {
                keyword: n.keyword.clone(),
                star: n.star.clone(),
                block: self.clone_node(n.block),
            }
            .into(),
            NodeKind::BooleanLiteral(n) => BooleanLiteral {
                literal: n.literal.clone(),
                value: n.value,
            }
            .into(),
            NodeKind::BreakStatement(n) => BreakStatement {
                keyword: n.keyword.clone(),
                label: self.clone_opt(n.label),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::CascadeExpression(n) => CascadeExpression {
                target: self.clone_node(n.target),
                cascade_sections: self.clone_list(&n.cascade_sections),
            }
            .into(),
            NodeKind::CatchClause(n) => CatchClause {
                on_keyword: n.on_keyword.clone(),
                exception_type: self.clone_opt(n.exception_type),
                catch_keyword: n.catch_keyword.clone(),
                left_parenthesis: n.left_parenthesis.clone(),
                exception_parameter: self.clone_opt(n.exception_parameter),
                comma: n.comma.clone(),
                stack_trace_parameter: self.clone_opt(n.stack_trace_parameter),
                right_parenthesis: n.right_parenthesis.clone(),
                body: self.clone_node(n.body),
            }
            .into(),
            NodeKind::ClassDeclaration(n) => ClassDeclaration {
                header: self.clone_header(&n.header),
                abstract_keyword: n.abstract_keyword.clone(),
                class_keyword: n.class_keyword.clone(),
                name: self.clone_node(n.name),
                type_parameters: self.clone_opt(n.type_parameters),
                extends_clause: self.clone_opt(n.extends_clause),
                with_clause: self.clone_opt(n.with_clause),
                implements_clause: self.clone_opt(n.implements_clause),
                native_clause: self.clone_opt(n.native_clause),
                left_bracket: n.left_bracket.clone(),
                members: self.clone_list(&n.members),
                right_bracket: n.right_bracket.clone(),
            }
            .into(),
            NodeKind::ClassTypeAlias(n) => ClassTypeAlias {
                header: self.clone_header(&n.header),
                keyword: n.keyword.clone(),
                name: self.clone_node(n.name),
                type_parameters: self.clone_opt(n.type_parameters),
                equals: n.equals.clone(),
                abstract_keyword: n.abstract_keyword.clone(),
                superclass: self.clone_node(n.superclass),
                with_clause: self.clone_opt(n.with_clause),
                implements_clause: self.clone_opt(n.implements_clause),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::Comment(n) => Comment {
                kind: n.kind,
                tokens: n.tokens.clone(),
                references: self.clone_list(&n.references),
            }
            .into(),
            NodeKind::CommentReference(n) => CommentReference {
                new_keyword: n.new_keyword.clone(),
                identifier: self.clone_node(n.identifier),
            }
            .into(),
            NodeKind::CompilationUnit(n) => CompilationUnit {
                begin_token: n.begin_token.clone(),
                script_tag: self.clone_opt(n.script_tag),
                directives: self.clone_list(&n.directives),
                declarations: self.clone_list(&n.declarations),
                end_token: n.end_token.clone(),
                line_info: n.line_info.clone(),
            }
            .into(),
            NodeKind::ConditionalExpression(n) => ConditionalExpression {
                condition: self.clone_node(n.condition),
                question: n.question.clone(),
                then_expression: self.clone_node(n.then_expression),
                colon: n.colon.clone(),
                else_expression: self.clone_node(n.else_expression),
            }
            .into(),
            NodeKind::ConstructorDeclaration(n) => ConstructorDeclaration {
                header: self.clone_header(&n.header),
                external_keyword: n.external_keyword.clone(),
                const_keyword: n.const_keyword.clone(),
                factory_keyword: n.factory_keyword.clone(),
                return_type: self.clone_node(n.return_type),
                period: n.period.clone(),
                name: self.clone_opt(n.name),
                parameters: self.clone_node(n.parameters),
                separator: n.separator.clone(),
                initializers: self.clone_list(&n.initializers),
                redirected_constructor: self.clone_opt(n.redirected_constructor),
                body: self.clone_opt(n.body),
            }
            .into(),
            NodeKind::ConstructorFieldInitializer(n) => ConstructorFieldInitializer {
                this_keyword: n.this_keyword.clone(),
                period: n.period.clone(),
                field_name: self.clone_node(n.field_name),
                equals: n.equals.clone(),
                expression: self.clone_node(n.expression),
            }
            .into(),
            NodeKind::ConstructorName(n) => ConstructorName {
                ty: self.clone_node(n.ty),
                period: n.period.clone(),
                name: self.clone_opt(n.name),
            }
            .into(),
            NodeKind::ContinueStatement(n) => ContinueStatement {
                keyword: n.keyword.clone(),
                label: self.clone_opt(n.label),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::DeclaredIdentifier(n) => DeclaredIdentifier {
                header: self.clone_header(&n.header),
                keyword: n.keyword.clone(),
                ty: self.clone_opt(n.ty),
                identifier: self.clone_node(n.identifier),
            }
            .into(),
            NodeKind::DefaultFormalParameter(n) => DefaultFormalParameter {
                parameter: self.clone_node(n.parameter),
                kind: n.kind,
                separator: n.separator.clone(),
                default_value: self.clone_opt(n.default_value),
            }
            .into(),
            NodeKind::DoStatement(n) => DoStatement {
                do_keyword: n.do_keyword.clone(),
                body: self.clone_node(n.body),
                while_keyword: n.while_keyword.clone(),
                left_parenthesis: n.left_parenthesis.clone(),
                condition: self.clone_node(n.condition),
                right_parenthesis: n.right_parenthesis.clone(),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::DoubleLiteral(n) => DoubleLiteral {
                literal: n.literal.clone(),
                value: n.value,
            }
            .into(),
            NodeKind::EmptyFunctionBody(n) => EmptyFunctionBody {
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::EmptyStatement(n) => EmptyStatement { semicolon: n.semicolon.clone() }.into(),
            NodeKind::EnumConstantDeclaration(n) => EnumConstantDeclaration {
                header: self.clone_header(&n.header),
                name: self.clone_node(n.name),
            }
            .into(),
            NodeKind::EnumDeclaration(n) => EnumDeclaration {
                header: self.clone_header(&n.header),
                keyword: n.keyword.clone(),
                name: self.clone_node(n.name),
                left_bracket: n.left_bracket.clone(),
                constants: self.clone_list(&n.constants),
                right_bracket: n.right_bracket.clone(),
            }
            .into(),
            NodeKind::ExportDirective(n) => ExportDirective {
                header: self.clone_header(&n.header),
                keyword: n.keyword.clone(),
                uri: self.clone_node(n.uri),
                combinators: self.clone_list(&n.combinators),
                semicolon: n.semicolon.clone(),
                uri_content: n.uri_content.clone(),
            }
            .into(),
            NodeKind::ExpressionFunctionBody(n) => ExpressionFunctionBody {
                keyword: n.keyword.clone(),
                function_definition: n.function_definition.clone(),
                expression: self.clone_node(n.expression),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::ExpressionStatement(n) => ExpressionStatement {
                expression: self.clone_node(n.expression),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::ExtendsClause(n) => ExtendsClause {
                keyword: n.keyword.clone(),
                superclass: self.clone_node(n.superclass),
            }
            .into(),
            NodeKind::FieldDeclaration(n) => FieldDeclaration {
                header: self.clone_header(&n.header),
                static_keyword: n.static_keyword.clone(),
                fields: self.clone_node(n.fields),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::FieldFormalParameter(n) => FieldFormalParameter {
                header: self.clone_header(&n.header),
                keyword: n.keyword.clone(),
                ty: self.clone_opt(n.ty),
                this_keyword: n.this_keyword.clone(),
                period: n.period.clone(),
                identifier: self.clone_node(n.identifier),
                parameters: self.clone_opt(n.parameters),
            }
            .into(),
            NodeKind::ForEachStatement(n) => ForEachStatement {
                await_keyword: n.await_keyword.clone(),
                for_keyword: n.for_keyword.clone(),
                left_parenthesis: n.left_parenthesis.clone(),
                loop_variable: self.clone_opt(n.loop_variable),
                identifier: self.clone_opt(n.identifier),
                in_keyword: n.in_keyword.clone(),
                iterable: self.clone_node(n.iterable),
                right_parenthesis: n.right_parenthesis.clone(),
                body: self.clone_node(n.body),
            }
            .into(),
            NodeKind::FormalParameterList(n) => FormalParameterList {
                left_parenthesis: n.left_parenthesis.clone(),
                parameters: self.clone_list(&n.parameters),
                left_delimiter: n.left_delimiter.clone(),
                right_delimiter: n.right_delimiter.clone(),
                right_parenthesis: n.right_parenthesis.clone(),
            }
            .into(),
            NodeKind::ForStatement(n) => ForStatement {
                for_keyword: n.for_keyword.clone(),
                left_parenthesis: n.left_parenthesis.clone(),
                variables: self.clone_opt(n.variables),
                initialization: self.clone_opt(n.initialization),
                left_separator: n.left_separator.clone(),
                condition: self.clone_opt(n.condition),
                right_separator: n.right_separator.clone(),
                updaters: self.clone_list(&n.updaters),
                right_parenthesis: n.right_parenthesis.clone(),
                body: self.clone_node(n.body),
            }
            .into(),
            NodeKind::FunctionDeclaration(n) => FunctionDeclaration {
                header: self.clone_header(&n.header),
                external_keyword: n.external_keyword.clone(),
                return_type: self.clone_opt(n.return_type),
                property_keyword: n.property_keyword.clone(),
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
                keyword: n.keyword.clone(),
                return_type: self.clone_opt(n.return_type),
                name: self.clone_node(n.name),
                type_parameters: self.clone_opt(n.type_parameters),
                parameters: self.clone_node(n.parameters),
                semicolon: n.semicolon.clone(),
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
                keyword: n.keyword.clone(),
                hidden_names: self.clone_list(&n.hidden_names),
            }
            .into(),
            NodeKind::IfStatement(n) => IfStatement {
                if_keyword: n.if_keyword.clone(),
                left_parenthesis: n.left_parenthesis.clone(),
                condition: self.clone_node(n.condition),
                right_parenthesis: n.right_parenthesis.clone(),
                then_statement: self.clone_node(n.then_statement),
                else_keyword: n.else_keyword.clone(),
                else_statement: self.clone_opt(n.else_statement),
            }
            .into(),
            NodeKind::ImplementsClause(n) => ImplementsClause {
                keyword: n.keyword.clone(),
                interfaces: self.clone_list(&n.interfaces),
            }
            .into(),
            NodeKind::ImportDirective(n) => ImportDirective {
                header: self.clone_header(&n.header),
                keyword: n.keyword.clone(),
                uri: self.clone_node(n.uri),
                deferred_keyword: n.deferred_keyword.clone(),
                as_keyword: n.as_keyword.clone(),
                prefix: self.clone_opt(n.prefix),
                combinators: self.clone_list(&n.combinators),
                semicolon: n.semicolon.clone(),
                uri_content: n.uri_content.clone(),
            }
            .into(),
            NodeKind::IndexExpression(n) => IndexExpression {
                target: self.clone_opt(n.target),
                period: n.period.clone(),
                left_bracket: n.left_bracket.clone(),
                index: self.clone_node(n.index),
                right_bracket: n.right_bracket.clone(),
            }
            .into(),
            NodeKind::InstanceCreationExpression(n) => InstanceCreationExpression {
                keyword: n.keyword.clone(),
                constructor_name: self.clone_node(n.constructor_name),
                argument_list: self.clone_node(n.argument_list),
            }
            .into(),
            NodeKind::IntegerLiteral(n) => IntegerLiteral {
                literal: n.literal.clone(),
                value: n.value,
            }
            .into(),
            NodeKind::InterpolationExpression(n) => InterpolationExpression {
                left_bracket: n.left_bracket.clone(),
                expression: self.clone_node(n.expression),
                right_bracket: n.right_bracket.clone(),
            }
            .into(),
            NodeKind::InterpolationString(n) => InterpolationString {
                contents: n.contents.clone(),
                value: n.value.clone(),
            }
            .into(),
            NodeKind::IsExpression(n) => IsExpression {
                expression: self.clone_node(n.expression),
                is_operator: n.is_operator.clone(),
                not_operator: n.not_operator.clone(),
                ty: self.clone_node(n.ty),
            }
            .into(),
            NodeKind::Label(n) => Label {
                label: self.clone_node(n.label),
                colon: n.colon.clone(),
            }
            .into(),
            NodeKind::LabeledStatement(n) => LabeledStatement {
                labels: self.clone_list(&n.labels),
                statement: self.clone_node(n.statement),
            }
            .into(),
            NodeKind::LibraryDirective(n) => LibraryDirective {
                header: self.clone_header(&n.header),
                library_keyword: n.library_keyword.clone(),
                name: self.clone_node(n.name),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::LibraryIdentifier(n) => LibraryIdentifier {
                components: self.clone_list(&n.components),
            }
            .into(),
            NodeKind::ListLiteral(n) => ListLiteral {
                const_keyword: n.const_keyword.clone(),
                type_arguments: self.clone_opt(n.type_arguments),
                left_bracket: n.left_bracket.clone(),
                elements: self.clone_list(&n.elements),
                right_bracket: n.right_bracket.clone(),
            }
            .into(),
            NodeKind::MapLiteral(n) => MapLiteral {
                const_keyword: n.const_keyword.clone(),
                type_arguments: self.clone_opt(n.type_arguments),
                left_bracket: n.left_bracket.clone(),
                entries: self.clone_list(&n.entries),
                right_bracket: n.right_bracket.clone(),
            }
            .into(),
            NodeKind::MapLiteralEntry(n) => MapLiteralEntry {
                key: self.clone_node(n.key),
                separator: n.separator.clone(),
                value: self.clone_node(n.value),
            }
            .into(),
            NodeKind::MethodDeclaration(n) => MethodDeclaration {
                header: self.clone_header(&n.header),
                external_keyword: n.external_keyword.clone(),
                modifier_keyword: n.modifier_keyword.clone(),
                return_type: self.clone_opt(n.return_type),
                property_keyword: n.property_keyword.clone(),
                operator_keyword: n.operator_keyword.clone(),
                name: self.clone_node(n.name),
                parameters: self.clone_opt(n.parameters),
                body: self.clone_node(n.body),
            }
            .into(),
            NodeKind::MethodInvocation(n) => MethodInvocation {
                target: self.clone_opt(n.target),
                period: n.period.clone(),
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
                keyword: n.keyword.clone(),
                name: self.clone_opt(n.name),
            }
            .into(),
            NodeKind::NativeFunctionBody(n) => NativeFunctionBody {
                native_keyword: n.native_keyword.clone(),
                string_literal: self.clone_opt(n.string_literal),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::NullLiteral(n) => NullLiteral { literal: n.literal.clone() }.into(),
            NodeKind::ParenthesizedExpression(n) => ParenthesizedExpression {
                left_parenthesis: n.left_parenthesis.clone(),
                expression: self.clone_node(n.expression),
                right_parenthesis: n.right_parenthesis.clone(),
            }
            .into(),
            NodeKind::PartDirective(n) => PartDirective {
                header: self.clone_header(&n.header),
                part_keyword: n.part_keyword.clone(),
                uri: self.clone_node(n.uri),
                semicolon: n.semicolon.clone(),
                uri_content: n.uri_content.clone(),
            }
            .into(),
            NodeKind::PartOfDirective(n) => PartOfDirective {
                header: self.clone_header(&n.header),
                part_keyword: n.part_keyword.clone(),
                of_keyword: n.of_keyword.clone(),
                library_name: self.clone_node(n.library_name),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::PostfixExpression(n) => PostfixExpression {
                operand: self.clone_node(n.operand),
                operator: n.operator.clone(),
            }
            .into(),
            NodeKind::PrefixedIdentifier(n) => PrefixedIdentifier {
                prefix: self.clone_node(n.prefix),
                period: n.period.clone(),
                identifier: self.clone_node(n.identifier),
            }
            .into(),
            NodeKind::PrefixExpression(n) => PrefixExpression {
                operator: n.operator.clone(),
                operand: self.clone_node(n.operand),
            }
            .into(),
            NodeKind::PropertyAccess(n) => PropertyAccess {
                target: self.clone_opt(n.target),
                operator: n.operator.clone(),
                property_name: self.clone_node(n.property_name),
            }
            .into(),
            NodeKind::RedirectingConstructorInvocation(n) => RedirectingConstructorInvocation {
                keyword: n.keyword.clone(),
                period: n.period.clone(),
                constructor_name: self.clone_opt(n.constructor_name),
                argument_list: self.clone_node(n.argument_list),
            }
            .into(),
            NodeKind::RethrowExpression(n) => RethrowExpression {
                keyword: n.keyword.clone(),
            }
            .into(),
            NodeKind::ReturnStatement(n) => ReturnStatement {
                keyword: n.keyword.clone(),
                expression: self.clone_opt(n.expression),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::ScriptTag(n) => ScriptTag { script_tag: n.script_tag.clone() }.into(),
            NodeKind::ShowCombinator(n) => ShowCombinator {
                keyword: n.keyword.clone(),
                shown_names: self.clone_list(&n.shown_names),
            }
            .into(),
            NodeKind::SimpleFormalParameter(n) => SimpleFormalParameter {
                header: self.clone_header(&n.header),
                keyword: n.keyword.clone(),
                ty: self.clone_opt(n.ty),
                identifier: self.clone_node(n.identifier),
            }
            .into(),
            NodeKind::SimpleIdentifier(n) => SimpleIdentifier { token: n.token.clone() }.into(),
            NodeKind::SimpleStringLiteral(n) => SimpleStringLiteral {
                literal: n.literal.clone(),
                value: n.value.clone(),
            }
            .into(),
            NodeKind::StringInterpolation(n) => StringInterpolation {
                elements: self.clone_list(&n.elements),
            }
            .into(),
            NodeKind::SuperConstructorInvocation(n) => SuperConstructorInvocation {
                keyword: n.keyword.clone(),
                period: n.period.clone(),
                constructor_name: self.clone_opt(n.constructor_name),
                argument_list: self.clone_node(n.argument_list),
            }
            .into(),
            NodeKind::SuperExpression(n) => SuperExpression { keyword: n.keyword.clone() }.into(),
            NodeKind::SwitchCase(n) => SwitchCase {
                labels: self.clone_list(&n.labels),
                keyword: n.keyword.clone(),
                expression: self.clone_node(n.expression),
                colon: n.colon.clone(),
                statements: self.clone_list(&n.statements),
            }
            .into(),
            NodeKind::SwitchDefault(n) => SwitchDefault {
                labels: self.clone_list(&n.labels),
                keyword: n.keyword.clone(),
                colon: n.colon.clone(),
                statements: self.clone_list(&n.statements),
            }
            .into(),
            NodeKind::SwitchStatement(n) => SwitchStatement {
                keyword: n.keyword.clone(),
                left_parenthesis: n.left_parenthesis.clone(),
                expression: self.clone_node(n.expression),
                right_parenthesis: n.right_parenthesis.clone(),
                left_bracket: n.left_bracket.clone(),
                members: self.clone_list(&n.members),
                right_bracket: n.right_bracket.clone(),
            }
            .into(),
            NodeKind::SymbolLiteral(n) => SymbolLiteral {
                pound_sign: n.pound_sign.clone(),
                components: n.components.clone(),
            }
            .into(),
            NodeKind::ThisExpression(n) => ThisExpression { keyword: n.keyword.clone() }.into(),
            NodeKind::ThrowExpression(n) => ThrowExpression {
                keyword: n.keyword.clone(),
                expression: self.clone_node(n.expression),
            }
            .into(),
            NodeKind::TopLevelVariableDeclaration(n) => TopLevelVariableDeclaration {
                header: self.clone_header(&n.header),
                variables: self.clone_node(n.variables),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::TryStatement(n) => TryStatement {
                try_keyword: n.try_keyword.clone(),
                body: self.clone_node(n.body),
                catch_clauses: self.clone_list(&n.catch_clauses),
                finally_keyword: n.finally_keyword.clone(),
                finally_block: self.clone_opt(n.finally_block),
            }
            .into(),
            NodeKind::TypeArgumentList(n) => TypeArgumentList {
                left_bracket: n.left_bracket.clone(),
                arguments: self.clone_list(&n.arguments),
                right_bracket: n.right_bracket.clone(),
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
                keyword: n.keyword.clone(),
                bound: self.clone_opt(n.bound),
            }
            .into(),
            NodeKind::TypeParameterList(n) => TypeParameterList {
                left_bracket: n.left_bracket.clone(),
                type_parameters: self.clone_list(&n.type_parameters),
                right_bracket: n.right_bracket.clone(),
            }
            .into(),
            NodeKind::VariableDeclaration(n) => VariableDeclaration {
                header: self.clone_header(&n.header),
                name: self.clone_node(n.name),
                equals: n.equals.clone(),
                initializer: self.clone_opt(n.initializer),
            }
            .into(),
            NodeKind::VariableDeclarationList(n) => VariableDeclarationList {
                header: self.clone_header(&n.header),
                keyword: n.keyword.clone(),
                ty: self.clone_opt(n.ty),
                variables: self.clone_list(&n.variables),
            }
            .into(),
            NodeKind::VariableDeclarationStatement(n) => VariableDeclarationStatement {
                variables: self.clone_node(n.variables),
                semicolon: n.semicolon.clone(),
            }
            .into(),
            NodeKind::WhileStatement(n) => WhileStatement {
                keyword: n.keyword.clone(),
                left_parenthesis: n.left_parenthesis.clone(),
                condition: self.clone_node(n.condition),
                right_parenthesis: n.right_parenthesis.clone(),
                body: self.clone_node(n.body),
            }
            .into(),
            NodeKind::WithClause(n) => WithClause {
                with_keyword: n.with_keyword.clone(),
                mixin_types: self.clone_list(&n.mixin_types),
            }
            .into(),
            NodeKind::YieldStatement(n) => YieldStatement {
                yield_keyword: n.yield_keyword.clone(),
                star: n.star.clone(),
                expression: self.clone_node(n.expression),
                semicolon: n.semicolon.clone(),
            }
            .into(),
        };

        let clone = self.target.alloc(kind);
        if self.keep_annotations {
            *self.target.annotations_mut(clone) = *source.annotations(node);
        }
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
}
