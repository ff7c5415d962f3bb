//! Builds well-formed trees without a parser.
//!
//! Every constructor takes its children as closures and runs them in source order, so
//! tokens are requested left to right. With [`AstFactory::with_source`] each token is
//! placed at the next occurrence of its lexeme in the text; without source text tokens
//! are laid out one space apart.

use sprig_span::{TextSize, Token};

use crate::nodes::*;
use crate::{Ast, NodeId};

#[derive(Debug, Default)]
pub struct AstFactory {
    ast: Ast,
    text: Option<Box<str>>,
    cursor: TextSize,
    tokens: Vec<Token>,
}

impl AstFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(text: &str) -> Self {
        Self { text: Some(text.into()), ..Self::default() }
    }

    /// Continues allocating into an existing tree, for example to build a replacement
    /// node next to the tree it will be spliced into.
    pub fn extend(ast: Ast, text: Option<&str>) -> Self {
        Self { ast, text: text.map(Into::into), ..Self::default() }
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn ast_mut(&mut self) -> &mut Ast {
        &mut self.ast
    }

    /// Every token handed out so far, in the order it was requested.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Offset where the next token search starts.
    pub fn position(&self) -> TextSize {
        self.cursor
    }

    pub fn finish(mut self, root: NodeId) -> Ast {
        self.ast.set_root(root);
        self.ast
    }

    pub fn into_ast(self) -> Ast {
        self.ast
    }

    pub fn alloc(&mut self, kind: impl Into<NodeKind>) -> NodeId {
        self.ast.alloc(kind)
    }

    pub fn token(&mut self, lexeme: &str) -> Token {
        let offset = match &self.text {
            Some(text) => {
                let start = usize::from(self.cursor).min(text.len());
                match find_lexeme(text, start, lexeme) {
                    Some(found) => TextSize::new(found as u32),
                    None => self.cursor,
                }
            }
            None => self.cursor,
        };

        let token = Token::new(offset, lexeme);
        self.cursor = match self.text {
            Some(_) => token.end(),
            None => token.end() + TextSize::new(1),
        };
        self.tokens.push(token.clone());
        token
    }

    fn mark(&self) -> (TextSize, usize) {
        (self.cursor, self.tokens.len())
    }

    /// Takes back every token handed out since `mark`.
    fn rewind(&mut self, (cursor, len): (TextSize, usize)) {
        self.cursor = cursor;
        self.tokens.truncate(len);
    }

    fn end_token(&mut self) -> Token {
        let end = self.text.as_deref().map_or(self.cursor, TextSize::of);
        let token = Token::new(end, "");
        self.tokens.push(token.clone());
        token
    }

    pub fn identifier(&mut self, name: &str) -> NodeId {
        let token = self.token(name);
        self.alloc(SimpleIdentifier { token })
    }

    pub fn prefixed_identifier(&mut self, prefix: &str, name: &str) -> NodeId {
        let prefix = self.identifier(prefix);
        let period = self.token(".");
        let identifier = self.identifier(name);
        self.alloc(PrefixedIdentifier { prefix, period, identifier })
    }

    pub fn integer(&mut self, lexeme: &str) -> NodeId {
        let literal = self.token(lexeme);
        self.alloc(IntegerLiteral { literal, value: lexeme.parse().ok() })
    }

    pub fn double(&mut self, lexeme: &str) -> NodeId {
        let literal = self.token(lexeme);
        self.alloc(DoubleLiteral { literal, value: lexeme.parse().unwrap_or(f64::NAN) })
    }

    pub fn boolean(&mut self, value: bool) -> NodeId {
        let literal = self.token(if value { "true" } else { "false" });
        self.alloc(BooleanLiteral { literal, value })
    }

    pub fn null(&mut self) -> NodeId {
        let literal = self.token("null");
        self.alloc(NullLiteral { literal })
    }

    /// A string literal; `lexeme` includes the quotes.
    pub fn string(&mut self, lexeme: &str) -> NodeId {
        let literal = self.token(lexeme);
        let value = lexeme.trim_matches(|c: char| c == '"' || c == '\'').into();
        self.alloc(SimpleStringLiteral { literal, value })
    }

    pub fn this(&mut self) -> NodeId {
        let keyword = self.token("this");
        self.alloc(ThisExpression { keyword })
    }

    pub fn symbol(&mut self, components: &[&str]) -> NodeId {
        let pound_sign = self.token("#");
        let components = components.iter().map(|component| self.token(component)).collect();
        self.alloc(SymbolLiteral { pound_sign, components })
    }

    pub fn list_literal(&mut self, elements: impl FnOnce(&mut Self) -> Vec<NodeId>) -> NodeId {
        let left_bracket = self.token("[");
        let elements = elements(self);
        let right_bracket = self.token("]");
        self.alloc(ListLiteral {
            const_keyword: None,
            type_arguments: None,
            left_bracket,
            elements,
            right_bracket,
        })
    }

    pub fn binary(
        &mut self,
        left: impl FnOnce(&mut Self) -> NodeId,
        operator: &str,
        right: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let left_operand = left(self);
        let operator = self.token(operator);
        let right_operand = right(self);
        self.alloc(BinaryExpression { left_operand, operator, right_operand })
    }

    pub fn assignment(
        &mut self,
        left: impl FnOnce(&mut Self) -> NodeId,
        operator: &str,
        right: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let left_hand_side = left(self);
        let operator = self.token(operator);
        let right_hand_side = right(self);
        self.alloc(AssignmentExpression { left_hand_side, operator, right_hand_side })
    }

    pub fn prefix(&mut self, operator: &str, operand: impl FnOnce(&mut Self) -> NodeId) -> NodeId {
        let operator = self.token(operator);
        let operand = operand(self);
        self.alloc(PrefixExpression { operator, operand })
    }

    pub fn postfix(&mut self, operand: impl FnOnce(&mut Self) -> NodeId, operator: &str) -> NodeId {
        let operand = operand(self);
        let operator = self.token(operator);
        self.alloc(PostfixExpression { operand, operator })
    }

    pub fn parenthesized(&mut self, expression: impl FnOnce(&mut Self) -> NodeId) -> NodeId {
        let left_parenthesis = self.token("(");
        let expression = expression(self);
        let right_parenthesis = self.token(")");
        self.alloc(ParenthesizedExpression { left_parenthesis, expression, right_parenthesis })
    }

    pub fn conditional(
        &mut self,
        condition: impl FnOnce(&mut Self) -> NodeId,
        then_expression: impl FnOnce(&mut Self) -> NodeId,
        else_expression: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let condition = condition(self);
        let question = self.token("?");
        let then_expression = then_expression(self);
        let colon = self.token(":");
        let else_expression = else_expression(self);
        self.alloc(ConditionalExpression {
            condition,
            question,
            then_expression,
            colon,
            else_expression,
        })
    }

    pub fn index(
        &mut self,
        target: impl FnOnce(&mut Self) -> NodeId,
        index: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let target = Some(target(self));
        let left_bracket = self.token("[");
        let index = index(self);
        let right_bracket = self.token("]");
        self.alloc(IndexExpression { target, period: None, left_bracket, index, right_bracket })
    }

    pub fn argument_list(&mut self, arguments: impl FnOnce(&mut Self) -> Vec<NodeId>) -> NodeId {
        let left_parenthesis = self.token("(");
        let arguments = arguments(self);
        let right_parenthesis = self.token(")");
        self.alloc(ArgumentList { left_parenthesis, arguments, right_parenthesis })
    }

    /// `name(arguments)` without a target.
    pub fn call(&mut self, name: &str, arguments: impl FnOnce(&mut Self) -> Vec<NodeId>) -> NodeId {
        let method_name = self.identifier(name);
        let argument_list = self.argument_list(arguments);
        self.alloc(MethodInvocation { target: None, period: None, method_name, argument_list })
    }

    /// `target.name(arguments)`.
    pub fn method_call(
        &mut self,
        target: impl FnOnce(&mut Self) -> NodeId,
        name: &str,
        arguments: impl FnOnce(&mut Self) -> Vec<NodeId>,
    ) -> NodeId {
        let target = Some(target(self));
        let period = Some(self.token("."));
        let method_name = self.identifier(name);
        let argument_list = self.argument_list(arguments);
        self.alloc(MethodInvocation { target, period, method_name, argument_list })
    }

    pub fn type_name(&mut self, name: &str) -> NodeId {
        let name = self.identifier(name);
        self.alloc(TypeName { name, type_arguments: None })
    }

    pub fn documentation_comment(&mut self, text: &str) -> NodeId {
        let tokens = vec![self.token(text)];
        self.alloc(Comment { kind: CommentKind::Documentation, tokens, references: Vec::new() })
    }

    pub fn parameter(&mut self, name: &str) -> NodeId {
        let identifier = self.identifier(name);
        self.alloc(SimpleFormalParameter {
            header: DeclarationHeader::default(),
            keyword: None,
            ty: None,
            identifier,
        })
    }

    pub fn typed_parameter(&mut self, ty: &str, name: &str) -> NodeId {
        let ty = Some(self.type_name(ty));
        let identifier = self.identifier(name);
        self.alloc(SimpleFormalParameter {
            header: DeclarationHeader::default(),
            keyword: None,
            ty,
            identifier,
        })
    }

    /// `[name = default]`-style optional positional parameter, without the brackets.
    pub fn optional_parameter(
        &mut self,
        name: &str,
        default_value: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let parameter = self.parameter(name);
        let separator = Some(self.token("="));
        let default_value = Some(default_value(self));
        self.alloc(DefaultFormalParameter {
            parameter,
            kind: ParameterKind::Positional,
            separator,
            default_value,
        })
    }

    pub fn formal_parameters(
        &mut self,
        parameters: impl FnOnce(&mut Self) -> Vec<NodeId>,
    ) -> NodeId {
        let left_parenthesis = self.token("(");
        let parameters = parameters(self);
        let right_parenthesis = self.token(")");
        self.alloc(FormalParameterList {
            left_parenthesis,
            parameters,
            left_delimiter: None,
            right_delimiter: None,
            right_parenthesis,
        })
    }

    pub fn block(&mut self, statements: impl FnOnce(&mut Self) -> Vec<NodeId>) -> NodeId {
        let left_bracket = self.token("{");
        let statements = statements(self);
        let right_bracket = self.token("}");
        self.alloc(Block { left_bracket, statements, right_bracket })
    }

    pub fn block_body(&mut self, statements: impl FnOnce(&mut Self) -> Vec<NodeId>) -> NodeId {
        let block = self.block(statements);
        self.alloc(BlockFunctionBody { keyword: None, star: None, block })
    }

    /// `=> expression;`
    pub fn expression_body(&mut self, expression: impl FnOnce(&mut Self) -> NodeId) -> NodeId {
        let function_definition = self.token("=>");
        let expression = expression(self);
        let semicolon = Some(self.token(";"));
        self.alloc(ExpressionFunctionBody {
            keyword: None,
            function_definition,
            expression,
            semicolon,
        })
    }

    pub fn function_expression(
        &mut self,
        parameters: impl FnOnce(&mut Self) -> Vec<NodeId>,
        body: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let parameters = Some(self.formal_parameters(parameters));
        let body = Some(body(self));
        self.alloc(FunctionExpression { parameters, body })
    }

    fn function(
        &mut self,
        return_type: Option<&str>,
        name: &str,
        parameters: impl FnOnce(&mut Self) -> Vec<NodeId>,
        body: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let return_type = return_type.map(|ty| self.type_name(ty));
        let name = self.identifier(name);
        let function_expression = self.function_expression(parameters, body);
        self.alloc(FunctionDeclaration {
            header: DeclarationHeader::default(),
            external_keyword: None,
            return_type,
            property_keyword: None,
            name,
            function_expression,
        })
    }

    /// A top-level function: `return_type name(parameters) body`.
    pub fn function_declaration(
        &mut self,
        return_type: Option<&str>,
        name: &str,
        parameters: impl FnOnce(&mut Self) -> Vec<NodeId>,
        body: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        self.function(return_type, name, parameters, body)
    }

    /// A function declared inside a block.
    pub fn local_function(
        &mut self,
        name: &str,
        parameters: impl FnOnce(&mut Self) -> Vec<NodeId>,
        body: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let function_declaration = self.function(None, name, parameters, body);
        self.alloc(FunctionDeclarationStatement { function_declaration })
    }

    pub fn class_declaration(
        &mut self,
        name: &str,
        members: impl FnOnce(&mut Self) -> Vec<NodeId>,
    ) -> NodeId {
        let class_keyword = self.token("class");
        let name = self.identifier(name);
        let left_bracket = self.token("{");
        let members = members(self);
        let right_bracket = self.token("}");
        self.alloc(ClassDeclaration {
            header: DeclarationHeader::default(),
            abstract_keyword: None,
            class_keyword,
            name,
            type_parameters: None,
            extends_clause: None,
            with_clause: None,
            implements_clause: None,
            native_clause: None,
            left_bracket,
            members,
            right_bracket,
        })
    }

    pub fn method_declaration(
        &mut self,
        name: &str,
        parameters: impl FnOnce(&mut Self) -> Vec<NodeId>,
        body: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let name = self.identifier(name);
        let parameters = Some(self.formal_parameters(parameters));
        let body = body(self);
        self.alloc(MethodDeclaration {
            header: DeclarationHeader::default(),
            external_keyword: None,
            modifier_keyword: None,
            return_type: None,
            property_keyword: None,
            operator_keyword: None,
            name,
            parameters,
            body,
        })
    }

    pub fn field_declaration(
        &mut self,
        keyword: &str,
        variables: impl FnOnce(&mut Self) -> Vec<NodeId>,
    ) -> NodeId {
        let fields = self.variable_list(keyword, variables);
        let semicolon = self.token(";");
        self.alloc(FieldDeclaration {
            header: DeclarationHeader::default(),
            static_keyword: None,
            fields,
            semicolon,
        })
    }

    pub fn top_level_variable(
        &mut self,
        keyword: &str,
        variables: impl FnOnce(&mut Self) -> Vec<NodeId>,
    ) -> NodeId {
        let variables = self.variable_list(keyword, variables);
        let semicolon = self.token(";");
        self.alloc(TopLevelVariableDeclaration {
            header: DeclarationHeader::default(),
            variables,
            semicolon,
        })
    }

    pub fn variable(
        &mut self,
        name: &str,
        initializer: impl FnOnce(&mut Self) -> Option<NodeId>,
    ) -> NodeId {
        let name = self.identifier(name);
        // `=` is only kept when an initializer follows it.
        let mark = self.mark();
        let equals = self.token("=");
        let (equals, initializer) = match initializer(self) {
            Some(initializer) => (Some(equals), Some(initializer)),
            None => {
                self.rewind(mark);
                (None, None)
            }
        };
        self.alloc(VariableDeclaration {
            header: DeclarationHeader::default(),
            name,
            equals,
            initializer,
        })
    }

    pub fn variable_list(
        &mut self,
        keyword: &str,
        variables: impl FnOnce(&mut Self) -> Vec<NodeId>,
    ) -> NodeId {
        let keyword = Some(self.token(keyword));
        let variables = variables(self);
        self.alloc(VariableDeclarationList {
            header: DeclarationHeader::default(),
            keyword,
            ty: None,
            variables,
        })
    }

    /// `keyword name = initializer;` as a statement.
    pub fn local_variable(
        &mut self,
        keyword: &str,
        name: &str,
        initializer: impl FnOnce(&mut Self) -> Option<NodeId>,
    ) -> NodeId {
        let variables = self.variable_list(keyword, |f| vec![f.variable(name, initializer)]);
        let semicolon = self.token(";");
        self.alloc(VariableDeclarationStatement { variables, semicolon })
    }

    pub fn expression_statement(&mut self, expression: impl FnOnce(&mut Self) -> NodeId) -> NodeId {
        let expression = expression(self);
        let semicolon = Some(self.token(";"));
        self.alloc(ExpressionStatement { expression, semicolon })
    }

    pub fn return_statement(
        &mut self,
        expression: impl FnOnce(&mut Self) -> Option<NodeId>,
    ) -> NodeId {
        let keyword = self.token("return");
        let expression = expression(self);
        let semicolon = self.token(";");
        self.alloc(ReturnStatement { keyword, expression, semicolon })
    }

    pub fn if_statement(
        &mut self,
        condition: impl FnOnce(&mut Self) -> NodeId,
        then_statement: impl FnOnce(&mut Self) -> NodeId,
        else_statement: impl FnOnce(&mut Self) -> Option<NodeId>,
    ) -> NodeId {
        let if_keyword = self.token("if");
        let left_parenthesis = self.token("(");
        let condition = condition(self);
        let right_parenthesis = self.token(")");
        let then_statement = then_statement(self);
        let mark = self.mark();
        let else_keyword = self.token("else");
        let else_statement = else_statement(self);
        let else_keyword = match else_statement {
            Some(_) => Some(else_keyword),
            None => {
                self.rewind(mark);
                None
            }
        };
        self.alloc(IfStatement {
            if_keyword,
            left_parenthesis,
            condition,
            right_parenthesis,
            then_statement,
            else_keyword,
            else_statement,
        })
    }

    pub fn while_statement(
        &mut self,
        condition: impl FnOnce(&mut Self) -> NodeId,
        body: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let keyword = self.token("while");
        let left_parenthesis = self.token("(");
        let condition = condition(self);
        let right_parenthesis = self.token(")");
        let body = body(self);
        self.alloc(WhileStatement { keyword, left_parenthesis, condition, right_parenthesis, body })
    }

    /// `for (variables; condition; updaters) body`
    pub fn for_statement(
        &mut self,
        variables: impl FnOnce(&mut Self) -> Option<NodeId>,
        condition: impl FnOnce(&mut Self) -> Option<NodeId>,
        updaters: impl FnOnce(&mut Self) -> Vec<NodeId>,
        body: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let for_keyword = self.token("for");
        let left_parenthesis = self.token("(");
        let variables = variables(self);
        let left_separator = self.token(";");
        let condition = condition(self);
        let right_separator = self.token(";");
        let updaters = updaters(self);
        let right_parenthesis = self.token(")");
        let body = body(self);
        self.alloc(ForStatement {
            for_keyword,
            left_parenthesis,
            variables,
            initialization: None,
            left_separator,
            condition,
            right_separator,
            updaters,
            right_parenthesis,
            body,
        })
    }

    /// `for (keyword name in iterable) body`
    pub fn for_each_statement(
        &mut self,
        keyword: &str,
        name: &str,
        iterable: impl FnOnce(&mut Self) -> NodeId,
        body: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let for_keyword = self.token("for");
        let left_parenthesis = self.token("(");
        let keyword = Some(self.token(keyword));
        let identifier = self.identifier(name);
        let loop_variable = Some(self.alloc(DeclaredIdentifier {
            header: DeclarationHeader::default(),
            keyword,
            ty: None,
            identifier,
        }));
        let in_keyword = self.token("in");
        let iterable = iterable(self);
        let right_parenthesis = self.token(")");
        let body = body(self);
        self.alloc(ForEachStatement {
            await_keyword: None,
            for_keyword,
            left_parenthesis,
            loop_variable,
            identifier: None,
            in_keyword,
            iterable,
            right_parenthesis,
            body,
        })
    }

    pub fn try_statement(
        &mut self,
        body: impl FnOnce(&mut Self) -> NodeId,
        catch_clauses: impl FnOnce(&mut Self) -> Vec<NodeId>,
    ) -> NodeId {
        let try_keyword = self.token("try");
        let body = body(self);
        let catch_clauses = catch_clauses(self);
        self.alloc(TryStatement {
            try_keyword,
            body,
            catch_clauses,
            finally_keyword: None,
            finally_block: None,
        })
    }

    /// `catch (exception, stack_trace) body`
    pub fn catch_clause(
        &mut self,
        exception: &str,
        stack_trace: Option<&str>,
        body: impl FnOnce(&mut Self) -> NodeId,
    ) -> NodeId {
        let catch_keyword = Some(self.token("catch"));
        let left_parenthesis = Some(self.token("("));
        let exception_parameter = Some(self.identifier(exception));
        let (comma, stack_trace_parameter) = match stack_trace {
            Some(name) => (Some(self.token(",")), Some(self.identifier(name))),
            None => (None, None),
        };
        let right_parenthesis = Some(self.token(")"));
        let body = body(self);
        self.alloc(CatchClause {
            on_keyword: None,
            exception_type: None,
            catch_keyword,
            left_parenthesis,
            exception_parameter,
            comma,
            stack_trace_parameter,
            right_parenthesis,
            body,
        })
    }

    pub fn switch_statement(
        &mut self,
        expression: impl FnOnce(&mut Self) -> NodeId,
        members: impl FnOnce(&mut Self) -> Vec<NodeId>,
    ) -> NodeId {
        let keyword = self.token("switch");
        let left_parenthesis = self.token("(");
        let expression = expression(self);
        let right_parenthesis = self.token(")");
        let left_bracket = self.token("{");
        let members = members(self);
        let right_bracket = self.token("}");
        self.alloc(SwitchStatement {
            keyword,
            left_parenthesis,
            expression,
            right_parenthesis,
            left_bracket,
            members,
            right_bracket,
        })
    }

    pub fn switch_case(
        &mut self,
        expression: impl FnOnce(&mut Self) -> NodeId,
        statements: impl FnOnce(&mut Self) -> Vec<NodeId>,
    ) -> NodeId {
        let keyword = self.token("case");
        let expression = expression(self);
        let colon = self.token(":");
        let statements = statements(self);
        self.alloc(SwitchCase { labels: Vec::new(), keyword, expression, colon, statements })
    }

    pub fn switch_default(&mut self, statements: impl FnOnce(&mut Self) -> Vec<NodeId>) -> NodeId {
        let keyword = self.token("default");
        let colon = self.token(":");
        let statements = statements(self);
        self.alloc(SwitchDefault { labels: Vec::new(), keyword, colon, statements })
    }

    pub fn compilation_unit(
        &mut self,
        declarations: impl FnOnce(&mut Self) -> Vec<NodeId>,
    ) -> NodeId {
        let begin_token = Token::new(TextSize::new(0), "");
        self.tokens.push(begin_token.clone());
        let declarations = declarations(self);
        let end_token = self.end_token();
        let line_info = self.text.as_deref().map(LineInfo::new);
        self.alloc(CompilationUnit {
            begin_token,
            script_tag: None,
            directives: Vec::new(),
            declarations,
            end_token,
            line_info,
        })
    }
}

/// Next occurrence of `lexeme` at or after `start`. Word-like lexemes only match whole
/// words, so `i` is not found inside `if`.
fn find_lexeme(text: &str, start: usize, lexeme: &str) -> Option<usize> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_' || c == '$';
    let starts_word = lexeme.starts_with(is_word);
    let ends_word = lexeme.ends_with(is_word);

    let mut from = start;
    while let Some(found) = text[from..].find(lexeme) {
        let at = from + found;
        let end = at + lexeme.len();
        let before_ok = !starts_word || !text[..at].ends_with(is_word);
        let after_ok = !ends_word || !text[end..].starts_with(is_word);
        if before_ok && after_ok {
            return Some(at);
        }
        from = at + lexeme.len().max(1);
    }
    None
}
