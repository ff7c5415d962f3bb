//! Node variants.
//!
//! Every variant is a plain struct of child ids, child lists, tokens and primitive leaves.
//! Fields are declared in source order.

use std::fmt;

use line_index::LineIndex;
use sprig_span::Token;
use triomphe::Arc;

use crate::annotations::AnnotationSlots;
use crate::NodeId;

/// An ordered, owning list of child nodes.
pub type NodeList = Vec<NodeId>;

/// Documentation comment and metadata shared by every annotated declaration.
#[derive(Debug, Clone, Default)]
pub struct DeclarationHeader {
    pub documentation_comment: Option<NodeId>,
    pub metadata: NodeList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Required,
    Positional,
    Named,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    Block,
    Documentation,
    EndOfLine,
}

/// Line starts of a compilation unit, shared between a tree and its clones.
#[derive(Clone)]
pub struct LineInfo(pub Arc<LineIndex>);

impl LineInfo {
    pub fn new(text: &str) -> Self {
        Self(Arc::new(LineIndex::new(text)))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LineInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LineInfo")
    }
}

#[derive(Debug, Clone)]
pub struct AdjacentStrings {
    pub strings: NodeList,
}

#[derive(Debug, Clone)]
pub struct Annotation {
    pub at_sign: Token,
    pub name: NodeId,
    pub period: Option<Token>,
    pub constructor_name: Option<NodeId>,
    pub arguments: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct ArgumentList {
    pub left_parenthesis: Token,
    pub arguments: NodeList,
    pub right_parenthesis: Token,
}

#[derive(Debug, Clone)]
pub struct AsExpression {
    pub expression: NodeId,
    pub as_operator: Token,
    pub ty: NodeId,
}

#[derive(Debug, Clone)]
pub struct AssertStatement {
    pub keyword: Token,
    pub left_parenthesis: Token,
    pub condition: NodeId,
    pub right_parenthesis: Token,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct AssignmentExpression {
    pub left_hand_side: NodeId,
    pub operator: Token,
    pub right_hand_side: NodeId,
}

#[derive(Debug, Clone)]
pub struct AwaitExpression {
    pub await_keyword: Token,
    pub expression: NodeId,
}

#[derive(Debug, Clone)]
pub struct BinaryExpression {
    pub left_operand: NodeId,
    pub operator: Token,
    pub right_operand: NodeId,
}

#[derive(Debug, Clone)]
pub struct Block {
    pub left_bracket: Token,
    pub statements: NodeList,
    pub right_bracket: Token,
}

#[derive(Debug, Clone)]
pub struct BlockFunctionBody {
    pub keyword: Option<Token>,
    pub star: Option<Token>,
    pub block: NodeId,
}

#[derive(Debug, Clone)]
pub struct BooleanLiteral {
    pub literal: Token,
    pub value: bool,
}

#[derive(Debug, Clone)]
pub struct BreakStatement {
    pub keyword: Token,
    pub label: Option<NodeId>,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct CascadeExpression {
    pub target: NodeId,
    pub cascade_sections: NodeList,
}

#[derive(Debug, Clone)]
pub struct CatchClause {
    pub on_keyword: Option<Token>,
    pub exception_type: Option<NodeId>,
    pub catch_keyword: Option<Token>,
    pub left_parenthesis: Option<Token>,
    pub exception_parameter: Option<NodeId>,
    pub comma: Option<Token>,
    pub stack_trace_parameter: Option<NodeId>,
    pub right_parenthesis: Option<Token>,
    pub body: NodeId,
}

#[derive(Debug, Clone)]
pub struct ClassDeclaration {
    pub header: DeclarationHeader,
    pub abstract_keyword: Option<Token>,
    pub class_keyword: Token,
    pub name: NodeId,
    pub type_parameters: Option<NodeId>,
    pub extends_clause: Option<NodeId>,
    pub with_clause: Option<NodeId>,
    pub implements_clause: Option<NodeId>,
    pub native_clause: Option<NodeId>,
    pub left_bracket: Token,
    pub members: NodeList,
    pub right_bracket: Token,
}

#[derive(Debug, Clone)]
pub struct ClassTypeAlias {
    pub header: DeclarationHeader,
    pub keyword: Token,
    pub name: NodeId,
    pub type_parameters: Option<NodeId>,
    pub equals: Token,
    pub abstract_keyword: Option<Token>,
    pub superclass: NodeId,
    pub with_clause: Option<NodeId>,
    pub implements_clause: Option<NodeId>,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub kind: CommentKind,
    pub tokens: Vec<Token>,
    pub references: NodeList,
}

#[derive(Debug, Clone)]
pub struct CommentReference {
    pub new_keyword: Option<Token>,
    pub identifier: NodeId,
}

#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub begin_token: Token,
    pub script_tag: Option<NodeId>,
    pub directives: NodeList,
    pub declarations: NodeList,
    pub end_token: Token,
    pub line_info: Option<LineInfo>,
}

#[derive(Debug, Clone)]
pub struct ConditionalExpression {
    pub condition: NodeId,
    pub question: Token,
    pub then_expression: NodeId,
    pub colon: Token,
    pub else_expression: NodeId,
}

#[derive(Debug, Clone)]
pub struct ConstructorDeclaration {
    pub header: DeclarationHeader,
    pub external_keyword: Option<Token>,
    pub const_keyword: Option<Token>,
    pub factory_keyword: Option<Token>,
    pub return_type: NodeId,
    pub period: Option<Token>,
    pub name: Option<NodeId>,
    pub parameters: NodeId,
    pub separator: Option<Token>,
    pub initializers: NodeList,
    pub redirected_constructor: Option<NodeId>,
    pub body: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct ConstructorFieldInitializer {
    pub this_keyword: Option<Token>,
    pub period: Option<Token>,
    pub field_name: NodeId,
    pub equals: Token,
    pub expression: NodeId,
}

#[derive(Debug, Clone)]
pub struct ConstructorName {
    pub ty: NodeId,
    pub period: Option<Token>,
    pub name: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct ContinueStatement {
    pub keyword: Token,
    pub label: Option<NodeId>,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct DeclaredIdentifier {
    pub header: DeclarationHeader,
    pub keyword: Option<Token>,
    pub ty: Option<NodeId>,
    pub identifier: NodeId,
}

#[derive(Debug, Clone)]
pub struct DefaultFormalParameter {
    pub parameter: NodeId,
    pub kind: ParameterKind,
    pub separator: Option<Token>,
    pub default_value: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct DoStatement {
    pub do_keyword: Token,
    pub body: NodeId,
    pub while_keyword: Token,
    pub left_parenthesis: Token,
    pub condition: NodeId,
    pub right_parenthesis: Token,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct DoubleLiteral {
    pub literal: Token,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct EmptyFunctionBody {
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct EmptyStatement {
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct EnumConstantDeclaration {
    pub header: DeclarationHeader,
    pub name: NodeId,
}

#[derive(Debug, Clone)]
pub struct EnumDeclaration {
    pub header: DeclarationHeader,
    pub keyword: Token,
    pub name: NodeId,
    pub left_bracket: Token,
    pub constants: NodeList,
    pub right_bracket: Token,
}

#[derive(Debug, Clone)]
pub struct ExportDirective {
    pub header: DeclarationHeader,
    pub keyword: Token,
    pub uri: NodeId,
    pub combinators: NodeList,
    pub semicolon: Token,
    pub uri_content: Option<Box<str>>,
}

#[derive(Debug, Clone)]
pub struct ExpressionFunctionBody {
    pub keyword: Option<Token>,
    pub function_definition: Token,
    pub expression: NodeId,
    pub semicolon: Option<Token>,
}

#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    pub expression: NodeId,
    pub semicolon: Option<Token>,
}

#[derive(Debug, Clone)]
pub struct ExtendsClause {
    pub keyword: Token,
    pub superclass: NodeId,
}

#[derive(Debug, Clone)]
pub struct FieldDeclaration {
    pub header: DeclarationHeader,
    pub static_keyword: Option<Token>,
    pub fields: NodeId,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct FieldFormalParameter {
    pub header: DeclarationHeader,
    pub keyword: Option<Token>,
    pub ty: Option<NodeId>,
    pub this_keyword: Token,
    pub period: Token,
    pub identifier: NodeId,
    pub parameters: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct ForEachStatement {
    pub await_keyword: Option<Token>,
    pub for_keyword: Token,
    pub left_parenthesis: Token,
    pub loop_variable: Option<NodeId>,
    pub identifier: Option<NodeId>,
    pub in_keyword: Token,
    pub iterable: NodeId,
    pub right_parenthesis: Token,
    pub body: NodeId,
}

#[derive(Debug, Clone)]
pub struct FormalParameterList {
    pub left_parenthesis: Token,
    pub parameters: NodeList,
    pub left_delimiter: Option<Token>,
    pub right_delimiter: Option<Token>,
    pub right_parenthesis: Token,
}

#[derive(Debug, Clone)]
pub struct ForStatement {
    pub for_keyword: Token,
    pub left_parenthesis: Token,
    pub variables: Option<NodeId>,
    pub initialization: Option<NodeId>,
    pub left_separator: Token,
    pub condition: Option<NodeId>,
    pub right_separator: Token,
    pub updaters: NodeList,
    pub right_parenthesis: Token,
    pub body: NodeId,
}

#[derive(Debug, Clone)]
pub struct FunctionDeclaration {
    pub header: DeclarationHeader,
    pub external_keyword: Option<Token>,
    pub return_type: Option<NodeId>,
    pub property_keyword: Option<Token>,
    pub name: NodeId,
    pub function_expression: NodeId,
}

#[derive(Debug, Clone)]
pub struct FunctionDeclarationStatement {
    pub function_declaration: NodeId,
}

#[derive(Debug, Clone)]
pub struct FunctionExpression {
    pub parameters: Option<NodeId>,
    pub body: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct FunctionExpressionInvocation {
    pub function: NodeId,
    pub argument_list: NodeId,
}

#[derive(Debug, Clone)]
pub struct FunctionTypeAlias {
    pub header: DeclarationHeader,
    pub keyword: Token,
    pub return_type: Option<NodeId>,
    pub name: NodeId,
    pub type_parameters: Option<NodeId>,
    pub parameters: NodeId,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct FunctionTypedFormalParameter {
    pub header: DeclarationHeader,
    pub return_type: Option<NodeId>,
    pub identifier: NodeId,
    pub parameters: NodeId,
}

#[derive(Debug, Clone)]
pub struct HideCombinator {
    pub keyword: Token,
    pub hidden_names: NodeList,
}

#[derive(Debug, Clone)]
pub struct IfStatement {
    pub if_keyword: Token,
    pub left_parenthesis: Token,
    pub condition: NodeId,
    pub right_parenthesis: Token,
    pub then_statement: NodeId,
    pub else_keyword: Option<Token>,
    pub else_statement: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct ImplementsClause {
    pub keyword: Token,
    pub interfaces: NodeList,
}

#[derive(Debug, Clone)]
pub struct ImportDirective {
    pub header: DeclarationHeader,
    pub keyword: Token,
    pub uri: NodeId,
    pub deferred_keyword: Option<Token>,
    pub as_keyword: Option<Token>,
    pub prefix: Option<NodeId>,
    pub combinators: NodeList,
    pub semicolon: Token,
    pub uri_content: Option<Box<str>>,
}

#[derive(Debug, Clone)]
pub struct IndexExpression {
    pub target: Option<NodeId>,
    pub period: Option<Token>,
    pub left_bracket: Token,
    pub index: NodeId,
    pub right_bracket: Token,
}

#[derive(Debug, Clone)]
pub struct InstanceCreationExpression {
    pub keyword: Token,
    pub constructor_name: NodeId,
    pub argument_list: NodeId,
}

#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub literal: Token,
    pub value: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct InterpolationExpression {
    pub left_bracket: Token,
    pub expression: NodeId,
    pub right_bracket: Option<Token>,
}

#[derive(Debug, Clone)]
pub struct InterpolationString {
    pub contents: Token,
    pub value: Box<str>,
}

#[derive(Debug, Clone)]
pub struct IsExpression {
    pub expression: NodeId,
    pub is_operator: Token,
    pub not_operator: Option<Token>,
    pub ty: NodeId,
}

#[derive(Debug, Clone)]
pub struct Label {
    pub label: NodeId,
    pub colon: Token,
}

#[derive(Debug, Clone)]
pub struct LabeledStatement {
    pub labels: NodeList,
    pub statement: NodeId,
}

#[derive(Debug, Clone)]
pub struct LibraryDirective {
    pub header: DeclarationHeader,
    pub library_keyword: Token,
    pub name: NodeId,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct LibraryIdentifier {
    pub components: NodeList,
}

#[derive(Debug, Clone)]
pub struct ListLiteral {
    pub const_keyword: Option<Token>,
    pub type_arguments: Option<NodeId>,
    pub left_bracket: Token,
    pub elements: NodeList,
    pub right_bracket: Token,
}

#[derive(Debug, Clone)]
pub struct MapLiteral {
    pub const_keyword: Option<Token>,
    pub type_arguments: Option<NodeId>,
    pub left_bracket: Token,
    pub entries: NodeList,
    pub right_bracket: Token,
}

#[derive(Debug, Clone)]
pub struct MapLiteralEntry {
    pub key: NodeId,
    pub separator: Token,
    pub value: NodeId,
}

#[derive(Debug, Clone)]
pub struct MethodDeclaration {
    pub header: DeclarationHeader,
    pub external_keyword: Option<Token>,
    pub modifier_keyword: Option<Token>,
    pub return_type: Option<NodeId>,
    pub property_keyword: Option<Token>,
    pub operator_keyword: Option<Token>,
    pub name: NodeId,
    pub parameters: Option<NodeId>,
    pub body: NodeId,
}

#[derive(Debug, Clone)]
pub struct MethodInvocation {
    pub target: Option<NodeId>,
    pub period: Option<Token>,
    pub method_name: NodeId,
    pub argument_list: NodeId,
}

#[derive(Debug, Clone)]
pub struct NamedExpression {
    pub name: NodeId,
    pub expression: NodeId,
}

#[derive(Debug, Clone)]
pub struct NativeClause {
    pub keyword: Token,
    pub name: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct NativeFunctionBody {
    pub native_keyword: Token,
    pub string_literal: Option<NodeId>,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct NullLiteral {
    pub literal: Token,
}

#[derive(Debug, Clone)]
pub struct ParenthesizedExpression {
    pub left_parenthesis: Token,
    pub expression: NodeId,
    pub right_parenthesis: Token,
}

#[derive(Debug, Clone)]
pub struct PartDirective {
    pub header: DeclarationHeader,
    pub part_keyword: Token,
    pub uri: NodeId,
    pub semicolon: Token,
    pub uri_content: Option<Box<str>>,
}

#[derive(Debug, Clone)]
pub struct PartOfDirective {
    pub header: DeclarationHeader,
    pub part_keyword: Token,
    pub of_keyword: Token,
    pub library_name: NodeId,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct PostfixExpression {
    pub operand: NodeId,
    pub operator: Token,
}

#[derive(Debug, Clone)]
pub struct PrefixedIdentifier {
    pub prefix: NodeId,
    pub period: Token,
    pub identifier: NodeId,
}

#[derive(Debug, Clone)]
pub struct PrefixExpression {
    pub operator: Token,
    pub operand: NodeId,
}

#[derive(Debug, Clone)]
pub struct PropertyAccess {
    pub target: Option<NodeId>,
    pub operator: Token,
    pub property_name: NodeId,
}

#[derive(Debug, Clone)]
pub struct RedirectingConstructorInvocation {
    pub keyword: Token,
    pub period: Option<Token>,
    pub constructor_name: Option<NodeId>,
    pub argument_list: NodeId,
}

#[derive(Debug, Clone)]
pub struct RethrowExpression {
    pub keyword: Token,
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub keyword: Token,
    pub expression: Option<NodeId>,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct ScriptTag {
    pub script_tag: Token,
}

#[derive(Debug, Clone)]
pub struct ShowCombinator {
    pub keyword: Token,
    pub shown_names: NodeList,
}

#[derive(Debug, Clone)]
pub struct SimpleFormalParameter {
    pub header: DeclarationHeader,
    pub keyword: Option<Token>,
    pub ty: Option<NodeId>,
    pub identifier: NodeId,
}

#[derive(Debug, Clone)]
pub struct SimpleIdentifier {
    pub token: Token,
}

#[derive(Debug, Clone)]
pub struct SimpleStringLiteral {
    pub literal: Token,
    pub value: Box<str>,
}

#[derive(Debug, Clone)]
pub struct StringInterpolation {
    pub elements: NodeList,
}

#[derive(Debug, Clone)]
pub struct SuperConstructorInvocation {
    pub keyword: Token,
    pub period: Option<Token>,
    pub constructor_name: Option<NodeId>,
    pub argument_list: NodeId,
}

#[derive(Debug, Clone)]
pub struct SuperExpression {
    pub keyword: Token,
}

#[derive(Debug, Clone)]
pub struct SwitchCase {
    pub labels: NodeList,
    pub keyword: Token,
    pub expression: NodeId,
    pub colon: Token,
    pub statements: NodeList,
}

#[derive(Debug, Clone)]
pub struct SwitchDefault {
    pub labels: NodeList,
    pub keyword: Token,
    pub colon: Token,
    pub statements: NodeList,
}

#[derive(Debug, Clone)]
pub struct SwitchStatement {
    pub keyword: Token,
    pub left_parenthesis: Token,
    pub expression: NodeId,
    pub right_parenthesis: Token,
    pub left_bracket: Token,
    pub members: NodeList,
    pub right_bracket: Token,
}

#[derive(Debug, Clone)]
pub struct SymbolLiteral {
    pub pound_sign: Token,
    pub components: Vec<Token>,
}

#[derive(Debug, Clone)]
pub struct ThisExpression {
    pub keyword: Token,
}

#[derive(Debug, Clone)]
pub struct ThrowExpression {
    pub keyword: Token,
    pub expression: NodeId,
}

#[derive(Debug, Clone)]
pub struct TopLevelVariableDeclaration {
    pub header: DeclarationHeader,
    pub variables: NodeId,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct TryStatement {
    pub try_keyword: Token,
    pub body: NodeId,
    pub catch_clauses: NodeList,
    pub finally_keyword: Option<Token>,
    pub finally_block: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct TypeArgumentList {
    pub left_bracket: Token,
    pub arguments: NodeList,
    pub right_bracket: Token,
}

#[derive(Debug, Clone)]
pub struct TypeName {
    pub name: NodeId,
    pub type_arguments: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct TypeParameter {
    pub header: DeclarationHeader,
    pub name: NodeId,
    pub keyword: Option<Token>,
    pub bound: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct TypeParameterList {
    pub left_bracket: Token,
    pub type_parameters: NodeList,
    pub right_bracket: Token,
}

#[derive(Debug, Clone)]
pub struct VariableDeclaration {
    pub header: DeclarationHeader,
    pub name: NodeId,
    pub equals: Option<Token>,
    pub initializer: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct VariableDeclarationList {
    pub header: DeclarationHeader,
    pub keyword: Option<Token>,
    pub ty: Option<NodeId>,
    pub variables: NodeList,
}

#[derive(Debug, Clone)]
pub struct VariableDeclarationStatement {
    pub variables: NodeId,
    pub semicolon: Token,
}

#[derive(Debug, Clone)]
pub struct WhileStatement {
    pub keyword: Token,
    pub left_parenthesis: Token,
    pub condition: NodeId,
    pub right_parenthesis: Token,
    pub body: NodeId,
}

#[derive(Debug, Clone)]
pub struct WithClause {
    pub with_keyword: Token,
    pub mixin_types: NodeList,
}

#[derive(Debug, Clone)]
pub struct YieldStatement {
    pub yield_keyword: Token,
    pub star: Option<Token>,
    pub expression: NodeId,
    pub semicolon: Token,
}

macro_rules! node_kinds {
    ($($name:ident),* $(,)?) => {
        /// Every concrete node variant.
        #[derive(Debug, Clone)]
        pub enum NodeKind {
            $($name($name),)*
        }

        impl NodeKind {
            /// Every variant name, in declaration order.
            pub const NAMES: &'static [&'static str] = &[$(stringify!($name),)*];

            /// The variant name, as printed by the debug tree.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$name(_) => stringify!($name),)*
                }
            }
        }

        $(
            impl From<$name> for NodeKind {
                fn from(node: $name) -> Self {
                    Self::$name(node)
                }
            }
        )*
    };
}

node_kinds! {
    AdjacentStrings,
    Annotation,
    ArgumentList,
    AsExpression,
    AssertStatement,
    AssignmentExpression,
    AwaitExpression,
    BinaryExpression,
    Block,
    BlockFunctionBody,
    BooleanLiteral,
    BreakStatement,
    CascadeExpression,
    CatchClause,
    ClassDeclaration,
    ClassTypeAlias,
    Comment,
    CommentReference,
    CompilationUnit,
    ConditionalExpression,
    ConstructorDeclaration,
    ConstructorFieldInitializer,
    ConstructorName,
    ContinueStatement,
    DeclaredIdentifier,
    DefaultFormalParameter,
    DoStatement,
    DoubleLiteral,
    EmptyFunctionBody,
    EmptyStatement,
    EnumConstantDeclaration,
    EnumDeclaration,
    ExportDirective,
    ExpressionFunctionBody,
    ExpressionStatement,
    ExtendsClause,
    FieldDeclaration,
    FieldFormalParameter,
    ForEachStatement,
    FormalParameterList,
    ForStatement,
    FunctionDeclaration,
    FunctionDeclarationStatement,
    FunctionExpression,
    FunctionExpressionInvocation,
    FunctionTypeAlias,
    FunctionTypedFormalParameter,
    HideCombinator,
    IfStatement,
    ImplementsClause,
    ImportDirective,
    IndexExpression,
    InstanceCreationExpression,
    IntegerLiteral,
    InterpolationExpression,
    InterpolationString,
    IsExpression,
    Label,
    LabeledStatement,
    LibraryDirective,
    LibraryIdentifier,
    ListLiteral,
    MapLiteral,
    MapLiteralEntry,
    MethodDeclaration,
    MethodInvocation,
    NamedExpression,
    NativeClause,
    NativeFunctionBody,
    NullLiteral,
    ParenthesizedExpression,
    PartDirective,
    PartOfDirective,
    PostfixExpression,
    PrefixedIdentifier,
    PrefixExpression,
    PropertyAccess,
    RedirectingConstructorInvocation,
    RethrowExpression,
    ReturnStatement,
    ScriptTag,
    ShowCombinator,
    SimpleFormalParameter,
    SimpleIdentifier,
    SimpleStringLiteral,
    StringInterpolation,
    SuperConstructorInvocation,
    SuperExpression,
    SwitchCase,
    SwitchDefault,
    SwitchStatement,
    SymbolLiteral,
    ThisExpression,
    ThrowExpression,
    TopLevelVariableDeclaration,
    TryStatement,
    TypeArgumentList,
    TypeName,
    TypeParameter,
    TypeParameterList,
    VariableDeclaration,
    VariableDeclarationList,
    VariableDeclarationStatement,
    WhileStatement,
    WithClause,
    YieldStatement,
}

impl NodeKind {
    /// Annotation slots this variant carries through an incremental clone.
    pub fn annotation_slots(&self) -> AnnotationSlots {
        use AnnotationSlots as S;

        match self {
            Self::Annotation(_)
            | Self::CompilationUnit(_)
            | Self::ConstructorDeclaration(_)
            | Self::ExportDirective(_)
            | Self::ImportDirective(_)
            | Self::LibraryDirective(_)
            | Self::PartDirective(_)
            | Self::PartOfDirective(_) => S::ELEMENT,
            Self::FunctionExpression(_) => S::ELEMENT | S::TYPES,
            Self::AssignmentExpression(_)
            | Self::BinaryExpression(_)
            | Self::FunctionExpressionInvocation(_)
            | Self::PostfixExpression(_)
            | Self::PrefixExpression(_) => S::RESOLVED_ELEMENTS | S::TYPES,
            Self::IndexExpression(_) | Self::SimpleIdentifier(_) => {
                S::RESOLVED_ELEMENTS | S::AUXILIARY | S::TYPES
            }
            Self::ConstructorName(_)
            | Self::RedirectingConstructorInvocation(_)
            | Self::SuperConstructorInvocation(_) => S::STATIC_ELEMENT,
            Self::InstanceCreationExpression(_) => S::STATIC_ELEMENT | S::TYPES,
            Self::TypeName(_) => S::STATIC_TYPE,
            Self::AdjacentStrings(_)
            | Self::AsExpression(_)
            | Self::AwaitExpression(_)
            | Self::BooleanLiteral(_)
            | Self::CascadeExpression(_)
            | Self::ConditionalExpression(_)
            | Self::DoubleLiteral(_)
            | Self::IntegerLiteral(_)
            | Self::IsExpression(_)
            | Self::ListLiteral(_)
            | Self::MapLiteral(_)
            | Self::MethodInvocation(_)
            | Self::NamedExpression(_)
            | Self::NullLiteral(_)
            | Self::ParenthesizedExpression(_)
            | Self::PrefixedIdentifier(_)
            | Self::PropertyAccess(_)
            | Self::RethrowExpression(_)
            | Self::SimpleStringLiteral(_)
            | Self::StringInterpolation(_)
            | Self::SuperExpression(_)
            | Self::SymbolLiteral(_)
            | Self::ThisExpression(_)
            | Self::ThrowExpression(_) => S::TYPES,
            Self::ArgumentList(_)
            | Self::AssertStatement(_)
            | Self::Block(_)
            | Self::BlockFunctionBody(_)
            | Self::BreakStatement(_)
            | Self::CatchClause(_)
            | Self::ClassDeclaration(_)
            | Self::ClassTypeAlias(_)
            | Self::Comment(_)
            | Self::CommentReference(_)
            | Self::ConstructorFieldInitializer(_)
            | Self::ContinueStatement(_)
            | Self::DeclaredIdentifier(_)
            | Self::DefaultFormalParameter(_)
            | Self::DoStatement(_)
            | Self::EmptyFunctionBody(_)
            | Self::EmptyStatement(_)
            | Self::EnumConstantDeclaration(_)
            | Self::EnumDeclaration(_)
            | Self::ExpressionFunctionBody(_)
            | Self::ExpressionStatement(_)
            | Self::ExtendsClause(_)
            | Self::FieldDeclaration(_)
            | Self::FieldFormalParameter(_)
            | Self::ForEachStatement(_)
            | Self::FormalParameterList(_)
            | Self::ForStatement(_)
            | Self::FunctionDeclaration(_)
            | Self::FunctionDeclarationStatement(_)
            | Self::FunctionTypeAlias(_)
            | Self::FunctionTypedFormalParameter(_)
            | Self::HideCombinator(_)
            | Self::IfStatement(_)
            | Self::ImplementsClause(_)
            | Self::InterpolationExpression(_)
            | Self::InterpolationString(_)
            | Self::Label(_)
            | Self::LabeledStatement(_)
            | Self::LibraryIdentifier(_)
            | Self::MapLiteralEntry(_)
            | Self::MethodDeclaration(_)
            | Self::NativeClause(_)
            | Self::NativeFunctionBody(_)
            | Self::ReturnStatement(_)
            | Self::ScriptTag(_)
            | Self::ShowCombinator(_)
            | Self::SimpleFormalParameter(_)
            | Self::SwitchCase(_)
            | Self::SwitchDefault(_)
            | Self::SwitchStatement(_)
            | Self::TopLevelVariableDeclaration(_)
            | Self::TryStatement(_)
            | Self::TypeArgumentList(_)
            | Self::TypeParameter(_)
            | Self::TypeParameterList(_)
            | Self::VariableDeclaration(_)
            | Self::VariableDeclarationList(_)
            | Self::VariableDeclarationStatement(_)
            | Self::WhileStatement(_)
            | Self::WithClause(_)
            | Self::YieldStatement(_) => S::empty(),
        }
    }
}
