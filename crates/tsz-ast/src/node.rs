//! Syntax tree nodes.
//!
//! The tree is a closed set of tagged variants, one per JavaScript construct the
//! optimizer passes inspect or traverse. Nodes are immutable and shared through
//! `Arc`: a pass that rewrites part of a tree allocates new nodes only along the
//! path to the change and reuses every untouched subtree by reference.
//!
//! Statement lists are `Arc<[NodeRef]>`, so "nothing changed in this scope" can
//! be checked with `Arc::ptr_eq` on the list.

use crate::kind::SyntaxKind;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tsz_common::SyntheticComment;

/// Shared, immutable text (identifier names, literal text, operators)
pub type Text = Arc<str>;

/// Shared reference to a node
pub type NodeRef = Arc<Node>;

/// Shared, ordered list of nodes (statement lists, arguments, properties)
pub type NodeList = Arc<[NodeRef]>;

bitflags! {
    /// Declaration modifiers carried by statements
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Modifiers: u8 {
        const EXPORT = 1 << 0;
        const DEFAULT = 1 << 1;
        const DECLARE = 1 << 2;
        const ASYNC = 1 << 3;
        const STATIC = 1 << 4;
    }
}

/// Keyword of a variable statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VarKind {
    #[default]
    Var,
    Let,
    Const,
}

impl VarKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

/// One declaration inside a variable statement: `name = initializer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    /// Identifier or binding pattern
    pub name: NodeRef,
    pub initializer: Option<NodeRef>,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Identifier or binding pattern
    pub name: NodeRef,
    pub initializer: Option<NodeRef>,
    pub rest: bool,
}

/// JavaScript syntax tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Node {
    // =========================================================================
    // Scopes
    // =========================================================================
    /// Top-level program body
    SourceFile { file_name: Text, statements: NodeList },

    /// Block statement, also used for function bodies: `{ statements }`
    Block { statements: NodeList },

    /// Namespace body: `namespace N { statements }`
    ModuleBlock { statements: NodeList },

    /// `case expression: statements`
    CaseClause {
        expression: NodeRef,
        statements: NodeList,
    },

    /// `default: statements`
    DefaultClause { statements: NodeList },

    // =========================================================================
    // Statements
    // =========================================================================
    /// Variable statement: `var a = 1, b;`
    VariableStatement {
        modifiers: Modifiers,
        declaration_kind: VarKind,
        declarations: Arc<[VariableDeclaration]>,
    },

    /// Expression statement: `expr;`
    ExpressionStatement { expression: NodeRef },

    /// Return statement: `return expr;`
    ReturnStatement { expression: Option<NodeRef> },

    /// If statement: `if (cond) then else otherwise`
    IfStatement {
        condition: NodeRef,
        then_statement: NodeRef,
        else_statement: Option<NodeRef>,
    },

    /// For statement: `for (init; cond; incr) body`
    ForStatement {
        initializer: Option<NodeRef>,
        condition: Option<NodeRef>,
        incrementor: Option<NodeRef>,
        body: NodeRef,
    },

    /// For-in statement: `for (init in expr) body`
    ForInStatement {
        initializer: NodeRef,
        expression: NodeRef,
        body: NodeRef,
    },

    /// For-of statement: `for (init of expr) body`
    ForOfStatement {
        initializer: NodeRef,
        expression: NodeRef,
        body: NodeRef,
    },

    /// While statement: `while (cond) body`
    WhileStatement { condition: NodeRef, body: NodeRef },

    /// Do-while statement: `do body while (cond);`
    DoStatement { body: NodeRef, condition: NodeRef },

    /// Switch statement; `clauses` holds `CaseClause` / `DefaultClause` nodes
    SwitchStatement { expression: NodeRef, clauses: NodeList },

    /// Try statement: `try { } catch (e) { } finally { }`
    TryStatement {
        try_block: NodeRef,
        catch_clause: Option<NodeRef>,
        finally_block: Option<NodeRef>,
    },

    /// Catch clause: `catch (variable) block`
    CatchClause {
        variable: Option<NodeRef>,
        block: NodeRef,
    },

    /// Throw statement: `throw expr;`
    ThrowStatement { expression: NodeRef },

    /// Labeled statement: `label: stmt`
    LabeledStatement { label: Text, statement: NodeRef },

    /// Break statement: `break;` or `break label;`
    BreakStatement { label: Option<Text> },

    /// Continue statement: `continue;` or `continue label;`
    ContinueStatement { label: Option<Text> },

    /// Empty statement: `;`
    EmptyStatement,

    /// Function declaration: `function name(params) { body }`
    FunctionDeclaration {
        modifiers: Modifiers,
        name: Option<Text>,
        parameters: Arc<[Parameter]>,
        body: NodeRef,
    },

    /// Class declaration: `class Name extends Base { members }`
    ClassDeclaration {
        modifiers: Modifiers,
        name: Option<Text>,
        heritage: Option<NodeRef>,
        members: NodeList,
    },

    /// Namespace declaration: `namespace Name { body }`
    ModuleDeclaration {
        modifiers: Modifiers,
        name: Text,
        body: NodeRef,
    },

    /// Import declaration: `import def, { a, b } from "./module";`
    ImportDeclaration {
        default_binding: Option<Text>,
        named_bindings: Arc<[Text]>,
        module_specifier: Text,
    },

    // =========================================================================
    // Class Members
    // =========================================================================
    /// Method: `name(params) { body }`
    MethodDeclaration {
        modifiers: Modifiers,
        name: NodeRef,
        parameters: Arc<[Parameter]>,
        body: NodeRef,
    },

    /// Property: `name = initializer;`
    PropertyDeclaration {
        modifiers: Modifiers,
        name: NodeRef,
        initializer: Option<NodeRef>,
    },

    // =========================================================================
    // Expressions
    // =========================================================================
    /// Identifier: `foo`
    Identifier { text: Text },

    /// Numeric literal, kept as source text: `42`, `0x10`
    NumericLiteral { text: Text },

    /// String literal; `text` is the unescaped value
    StringLiteral { text: Text },

    /// `true` / `false`
    BooleanLiteral { value: bool },

    /// `null`
    NullLiteral,

    /// `this`
    ThisKeyword,

    /// Object literal: `{ a: 1, b, ...c }`
    ObjectLiteralExpression { properties: NodeList },

    /// Object literal member: `name: initializer`
    PropertyAssignment { name: NodeRef, initializer: NodeRef },

    /// Object literal shorthand member: `{ name }`
    ShorthandPropertyAssignment { name: Text },

    /// Object literal spread: `{ ...expression }`
    SpreadAssignment { expression: NodeRef },

    /// Array literal: `[a, b, c]`
    ArrayLiteralExpression { elements: NodeList },

    /// Property access: `expression.name`
    PropertyAccessExpression { expression: NodeRef, name: Text },

    /// Element access: `expression[argument]`
    ElementAccessExpression { expression: NodeRef, argument: NodeRef },

    /// Call expression: `expression(arguments)`
    CallExpression {
        expression: NodeRef,
        arguments: NodeList,
    },

    /// New expression: `new expression(arguments)`
    NewExpression {
        expression: NodeRef,
        arguments: Option<NodeList>,
    },

    /// Binary expression, including assignments and the comma operator
    BinaryExpression {
        left: NodeRef,
        operator: Text,
        right: NodeRef,
    },

    /// Prefix unary expression: `!x`, `-x`, `++x`, `typeof x`
    PrefixUnaryExpression { operator: Text, operand: NodeRef },

    /// Postfix unary expression: `x++`, `x--`
    PostfixUnaryExpression { operand: NodeRef, operator: Text },

    /// Conditional expression: `cond ? when_true : when_false`
    ConditionalExpression {
        condition: NodeRef,
        when_true: NodeRef,
        when_false: NodeRef,
    },

    /// Parenthesized expression: `(expression)`
    ParenthesizedExpression { expression: NodeRef },

    /// Function expression: `function name(params) { body }`
    FunctionExpression {
        modifiers: Modifiers,
        name: Option<Text>,
        parameters: Arc<[Parameter]>,
        body: NodeRef,
    },

    /// Arrow function; `body` is a `Block` or a single expression
    ArrowFunction {
        modifiers: Modifiers,
        parameters: Arc<[Parameter]>,
        body: NodeRef,
    },

    /// Class expression: `class Name extends Base { members }`
    ClassExpression {
        name: Option<Text>,
        heritage: Option<NodeRef>,
        members: NodeList,
    },

    /// Spread element in calls and array literals: `...expression`
    SpreadElement { expression: NodeRef },

    /// Expression preceded by a synthetic comment, e.g. `/*@__PURE__*/ f()`
    AnnotatedExpression {
        comment: SyntheticComment,
        expression: NodeRef,
    },

    /// Verbatim JavaScript for constructs no pass needs to look inside
    Raw { text: Text },
}

impl Node {
    /// The discriminant of this node.
    pub const fn kind(&self) -> SyntaxKind {
        match self {
            Self::SourceFile { .. } => SyntaxKind::SourceFile,
            Self::Block { .. } => SyntaxKind::Block,
            Self::ModuleBlock { .. } => SyntaxKind::ModuleBlock,
            Self::CaseClause { .. } => SyntaxKind::CaseClause,
            Self::DefaultClause { .. } => SyntaxKind::DefaultClause,
            Self::VariableStatement { .. } => SyntaxKind::VariableStatement,
            Self::ExpressionStatement { .. } => SyntaxKind::ExpressionStatement,
            Self::ReturnStatement { .. } => SyntaxKind::ReturnStatement,
            Self::IfStatement { .. } => SyntaxKind::IfStatement,
            Self::ForStatement { .. } => SyntaxKind::ForStatement,
            Self::ForInStatement { .. } => SyntaxKind::ForInStatement,
            Self::ForOfStatement { .. } => SyntaxKind::ForOfStatement,
            Self::WhileStatement { .. } => SyntaxKind::WhileStatement,
            Self::DoStatement { .. } => SyntaxKind::DoStatement,
            Self::SwitchStatement { .. } => SyntaxKind::SwitchStatement,
            Self::TryStatement { .. } => SyntaxKind::TryStatement,
            Self::CatchClause { .. } => SyntaxKind::CatchClause,
            Self::ThrowStatement { .. } => SyntaxKind::ThrowStatement,
            Self::LabeledStatement { .. } => SyntaxKind::LabeledStatement,
            Self::BreakStatement { .. } => SyntaxKind::BreakStatement,
            Self::ContinueStatement { .. } => SyntaxKind::ContinueStatement,
            Self::EmptyStatement => SyntaxKind::EmptyStatement,
            Self::FunctionDeclaration { .. } => SyntaxKind::FunctionDeclaration,
            Self::ClassDeclaration { .. } => SyntaxKind::ClassDeclaration,
            Self::ModuleDeclaration { .. } => SyntaxKind::ModuleDeclaration,
            Self::ImportDeclaration { .. } => SyntaxKind::ImportDeclaration,
            Self::MethodDeclaration { .. } => SyntaxKind::MethodDeclaration,
            Self::PropertyDeclaration { .. } => SyntaxKind::PropertyDeclaration,
            Self::Identifier { .. } => SyntaxKind::Identifier,
            Self::NumericLiteral { .. } => SyntaxKind::NumericLiteral,
            Self::StringLiteral { .. } => SyntaxKind::StringLiteral,
            Self::BooleanLiteral { .. } => SyntaxKind::BooleanLiteral,
            Self::NullLiteral => SyntaxKind::NullLiteral,
            Self::ThisKeyword => SyntaxKind::ThisKeyword,
            Self::ObjectLiteralExpression { .. } => SyntaxKind::ObjectLiteralExpression,
            Self::PropertyAssignment { .. } => SyntaxKind::PropertyAssignment,
            Self::ShorthandPropertyAssignment { .. } => SyntaxKind::ShorthandPropertyAssignment,
            Self::SpreadAssignment { .. } => SyntaxKind::SpreadAssignment,
            Self::ArrayLiteralExpression { .. } => SyntaxKind::ArrayLiteralExpression,
            Self::PropertyAccessExpression { .. } => SyntaxKind::PropertyAccessExpression,
            Self::ElementAccessExpression { .. } => SyntaxKind::ElementAccessExpression,
            Self::CallExpression { .. } => SyntaxKind::CallExpression,
            Self::NewExpression { .. } => SyntaxKind::NewExpression,
            Self::BinaryExpression { .. } => SyntaxKind::BinaryExpression,
            Self::PrefixUnaryExpression { .. } => SyntaxKind::PrefixUnaryExpression,
            Self::PostfixUnaryExpression { .. } => SyntaxKind::PostfixUnaryExpression,
            Self::ConditionalExpression { .. } => SyntaxKind::ConditionalExpression,
            Self::ParenthesizedExpression { .. } => SyntaxKind::ParenthesizedExpression,
            Self::FunctionExpression { .. } => SyntaxKind::FunctionExpression,
            Self::ArrowFunction { .. } => SyntaxKind::ArrowFunction,
            Self::ClassExpression { .. } => SyntaxKind::ClassExpression,
            Self::SpreadElement { .. } => SyntaxKind::SpreadElement,
            Self::AnnotatedExpression { .. } => SyntaxKind::AnnotatedExpression,
            Self::Raw { .. } => SyntaxKind::Raw,
        }
    }
}
