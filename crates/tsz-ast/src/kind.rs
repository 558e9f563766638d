//! Node kind discriminants.
//!
//! `SyntaxKind` is the fieldless tag of a [`Node`](crate::Node). Passes use it
//! for cheap classification (block-like scopes, statements vs expressions) and
//! for log output, without matching on the full node payload.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of a syntax tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    // Scopes
    SourceFile,
    Block,
    ModuleBlock,
    CaseClause,
    DefaultClause,

    // Statements
    VariableStatement,
    ExpressionStatement,
    ReturnStatement,
    IfStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    WhileStatement,
    DoStatement,
    SwitchStatement,
    TryStatement,
    CatchClause,
    ThrowStatement,
    LabeledStatement,
    BreakStatement,
    ContinueStatement,
    EmptyStatement,
    FunctionDeclaration,
    ClassDeclaration,
    ModuleDeclaration,
    ImportDeclaration,

    // Class members
    MethodDeclaration,
    PropertyDeclaration,

    // Expressions
    Identifier,
    NumericLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
    ThisKeyword,
    ObjectLiteralExpression,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadAssignment,
    ArrayLiteralExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    BinaryExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    ConditionalExpression,
    ParenthesizedExpression,
    FunctionExpression,
    ArrowFunction,
    ClassExpression,
    SpreadElement,
    AnnotatedExpression,
    Raw,
}

impl SyntaxKind {
    /// Whether nodes of this kind own an ordered statement list.
    ///
    /// Function bodies are `Block`s, so they are covered here as well.
    pub const fn is_block_like(self) -> bool {
        matches!(
            self,
            Self::SourceFile
                | Self::Block
                | Self::ModuleBlock
                | Self::CaseClause
                | Self::DefaultClause
        )
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
