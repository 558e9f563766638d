//! Node access methods.
//!
//! Small query helpers used by passes to look inside nodes without spelling
//! out full variant patterns at every call site.

use crate::node::{Node, NodeList, NodeRef};

impl Node {
    /// Statement list of a block-like node.
    #[inline]
    pub fn statements(&self) -> Option<&NodeList> {
        match self {
            Self::SourceFile { statements, .. }
            | Self::Block { statements }
            | Self::ModuleBlock { statements }
            | Self::CaseClause { statements, .. }
            | Self::DefaultClause { statements } => Some(statements),
            _ => None,
        }
    }

    /// Copy of a block-like node with its statement list replaced.
    ///
    /// Returns `None` for nodes that are not block-like.
    pub fn with_statements(&self, statements: NodeList) -> Option<Node> {
        let updated = match self {
            Self::SourceFile { file_name, .. } => Self::SourceFile {
                file_name: file_name.clone(),
                statements,
            },
            Self::Block { .. } => Self::Block { statements },
            Self::ModuleBlock { .. } => Self::ModuleBlock { statements },
            Self::CaseClause { expression, .. } => Self::CaseClause {
                expression: expression.clone(),
                statements,
            },
            Self::DefaultClause { .. } => Self::DefaultClause { statements },
            _ => return None,
        };
        Some(updated)
    }

    /// Identifier text, if this is an identifier.
    #[inline]
    pub fn identifier_text(&self) -> Option<&str> {
        match self {
            Self::Identifier { text } => Some(&**text),
            _ => None,
        }
    }

    /// Check if this is an identifier with the given text.
    #[inline]
    pub fn is_identifier_named(&self, name: &str) -> bool {
        self.identifier_text() == Some(name)
    }

    /// Expression of an expression statement.
    #[inline]
    pub fn expression_statement(&self) -> Option<&NodeRef> {
        match self {
            Self::ExpressionStatement { expression } => Some(expression),
            _ => None,
        }
    }

    /// Target and value of a plain `=` assignment.
    pub fn as_assignment(&self) -> Option<(&NodeRef, &NodeRef)> {
        match self {
            Self::BinaryExpression {
                left,
                operator,
                right,
            } if &**operator == "=" => Some((left, right)),
            _ => None,
        }
    }

    /// Properties of an object literal.
    #[inline]
    pub fn object_literal_properties(&self) -> Option<&NodeList> {
        match self {
            Self::ObjectLiteralExpression { properties } => Some(properties),
            _ => None,
        }
    }

    /// Whether this is an import declaration.
    #[inline]
    pub const fn is_import_declaration(&self) -> bool {
        matches!(self, Self::ImportDeclaration { .. })
    }
}

/// Skip any number of enclosing parentheses.
pub fn skip_parentheses(mut node: &NodeRef) -> &NodeRef {
    while let Node::ParenthesizedExpression { expression } = &**node {
        node = expression;
    }
    node
}
