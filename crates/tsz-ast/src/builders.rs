// =========================================================================
// Builder helpers for tree construction
// =========================================================================
//
// Every helper returns a shared `NodeRef` so results can be nested directly.

use crate::node::{Modifiers, Node, NodeList, NodeRef, Parameter, VarKind, VariableDeclaration};
use std::sync::Arc;
use tsz_common::SyntheticComment;

impl Node {
    /// Wrap a node in an `Arc`
    pub fn into_ref(self) -> NodeRef {
        Arc::new(self)
    }

    /// Create a node list
    pub fn list(nodes: Vec<NodeRef>) -> NodeList {
        nodes.into()
    }

    /// Create a source file
    pub fn source_file(file_name: &str, statements: Vec<NodeRef>) -> NodeRef {
        Self::SourceFile {
            file_name: file_name.into(),
            statements: statements.into(),
        }
        .into_ref()
    }

    /// Create an identifier node
    pub fn id(name: &str) -> NodeRef {
        Self::Identifier { text: name.into() }.into_ref()
    }

    /// Create a string literal
    pub fn string(s: &str) -> NodeRef {
        Self::StringLiteral { text: s.into() }.into_ref()
    }

    /// Create a numeric literal
    pub fn number(n: &str) -> NodeRef {
        Self::NumericLiteral { text: n.into() }.into_ref()
    }

    /// Create a call expression
    pub fn call(callee: NodeRef, args: Vec<NodeRef>) -> NodeRef {
        Self::CallExpression {
            expression: callee,
            arguments: args.into(),
        }
        .into_ref()
    }

    /// Create a property access
    pub fn prop(object: NodeRef, property: &str) -> NodeRef {
        Self::PropertyAccessExpression {
            expression: object,
            name: property.into(),
        }
        .into_ref()
    }

    /// Create an element access
    pub fn elem(object: NodeRef, index: NodeRef) -> NodeRef {
        Self::ElementAccessExpression {
            expression: object,
            argument: index,
        }
        .into_ref()
    }

    /// Create a binary expression
    pub fn binary(left: NodeRef, op: &str, right: NodeRef) -> NodeRef {
        Self::BinaryExpression {
            left,
            operator: op.into(),
            right,
        }
        .into_ref()
    }

    /// Create an assignment expression
    pub fn assign(target: NodeRef, value: NodeRef) -> NodeRef {
        Self::binary(target, "=", value)
    }

    /// Create a single-declaration `var` statement
    pub fn var_stmt(name: &str, init: Option<NodeRef>) -> NodeRef {
        Self::var_stmt_with(Modifiers::empty(), VarKind::Var, name, init)
    }

    /// Create a single-declaration variable statement with explicit keyword and modifiers
    pub fn var_stmt_with(
        modifiers: Modifiers,
        declaration_kind: VarKind,
        name: &str,
        init: Option<NodeRef>,
    ) -> NodeRef {
        Self::VariableStatement {
            modifiers,
            declaration_kind,
            declarations: Arc::from([VariableDeclaration {
                name: Self::id(name),
                initializer: init,
            }]),
        }
        .into_ref()
    }

    /// Create an expression statement
    pub fn expr_stmt(expr: NodeRef) -> NodeRef {
        Self::ExpressionStatement { expression: expr }.into_ref()
    }

    /// Create a return statement
    pub fn ret(expr: Option<NodeRef>) -> NodeRef {
        Self::ReturnStatement { expression: expr }.into_ref()
    }

    /// Create a block
    pub fn block(stmts: Vec<NodeRef>) -> NodeRef {
        Self::Block {
            statements: stmts.into(),
        }
        .into_ref()
    }

    /// Create a function expression
    pub fn func_expr(name: Option<&str>, params: Vec<Parameter>, body: Vec<NodeRef>) -> NodeRef {
        Self::FunctionExpression {
            modifiers: Modifiers::empty(),
            name: name.map(Into::into),
            parameters: params.into(),
            body: Self::block(body),
        }
        .into_ref()
    }

    /// Create a function declaration
    pub fn func_decl(name: &str, params: Vec<Parameter>, body: Vec<NodeRef>) -> NodeRef {
        Self::FunctionDeclaration {
            modifiers: Modifiers::empty(),
            name: Some(name.into()),
            parameters: params.into(),
            body: Self::block(body),
        }
        .into_ref()
    }

    /// Wrap in parentheses
    pub fn paren(expr: NodeRef) -> NodeRef {
        Self::ParenthesizedExpression { expression: expr }.into_ref()
    }

    /// Create an object literal from `name: value` pairs
    pub fn object(props: Vec<(&str, NodeRef)>) -> NodeRef {
        let properties: Vec<NodeRef> = props
            .into_iter()
            .map(|(name, value)| {
                Self::PropertyAssignment {
                    name: Self::id(name),
                    initializer: value,
                }
                .into_ref()
            })
            .collect();
        Self::ObjectLiteralExpression {
            properties: properties.into(),
        }
        .into_ref()
    }

    /// Create an empty object literal
    pub fn empty_object() -> NodeRef {
        Self::ObjectLiteralExpression {
            properties: Arc::from([]),
        }
        .into_ref()
    }

    /// Create a logical OR expression: `left || right`
    pub fn logical_or(left: NodeRef, right: NodeRef) -> NodeRef {
        Self::binary(left, "||", right)
    }

    /// Precede an expression with a synthetic comment
    pub fn annotated(comment: SyntheticComment, expr: NodeRef) -> NodeRef {
        Self::AnnotatedExpression {
            comment,
            expression: expr,
        }
        .into_ref()
    }

    /// Create a namespace declaration with its module block
    pub fn namespace(name: &str, body: Vec<NodeRef>) -> NodeRef {
        Self::ModuleDeclaration {
            modifiers: Modifiers::empty(),
            name: name.into(),
            body: Self::ModuleBlock {
                statements: body.into(),
            }
            .into_ref(),
        }
        .into_ref()
    }

    /// Create a named import: `import { a, b } from "./module";`
    pub fn import(names: &[&str], module_specifier: &str) -> NodeRef {
        Self::ImportDeclaration {
            default_binding: None,
            named_bindings: names.iter().map(|&name| Arc::from(name)).collect(),
            module_specifier: module_specifier.into(),
        }
        .into_ref()
    }
}

impl Parameter {
    pub fn new(name: &str) -> Self {
        Self {
            name: Node::id(name),
            initializer: None,
            rest: false,
        }
    }

    pub fn rest(name: &str) -> Self {
        Self {
            name: Node::id(name),
            initializer: None,
            rest: true,
        }
    }

    pub fn with_default(mut self, default: NodeRef) -> Self {
        self.initializer = Some(default);
        self
    }
}
