//! Canonical wrapped enum construction.
//!
//! Every recognized shape becomes one variable statement whose initializer is
//! a pure-annotated, parenthesized IIFE returning the enum object:
//!
//! ```javascript
//! var E = /*@__PURE__*/ ((function () {
//!     var E = {};
//!     E[E["A"] = 0] = "A";
//!     return E;
//! })());
//! ```
//!
//! A pre-existing wrapper keeps its own parameter and body instead:
//!
//! ```javascript
//! var E = /*@__PURE__*/ ((function (E) {
//!     E[E["A"] = 0] = "A";
//!     return E;
//! })({}));
//! ```

use super::detect::{EnumBody, EnumCandidate};
use super::error::WrapEnumsError;
use std::sync::Arc;
use tsz_ast::{Node, NodeRef, VariableDeclaration};
use tsz_common::SyntheticComment;

/// Build the replacement statement for a recognized enum.
pub(crate) fn build_wrapped_enum(candidate: &EnumCandidate<'_>) -> Result<NodeRef, WrapEnumsError> {
    match &candidate.body {
        EnumBody::Iife(call) => update_enum_iife(candidate, call),
        EnumBody::Statements(members) => Ok(create_wrapped_enum(
            candidate,
            members,
            candidate.declaration.initializer.as_ref(),
        )),
    }
}

/// Reuse an existing `(function (E) { ... })(E || (E = {}))` wrapper: append
/// `return E;` to its body and pass a fresh `{}` as the only argument.
fn update_enum_iife(
    candidate: &EnumCandidate<'_>,
    call: &NodeRef,
) -> Result<NodeRef, WrapEnumsError> {
    let invalid = || WrapEnumsError::InvalidIifeStructure {
        name: candidate.name.to_string(),
    };

    let Node::CallExpression {
        expression: callee, ..
    } = &**call
    else {
        return Err(invalid());
    };
    let Node::ParenthesizedExpression {
        expression: function,
    } = &**callee
    else {
        return Err(invalid());
    };
    let Node::FunctionExpression {
        modifiers,
        name,
        parameters,
        body,
    } = &**function
    else {
        return Err(invalid());
    };
    let (Some(parameter), Some(body_statements)) = (parameters.first(), body.statements()) else {
        return Err(invalid());
    };

    let mut statements = Vec::with_capacity(body_statements.len() + 1);
    statements.extend(body_statements.iter().cloned());
    statements.push(Node::ret(Some(parameter.name.clone())));

    let updated_function = Node::FunctionExpression {
        modifiers: *modifiers,
        name: name.clone(),
        parameters: Arc::clone(parameters),
        body: Node::block(statements),
    }
    .into_ref();
    let updated_call = Node::call(Node::paren(updated_function), vec![Node::empty_object()]);

    Ok(update_host_statement(candidate, pure_parenthesized(updated_call)))
}

/// Synthesize `(function () { var E = <literal>; ...members; return E; })()`
/// around flat member statements.
fn create_wrapped_enum(
    candidate: &EnumCandidate<'_>,
    members: &[NodeRef],
    literal_initializer: Option<&NodeRef>,
) -> NodeRef {
    let name = candidate.name;
    let initializer = literal_initializer.cloned().unwrap_or_else(Node::empty_object);

    let mut statements = Vec::with_capacity(members.len() + 2);
    statements.push(Node::var_stmt(name, Some(initializer)));
    statements.extend(members.iter().cloned());
    statements.push(Node::ret(Some(Node::id(name))));

    let iife = Node::call(Node::paren(Node::func_expr(None, Vec::new(), statements)), Vec::new());

    update_host_statement(candidate, pure_parenthesized(iife))
}

/// `/*@__PURE__*/ (expression)`, the form minifiers recognize as a pure call
fn pure_parenthesized(expression: NodeRef) -> NodeRef {
    Node::annotated(SyntheticComment::pure(), Node::paren(expression))
}

/// Rebuild the anchor statement with `expression` as its only initializer,
/// keeping its keyword, modifiers and declared name.
fn update_host_statement(candidate: &EnumCandidate<'_>, expression: NodeRef) -> NodeRef {
    Node::VariableStatement {
        modifiers: candidate.modifiers,
        declaration_kind: candidate.declaration_kind,
        declarations: Arc::from([VariableDeclaration {
            name: candidate.declaration.name.clone(),
            initializer: Some(expression),
        }]),
    }
    .into_ref()
}
