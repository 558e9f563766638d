//! Enum shape detectors.
//!
//! Compilers have emitted enums in three statement shapes over the years. Each
//! detector looks at a candidate `var` statement and the statements after it
//! and decides whether they form one of these shapes:
//!
//! ## Wrapped (IIFE)
//! ```javascript
//! var E;
//! (function (E) {
//!     E[E["A"] = 0] = "A";
//! })(E || (E = {}));
//! ```
//!
//! ## Flat indexed sequence
//! ```javascript
//! var E = {};
//! E.A = 0;
//! E[E.A] = "A";
//! ```
//!
//! ## Fixed-count literal
//! ```javascript
//! var E = { A: 0, B: 1 };
//! E[E.A] = "A";
//! E[E.B] = "B";
//! ```
//!
//! Which detector runs is decided by the declaration's initializer alone
//! (none, `{}`, non-empty object literal), so at most one applies.

use smallvec::SmallVec;
use std::fmt;
use tsz_ast::{Modifiers, Node, NodeRef, VarKind, VariableDeclaration, skip_parentheses};
use tsz_common::limits::ENUM_MEMBERS_INLINE;

/// Member statements collected for a flat enum shape
pub(crate) type MemberStatements = SmallVec<[NodeRef; ENUM_MEMBERS_INLINE]>;

/// Emission shape of a recognized enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumShape {
    /// `var E; (function (E) { ... })(E || (E = {}));`
    Wrapped,
    /// `var E = {}; E.A = 0; E[E.A] = "A";`
    FlatIndexed,
    /// `var E = { A: 0 }; E[E.A] = "A";`
    FixedCount,
}

impl fmt::Display for EnumShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wrapped => "wrapped",
            Self::FlatIndexed => "flat-indexed",
            Self::FixedCount => "fixed-count",
        })
    }
}

/// What follows the anchor declaration
#[derive(Debug)]
pub(crate) enum EnumBody {
    /// The wrapper call expression (parentheses around the statement stripped)
    Iife(NodeRef),
    /// Member assignment statements, in source order
    Statements(MemberStatements),
}

/// A recognized enum declaration anchored at one `var` statement
#[derive(Debug)]
pub(crate) struct EnumCandidate<'a> {
    pub name: &'a str,
    pub shape: EnumShape,
    pub modifiers: Modifiers,
    pub declaration_kind: VarKind,
    pub declaration: &'a VariableDeclaration,
    pub body: EnumBody,
}

impl EnumCandidate<'_> {
    /// Number of statements after the anchor that belong to this enum.
    pub fn run_len(&self) -> usize {
        match &self.body {
            EnumBody::Iife(_) => 1,
            EnumBody::Statements(statements) => statements.len(),
        }
    }
}

/// Try to recognize an enum anchored at `statements[index]`.
///
/// The anchor must be a variable statement with exactly one declaration whose
/// name is an identifier, and it must not be the last statement of the scope.
/// The matched run must not reach the end of the scope either: an enum is
/// always followed by something that uses it.
pub(crate) fn find_enum_candidate(statements: &[NodeRef], index: usize) -> Option<EnumCandidate<'_>> {
    if index + 1 >= statements.len() {
        return None;
    }

    let Node::VariableStatement {
        modifiers,
        declaration_kind,
        declarations,
    } = &*statements[index]
    else {
        return None;
    };
    let [declaration] = &**declarations else {
        return None;
    };
    let name = declaration.name.identifier_text()?;

    let (shape, body) = match &declaration.initializer {
        None => {
            let iife = find_wrapped_enum_iife(name, &statements[index + 1])?;
            (EnumShape::Wrapped, EnumBody::Iife(iife))
        }
        Some(init) => {
            let properties = init.object_literal_properties()?;
            if properties.is_empty() {
                let members = find_flat_enum_statements(name, statements, index + 1);
                if members.is_empty() {
                    return None;
                }
                (EnumShape::FlatIndexed, EnumBody::Statements(members))
            } else {
                let members = find_fixed_count_statements(name, statements, index + 1);
                if members.len() != properties.len() {
                    return None;
                }
                (EnumShape::FixedCount, EnumBody::Statements(members))
            }
        }
    };

    let candidate = EnumCandidate {
        name,
        shape,
        modifiers: *modifiers,
        declaration_kind: *declaration_kind,
        declaration,
        body,
    };
    (index + 1 + candidate.run_len() < statements.len()).then_some(candidate)
}

/// Wrapped shape: `(function (E) { E[E["A"] = 0] = "A"; ... })(E || (E = {}));`
///
/// Returns the call expression. Every statement of the function body must be a
/// reverse-mapped member assignment; one stray statement rejects the whole
/// candidate.
pub(crate) fn find_wrapped_enum_iife(name: &str, statement: &NodeRef) -> Option<NodeRef> {
    let expression = statement.expression_statement()?;
    let call = skip_parentheses(expression);
    let Node::CallExpression {
        expression: callee, ..
    } = &**call
    else {
        return None;
    };
    let Node::ParenthesizedExpression {
        expression: function,
    } = &**callee
    else {
        return None;
    };
    let Node::FunctionExpression {
        parameters, body, ..
    } = &**function
    else {
        return None;
    };

    let [parameter] = &**parameters else {
        return None;
    };
    if parameter.rest || !parameter.name.is_identifier_named(name) {
        return None;
    }

    let body_statements = body.statements()?;
    if !body_statements
        .iter()
        .all(|stmt| is_reverse_mapped_member(name, stmt))
    {
        return None;
    }

    Some(call.clone())
}

/// `E[E[key] = value] = name;`
fn is_reverse_mapped_member(name: &str, statement: &Node) -> bool {
    let Some((target, _)) = statement
        .expression_statement()
        .and_then(|expr| expr.as_assignment())
    else {
        return false;
    };
    let Node::ElementAccessExpression {
        expression,
        argument,
    } = &**target
    else {
        return false;
    };
    if !expression.is_identifier_named(name) {
        return false;
    }
    let Some((inner_target, _)) = argument.as_assignment() else {
        return false;
    };
    matches!(
        &**inner_target,
        Node::ElementAccessExpression { expression, .. } if expression.is_identifier_named(name)
    )
}

/// Left-hand side of a member assignment rooted at the enum identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberAccess {
    /// `E.A = ...`
    Property,
    /// `E[...] = ...`
    Element,
}

fn member_assignment_access(name: &str, statement: &Node) -> Option<MemberAccess> {
    let (target, _) = statement.expression_statement()?.as_assignment()?;
    match &**target {
        Node::PropertyAccessExpression { expression, .. } if expression.is_identifier_named(name) => {
            Some(MemberAccess::Property)
        }
        Node::ElementAccessExpression { expression, .. } if expression.is_identifier_named(name) => {
            Some(MemberAccess::Element)
        }
        _ => None,
    }
}

/// Flat indexed shape: property assignments (`E.A = 0;`) followed by element
/// assignments (`E[E.A] = "A";` or `E[E.A = 0] = "A";`).
///
/// Collection stops at the first statement that is not a member assignment of
/// `name`, at a property assignment that follows an element assignment, or at
/// the end of the scope. Stopping before any element assignment was seen
/// rejects the candidate (empty result); stopping after keeps what was
/// collected.
pub(crate) fn find_flat_enum_statements(
    name: &str,
    statements: &[NodeRef],
    offset: usize,
) -> MemberStatements {
    let mut members = MemberStatements::new();
    let mut seen_element_access = false;

    for statement in statements.iter().skip(offset) {
        match member_assignment_access(name, statement) {
            Some(MemberAccess::Property) if !seen_element_access => {}
            Some(MemberAccess::Element) => seen_element_access = true,
            _ => break,
        }
        members.push(statement.clone());
    }

    if !seen_element_access {
        members.clear();
    }
    members
}

/// Fixed-count shape: `E[E.A] = "A";` statements. The caller compares the
/// count against the initializer's property count.
pub(crate) fn find_fixed_count_statements(
    name: &str,
    statements: &[NodeRef],
    offset: usize,
) -> MemberStatements {
    statements
        .iter()
        .skip(offset)
        .take_while(|statement| is_name_lookup_member(name, statement))
        .cloned()
        .collect()
}

/// `E[E.A] = value;`
fn is_name_lookup_member(name: &str, statement: &Node) -> bool {
    let Some((target, _)) = statement
        .expression_statement()
        .and_then(|expr| expr.as_assignment())
    else {
        return false;
    };
    let Node::ElementAccessExpression {
        expression,
        argument,
    } = &**target
    else {
        return false;
    };
    expression.is_identifier_named(name)
        && matches!(
            &**argument,
            Node::PropertyAccessExpression { expression, .. } if expression.is_identifier_named(name)
        )
}

#[cfg(test)]
#[path = "tests/detect_tests.rs"]
mod detect_tests;
