//! Recursive scan of block-like scopes.
//!
//! Statement lists are copy-on-write: nothing is allocated until the first
//! statement changes, and an untouched scope hands back its original `Arc`.

use super::detect::{EnumBody, find_enum_candidate};
use super::error::WrapEnumsError;
use super::wrapper::build_wrapped_enum;
use std::sync::Arc;
use tsz_ast::{AstPrinter, Node, NodeList, NodeRef};
use tsz_common::limits::MAX_AST_DEPTH;

/// Walks a tree, wrapping every recognized enum in every block-like scope.
pub(crate) struct BlockWalker {
    /// Current recursion depth for stack overflow protection
    depth: u32,
    /// Number of enums rewritten so far
    rewritten: usize,
}

impl BlockWalker {
    pub(crate) const fn new() -> Self {
        Self {
            depth: 0,
            rewritten: 0,
        }
    }

    pub(crate) const fn rewritten(&self) -> usize {
        self.rewritten
    }

    /// Rewrite one statement list.
    ///
    /// Recognized enums collapse into a single wrapped statement and the scan
    /// continues after the last statement they consumed. Everything else is
    /// visited for nested scopes.
    pub(crate) fn walk_statements(&mut self, statements: &NodeList) -> Result<NodeList, WrapEnumsError> {
        let mut updated: Option<Vec<NodeRef>> = None;
        let mut index = 0;

        while index < statements.len() {
            let statement = &statements[index];

            if statement.is_import_declaration() {
                if let Some(out) = updated.as_mut() {
                    out.push(Arc::clone(statement));
                }
                index += 1;
                continue;
            }

            if let Some(mut candidate) = find_enum_candidate(statements, index) {
                self.visit_enum_body(&mut candidate.body)?;
                let wrapped = build_wrapped_enum(&candidate)?;
                let members = candidate.run_len();
                tracing::debug!(
                    name = candidate.name,
                    shape = %candidate.shape,
                    members,
                    "[wrap_enums] wrapped enum"
                );
                tracing::trace!("[wrap_enums] {}", AstPrinter::emit_to_string(&wrapped));
                self.rewritten += 1;

                updated
                    .get_or_insert_with(|| statements[..index].to_vec())
                    .push(wrapped);
                index += 1 + members;
                continue;
            }

            let visited = self.visit(statement)?;
            if updated.is_none() && !Arc::ptr_eq(&visited, statement) {
                updated = Some(statements[..index].to_vec());
            }
            if let Some(out) = updated.as_mut() {
                out.push(visited);
            }
            index += 1;
        }

        Ok(match updated {
            Some(nodes) => nodes.into(),
            None => Arc::clone(statements),
        })
    }

    /// Visit a node, walking the statement list of block-like nodes and
    /// mapping the children of everything else.
    pub(crate) fn visit(&mut self, node: &NodeRef) -> Result<NodeRef, WrapEnumsError> {
        // Stack overflow protection: leave deeper subtrees untouched
        if self.depth >= MAX_AST_DEPTH {
            tracing::warn!(
                kind = %node.kind(),
                limit = MAX_AST_DEPTH,
                "[wrap_enums] nesting limit reached, subtree left unchanged"
            );
            return Ok(Arc::clone(node));
        }
        self.depth += 1;
        let result = self.visit_inner(node);
        self.depth -= 1;
        result
    }

    fn visit_inner(&mut self, node: &NodeRef) -> Result<NodeRef, WrapEnumsError> {
        if node.kind().is_block_like() {
            return self.visit_block_like(node);
        }

        Ok(match node.map_children(|child| self.visit(child))? {
            Some(rebuilt) => Arc::new(rebuilt),
            None => Arc::clone(node),
        })
    }

    /// Walk the statement list of a block-like node. A case clause's test
    /// expression is visited first, in source order.
    fn visit_block_like(&mut self, node: &NodeRef) -> Result<NodeRef, WrapEnumsError> {
        let Some(statements) = node.statements() else {
            return Ok(Arc::clone(node));
        };

        if let Node::CaseClause { expression, .. } = &**node {
            let test = self.visit(expression)?;
            let walked = self.walk_statements(statements)?;
            if Arc::ptr_eq(&test, expression) && Arc::ptr_eq(&walked, statements) {
                return Ok(Arc::clone(node));
            }
            return Ok(Node::CaseClause {
                expression: test,
                statements: walked,
            }
            .into_ref());
        }

        let walked = self.walk_statements(statements)?;
        if Arc::ptr_eq(&walked, statements) {
            return Ok(Arc::clone(node));
        }
        Ok(node
            .with_statements(walked)
            .map_or_else(|| Arc::clone(node), Arc::new))
    }

    /// Visit nested scopes inside the statements an enum run consumes, before
    /// they move into the wrapper.
    fn visit_enum_body(&mut self, body: &mut EnumBody) -> Result<(), WrapEnumsError> {
        match body {
            EnumBody::Iife(call) => *call = self.visit(call)?,
            EnumBody::Statements(members) => {
                for member in members.iter_mut() {
                    *member = self.visit(member)?;
                }
            }
        }
        Ok(())
    }
}
