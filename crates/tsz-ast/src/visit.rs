//! Generic child visiting.
//!
//! [`Node::map_children`] rebuilds a node with every direct child replaced by
//! the visitor's result, dispatched by tag. Children are visited in source
//! order. When the visitor hands back every child unchanged (same `Arc`), no
//! node is built and `None` is returned, so callers can keep the original
//! reference and skip allocation for untouched subtrees.

use crate::node::{Node, NodeList, NodeRef, Parameter, VariableDeclaration};
use std::sync::Arc;

/// Tracks whether any child was replaced while rebuilding one node.
struct ChildMapper<'f, E> {
    visit: &'f mut dyn FnMut(&NodeRef) -> Result<NodeRef, E>,
    changed: bool,
}

impl<E> ChildMapper<'_, E> {
    fn node(&mut self, node: &NodeRef) -> Result<NodeRef, E> {
        let mapped = (self.visit)(node)?;
        if !Arc::ptr_eq(&mapped, node) {
            self.changed = true;
        }
        Ok(mapped)
    }

    fn opt(&mut self, node: &Option<NodeRef>) -> Result<Option<NodeRef>, E> {
        node.as_ref().map(|node| self.node(node)).transpose()
    }

    /// Map a node list, copying it only from the first replaced element on.
    fn list(&mut self, list: &NodeList) -> Result<NodeList, E> {
        let mut updated: Option<Vec<NodeRef>> = None;
        for (index, node) in list.iter().enumerate() {
            let mapped = (self.visit)(node)?;
            if updated.is_none() && !Arc::ptr_eq(&mapped, node) {
                updated = Some(list[..index].to_vec());
            }
            if let Some(out) = updated.as_mut() {
                out.push(mapped);
            }
        }
        match updated {
            Some(nodes) => {
                self.changed = true;
                Ok(nodes.into())
            }
            None => Ok(Arc::clone(list)),
        }
    }

    fn opt_list(&mut self, list: &Option<NodeList>) -> Result<Option<NodeList>, E> {
        list.as_ref().map(|list| self.list(list)).transpose()
    }

    fn params(&mut self, params: &Arc<[Parameter]>) -> Result<Arc<[Parameter]>, E> {
        let before = self.changed;
        self.changed = false;
        let mut mapped = Vec::with_capacity(params.len());
        for param in params.iter() {
            mapped.push(Parameter {
                name: self.node(&param.name)?,
                initializer: self.opt(&param.initializer)?,
                rest: param.rest,
            });
        }
        let result = if self.changed {
            mapped.into()
        } else {
            Arc::clone(params)
        };
        self.changed |= before;
        Ok(result)
    }

    fn declarations(
        &mut self,
        declarations: &Arc<[VariableDeclaration]>,
    ) -> Result<Arc<[VariableDeclaration]>, E> {
        let before = self.changed;
        self.changed = false;
        let mut mapped = Vec::with_capacity(declarations.len());
        for decl in declarations.iter() {
            mapped.push(VariableDeclaration {
                name: self.node(&decl.name)?,
                initializer: self.opt(&decl.initializer)?,
            });
        }
        let result = if self.changed {
            mapped.into()
        } else {
            Arc::clone(declarations)
        };
        self.changed |= before;
        Ok(result)
    }
}

impl Node {
    /// Rebuild this node with each direct child replaced by `visit(child)`.
    ///
    /// Returns `Ok(None)` when every child came back as the same `Arc`
    /// (including for leaf nodes), otherwise the rebuilt node.
    pub fn map_children<E, F>(&self, mut visit: F) -> Result<Option<Node>, E>
    where
        F: FnMut(&NodeRef) -> Result<NodeRef, E>,
    {
        let mut m = ChildMapper {
            visit: &mut visit,
            changed: false,
        };

        let updated = match self {
            Self::SourceFile {
                file_name,
                statements,
            } => Self::SourceFile {
                file_name: file_name.clone(),
                statements: m.list(statements)?,
            },
            Self::Block { statements } => Self::Block {
                statements: m.list(statements)?,
            },
            Self::ModuleBlock { statements } => Self::ModuleBlock {
                statements: m.list(statements)?,
            },
            Self::CaseClause {
                expression,
                statements,
            } => Self::CaseClause {
                expression: m.node(expression)?,
                statements: m.list(statements)?,
            },
            Self::DefaultClause { statements } => Self::DefaultClause {
                statements: m.list(statements)?,
            },
            Self::VariableStatement {
                modifiers,
                declaration_kind,
                declarations,
            } => Self::VariableStatement {
                modifiers: *modifiers,
                declaration_kind: *declaration_kind,
                declarations: m.declarations(declarations)?,
            },
            Self::ExpressionStatement { expression } => Self::ExpressionStatement {
                expression: m.node(expression)?,
            },
            Self::ReturnStatement { expression } => Self::ReturnStatement {
                expression: m.opt(expression)?,
            },
            Self::IfStatement {
                condition,
                then_statement,
                else_statement,
            } => Self::IfStatement {
                condition: m.node(condition)?,
                then_statement: m.node(then_statement)?,
                else_statement: m.opt(else_statement)?,
            },
            Self::ForStatement {
                initializer,
                condition,
                incrementor,
                body,
            } => Self::ForStatement {
                initializer: m.opt(initializer)?,
                condition: m.opt(condition)?,
                incrementor: m.opt(incrementor)?,
                body: m.node(body)?,
            },
            Self::ForInStatement {
                initializer,
                expression,
                body,
            } => Self::ForInStatement {
                initializer: m.node(initializer)?,
                expression: m.node(expression)?,
                body: m.node(body)?,
            },
            Self::ForOfStatement {
                initializer,
                expression,
                body,
            } => Self::ForOfStatement {
                initializer: m.node(initializer)?,
                expression: m.node(expression)?,
                body: m.node(body)?,
            },
            Self::WhileStatement { condition, body } => Self::WhileStatement {
                condition: m.node(condition)?,
                body: m.node(body)?,
            },
            Self::DoStatement { body, condition } => Self::DoStatement {
                body: m.node(body)?,
                condition: m.node(condition)?,
            },
            Self::SwitchStatement {
                expression,
                clauses,
            } => Self::SwitchStatement {
                expression: m.node(expression)?,
                clauses: m.list(clauses)?,
            },
            Self::TryStatement {
                try_block,
                catch_clause,
                finally_block,
            } => Self::TryStatement {
                try_block: m.node(try_block)?,
                catch_clause: m.opt(catch_clause)?,
                finally_block: m.opt(finally_block)?,
            },
            Self::CatchClause { variable, block } => Self::CatchClause {
                variable: m.opt(variable)?,
                block: m.node(block)?,
            },
            Self::ThrowStatement { expression } => Self::ThrowStatement {
                expression: m.node(expression)?,
            },
            Self::LabeledStatement { label, statement } => Self::LabeledStatement {
                label: label.clone(),
                statement: m.node(statement)?,
            },
            Self::FunctionDeclaration {
                modifiers,
                name,
                parameters,
                body,
            } => Self::FunctionDeclaration {
                modifiers: *modifiers,
                name: name.clone(),
                parameters: m.params(parameters)?,
                body: m.node(body)?,
            },
            Self::ClassDeclaration {
                modifiers,
                name,
                heritage,
                members,
            } => Self::ClassDeclaration {
                modifiers: *modifiers,
                name: name.clone(),
                heritage: m.opt(heritage)?,
                members: m.list(members)?,
            },
            Self::ModuleDeclaration {
                modifiers,
                name,
                body,
            } => Self::ModuleDeclaration {
                modifiers: *modifiers,
                name: name.clone(),
                body: m.node(body)?,
            },
            Self::MethodDeclaration {
                modifiers,
                name,
                parameters,
                body,
            } => Self::MethodDeclaration {
                modifiers: *modifiers,
                name: m.node(name)?,
                parameters: m.params(parameters)?,
                body: m.node(body)?,
            },
            Self::PropertyDeclaration {
                modifiers,
                name,
                initializer,
            } => Self::PropertyDeclaration {
                modifiers: *modifiers,
                name: m.node(name)?,
                initializer: m.opt(initializer)?,
            },
            Self::ObjectLiteralExpression { properties } => Self::ObjectLiteralExpression {
                properties: m.list(properties)?,
            },
            Self::PropertyAssignment { name, initializer } => Self::PropertyAssignment {
                name: m.node(name)?,
                initializer: m.node(initializer)?,
            },
            Self::SpreadAssignment { expression } => Self::SpreadAssignment {
                expression: m.node(expression)?,
            },
            Self::ArrayLiteralExpression { elements } => Self::ArrayLiteralExpression {
                elements: m.list(elements)?,
            },
            Self::PropertyAccessExpression { expression, name } => {
                Self::PropertyAccessExpression {
                    expression: m.node(expression)?,
                    name: name.clone(),
                }
            }
            Self::ElementAccessExpression {
                expression,
                argument,
            } => Self::ElementAccessExpression {
                expression: m.node(expression)?,
                argument: m.node(argument)?,
            },
            Self::CallExpression {
                expression,
                arguments,
            } => Self::CallExpression {
                expression: m.node(expression)?,
                arguments: m.list(arguments)?,
            },
            Self::NewExpression {
                expression,
                arguments,
            } => Self::NewExpression {
                expression: m.node(expression)?,
                arguments: m.opt_list(arguments)?,
            },
            Self::BinaryExpression {
                left,
                operator,
                right,
            } => Self::BinaryExpression {
                left: m.node(left)?,
                operator: operator.clone(),
                right: m.node(right)?,
            },
            Self::PrefixUnaryExpression { operator, operand } => Self::PrefixUnaryExpression {
                operator: operator.clone(),
                operand: m.node(operand)?,
            },
            Self::PostfixUnaryExpression { operand, operator } => Self::PostfixUnaryExpression {
                operand: m.node(operand)?,
                operator: operator.clone(),
            },
            Self::ConditionalExpression {
                condition,
                when_true,
                when_false,
            } => Self::ConditionalExpression {
                condition: m.node(condition)?,
                when_true: m.node(when_true)?,
                when_false: m.node(when_false)?,
            },
            Self::ParenthesizedExpression { expression } => Self::ParenthesizedExpression {
                expression: m.node(expression)?,
            },
            Self::FunctionExpression {
                modifiers,
                name,
                parameters,
                body,
            } => Self::FunctionExpression {
                modifiers: *modifiers,
                name: name.clone(),
                parameters: m.params(parameters)?,
                body: m.node(body)?,
            },
            Self::ArrowFunction {
                modifiers,
                parameters,
                body,
            } => Self::ArrowFunction {
                modifiers: *modifiers,
                parameters: m.params(parameters)?,
                body: m.node(body)?,
            },
            Self::ClassExpression {
                name,
                heritage,
                members,
            } => Self::ClassExpression {
                name: name.clone(),
                heritage: m.opt(heritage)?,
                members: m.list(members)?,
            },
            Self::SpreadElement { expression } => Self::SpreadElement {
                expression: m.node(expression)?,
            },
            Self::AnnotatedExpression {
                comment,
                expression,
            } => Self::AnnotatedExpression {
                comment: comment.clone(),
                expression: m.node(expression)?,
            },
            // Leaves
            Self::BreakStatement { .. }
            | Self::ContinueStatement { .. }
            | Self::EmptyStatement
            | Self::ImportDeclaration { .. }
            | Self::Identifier { .. }
            | Self::NumericLiteral { .. }
            | Self::StringLiteral { .. }
            | Self::BooleanLiteral { .. }
            | Self::NullLiteral
            | Self::ThisKeyword
            | Self::ShorthandPropertyAssignment { .. }
            | Self::Raw { .. } => return Ok(None),
        };

        Ok(m.changed.then_some(updated))
    }
}
