//! Debug printer for syntax trees.
//!
//! Renders a tree as JavaScript text with 4-space indentation. Parentheses are
//! printed only where the tree has `ParenthesizedExpression` nodes, so the
//! output reflects the tree's structure exactly. Synthetic comments on
//! `AnnotatedExpression` nodes are printed in front of their expression.
//!
//! This is not the production printer: there is no source map support and no
//! preservation of source comments. Tests and trace logs use it to show what a
//! pass produced.

use crate::node::{Modifiers, Node, NodeRef, Parameter, VarKind, VariableDeclaration};
use std::fmt::Write as _;
use tsz_common::limits::MAX_PRINT_DEPTH;

/// Tree printer writing into an owned buffer
pub struct AstPrinter {
    output: String,
    indent_level: u32,
    indent_str: &'static str,
    depth: u32,
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl AstPrinter {
    pub const fn new() -> Self {
        AstPrinter {
            output: String::new(),
            indent_level: 0,
            indent_str: "    ",
            depth: 0,
        }
    }

    /// Render a single node.
    ///
    /// Statement lists (source files) end every statement with a newline;
    /// a lone statement or expression has no trailing newline.
    pub fn emit_to_string(node: &Node) -> String {
        let mut printer = Self::new();
        printer.emit_node(node);
        printer.output
    }

    pub fn emit_node(&mut self, node: &Node) {
        if self.depth >= MAX_PRINT_DEPTH {
            self.write("/* ... */");
            return;
        }
        self.depth += 1;
        self.emit_node_inner(node);
        self.depth -= 1;
    }

    fn emit_node_inner(&mut self, node: &Node) {
        match node {
            Node::SourceFile { statements, .. } => self.emit_statement_list(statements),
            Node::Block { statements } | Node::ModuleBlock { statements } => {
                self.emit_braced_statements(statements);
            }
            Node::CaseClause {
                expression,
                statements,
            } => {
                self.write("case ");
                self.emit_node(expression);
                self.write(":");
                self.emit_clause_body(statements);
            }
            Node::DefaultClause { statements } => {
                self.write("default:");
                self.emit_clause_body(statements);
            }
            Node::VariableStatement {
                modifiers,
                declaration_kind,
                declarations,
            } => {
                self.emit_modifiers(*modifiers);
                self.emit_declaration_list(*declaration_kind, declarations);
                self.write(";");
            }
            Node::ExpressionStatement { expression } => {
                self.emit_node(expression);
                self.write(";");
            }
            Node::ReturnStatement { expression } => {
                self.write("return");
                if let Some(expr) = expression {
                    self.write(" ");
                    self.emit_node(expr);
                }
                self.write(";");
            }
            Node::IfStatement {
                condition,
                then_statement,
                else_statement,
            } => {
                self.write("if (");
                self.emit_node(condition);
                self.write(") ");
                self.emit_node(then_statement);
                if let Some(else_stmt) = else_statement {
                    self.write(" else ");
                    self.emit_node(else_stmt);
                }
            }
            Node::ForStatement {
                initializer,
                condition,
                incrementor,
                body,
            } => {
                self.write("for (");
                if let Some(init) = initializer {
                    self.emit_for_initializer(init);
                }
                self.write(";");
                if let Some(cond) = condition {
                    self.write(" ");
                    self.emit_node(cond);
                }
                self.write(";");
                if let Some(incr) = incrementor {
                    self.write(" ");
                    self.emit_node(incr);
                }
                self.write(") ");
                self.emit_node(body);
            }
            Node::ForInStatement {
                initializer,
                expression,
                body,
            } => self.emit_for_in_of("in", initializer, expression, body),
            Node::ForOfStatement {
                initializer,
                expression,
                body,
            } => self.emit_for_in_of("of", initializer, expression, body),
            Node::WhileStatement { condition, body } => {
                self.write("while (");
                self.emit_node(condition);
                self.write(") ");
                self.emit_node(body);
            }
            Node::DoStatement { body, condition } => {
                self.write("do ");
                self.emit_node(body);
                self.write(" while (");
                self.emit_node(condition);
                self.write(");");
            }
            Node::SwitchStatement {
                expression,
                clauses,
            } => {
                self.write("switch (");
                self.emit_node(expression);
                self.write(") {");
                self.write_line();
                self.increase_indent();
                for clause in clauses.iter() {
                    self.write_indent();
                    self.emit_node(clause);
                    self.write_line();
                }
                self.decrease_indent();
                self.write_indent();
                self.write("}");
            }
            Node::TryStatement {
                try_block,
                catch_clause,
                finally_block,
            } => {
                self.write("try ");
                self.emit_node(try_block);
                if let Some(catch) = catch_clause {
                    self.write(" ");
                    self.emit_node(catch);
                }
                if let Some(finally) = finally_block {
                    self.write(" finally ");
                    self.emit_node(finally);
                }
            }
            Node::CatchClause { variable, block } => {
                self.write("catch ");
                if let Some(var) = variable {
                    self.write("(");
                    self.emit_node(var);
                    self.write(") ");
                }
                self.emit_node(block);
            }
            Node::ThrowStatement { expression } => {
                self.write("throw ");
                self.emit_node(expression);
                self.write(";");
            }
            Node::LabeledStatement { label, statement } => {
                self.write(label);
                self.write(": ");
                self.emit_node(statement);
            }
            Node::BreakStatement { label } => self.emit_jump("break", label.as_deref()),
            Node::ContinueStatement { label } => self.emit_jump("continue", label.as_deref()),
            Node::EmptyStatement => self.write(";"),
            Node::FunctionDeclaration {
                modifiers,
                name,
                parameters,
                body,
            }
            | Node::FunctionExpression {
                modifiers,
                name,
                parameters,
                body,
            } => {
                self.emit_modifiers(*modifiers);
                self.emit_function(name.as_deref(), parameters, body);
            }
            Node::ClassDeclaration {
                modifiers,
                name,
                heritage,
                members,
            } => {
                self.emit_modifiers(*modifiers);
                self.emit_class(name.as_deref(), heritage.as_ref(), members);
            }
            Node::ClassExpression {
                name,
                heritage,
                members,
            } => self.emit_class(name.as_deref(), heritage.as_ref(), members),
            Node::ModuleDeclaration {
                modifiers,
                name,
                body,
            } => {
                self.emit_modifiers(*modifiers);
                self.write("namespace ");
                self.write(name);
                self.write(" ");
                self.emit_node(body);
            }
            Node::ImportDeclaration {
                default_binding,
                named_bindings,
                module_specifier,
            } => {
                self.write("import ");
                if let Some(default) = default_binding {
                    self.write(default);
                    self.write(if named_bindings.is_empty() { " " } else { ", " });
                }
                if !named_bindings.is_empty() {
                    self.write("{ ");
                    self.write(&named_bindings.join(", "));
                    self.write(" } ");
                }
                if default_binding.is_some() || !named_bindings.is_empty() {
                    self.write("from ");
                }
                self.emit_string_literal(module_specifier);
                self.write(";");
            }
            Node::MethodDeclaration {
                modifiers,
                name,
                parameters,
                body,
            } => {
                self.emit_modifiers(*modifiers);
                self.emit_node(name);
                self.emit_parameters(parameters);
                self.write(" ");
                self.emit_node(body);
            }
            Node::PropertyDeclaration {
                modifiers,
                name,
                initializer,
            } => {
                self.emit_modifiers(*modifiers);
                self.emit_node(name);
                if let Some(init) = initializer {
                    self.write(" = ");
                    self.emit_node(init);
                }
                self.write(";");
            }
            Node::Identifier { text } | Node::NumericLiteral { text } | Node::Raw { text } => {
                self.write(text);
            }
            Node::StringLiteral { text } => self.emit_string_literal(text),
            Node::BooleanLiteral { value } => self.write(if *value { "true" } else { "false" }),
            Node::NullLiteral => self.write("null"),
            Node::ThisKeyword => self.write("this"),
            Node::ObjectLiteralExpression { properties } => {
                if properties.is_empty() {
                    self.write("{}");
                } else {
                    self.write("{ ");
                    self.emit_comma_separated(properties);
                    self.write(" }");
                }
            }
            Node::PropertyAssignment { name, initializer } => {
                self.emit_property_name(name);
                self.write(": ");
                self.emit_node(initializer);
            }
            Node::ShorthandPropertyAssignment { name } => self.write(name),
            Node::SpreadAssignment { expression } | Node::SpreadElement { expression } => {
                self.write("...");
                self.emit_node(expression);
            }
            Node::ArrayLiteralExpression { elements } => {
                self.write("[");
                self.emit_comma_separated(elements);
                self.write("]");
            }
            Node::PropertyAccessExpression { expression, name } => {
                self.emit_node(expression);
                self.write(".");
                self.write(name);
            }
            Node::ElementAccessExpression {
                expression,
                argument,
            } => {
                self.emit_node(expression);
                self.write("[");
                self.emit_node(argument);
                self.write("]");
            }
            Node::CallExpression {
                expression,
                arguments,
            } => {
                self.emit_node(expression);
                self.write("(");
                self.emit_comma_separated(arguments);
                self.write(")");
            }
            Node::NewExpression {
                expression,
                arguments,
            } => {
                self.write("new ");
                self.emit_node(expression);
                if let Some(args) = arguments {
                    self.write("(");
                    self.emit_comma_separated(args);
                    self.write(")");
                }
            }
            Node::BinaryExpression {
                left,
                operator,
                right,
            } => {
                self.emit_node(left);
                if &**operator == "," {
                    self.write(", ");
                } else {
                    self.write(" ");
                    self.write(operator);
                    self.write(" ");
                }
                self.emit_node(right);
            }
            Node::PrefixUnaryExpression { operator, operand } => {
                self.write(operator);
                if operator.chars().all(|c| c.is_ascii_alphabetic()) {
                    self.write(" ");
                }
                self.emit_node(operand);
            }
            Node::PostfixUnaryExpression { operand, operator } => {
                self.emit_node(operand);
                self.write(operator);
            }
            Node::ConditionalExpression {
                condition,
                when_true,
                when_false,
            } => {
                self.emit_node(condition);
                self.write(" ? ");
                self.emit_node(when_true);
                self.write(" : ");
                self.emit_node(when_false);
            }
            Node::ParenthesizedExpression { expression } => {
                self.write("(");
                self.emit_node(expression);
                self.write(")");
            }
            Node::ArrowFunction {
                modifiers,
                parameters,
                body,
            } => {
                self.emit_modifiers(*modifiers);
                self.emit_parameters(parameters);
                self.write(" => ");
                self.emit_node(body);
            }
            Node::AnnotatedExpression {
                comment,
                expression,
            } => {
                self.write(&comment.render());
                if comment.is_multi_line {
                    self.write(" ");
                } else {
                    self.write_line();
                    self.write_indent();
                }
                self.emit_node(expression);
            }
        }
    }

    fn emit_statement_list(&mut self, statements: &[NodeRef]) {
        for stmt in statements {
            self.write_indent();
            self.emit_node(stmt);
            self.write_line();
        }
    }

    fn emit_braced_statements(&mut self, statements: &[NodeRef]) {
        if statements.is_empty() {
            self.write("{ }");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        self.emit_statement_list(statements);
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    fn emit_clause_body(&mut self, statements: &[NodeRef]) {
        self.increase_indent();
        for stmt in statements {
            self.write_line();
            self.write_indent();
            self.emit_node(stmt);
        }
        self.decrease_indent();
    }

    fn emit_declaration_list(&mut self, kind: VarKind, declarations: &[VariableDeclaration]) {
        self.write(kind.keyword());
        self.write(" ");
        for (i, decl) in declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_node(&decl.name);
            if let Some(init) = &decl.initializer {
                self.write(" = ");
                self.emit_node(init);
            }
        }
    }

    fn emit_for_initializer(&mut self, init: &Node) {
        // Declarations in a for head carry no terminating semicolon
        if let Node::VariableStatement {
            declaration_kind,
            declarations,
            ..
        } = init
        {
            self.emit_declaration_list(*declaration_kind, declarations);
        } else {
            self.emit_node(init);
        }
    }

    fn emit_for_in_of(&mut self, keyword: &str, initializer: &Node, expression: &Node, body: &Node) {
        self.write("for (");
        self.emit_for_initializer(initializer);
        self.write(" ");
        self.write(keyword);
        self.write(" ");
        self.emit_node(expression);
        self.write(") ");
        self.emit_node(body);
    }

    fn emit_jump(&mut self, keyword: &str, label: Option<&str>) {
        self.write(keyword);
        if let Some(label) = label {
            self.write(" ");
            self.write(label);
        }
        self.write(";");
    }

    fn emit_function(&mut self, name: Option<&str>, params: &[Parameter], body: &Node) {
        self.write("function ");
        if let Some(name) = name {
            self.write(name);
        }
        self.emit_parameters(params);
        self.write(" ");
        self.emit_node(body);
    }

    fn emit_class(&mut self, name: Option<&str>, heritage: Option<&NodeRef>, members: &[NodeRef]) {
        self.write("class");
        if let Some(name) = name {
            self.write(" ");
            self.write(name);
        }
        if let Some(base) = heritage {
            self.write(" extends ");
            self.emit_node(base);
        }
        self.write(" ");
        self.emit_braced_statements(members);
    }

    fn emit_parameters(&mut self, params: &[Parameter]) {
        self.write("(");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if param.rest {
                self.write("...");
            }
            self.emit_node(&param.name);
            if let Some(default) = &param.initializer {
                self.write(" = ");
                self.emit_node(default);
            }
        }
        self.write(")");
    }

    fn emit_property_name(&mut self, name: &Node) {
        match name {
            Node::Identifier { .. } | Node::StringLiteral { .. } | Node::NumericLiteral { .. } => {
                self.emit_node(name);
            }
            computed => {
                self.write("[");
                self.emit_node(computed);
                self.write("]");
            }
        }
    }

    fn emit_modifiers(&mut self, modifiers: Modifiers) {
        for (flag, keyword) in [
            (Modifiers::EXPORT, "export "),
            (Modifiers::DEFAULT, "default "),
            (Modifiers::DECLARE, "declare "),
            (Modifiers::STATIC, "static "),
            (Modifiers::ASYNC, "async "),
        ] {
            if modifiers.contains(flag) {
                self.write(keyword);
            }
        }
    }

    fn emit_comma_separated(&mut self, nodes: &[NodeRef]) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_node(node);
        }
    }

    fn emit_string_literal(&mut self, text: &str) {
        self.write("\"");
        self.write_escaped(text);
        self.write("\"");
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_escaped(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\0' => self.output.push_str("\\0"),
                c if (c as u32) < 0x20 || c == '\x7F' => {
                    let _ = write!(self.output, "\\u{:04X}", c as u32);
                }
                _ => self.output.push(c),
            }
        }
    }

    fn write_line(&mut self) {
        self.output.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(self.indent_str);
        }
    }

    const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    const fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}
