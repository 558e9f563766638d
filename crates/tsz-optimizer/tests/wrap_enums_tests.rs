//! Tests for the enum wrapping pass over whole trees.

use std::sync::Arc;
use tsz_ast::{AstPrinter, Modifiers, Node, NodeRef, Parameter, VarKind};
use tsz_optimizer::{WrapEnumsError, rewrite_enums, rewrite_statements};

fn rewrite(root: &NodeRef) -> NodeRef {
    tsz_optimizer::init_tracing();
    rewrite_enums(root).expect("rewrite should succeed")
}

fn print(root: &NodeRef) -> String {
    AstPrinter::emit_to_string(root)
}

fn statements_of(node: &NodeRef) -> Vec<NodeRef> {
    node.statements().expect("block-like node").to_vec()
}

// =========================================================================
// Statement helpers
// =========================================================================

/// `E[E.A = 0] = "A";`
fn assigned_member(name: &str, member: &str, value: &str) -> NodeRef {
    Node::expr_stmt(Node::assign(
        Node::elem(
            Node::id(name),
            Node::assign(Node::prop(Node::id(name), member), Node::number(value)),
        ),
        Node::string(member),
    ))
}

/// `E[E["A"] = 0] = "A";`
fn reverse_member(name: &str, member: &str, value: &str) -> NodeRef {
    Node::expr_stmt(Node::assign(
        Node::elem(
            Node::id(name),
            Node::assign(Node::elem(Node::id(name), Node::string(member)), Node::number(value)),
        ),
        Node::string(member),
    ))
}

/// `E.A = 0;`
fn property_member(name: &str, member: &str, value: &str) -> NodeRef {
    Node::expr_stmt(Node::assign(Node::prop(Node::id(name), member), Node::number(value)))
}

/// `E[E.A] = "A";`
fn lookup_member(name: &str, member: &str) -> NodeRef {
    Node::expr_stmt(Node::assign(
        Node::elem(Node::id(name), Node::prop(Node::id(name), member)),
        Node::string(member),
    ))
}

/// `(function (E) { ...body })(E || (E = {}))`
fn wrapper_call(name: &str, body: Vec<NodeRef>) -> NodeRef {
    Node::call(
        Node::paren(Node::func_expr(None, vec![Parameter::new(name)], body)),
        vec![Node::logical_or(
            Node::id(name),
            Node::paren(Node::assign(Node::id(name), Node::empty_object())),
        )],
    )
}

fn use_stmt(name: &str) -> NodeRef {
    Node::expr_stmt(Node::call(Node::id("use"), vec![Node::id(name)]))
}

fn flat_enum(name: &str) -> Vec<NodeRef> {
    vec![
        Node::var_stmt(name, Some(Node::empty_object())),
        assigned_member(name, "A", "0"),
    ]
}

// =========================================================================
// Untouched trees
// =========================================================================

#[test]
fn tree_without_enums_is_returned_as_is() {
    let function = Node::func_decl(
        "f",
        vec![Parameter::new("x")],
        vec![
            Node::var_stmt("y", Some(Node::number("1"))),
            Node::ret(Some(Node::id("y"))),
        ],
    );
    let namespace = Node::namespace("N", vec![Node::var_stmt("z", None), use_stmt("z")]);
    let root = Node::source_file(
        "plain.js",
        vec![
            Node::import(&["a"], "./a"),
            function.clone(),
            namespace.clone(),
            Node::var_stmt("last", Some(Node::empty_object())),
        ],
    );

    let result = rewrite(&root);

    assert!(Arc::ptr_eq(&result, &root));
    let statements = statements_of(&result);
    assert!(Arc::ptr_eq(&statements[1], &function));
    assert!(Arc::ptr_eq(&statements[2], &namespace));
}

#[test]
fn bare_statement_list_without_enums_is_returned_as_is() {
    let statements = Node::list(vec![use_stmt("a"), use_stmt("b")]);

    let result = rewrite_statements(&statements).unwrap();

    assert!(Arc::ptr_eq(&result, &statements));
}

// =========================================================================
// Shapes
// =========================================================================

#[test]
fn wraps_flat_enum_with_reverse_assignments() {
    let root = Node::source_file(
        "flat.js",
        vec![
            Node::var_stmt("E", Some(Node::empty_object())),
            assigned_member("E", "A", "0"),
            assigned_member("E", "B", "1"),
            use_stmt("E"),
        ],
    );

    let result = rewrite(&root);

    assert_eq!(
        print(&result),
        r#"var E = /*@__PURE__*/ ((function () {
    var E = {};
    E[E.A = 0] = "A";
    E[E.B = 1] = "B";
    return E;
})());
use(E);
"#
    );
}

#[test]
fn member_statements_are_moved_not_rebuilt() {
    let members = vec![assigned_member("E", "A", "0"), assigned_member("E", "B", "1")];
    let mut input = vec![Node::var_stmt("E", Some(Node::empty_object()))];
    input.extend(members.iter().cloned());
    input.push(use_stmt("E"));
    let use_e = Arc::clone(&input[3]);

    let result = rewrite_statements(&Node::list(input)).unwrap();

    assert_eq!(result.len(), 2);
    assert!(Arc::ptr_eq(&result[1], &use_e));

    let Node::VariableStatement { declarations, .. } = &*result[0] else {
        panic!("expected a variable statement");
    };
    let initializer = declarations[0].initializer.as_ref().unwrap();
    let Node::AnnotatedExpression { expression, .. } = &**initializer else {
        panic!("expected a pure annotation");
    };
    let Node::ParenthesizedExpression { expression: call } = &**expression else {
        panic!("expected parentheses");
    };
    let Node::CallExpression {
        expression: callee,
        arguments,
    } = &**call
    else {
        panic!("expected a call");
    };
    assert!(arguments.is_empty());
    let Node::ParenthesizedExpression { expression: function } = &**callee else {
        panic!("expected a parenthesized callee");
    };
    let Node::FunctionExpression { body, .. } = &**function else {
        panic!("expected a function expression");
    };
    let body = statements_of(body);
    assert_eq!(body.len(), 4);
    assert!(Arc::ptr_eq(&body[1], &members[0]));
    assert!(Arc::ptr_eq(&body[2], &members[1]));
}

#[test]
fn wraps_flat_enum_with_forward_properties() {
    let root = Node::source_file(
        "flat.js",
        vec![
            Node::var_stmt("E", Some(Node::empty_object())),
            property_member("E", "A", "0"),
            property_member("E", "B", "1"),
            lookup_member("E", "A"),
            lookup_member("E", "B"),
            use_stmt("E"),
        ],
    );

    let result = rewrite(&root);

    assert_eq!(
        print(&result),
        r#"var E = /*@__PURE__*/ ((function () {
    var E = {};
    E.A = 0;
    E.B = 1;
    E[E.A] = "A";
    E[E.B] = "B";
    return E;
})());
use(E);
"#
    );
}

#[test]
fn flat_enum_ends_at_property_after_element() {
    let trailing = property_member("E", "C", "2");
    let root = Node::source_file(
        "flat.js",
        vec![
            Node::var_stmt("E", Some(Node::empty_object())),
            property_member("E", "A", "0"),
            lookup_member("E", "A"),
            trailing.clone(),
        ],
    );

    let result = rewrite(&root);
    let statements = statements_of(&result);

    assert_eq!(statements.len(), 2);
    assert!(Arc::ptr_eq(&statements[1], &trailing));
}

#[test]
fn flat_enum_without_element_assignments_is_left_alone() {
    let root = Node::source_file(
        "flat.js",
        vec![
            Node::var_stmt("E", Some(Node::empty_object())),
            property_member("E", "A", "0"),
            property_member("E", "B", "1"),
            use_stmt("E"),
        ],
    );

    assert!(Arc::ptr_eq(&rewrite(&root), &root));
}

#[test]
fn wraps_fixed_count_enum() {
    let root = Node::source_file(
        "fixed.js",
        vec![
            Node::var_stmt(
                "E",
                Some(Node::object(vec![("A", Node::number("0")), ("B", Node::number("1"))])),
            ),
            lookup_member("E", "A"),
            lookup_member("E", "B"),
            use_stmt("E"),
        ],
    );

    let result = rewrite(&root);

    assert_eq!(
        print(&result),
        r#"var E = /*@__PURE__*/ ((function () {
    var E = { A: 0, B: 1 };
    E[E.A] = "A";
    E[E.B] = "B";
    return E;
})());
use(E);
"#
    );
}

#[test]
fn fixed_count_mismatch_is_left_alone() {
    let literal = Node::object(vec![
        ("A", Node::number("0")),
        ("B", Node::number("1")),
        ("C", Node::number("2")),
    ]);
    let root = Node::source_file(
        "fixed.js",
        vec![
            Node::var_stmt("E", Some(literal)),
            lookup_member("E", "A"),
            lookup_member("E", "B"),
            use_stmt("E"),
        ],
    );

    assert!(Arc::ptr_eq(&rewrite(&root), &root));
}

#[test]
fn wraps_existing_enum_iife() {
    let root = Node::source_file(
        "wrapped.js",
        vec![
            Node::var_stmt("E", None),
            Node::expr_stmt(wrapper_call(
                "E",
                vec![reverse_member("E", "A", "0"), reverse_member("E", "B", "1")],
            )),
            use_stmt("E"),
        ],
    );

    let result = rewrite(&root);

    assert_eq!(
        print(&result),
        r#"var E = /*@__PURE__*/ ((function (E) {
    E[E["A"] = 0] = "A";
    E[E["B"] = 1] = "B";
    return E;
})({}));
use(E);
"#
    );
}

#[test]
fn wraps_parenthesized_enum_iife_statement() {
    let root = Node::source_file(
        "wrapped.js",
        vec![
            Node::var_stmt("E", None),
            Node::expr_stmt(Node::paren(wrapper_call("E", vec![reverse_member("E", "A", "0")]))),
            use_stmt("E"),
        ],
    );

    let result = rewrite(&root);

    assert_eq!(
        print(&result),
        r#"var E = /*@__PURE__*/ ((function (E) {
    E[E["A"] = 0] = "A";
    return E;
})({}));
use(E);
"#
    );
}

#[test]
fn enum_iife_with_other_statements_is_left_alone() {
    let root = Node::source_file(
        "wrapped.js",
        vec![
            Node::var_stmt("E", None),
            Node::expr_stmt(wrapper_call(
                "E",
                vec![reverse_member("E", "A", "0"), use_stmt("E")],
            )),
            use_stmt("E"),
        ],
    );

    assert!(Arc::ptr_eq(&rewrite(&root), &root));
}

#[test]
fn enum_iife_with_nothing_following_is_left_alone() {
    let root = Node::source_file(
        "wrapped.js",
        vec![
            Node::var_stmt("F", None),
            Node::expr_stmt(wrapper_call("F", vec![reverse_member("F", "X", "0")])),
        ],
    );

    assert!(Arc::ptr_eq(&rewrite(&root), &root));
}

#[test]
fn keeps_declaration_keyword_and_export() {
    let mut statements = vec![Node::var_stmt_with(
        Modifiers::EXPORT,
        VarKind::Let,
        "E",
        Some(Node::empty_object()),
    )];
    statements.push(assigned_member("E", "A", "0"));
    statements.push(use_stmt("E"));
    let root = Node::source_file("exported.js", statements);

    let result = rewrite(&root);

    assert_eq!(
        print(&result),
        r#"export let E = /*@__PURE__*/ ((function () {
    var E = {};
    E[E.A = 0] = "A";
    return E;
})());
use(E);
"#
    );
}

// =========================================================================
// Scopes
// =========================================================================

#[test]
fn last_statement_is_never_a_candidate() {
    let root = Node::source_file(
        "last.js",
        vec![use_stmt("x"), Node::var_stmt("E", Some(Node::empty_object()))],
    );

    assert!(Arc::ptr_eq(&rewrite(&root), &root));
}

#[test]
fn imports_are_never_altered() {
    let import = Node::import(&["E"], "./enums");
    let mut statements = vec![Arc::clone(&import)];
    statements.extend(flat_enum("F"));
    statements.push(use_stmt("F"));
    let root = Node::source_file("imports.js", statements);

    let result = rewrite(&root);
    let statements = statements_of(&result);

    assert_eq!(statements.len(), 3);
    assert!(Arc::ptr_eq(&statements[0], &import));
}

#[test]
fn rewrites_consecutive_enums() {
    let mut statements = flat_enum("E");
    statements.extend(flat_enum("F"));
    statements.push(use_stmt("E"));
    let root = Node::source_file("many.js", statements);

    let result = rewrite(&root);
    let statements = statements_of(&result);

    assert_eq!(statements.len(), 3);
    assert!(print(&statements[0]).starts_with("var E = /*@__PURE__*/"));
    assert!(print(&statements[1]).starts_with("var F = /*@__PURE__*/"));
}

#[test]
fn rewrites_enum_three_levels_deep() {
    let before = Node::var_stmt("before", Some(Node::number("1")));
    let after = use_stmt("N");
    let mut case_body = flat_enum("E");
    case_body.push(use_stmt("E"));
    case_body.push(Node::BreakStatement { label: None }.into_ref());
    let default_clause = Node::DefaultClause {
        statements: Node::list(vec![use_stmt("x")]),
    }
    .into_ref();
    let switch = Node::SwitchStatement {
        expression: Node::id("x"),
        clauses: Node::list(vec![
            Node::CaseClause {
                expression: Node::number("1"),
                statements: Node::list(case_body),
            }
            .into_ref(),
            Arc::clone(&default_clause),
        ]),
    }
    .into_ref();
    let function = Node::func_decl("f", Vec::new(), vec![switch]);
    let namespace = Node::namespace("N", vec![Arc::clone(&before), function]);
    let root = Node::source_file("nested.js", vec![namespace, Arc::clone(&after)]);

    let result = rewrite(&root);

    assert_eq!(
        print(&result),
        r#"namespace N {
    var before = 1;
    function f() {
        switch (x) {
            case 1:
                var E = /*@__PURE__*/ ((function () {
                    var E = {};
                    E[E.A = 0] = "A";
                    return E;
                })());
                use(E);
                break;
            default:
                use(x);
        }
    }
}
use(N);
"#
    );

    let top = statements_of(&result);
    assert!(Arc::ptr_eq(&top[1], &after));
    let Node::ModuleDeclaration { body, .. } = &*top[0] else {
        panic!("expected a namespace");
    };
    assert!(Arc::ptr_eq(&statements_of(body)[0], &before));
}

#[test]
fn rewrites_enum_inside_function_expression_argument() {
    let mut body = flat_enum("E");
    body.push(Node::ret(Some(Node::id("E"))));
    let callback = Node::func_expr(None, Vec::new(), body);
    let root = Node::source_file(
        "callback.js",
        vec![Node::expr_stmt(Node::call(Node::id("define"), vec![callback]))],
    );

    let result = rewrite(&root);

    assert_eq!(
        print(&result),
        r#"define(function () {
    var E = /*@__PURE__*/ ((function () {
        var E = {};
        E[E.A = 0] = "A";
        return E;
    })());
    return E;
});
"#
    );
}

#[test]
fn rewrites_enum_nested_inside_enum_member_value() {
    let mut inner = flat_enum("F");
    inner.push(Node::ret(Some(Node::id("F"))));
    let member = Node::expr_stmt(Node::assign(
        Node::prop(Node::id("E"), "A"),
        Node::func_expr(None, Vec::new(), inner),
    ));
    let root = Node::source_file(
        "member.js",
        vec![
            Node::var_stmt("E", Some(Node::empty_object())),
            member,
            lookup_member("E", "A"),
            use_stmt("E"),
        ],
    );

    let result = rewrite(&root);

    assert_eq!(
        print(&result),
        r#"var E = /*@__PURE__*/ ((function () {
    var E = {};
    E.A = function () {
        var F = /*@__PURE__*/ ((function () {
            var F = {};
            F[F.A = 0] = "A";
            return F;
        })());
        return F;
    };
    E[E.A] = "A";
    return E;
})());
use(E);
"#
    );
}

#[test]
fn error_message_names_the_enum() {
    let error = WrapEnumsError::InvalidIifeStructure {
        name: "Color".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "invalid IIFE structure for enum `Color`: expected `(function (Color) { ... })(...)`"
    );
}
