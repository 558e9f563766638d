//! Fixture tests: trees handed over as JSON by the parser side of a pipeline.
//!
//! Each fixture has three files under `tests/fixtures/`:
//! - `<name>.js`: the source text the tree was parsed from
//! - `<name>.json`: the serialized tree
//! - `<name>.expected.js`: the rewritten tree, printed

use std::sync::Arc;
use tsz_ast::{AstPrinter, Node, NodeRef};
use tsz_optimizer::{might_contain_enum_pattern, rewrite_enums};

fn load_tree(json: &str) -> NodeRef {
    let node: Node = serde_json::from_str(json).expect("fixture should deserialize");
    Arc::new(node)
}

#[test]
fn wrapped_enum_fixture() {
    let source = include_str!("fixtures/wrapped_enum.js");
    let tree = load_tree(include_str!("fixtures/wrapped_enum.json"));
    let expected = include_str!("fixtures/wrapped_enum.expected.js");

    assert!(might_contain_enum_pattern(source));
    assert_eq!(AstPrinter::emit_to_string(&tree), source);

    let rewritten = rewrite_enums(&tree).expect("rewrite should succeed");
    assert_eq!(AstPrinter::emit_to_string(&rewritten), expected);
}

#[test]
fn rewritten_tree_serializes_with_pure_annotation() {
    let tree = load_tree(include_str!("fixtures/wrapped_enum.json"));
    let rewritten = rewrite_enums(&tree).expect("rewrite should succeed");

    let json = serde_json::to_value(&*rewritten).expect("tree should serialize");
    let initializer = &json["statements"][1]["declarations"][0]["initializer"];
    assert_eq!(initializer["kind"], "AnnotatedExpression");
    assert_eq!(initializer["comment"]["text"], "@__PURE__");
    assert_eq!(initializer["expression"]["kind"], "ParenthesizedExpression");
}
