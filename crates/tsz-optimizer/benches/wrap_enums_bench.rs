//! Enum wrapping benchmarks.
//!
//! Measures the textual pre-filter on source text and the tree walk on
//! synthetic modules with and without enums.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tsz_ast::{Node, NodeRef, Parameter};
use tsz_optimizer::{might_contain_enum_pattern, rewrite_enums};

/// Source with a wrapped enum near the end.
const ENUM_SOURCE: &str = r#"
function helper(a, b) {
    return a + b;
}
var total = helper(1, 2);
var Color;
(function (Color) {
    Color[Color["Red"] = 0] = "Red";
    Color[Color["Green"] = 1] = "Green";
})(Color || (Color = {}));
console.log(Color, total);
"#;

/// Source without any enum shape.
const PLAIN_SOURCE: &str = r#"
function helper(a, b) {
    return a + b;
}
var total = helper(1, 2);
var config = { debug: false };
console.log(config, total);
"#;

/// `E[E.M = i] = "M";` members
fn flat_members(name: &str, count: usize) -> Vec<NodeRef> {
    (0..count)
        .map(|i| {
            let member = format!("M{i}");
            Node::expr_stmt(Node::assign(
                Node::elem(
                    Node::id(name),
                    Node::assign(Node::prop(Node::id(name), &member), Node::number(&i.to_string())),
                ),
                Node::string(&member),
            ))
        })
        .collect()
}

/// A module of `functions` functions, each holding a flat enum when
/// `with_enums` is set and plain statements otherwise.
fn synthetic_module(functions: usize, with_enums: bool) -> NodeRef {
    let statements = (0..functions)
        .map(|i| {
            let name = format!("E{i}");
            let mut body = if with_enums {
                let mut body = vec![Node::var_stmt(&name, Some(Node::empty_object()))];
                body.extend(flat_members(&name, 8));
                body
            } else {
                vec![Node::var_stmt(&name, Some(Node::number("0")))]
            };
            body.push(Node::ret(Some(Node::id(&name))));
            Node::func_decl(&format!("f{i}"), vec![Parameter::new("x")], body)
        })
        .collect();
    Node::source_file("bench.js", statements)
}

fn bench_prefilter(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap_enums_prefilter");
    for (label, source) in [("enum", ENUM_SOURCE), ("plain", PLAIN_SOURCE)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("might_contain", label), source, |b, src| {
            b.iter(|| might_contain_enum_pattern(black_box(src)));
        });
    }
    group.finish();
}

fn bench_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap_enums_rewrite");
    for functions in [10, 100, 1_000] {
        for (label, with_enums) in [("enums", true), ("plain", false)] {
            let tree = synthetic_module(functions, with_enums);
            group.bench_with_input(
                BenchmarkId::new(label, functions),
                &tree,
                |b, tree| {
                    b.iter(|| rewrite_enums(black_box(tree)));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_prefilter, bench_rewrite);
criterion_main!(benches);
