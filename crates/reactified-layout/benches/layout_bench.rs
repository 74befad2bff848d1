//! Benchmarks for the layout pass.
//!
//! Run with: cargo bench -p reactified-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use reactified_core::geometry::Rect;
use reactified_core::node::{Node, Tag};
use reactified_core::value::{Props, Value};
use reactified_layout::layout_root;
use std::hint::black_box;

fn control_row(i: usize) -> Node {
    Node::new(Tag::HStack, Props::new().with("gap", 6.0).with("align", "center")).with_children(vec![
        Node::new(Tag::Label, Props::new().with("text", format!("Setting {i}"))),
        Node::new(
            Tag::Slider,
            Props::new().with("min", 0.0).with("max", 10.0).with("step", 0.5).with("value", i as f64),
        ),
        Node::new(Tag::Button, Props::new().with("text", "Reset").with("width", 64.0)),
    ])
}

fn dashboard(rows: usize) -> Node {
    let options = (0..8).map(|i| Value::from(format!("Sector {i}"))).collect::<Vec<_>>();
    let panel = Node::new(
        Tag::Window,
        Props::new()
            .with("x", 20.0)
            .with("y", 20.0)
            .with("width", 420.0)
            .with("height", 640.0)
            .with("title", "Fleet")
            .with("gap", 4.0),
    )
    .with_children(
        std::iter::once(Node::new(
            Tag::Dropdown,
            Props::new().with("options", Value::List(options)).with("expanded?", true),
        ))
        .chain((0..rows).map(control_row))
        .collect(),
    );
    Node::new(Tag::VStack, Props::new().with("padding", 8.0)).with_children(vec![
        panel,
        Node::new(Tag::Minimap, Props::new().with("x", 1080.0).with("y", 20.0)),
    ])
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/dashboard");
    let viewport = Rect::new(0.0, 0.0, 1280.0, 720.0);

    for rows in [4, 16, 64] {
        let tree = dashboard(rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &tree, |b, tree| {
            b.iter(|| black_box(layout_root(black_box(tree), viewport)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
