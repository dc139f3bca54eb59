//! End-to-end layout scenarios exercised through the public API only.
use std::sync::Arc;
use std::thread;

use boxcard_layout::prelude::*;
use boxcard_layout::total_size;

fn leaf(label: &str, width: f32, height: f32) -> InstructionNode {
    InstructionNode::new(width, height).with_label(label)
}

fn origin_of(surface: &RecordingSurface, label: &str) -> (f32, f32) {
    let geometry = surface.geometry_of(label).expect("node drawn");
    (geometry.x, geometry.y)
}

fn record(root: &InstructionNode) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    layout(root, 0.0, 0.0, &mut surface);
    surface
}

#[test]
fn scenario_a_row_of_two_leaves() {
    let root = leaf("root", 100.0, 100.0)
        .with_direction(Direction::Row)
        .with_children([leaf("one", 20.0, 20.0), leaf("two", 30.0, 30.0)]);
    let surface = record(&root);
    assert_eq!(origin_of(&surface, "one"), (0.0, 0.0));
    assert_eq!(origin_of(&surface, "two"), (20.0, 0.0));
}

#[test]
fn scenario_b_column_of_two_leaves() {
    let root = leaf("root", 100.0, 100.0)
        .with_direction(Direction::Column)
        .with_children([leaf("one", 20.0, 20.0), leaf("two", 30.0, 30.0)]);
    let surface = record(&root);
    assert_eq!(origin_of(&surface, "one"), (0.0, 0.0));
    assert_eq!(origin_of(&surface, "two"), (0.0, 20.0));
}

#[test]
fn scenario_c_centered_child_in_row() {
    let root = leaf("root", 100.0, 50.0).with_child(
        leaf("child", 10.0, 10.0)
            .with_direction(Direction::Row)
            .centered(),
    );
    let surface = record(&root);
    assert_eq!(origin_of(&surface, "child"), (0.0, 20.0));
}

#[test]
fn scenario_d_leading_margin() {
    let margin_end = 2.0;
    let root = leaf("root", 100.0, 100.0)
        .with_child(leaf("first", 10.0, 10.0).with_margin(EdgeInsets::from_components(
            5.0, 5.0, margin_end, 0.0,
        )))
        .with_child(leaf("second", 10.0, 10.0));
    let surface = record(&root);
    assert_eq!(origin_of(&surface, "first"), (5.0, 5.0));
    assert_eq!(origin_of(&surface, "second"), (5.0 + 10.0 + margin_end, 0.0));
}

#[test]
fn siblings_never_overlap_along_the_flow_axis() {
    for direction in [Direction::Row, Direction::Column] {
        let children: Vec<_> = (0..6)
            .map(|i| {
                let extent = 3.0 + i as f32 * 2.0;
                InstructionNode::new(extent, extent + 1.0)
                    .with_label(format!("c{i}"))
                    .with_padding(EdgeInsets::from_components(i as f32, 1.0, 0.5, i as f32))
                    .with_margin(EdgeInsets::uniform(i as f32 * 0.5))
            })
            .collect();
        let root = InstructionNode::new(500.0, 500.0)
            .with_direction(direction)
            .with_children(children.clone());
        let surface = record(&root);

        let axis = direction.flow_axis();
        for (i, pair) in children.windows(2).enumerate() {
            let current = surface.geometry_of(&format!("c{i}")).expect("drawn");
            let next = surface.geometry_of(&format!("c{}", i + 1)).expect("drawn");
            // Geometry is post-margin, so compare margin-box starts.
            let start = |g: &Geometry, node: &InstructionNode| {
                axis.coordinate(g.origin()) - node.metrics(axis).margin_start()
            };
            assert_eq!(
                start(next, &pair[1]),
                start(current, &pair[0]) + total_size(pair[0].metrics(axis)),
                "{direction:?} child {i}"
            );
        }
    }
}

#[test]
fn nested_layout_accumulates_padding_and_margin() {
    let card = InstructionNode::new(200.0, 120.0)
        .with_label("card")
        .with_direction(Direction::Column)
        .with_padding(EdgeInsets::uniform(8.0))
        .with_children([
            InstructionNode::new(184.0, 20.0)
                .with_label("header")
                .with_child(leaf("title", 60.0, 10.0).centered()),
            InstructionNode::new(184.0, 80.0)
                .with_label("body")
                .with_margin(EdgeInsets::from_components(0.0, 4.0, 0.0, 0.0))
                .with_padding(EdgeInsets::uniform(2.0))
                .with_children([leaf("left", 90.0, 76.0), leaf("right", 90.0, 76.0)]),
        ]);
    let surface = record(&card);
    assert_eq!(origin_of(&surface, "header"), (8.0, 8.0));
    assert_eq!(origin_of(&surface, "title"), (8.0, 13.0));
    assert_eq!(origin_of(&surface, "body"), (8.0, 32.0));
    assert_eq!(origin_of(&surface, "left"), (10.0, 34.0));
    assert_eq!(origin_of(&surface, "right"), (100.0, 34.0));
}

#[test]
fn independent_renders_of_a_shared_tree_agree_across_threads() {
    let tree = Arc::new(
        InstructionNode::new(300.0, 100.0)
            .with_padding(EdgeInsets::uniform(4.0))
            .with_children((0..10).map(|i| {
                InstructionNode::new(20.0, 10.0 + i as f32)
                    .with_margin(EdgeInsets::symmetric(1.0, 0.0))
                    .centered()
                    .with_draw(DrawOp::fill(Color::WHITE))
            })),
    );
    let expected = resolve(&tree);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || resolve(&tree))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("render thread"), expected);
    }
}
