use boxcard_layout::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const ROWS_PER_CARD: usize = 16;
const CELLS_PER_ROW: usize = 8;
const DEPTH_SAMPLES: &[usize] = &[2, 4, 8];

fn stat_card(rows: usize, cells: usize) -> InstructionNode {
    InstructionNode::new(1000.0, rows as f32 * 40.0)
        .with_direction(Direction::Column)
        .with_padding(EdgeInsets::uniform(8.0))
        .with_draw(DrawOp::fill(Color::from_rgb_u8(18, 18, 24)))
        .with_children((0..rows).map(|row| {
            InstructionNode::new(984.0, 32.0)
                .with_margin(EdgeInsets::symmetric(0.0, 4.0))
                .with_draw(DrawOp::fill(Color::BLACK.with_alpha(0.5)))
                .with_children((0..cells).map(move |cell| {
                    InstructionNode::new(100.0, 16.0)
                        .with_padding(EdgeInsets::symmetric(11.0, 0.0))
                        .centered()
                        .with_draw(DrawOp::text(format!("{row}:{cell}"), Color::WHITE, 16.0))
                }))
        }))
}

fn nested(depth: usize) -> InstructionNode {
    let mut node = InstructionNode::new(4.0, 4.0);
    for level in 0..depth {
        let direction = if level % 2 == 0 {
            Direction::Row
        } else {
            Direction::Column
        };
        node = InstructionNode::new(64.0, 64.0)
            .with_direction(direction)
            .with_padding(EdgeInsets::uniform(1.0))
            .with_children([node.clone(), node.centered()]);
    }
    node
}

fn bench_card(c: &mut Criterion) {
    let card = stat_card(ROWS_PER_CARD, CELLS_PER_ROW);
    c.bench_function("layout_stat_card", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new();
            layout(black_box(&card), 0.0, 0.0, &mut surface);
            black_box(surface.nodes().len())
        })
    });
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_nested");
    for &depth in DEPTH_SAMPLES {
        let tree = nested(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tree, |b, tree| {
            b.iter(|| black_box(resolve(tree)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_card, bench_nested);
criterion_main!(benches);
