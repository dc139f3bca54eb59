//! Render driver tests: tree in, pixels / PNG out.
use std::sync::Arc;
use std::thread;

use boxcard_graphics::{Color, DrawOp, EdgeInsets, Sampling};
use boxcard_layout::{Direction, InstructionNode};
use boxcard_render_pixels::{
    render_png, render_to_surface, GlyphRasterizer, RenderError, RenderOptions,
    DEFAULT_CACHE_CAPACITY,
};

const GREY: Color = Color::rgb(0.5, 0.5, 0.5);

static DEJAVU_SANS_MONO: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

fn swatch_card() -> InstructionNode {
    InstructionNode::new(8.0, 4.0)
        .with_padding(EdgeInsets::uniform(1.0))
        .with_draw(DrawOp::fill(Color::BLACK))
        .with_children([
            InstructionNode::new(4.0, 4.0).with_draw(DrawOp::fill(Color::RED)),
            InstructionNode::new(2.0, 2.0)
                .centered()
                .with_draw(DrawOp::fill(Color::GREEN)),
        ])
}

#[test]
fn driver_paints_nodes_at_resolved_geometry() {
    let surface = render_to_surface(&swatch_card(), &RenderOptions::new(10, 6)).expect("render");
    assert_eq!(surface.sampling(), Sampling::Nearest);
    // root padding box: 0..10 x 0..6
    assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 255]));
    // first child: x 1..5, y 1..5
    assert_eq!(surface.pixel(1, 1), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(4, 4), Some([255, 0, 0, 255]));
    // second child centered vertically: x 5..7, y 2..4
    assert_eq!(surface.pixel(5, 2), Some([0, 255, 0, 255]));
    assert_eq!(surface.pixel(5, 1), Some([0, 0, 0, 255]));
    assert_eq!(surface.pixel(7, 2), Some([0, 0, 0, 255]));
}

#[test]
fn children_are_painted_over_their_parent() {
    let root = InstructionNode::new(4.0, 4.0)
        .with_draw(DrawOp::fill(Color::BLUE))
        .with_child(InstructionNode::new(4.0, 4.0).with_draw(DrawOp::fill(Color::WHITE)));
    let surface = render_to_surface(&root, &RenderOptions::new(4, 4)).expect("render");
    assert!(surface
        .pixels()
        .chunks_exact(4)
        .all(|pixel| *pixel == [255, 255, 255, 255]));
}

#[test]
fn padding_offsets_children_inside_the_parent_fill() {
    let root = InstructionNode::new(2.0, 2.0)
        .with_padding(EdgeInsets::from_components(2.0, 1.0, 0.0, 0.0))
        .with_draw(DrawOp::fill(Color::BLACK))
        .with_child(InstructionNode::new(2.0, 2.0).with_draw(DrawOp::fill(Color::RED)));
    let surface = render_to_surface(&root, &RenderOptions::new(4, 3)).expect("render");
    assert_eq!(surface.pixel(1, 1), Some([0, 0, 0, 255]));
    assert_eq!(surface.pixel(2, 0), Some([0, 0, 0, 255]));
    assert_eq!(surface.pixel(2, 1), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(3, 2), Some([255, 0, 0, 255]));
}

#[test]
fn background_is_applied_before_the_walk() {
    let root = InstructionNode::new(2.0, 2.0).with_draw(DrawOp::fill(Color::WHITE.with_alpha(0.0)));
    let surface = render_to_surface(&root, &RenderOptions::new(3, 3).with_background(GREY))
        .expect("render");
    assert_eq!(surface.pixel(2, 2), Some([128, 128, 128, 255]));
}

#[test]
fn overflowing_children_are_clipped_to_the_surface() {
    let root = InstructionNode::new(4.0, 2.0).with_child(
        InstructionNode::new(4.0, 8.0)
            .centered()
            .with_draw(DrawOp::fill(Color::RED)),
    );
    let surface = render_to_surface(&root, &RenderOptions::new(4, 2)).expect("render");
    assert!(surface
        .pixels()
        .chunks_exact(4)
        .all(|pixel| *pixel == [255, 0, 0, 255]));
}

#[test]
fn surface_errors_are_reported_distinctly() {
    let err = render_to_surface(&swatch_card(), &RenderOptions::new(0, 0))
        .err()
        .expect("zero-sized surface must fail");
    assert!(matches!(err, RenderError::SurfaceAllocation { .. }));
    assert_eq!(err.to_string(), "cannot allocate a 0x0 surface");
}

#[test]
fn bad_font_bytes_are_a_font_error() {
    let err = GlyphRasterizer::from_bytes(b"not a font".to_vec(), DEFAULT_CACHE_CAPACITY)
        .expect_err("garbage is not a font");
    assert!(matches!(err, RenderError::Font(_)));
}

#[test]
fn text_nodes_render_without_a_font() {
    let root = InstructionNode::new(20.0, 10.0)
        .with_direction(Direction::Column)
        .with_child(InstructionNode::new(20.0, 10.0).with_draw(DrawOp::text(
            "Wins",
            Color::WHITE,
            8.0,
        )));
    let bytes = render_png(&root, &RenderOptions::new(20, 10)).expect("render");
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn text_is_drawn_from_the_inner_origin_in_hard_pixels() {
    let glyphs = GlyphRasterizer::from_bytes(DEJAVU_SANS_MONO.to_vec(), DEFAULT_CACHE_CAPACITY)
        .expect("bundled font parses");
    let root = InstructionNode::new(40.0, 20.0)
        .with_padding(EdgeInsets::from_components(6.0, 4.0, 0.0, 0.0))
        .with_draw(DrawOp::text("W", Color::WHITE, 16.0));
    let options = RenderOptions::new(46, 24).with_glyphs(glyphs);
    let surface = render_to_surface(&root, &options).expect("render");

    let painted: Vec<(usize, [u8; 4])> = surface
        .pixels()
        .chunks_exact(4)
        .enumerate()
        .filter(|(_, pixel)| pixel[3] > 0)
        .map(|(index, pixel)| (index, [pixel[0], pixel[1], pixel[2], pixel[3]]))
        .collect();
    assert!(!painted.is_empty());
    for (index, rgba) in painted {
        let (x, y) = (index % 46, index / 46);
        assert!(x >= 5 && y >= 4, "ink at ({x}, {y}) is outside the content box");
        assert_eq!(rgba, [255, 255, 255, 255]);
    }
}

#[test]
fn png_output_is_deterministic_and_parallel_safe() {
    let tree = Arc::new(swatch_card());
    let options = RenderOptions::new(10, 6).with_background(GREY);
    let expected = render_png(&tree, &options).expect("render");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree = Arc::clone(&tree);
            let options = options.clone();
            thread::spawn(move || render_png(&tree, &options).expect("render"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("render thread"), expected);
    }
}
