//! Recursive pre-order layout walk.
//!
//! The walker resolves each node's absolute origin from its parent's running
//! cursor, hands the node to the surface, and only then places the children.
//! The cursor is a local of each frame; nodes are never written to.

use boxcard_graphics::Point;

use crate::{
    centering_offset, flow_advance, total_size, DrawSurface, Geometry, InstructionNode,
    RecordingSurface,
};

/// Lays out `node` with its margin box starting at `(origin_x, origin_y)` and
/// draws it and every descendant into `surface`.
///
/// A node is drawn before its children, and the children in order, so later
/// siblings stack on top of earlier ones. The node's own `align` is ignored
/// here: only a parent applies it while placing the node.
pub fn layout<S>(node: &InstructionNode, origin_x: f32, origin_y: f32, surface: &mut S)
where
    S: DrawSurface + ?Sized,
{
    let origin = Point::new(
        origin_x + node.horizontal.margin_start(),
        origin_y + node.vertical.margin_start(),
    );
    let geometry = Geometry::resolve(node, origin);
    log::trace!(
        "place {} at ({}, {}) {}x{}",
        node.label().unwrap_or("<node>"),
        geometry.x,
        geometry.y,
        geometry.width,
        geometry.height
    );
    surface.draw_node(node, &geometry);

    if node.is_leaf() {
        return;
    }

    let flow_axis = node.style.direction.flow_axis();
    let cross_axis = flow_axis.cross_axis();
    let parent_cross = node.metrics(cross_axis).size();

    let mut cursor = Point::new(
        origin.x + node.horizontal.padding_start(),
        origin.y + node.vertical.padding_start(),
    );
    cursor = flow_axis.offset(cursor, flow_advance(node, flow_axis));

    for child in &node.children {
        // Centering shifts a copy so the running cursor never drifts.
        let child_origin = if child.style.is_centered() {
            let delta = centering_offset(parent_cross, total_size(child.metrics(cross_axis)));
            cross_axis.offset(cursor, delta)
        } else {
            cursor
        };
        layout(child, child_origin.x, child_origin.y, surface);
        cursor = flow_axis.offset(cursor, total_size(child.metrics(flow_axis)));
    }
}

/// Resolves every node's geometry from the origin without painting, in draw
/// order (pre-order, children in sequence).
pub fn resolve(root: &InstructionNode) -> Vec<Geometry> {
    let mut recorder = RecordingSurface::new();
    layout(root, 0.0, 0.0, &mut recorder);
    recorder.into_geometries()
}

#[cfg(test)]
#[path = "tests/walker_tests.rs"]
mod tests;
