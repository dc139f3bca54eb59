//! Footprint arithmetic consulted by the walker at every node.

use crate::{Axis, AxisMetrics, InstructionNode};

/// Full footprint along one axis: margin, padding and content on both sides.
#[inline]
pub fn total_size(metrics: &AxisMetrics) -> f32 {
    metrics.margin_start()
        + metrics.padding_start()
        + metrics.size()
        + metrics.padding_end()
        + metrics.margin_end()
}

/// Offset that centers a child footprint inside a parent extent.
///
/// Negative when the child is larger than the parent; callers apply it as is
/// and the child overflows on both sides.
#[inline]
pub fn centering_offset(parent_cross_extent: f32, child_total_cross_extent: f32) -> f32 {
    (parent_cross_extent - child_total_cross_extent) / 2.0
}

/// Offset along the flow axis applied once before a node places its first
/// child. Only [`Justify::Start`](crate::Justify::Start) exists, so this is
/// always zero.
pub fn flow_advance(node: &InstructionNode, _axis: Axis) -> f32 {
    node.style.justify.advance()
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
