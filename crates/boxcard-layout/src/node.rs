//! The instruction tree handed to the layout walker.

use boxcard_graphics::{DrawOp, EdgeInsets};

use crate::{Align, Axis, AxisMetrics, Direction, Style};

/// A node of the layout tree.
///
/// Nodes own their children exclusively. The walker only borrows the tree, so
/// one tree may be laid out any number of times.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstructionNode {
    pub horizontal: AxisMetrics,
    pub vertical: AxisMetrics,
    pub style: Style,
    pub children: Vec<InstructionNode>,
    /// Paint steps run when the node is placed, before any child.
    pub draw: Vec<DrawOp>,
    /// Optional name used in traces and recorded scenes.
    pub label: Option<String>,
}

impl InstructionNode {
    /// A leaf with the given content size, no padding, margin or paint.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            horizontal: AxisMetrics::new(width),
            vertical: AxisMetrics::new(height),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.style.direction = direction;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.style.align = Some(align);
        self
    }

    /// Shorthand for `with_align(Align::Center)`.
    pub fn centered(self) -> Self {
        self.with_align(Align::Center)
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.horizontal = self.horizontal.with_padding_sides(padding.left, padding.right);
        self.vertical = self.vertical.with_padding_sides(padding.top, padding.bottom);
        self
    }

    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.horizontal = self.horizontal.with_margin_sides(margin.left, margin.right);
        self.vertical = self.vertical.with_margin_sides(margin.top, margin.bottom);
        self
    }

    pub fn with_draw(mut self, op: DrawOp) -> Self {
        self.draw.push(op);
        self
    }

    pub fn with_child(mut self, child: InstructionNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = InstructionNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Metrics along `axis`.
    #[inline]
    pub fn metrics(&self, axis: Axis) -> &AxisMetrics {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(InstructionNode::node_count)
            .sum::<usize>()
    }
}
