use boxcard_graphics::{EdgeInsets, Point, Rect};

use crate::InstructionNode;

/// Absolute geometry resolved for one node.
///
/// `(x, y)` is the top-left corner after the node's margin; `width` and
/// `height` are the declared content sizes. Padding and margin are reported
/// per side so draw operations can pick the box they paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub padding: EdgeInsets,
    pub margin: EdgeInsets,
}

impl Geometry {
    /// Geometry of `node` with its box origin at `origin` (margin already applied).
    pub fn resolve(node: &InstructionNode, origin: Point) -> Self {
        let h = &node.horizontal;
        let v = &node.vertical;
        Self {
            x: origin.x,
            y: origin.y,
            width: h.size(),
            height: v.size(),
            padding: EdgeInsets::from_components(
                h.padding_start(),
                v.padding_start(),
                h.padding_end(),
                v.padding_end(),
            ),
            margin: EdgeInsets::from_components(
                h.margin_start(),
                v.margin_start(),
                h.margin_end(),
                v.margin_end(),
            ),
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The declared content area, inset from `(x, y)` by the leading padding.
    pub fn content_rect(&self) -> Rect {
        let inner = self.inner_origin();
        Rect::new(inner.x, inner.y, self.width, self.height)
    }

    /// Content size grown by padding on every side, anchored at `(x, y)`.
    pub fn padding_box(&self) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.width + self.padding.horizontal_sum(),
            self.height + self.padding.vertical_sum(),
        )
    }

    /// Where this node's children start.
    pub fn inner_origin(&self) -> Point {
        Point::new(self.x + self.padding.left, self.y + self.padding.top)
    }
}
