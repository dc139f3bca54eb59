use boxcard_graphics::Point;

/// One of the two layout axes.
///
/// A parent's direction picks the flow axis (where children are laid out one
/// after another); the other one is the cross axis (where children may be
/// centered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left to right.
    Horizontal,

    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// The coordinate of `point` along this axis.
    #[inline]
    pub fn coordinate(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// A copy of `point` moved by `delta` along this axis.
    #[inline]
    pub fn offset(self, point: Point, delta: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(point.x + delta, point.y),
            Axis::Vertical => Point::new(point.x, point.y + delta),
        }
    }
}
