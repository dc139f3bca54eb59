//! Flow direction, cross-axis alignment and justification

use crate::Axis;

/// The axis along which a node lays out its children in sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Children flow left to right.
    #[default]
    Row,
    /// Children flow top to bottom.
    Column,
}

impl Direction {
    /// Returns the flow axis for this direction.
    #[inline]
    pub fn flow_axis(self) -> Axis {
        match self {
            Direction::Row => Axis::Horizontal,
            Direction::Column => Axis::Vertical,
        }
    }

    /// Returns the axis perpendicular to the flow.
    #[inline]
    pub fn cross_axis(self) -> Axis {
        self.flow_axis().cross_axis()
    }
}

/// How a parent positions this node on its cross axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    /// Center within the parent's cross-axis content size.
    Center,
}

/// Where a node starts placing its children along the flow axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    /// Children start flush after the node's own padding.
    #[default]
    Start,
}

impl Justify {
    /// Offset of the first child from the flow origin.
    pub fn advance(self) -> f32 {
        match self {
            Justify::Start => 0.0,
        }
    }
}

/// Layout style of a single node.
///
/// `direction` and `justify` govern the node's own children. `align` is read
/// by the node's parent; it has no effect on a root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub direction: Direction,
    pub align: Option<Align>,
    pub justify: Justify,
}

impl Style {
    pub const fn row() -> Self {
        Self {
            direction: Direction::Row,
            align: None,
            justify: Justify::Start,
        }
    }

    pub const fn column() -> Self {
        Self {
            direction: Direction::Column,
            align: None,
            justify: Justify::Start,
        }
    }

    pub const fn centered(self) -> Self {
        Self {
            align: Some(Align::Center),
            ..self
        }
    }

    #[inline]
    pub fn is_centered(&self) -> bool {
        matches!(self.align, Some(Align::Center))
    }
}
