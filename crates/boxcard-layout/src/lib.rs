//! Box-model layout contracts & walker for boxcard
//!
//! A tree of [`InstructionNode`]s carries per-axis content size, padding and
//! margin. [`layout`] walks the tree once, resolves absolute [`Geometry`] for
//! every node and hands each node to a [`DrawSurface`] before its children.

mod aggregate;
mod axis;
mod geometry;
mod metrics;
mod node;
mod style;
mod surface;
mod walker;

pub use aggregate::*;
pub use axis::*;
pub use geometry::*;
pub use metrics::*;
pub use node::*;
pub use style::*;
pub use surface::*;
pub use walker::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::geometry::Geometry;
    pub use crate::metrics::AxisMetrics;
    pub use crate::node::InstructionNode;
    pub use crate::style::{Align, Direction, Justify, Style};
    pub use crate::surface::{DrawSurface, RecordingSurface};
    pub use crate::walker::{layout, resolve};
    pub use boxcard_graphics::prelude::*;
}
