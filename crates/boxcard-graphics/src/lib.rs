//! Pure math/data for drawing in boxcard
//!
//! This crate contains geometry primitives, color definitions, brushes,
//! and the draw operations that layout nodes hand to a drawing surface.

mod brush;
mod color;
mod draw;
mod geometry;

pub use brush::*;
pub use color::*;
pub use draw::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::draw::{DrawOp, Sampling};
    pub use crate::geometry::{EdgeInsets, Point, Rect};
}
