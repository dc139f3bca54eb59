//! Draw operations a layout node hands to its drawing surface.

use std::sync::Arc;

use image::RgbaImage;

use crate::{Brush, Color};

/// How scaled image blits pick source pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sampling {
    /// Nearest-neighbor; keeps pixel-art edges hard.
    #[default]
    Nearest,
    /// Bilinear interpolation between the four closest texels.
    Smooth,
}

/// A single paint step attached to a layout node.
///
/// Operations carry no position of their own: the surface places them using
/// the geometry the layout walker resolved for the owning node.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fills the node's padding box.
    FillRect { brush: Brush },
    /// Scales the image into the node's padding box.
    Image { image: Arc<RgbaImage> },
    /// Draws a single line of text with its top-left corner at the node's
    /// inner (post-padding) origin.
    Text {
        text: String,
        color: Color,
        size: f32,
    },
}

impl DrawOp {
    pub fn fill(color: Color) -> Self {
        DrawOp::FillRect {
            brush: Brush::solid(color),
        }
    }

    pub fn gradient(colors: Vec<Color>) -> Self {
        DrawOp::FillRect {
            brush: Brush::linear_gradient(colors),
        }
    }

    pub fn image(image: impl Into<Arc<RgbaImage>>) -> Self {
        DrawOp::Image {
            image: image.into(),
        }
    }

    pub fn text(text: impl Into<String>, color: Color, size: f32) -> Self {
        DrawOp::Text {
            text: text.into(),
            color,
            size,
        }
    }

    /// Short name used in logs and traces.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawOp::FillRect { .. } => "fill-rect",
            DrawOp::Image { .. } => "image",
            DrawOp::Text { .. } => "text",
        }
    }
}
