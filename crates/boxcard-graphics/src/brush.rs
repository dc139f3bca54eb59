//! Brush definitions for painting (solid colors, gradients)

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Top-to-bottom gradient through evenly spaced color stops.
    LinearGradient(Vec<Color>),
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn linear_gradient(colors: Vec<Color>) -> Self {
        Brush::LinearGradient(colors)
    }

    /// Color at `t` (0 = top, 1 = bottom) along the brush.
    pub fn color_at(&self, t: f32) -> Color {
        match self {
            Brush::Solid(color) => *color,
            Brush::LinearGradient(colors) => interpolate_colors(colors, t),
        }
    }
}

fn interpolate_colors(colors: &[Color], t: f32) -> Color {
    match colors {
        [] => Color::TRANSPARENT,
        [only] => *only,
        [.., last] => {
            let clamped = t.clamp(0.0, 1.0);
            let segments = (colors.len() - 1) as f32;
            let scaled = clamped * segments;
            let index = scaled.floor() as usize;
            if index >= colors.len() - 1 {
                return *last;
            }
            let frac = scaled - index as f32;
            colors[index].lerp(colors[index + 1], frac)
        }
    }
}
