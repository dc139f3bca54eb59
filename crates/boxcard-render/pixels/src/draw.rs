//! Rasterization of draw operations into an RGBA8 frame.

use boxcard_graphics::{Brush, Color, Rect, Sampling};
use image::RgbaImage;

/// Integer pixel span covered by a rectangle after snapping and clipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

/// Snaps `rect` edges to the nearest pixel boundary and clips to the frame.
///
/// A pixel is covered when its center lies inside the rectangle, so two
/// rectangles sharing an edge never both paint the same pixel.
pub(crate) fn snap_to_frame(rect: Rect, width: u32, height: u32) -> Option<PixelBounds> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    let frame = Rect::new(0.0, 0.0, width as f32, height as f32);
    let visible = rect.intersect(&frame)?;
    let bounds = PixelBounds {
        min_x: visible.x.round() as u32,
        min_y: visible.y.round() as u32,
        max_x: visible.right().round() as u32,
        max_y: visible.bottom().round() as u32,
    };
    if bounds.min_x >= bounds.max_x || bounds.min_y >= bounds.max_y {
        return None;
    }
    Some(bounds)
}

/// Source-over blends `color` (straight alpha) into one RGBA8 pixel.
fn blend_pixel(existing: &mut [u8], color: [f32; 4]) {
    let alpha = color[3];
    if alpha <= 0.0 {
        return;
    }
    for i in 0..3 {
        let dst = existing[i] as f32 / 255.0;
        let blended = color[i] * alpha + dst * (1.0 - alpha);
        existing[i] = (blended.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    let dst_alpha = existing[3] as f32 / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    existing[3] = (out_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
}

#[inline]
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    ((y as usize * width as usize) + x as usize) * 4
}

pub(crate) fn fill_rect(frame: &mut [u8], width: u32, height: u32, rect: Rect, brush: &Brush) {
    let Some(bounds) = snap_to_frame(rect, width, height) else {
        return;
    };
    for py in bounds.min_y..bounds.max_y {
        let color = sample_brush(brush, rect, py as f32 + 0.5).to_array();
        for px in bounds.min_x..bounds.max_x {
            let idx = pixel_index(width, px, py);
            blend_pixel(&mut frame[idx..idx + 4], color);
        }
    }
}

fn sample_brush(brush: &Brush, rect: Rect, y: f32) -> Color {
    match brush {
        Brush::Solid(color) => *color,
        Brush::LinearGradient(_) => {
            let t = if rect.height.abs() <= f32::EPSILON {
                0.0
            } else {
                ((y - rect.y) / rect.height).clamp(0.0, 1.0)
            };
            brush.color_at(t)
        }
    }
}

/// Scales `image` into `rect`, picking texels according to `sampling`.
pub(crate) fn blit_image(
    frame: &mut [u8],
    width: u32,
    height: u32,
    rect: Rect,
    image: &RgbaImage,
    sampling: Sampling,
) {
    let (src_width, src_height) = image.dimensions();
    if src_width == 0 || src_height == 0 {
        return;
    }
    let Some(bounds) = snap_to_frame(rect, width, height) else {
        return;
    };
    let scale_x = src_width as f32 / rect.width;
    let scale_y = src_height as f32 / rect.height;
    for py in bounds.min_y..bounds.max_y {
        let v = (py as f32 + 0.5 - rect.y) * scale_y;
        for px in bounds.min_x..bounds.max_x {
            let u = (px as f32 + 0.5 - rect.x) * scale_x;
            let color = match sampling {
                Sampling::Nearest => sample_nearest(image, u, v),
                Sampling::Smooth => sample_bilinear(image, u, v),
            };
            let idx = pixel_index(width, px, py);
            blend_pixel(&mut frame[idx..idx + 4], color);
        }
    }
}

fn texel(image: &RgbaImage, x: i64, y: i64) -> [f32; 4] {
    let (w, h) = image.dimensions();
    let x = x.clamp(0, w as i64 - 1) as u32;
    let y = y.clamp(0, h as i64 - 1) as u32;
    image.get_pixel(x, y).0.map(|channel| channel as f32 / 255.0)
}

fn sample_nearest(image: &RgbaImage, u: f32, v: f32) -> [f32; 4] {
    texel(image, u.floor() as i64, v.floor() as i64)
}

fn sample_bilinear(image: &RgbaImage, u: f32, v: f32) -> [f32; 4] {
    let x = u - 0.5;
    let y = v - 0.5;
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);
    let top_left = texel(image, x0, y0);
    let top_right = texel(image, x0 + 1, y0);
    let bottom_left = texel(image, x0, y0 + 1);
    let bottom_right = texel(image, x0 + 1, y0 + 1);
    let mut out = [0.0; 4];
    for i in 0..4 {
        let top = top_left[i] + (top_right[i] - top_left[i]) * fx;
        let bottom = bottom_left[i] + (bottom_right[i] - bottom_left[i]) * fx;
        out[i] = top + (bottom - top) * fy;
    }
    out
}

/// Blends one glyph coverage sample at an absolute pixel position.
///
/// With [`Sampling::Nearest`] coverage is thresholded so glyph edges stay
/// hard; [`Sampling::Smooth`] keeps antialiased coverage.
#[allow(clippy::too_many_arguments)]
pub(crate) fn blend_coverage(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    color: Color,
    coverage: f32,
    sampling: Sampling,
) {
    if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
        return;
    }
    let coverage = match sampling {
        Sampling::Nearest if coverage >= 0.5 => 1.0,
        Sampling::Nearest => return,
        Sampling::Smooth => coverage.clamp(0.0, 1.0),
    };
    let mut rgba = color.to_array();
    rgba[3] *= coverage;
    let idx = pixel_index(width, x as u32, y as u32);
    blend_pixel(&mut frame[idx..idx + 4], rgba);
}

#[cfg(test)]
#[path = "tests/draw_tests.rs"]
mod tests;
