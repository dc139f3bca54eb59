use std::io::Cursor;

use boxcard_graphics::{Color, DrawOp, Sampling};
use boxcard_layout::{DrawSurface, Geometry};
use image::{ImageFormat, RgbaImage};

use crate::draw::{blit_image, fill_rect};
use crate::text::GlyphRasterizer;
use crate::RenderError;

/// A fixed-size RGBA8 drawing surface rasterized on the CPU.
pub struct PixmapSurface {
    frame: RgbaImage,
    sampling: Sampling,
    glyphs: Option<GlyphRasterizer>,
    warned_missing_font: bool,
}

impl PixmapSurface {
    /// Allocates a transparent surface of `width x height` pixels.
    ///
    /// Fails with [`RenderError::SurfaceAllocation`] when either side is zero
    /// or the pixel buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let allocation_failed = || RenderError::SurfaceAllocation { width, height };
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .filter(|&len| len > 0)
            .ok_or_else(allocation_failed)?;
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| allocation_failed())?;
        buffer.resize(len, 0);
        let frame = RgbaImage::from_raw(width, height, buffer).ok_or_else(allocation_failed)?;
        log::debug!("allocated {width}x{height} pixmap surface");
        Ok(Self {
            frame,
            sampling: Sampling::default(),
            glyphs: None,
            warned_missing_font: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Sets how scaled image blits and glyph edges are sampled.
    pub fn set_sampling(&mut self, sampling: Sampling) {
        self.sampling = sampling;
    }

    /// Font used for [`DrawOp::Text`]; without one, text operations are skipped.
    pub fn set_glyph_rasterizer(&mut self, glyphs: Option<GlyphRasterizer>) {
        self.glyphs = glyphs;
        self.warned_missing_font = false;
    }

    /// Overwrites every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Raw RGBA8 pixels, row-major.
    pub fn pixels(&self) -> &[u8] {
        self.frame.as_raw()
    }

    /// The RGBA value at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.frame.get_pixel_checked(x, y).map(|pixel| pixel.0)
    }

    pub fn into_image(self) -> RgbaImage {
        self.frame
    }

    /// Encodes the surface as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.frame
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        log::debug!(
            "encoded {}x{} surface as {} png bytes",
            self.width(),
            self.height(),
            bytes.len()
        );
        Ok(bytes)
    }
}

impl DrawSurface for PixmapSurface {
    fn draw(&mut self, geometry: &Geometry, op: &DrawOp) {
        let (width, height) = self.frame.dimensions();
        match op {
            DrawOp::FillRect { brush } => {
                fill_rect(&mut self.frame, width, height, geometry.padding_box(), brush);
            }
            DrawOp::Image { image } => {
                blit_image(
                    &mut self.frame,
                    width,
                    height,
                    geometry.padding_box(),
                    image,
                    self.sampling,
                );
            }
            DrawOp::Text { text, color, size } => match &self.glyphs {
                Some(glyphs) => glyphs.rasterize(
                    &mut self.frame,
                    width,
                    height,
                    geometry.inner_origin(),
                    text,
                    *color,
                    *size,
                    self.sampling,
                ),
                None => {
                    if !self.warned_missing_font {
                        log::warn!("no font attached to surface; skipping text draws");
                        self.warned_missing_font = true;
                    }
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/surface_tests.rs"]
mod tests;
