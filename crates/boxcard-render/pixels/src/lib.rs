//! Software RGBA renderer backend for boxcard
//!
//! [`render_to_surface`] is the render driver: it allocates a
//! [`PixmapSurface`], switches it to nearest-neighbor sampling and walks the
//! instruction tree from the origin.

mod draw;
mod surface;
mod text;

use boxcard_graphics::{Color, Sampling};
use boxcard_layout::{layout, InstructionNode};
use thiserror::Error;

pub use surface::PixmapSurface;
pub use text::{GlyphRasterizer, TextMetrics, DEFAULT_CACHE_CAPACITY};

/// Failures raised by the drawing surface. Layout itself never fails.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot allocate a {width}x{height} surface")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("font could not be loaded: {0}")]
    Font(String),
}

/// Target surface configuration for one render.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Color the surface is cleared to before the walk.
    pub background: Color,
    /// Font for text operations; text is skipped when absent.
    pub glyphs: Option<GlyphRasterizer>,
}

impl RenderOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Color::TRANSPARENT,
            glyphs: None,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_glyphs(mut self, glyphs: GlyphRasterizer) -> Self {
        self.glyphs = Some(glyphs);
        self
    }
}

/// Renders `root` into a freshly allocated surface.
///
/// The surface always uses [`Sampling::Nearest`]: cards are pixel art and
/// must not be smoothed.
pub fn render_to_surface(
    root: &InstructionNode,
    options: &RenderOptions,
) -> Result<PixmapSurface, RenderError> {
    let mut surface = PixmapSurface::new(options.width, options.height)?;
    surface.clear(options.background);
    surface.set_sampling(Sampling::Nearest);
    surface.set_glyph_rasterizer(options.glyphs.clone());

    log::debug!(
        "rendering {} nodes into {}x{} surface",
        root.node_count(),
        options.width,
        options.height
    );
    layout(root, 0.0, 0.0, &mut surface);
    Ok(surface)
}

/// Renders `root` and encodes the result as PNG bytes.
pub fn render_png(root: &InstructionNode, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    render_to_surface(root, options)?.encode_png()
}
