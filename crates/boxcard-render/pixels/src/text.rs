use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use boxcard_graphics::{Color, Point, Sampling};
use lru::LruCache;
use rusttype::{point, Font, Scale};

use crate::draw::blend_coverage;
use crate::RenderError;

/// Entries kept by a [`GlyphRasterizer`] metrics cache unless told otherwise.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Size of a single line of text at a given pixel size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Distance from the top of the line box to the baseline.
    pub ascent: f32,
}

/// Owned cache key: the measured string and the bit pattern of its size.
struct TextKey {
    text: Box<str>,
    size_bits: u32,
}

/// Borrowed view shared by [`TextKey`] and `(u32, &str)` lookups, so a hit
/// never allocates.
trait KeyView {
    fn view(&self) -> (u32, &str);
}

impl KeyView for TextKey {
    fn view(&self) -> (u32, &str) {
        (self.size_bits, &self.text)
    }
}

impl KeyView for (u32, &str) {
    fn view(&self) -> (u32, &str) {
        (self.0, self.1)
    }
}

impl<'a> Borrow<dyn KeyView + 'a> for TextKey {
    fn borrow(&self) -> &(dyn KeyView + 'a) {
        self
    }
}

impl PartialEq for dyn KeyView + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.view() == other.view()
    }
}

impl Eq for dyn KeyView + '_ {}

impl Hash for dyn KeyView + '_ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.view().hash(state);
    }
}

impl PartialEq for TextKey {
    fn eq(&self, other: &Self) -> bool {
        self.view() == other.view()
    }
}

impl Eq for TextKey {}

impl Hash for TextKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.view().hash(state);
    }
}

struct TextMetricsCache {
    map: LruCache<TextKey, TextMetrics>,
}

impl TextMetricsCache {
    fn new(capacity: usize) -> Self {
        let size = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            map: LruCache::new(size),
        }
    }

    fn get_or_measure<F>(&mut self, text: &str, size: f32, measure: F) -> TextMetrics
    where
        F: FnOnce(&str, f32) -> TextMetrics,
    {
        let size_bits = size.to_bits();
        let lookup: &dyn KeyView = &(size_bits, text);
        if let Some(metrics) = self.map.get(lookup).copied() {
            return metrics;
        }
        let metrics = measure(text, size);
        self.map.put(
            TextKey {
                text: Box::from(text),
                size_bits,
            },
            metrics,
        );
        metrics
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Measures and rasterizes single-line text with a TrueType font.
///
/// Clones share the parsed font and the metrics cache.
#[derive(Clone)]
pub struct GlyphRasterizer {
    font: Arc<Font<'static>>,
    cache: Arc<Mutex<TextMetricsCache>>,
}

impl fmt::Debug for GlyphRasterizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphRasterizer")
            .field("glyph_count", &self.font.glyph_count())
            .finish_non_exhaustive()
    }
}

impl GlyphRasterizer {
    /// Parses TrueType/OpenType font bytes.
    pub fn from_bytes(bytes: Vec<u8>, cache_capacity: usize) -> Result<Self, RenderError> {
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| RenderError::Font("unrecognized font data".to_string()))?;
        Ok(Self {
            font: Arc::new(font),
            cache: Arc::new(Mutex::new(TextMetricsCache::new(cache_capacity))),
        })
    }

    /// Measures `text` at `size` pixels, caching the result.
    pub fn measure(&self, text: &str, size: f32) -> TextMetrics {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_measure(text, size, |text, size| self.measure_uncached(text, size))
    }

    fn measure_uncached(&self, text: &str, size: f32) -> TextMetrics {
        let scale = Scale::uniform(size);
        let v_metrics = self.font.v_metrics(scale);
        let width = self
            .font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .last()
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        TextMetrics {
            width: width.ceil(),
            height: (v_metrics.ascent - v_metrics.descent).ceil(),
            ascent: v_metrics.ascent,
        }
    }

    /// Draws `text` with the top-left of its line box at `origin`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn rasterize(
        &self,
        frame: &mut [u8],
        width: u32,
        height: u32,
        origin: Point,
        text: &str,
        color: Color,
        size: f32,
        sampling: Sampling,
    ) {
        if size <= 0.0 || text.is_empty() {
            return;
        }
        let scale = Scale::uniform(size);
        let v_metrics = self.font.v_metrics(scale);
        let offset = point(origin.x, origin.y + v_metrics.ascent);
        for glyph in self.font.layout(text, scale, offset) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            if bb.max.x <= 0 || bb.max.y <= 0 || bb.min.x >= width as i32 || bb.min.y >= height as i32
            {
                continue;
            }
            glyph.draw(|gx, gy, coverage| {
                blend_coverage(
                    frame,
                    width,
                    height,
                    bb.min.x + gx as i32,
                    bb.min.y + gy as i32,
                    color,
                    coverage,
                    sampling,
                );
            });
        }
    }
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
