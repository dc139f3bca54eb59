//! Per-axis size descriptors

/// Content size plus two-sided padding and margin along one axis.
///
/// Every component is finite and non-negative: constructors and setters
/// replace negative or non-finite inputs with `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisMetrics {
    size: f32,
    padding_start: f32,
    padding_end: f32,
    margin_start: f32,
    margin_end: f32,
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl AxisMetrics {
    /// Metrics with the given content size and no padding or margin.
    pub fn new(size: f32) -> Self {
        Self {
            size: sanitize(size),
            ..Self::default()
        }
    }

    /// Same padding on both sides.
    pub fn with_padding(self, padding: f32) -> Self {
        self.with_padding_sides(padding, padding)
    }

    pub fn with_padding_sides(self, start: f32, end: f32) -> Self {
        Self {
            padding_start: sanitize(start),
            padding_end: sanitize(end),
            ..self
        }
    }

    /// Same margin on both sides.
    pub fn with_margin(self, margin: f32) -> Self {
        self.with_margin_sides(margin, margin)
    }

    pub fn with_margin_sides(self, start: f32, end: f32) -> Self {
        Self {
            margin_start: sanitize(start),
            margin_end: sanitize(end),
            ..self
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn padding_start(&self) -> f32 {
        self.padding_start
    }

    #[inline]
    pub fn padding_end(&self) -> f32 {
        self.padding_end
    }

    #[inline]
    pub fn margin_start(&self) -> f32 {
        self.margin_start
    }

    #[inline]
    pub fn margin_end(&self) -> f32 {
        self.margin_end
    }

    /// Padding on both sides combined.
    #[inline]
    pub fn padding_sum(&self) -> f32 {
        self.padding_start + self.padding_end
    }

    /// Margin on both sides combined.
    #[inline]
    pub fn margin_sum(&self) -> f32 {
        self.margin_start + self.margin_end
    }
}
