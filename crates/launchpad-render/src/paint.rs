//! Paint descriptions handed to the host renderer.
//!
//! A [`Paint`] carries an optional [`ColorFilter`]. Drop targets use it to
//! tint the dragged icon while it hovers over them; compositing itself is
//! the renderer's job.

use crate::types::Color;

/// Porter-Duff compositing modes a [`ColorFilter`] can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Normal (source-over) blending.
    #[default]
    Normal,
    /// Multiply colors.
    Multiply,
    /// Source (replace destination completely).
    Source,
    /// Source in (source where destination alpha).
    SourceIn,
    /// Source atop: source over destination, only where destination exists.
    SourceAtop,
}

/// A color filter: composites a fixed color onto every pixel drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorFilter {
    /// The color composited onto drawn pixels.
    pub color: Color,
    /// How the color is composited.
    pub mode: BlendMode,
}

impl ColorFilter {
    /// Create a new color filter.
    #[inline]
    pub const fn new(color: Color, mode: BlendMode) -> Self {
        Self { color, mode }
    }
}

/// How a layer (such as the drag view) should be painted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paint {
    color_filter: Option<ColorFilter>,
}

impl Paint {
    /// Create a paint with no filter.
    pub const fn new() -> Self {
        Self { color_filter: None }
    }

    /// Set the color filter (builder pattern).
    #[inline]
    pub fn with_color_filter(mut self, filter: ColorFilter) -> Self {
        self.color_filter = Some(filter);
        self
    }

    #[inline]
    pub fn color_filter(&self) -> Option<&ColorFilter> {
        self.color_filter.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_builder() {
        assert_eq!(Paint::default(), Paint::new());
        assert_eq!(Paint::new().color_filter(), None);

        let tint = Color::from_argb(0xDA0099CC);
        let paint = Paint::new().with_color_filter(ColorFilter::new(tint, BlendMode::SourceAtop));
        let filter = paint.color_filter().copied();
        assert_eq!(filter.map(|f| f.mode), Some(BlendMode::SourceAtop));
        assert_eq!(filter.map(|f| f.color), Some(tint));
    }

    #[test]
    fn test_default_blend_mode_is_normal() {
        assert_eq!(BlendMode::default(), BlendMode::Normal);
    }
}
