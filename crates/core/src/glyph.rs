//! Input value types: positioned glyphs and the per-page margin offset.
//!
//! Use `Glyph::new()` for the geometric fields and the builder-style
//! setters for the font metrics.

/// Displacement between a page's visible (crop) origin and its physical
/// (media) origin, in point units.
///
/// Replaced wholesale per page; a replacement mid-word affects geometry
/// only at emission time, uniformly for every buffered box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarginOffset {
    pub dx: f64,
    pub dy: f64,
}

impl MarginOffset {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// One positioned character instance from a page's content stream.
///
/// Produced by the text-extraction collaborator in reading order, with
/// reading-direction-adjusted coordinates in point units. Consumed
/// read-only by the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Character value, at least one code point.
    pub text: String,
    /// Adjusted x position of the glyph's lower-left corner.
    pub x: f64,
    /// Adjusted y position of the glyph's lower-left corner.
    pub y: f64,
    /// Adjusted width.
    pub width: f64,
    /// Adjusted height.
    pub height: f64,
    /// Font size of the active font.
    pub font_size: f64,
    /// Horizontal scale of the active font.
    pub x_scale: f64,
    /// Vertical scale of the active font.
    pub y_scale: f64,
    /// Width of a space in the active font.
    pub width_of_space: f64,
}

impl Glyph {
    /// Creates a glyph from its text and rectangle. Font metrics default
    /// to size 0.0, unit scale, and zero width-of-space.
    pub fn new(text: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            text: text.to_string(),
            x,
            y,
            width,
            height,
            font_size: 0.0,
            x_scale: 1.0,
            y_scale: 1.0,
            width_of_space: 0.0,
        }
    }

    /// Sets the font size.
    pub const fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the x/y font scale.
    pub const fn scale(mut self, x_scale: f64, y_scale: f64) -> Self {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self
    }

    /// Sets the width of a space in the active font.
    pub const fn width_of_space(mut self, width_of_space: f64) -> Self {
        self.width_of_space = width_of_space;
        self
    }
}
