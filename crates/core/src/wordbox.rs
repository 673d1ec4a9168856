//! Bounding box accumulator for one contiguous glyph run.

use crate::glyph::Glyph;

/// Minimal bounding rectangle enclosing every glyph merged into one
/// contiguous run of a word.
///
/// `(xmin, ymin)` is the lower-left corner; width and height never go
/// negative under `extend_by`. The font size and x/y scale of the glyph
/// that started the run are captured alongside the rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct WordBox {
    pub xmin: f64,
    pub ymin: f64,
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub x_scale: f64,
    pub y_scale: f64,
}

impl WordBox {
    /// Creates an accumulator from exactly one glyph.
    pub fn new(glyph: &Glyph) -> Self {
        Self {
            xmin: glyph.x,
            ymin: glyph.y,
            width: glyph.width,
            height: glyph.height,
            font_size: glyph.font_size,
            x_scale: glyph.x_scale,
            y_scale: glyph.y_scale,
        }
    }

    /// The glyph falls noticeably left of or below the run.
    fn rejects(&self, glyph: &Glyph) -> bool {
        glyph.x < self.xmin || glyph.y + glyph.width_of_space < self.ymin
    }

    /// Geometric heuristic for "still part of the same visual word run":
    /// glyphs to the right or above are tolerated, glyphs strictly left
    /// of `xmin` or below `ymin` (by more than a space width) are not.
    /// Not a true adjacency test.
    pub fn accepts(&self, glyph: &Glyph) -> bool {
        !self.rejects(glyph)
    }

    /// Grows the rectangle to the union of the current rectangle and the
    /// glyph's own rectangle. Never shrinks.
    pub fn extend_by(&mut self, glyph: &Glyph) {
        let xmax = (self.xmin + self.width).max(glyph.x + glyph.width);
        let ymax = (self.ymin + self.height).max(glyph.y + glyph.height);
        self.xmin = self.xmin.min(glyph.x);
        self.ymin = self.ymin.min(glyph.y);
        self.width = xmax - self.xmin;
        self.height = ymax - self.ymin;
    }
}
