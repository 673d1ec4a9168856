//! Page collaborator boundary: media/crop rectangles and the glyph stream.
//!
//! The document loader, page enumeration, and the text-extraction engine
//! live outside this crate; they plug in through [`PageSource`].

use crate::error::Result;
use crate::glyph::{Glyph, MarginOffset};

/// A page rectangle as `[x0, y0, x1, y1]` in point units, lower-left
/// corner first.
pub type Rect = [f64; 4];

/// One page of the source document, as supplied by the surrounding
/// system.
pub trait PageSource {
    /// The page's full physical boundary.
    fn media_box(&self) -> Rect;

    /// The page's visible sub-region, if one is defined.
    fn crop_box(&self) -> Option<Rect>;

    /// Invokes `handler` once per positioned glyph, in position-sorted
    /// reading order. A page without a content stream invokes it zero
    /// times.
    fn each_glyph(&mut self, handler: &mut dyn FnMut(&Glyph)) -> Result<()>;
}

/// Computes the per-page coordinate offset from the crop and media
/// rectangles: the displacement of the visible origin from the physical
/// one, or zero when no crop rectangle is available.
pub fn margin_offset(crop: Option<Rect>, media: Rect) -> MarginOffset {
    match crop {
        Some(crop) => MarginOffset::new(crop[0] - media[0], crop[1] - media[1]),
        None => MarginOffset::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_offset_from_crop_and_media() {
        let media = [0.0, 0.0, 612.0, 792.0];
        let crop = [36.0, 24.0, 576.0, 768.0];
        assert_eq!(margin_offset(Some(crop), media), MarginOffset::new(36.0, 24.0));
    }

    #[test]
    fn test_margin_offset_without_crop_is_zero() {
        let media = [10.0, 10.0, 622.0, 802.0];
        assert_eq!(margin_offset(None, media), MarginOffset::default());
    }

    #[test]
    fn test_margin_offset_with_shifted_media_origin() {
        let media = [-5.0, 12.0, 607.0, 804.0];
        let crop = [0.0, 12.0, 600.0, 800.0];
        assert_eq!(margin_offset(Some(crop), media), MarginOffset::new(5.0, 0.0));
    }
}
