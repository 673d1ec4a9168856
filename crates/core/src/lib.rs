//! altoword - word bounding-box extraction from positioned glyph streams.
//!
//! Consumes the position-sorted glyph stream of a page-rendering engine,
//! segments it into words with accumulated bounding rectangles, and streams
//! the result as an ALTO-style XML report.

pub mod aggregator;
pub mod error;
pub mod glyph;
pub mod high_level;
pub mod page;
pub mod report;
pub mod wordbox;

pub use aggregator::WordAggregator;
pub use error::{ExtractError, Result};
pub use glyph::{Glyph, MarginOffset};
pub use high_level::write_word_locations;
pub use page::{PageSource, Rect, margin_offset};
pub use report::{AltoWriter, HEIGHT_CORRECTION, POINTS_TO_INCH1200, RecordSink, StringRecord};
pub use wordbox::WordBox;
