//! Word segmentation state machine.
//!
//! Consumes one page's glyphs in reading order and decides, glyph by
//! glyph, when a word's bounding box starts, when consecutive glyphs merge
//! into it, when a hyphen bridges two disjoint boxes into one logical
//! word, and when the completed word is flushed to the sink.

use crate::glyph::{Glyph, MarginOffset};
use crate::report::{HEIGHT_CORRECTION, POINTS_TO_INCH1200, RecordSink, StringRecord};
use crate::wordbox::WordBox;

/// Alphanumeric or apostrophe: stored in the word buffer.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '\''
}

fn is_hyphen(ch: char) -> bool {
    ch == '-'
}

/// Anything that is neither a word character nor a hyphen ends the word.
fn ends_word(ch: char) -> bool {
    !(is_word_char(ch) || is_hyphen(ch))
}

/// Builds words and their bounding boxes from a position-sorted glyph
/// stream.
///
/// One aggregator serves a whole document; state persists across glyphs
/// within a page and [`end_of_page`](Self::end_of_page) must be called
/// once between pages to force out a word still being built. Not safe for
/// concurrent mutation; pages are processed strictly one at a time.
pub struct WordAggregator {
    /// Boxes of the word currently being built. Normally one; more when a
    /// hyphen bridges a geometric discontinuity.
    boxes: Vec<WordBox>,
    /// Characters of the word currently being built, lowercased.
    word: String,
    /// The previously seen character, if any.
    last_char: Option<char>,
    offset: MarginOffset,
}

impl Default for WordAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl WordAggregator {
    pub fn new() -> Self {
        Self {
            boxes: Vec::new(),
            word: String::new(),
            last_char: None,
            offset: MarginOffset::default(),
        }
    }

    /// Sets the margin offset for subsequently emitted records. Must be
    /// called before a page's glyphs are processed; boxes already buffered
    /// pick up the new offset at emission time.
    pub fn set_offset(&mut self, offset: MarginOffset) {
        self.offset = offset;
    }

    /// Processes one glyph, extending or flushing the current word.
    ///
    /// Glyphs must arrive in reading order, already sorted by position.
    /// A glyph with empty text (outside the collaborator contract) is
    /// ignored.
    pub fn process_glyph<S: RecordSink>(&mut self, glyph: &Glyph, sink: &mut S) {
        let Some(c) = glyph.text.to_lowercase().chars().next() else {
            return;
        };

        if ends_word(c) {
            // Separators are never stored, in the buffer or in a box.
            self.flush(sink);
        } else {
            let fits = self.boxes.last().is_some_and(|last| last.accepts(glyph));
            if self.boxes.is_empty() {
                self.boxes.push(WordBox::new(glyph));
            } else if fits {
                if let Some(last) = self.boxes.last_mut() {
                    last.extend_by(glyph);
                }
            } else {
                // The geometric run broke. A preceding hyphen carries the
                // word across the gap into an additional box; otherwise
                // the word ends here.
                if self.last_char.is_some_and(is_hyphen) {
                    self.word.push('-');
                } else {
                    self.flush(sink);
                }
                self.boxes.push(WordBox::new(glyph));
                // Keep the deferred-hyphen append below from firing a
                // second time in this same step.
                self.last_char = None;
            }

            // A hyphen is only materialized once the next glyph confirms
            // the word continues, so trailing hyphens never survive.
            if self.last_char.is_some_and(is_hyphen) {
                self.word.push('-');
            }
            if is_word_char(c) {
                self.word.push(c);
            }
        }

        self.last_char = Some(c);
    }

    /// Forces out a word still being built when the page's glyph stream
    /// ends without a trailing separator.
    pub fn end_of_page<S: RecordSink>(&mut self, sink: &mut S) {
        if !self.boxes.is_empty() {
            self.flush(sink);
        }
    }

    /// Emits one record per buffered box and resets all word state. The
    /// trimmed word text is duplicated across every record of a
    /// multi-box word.
    fn flush<S: RecordSink>(&mut self, sink: &mut S) {
        let content = self.word.trim();
        if !content.is_empty() {
            for wordbox in &self.boxes {
                let width = wordbox.width * POINTS_TO_INCH1200;
                let height = wordbox.height * POINTS_TO_INCH1200 * HEIGHT_CORRECTION;
                let hpos = (wordbox.xmin + self.offset.dx) * POINTS_TO_INCH1200;
                let vpos = (wordbox.ymin + self.offset.dy) * POINTS_TO_INCH1200 - height;
                sink.string_record(StringRecord {
                    height,
                    width,
                    hpos,
                    vpos,
                    content,
                });
            }
        }
        self.word.clear();
        self.last_char = None;
        self.boxes.clear();
    }
}
