//! High-level extraction API.
//!
//! Wires the collaborator boundary to the aggregator and the report
//! writer: one aggregator per document, one offset resolution and one
//! forced flush per page.

use std::io::Write;

use crate::aggregator::WordAggregator;
use crate::error::Result;
use crate::page::{PageSource, margin_offset};
use crate::report::AltoWriter;

/// Streams the word-location report for every page to `outfp`.
///
/// Pages are processed strictly one at a time, in order. On failure
/// partway through, output already streamed for earlier pages is not
/// retracted; the run as a whole fails.
pub fn write_word_locations<P, W>(
    pages: impl IntoIterator<Item = Result<P>>,
    outfp: W,
) -> Result<W>
where
    P: PageSource,
    W: Write,
{
    let mut writer = AltoWriter::new(outfp);
    let mut aggregator = WordAggregator::new();

    for page in pages {
        let mut page = page?;
        aggregator.set_offset(margin_offset(page.crop_box(), page.media_box()));
        writer.begin_page();
        page.each_glyph(&mut |glyph| aggregator.process_glyph(glyph, &mut writer))?;
        aggregator.end_of_page(&mut writer);
        writer.end_page();
    }

    writer.close();
    writer.flush();
    Ok(writer.into_inner())
}
