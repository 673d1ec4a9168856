//! ALTO report emitter - streams the fixed XML envelope.
//!
//! A streaming writer, not an in-memory document tree: the envelope is
//! written as pages are processed and `<String>` records are appended as
//! the aggregator flushes them.

use std::io::Write;

/// Point units (1/72 inch) to report units (1/1200 inch). A fixed literal
/// approximation carried over from the original output; downstream
/// consumers depend on the exact values, so it is never recomputed from
/// the unit ratio.
pub const POINTS_TO_INCH1200: f64 = 16.6666;

/// Empirical correction applied to record heights only, never widths.
/// Heuristic with no documented derivation; preserved as-is.
pub const HEIGHT_CORRECTION: f64 = 1.5;

/// One emitted word record: the scaled rectangle plus the word text.
///
/// When a word spans several accumulators (hyphen bridge), one record is
/// emitted per accumulator and `content` carries the same full word text
/// in each.
#[derive(Debug, Clone, PartialEq)]
pub struct StringRecord<'a> {
    pub height: f64,
    pub width: f64,
    pub hpos: f64,
    pub vpos: f64,
    pub content: &'a str,
}

/// Receiver for flushed word records.
pub trait RecordSink {
    fn string_record(&mut self, record: StringRecord<'_>);
}

/// Streams the ALTO envelope and word records to a writer.
pub struct AltoWriter<W: Write> {
    /// Output writer
    outfp: W,
}

impl<W: Write> AltoWriter<W> {
    /// Creates the writer and emits the fixed header, including the
    /// inch1200 measurement unit descriptor.
    pub fn new(outfp: W) -> Self {
        let mut writer = Self { outfp };
        writer.write_header();
        writer
    }

    /// Write output.
    fn write(&mut self, text: &str) {
        let _ = self.outfp.write_all(text.as_bytes());
    }

    /// Flush output.
    pub fn flush(&mut self) {
        let _ = self.outfp.flush();
    }

    fn write_header(&mut self) {
        self.write(concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
            "<alto xmlns=\"http://www.loc.gov/standards/alto/alto-v2.0.xsd\">",
            "<Description><MeasurementUnit>inch1200</MeasurementUnit></Description>",
            "<Layout>\n",
        ));
    }

    /// Opens the flat per-page container. No paragraph or line structure
    /// is detected; every word record of the page lands in one synthetic
    /// text line.
    pub fn begin_page(&mut self) {
        self.write("<Page>\n<PrintSpace>\n<TextBlock>\n<TextLine>\n");
    }

    /// Closes the per-page container.
    pub fn end_page(&mut self) {
        self.write("</TextLine>\n</TextBlock>\n</PrintSpace>\n</Page>\n");
    }

    /// Writes the footer, ending the document.
    pub fn close(&mut self) {
        self.write("</Layout></alto>\n");
    }

    /// Consumes the writer, returning the underlying output.
    pub fn into_inner(self) -> W {
        self.outfp
    }
}

impl<W: Write> RecordSink for AltoWriter<W> {
    /// Writes one `<String/>` element. CONTENT is written without escaping
    /// reserved XML characters; word text is limited to alphanumerics,
    /// apostrophes, and hyphens by the aggregator, but any other input
    /// would pass through verbatim.
    fn string_record(&mut self, record: StringRecord<'_>) {
        let line = format!(
            "<String HEIGHT=\"{}\" WIDTH=\"{}\" HPOS=\"{}\" VPOS=\"{}\" CONTENT=\"{}\"/>\n",
            record.height, record.width, record.hpos, record.vpos, record.content,
        );
        self.write(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(writer: AltoWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_document_envelope() {
        let mut writer = AltoWriter::new(Vec::new());
        writer.close();
        assert_eq!(
            output(writer),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <alto xmlns=\"http://www.loc.gov/standards/alto/alto-v2.0.xsd\">\
             <Description><MeasurementUnit>inch1200</MeasurementUnit></Description>\
             <Layout>\n</Layout></alto>\n"
        );
    }

    #[test]
    fn test_page_container_and_record() {
        let mut writer = AltoWriter::new(Vec::new());
        writer.begin_page();
        writer.string_record(StringRecord {
            height: 12.5,
            width: 40.0,
            hpos: 200.0,
            vpos: 87.5,
            content: "word",
        });
        writer.end_page();
        writer.close();
        let xml = output(writer);
        assert!(xml.contains("<Page>\n<PrintSpace>\n<TextBlock>\n<TextLine>\n"));
        assert!(xml.contains(
            "<String HEIGHT=\"12.5\" WIDTH=\"40\" HPOS=\"200\" VPOS=\"87.5\" CONTENT=\"word\"/>\n"
        ));
        assert!(xml.contains("</TextLine>\n</TextBlock>\n</PrintSpace>\n</Page>\n"));
        assert!(xml.ends_with("</Layout></alto>\n"));
    }

    #[test]
    fn test_content_is_not_escaped() {
        // Documented risk: reserved characters pass through verbatim.
        let mut writer = AltoWriter::new(Vec::new());
        writer.begin_page();
        writer.string_record(StringRecord {
            height: 1.0,
            width: 1.0,
            hpos: 0.0,
            vpos: 0.0,
            content: "a<b",
        });
        assert!(output(writer).contains("CONTENT=\"a<b\"/>"));
    }
}
