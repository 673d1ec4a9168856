//! Aggregator throughput over a synthetic glyph stream.

use altoword_core::aggregator::WordAggregator;
use altoword_core::glyph::Glyph;
use altoword_core::report::{RecordSink, StringRecord};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

struct CountingSink {
    records: usize,
}

impl RecordSink for CountingSink {
    fn string_record(&mut self, record: StringRecord<'_>) {
        black_box(record.hpos);
        self.records += 1;
    }
}

/// Lines of five-letter words separated by spaces, one glyph per char.
fn synthetic_page(words_per_line: usize, lines: usize) -> Vec<Glyph> {
    let mut glyphs = Vec::new();
    for line in 0..lines {
        let y = 700.0 - line as f64 * 12.0;
        let mut x = 50.0;
        for _ in 0..words_per_line {
            for ch in ["l", "o", "r", "e", "m"] {
                glyphs.push(Glyph::new(ch, x, y, 5.0, 8.0).width_of_space(3.0));
                x += 5.0;
            }
            glyphs.push(Glyph::new(" ", x, y, 3.0, 8.0).width_of_space(3.0));
            x += 3.0;
        }
    }
    glyphs
}

fn bench_aggregator(c: &mut Criterion) {
    let glyphs = synthetic_page(12, 50);

    c.bench_function("aggregate_600_words", |b| {
        b.iter(|| {
            let mut aggregator = WordAggregator::new();
            let mut sink = CountingSink { records: 0 };
            for glyph in &glyphs {
                aggregator.process_glyph(black_box(glyph), &mut sink);
            }
            aggregator.end_of_page(&mut sink);
            black_box(sink.records)
        })
    });
}

criterion_group!(benches, bench_aggregator);
criterion_main!(benches);
