//! pdf2alto - print word locations as an ALTO XML report.
//!
//! The page-rendering engine is an external collaborator: this driver
//! consumes its position-sorted glyph dump (JSON, one object per
//! document) and streams the word-location report to stdout or a file.
//! A real engine plugs in by implementing `PageSource` instead.

use altoword_core::error::{ExtractError, Result};
use altoword_core::glyph::Glyph;
use altoword_core::high_level::write_word_locations;
use altoword_core::page::{PageSource, Rect};
use clap::Parser;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Print the location of every word in the input as ALTO XML.
#[derive(Parser, Debug)]
#[command(name = "pdf2alto")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a position-sorted glyph dump
    file: PathBuf,

    /// The password to use for decrypting the document
    #[arg(short = 'P', long, default_value = "")]
    password: String,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

/// Top-level glyph dump: the loader contract of the surrounding system,
/// serialized. An `encrypted` document carries the password it was
/// protected with; decryption compares against the one supplied.
#[derive(Debug, Deserialize)]
struct GlyphDump {
    #[serde(default)]
    encrypted: bool,
    #[serde(default)]
    password: Option<String>,
    pages: Vec<PageDump>,
}

#[derive(Debug, Deserialize)]
struct PageDump {
    media_box: Rect,
    #[serde(default)]
    crop_box: Option<Rect>,
    /// Absent when the page has no content stream.
    #[serde(default)]
    glyphs: Option<Vec<GlyphRecord>>,
}

fn default_scale() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
struct GlyphRecord {
    text: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    font_size: f64,
    #[serde(default = "default_scale")]
    x_scale: f64,
    #[serde(default = "default_scale")]
    y_scale: f64,
    #[serde(default)]
    width_of_space: f64,
}

impl From<GlyphRecord> for Glyph {
    fn from(record: GlyphRecord) -> Self {
        Glyph::new(&record.text, record.x, record.y, record.width, record.height)
            .font_size(record.font_size)
            .scale(record.x_scale, record.y_scale)
            .width_of_space(record.width_of_space)
    }
}

/// One dumped page behind the core's collaborator boundary.
struct DumpPage {
    media_box: Rect,
    crop_box: Option<Rect>,
    glyphs: Vec<Glyph>,
}

impl From<PageDump> for DumpPage {
    fn from(page: PageDump) -> Self {
        Self {
            media_box: page.media_box,
            crop_box: page.crop_box,
            glyphs: page
                .glyphs
                .unwrap_or_default()
                .into_iter()
                .map(Glyph::from)
                .collect(),
        }
    }
}

impl PageSource for DumpPage {
    fn media_box(&self) -> Rect {
        self.media_box
    }

    fn crop_box(&self) -> Option<Rect> {
        self.crop_box
    }

    fn each_glyph(&mut self, handler: &mut dyn FnMut(&Glyph)) -> Result<()> {
        for glyph in &self.glyphs {
            handler(glyph);
        }
        Ok(())
    }
}

/// Loads and parses a glyph dump.
fn load(path: &Path) -> Result<GlyphDump> {
    let data = std::fs::read(path)?;
    serde_json::from_slice(&data).map_err(|e| ExtractError::SyntaxError(e.to_string()))
}

/// Rejects encrypted documents unless the supplied password matches.
fn decrypt(dump: &GlyphDump, password: &str) -> Result<()> {
    if dump.encrypted && dump.password.as_deref() != Some(password) {
        return Err(ExtractError::InvalidPassword);
    }
    Ok(())
}

/// Processes one dump end to end.
fn process<W: Write>(dump: GlyphDump, password: &str, writer: W) -> Result<W> {
    decrypt(&dump, password)?;
    write_word_locations(dump.pages.into_iter().map(|p| Ok(DumpPage::from(p))), writer)
}

fn main() {
    let args = Args::parse();

    let output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        match File::create(&args.outfile) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(e) => {
                eprintln!("Error: Failed to create output file {}: {}", args.outfile, e);
                std::process::exit(1);
            }
        }
    };

    let result = load(&args.file).and_then(|dump| process(dump, &args.password, output));
    match result {
        Ok(_) => {}
        Err(ExtractError::InvalidPassword) => {
            eprintln!("Error: Document is encrypted with a password.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error processing {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    }
}
