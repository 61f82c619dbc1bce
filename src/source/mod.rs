//! Document text sources.
//!
//! - [`plain`]: inline text, standard input, or a text file.
//! - [`pdf`]: text extracted from a PDF with `pdf-extract`.
//!
//! Sources only hand back a `String`; the analyzer never sees how it was obtained.

use std::path::Path;

use crate::error::ExtractionError;
use crate::models::InputFormat;

pub mod pdf;
pub mod plain;

pub trait TextSource {
    fn read_text(&self) -> Result<String, ExtractionError>;
}

/// Read the document at `path` with the reader matching `format`.
pub fn load_text(path: &Path, format: InputFormat, min_length: usize) -> Result<String, ExtractionError> {
    match format {
        InputFormat::Text => plain::PlainTextSource::from_path(path).read_text(),
        InputFormat::Pdf => pdf::PdfSource::new(path, min_length).read_text(),
    }
}
