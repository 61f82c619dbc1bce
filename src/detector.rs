use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::models::InputFormat;

const PDF_MAGIC: &[u8] = b"%PDF";

/// Decide how an input file should be read.
///
/// A `.pdf` extension (any case) or a leading `%PDF` signature selects PDF
/// extraction; everything else, including `-` for stdin, is read as plain text.
pub fn detect_format(path: &Path) -> InputFormat {
    if path == Path::new("-") {
        return InputFormat::Text;
    }

    let has_pdf_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if has_pdf_ext || has_pdf_signature(path) {
        return InputFormat::Pdf;
    }

    InputFormat::Text
}

fn has_pdf_signature(path: &Path) -> bool {
    let mut head = [0u8; 4];
    match File::open(path) {
        Ok(mut file) => file.read_exact(&mut head).is_ok() && head == PDF_MAGIC,
        Err(_) => false,
    }
}
