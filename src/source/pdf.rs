use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ExtractionError;

/// Text extracted from a PDF file.
#[derive(Debug, Clone)]
pub struct PdfSource {
    path: PathBuf,
    min_length: usize,
}

impl PdfSource {
    pub fn new(path: &Path, min_length: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            min_length,
        }
    }
}

impl super::TextSource for PdfSource {
    fn read_text(&self) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(&self.path).map_err(|source| ExtractionError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        let text = extract_text(&bytes)?;
        let length = text.chars().count();
        debug!(path = %self.path.display(), chars = length, "extracted PDF text");

        if length < self.min_length {
            return Err(ExtractionError::InsufficientText {
                length,
                minimum: self.min_length,
            });
        }
        Ok(text)
    }
}

/// Extract text from PDF bytes and collapse whitespace runs to single spaces.
///
/// `pdf-extract` panics on some malformed inputs; the panic is contained and
/// reported as an extraction failure.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let raw = match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => return Err(classify_failure(&e.to_string())),
        Err(_) => {
            warn!("PDF extractor panicked");
            return Err(ExtractionError::Malformed(
                "extractor aborted on this document".to_string(),
            ));
        }
    };

    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return Err(ExtractionError::NoText);
    }
    Ok(text)
}

fn classify_failure(message: &str) -> ExtractionError {
    let lower = message.to_lowercase();
    if lower.contains("encrypt") || lower.contains("password") {
        ExtractionError::Encrypted
    } else if lower.contains("invalid")
        || lower.contains("malformed")
        || lower.contains("corrupt")
        || lower.contains("parse")
        || lower.contains("header")
    {
        ExtractionError::Malformed(message.to_string())
    } else {
        ExtractionError::Other(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DocumentAnalyzer;
    use crate::models::{AnalysisResult, ClauseCategory, InputFormat};
    use crate::report::pdf::render_to_bytes;
    use crate::source::{load_text, TextSource};

    fn write_report_pdf(dir: &Path, result: &AnalysisResult) -> PathBuf {
        let bytes = render_to_bytes(result, "contrato.txt").unwrap();
        let path = dir.join("contrato.pdf");
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_extracts_single_spaced_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report_pdf(dir.path(), &AnalysisResult::new(Vec::new()));

        let text = PdfSource::new(&path, 10).read_text().unwrap();
        assert!(text.contains("Risk Report"));
        assert!(!text.contains("  "));
        assert!(!text.contains('\n'));
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_insufficient_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report_pdf(dir.path(), &AnalysisResult::new(Vec::new()));

        let err = PdfSource::new(&path, 100_000).read_text().unwrap_err();
        match err {
            ExtractionError::InsufficientText { length, minimum } => {
                assert_eq!(minimum, 100_000);
                assert!(length > 0 && length < minimum);
            }
            other => panic!("expected InsufficientText, got {other:?}"),
        }
    }

    #[test]
    fn test_pdf_document_is_analyzed() {
        let doc = "Fica eleito o foro competente da comarca de Campinas para qualquer litigio. \
                   A multa contratual sera de dez por cento do valor total do contrato.";
        let result = DocumentAnalyzer::default().analyze(doc).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = write_report_pdf(dir.path(), &result);

        let text = load_text(&path, InputFormat::Pdf, 50).unwrap();
        let extracted = DocumentAnalyzer::default().analyze(&text).unwrap();
        let categories: Vec<ClauseCategory> = extracted.hits.iter().map(|h| h.category).collect();
        assert!(categories.contains(&ClauseCategory::ForoEleicao));
        assert!(categories.contains(&ClauseCategory::MultaContratual));
    }

    #[test]
    fn test_garbage_bytes_fail_without_panicking() {
        let err = extract_text(b"this is not a pdf at all").unwrap_err();
        assert!(!matches!(err, ExtractionError::NoText | ExtractionError::InsufficientText { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PdfSource::new(&dir.path().join("missing.pdf"), 50)
            .read_text()
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Io { .. }));
    }

    #[test]
    fn test_classify_failure() {
        assert!(matches!(classify_failure("file is encrypted"), ExtractionError::Encrypted));
        assert!(matches!(
            classify_failure("Invalid file header"),
            ExtractionError::Malformed(_)
        ));
        assert!(matches!(classify_failure("boom"), ExtractionError::Other(_)));
    }
}
