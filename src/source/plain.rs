use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ExtractionError;

/// Plain text supplied by the operator.
#[derive(Debug, Clone)]
pub enum PlainTextSource {
    /// Text passed directly on the command line.
    Inline(String),
    /// Everything on standard input.
    Stdin,
    /// A text file; invalid UTF-8 is replaced rather than rejected.
    File(PathBuf),
}

impl PlainTextSource {
    /// `-` selects standard input, anything else is a file path.
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            PlainTextSource::Stdin
        } else {
            PlainTextSource::File(path.to_path_buf())
        }
    }
}

impl super::TextSource for PlainTextSource {
    fn read_text(&self) -> Result<String, ExtractionError> {
        match self {
            PlainTextSource::Inline(text) => Ok(text.clone()),
            PlainTextSource::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(|source| ExtractionError::Io {
                        path: "<stdin>".to_string(),
                        source,
                    })?;
                debug!(bytes = buf.len(), "read stdin");
                Ok(String::from_utf8_lossy(&buf).into_owned())
            }
            PlainTextSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|source| ExtractionError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                debug!(path = %path.display(), bytes = bytes.len(), "read text file");
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::source::TextSource;

    #[test]
    fn test_inline() {
        let src = PlainTextSource::Inline("Cláusula de sigilo.".to_string());
        assert_eq!(src.read_text().unwrap(), "Cláusula de sigilo.");
    }

    #[test]
    fn test_file_keeps_text_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Linha um.\nLinha   dois com indenização.").unwrap();
        let text = PlainTextSource::from_path(file.path()).read_text().unwrap();
        assert_eq!(text, "Linha um.\nLinha   dois com indenização.");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"multa contratual \xff fim").unwrap();
        let text = PlainTextSource::from_path(file.path()).read_text().unwrap();
        assert!(text.starts_with("multa contratual "));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PlainTextSource::from_path(&dir.path().join("nope.txt"))
            .read_text()
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Io { .. }));
    }

    #[test]
    fn test_dash_is_stdin() {
        assert!(matches!(
            PlainTextSource::from_path(Path::new("-")),
            PlainTextSource::Stdin
        ));
    }
}
