use thiserror::Error;

/// Validation failures raised by the document analyzer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("text too short: {length} characters, at least {minimum} required")]
    InputTooShort { length: usize, minimum: usize },
}

/// Failures while obtaining document text from a source.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF is encrypted or password protected")]
    Encrypted,

    #[error("PDF could not be parsed: {0}")]
    Malformed(String),

    #[error("no extractable text (scanned or image-only document?)")]
    NoText,

    #[error("PDF without enough content for analysis: {length} characters, at least {minimum} required")]
    InsufficientText { length: usize, minimum: usize },

    #[error("text extraction failed: {0}")]
    Other(String),
}
