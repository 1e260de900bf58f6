//! Error types for the mdocx library.

use std::io;
use thiserror::Error;

/// Result type alias for mdocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while synthesizing or extracting documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The ZIP archive writer or reader failed.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML could not be read.
    #[error("XML error: {0}")]
    Xml(String),

    /// The style configuration is malformed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error serializing the document model or payload.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// The input format is not recognized.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The input format is recognized but no extractor handles it.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Error extracting text from a source document.
    #[error("Text extraction error: {0}")]
    Extract(String),

    /// Encoding error.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}
