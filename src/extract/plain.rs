//! Plain text and Markdown extractor.

use crate::error::{Error, Result};

use super::TextExtractor;

const UTF8_BOM: &str = "\u{feff}";

/// Reads `.txt` and `.md` uploads as UTF-8.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor {
    _private: (),
}

impl PlainTextExtractor {
    /// Create a new plain text extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "md", "markdown"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::Encoding(format!("input is not valid UTF-8: {}", e)))?;
        Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
    }
}
