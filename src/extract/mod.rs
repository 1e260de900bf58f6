//! Text extraction from uploaded source files.
//!
//! Extractors turn an upload (plain text, Markdown, DOCX) into the
//! Markdown-ish text the synthesizer consumes. This module defines a small
//! plugin architecture: each [`TextExtractor`] declares the extensions it
//! handles and the [`ExtractorRegistry`] dispatches on file extension or on
//! the sniffed content format.
//!
//! # Example
//!
//! ```no_run
//! use mdocx::extract::ExtractorRegistry;
//! use std::path::Path;
//!
//! fn main() -> mdocx::Result<()> {
//!     let registry = ExtractorRegistry::with_defaults();
//!     let text = registry.extract(Path::new("questionnaire.docx"))?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

mod docx;
mod plain;

pub use docx::{DocxExtractor, DEFAULT_MAX_PART_BYTES};
pub use plain::PlainTextExtractor;

use crate::detect::{detect_format_from_bytes, SourceFormat};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for text extractors.
///
/// Implement this trait to add support for a new upload format.
pub trait TextExtractor: Send + Sync {
    /// Get the supported file extensions for this extractor.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["docx"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract text from bytes.
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String>;

    /// Extract text from a file at the given path.
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        self.extract_bytes(&bytes)
    }

    /// Check if this extractor supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for text extractors.
///
/// The registry maps file extensions to extractors and provides
/// convenient methods for extracting text from uploads.
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn TextExtractor>>,
    by_name: HashMap<String, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with default extractors (plain text, DOCX).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PlainTextExtractor::new()));
        registry.register(Arc::new(DocxExtractor::new()));
        registry
    }

    /// Register an extractor.
    ///
    /// The extractor will be registered for all its supported extensions.
    pub fn register(&mut self, extractor: Arc<dyn TextExtractor>) {
        for ext in extractor.supported_extensions() {
            self.extractors
                .insert(ext.to_lowercase(), extractor.clone());
        }
        self.by_name
            .insert(extractor.name().to_lowercase(), extractor);
    }

    /// Get an extractor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn TextExtractor>> {
        self.extractors.get(&ext.to_lowercase()).cloned()
    }

    /// Get an extractor by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn TextExtractor>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.extractors.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extractors.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Extract text from a file using the extractor for its extension.
    pub fn extract(&self, path: &Path) -> Result<String> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Other("File has no extension".into()))?;

        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_lowercase()))?;

        log::debug!("Extracting {} with {}", path.display(), extractor.name());
        extractor.extract(path)
    }

    /// Extract text from bytes using the specified extension to pick the extractor.
    pub fn extract_bytes(&self, bytes: &[u8], ext: &str) -> Result<String> {
        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_lowercase()))?;

        extractor.extract_bytes(bytes)
    }

    /// Extract text from bytes, choosing the extractor from the content itself.
    pub fn extract_detected(&self, bytes: &[u8]) -> Result<String> {
        let format = detect_format_from_bytes(bytes)?;
        log::debug!("Detected source format: {}", format);
        match format {
            SourceFormat::Pdf => Err(Error::UnsupportedFormat("pdf".into())),
            _ => self.extract_bytes(bytes, format.extension()),
        }
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_defaults() {
        let registry = ExtractorRegistry::with_defaults();
        assert!(registry.supports("docx"));
        assert!(registry.supports("DOCX"));
        assert!(registry.supports("md"));
        assert!(registry.supports("txt"));
        assert!(!registry.supports("pdf"));
    }

    #[test]
    fn test_registry_get_by_extension() {
        let registry = ExtractorRegistry::with_defaults();
        let extractor = registry.get_by_extension("docx");
        assert!(extractor.is_some());
        assert_eq!(extractor.unwrap().name(), "docx");
    }

    #[test]
    fn test_registry_get_by_name() {
        let registry = ExtractorRegistry::with_defaults();
        assert!(registry.get_by_name("text").is_some());
        assert!(registry.get_by_name("TEXT").is_some());
    }

    #[test]
    fn test_supported_extensions_sorted() {
        let registry = ExtractorRegistry::with_defaults();
        assert_eq!(
            registry.supported_extensions(),
            vec!["docx", "markdown", "md", "txt"]
        );
    }

    #[test]
    fn test_extract_detected_text() {
        let registry = ExtractorRegistry::with_defaults();
        let text = registry.extract_detected(b"# Hello").unwrap();
        assert_eq!(text, "# Hello");
    }

    #[test]
    fn test_extract_detected_pdf_unsupported() {
        let registry = ExtractorRegistry::with_defaults();
        let result = registry.extract_detected(b"%PDF-1.7\n%test");
        assert!(matches!(result, Err(Error::UnsupportedFormat(ref f)) if f == "pdf"));
    }

    #[test]
    fn test_extract_bytes_unknown_extension() {
        let registry = ExtractorRegistry::with_defaults();
        let result = registry.extract_bytes(b"data", "xyz");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }
}
