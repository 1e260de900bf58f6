//! # mdocx
//!
//! Markdown-flavored text to Word (`.docx`) synthesis for Rust.
//!
//! This library turns lightly formatted text (`#` headings, `**bold**`,
//! `*italic*`) into a minimal WordprocessingML package with a fixed,
//! configurable typographic policy.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> mdocx::Result<()> {
//!     let bytes = mdocx::convert("# Report\n\nAll **systems** nominal.")?;
//!     std::fs::write("report.docx", bytes)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Deterministic output**: identical input and config give identical bytes
//! - **Role presets**: title, subtitle and body sizes, colors and alignment
//! - **Text extraction**: read `.txt`, `.md` and `.docx` sources back as text
//! - **Parallel batches**: uses Rayon to convert many documents at once
//! - **Delivery payloads**: base64 JSON envelopes for automation hooks

pub mod config;
pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use config::{HexColor, RoleStyle, StyleConfig};
pub use convert::{DocumentBuilder, DocxSynthesizer};
pub use detect::{detect_format_from_bytes, detect_format_from_path, SourceFormat};
pub use error::{Error, Result};
pub use extract::{DocxExtractor, ExtractorRegistry, PlainTextExtractor, TextExtractor};
pub use model::{Alignment, DocumentModel, ParagraphRole, ParagraphSpec, StyledRun};
pub use parser::{classify_line, parse_inline, InlineSpan, LineKind, ParsedLine};
pub use render::{DocxArtifact, JsonFormat, RenderResult, SynthesisStats, DOCX_MIME_TYPE};

use std::path::Path;

/// Convert text to `.docx` bytes with the reference configuration.
///
/// # Example
///
/// ```no_run
/// let bytes = mdocx::convert("# Title\n\nBody **text** here.").unwrap();
/// assert!(bytes.starts_with(b"PK"));
/// ```
pub fn convert(text: &str) -> Result<Vec<u8>> {
    DocxSynthesizer::default().convert(text)
}

/// Convert text to `.docx` bytes with a custom configuration.
///
/// The configuration is validated before any work is done.
///
/// # Example
///
/// ```no_run
/// use mdocx::{convert_with_config, StyleConfig};
///
/// let config = StyleConfig::new().with_font_family("Georgia").with_justify_body(false);
/// let bytes = convert_with_config("Hello", &config).unwrap();
/// ```
pub fn convert_with_config(text: &str, config: &StyleConfig) -> Result<Vec<u8>> {
    DocxSynthesizer::new(config.clone())?.convert(text)
}

/// Convert text with the reference configuration and write it to `path`.
///
/// # Example
///
/// ```no_run
/// mdocx::save_to_file("# Minutes", "minutes.docx").unwrap();
/// ```
pub fn save_to_file<P: AsRef<Path>>(text: &str, path: P) -> Result<()> {
    DocxSynthesizer::default().save_to_file(text, path)
}

/// Extract plain text from a `.txt`, `.md` or `.docx` file.
///
/// # Example
///
/// ```no_run
/// let text = mdocx::extract_text("draft.docx").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    ExtractorRegistry::with_defaults().extract(path.as_ref())
}

/// Builder for configuring and running a conversion.
///
/// # Example
///
/// ```no_run
/// use mdocx::Mdocx;
///
/// let bytes = Mdocx::new()
///     .with_font_family("Garamond")
///     .justify_body(false)
///     .parse("# Notes\n\n*draft*")?
///     .to_docx()?;
/// # Ok::<(), mdocx::Error>(())
/// ```
pub struct Mdocx {
    config: StyleConfig,
}

impl Mdocx {
    /// Create a builder with the reference configuration.
    pub fn new() -> Self {
        Self {
            config: StyleConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: StyleConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, font: impl Into<String>) -> Self {
        self.config = self.config.with_font_family(font);
        self
    }

    /// Justify body paragraphs or align them left.
    pub fn justify_body(mut self, justify: bool) -> Self {
        self.config = self.config.with_justify_body(justify);
        self
    }

    /// Force bold and underline on subtitles.
    pub fn with_subtitle_emphasis(mut self, enabled: bool) -> Self {
        self.config = self.config.with_subtitle_emphasis(enabled);
        self
    }

    /// Validate the configuration and assemble `text`.
    pub fn parse(self, text: &str) -> Result<MdocxResult> {
        let synthesizer = DocxSynthesizer::new(self.config)?;
        let document = synthesizer.build_model(text);
        Ok(MdocxResult {
            document,
            synthesizer,
        })
    }

    /// Extract text from a file, then assemble it.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<MdocxResult> {
        let text = extract_text(path)?;
        self.parse(&text)
    }
}

impl Default for Mdocx {
    fn default() -> Self {
        Self::new()
    }
}

/// An assembled document ready to be serialized.
pub struct MdocxResult {
    /// The assembled document
    pub document: DocumentModel,
    synthesizer: DocxSynthesizer,
}

impl MdocxResult {
    /// Serialize to `.docx` bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.document, self.synthesizer.config())
    }

    /// Serialize to `.docx` bytes with statistics.
    pub fn to_docx_with_stats(&self) -> Result<RenderResult> {
        render::to_docx_with_stats(&self.document, self.synthesizer.config())
    }

    /// Serialize the document model to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Plain text of the document, one line per paragraph.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &DocumentModel {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mdocx_builder() {
        let builder = Mdocx::new()
            .with_font_family("Georgia")
            .justify_body(false)
            .with_subtitle_emphasis(false);

        assert_eq!(builder.config.font_family, "Georgia");
        assert!(!builder.config.justify_body);
        assert!(!builder.config.subtitle_bold);
        assert!(!builder.config.subtitle_underline);
    }

    #[test]
    fn test_mdocx_builder_default() {
        let builder = Mdocx::default();
        assert_eq!(builder.config, StyleConfig::default());
    }

    #[test]
    fn test_mdocx_parse_invalid_config() {
        let result = Mdocx::new().with_font_family("  ").parse("text");
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_mdocx_result_outputs() {
        let result = Mdocx::new().parse("# Head\nbody *it*").unwrap();

        assert_eq!(result.plain_text(), "Head\nbody it");
        assert_eq!(result.document().paragraph_count(), 2);

        let bytes = result.to_docx().unwrap();
        assert_eq!(bytes, convert("# Head\nbody *it*").unwrap());

        let json = result.to_json(JsonFormat::Compact).unwrap();
        assert!(json.contains("\"role\":\"title\""));
    }

    #[test]
    fn test_mdocx_result_stats() {
        let result = Mdocx::new().parse("a b c").unwrap();
        let rendered = result.to_docx_with_stats().unwrap();
        assert_eq!(rendered.stats.word_count, 3);
        assert_eq!(rendered.stats.body_count, 1);
    }

    #[test]
    fn test_convert_with_config_validates() {
        let config = StyleConfig::default().with_font_family("");
        assert!(convert_with_config("x", &config).is_err());
    }

    #[test]
    fn test_convert_is_deterministic() {
        let text = "# A\n## B\nc **d** *e*";
        assert_eq!(convert(text).unwrap(), convert(text).unwrap());
    }

    #[test]
    fn test_extract_text_missing_file() {
        let result = extract_text("/nonexistent/path/notes.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_mdocx_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "# From file\nline").unwrap();

        let result = Mdocx::new().parse_file(&path).unwrap();
        assert_eq!(result.document().count_role(ParagraphRole::Title), 1);
    }
}
