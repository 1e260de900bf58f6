//! Markdown to `.docx` synthesis.
//!
//! [`DocxSynthesizer`] ties the pipeline together: lines are classified,
//! assembled into a [`DocumentModel`] under a [`StyleConfig`], and serialized
//! into a WordprocessingML package.
//!
//! # Example
//!
//! ```no_run
//! use mdocx::convert::DocxSynthesizer;
//!
//! fn main() -> mdocx::Result<()> {
//!     let synthesizer = DocxSynthesizer::default();
//!     let bytes = synthesizer.convert("# Title\n\nBody **text** here.")?;
//!     std::fs::write("letter.docx", bytes)?;
//!     Ok(())
//! }
//! ```

mod assemble;

pub use assemble::DocumentBuilder;

use crate::config::StyleConfig;
use crate::error::Result;
use crate::model::DocumentModel;
use crate::parser::parse_text;
use crate::render::{self, DocxArtifact, RenderResult};
use rayon::prelude::*;
use std::path::Path;

/// Converts Markdown-flavored text into `.docx` packages.
///
/// The synthesizer holds a validated configuration and no other state, so a
/// single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct DocxSynthesizer {
    config: StyleConfig,
}

impl DocxSynthesizer {
    /// Create a synthesizer, rejecting an invalid configuration.
    pub fn new(config: StyleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Parse and assemble `text` without serializing it.
    pub fn build_model(&self, text: &str) -> DocumentModel {
        let lines = parse_text(text);
        let mut builder = DocumentBuilder::with_capacity(&self.config, lines.len());
        builder.extend(&lines);
        let model = builder.finish();
        log::debug!(
            "Assembled {} paragraph(s), {} run(s)",
            model.paragraph_count(),
            model.run_count()
        );
        model
    }

    /// Convert `text` into `.docx` bytes.
    pub fn convert(&self, text: &str) -> Result<Vec<u8>> {
        let model = self.build_model(text);
        render::to_docx(&model, &self.config)
    }

    /// Convert `text` and collect statistics about the result.
    pub fn convert_with_stats(&self, text: &str) -> Result<RenderResult> {
        let model = self.build_model(text);
        render::to_docx_with_stats(&model, &self.config)
    }

    /// Convert `text` into an artifact ready for delivery.
    pub fn convert_to_artifact(&self, text: &str, file_name: &str) -> Result<DocxArtifact> {
        let data = self.convert(text)?;
        Ok(DocxArtifact::new(data).with_file_name(file_name))
    }

    /// Convert several documents in parallel.
    ///
    /// Results are returned in input order. One failure does not affect the
    /// other documents.
    pub fn convert_batch<S>(&self, texts: &[S]) -> Vec<Result<Vec<u8>>>
    where
        S: AsRef<str> + Sync,
    {
        log::debug!("Converting batch of {} document(s)", texts.len());
        texts
            .par_iter()
            .map(|text| self.convert(text.as_ref()))
            .collect()
    }

    /// Convert `text` and write the package to `path`.
    pub fn save_to_file<P: AsRef<Path>>(&self, text: &str, path: P) -> Result<()> {
        let path = path.as_ref();
        let data = self.convert(text)?;
        std::fs::write(path, &data)?;
        log::info!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HexColor, RoleStyle};
    use crate::error::Error;
    use crate::model::{Alignment, ParagraphRole};

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = StyleConfig::default().with_body(RoleStyle::new(0, HexColor::black()));
        let result = DocxSynthesizer::new(config);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_build_model_example() {
        let synthesizer = DocxSynthesizer::default();
        let model = synthesizer.build_model("# Title\n\nBody **text** here.");
        let paragraphs = model.paragraphs();

        assert_eq!(paragraphs.len(), 3);

        assert_eq!(paragraphs[0].role, ParagraphRole::Title);
        assert_eq!(paragraphs[0].runs.len(), 1);
        assert_eq!(paragraphs[0].runs[0].text, "Title");
        assert_eq!(paragraphs[0].runs[0].font_size_half_points, 28);
        assert!(!paragraphs[0].runs[0].bold);

        assert_eq!(paragraphs[1].role, ParagraphRole::Blank);
        assert!(paragraphs[1].runs.is_empty());

        assert_eq!(paragraphs[2].alignment, Alignment::Justify);
        let texts: Vec<_> = paragraphs[2].runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Body ", "text", " here."]);
        assert!(paragraphs[2].runs[1].bold);
    }

    #[test]
    fn test_subtitle_override() {
        let synthesizer = DocxSynthesizer::default();
        let model = synthesizer.build_model("## *not bold*");
        let run = &model.paragraphs()[0].runs[0];

        assert_eq!(run.text, "not bold");
        assert!(run.bold);
        assert!(run.italic);
        assert!(run.underline);
    }

    #[test]
    fn test_empty_input_is_one_blank_paragraph() {
        let synthesizer = DocxSynthesizer::default();
        let model = synthesizer.build_model("");
        assert_eq!(model.paragraph_count(), 1);
        assert_eq!(model.paragraphs()[0].role, ParagraphRole::Blank);

        let bytes = synthesizer.convert("").unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn test_convert_with_stats() {
        let synthesizer = DocxSynthesizer::default();
        let result = synthesizer
            .convert_with_stats("# T\n## S\nbody\n")
            .unwrap();

        assert_eq!(result.stats.paragraph_count, 4);
        assert_eq!(result.stats.title_count, 1);
        assert_eq!(result.stats.subtitle_count, 1);
        assert_eq!(result.stats.body_count, 1);
        assert_eq!(result.stats.blank_count, 1);
        assert!(result.content_len() > 0);
    }

    #[test]
    fn test_convert_to_artifact() {
        let synthesizer = DocxSynthesizer::default();
        let artifact = synthesizer.convert_to_artifact("hi", "memo").unwrap();
        assert_eq!(artifact.file_name, "memo.docx");
        assert!(artifact.data.starts_with(b"PK"));
    }

    #[test]
    fn test_convert_batch_preserves_order() {
        let synthesizer = DocxSynthesizer::default();
        let inputs = ["# one", "two", "three\nfour"];
        let results = synthesizer.convert_batch(&inputs);

        assert_eq!(results.len(), 3);
        for (input, result) in inputs.iter().zip(results) {
            assert_eq!(result.unwrap(), synthesizer.convert(input).unwrap());
        }
    }

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");

        let synthesizer = DocxSynthesizer::default();
        synthesizer.save_to_file("# Saved", &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, synthesizer.convert("# Saved").unwrap());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.docx");

        let result = DocxSynthesizer::default().save_to_file("x", &path);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
