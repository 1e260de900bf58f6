//! Rendering module for turning a document model into output artifacts.

mod json;
mod package;
mod payload;
mod result;
pub mod xml;

pub use json::{lines_to_json, stats_to_json, to_json, JsonFormat};
pub use package::{
    write_package, CONTENT_TYPES_PART, DOCUMENT_PART, DOCUMENT_RELS_PART, PACKAGE_PARTS,
    PACKAGE_RELS_PART,
};
pub use payload::{DocxArtifact, DEFAULT_FILE_NAME};
pub use result::{RenderResult, SynthesisStats};

use crate::config::StyleConfig;
use crate::error::Result;
use crate::model::DocumentModel;

/// MIME type of a WordprocessingML package.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Serialize a document model into `.docx` bytes.
pub fn to_docx(doc: &DocumentModel, config: &StyleConfig) -> Result<Vec<u8>> {
    write_package(doc, &config.font_family)
}

/// Serialize a document model into `.docx` bytes with statistics.
pub fn to_docx_with_stats(doc: &DocumentModel, config: &StyleConfig) -> Result<RenderResult> {
    let content = to_docx(doc, config)?;
    Ok(RenderResult::new(content, SynthesisStats::from_model(doc)))
}
