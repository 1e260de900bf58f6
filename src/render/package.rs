//! ZIP packaging of the DOCX parts.

use crate::error::Result;
use crate::model::DocumentModel;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::xml;

/// Package entry name of the content types manifest.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
/// Package entry name of the package relationships.
pub const PACKAGE_RELS_PART: &str = "_rels/.rels";
/// Package entry name of the main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";
/// Package entry name of the main document's relationships.
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// Every entry written into a package, in archive order.
pub const PACKAGE_PARTS: [&str; 4] = [
    CONTENT_TYPES_PART,
    PACKAGE_RELS_PART,
    DOCUMENT_PART,
    DOCUMENT_RELS_PART,
];

/// Serialize a model into the bytes of a `.docx` package.
///
/// Entries are deflated and stamped with the fixed DOS epoch, so the same
/// model and font always produce the same bytes.
pub fn write_package(model: &DocumentModel, font_family: &str) -> Result<Vec<u8>> {
    let parts = [
        (CONTENT_TYPES_PART, xml::content_types_xml()),
        (PACKAGE_RELS_PART, xml::package_rels_xml()),
        (DOCUMENT_PART, xml::document_xml(model, font_family)),
        (DOCUMENT_RELS_PART, xml::document_rels_xml()),
    ];

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in &parts {
        zip.start_file(*name, options)?;
        zip.write_all(content.as_bytes())?;
        log::trace!("Wrote {} ({} bytes uncompressed)", name, content.len());
    }

    let bytes = zip.finish()?.into_inner();
    log::debug!(
        "Packaged {} paragraphs into {} bytes",
        model.paragraph_count(),
        bytes.len()
    );
    Ok(bytes)
}
