//! Source format detection for uploaded files.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Format of an uploaded source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// ZIP container, treated as a DOCX package
    Docx,
    /// PDF document (recognized, not extracted)
    Pdf,
    /// UTF-8 text, Markdown included
    PlainText,
}

impl SourceFormat {
    /// Canonical file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Docx => "docx",
            SourceFormat::Pdf => "pdf",
            SourceFormat::PlainText => "txt",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Docx => write!(f, "DOCX"),
            SourceFormat::Pdf => write!(f, "PDF"),
            SourceFormat::PlainText => write!(f, "plain text"),
        }
    }
}

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// How much of a file is inspected when sniffing from disk.
const SNIFF_LEN: u64 = 4096;

/// Detect the source format of a file.
///
/// Only the first few kilobytes are read.
///
/// # Example
/// ```no_run
/// use mdocx::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("upload.bin").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(SNIFF_LEN as usize);
    BufReader::new(file).take(SNIFF_LEN).read_to_end(&mut head)?;
    detect_head(&head, true)
}

/// Detect the source format from the complete file content.
///
/// # Returns
/// * `Ok(SourceFormat)` for ZIP, PDF, or valid UTF-8 data
/// * `Err(Error::UnknownFormat)` for anything else, including empty input
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SourceFormat> {
    detect_head(data, false)
}

fn detect_head(data: &[u8], truncated: bool) -> Result<SourceFormat> {
    if data.is_empty() {
        return Err(Error::UnknownFormat);
    }
    if data.starts_with(ZIP_MAGIC) {
        return Ok(SourceFormat::Docx);
    }
    if data.starts_with(PDF_MAGIC) {
        return Ok(SourceFormat::Pdf);
    }
    if is_utf8_text(data, truncated) {
        return Ok(SourceFormat::PlainText);
    }
    Err(Error::UnknownFormat)
}

fn is_utf8_text(data: &[u8], truncated: bool) -> bool {
    match std::str::from_utf8(data) {
        Ok(text) => !text.contains('\0'),
        // A multi-byte character may straddle the sniff window.
        Err(e) if truncated && e.error_len().is_none() => {
            !data[..e.valid_up_to()].contains(&0)
        }
        Err(_) => false,
    }
}

/// Check if bytes look like a DOCX (ZIP) package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}
