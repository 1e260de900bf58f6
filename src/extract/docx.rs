//! DOCX text extractor.
//!
//! Streams `word/document.xml` and emits the text of every `w:p`, one line
//! per paragraph. Empty paragraphs are kept so vertical spacing survives as
//! blank lines.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

use super::TextExtractor;

const MAIN_PART: &str = "word/document.xml";

/// Largest main document part read by default (64 MiB, uncompressed).
pub const DEFAULT_MAX_PART_BYTES: u64 = 64 * 1024 * 1024;

/// Extracts paragraph text from `.docx` uploads.
#[derive(Debug, Clone)]
pub struct DocxExtractor {
    max_part_bytes: u64,
}

impl DocxExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self {
            max_part_bytes: DEFAULT_MAX_PART_BYTES,
        }
    }

    /// Set the largest uncompressed `word/document.xml` that will be read.
    pub fn with_max_part_bytes(mut self, limit: u64) -> Self {
        self.max_part_bytes = limit;
        self
    }

    fn read_main_part(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| Error::Extract(format!("not a valid DOCX package: {}", e)))?;

        let mut part = archive.by_name(MAIN_PART).map_err(|e| match e {
            ZipError::FileNotFound => Error::Extract(format!("missing {}", MAIN_PART)),
            other => Error::Zip(other),
        })?;

        // The declared size comes from the upload and is only a hint.
        let hint = part.size().min(self.max_part_bytes).min(DEFAULT_MAX_PART_BYTES);
        let mut data = Vec::with_capacity(hint as usize);
        part.by_ref()
            .take(self.max_part_bytes.saturating_add(1))
            .read_to_end(&mut data)
            .map_err(|e| Error::Extract(format!("failed to read {}: {}", MAIN_PART, e)))?;

        if data.len() as u64 > self.max_part_bytes {
            return Err(Error::Extract(format!(
                "{} exceeds {} bytes",
                MAIN_PART, self.max_part_bytes
            )));
        }

        String::from_utf8(data).map_err(|e| Error::Encoding(format!("{}: {}", MAIN_PART, e)))
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for DocxExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let xml = self.read_main_part(bytes)?;
        let paragraphs = paragraph_texts(&xml)?;
        log::debug!("Extracted {} paragraphs from {}", paragraphs.len(), MAIN_PART);
        Ok(paragraphs.join("\n"))
    }
}

/// Collect the text of each `w:p` element in document order.
///
/// Paragraphs nested inside another paragraph (text boxes) are emitted before
/// the paragraph that contains them.
pub(crate) fn paragraph_texts(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => open.push(String::new()),
                b"t" => in_text = true,
                b"tab" => push_char(&mut open, '\t'),
                b"br" | b"cr" => push_char(&mut open, '\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                b"tab" => push_char(&mut open, '\t'),
                b"br" | b"cr" => push_char(&mut open, '\n'),
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(text) = open.pop() {
                        paragraphs.push(text);
                    }
                }
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t.unescape()?;
                if let Some(current) = open.last_mut() {
                    current.push_str(&text);
                } else {
                    log::warn!("Text outside of any paragraph ignored");
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !open.is_empty() {
        log::warn!("{} paragraph(s) left unclosed at end of document", open.len());
        paragraphs.extend(open.drain(..));
    }

    Ok(paragraphs)
}

fn push_char(open: &mut [String], c: char) {
    if let Some(current) = open.last_mut() {
        current.push(c);
    }
}
