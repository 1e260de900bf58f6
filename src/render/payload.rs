//! Delivery payload for synthesized packages.
//!
//! Automation hooks that cannot pass raw bytes receive the package as base64
//! inside a small JSON envelope.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use std::path::Path;

use super::DOCX_MIME_TYPE;

/// Default file name suggested to the receiver.
pub const DEFAULT_FILE_NAME: &str = "document.docx";

/// A synthesized package plus the metadata needed to deliver it.
#[derive(Debug, Clone)]
pub struct DocxArtifact {
    /// Suggested file name
    pub file_name: String,

    /// Package bytes
    pub data: Vec<u8>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Payload<'a> {
    success: bool,
    file_name: &'a str,
    mime_type: &'a str,
    data: String,
}

impl DocxArtifact {
    /// Wrap package bytes with the default file name.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            data,
        }
    }

    /// Set the suggested file name.
    ///
    /// Names without a `.docx` extension get one appended.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        let mut name = name.into();
        let has_ext = Path::new(&name)
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("docx"));
        if !has_ext {
            name.push_str(".docx");
        }
        self.file_name = name;
        self
    }

    /// MIME type of the package.
    pub fn mime_type(&self) -> &'static str {
        DOCX_MIME_TYPE
    }

    /// Encode the package bytes as standard base64.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// Build the `{success, fileName, mimeType, data}` JSON envelope.
    pub fn to_payload_json(&self) -> Result<String> {
        let payload = Payload {
            success: true,
            file_name: &self.file_name,
            mime_type: DOCX_MIME_TYPE,
            data: self.to_base64(),
        };
        serde_json::to_string(&payload)
            .map_err(|e| Error::Serialize(format!("payload serialization error: {}", e)))
    }

    /// Write the package bytes to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.data)?;
        Ok(())
    }
}
