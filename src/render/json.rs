//! JSON dumps of the synthesis pipeline.
//!
//! The CLI `inspect` and `info` commands and the FFI layer all print through
//! here, so every dump shares one formatting switch.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::DocumentModel;
use crate::parser::ParsedLine;

use super::SynthesisStats;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

impl JsonFormat {
    /// Pick the format from a `compact` flag.
    pub fn from_compact(compact: bool) -> Self {
        if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        }
    }
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };
    result.map_err(|e| Error::Serialize(format!("JSON serialization error: {}", e)))
}

/// Convert a document model to JSON.
pub fn to_json(doc: &DocumentModel, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

/// Dump classified source lines, before any styling is applied.
pub fn lines_to_json(lines: &[ParsedLine], format: JsonFormat) -> Result<String> {
    serialize(lines, format)
}

/// Dump synthesis statistics.
pub fn stats_to_json(stats: &SynthesisStats, format: JsonFormat) -> Result<String> {
    serialize(stats, format)
}
