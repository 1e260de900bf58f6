//! Document-level types.

use super::{ParagraphRole, ParagraphSpec};
use serde::{Deserialize, Serialize};

/// An ordered sequence of paragraphs ready for serialization.
///
/// Paragraphs can only be appended; insertion order is reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentModel {
    paragraphs: Vec<ParagraphSpec>,
}

impl DocumentModel {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
        }
    }

    /// Create an empty document with room for `capacity` paragraphs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            paragraphs: Vec::with_capacity(capacity),
        }
    }

    /// Append a paragraph.
    pub fn push(&mut self, paragraph: ParagraphSpec) {
        self.paragraphs.push(paragraph);
    }

    /// Paragraphs in reading order.
    pub fn paragraphs(&self) -> &[ParagraphSpec] {
        &self.paragraphs
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Get the total number of runs across all paragraphs.
    pub fn run_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.runs.len()).sum()
    }

    /// Count paragraphs with the given role.
    pub fn count_role(&self, role: ParagraphRole) -> usize {
        self.paragraphs.iter().filter(|p| p.role == role).count()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get plain text content, one line per paragraph.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(ParagraphSpec::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a DocumentModel {
    type Item = &'a ParagraphSpec;
    type IntoIter = std::slice::Iter<'a, ParagraphSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.paragraphs.iter()
    }
}
