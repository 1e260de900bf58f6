//! Rendering result with statistics.

use crate::model::{DocumentModel, ParagraphRole};
use serde::{Deserialize, Serialize};

use super::DOCX_MIME_TYPE;

/// Result of rendering a document, including the package bytes and statistics.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The `.docx` package bytes
    pub content: Vec<u8>,

    /// Synthesis statistics
    pub stats: SynthesisStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: Vec<u8>, stats: SynthesisStats) -> Self {
        Self { content, stats }
    }

    /// Get the package size in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// MIME type of the package.
    pub fn mime_type(&self) -> &'static str {
        DOCX_MIME_TYPE
    }
}

/// Statistics collected while synthesizing a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisStats {
    /// Total number of paragraphs, blanks included
    pub paragraph_count: u32,

    /// Number of title paragraphs
    pub title_count: u32,

    /// Number of subtitle paragraphs
    pub subtitle_count: u32,

    /// Number of body paragraphs
    pub body_count: u32,

    /// Number of blank paragraphs
    pub blank_count: u32,

    /// Number of styled runs
    pub run_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl SynthesisStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a whole model.
    pub fn from_model(model: &DocumentModel) -> Self {
        let mut stats = Self::new();
        for paragraph in model {
            stats.add_paragraph(paragraph.role);
            stats.run_count += paragraph.runs.len() as u32;
            for run in &paragraph.runs {
                stats.count_text(&run.text);
            }
        }
        stats
    }

    /// Increment the paragraph count for a role.
    pub fn add_paragraph(&mut self, role: ParagraphRole) {
        self.paragraph_count += 1;
        match role {
            ParagraphRole::Title => self.title_count += 1,
            ParagraphRole::Subtitle => self.subtitle_count += 1,
            ParagraphRole::Body => self.body_count += 1,
            ParagraphRole::Blank => self.blank_count += 1,
        }
    }

    /// Get the number of heading paragraphs.
    pub fn heading_count(&self) -> u32 {
        self.title_count + self.subtitle_count
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &SynthesisStats) {
        self.paragraph_count += other.paragraph_count;
        self.title_count += other.title_count;
        self.subtitle_count += other.subtitle_count;
        self.body_count += other.body_count;
        self.blank_count += other.blank_count;
        self.run_count += other.run_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_count_text() {
        let mut stats = SynthesisStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_stats_roles() {
        let mut stats = SynthesisStats::new();
        stats.add_paragraph(ParagraphRole::Title);
        stats.add_paragraph(ParagraphRole::Subtitle);
        stats.add_paragraph(ParagraphRole::Blank);
        stats.add_paragraph(ParagraphRole::Body);
        stats.add_paragraph(ParagraphRole::Body);

        assert_eq!(stats.paragraph_count, 5);
        assert_eq!(stats.heading_count(), 2);
        assert_eq!(stats.body_count, 2);
        assert_eq!(stats.blank_count, 1);
    }

    #[test]
    fn test_stats_merge() {
        let mut stats1 = SynthesisStats {
            paragraph_count: 5,
            run_count: 7,
            ..Default::default()
        };
        let stats2 = SynthesisStats {
            paragraph_count: 3,
            run_count: 1,
            blank_count: 2,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.paragraph_count, 8);
        assert_eq!(stats1.run_count, 8);
        assert_eq!(stats1.blank_count, 2);
    }

    #[test]
    fn test_render_result_mime_type() {
        let result = RenderResult::new(vec![1, 2, 3], SynthesisStats::default());
        assert_eq!(result.content_len(), 3);
        assert_eq!(
            result.mime_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }
}
