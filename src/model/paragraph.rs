//! Paragraph and run-level types.

use crate::config::HexColor;
use serde::{Deserialize, Serialize};

/// A paragraph of styled runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphSpec {
    /// Runs in reading order
    pub runs: Vec<StyledRun>,

    /// Paragraph justification
    pub alignment: Alignment,

    /// Which preset produced the run formatting
    pub role: ParagraphRole,
}

impl ParagraphSpec {
    /// Create a paragraph from already formatted runs.
    pub fn new(runs: Vec<StyledRun>, alignment: Alignment, role: ParagraphRole) -> Self {
        Self {
            runs,
            alignment,
            role,
        }
    }

    /// Create an empty, left-aligned paragraph standing in for a blank line.
    pub fn blank() -> Self {
        Self::new(Vec::new(), Alignment::Left, ParagraphRole::Blank)
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Check if the paragraph has no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Check if this paragraph came from a heading line.
    pub fn is_heading(&self) -> bool {
        matches!(self.role, ParagraphRole::Title | ParagraphRole::Subtitle)
    }
}

/// A run of text sharing one set of formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    /// The text content (never empty)
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Single underline
    pub underline: bool,

    /// Font size in half-points
    pub font_size_half_points: u32,

    /// Text color
    pub color: HexColor,
}

impl StyledRun {
    /// Create a plain run with the given size and color.
    pub fn new(text: impl Into<String>, font_size_half_points: u32, color: HexColor) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            underline: false,
            font_size_half_points,
            color,
        }
    }

    /// Set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline.
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Check if any emphasis is applied.
    pub fn has_emphasis(&self) -> bool {
        self.bold || self.italic || self.underline
    }
}

/// Paragraph justification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// The `w:jc` value for this alignment. Justify is spelled `both`.
    pub fn as_ooxml(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

/// Which formatting preset a paragraph was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphRole {
    /// Level-1 heading
    Title,
    /// Level 2 to 6 heading
    Subtitle,
    /// Ordinary paragraph
    Body,
    /// Blank source line
    Blank,
}
