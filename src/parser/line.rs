//! Line classification.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Separators U+001C..=U+001F count as whitespace here, in both the trim and
// the heading gap.
static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})[\s\x1C-\x1F]+(.+)$").unwrap());

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Block type of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "level", rename_all = "lowercase")]
pub enum LineKind {
    /// Empty or whitespace-only line
    Blank,
    /// `#` to `######` heading; the level is 1 to 6
    Heading(u8),
    /// Anything else
    Paragraph,
}

/// A classified line and its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    /// Block type
    pub kind: LineKind,

    /// Text after the heading marker, or the whole line; empty for blanks
    pub content: String,
}

impl ParsedLine {
    /// Check if the line is blank.
    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Blank
    }

    /// Get the heading level (1-6) or None.
    pub fn heading_level(&self) -> Option<u8> {
        match self.kind {
            LineKind::Heading(level) => Some(level),
            _ => None,
        }
    }
}

/// Classify one line of text.
///
/// Trailing whitespace, including the information separators U+001C to
/// U+001F, is stripped first. `#` inside code spans or behind
/// escapes is not special-cased.
pub fn classify_line(line: &str) -> ParsedLine {
    let line = line.trim_end_matches(is_space);

    if line.is_empty() {
        return ParsedLine {
            kind: LineKind::Blank,
            content: String::new(),
        };
    }

    if let Some(caps) = HEADING_PATTERN.captures(line) {
        let level = caps[1].len() as u8;
        return ParsedLine {
            kind: LineKind::Heading(level),
            content: caps[2].to_string(),
        };
    }

    ParsedLine {
        kind: LineKind::Paragraph,
        content: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert!(classify_line("").is_blank());
        assert!(classify_line("   \t").is_blank());
        assert!(classify_line("\r").is_blank());
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6u8 {
            let line = format!("{} X", "#".repeat(level as usize));
            let parsed = classify_line(&line);
            assert_eq!(parsed.kind, LineKind::Heading(level));
            assert_eq!(parsed.content, "X");
        }
    }

    #[test]
    fn test_seven_hashes_is_paragraph() {
        let parsed = classify_line("#######X");
        assert_eq!(parsed.kind, LineKind::Paragraph);
        assert_eq!(parsed.content, "#######X");

        let parsed = classify_line("####### X");
        assert_eq!(parsed.kind, LineKind::Paragraph);
    }

    #[test]
    fn test_heading_requires_whitespace_and_text() {
        assert_eq!(classify_line("#Title").kind, LineKind::Paragraph);
        // Trailing whitespace is stripped before matching, leaving a bare "#"
        let parsed = classify_line("#   ");
        assert_eq!(parsed.kind, LineKind::Paragraph);
        assert_eq!(parsed.content, "#");
    }

    #[test]
    fn test_heading_content_skips_all_separating_whitespace() {
        let parsed = classify_line("##  \tSpaced out  ");
        assert_eq!(parsed.kind, LineKind::Heading(2));
        assert_eq!(parsed.content, "Spaced out");
    }

    #[test]
    fn test_paragraph_keeps_leading_whitespace() {
        let parsed = classify_line("  indented text  ");
        assert_eq!(parsed.kind, LineKind::Paragraph);
        assert_eq!(parsed.content, "  indented text");
    }

    #[test]
    fn test_indented_hash_is_paragraph() {
        assert_eq!(classify_line(" # not a heading").kind, LineKind::Paragraph);
    }

    #[test]
    fn test_classification_is_idempotent() {
        for line in ["# A", "", "plain *x*", "###### six", "#######"] {
            assert_eq!(classify_line(line), classify_line(line));
        }
    }

    #[test]
    fn test_information_separators_are_whitespace() {
        assert!(classify_line("\u{1c} ").is_blank());
        assert!(classify_line("\u{1d}\u{1e}\u{1f}").is_blank());

        let parsed = classify_line("#\u{1c}Title");
        assert_eq!(parsed.kind, LineKind::Heading(1));
        assert_eq!(parsed.content, "Title");

        let parsed = classify_line("text\u{1f}");
        assert_eq!(parsed.kind, LineKind::Paragraph);
        assert_eq!(parsed.content, "text");
    }
}
