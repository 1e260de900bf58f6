//! Inline emphasis parsing.
//!
//! Emphasis is resolved with a single alternation tried left to right at every
//! position: `***x***`, then `**x**`, then `*x*`, then a run of non-asterisk
//! characters, then a lone `*`. The first alternative that matches wins and the
//! scan resumes after it. This is simpler than CommonMark: for
//! overlapping markers such as `**a*b**c*` the alternation order alone decides
//! the outcome.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMPHASIS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*\*(.+?)\*\*\*|\*\*(.+?)\*\*|\*(.+?)\*|[^*]+|\*").unwrap()
});

/// A span of text with the emphasis detected around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineSpan {
    /// Text with the markers removed
    pub text: String,

    /// Enclosed in `**` or `***`
    pub bold: bool,

    /// Enclosed in `*` or `***`
    pub italic: bool,
}

impl InlineSpan {
    /// Create a span.
    pub fn new(text: impl Into<String>, bold: bool, italic: bool) -> Self {
        Self {
            text: text.into(),
            bold,
            italic,
        }
    }

    /// Create an unemphasized span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false, false)
    }
}

/// Split `content` into emphasis spans.
///
/// Markers are consumed, never emitted. A `*` that cannot open a span is
/// dropped, so `"*"` yields no spans at all.
pub fn parse_inline(content: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();

    for caps in EMPHASIS_PATTERN.captures_iter(content) {
        if let Some(inner) = caps.get(1) {
            spans.push(InlineSpan::new(inner.as_str(), true, true));
        } else if let Some(inner) = caps.get(2) {
            spans.push(InlineSpan::new(inner.as_str(), true, false));
        } else if let Some(inner) = caps.get(3) {
            spans.push(InlineSpan::new(inner.as_str(), false, true));
        } else {
            let text = &caps[0];
            if text != "*" {
                spans.push(InlineSpan::plain(text));
            }
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples(content: &str) -> Vec<(String, bool, bool)> {
        parse_inline(content)
            .into_iter()
            .map(|s| (s.text, s.bold, s.italic))
            .collect()
    }

    fn t(text: &str, bold: bool, italic: bool) -> (String, bool, bool) {
        (text.to_string(), bold, italic)
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(triples("no emphasis"), vec![t("no emphasis", false, false)]);
        assert_eq!(triples("plain"), vec![t("plain", false, false)]);
    }

    #[test]
    fn test_single_markers() {
        assert_eq!(triples("***a***"), vec![t("a", true, true)]);
        assert_eq!(triples("**a**"), vec![t("a", true, false)]);
        assert_eq!(triples("*a*"), vec![t("a", false, true)]);
        assert_eq!(triples("***both***"), vec![t("both", true, true)]);
    }

    #[test]
    fn test_mixed_sentence() {
        assert_eq!(
            triples("**bold** and *italic*"),
            vec![
                t("bold", true, false),
                t(" and ", false, false),
                t("italic", false, true),
            ]
        );
    }

    #[test]
    fn test_lone_asterisk_dropped() {
        assert!(parse_inline("*").is_empty());
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn test_unclosed_markers_fall_through() {
        assert_eq!(triples("**unclosed"), vec![t("unclosed", false, false)]);
        assert_eq!(
            triples("a ** b"),
            vec![t("a ", false, false), t(" b", false, false)]
        );
    }

    #[test]
    fn test_overlapping_markers_golden() {
        assert_eq!(
            triples("**a*b**c*"),
            vec![t("a*b", true, false), t("c", false, false)]
        );
        assert_eq!(
            triples("*a**b*"),
            vec![t("a", false, true), t("b", false, true)]
        );
        assert_eq!(triples("***a**"), vec![t("*a", true, false)]);
        assert_eq!(triples("**a***"), vec![t("a", true, false)]);
    }

    #[test]
    fn test_asterisk_runs_golden() {
        assert_eq!(triples("***"), vec![t("*", false, true)]);
        assert_eq!(triples("****"), vec![t("*", false, true)]);
        assert_eq!(triples("*****"), vec![t("*", true, false)]);
    }

    #[test]
    fn test_arithmetic_becomes_italic() {
        assert_eq!(
            triples("2 * 3 * 4"),
            vec![
                t("2 ", false, false),
                t(" 3 ", false, true),
                t(" 4", false, false),
            ]
        );
    }

    #[test]
    fn test_order_preserved() {
        assert_eq!(
            triples("x *y* **z** ***w***"),
            vec![
                t("x ", false, false),
                t("y", false, true),
                t(" ", false, false),
                t("z", true, false),
                t(" ", false, false),
                t("w", true, true),
            ]
        );
    }
}
