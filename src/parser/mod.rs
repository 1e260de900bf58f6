//! Markdown line classifier and inline formatter.

mod inline;
mod line;

pub use inline::{parse_inline, InlineSpan};
pub use line::{classify_line, LineKind, ParsedLine};

/// Classify every line of `text`.
///
/// Lines are split on `\n` only, so `""` yields one blank line and a trailing
/// newline yields a trailing blank line. A `\r` left over from CRLF input is
/// removed as trailing whitespace.
pub fn parse_text(text: &str) -> Vec<ParsedLine> {
    text.split('\n').map(classify_line).collect()
}
