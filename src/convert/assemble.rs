//! Document assembly: classified lines to paragraphs.

use crate::config::{RoleStyle, StyleConfig};
use crate::model::{Alignment, DocumentModel, ParagraphRole, ParagraphSpec, StyledRun};
use crate::parser::{parse_inline, InlineSpan, LineKind, ParsedLine};

/// Builds a [`DocumentModel`] one classified line at a time.
///
/// Formatting is resolved here: every run leaves the builder with its final
/// size, color and emphasis.
pub struct DocumentBuilder<'a> {
    config: &'a StyleConfig,
    model: DocumentModel,
}

impl<'a> DocumentBuilder<'a> {
    /// Create a builder for the given configuration.
    pub fn new(config: &'a StyleConfig) -> Self {
        Self {
            config,
            model: DocumentModel::new(),
        }
    }

    /// Create a builder with room for `lines` paragraphs.
    pub fn with_capacity(config: &'a StyleConfig, lines: usize) -> Self {
        Self {
            config,
            model: DocumentModel::with_capacity(lines),
        }
    }

    /// Append the paragraph for one classified line.
    pub fn push_line(&mut self, line: &ParsedLine) {
        let paragraph = match line.kind {
            LineKind::Blank => ParagraphSpec::blank(),
            LineKind::Heading(1) => self.title(&line.content),
            LineKind::Heading(_) => self.subtitle(&line.content),
            LineKind::Paragraph => self.body(&line.content),
        };
        log::trace!(
            "{:?} -> {:?} with {} run(s)",
            line.kind,
            paragraph.role,
            paragraph.runs.len()
        );
        self.model.push(paragraph);
    }

    /// Append paragraphs for several lines.
    pub fn extend<'l, I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = &'l ParsedLine>,
    {
        for line in lines {
            self.push_line(line);
        }
    }

    /// Number of paragraphs assembled so far.
    pub fn len(&self) -> usize {
        self.model.paragraph_count()
    }

    /// Check if nothing has been assembled yet.
    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    /// Finish and hand over the model.
    pub fn finish(self) -> DocumentModel {
        self.model
    }

    fn title(&self, content: &str) -> ParagraphSpec {
        let runs = wrap_spans(parse_inline(content), &self.config.title, |span| {
            (span.bold, span.italic, false)
        });
        ParagraphSpec::new(runs, Alignment::Left, ParagraphRole::Title)
    }

    fn subtitle(&self, content: &str) -> ParagraphSpec {
        let force_bold = self.config.subtitle_bold;
        let underline = self.config.subtitle_underline;
        let runs = wrap_spans(parse_inline(content), &self.config.subtitle, |span| {
            (force_bold || span.bold, span.italic, underline)
        });
        ParagraphSpec::new(runs, Alignment::Left, ParagraphRole::Subtitle)
    }

    fn body(&self, content: &str) -> ParagraphSpec {
        let runs = wrap_spans(parse_inline(content), &self.config.body, |span| {
            (span.bold, span.italic, false)
        });
        let alignment = if self.config.justify_body {
            Alignment::Justify
        } else {
            Alignment::Left
        };
        ParagraphSpec::new(runs, alignment, ParagraphRole::Body)
    }
}

/// Turn spans into runs in order. `emphasis` maps a span to
/// `(bold, italic, underline)`.
fn wrap_spans<F>(spans: Vec<InlineSpan>, style: &RoleStyle, emphasis: F) -> Vec<StyledRun>
where
    F: Fn(&InlineSpan) -> (bool, bool, bool),
{
    spans
        .into_iter()
        .map(|span| {
            let (bold, italic, underline) = emphasis(&span);
            StyledRun::new(span.text, style.size, style.color.clone())
                .with_bold(bold)
                .with_italic(italic)
                .with_underline(underline)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HexColor;
    use crate::parser::{classify_line, parse_text};

    fn build(text: &str, config: &StyleConfig) -> DocumentModel {
        let mut builder = DocumentBuilder::new(config);
        builder.extend(&parse_text(text));
        builder.finish()
    }

    fn flags(run: &StyledRun) -> (&str, bool, bool, bool) {
        (run.text.as_str(), run.bold, run.italic, run.underline)
    }

    #[test]
    fn test_blank_line_has_no_runs() {
        let config = StyleConfig::default();
        let mut builder = DocumentBuilder::new(&config);
        builder.push_line(&classify_line("   "));
        let doc = builder.finish();

        let p = &doc.paragraphs()[0];
        assert!(p.runs.is_empty());
        assert_eq!(p.role, ParagraphRole::Blank);
        assert_eq!(p.alignment, Alignment::Left);
    }

    #[test]
    fn test_title_uses_title_style() {
        let config = StyleConfig::default().with_title(RoleStyle::new(
            40,
            HexColor::parse("C00000").unwrap(),
        ));
        let doc = build("# A *b*", &config);
        let p = &doc.paragraphs()[0];

        assert_eq!(p.role, ParagraphRole::Title);
        assert_eq!(p.alignment, Alignment::Left);
        assert_eq!(flags(&p.runs[0]), ("A ", false, false, false));
        assert_eq!(flags(&p.runs[1]), ("b", false, true, false));
        assert!(p
            .runs
            .iter()
            .all(|r| r.font_size_half_points == 40 && r.color.as_str() == "C00000"));
    }

    #[test]
    fn test_subtitle_forces_bold_and_underline() {
        let config = StyleConfig::default();
        let doc = build("## *not bold*", &config);
        let p = &doc.paragraphs()[0];

        assert_eq!(p.role, ParagraphRole::Subtitle);
        assert_eq!(flags(&p.runs[0]), ("not bold", true, true, true));
        assert_eq!(p.runs[0].font_size_half_points, config.subtitle.size);
    }

    #[test]
    fn test_subtitle_policy_disabled_passes_through() {
        let config = StyleConfig::default().with_subtitle_emphasis(false);
        let doc = build("### plain **strong**", &config);
        let p = &doc.paragraphs()[0];

        assert_eq!(flags(&p.runs[0]), ("plain ", false, false, false));
        assert_eq!(flags(&p.runs[1]), ("strong", true, false, false));
    }

    #[test]
    fn test_all_subtitle_levels() {
        let config = StyleConfig::default();
        for level in 2..=6 {
            let doc = build(&format!("{} X", "#".repeat(level)), &config);
            assert_eq!(doc.paragraphs()[0].role, ParagraphRole::Subtitle);
        }
    }

    #[test]
    fn test_body_alignment_follows_flag() {
        let justified = build("text", &StyleConfig::default());
        assert_eq!(justified.paragraphs()[0].alignment, Alignment::Justify);

        let left = build("text", &StyleConfig::default().with_justify_body(false));
        assert_eq!(left.paragraphs()[0].alignment, Alignment::Left);
    }

    #[test]
    fn test_body_run_order_and_flags() {
        let config = StyleConfig::default();
        let doc = build("Body **text** here.", &config);
        let runs = &doc.paragraphs()[0].runs;

        assert_eq!(runs.len(), 3);
        assert_eq!(flags(&runs[0]), ("Body ", false, false, false));
        assert_eq!(flags(&runs[1]), ("text", true, false, false));
        assert_eq!(flags(&runs[2]), (" here.", false, false, false));
        assert!(runs.iter().all(|r| r.font_size_half_points == 24));
    }

    #[test]
    fn test_paragraph_of_only_asterisks_has_no_runs() {
        let doc = build("*", &StyleConfig::default());
        let p = &doc.paragraphs()[0];
        assert_eq!(p.role, ParagraphRole::Body);
        assert!(p.runs.is_empty());
    }

    #[test]
    fn test_builder_len() {
        let config = StyleConfig::default();
        let mut builder = DocumentBuilder::with_capacity(&config, 2);
        assert!(builder.is_empty());
        builder.push_line(&classify_line("a"));
        builder.push_line(&classify_line(""));
        assert_eq!(builder.len(), 2);
    }
}
