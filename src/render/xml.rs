//! XML part templates for the DOCX package.
//!
//! Parts are produced by direct string templating. Every piece of user text
//! and the configured font name go through [`escape_xml`] first.

use crate::model::{DocumentModel, ParagraphSpec, StyledRun};
use std::fmt::Write as FmtWrite;

/// XML declaration that prefixes every part.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// WordprocessingML main namespace.
pub const WORDPROCESSINGML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Office document relationships namespace.
pub const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Package content types namespace.
pub const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Package relationships namespace.
pub const PACKAGE_RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";

/// Relationship type of the main document part.
pub const OFFICE_DOCUMENT_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// Content type of `.rels` parts.
pub const RELATIONSHIPS_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-package.relationships+xml";

/// Content type of the main document part.
pub const MAIN_DOCUMENT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

/// Escape text for use in XML content or a double-quoted attribute.
///
/// Characters that XML 1.0 cannot represent at all (C0 controls other than
/// tab, line feed and carriage return, plus U+FFFE/U+FFFF) are dropped.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}

/// Build `[Content_Types].xml`.
pub fn content_types_xml() -> String {
    format!(
        concat!(
            "{decl}\n",
            r#"<Types xmlns="{ns}">"#,
            r#"<Default Extension="rels" ContentType="{rels}"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/word/document.xml" ContentType="{main}"/>"#,
            "</Types>"
        ),
        decl = XML_DECLARATION,
        ns = CONTENT_TYPES_NS,
        rels = RELATIONSHIPS_CONTENT_TYPE,
        main = MAIN_DOCUMENT_CONTENT_TYPE,
    )
}

/// Build `_rels/.rels`, pointing `rId1` at the main document part.
pub fn package_rels_xml() -> String {
    format!(
        concat!(
            "{decl}\n",
            r#"<Relationships xmlns="{ns}">"#,
            r#"<Relationship Id="rId1" Type="{rel}" Target="word/document.xml"/>"#,
            "</Relationships>"
        ),
        decl = XML_DECLARATION,
        ns = PACKAGE_RELATIONSHIPS_NS,
        rel = OFFICE_DOCUMENT_REL_TYPE,
    )
}

/// Build `word/_rels/document.xml.rels`, an empty relationships container.
pub fn document_rels_xml() -> String {
    format!(
        r#"{}
<Relationships xmlns="{}"></Relationships>"#,
        XML_DECLARATION, PACKAGE_RELATIONSHIPS_NS
    )
}

/// Build `word/document.xml` for a model.
///
/// `font_family` is written into every run's `w:rFonts` (ascii and hAnsi).
pub fn document_xml(model: &DocumentModel, font_family: &str) -> String {
    let font = escape_xml(font_family);
    // Rough per-run overhead of the run properties block
    let mut xml = String::with_capacity(512 + model.run_count() * 256);

    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    let _ = write!(
        xml,
        r#"<w:document xmlns:w="{}" xmlns:r="{}"><w:body>"#,
        WORDPROCESSINGML_NS, RELATIONSHIPS_NS
    );

    for paragraph in model {
        write_paragraph(&mut xml, paragraph, &font);
    }

    xml.push_str("</w:body></w:document>");
    xml
}

fn write_paragraph(xml: &mut String, paragraph: &ParagraphSpec, font: &str) {
    let _ = write!(
        xml,
        r#"<w:p><w:pPr><w:jc w:val="{}"/></w:pPr>"#,
        paragraph.alignment.as_ooxml()
    );
    for run in &paragraph.runs {
        write_run(xml, run, font);
    }
    xml.push_str("</w:p>");
}

/// Write one `w:r`. Run property children follow the schema sequence
/// (rFonts, b, bCs, i, iCs, color, sz, szCs, u).
fn write_run(xml: &mut String, run: &StyledRun, font: &str) {
    xml.push_str("<w:r><w:rPr>");
    let _ = write!(xml, r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}"/>"#, font);

    if run.bold {
        xml.push_str("<w:b/><w:bCs/>");
    }
    if run.italic {
        xml.push_str("<w:i/><w:iCs/>");
    }

    let _ = write!(
        xml,
        r#"<w:color w:val="{color}"/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#,
        color = run.color.as_str(),
        size = run.font_size_half_points,
    );

    if run.underline {
        xml.push_str(r#"<w:u w:val="single"/>"#);
    }

    xml.push_str("</w:rPr>");
    let _ = write!(
        xml,
        r#"<w:t xml:space="preserve">{}</w:t></w:r>"#,
        escape_xml(&run.text)
    );
}
