//! Document model types for synthesized content.
//!
//! This module defines the intermediate representation that bridges Markdown
//! parsing and OOXML serialization. By the time a [`ParagraphSpec`] exists all
//! formatting has been resolved into its runs; the serializer only copies it
//! out.

mod document;
mod paragraph;

pub use document::DocumentModel;
pub use paragraph::{Alignment, ParagraphRole, ParagraphSpec, StyledRun};
