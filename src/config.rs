//! Style configuration for synthesized documents.
//!
//! A [`StyleConfig`] holds every knob that affects the generated DOCX: the
//! font family, one [`RoleStyle`] (size and color) per paragraph role, and the
//! subtitle/body policy flags. It is validated once, when loaded or when a
//! synthesizer is constructed, and is immutable afterwards.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Largest font size Word accepts, in half-points (1638pt).
pub const MAX_FONT_SIZE_HALF_POINTS: u32 = 3276;

/// A six-digit hexadecimal RGB color as written into `w:color`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Black, the reference color for every role.
    pub fn black() -> Self {
        Self("000000".to_string())
    }

    /// Parse a color such as `"1F3864"`.
    ///
    /// Exactly six ASCII hex digits are accepted; a leading `#` or any other
    /// length is rejected rather than coerced.
    pub fn parse(value: &str) -> Result<Self> {
        if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidConfig(format!(
                "color must be exactly 6 hex digits, got {:?}",
                value
            )));
        }
        Ok(Self(value.to_string()))
    }

    /// The color digits as written into the document.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl std::str::FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Font size and color applied to every run of one paragraph role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStyle {
    /// Font size in half-points (24 = 12pt)
    pub size: u32,

    /// Text color
    pub color: HexColor,
}

impl RoleStyle {
    /// Create a role style.
    pub fn new(size: u32, color: HexColor) -> Self {
        Self { size, color }
    }

    fn validate(&self, role: &str) -> Result<()> {
        if self.size == 0 || self.size > MAX_FONT_SIZE_HALF_POINTS {
            return Err(Error::InvalidConfig(format!(
                "{}.size must be between 1 and {} half-points, got {}",
                role, MAX_FONT_SIZE_HALF_POINTS, self.size
            )));
        }
        Ok(())
    }
}

/// Formatting policy for synthesized documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Font family used for every run (ascii and high-ANSI slots)
    pub font_family: String,

    /// Style for `#` headings
    pub title: RoleStyle,

    /// Style for `##` to `######` headings
    pub subtitle: RoleStyle,

    /// Style for body paragraphs
    pub body: RoleStyle,

    /// Force bold on subtitle runs
    pub subtitle_bold: bool,

    /// Force single underline on subtitle runs
    pub subtitle_underline: bool,

    /// Justify body paragraphs instead of aligning them left
    pub justify_body: bool,
}

impl StyleConfig {
    /// Create the reference configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration from a JSON string.
    ///
    /// Fields that are absent keep their reference values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StyleConfig = serde_json::from_str(json).map_err(|e| {
            // Color errors surface through serde as plain messages.
            Error::InvalidConfig(e.to_string())
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the configuration as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.font_family.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "font_family must not be empty".to_string(),
            ));
        }
        if self.font_family.chars().any(char::is_control) {
            return Err(Error::InvalidConfig(format!(
                "font_family contains control characters: {:?}",
                self.font_family
            )));
        }
        self.title.validate("title")?;
        self.subtitle.validate("subtitle")?;
        self.body.validate("body")?;
        Ok(())
    }

    /// Set the font family.
    pub fn with_font_family(mut self, font: impl Into<String>) -> Self {
        self.font_family = font.into();
        self
    }

    /// Set the title style.
    pub fn with_title(mut self, style: RoleStyle) -> Self {
        self.title = style;
        self
    }

    /// Set the subtitle style.
    pub fn with_subtitle(mut self, style: RoleStyle) -> Self {
        self.subtitle = style;
        self
    }

    /// Set the body style.
    pub fn with_body(mut self, style: RoleStyle) -> Self {
        self.body = style;
        self
    }

    /// Force (or stop forcing) bold and underline on subtitles.
    pub fn with_subtitle_emphasis(mut self, enabled: bool) -> Self {
        self.subtitle_bold = enabled;
        self.subtitle_underline = enabled;
        self
    }

    /// Enable or disable body justification.
    pub fn with_justify_body(mut self, justify: bool) -> Self {
        self.justify_body = justify;
        self
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "Century Schoolbook".to_string(),
            title: RoleStyle::new(28, HexColor::black()),
            subtitle: RoleStyle::new(24, HexColor::black()),
            body: RoleStyle::new(24, HexColor::black()),
            subtitle_bold: true,
            subtitle_underline: true,
            justify_body: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_config_is_valid() {
        let config = StyleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.font_family, "Century Schoolbook");
        assert_eq!(config.title.size, 28);
        assert_eq!(config.subtitle.size, 24);
        assert_eq!(config.body.size, 24);
        assert!(config.subtitle_bold && config.subtitle_underline);
        assert!(config.justify_body);
    }

    #[test]
    fn test_hex_color_parse() {
        assert_eq!(HexColor::parse("1f3864").unwrap().as_str(), "1f3864");
        assert!(HexColor::parse("#000000").is_err());
        assert!(HexColor::parse("00000").is_err());
        assert!(HexColor::parse("GGGGGG").is_err());
        assert!(HexColor::parse("").is_err());
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = StyleConfig::new().with_body(RoleStyle::new(0, HexColor::black()));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().contains("body.size"));
    }

    #[test]
    fn test_oversized_font_rejected() {
        let config = StyleConfig::new().with_title(RoleStyle::new(
            MAX_FONT_SIZE_HALF_POINTS + 1,
            HexColor::black(),
        ));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_font_rejected() {
        let config = StyleConfig::new().with_font_family("  ");
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_from_json_partial() {
        let config = StyleConfig::from_json_str(
            r#"{"font_family": "Arial", "justify_body": false, "title": {"size": 36, "color": "1F3864"}}"#,
        )
        .unwrap();
        assert_eq!(config.font_family, "Arial");
        assert!(!config.justify_body);
        assert_eq!(config.title.size, 36);
        assert_eq!(config.title.color.as_str(), "1F3864");
        // Untouched fields keep reference values
        assert_eq!(config.body.size, 24);
        assert!(config.subtitle_bold);
    }

    #[test]
    fn test_from_json_bad_color() {
        let result =
            StyleConfig::from_json_str(r#"{"body": {"size": 24, "color": "black"}}"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_from_json_bad_size() {
        let result =
            StyleConfig::from_json_str(r#"{"subtitle": {"size": 0, "color": "000000"}}"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_json_roundtrip_keeps_values() {
        let config = StyleConfig::new()
            .with_font_family("Georgia")
            .with_subtitle_emphasis(false);
        let json = config.to_json().unwrap();
        let back = StyleConfig::from_json_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
