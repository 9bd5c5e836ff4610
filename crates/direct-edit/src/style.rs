//! Presentation properties for the editable surface.
//!
//! A [`Style`] is the opaque property map a provider hands over with its
//! activation context. The surface forwards it to the content area as-is and
//! only reads the handful of properties it needs for measuring (font size,
//! line height, padding, alignment).
//!
//! [`InlineStyle`] is the rendered side: the ordered CSS declarations
//! currently set on the frame or the content element.

use std::collections::BTreeMap;
use std::fmt;

use direct_edit_core::CoreError;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default font size in pixels when the style sets none.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Default line height multiplier when the style sets none.
pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;

/// A single presentation value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A bare number, interpreted as pixels for lengths.
    Number(f32),
    /// Any other CSS value, e.g. `"12px"`, `"bold"`, `"#fff"`.
    Text(String),
}

impl StyleValue {
    /// Interpret the value as a pixel length.
    pub fn to_length(&self) -> Result<f32> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => {
                let trimmed = s.trim();
                let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
                digits
                    .parse::<f32>()
                    .map_err(|_| CoreError::invalid_length(s.clone()).into())
            }
        }
    }

    /// Render as a CSS value. Bare numbers render as pixels.
    pub fn to_css(&self) -> String {
        match self {
            Self::Number(n) => format!("{n}px"),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Horizontal text alignment inside the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
    Justify,
}

impl TextAlign {
    /// Parse a CSS `text-align` keyword.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "left" | "start" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            "justify" => Some(Self::Justify),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// Presentation properties keyed by camelCase property name.
///
/// # Example
///
/// ```
/// use direct_edit::Style;
///
/// let style = Style::new()
///     .with("fontSize", 14.0)
///     .with("paddingTop", "7px")
///     .with("textAlign", "left");
///
/// assert_eq!(style.font_size(), 14.0);
/// assert_eq!(style.padding_top(), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    properties: BTreeMap<String, StyleValue>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a property.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Get a property.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.properties.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Read a property as a pixel length, failing on malformed values.
    pub fn try_length(&self, name: &str) -> Result<Option<f32>> {
        self.get(name).map(StyleValue::to_length).transpose()
    }

    /// Read a property as a pixel length. Malformed values read as unset.
    pub fn length(&self, name: &str) -> Option<f32> {
        self.try_length(name).ok().flatten()
    }

    /// Font size in pixels.
    pub fn font_size(&self) -> f32 {
        self.length("fontSize").unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Line height as a multiplier of the font size.
    ///
    /// Pixel values (`"18px"`) are converted into a multiplier.
    pub fn line_height(&self) -> f32 {
        match self.get("lineHeight") {
            Some(StyleValue::Number(n)) => *n,
            Some(StyleValue::Text(s)) if s.trim().ends_with("px") => self
                .length("lineHeight")
                .map(|px| px / self.font_size())
                .unwrap_or(DEFAULT_LINE_HEIGHT),
            Some(StyleValue::Text(s)) => s.trim().parse().unwrap_or(DEFAULT_LINE_HEIGHT),
            None => DEFAULT_LINE_HEIGHT,
        }
    }

    pub fn padding_top(&self) -> f32 {
        self.padding_side("paddingTop")
    }

    pub fn padding_right(&self) -> f32 {
        self.padding_side("paddingRight")
    }

    pub fn padding_bottom(&self) -> f32 {
        self.padding_side("paddingBottom")
    }

    pub fn padding_left(&self) -> f32 {
        self.padding_side("paddingLeft")
    }

    fn padding_side(&self, name: &str) -> f32 {
        self.length(name)
            .or_else(|| self.length("padding"))
            .unwrap_or(0.0)
    }

    /// The text alignment, if the style sets a recognized one.
    pub fn text_align(&self) -> Option<TextAlign> {
        match self.get("textAlign") {
            Some(StyleValue::Text(s)) => TextAlign::parse(s),
            _ => None,
        }
    }
}

/// Convert a camelCase property name into its CSS kebab-case form.
pub fn css_property_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Ordered CSS declarations set inline on an element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration, replacing an earlier one with the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((name, value)),
        }
    }

    /// Get a declaration by CSS property name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}: {value};")?;
        }
        Ok(())
    }
}
