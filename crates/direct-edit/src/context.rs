//! Activation contexts handed from providers to the editing session.

use direct_edit_core::{Point, Rect, SizeConstraints};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::Style;

/// Where the editable surface should appear.
///
/// `width` and `height` may be absent; the surface then sizes that dimension
/// to its content, within the optional constraints.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
    #[serde(flatten)]
    pub constraints: SizeConstraints,
}

impl Bounds {
    /// Bounds with a fixed position and size and no constraints.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: Some(width),
            height: Some(height),
            constraints: SizeConstraints::NONE,
        }
    }

    /// Set the size constraints.
    pub fn with_constraints(mut self, constraints: SizeConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Bounds::new(rect.x(), rect.y(), rect.width(), rect.height())
    }
}

/// Flags controlling how the surface behaves for one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivationOptions {
    /// Vertically center the content inside the frame.
    pub center_vertically: bool,
    /// Grow or shrink the frame height to fit the content after each edit.
    pub auto_resize: bool,
    /// Attach a drag handle for manual resizing.
    pub resizable: bool,
}

impl ActivationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center_vertically(mut self, value: bool) -> Self {
        self.center_vertically = value;
        self
    }

    pub fn with_auto_resize(mut self, value: bool) -> Self {
        self.auto_resize = value;
        self
    }

    pub fn with_resizable(mut self, value: bool) -> Self {
        self.resizable = value;
        self
    }
}

/// Everything a provider supplies for one activation.
///
/// # Example
///
/// ```
/// use direct_edit::{ActivationContext, Bounds};
///
/// let context = ActivationContext::new(Bounds::new(20.0, 10.0, 60.0, 50.0), "FOO");
/// assert_eq!(context.text, "FOO");
///
/// let parsed = ActivationContext::from_json(
///     r#"{ "bounds": { "x": 20, "y": 10, "width": 60, "height": 50 }, "text": "FOO" }"#,
/// ).unwrap();
/// assert_eq!(parsed, context);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationContext {
    pub bounds: Bounds,
    pub text: String,
    pub style: Style,
    pub options: ActivationOptions,
}

impl ActivationContext {
    /// Create a context with default style and options.
    pub fn new(bounds: impl Into<Bounds>, text: impl Into<String>) -> Self {
        Self {
            bounds: bounds.into(),
            text: text.into(),
            style: Style::default(),
            options: ActivationOptions::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_options(mut self, options: ActivationOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse a context from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
