//! The editable overlay surface.
//!
//! [`EditableSurface`] renders one editable overlay at a time on top of a
//! diagram element. It is made of two layers: an outer frame positioned
//! absolutely inside the host [`Container`], and an inner content area that
//! fills the frame and holds the text.
//!
//! The surface knows nothing about elements or providers. It handles
//! geometry, styling, native editing, paste sanitization, autosizing and
//! manual drag-resizing, and reports every size change through
//! [`EditableSurface::resized`].
//!
//! # Lifecycle
//!
//! ```text
//! create() ──> post_attach() ──> (input, paste, drag, ...) ──> destroy()
//!    ^                                                             │
//!    └─────────────────────────── reused ──────────────────────────┘
//! ```
//!
//! `create` attaches the frame and binds listeners, `post_attach` is the
//! deferred focus step the host runs once layout has settled, and `destroy`
//! returns the surface to its pristine detached state.

use std::sync::Arc;

use direct_edit_core::logging::{span_names, targets};
use direct_edit_core::{Color, PerfSpan, Point, Rect, Signal, SizeConstraints};

use crate::container::{Container, NodeId};
use crate::content::ContentModel;
use crate::context::{ActivationOptions, Bounds};
use crate::events::{
    Key, KeyPressEvent, MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent,
    PasteEvent,
};
use crate::metrics::{self, FixedMetrics, TextMeasure};
use crate::style::{css_property_name, InlineStyle, Style, TextAlign};

/// Configuration for the editable surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    /// Class name of the outer frame.
    pub parent_class: String,
    /// Class name of the content area.
    pub content_class: String,
    /// Class name of the resize handle.
    pub resize_handle_class: String,
    /// Edge length of the square resize handle.
    pub resize_handle_size: f32,
    /// Frame background applied while the surface is resizable.
    pub resizable_background: Color,
    /// Text alignment used when the caller style sets none.
    pub default_text_align: TextAlign,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            parent_class: "djs-direct-editing-parent".to_string(),
            content_class: "djs-direct-editing-content".to_string(),
            resize_handle_class: "djs-direct-editing-resize-handle".to_string(),
            resize_handle_size: 10.0,
            resizable_background: Color::WHITE,
            default_text_align: TextAlign::Center,
        }
    }
}

impl SurfaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent_class(mut self, class: impl Into<String>) -> Self {
        self.parent_class = class.into();
        self
    }

    pub fn with_content_class(mut self, class: impl Into<String>) -> Self {
        self.content_class = class.into();
        self
    }

    pub fn with_resize_handle_class(mut self, class: impl Into<String>) -> Self {
        self.resize_handle_class = class.into();
        self
    }

    pub fn with_resize_handle_size(mut self, size: f32) -> Self {
        self.resize_handle_size = size;
        self
    }

    pub fn with_resizable_background(mut self, color: Color) -> Self {
        self.resizable_background = color;
        self
    }

    pub fn with_default_text_align(mut self, align: TextAlign) -> Self {
        self.default_text_align = align;
        self
    }
}

/// A resize notification: the new frame size and the change that led to it.
///
/// For autosize, `dx` is always `0` and `dy` is the height change. For a
/// manual drag, `dx`/`dy` are the pointer offset accumulated since the drag
/// started.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeDelta {
    pub width: f32,
    pub height: f32,
    pub dx: f32,
    pub dy: f32,
}

/// Overflow behavior of the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Hidden,
    Auto,
}

impl Overflow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Frame {
    node: Option<NodeId>,
    origin: Point,
    width: Option<f32>,
    height: Option<f32>,
    constraints: SizeConstraints,
    background: Option<Color>,
}

/// Listeners bound by `create`.
#[derive(Debug, Clone, Copy, Default)]
struct Bindings {
    key_down: bool,
    mouse_down: bool,
    paste: bool,
    input: bool,
}

/// Global pointer tracking for a running handle drag.
///
/// Move and release events are honored wherever the pointer is while a
/// capture exists; dropping the capture unbinds them.
#[derive(Debug, Clone, Copy)]
struct PointerCapture {
    start: Point,
    start_width: f32,
    start_height: f32,
}

/// The editable overlay.
pub struct EditableSurface {
    container: Container,
    config: SurfaceConfig,
    measure: Arc<dyn TextMeasure>,
    frame: Frame,
    content: ContentModel,
    style: Style,
    options: ActivationOptions,
    overflow: Option<Overflow>,
    bindings: Bindings,
    has_handle: bool,
    capture: Option<PointerCapture>,
    focused: bool,
    focus_pending: bool,

    /// Emitted on every frame size change (autosize or drag).
    pub resized: Signal<ResizeDelta>,
}

impl EditableSurface {
    /// Create a detached surface for the given container.
    pub fn new(container: Container) -> Self {
        Self::with_config(container, SurfaceConfig::default())
    }

    /// Create a detached surface with custom configuration.
    pub fn with_config(container: Container, config: SurfaceConfig) -> Self {
        Self {
            container,
            config,
            measure: Arc::new(FixedMetrics::default()),
            frame: Frame::default(),
            content: ContentModel::new(),
            style: Style::default(),
            options: ActivationOptions::default(),
            overflow: None,
            bindings: Bindings::default(),
            has_handle: false,
            capture: None,
            focused: false,
            focus_pending: false,
            resized: Signal::new(),
        }
    }

    /// Replace the text measurement used for natural content sizes.
    pub fn set_text_measure(&mut self, measure: Arc<dyn TextMeasure>) {
        self.measure = measure;
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Show the surface over `bounds` with the given text.
    ///
    /// A surface that is still showing is destroyed first. Returns the id of
    /// the attached frame.
    pub fn create(
        &mut self,
        bounds: &Bounds,
        style: &Style,
        text: &str,
        options: ActivationOptions,
    ) -> NodeId {
        if self.is_attached() {
            self.destroy();
        }

        let node = self.container.attach(self.config.parent_class.clone());
        self.frame = Frame {
            node: Some(node),
            origin: bounds.origin(),
            width: bounds.width,
            height: bounds.height,
            constraints: bounds.constraints.or(style_constraints(style)),
            background: options
                .resizable
                .then_some(self.config.resizable_background),
        };

        self.style = style.clone();
        self.options = options;
        self.content.set_text(text);

        self.bindings = Bindings {
            key_down: true,
            mouse_down: true,
            paste: true,
            input: options.auto_resize,
        };
        self.overflow = options.auto_resize.then_some(Overflow::Hidden);
        self.has_handle = options.resizable;
        self.focused = false;
        self.focus_pending = true;

        tracing::debug!(
            target: targets::SURFACE,
            x = bounds.x,
            y = bounds.y,
            width = ?bounds.width,
            height = ?bounds.height,
            auto_resize = options.auto_resize,
            resizable = options.resizable,
            "surface created"
        );

        node
    }

    /// Deferred focus step, run by the host once the frame is laid out.
    ///
    /// Focuses the content area and places the caret after the existing text
    /// (select to end, then collapse). Returns `false` if there was nothing
    /// pending.
    pub fn post_attach(&mut self) -> bool {
        if !self.focus_pending {
            return false;
        }
        self.focus_pending = false;
        self.focused = true;
        self.content.select_all();
        self.content.collapse_to_end();
        true
    }

    /// Tear the surface down to its pristine detached state.
    ///
    /// Safe to call on an already clean surface.
    pub fn destroy(&mut self) {
        self.content.clear();
        self.style = Style::default();
        self.options = ActivationOptions::default();
        self.overflow = None;
        self.bindings = Bindings::default();
        self.has_handle = false;
        self.capture = None;
        self.focused = false;
        self.focus_pending = false;

        if let Some(node) = self.frame.node.take() {
            self.container.detach(node);
            tracing::debug!(target: targets::SURFACE, "surface destroyed");
        }
        self.frame = Frame::default();
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn is_attached(&self) -> bool {
        self.frame
            .node
            .is_some_and(|node| self.container.contains(node))
    }

    /// The id of the attached frame.
    pub fn frame_node(&self) -> Option<NodeId> {
        self.frame.node
    }

    /// The sanitized plain-text value.
    pub fn value(&self) -> String {
        self.content.value()
    }

    /// The rendered inner markup of the content area.
    pub fn markup(&self) -> String {
        self.content.markup()
    }

    /// Caret position as a char index into the content.
    pub fn caret(&self) -> usize {
        self.content.caret()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn options(&self) -> ActivationOptions {
        self.options
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn overflow(&self) -> Option<Overflow> {
        self.overflow
    }

    pub fn has_resize_handle(&self) -> bool {
        self.has_handle
    }

    /// Whether a handle drag is tracking global pointer events.
    pub fn is_dragging(&self) -> bool {
        self.capture.is_some()
    }

    /// The frame's current rendered geometry.
    ///
    /// Absent dimensions resolve to the natural content size; both are
    /// clamped by the size constraints.
    pub fn bounds(&self) -> Rect {
        if self.frame.node.is_none() {
            return Rect::ZERO;
        }
        let blocks = self.content.blocks();
        let constraints = self.frame.constraints;
        let width = constraints.clamp_width(
            self.frame
                .width
                .unwrap_or_else(|| metrics::content_width(&*self.measure, &blocks, &self.style)),
        );
        let height = constraints.clamp_height(self.frame.height.unwrap_or_else(|| {
            metrics::content_height(&*self.measure, &blocks, Some(width), &self.style)
        }));
        Rect::from_origin_size(self.frame.origin, (width, height).into())
    }

    /// Bounds of the resize handle, anchored at the frame's bottom-right.
    pub fn resize_handle_bounds(&self) -> Option<Rect> {
        if !self.has_handle {
            return None;
        }
        let frame = self.bounds();
        let size = self.config.resize_handle_size;
        Some(Rect::new(frame.right() - size, frame.bottom() - size, size, size))
    }

    /// The natural height of the content at the current frame width.
    pub fn content_scroll_height(&self) -> f32 {
        let width = self.bounds().width();
        metrics::content_height(
            &*self.measure,
            &self.content.blocks(),
            Some(width),
            &self.style,
        )
    }

    /// Inline style of the outer frame.
    pub fn frame_style(&self) -> InlineStyle {
        let mut inline = InlineStyle::new();
        if self.frame.node.is_none() {
            return inline;
        }
        let frame = &self.frame;
        inline.set("position", "absolute");
        inline.set("left", px(frame.origin.x));
        inline.set("top", px(frame.origin.y));
        if let Some(width) = frame.width {
            inline.set("width", px(width));
        }
        if let Some(height) = frame.height {
            inline.set("height", px(height));
        }
        let c = frame.constraints;
        for (name, value) in [
            ("min-width", c.min_width),
            ("max-width", c.max_width),
            ("min-height", c.min_height),
            ("max-height", c.max_height),
        ] {
            if let Some(value) = value {
                inline.set(name, px(value));
            }
        }
        if let Some(background) = frame.background {
            inline.set("background-color", background.to_css());
        }
        inline
    }

    /// Inline style of the content area.
    pub fn content_style(&self) -> InlineStyle {
        let mut inline = InlineStyle::new();
        if self.frame.node.is_none() {
            return inline;
        }
        inline.set("width", "100%");
        inline.set("outline", "none");
        inline.set("word-wrap", "break-word");
        for (name, value) in self.style.iter() {
            inline.set(css_property_name(name), value.to_css());
        }
        if self.style.text_align().is_none() {
            inline.set("text-align", self.config.default_text_align.as_str());
        }
        if self.options.center_vertically {
            inline.set("position", "relative");
            inline.set("top", "50%");
            inline.set("transform", "translateY(-50%)");
        }
        if let Some(overflow) = self.overflow {
            inline.set("overflow", overflow.as_str());
        }
        inline
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Whether key-down events are currently bound.
    pub fn accepts_keys(&self) -> bool {
        self.bindings.key_down
    }

    /// Native handling of a key the controller did not claim.
    ///
    /// Returns `true` if the key edited the content or moved the caret.
    pub fn key_default(&mut self, event: &mut KeyPressEvent) -> bool {
        if !self.bindings.key_down {
            return false;
        }
        tracing::trace!(target: targets::SURFACE, key = ?event.key, "key default");

        let edited = match event.key {
            Key::Enter => {
                self.content.insert_text("\n");
                true
            }
            Key::Backspace => {
                self.content.delete_backward();
                true
            }
            Key::Delete => {
                self.content.delete_forward();
                true
            }
            Key::ArrowLeft => {
                self.content.move_left();
                return true;
            }
            Key::ArrowRight => {
                self.content.move_right();
                return true;
            }
            Key::Home => {
                self.content.move_home();
                return true;
            }
            Key::End => {
                self.content.move_end();
                return true;
            }
            _ if !event.text.is_empty()
                && !event.modifiers.control
                && !event.modifiers.meta =>
            {
                self.content.insert_text(&event.text);
                true
            }
            _ => false,
        };

        if edited {
            self.on_input();
        }
        edited
    }

    /// Typed text arriving from the host's input method.
    pub fn input_text(&mut self, text: &str) {
        if !self.bindings.key_down {
            return;
        }
        self.content.insert_text(text);
        self.on_input();
    }

    /// Insert plain text at the caret. Line breaks are normalized.
    pub fn insert_text(&mut self, text: &str) {
        self.content.insert_text(text);
    }

    /// Input-change listener: re-measures after each edit.
    ///
    /// Returns the resize that resulted, if any.
    pub fn on_input(&mut self) -> Option<ResizeDelta> {
        if !self.bindings.input {
            return None;
        }
        self.autosize()
    }

    /// Swallow a mouse-down on the content area so it never reaches the
    /// host's canvas handling.
    pub fn content_mouse_down(&mut self, event: &mut MousePressEvent) -> bool {
        if !self.bindings.mouse_down {
            return false;
        }
        event.base.accept();
        true
    }

    /// Paste as plain text only.
    ///
    /// The rich paste is suppressed and only the clipboard's plain-text
    /// representation is inserted.
    pub fn paste(&mut self, event: &mut PasteEvent) -> bool {
        if !self.bindings.paste {
            return false;
        }
        event.base.prevent_default();
        event.base.accept();

        let Some(text) = event.data.text.as_deref() else {
            tracing::trace!(target: targets::SURFACE, "paste without plain text ignored");
            return true;
        };
        tracing::trace!(target: targets::SURFACE, len = text.len(), "paste");
        self.insert_text(text);
        self.on_input();
        true
    }

    /// Fit the frame height to the content.
    ///
    /// The frame is resized when the content is taller than the frame, or
    /// more than one line shorter. The new height is clamped by the size
    /// constraints; an actual change is emitted on [`resized`](Self::resized).
    pub fn autosize(&mut self) -> Option<ResizeDelta> {
        if !self.options.auto_resize || self.frame.node.is_none() {
            return None;
        }
        let _span = PerfSpan::new(span_names::AUTOSIZE);

        let current = self.bounds();
        let natural = self.content_scroll_height();
        let line_height = self.measure.line_height(&self.style);
        let constraints = self.frame.constraints;

        self.overflow = Some(if constraints.exceeds_max_height(natural) {
            Overflow::Auto
        } else {
            Overflow::Hidden
        });

        if natural <= current.height() && natural >= current.height() - line_height {
            return None;
        }

        let height = constraints.clamp_height(natural);
        if (height - current.height()).abs() <= f32::EPSILON {
            return None;
        }

        self.frame.height = Some(height);
        let delta = ResizeDelta {
            width: current.width(),
            height,
            dx: 0.0,
            dy: height - current.height(),
        };
        tracing::trace!(target: targets::SURFACE, height, dy = delta.dy, "autosized");
        self.resized.emit(delta);
        Some(delta)
    }

    // =========================================================================
    // Drag resize
    // =========================================================================

    /// Start a resize drag from the handle.
    pub fn handle_mouse_down(&mut self, event: &mut MousePressEvent) -> bool {
        if !self.has_handle || event.button != MouseButton::Left {
            return false;
        }
        event.base.accept();
        event.base.prevent_default();

        let frame = self.bounds();
        self.capture = Some(PointerCapture {
            start: event.global_pos,
            start_width: frame.width(),
            start_height: frame.height(),
        });
        self.overflow = Some(Overflow::Auto);
        tracing::trace!(target: targets::SURFACE, "resize drag started");
        true
    }

    /// Global pointer move while a drag is running.
    pub fn pointer_move(&mut self, event: &mut MouseMoveEvent) -> Option<ResizeDelta> {
        let capture = self.capture?;
        event.base.accept();

        let offset = event.global_pos - capture.start;
        let constraints = self.frame.constraints;
        let width = constraints.clamp_width(capture.start_width + offset.x);
        let height = constraints.clamp_height(capture.start_height + offset.y);
        self.frame.width = Some(width);
        self.frame.height = Some(height);

        let delta = ResizeDelta {
            width,
            height,
            dx: offset.x,
            dy: offset.y,
        };
        self.resized.emit(delta);
        Some(delta)
    }

    /// Global pointer release: ends a running drag.
    pub fn pointer_up(&mut self, event: &mut MouseReleaseEvent) -> bool {
        if self.capture.take().is_none() {
            return false;
        }
        event.base.accept();
        tracing::trace!(target: targets::SURFACE, "resize drag finished");
        true
    }
}

fn px(value: f32) -> String {
    format!("{value}px")
}

/// Size constraints the caller style declares.
fn style_constraints(style: &Style) -> SizeConstraints {
    SizeConstraints {
        min_width: style.length("minWidth"),
        max_width: style.length("maxWidth"),
        min_height: style.length("minHeight"),
        max_height: style.length("maxHeight"),
    }
}

impl std::fmt::Debug for EditableSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditableSurface")
            .field("frame", &self.frame)
            .field("options", &self.options)
            .field("text", &self.content.text())
            .field("dragging", &self.capture.is_some())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(EditableSurface: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ClipboardData, KeyboardModifiers};
    use parking_lot::Mutex;

    fn surface() -> (EditableSurface, Container) {
        let container = Container::new();
        (EditableSurface::new(container.clone()), container)
    }

    fn record(surface: &EditableSurface) -> Arc<Mutex<Vec<ResizeDelta>>> {
        let deltas = Arc::new(Mutex::new(Vec::new()));
        let sink = deltas.clone();
        surface.resized.connect(move |delta| sink.lock().push(*delta));
        deltas
    }

    fn bounds() -> Bounds {
        Bounds::new(20.0, 10.0, 100.0, 30.0)
    }

    #[test]
    fn test_create_positions_frame() {
        let (mut surface, container) = surface();
        let node = surface.create(&bounds(), &Style::new(), "hello", ActivationOptions::new());

        assert!(container.contains(node));
        assert_eq!(container.class_of(node).as_deref(), Some("djs-direct-editing-parent"));
        assert_eq!(surface.bounds(), Rect::new(20.0, 10.0, 100.0, 30.0));

        let frame = surface.frame_style();
        assert_eq!(frame.get("position"), Some("absolute"));
        assert_eq!(frame.get("left"), Some("20px"));
        assert_eq!(frame.get("top"), Some("10px"));
        assert_eq!(frame.get("width"), Some("100px"));
        assert_eq!(frame.get("height"), Some("30px"));
        assert!(!frame.contains("background-color"));

        let content = surface.content_style();
        assert_eq!(content.get("width"), Some("100%"));
        assert_eq!(content.get("text-align"), Some("center"));
        assert_eq!(surface.value(), "hello");
        assert_eq!(surface.overflow(), None);
    }

    #[test]
    fn test_caller_style_is_forwarded() {
        let (mut surface, _) = surface();
        let style = Style::new()
            .with("fontSize", 14.0)
            .with("fontFamily", "Arial")
            .with("textAlign", "left");
        surface.create(&bounds(), &style, "", ActivationOptions::new());

        let content = surface.content_style();
        assert_eq!(content.get("font-size"), Some("14px"));
        assert_eq!(content.get("font-family"), Some("Arial"));
        assert_eq!(content.get("text-align"), Some("left"));
    }

    #[test]
    fn test_center_vertically_uses_transform() {
        let (mut surface, _) = surface();
        let options = ActivationOptions::new().with_center_vertically(true);
        surface.create(&bounds(), &Style::new(), "FOO", options);

        let content = surface.content_style();
        assert_eq!(content.get("top"), Some("50%"));
        assert_eq!(content.get("transform"), Some("translateY(-50%)"));
    }

    #[test]
    fn test_constraints_from_bounds_and_style() {
        let (mut surface, _) = surface();
        let bounds = Bounds {
            x: 0.0,
            y: 0.0,
            width: Some(500.0),
            height: Some(5.0),
            constraints: SizeConstraints {
                max_width: Some(200.0),
                ..SizeConstraints::NONE
            },
        };
        let style = Style::new().with("minHeight", "20px").with("maxWidth", 999.0);
        surface.create(&bounds, &style, "x", ActivationOptions::new());

        assert_eq!(surface.bounds().width(), 200.0);
        assert_eq!(surface.bounds().height(), 20.0);
        assert_eq!(surface.frame_style().get("max-width"), Some("200px"));
        assert_eq!(surface.frame_style().get("min-height"), Some("20px"));
    }

    #[test]
    fn test_missing_dimensions_size_to_content() {
        let (mut surface, _) = surface();
        let bounds = Bounds {
            x: 5.0,
            y: 5.0,
            ..Bounds::default()
        };
        let style = Style::new().with("fontSize", 10.0).with("lineHeight", 1.0);
        surface.create(&bounds, &style, "abcd\nab", ActivationOptions::new());

        let rect = surface.bounds();
        assert_eq!(rect.width(), 24.0);
        assert_eq!(rect.height(), 20.0);
        assert!(!surface.frame_style().contains("width"));
    }

    #[test]
    fn test_post_attach_places_caret_at_end() {
        let (mut surface, _) = surface();
        surface.create(&bounds(), &Style::new(), "hello", ActivationOptions::new());
        assert!(!surface.is_focused());

        assert!(surface.post_attach());
        assert!(surface.is_focused());
        assert_eq!(surface.caret(), 5);
        assert!(!surface.post_attach());

        surface.input_text("!");
        assert_eq!(surface.value(), "hello!");
    }

    #[test]
    fn test_key_default_editing() {
        let (mut surface, _) = surface();
        surface.create(&bounds(), &Style::new(), "ab", ActivationOptions::new());
        surface.post_attach();

        let mut shift_enter = KeyPressEvent::new(Key::Enter, KeyboardModifiers::SHIFT, "");
        assert!(surface.key_default(&mut shift_enter));
        assert!(surface.key_default(&mut KeyPressEvent::character('c')));
        assert_eq!(surface.value(), "ab\nc");

        assert!(surface.key_default(&mut KeyPressEvent::key(Key::Backspace)));
        assert!(surface.key_default(&mut KeyPressEvent::key(Key::ArrowLeft)));
        assert!(surface.key_default(&mut KeyPressEvent::key(Key::Delete)));
        assert_eq!(surface.value(), "ab");
        assert_eq!(surface.caret(), 2);

        let mut ctrl_a = KeyPressEvent::new(Key::Character('a'), KeyboardModifiers::CTRL, "a");
        assert!(!surface.key_default(&mut ctrl_a));
        assert_eq!(surface.value(), "ab");
    }

    #[test]
    fn test_content_mouse_down_is_swallowed() {
        let (mut surface, _) = surface();
        surface.create(&bounds(), &Style::new(), "x", ActivationOptions::new());

        let mut event = MousePressEvent::left(Point::new(30.0, 20.0));
        assert!(surface.content_mouse_down(&mut event));
        assert!(event.base.is_accepted());
    }

    #[test]
    fn test_paste_line_endings_normalize_identically() {
        let (mut surface, _) = surface();

        surface.create(&bounds(), &Style::new(), "", ActivationOptions::new());
        surface.paste(&mut PasteEvent::plain("a\r\nb\r\n\r\nc"));
        let crlf = (surface.value(), surface.markup());

        surface.create(&bounds(), &Style::new(), "", ActivationOptions::new());
        surface.paste(&mut PasteEvent::plain("a\nb\n\nc"));
        let lf = (surface.value(), surface.markup());

        assert_eq!(crlf, lf);
        assert_eq!(lf.0, "a\nb\n\nc");
        assert_eq!(lf.1, "a<div>b</div><div><br></div><div>c</div>");
    }

    #[test]
    fn test_paste_ignores_html() {
        let (mut surface, _) = surface();
        surface.create(&bounds(), &Style::new(), "FOO", ActivationOptions::new());
        surface.post_attach();

        let mut event = PasteEvent::new(ClipboardData {
            text: Some("<b>bar</b>".into()),
            html: Some("<b>bar</b>".into()),
        });
        assert!(surface.paste(&mut event));
        assert!(event.base.is_default_prevented());
        assert_eq!(surface.markup(), "FOO&lt;b&gt;bar&lt;/b&gt;");

        let mut html_only = PasteEvent::new(ClipboardData {
            text: None,
            html: Some("<i>x</i>".into()),
        });
        assert!(surface.paste(&mut html_only));
        assert_eq!(surface.value(), "FOO<b>bar</b>");
    }

    #[test]
    fn test_autosize_grows_and_shrinks() {
        let (mut surface, _) = surface();
        let deltas = record(&surface);
        let style = Style::new().with("fontSize", 10.0).with("lineHeight", 1.0);
        let options = ActivationOptions::new().with_auto_resize(true);
        surface.create(&bounds(), &style, "hello", options);
        surface.post_attach();
        assert_eq!(surface.overflow(), Some(Overflow::Hidden));

        // one line of 10px in a 30px frame: more than a line too tall
        surface.on_input();
        assert_eq!(surface.bounds().height(), 10.0);

        surface.input_text("\nworld\nagain\nmore");
        assert_eq!(surface.bounds().height(), 40.0);

        let deltas = deltas.lock();
        assert_eq!(deltas.len(), 2);
        assert_eq!(deltas[0], ResizeDelta { width: 100.0, height: 10.0, dx: 0.0, dy: -20.0 });
        assert_eq!(deltas[1], ResizeDelta { width: 100.0, height: 40.0, dx: 0.0, dy: 30.0 });
    }

    #[test]
    fn test_autosize_clamps_at_max_height() {
        let (mut surface, _) = surface();
        let style = Style::new().with("fontSize", 10.0).with("lineHeight", 1.0);
        let bounds = bounds().with_constraints(SizeConstraints {
            max_height: Some(50.0),
            ..SizeConstraints::NONE
        });
        let options = ActivationOptions::new().with_auto_resize(true);
        surface.create(&bounds, &style, "1\n2\n3\n4\n5\n6\n7", options);

        surface.on_input();
        assert_eq!(surface.bounds().height(), 50.0);
        assert_eq!(surface.overflow(), Some(Overflow::Auto));

        surface.destroy();
        surface.create(&bounds, &style, "1", options);
        surface.on_input();
        assert_eq!(surface.bounds().height(), 10.0);
        assert_eq!(surface.overflow(), Some(Overflow::Hidden));
    }

    #[test]
    fn test_autosize_disabled_without_option() {
        let (mut surface, _) = surface();
        let deltas = record(&surface);
        surface.create(&bounds(), &Style::new(), "a", ActivationOptions::new());
        surface.input_text("\nb\nc\nd\ne");
        assert_eq!(surface.bounds().height(), 30.0);
        assert!(deltas.lock().is_empty());
    }

    #[test]
    fn test_paste_triggers_autosize() {
        let (mut surface, _) = surface();
        let deltas = record(&surface);
        let style = Style::new().with("fontSize", 10.0).with("lineHeight", 1.0);
        let min = SizeConstraints {
            min_height: Some(30.0),
            ..SizeConstraints::NONE
        };
        let options = ActivationOptions::new().with_auto_resize(true);
        surface.create(&bounds().with_constraints(min), &style, "", options);

        surface.paste(&mut PasteEvent::plain("a\nb\nc\nd"));
        assert_eq!(surface.bounds().height(), 40.0);
        assert_eq!(deltas.lock().len(), 1);
    }

    #[test]
    fn test_paste_follows_input_binding() {
        let (mut surface, _) = surface();
        let deltas = record(&surface);
        let style = Style::new().with("fontSize", 10.0).with("lineHeight", 1.0);
        surface.create(&bounds(), &style, "", ActivationOptions::new());

        assert!(surface.paste(&mut PasteEvent::plain("a\nb\nc\nd\ne")));
        assert_eq!(surface.value(), "a\nb\nc\nd\ne");
        assert_eq!(surface.bounds().height(), 30.0);
        assert!(deltas.lock().is_empty());
    }

    #[test]
    fn test_resizable_shows_handle_and_background() {
        let (mut surface, _) = surface();
        let options = ActivationOptions::new().with_resizable(true);
        surface.create(&bounds(), &Style::new(), "FOO", options);

        assert!(surface.has_resize_handle());
        assert_eq!(
            surface.resize_handle_bounds(),
            Some(Rect::new(110.0, 30.0, 10.0, 10.0))
        );
        assert_eq!(
            surface.frame_style().get("background-color"),
            Some("rgb(255, 255, 255)")
        );
    }

    #[test]
    fn test_drag_resize_tracks_globally() {
        let (mut surface, _) = surface();
        let deltas = record(&surface);
        let options = ActivationOptions::new().with_resizable(true);
        surface.create(&bounds(), &Style::new(), "FOO", options);

        let start = Point::new(115.0, 35.0);
        assert!(surface.handle_mouse_down(&mut MousePressEvent::left(start)));
        assert!(surface.is_dragging());
        assert_eq!(surface.overflow(), Some(Overflow::Auto));

        // far outside the handle
        surface.pointer_move(&mut MouseMoveEvent::new(Point::new(165.0, 55.0)));
        surface.pointer_move(&mut MouseMoveEvent::new(Point::new(215.0, 135.0)));
        assert!(surface.pointer_up(&mut MouseReleaseEvent::left(Point::new(215.0, 135.0))));
        assert!(!surface.is_dragging());

        assert_eq!(surface.bounds(), Rect::new(20.0, 10.0, 200.0, 130.0));
        assert_eq!(
            *deltas.lock(),
            vec![
                ResizeDelta { width: 150.0, height: 50.0, dx: 50.0, dy: 20.0 },
                ResizeDelta { width: 200.0, height: 130.0, dx: 100.0, dy: 100.0 },
            ]
        );

        // moves after release are ignored
        assert!(surface
            .pointer_move(&mut MouseMoveEvent::new(Point::new(0.0, 0.0)))
            .is_none());
    }

    #[test]
    fn test_drag_resize_clamps() {
        let (mut surface, _) = surface();
        let style = Style::new().with("minWidth", 50.0).with("maxHeight", 60.0);
        let options = ActivationOptions::new().with_resizable(true);
        surface.create(&bounds(), &style, "FOO", options);

        surface.handle_mouse_down(&mut MousePressEvent::left(Point::new(0.0, 0.0)));
        let delta = surface
            .pointer_move(&mut MouseMoveEvent::new(Point::new(-500.0, 500.0)))
            .unwrap();
        assert_eq!((delta.width, delta.height), (50.0, 60.0));
        assert_eq!((delta.dx, delta.dy), (-500.0, 500.0));
    }

    #[test]
    fn test_handle_ignored_when_not_resizable() {
        let (mut surface, _) = surface();
        surface.create(&bounds(), &Style::new(), "FOO", ActivationOptions::new());
        assert!(!surface.has_resize_handle());
        assert!(surface.resize_handle_bounds().is_none());
        assert!(!surface.handle_mouse_down(&mut MousePressEvent::left(Point::ZERO)));
    }

    #[test]
    fn test_destroy_resets_everything() {
        let (mut surface, container) = surface();
        let options = ActivationOptions::new()
            .with_resizable(true)
            .with_auto_resize(true);
        let node = surface.create(&bounds(), &Style::new(), "FOO", options);
        surface.handle_mouse_down(&mut MousePressEvent::left(Point::ZERO));

        surface.destroy();

        assert!(!container.contains(node));
        assert!(!surface.is_attached());
        assert!(!surface.is_dragging());
        assert!(!surface.has_resize_handle());
        assert_eq!(surface.value(), "");
        assert_eq!(surface.markup(), "");
        assert!(surface.frame_style().is_empty());
        assert!(surface.content_style().is_empty());
        assert_eq!(surface.bounds(), Rect::ZERO);

        // listeners are unbound
        assert!(!surface.paste(&mut PasteEvent::plain("x")));
        assert!(!surface.content_mouse_down(&mut MousePressEvent::left(Point::ZERO)));
        assert!(!surface.key_default(&mut KeyPressEvent::character('x')));
        assert_eq!(surface.value(), "");

        // idempotent
        surface.destroy();
        assert_eq!(container.child_count(), 0);
    }

    #[test]
    fn test_create_replaces_previous_frame() {
        let (mut surface, container) = surface();
        let first = surface.create(&bounds(), &Style::new(), "a", ActivationOptions::new());
        let second = surface.create(&bounds(), &Style::new(), "b", ActivationOptions::new());

        assert!(!container.contains(first));
        assert!(container.contains(second));
        assert_eq!(container.child_count(), 1);
        assert_eq!(surface.value(), "b");
    }
}
