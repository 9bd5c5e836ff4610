//! In-place text editing for diagram elements.
//!
//! This crate lets a host diagram editor put an editable text overlay on top
//! of an element (a shape or connection label) and commit the result back to
//! the element through a pluggable provider.
//!
//! - [`DirectEditing`]: the session controller. It asks registered
//!   [`DirectEditingProvider`]s whether they can edit an element, shows the
//!   surface for the winner, and persists or discards the edit.
//! - [`EditableSurface`]: the overlay itself. Geometry, styling, native
//!   editing, plain-text paste, autosize and drag-resize.
//!
//! The host forwards its native input events through the `handle_*` methods
//! and observes [`DirectEditingEvent`]s on [`DirectEditing::events`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use direct_edit::{
//!     ActivationContext, ActivationOptions, Bounds, Container, DirectEditing,
//!     DirectEditingProvider, Key, KeyPressEvent,
//! };
//! use direct_edit::Rect;
//! use parking_lot::Mutex;
//!
//! #[derive(Default)]
//! struct Labels {
//!     committed: Mutex<Option<String>>,
//! }
//!
//! impl DirectEditingProvider<u32> for Labels {
//!     fn can_activate(&self, id: &u32) -> Option<ActivationContext> {
//!         (*id == 1).then(|| {
//!             ActivationContext::new(Bounds::new(20.0, 10.0, 60.0, 50.0), "FOO")
//!                 .with_options(ActivationOptions::new().with_center_vertically(true))
//!         })
//!     }
//!
//!     fn commit(&self, _: &u32, new_text: &str, _: &str, _: Rect) {
//!         *self.committed.lock() = Some(new_text.to_string());
//!     }
//! }
//!
//! let labels = Arc::new(Labels::default());
//! let mut editing: DirectEditing<u32> = DirectEditing::new(Container::new());
//! editing.register_provider(labels.clone());
//!
//! assert!(!editing.activate(&2));
//! assert!(editing.activate(&1));
//! editing.post_attach();
//!
//! editing.handle_input("BAR");
//! editing.handle_key(&mut KeyPressEvent::key(Key::Enter));
//!
//! assert!(!editing.is_active());
//! assert_eq!(labels.committed.lock().as_deref(), Some("FOOBAR"));
//! ```

pub mod container;
pub mod content;
pub mod context;
mod error;
pub mod events;
pub mod metrics;
pub mod platform;
pub mod provider;
pub mod session;
pub mod style;
pub mod surface;

pub use direct_edit_core::{Color, Point, Rect, Size, SizeConstraints};

pub use container::{Container, NodeId};
pub use content::ContentModel;
pub use context::{ActivationContext, ActivationOptions, Bounds};
pub use error::{DirectEditError, Result};
pub use events::{
    ClipboardData, EventBase, Key, KeyPressEvent, KeyboardModifiers, MouseButton,
    MouseMoveEvent, MousePressEvent, MouseReleaseEvent, PasteEvent,
};
pub use metrics::{FixedMetrics, TextMeasure};
pub use provider::DirectEditingProvider;
pub use session::{DirectEditing, DirectEditingEvent, SessionSnapshot};
pub use style::{InlineStyle, Style, StyleValue, TextAlign};
pub use surface::{EditableSurface, Overflow, ResizeDelta, SurfaceConfig};
