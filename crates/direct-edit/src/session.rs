//! The editing session controller.
//!
//! [`DirectEditing`] owns the one [`EditableSurface`] of a host and runs at
//! most one edit at a time. Activation asks the registered providers, in
//! registration order, whether they can edit an element; the first one that
//! returns an [`ActivationContext`] wins and the surface is shown with it.
//!
//! # State machine
//!
//! ```text
//!              activate (match)
//!   Inactive ───────────────────> Active
//!      ^                            │
//!      └──── cancel / complete ─────┘
//! ```
//!
//! Activating while active cancels the running session first. Every
//! transition fires one [`DirectEditingEvent`] on [`DirectEditing::events`].

use std::sync::Arc;

use direct_edit_core::logging::{span_names, targets};
use direct_edit_core::{ConnectionId, PerfSpan, Signal};

use crate::container::Container;
use crate::content::normalize_line_breaks;
use crate::context::ActivationContext;
use crate::events::{
    Key, KeyPressEvent, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, PasteEvent,
};
use crate::metrics::TextMeasure;
use crate::provider::DirectEditingProvider;
use crate::surface::{EditableSurface, ResizeDelta, SurfaceConfig};

/// The session data carried by lifecycle notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot<E> {
    pub element: E,
    pub context: ActivationContext,
}

/// Notifications fired on the host event channel.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectEditingEvent<E> {
    Activate { active: SessionSnapshot<E> },
    Cancel { active: SessionSnapshot<E> },
    Complete { active: SessionSnapshot<E> },
    Deactivate { active: SessionSnapshot<E> },
    Resize(ResizeDelta),
}

impl<E> DirectEditingEvent<E> {
    /// The host-facing event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Activate { .. } => "directEditing.activate",
            Self::Cancel { .. } => "directEditing.cancel",
            Self::Complete { .. } => "directEditing.complete",
            Self::Deactivate { .. } => "directEditing.deactivate",
            Self::Resize(_) => "directEditing.resize",
        }
    }

    /// The session the event refers to. `None` for resize notifications.
    pub fn active(&self) -> Option<&SessionSnapshot<E>> {
        match self {
            Self::Activate { active }
            | Self::Cancel { active }
            | Self::Complete { active }
            | Self::Deactivate { active } => Some(active),
            Self::Resize(_) => None,
        }
    }
}

struct Session<E> {
    element: E,
    context: ActivationContext,
    provider: Arc<dyn DirectEditingProvider<E>>,
    resizable: bool,
}

impl<E: Clone> Session<E> {
    fn snapshot(&self) -> SessionSnapshot<E> {
        SessionSnapshot {
            element: self.element.clone(),
            context: self.context.clone(),
        }
    }
}

/// Direct editing controller.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use direct_edit::{ActivationContext, Bounds, Container, DirectEditing, DirectEditingProvider};
/// use direct_edit::Rect;
///
/// struct Label;
///
/// impl DirectEditingProvider<String> for Label {
///     fn can_activate(&self, element: &String) -> Option<ActivationContext> {
///         Some(ActivationContext::new(Bounds::new(20.0, 10.0, 60.0, 50.0), element.clone()))
///     }
///
///     fn commit(&self, _: &String, _: &str, _: &str, _: Rect) {}
/// }
///
/// let mut editing: DirectEditing<String> = DirectEditing::new(Container::new());
/// editing.register_provider(Arc::new(Label));
///
/// assert!(editing.activate(&"FOO".to_string()));
/// assert_eq!(editing.get_value(), "FOO");
/// editing.cancel();
/// assert!(!editing.is_active());
/// ```
pub struct DirectEditing<E: Clone + PartialEq + Send + Sync + 'static> {
    providers: Vec<Arc<dyn DirectEditingProvider<E>>>,
    active: Option<Session<E>>,
    surface: EditableSurface,
    events: Arc<Signal<DirectEditingEvent<E>>>,
}

impl<E: Clone + PartialEq + Send + Sync + 'static> DirectEditing<E> {
    /// Create a controller whose surface attaches to `container`.
    pub fn new(container: Container) -> Self {
        Self::with_config(container, SurfaceConfig::default())
    }

    /// Create a controller with a custom surface configuration.
    pub fn with_config(container: Container, config: SurfaceConfig) -> Self {
        let surface = EditableSurface::with_config(container, config);
        let events: Arc<Signal<DirectEditingEvent<E>>> = Arc::new(Signal::new());

        let forward = events.clone();
        surface
            .resized
            .connect(move |delta| forward.emit(DirectEditingEvent::Resize(*delta)));

        Self {
            providers: Vec::new(),
            active: None,
            surface,
            events,
        }
    }

    /// Replace the text measurement the surface sizes content with.
    pub fn set_text_measure(&mut self, measure: Arc<dyn TextMeasure>) {
        self.surface.set_text_measure(measure);
    }

    // =========================================================================
    // Providers
    // =========================================================================

    /// Append a provider. Earlier registrations keep precedence.
    pub fn register_provider(&mut self, provider: Arc<dyn DirectEditingProvider<E>>) {
        self.providers.push(provider);
    }

    pub fn providers(&self) -> &[Arc<dyn DirectEditingProvider<E>>] {
        &self.providers
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start editing `element`.
    ///
    /// A running session is cancelled first. Returns `false` if no provider
    /// can edit the element; the controller then stays inactive.
    pub fn activate(&mut self, element: &E) -> bool {
        self.cancel();

        let found = {
            let _span = PerfSpan::new(span_names::PROVIDER_LOOKUP);
            self.providers.iter().find_map(|provider| {
                provider
                    .can_activate(element)
                    .map(|context| (provider.clone(), context))
            })
        };

        let Some((provider, context)) = found else {
            tracing::debug!(
                target: targets::SESSION,
                providers = self.providers.len(),
                "no provider can edit element"
            );
            return false;
        };

        self.surface.create(
            &context.bounds,
            &context.style,
            &context.text,
            context.options,
        );

        let session = Session {
            element: element.clone(),
            resizable: context.options.resizable,
            context,
            provider,
        };
        let snapshot = session.snapshot();
        self.active = Some(session);

        tracing::debug!(target: targets::SESSION, "direct editing activated");
        self.events
            .emit(DirectEditingEvent::Activate { active: snapshot });
        true
    }

    /// Whether a session is running.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Whether the running session edits `element`.
    pub fn is_active_for(&self, element: &E) -> bool {
        self.active
            .as_ref()
            .is_some_and(|session| session.element == *element)
    }

    /// The element under edit.
    pub fn active_element(&self) -> Option<&E> {
        self.active.as_ref().map(|session| &session.element)
    }

    /// The activation context in effect.
    pub fn active_context(&self) -> Option<&ActivationContext> {
        self.active.as_ref().map(|session| &session.context)
    }

    /// The current sanitized text. Empty while inactive.
    pub fn get_value(&self) -> String {
        if self.active.is_none() {
            return String::new();
        }
        self.surface.value()
    }

    /// Abandon the running session without persisting anything.
    pub fn cancel(&mut self) {
        let Some(session) = self.active.as_ref() else {
            return;
        };
        tracing::debug!(target: targets::SESSION, "direct editing cancelled");
        self.events.emit(DirectEditingEvent::Cancel {
            active: session.snapshot(),
        });
        self.close();
    }

    /// Finish the running session.
    ///
    /// The provider is asked to commit when the text changed, or whenever
    /// the session is resizable, with the surface's current bounds.
    pub fn complete(&mut self) {
        let Some(session) = self.active.as_ref() else {
            return;
        };

        let old_text = session.context.text.as_str();
        let new_text = self.surface.value();
        let bounds = self.surface.bounds();
        // The surface holds `'\n'` line breaks only.
        let changed = new_text != normalize_line_breaks(old_text);

        if changed || session.resizable {
            tracing::debug!(
                target: targets::SESSION,
                changed,
                resizable = session.resizable,
                "committing edit"
            );
            session
                .provider
                .commit(&session.element, &new_text, old_text, bounds);
        }

        tracing::debug!(target: targets::SESSION, "direct editing completed");
        self.events.emit(DirectEditingEvent::Complete {
            active: session.snapshot(),
        });
        self.close();
    }

    fn close(&mut self) {
        self.surface.destroy();
        if let Some(session) = self.active.take() {
            tracing::debug!(target: targets::SESSION, "direct editing deactivated");
            self.events.emit(DirectEditingEvent::Deactivate {
                active: session.snapshot(),
            });
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// The host event channel.
    pub fn events(&self) -> &Arc<Signal<DirectEditingEvent<E>>> {
        &self.events
    }

    /// Connect a slot to the notifications named `name`.
    pub fn on<F>(&self, name: &'static str, slot: F) -> ConnectionId
    where
        F: Fn(&DirectEditingEvent<E>) + Send + Sync + 'static,
    {
        self.events.connect(move |event| {
            if event.name() == name {
                slot(event);
            }
        })
    }

    // =========================================================================
    // Input routing
    // =========================================================================

    /// Key-down in the content area.
    ///
    /// Escape cancels, Enter without Shift completes; every other key gets
    /// the surface's native editing. Returns `true` if the key was handled.
    pub fn handle_key(&mut self, event: &mut KeyPressEvent) -> bool {
        if self.active.is_none() || !self.surface.accepts_keys() {
            return false;
        }
        event.base.accept();

        match event.key {
            Key::Escape => {
                event.base.prevent_default();
                self.cancel();
                true
            }
            Key::Enter if !event.modifiers.shift => {
                event.base.prevent_default();
                self.complete();
                true
            }
            _ => self.surface.key_default(event),
        }
    }

    /// Text typed into the content area.
    pub fn handle_input(&mut self, text: &str) {
        if self.active.is_some() {
            self.surface.input_text(text);
        }
    }

    /// Mouse-down on the content area.
    pub fn handle_content_mouse_down(&mut self, event: &mut MousePressEvent) -> bool {
        self.surface.content_mouse_down(event)
    }

    /// Paste into the content area.
    pub fn handle_paste(&mut self, event: &mut PasteEvent) -> bool {
        self.surface.paste(event)
    }

    /// Mouse-down on the resize handle.
    pub fn handle_handle_mouse_down(&mut self, event: &mut MousePressEvent) -> bool {
        self.surface.handle_mouse_down(event)
    }

    /// Global pointer move.
    pub fn handle_pointer_move(&mut self, event: &mut MouseMoveEvent) -> Option<ResizeDelta> {
        self.surface.pointer_move(event)
    }

    /// Global pointer release.
    pub fn handle_pointer_up(&mut self, event: &mut MouseReleaseEvent) -> bool {
        self.surface.pointer_up(event)
    }

    /// Run the deferred focus step after the host has laid out the frame.
    pub fn post_attach(&mut self) -> bool {
        self.surface.post_attach()
    }

    /// Read access to the surface.
    pub fn surface(&self) -> &EditableSurface {
        &self.surface
    }
}

impl<E: Clone + PartialEq + Send + Sync + 'static> std::fmt::Debug for DirectEditing<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectEditing")
            .field("providers", &self.providers.len())
            .field("active", &self.active.is_some())
            .field("surface", &self.surface)
            .finish()
    }
}

static_assertions::assert_impl_all!(DirectEditing<String>: Send, Sync);
