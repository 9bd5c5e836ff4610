//! Input events routed into the editable surface.
//!
//! The host translates its native key, pointer and clipboard events into
//! these types and forwards them to [`DirectEditing`](crate::DirectEditing).
//! Handlers mark events through their [`EventBase`]: an accepted event must
//! not propagate further into the host (e.g. canvas panning), a
//! default-prevented event must not get the host's native behavior.

use direct_edit_core::Point;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all input events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
    default_prevented: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    /// Suppress the host's native handling of the event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Keys the surface distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Tab,
    /// A printable character key.
    Character(char),
    /// Any other key, identified by the host's key code.
    Unknown(u32),
}

impl Key {
    /// Map a legacy DOM `keyCode` onto a key.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            8 => Self::Backspace,
            9 => Self::Tab,
            13 => Self::Enter,
            27 => Self::Escape,
            35 => Self::End,
            36 => Self::Home,
            37 => Self::ArrowLeft,
            39 => Self::ArrowRight,
            46 => Self::Delete,
            other => Self::Unknown(other),
        }
    }
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (if any).
    ///
    /// For printable keys, this contains the character that would be typed.
    pub text: String,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers, text: impl Into<String>) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
        }
    }

    /// A key press without modifiers or text.
    pub fn key(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, "")
    }

    /// A printable character key press.
    pub fn character(c: char) -> Self {
        Self::new(Key::Character(c), KeyboardModifiers::NONE, c.to_string())
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in global (viewport) coordinates.
    pub global_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, global_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            global_pos,
            modifiers,
        }
    }

    /// A left-button press without modifiers.
    pub fn left(global_pos: Point) -> Self {
        Self::new(MouseButton::Left, global_pos, KeyboardModifiers::NONE)
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in global (viewport) coordinates.
    pub global_pos: Point,
}

impl MouseMoveEvent {
    pub fn new(global_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            global_pos,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in global (viewport) coordinates.
    pub global_pos: Point,
}

impl MouseReleaseEvent {
    pub fn new(button: MouseButton, global_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            global_pos,
        }
    }

    pub fn left(global_pos: Point) -> Self {
        Self::new(MouseButton::Left, global_pos)
    }
}

/// The representations a clipboard offers for one paste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardData {
    /// The `text/plain` representation.
    pub text: Option<String>,
    /// The `text/html` representation. Never inserted.
    pub html: Option<String>,
}

impl ClipboardData {
    /// Clipboard data with only a plain-text representation.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            html: None,
        }
    }
}

/// Paste event, sent when the user pastes into the content area.
#[derive(Debug, Clone)]
pub struct PasteEvent {
    /// Base event data.
    pub base: EventBase,
    /// What the clipboard offers.
    pub data: ClipboardData,
}

impl PasteEvent {
    pub fn new(data: ClipboardData) -> Self {
        Self {
            base: EventBase::new(),
            data,
        }
    }

    /// A paste of plain text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(ClipboardData::plain(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_base_flags() {
        let mut base = EventBase::new();
        assert!(!base.is_accepted());
        assert!(!base.is_default_prevented());

        base.accept();
        base.prevent_default();
        assert!(base.is_accepted());
        assert!(base.is_default_prevented());

        base.ignore();
        assert!(!base.is_accepted());
    }

    #[test]
    fn test_key_from_key_code() {
        assert_eq!(Key::from_key_code(27), Key::Escape);
        assert_eq!(Key::from_key_code(13), Key::Enter);
        assert_eq!(Key::from_key_code(65), Key::Unknown(65));
    }

    #[test]
    fn test_character_event_carries_text() {
        let event = KeyPressEvent::character('x');
        assert_eq!(event.key, Key::Character('x'));
        assert_eq!(event.text, "x");
        assert!(!event.modifiers.any());
    }
}
