#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! These are the only input shapes the dock's adapters understand. Hosts
//! translate their platform events (DOM, winit, terminal) into these before
//! routing them to the controller.
//!
//! # Design Notes
//!
//! - Pointer coordinates are CSS pixels relative to the viewport origin
//! - `KeyEventKind` defaults to `Press` when the platform cannot distinguish
//! - `Modifiers` use bitflags for easy combination

use bitflags::bitflags;

use crate::geometry::Point;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A keyboard event delivered to the toggle control.
    Key(KeyEvent),

    /// Pointer activity anywhere in the document.
    Pointer(PointerEvent),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// True for presses and auto-repeats, false for releases.
    #[must_use]
    pub const fn is_down(&self) -> bool {
        !matches!(self.kind, KeyEventKind::Release)
    }
}

/// Key codes for keyboard events.
///
/// Space arrives as `Char(' ')`, matching how browsers report `" "`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Tab key.
    Tab,

    /// Backspace key.
    Backspace,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer activity.
    pub kind: PointerEventKind,

    /// Where the activity happened.
    pub position: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
        }
    }

    /// Shorthand for a primary-button mouse-down.
    #[must_use]
    pub const fn mouse_down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down(MouseButton::Left), x, y)
    }

    /// Shorthand for a touch-start.
    #[must_use]
    pub const fn touch_start(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::TouchStart, x, y)
    }

    /// True for the events that count as "activity" for dismissal:
    /// any button press and any touch start.
    #[must_use]
    pub const fn is_activation(&self) -> bool {
        matches!(
            self.kind,
            PointerEventKind::Down(_) | PointerEventKind::TouchStart
        )
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Mouse button pressed down.
    Down(MouseButton),

    /// Mouse button released.
    Up(MouseButton),

    /// Pointer moved.
    Moved,

    /// Finger touched the screen.
    TouchStart,

    /// Finger left the screen.
    TouchEnd,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,

    /// Right mouse button.
    Right,

    /// Middle mouse button (scroll wheel click).
    Middle,
}
