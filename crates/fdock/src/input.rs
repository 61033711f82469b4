#![forbid(unsafe_code)]

//! Input adapters: keyboard, outside-pointer watcher, and toggle control.
//!
//! Adapters translate raw [`Event`]s into the controller's three commands.
//! None of them touches the stage directly; the controller stays the single
//! writer no matter how many input sources are wired up.

use fdock_core::event::{Event, KeyCode, KeyEvent, PointerEvent};
use fdock_core::geometry::{Point, Rect};
use fdock_core::timer::TimerScheduler;

use crate::controller::DockController;
use crate::stage::Stage;

/// Default accessible name for the toggle control.
pub const DEFAULT_TOGGLE_LABEL: &str = "Toggle Expandable Dock";

/// Whether an adapter acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Handled; the host should suppress default handling.
    Consumed,
    /// Not for the dock.
    Ignored,
}

impl InputOutcome {
    /// True for `Consumed`.
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

// ============================================================================
// Keyboard
// ============================================================================

/// Keys the toggle control reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    /// Keys that call `toggle()`.
    pub toggle: Vec<KeyCode>,
    /// Key that calls `collapse()` while expanded.
    pub close: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle: vec![KeyCode::Enter, KeyCode::Char(' ')],
            close: KeyCode::Escape,
        }
    }
}

/// Routes key presses on the focused toggle control.
#[derive(Debug, Clone, Default)]
pub struct KeyboardAdapter {
    bindings: KeyBindings,
}

impl KeyboardAdapter {
    /// Adapter with the given bindings.
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// Current bindings.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Handle one key event.
    ///
    /// Toggle keys are consumed even when the controller is disabled, so the
    /// host never lets Space scroll the page from the focused control.
    /// The close key is only consumed while the dock is expanded.
    pub fn handle_key<S: TimerScheduler<Stage>>(
        &self,
        key: &KeyEvent,
        dock: &mut DockController<S>,
    ) -> InputOutcome {
        if !key.is_down() {
            return InputOutcome::Ignored;
        }
        if self.bindings.toggle.contains(&key.code) {
            dock.toggle();
            return InputOutcome::Consumed;
        }
        if key.code == self.bindings.close && dock.is_expanded() {
            dock.collapse();
            return InputOutcome::Consumed;
        }
        InputOutcome::Ignored
    }
}

// ============================================================================
// Outside-pointer watcher
// ============================================================================

/// Hit test supplied by the rendering layer.
pub trait BoundaryTest {
    /// True if `point` lies inside the widget's rendered bounds.
    fn contains(&self, point: Point) -> bool;
}

impl BoundaryTest for Rect {
    fn contains(&self, point: Point) -> bool {
        Rect::contains(self, point)
    }
}

impl<F: Fn(Point) -> bool> BoundaryTest for F {
    fn contains(&self, point: Point) -> bool {
        self(point)
    }
}

/// Collapses the dock when pointer activity lands outside its bounds.
///
/// Only acts while the dock is fully expanded; while collapsed or mid-chain
/// the signal is dropped without touching the controller.
#[derive(Debug, Clone)]
pub struct OutsideWatcher<B> {
    boundary: B,
    enabled: bool,
}

impl<B: BoundaryTest> OutsideWatcher<B> {
    /// Watch `boundary`.
    pub fn new(boundary: B) -> Self {
        Self {
            boundary,
            enabled: true,
        }
    }

    /// Replace the boundary, e.g. after a layout pass.
    pub fn set_boundary(&mut self, boundary: B) {
        self.boundary = boundary;
    }

    /// The current boundary.
    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    /// Stop or resume watching.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the watcher is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Handle pointer activity anywhere in the document.
    pub fn handle_pointer<S: TimerScheduler<Stage>>(
        &self,
        pointer: &PointerEvent,
        dock: &mut DockController<S>,
    ) -> InputOutcome {
        if !self.enabled || !pointer.is_activation() || !dock.is_expanded() {
            return InputOutcome::Ignored;
        }
        if self.boundary.contains(pointer.position) {
            return InputOutcome::Ignored;
        }
        dock.collapse();
        InputOutcome::Consumed
    }
}

// ============================================================================
// Toggle control
// ============================================================================

/// Icon shown on the toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Chat launcher, while not fully expanded.
    Launcher,
    /// Close mark, while fully expanded.
    Close,
}

/// The launcher/close button.
#[derive(Debug, Clone)]
pub struct ToggleControl {
    aria_label: String,
}

impl Default for ToggleControl {
    fn default() -> Self {
        Self::new(DEFAULT_TOGGLE_LABEL)
    }
}

impl ToggleControl {
    /// Control with a custom accessible name.
    pub fn new(aria_label: impl Into<String>) -> Self {
        Self {
            aria_label: aria_label.into(),
        }
    }

    /// Click/tap on the control.
    pub fn activate<S: TimerScheduler<Stage>>(&self, dock: &mut DockController<S>) {
        dock.toggle();
    }

    /// Accessible name.
    pub fn aria_label(&self) -> &str {
        &self.aria_label
    }

    /// Value for `aria-expanded`.
    pub fn aria_expanded<S: TimerScheduler<Stage>>(&self, dock: &DockController<S>) -> bool {
        dock.is_expanded()
    }

    /// Which icon to draw.
    pub fn icon<S: TimerScheduler<Stage>>(&self, dock: &DockController<S>) -> ToggleIcon {
        if dock.is_expanded() {
            ToggleIcon::Close
        } else {
            ToggleIcon::Launcher
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// All three adapters behind one entry point.
#[derive(Debug, Clone)]
pub struct DockInput<B> {
    keyboard: KeyboardAdapter,
    outside: OutsideWatcher<B>,
    toggle: ToggleControl,
}

impl<B: BoundaryTest> DockInput<B> {
    /// Default keyboard bindings and toggle label around `boundary`.
    pub fn new(boundary: B) -> Self {
        Self {
            keyboard: KeyboardAdapter::default(),
            outside: OutsideWatcher::new(boundary),
            toggle: ToggleControl::default(),
        }
    }

    /// Replace the keyboard adapter.
    pub fn with_keyboard(mut self, keyboard: KeyboardAdapter) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Replace the toggle control.
    pub fn with_toggle(mut self, toggle: ToggleControl) -> Self {
        self.toggle = toggle;
        self
    }

    /// The keyboard adapter.
    pub fn keyboard(&self) -> &KeyboardAdapter {
        &self.keyboard
    }

    /// The outside watcher, e.g. to update its boundary.
    pub fn outside_mut(&mut self) -> &mut OutsideWatcher<B> {
        &mut self.outside
    }

    /// The toggle control.
    pub fn toggle(&self) -> &ToggleControl {
        &self.toggle
    }

    /// Route one event.
    ///
    /// Key events only reach the dock while the toggle control has focus.
    pub fn dispatch<S: TimerScheduler<Stage>>(
        &self,
        event: &Event,
        toggle_focused: bool,
        dock: &mut DockController<S>,
    ) -> InputOutcome {
        match event {
            Event::Key(key) if toggle_focused => self.keyboard.handle_key(key, dock),
            Event::Key(_) => InputOutcome::Ignored,
            Event::Pointer(pointer) => self.outside.handle_pointer(pointer, dock),
        }
    }
}
