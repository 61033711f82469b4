#![forbid(unsafe_code)]

//! The dock state machine.
//!
//! [`DockController`] owns the current [`Stage`], the dimension snapshot and
//! an injected [`TimerScheduler`]. Input adapters route intent through its
//! three commands; the host calls [`DockController::poll`] whenever it wakes
//! (animation frame, timer tick) to deliver transitions that have come due.
//!
//! # Example
//!
//! ```
//! use fdock::{DockController, DockOptions, Stage};
//! use fdock_core::timer::{ChainScheduler, VirtualClock};
//!
//! let clock = VirtualClock::new();
//! let mut dock = DockController::with_options(
//!     DockOptions::default(),
//!     ChainScheduler::new(clock.clone()),
//! );
//!
//! dock.expand();
//! assert_eq!(dock.stage(), Stage::WidthExpanding);
//!
//! clock.advance_ms(850);
//! dock.poll();
//! assert!(dock.is_expanded());
//! ```
//!
//! # Invariants
//!
//! - At most one timer chain is pending; every effective command cancels the
//!   pending chain before it does anything else.
//! - Scheduled transitions only follow [`Stage::next_scheduled`] edges.
//! - Once every pending transition has fired, the stage is terminal.
//! - After [`DockController::unmount`] (or drop) nothing is pending and no
//!   stage change ever happens again.
//!
//! # Failure Modes
//!
//! None. Commands issued while disabled or unmounted are silent no-ops.

use std::fmt;

use fdock_core::logging::TARGET_CONTROLLER;
use fdock_core::timer::{ChainHandle, ChainScheduler, TimerScheduler};
use web_time::Duration;

use crate::dimensions::{DeviceClass, DockConfig, DockDimensions};
use crate::motion::DockMotion;
use crate::stage::Stage;
use crate::timing::TransitionTiming;
use crate::visuals::DockVisuals;

// ============================================================================
// Options
// ============================================================================

/// Mount-time configuration for a [`DockController`].
#[derive(Debug, Clone, PartialEq)]
pub struct DockOptions {
    /// Transition delays.
    pub timing: TransitionTiming,
    /// Dimension sets per device class.
    pub config: DockConfig,
    /// Start at `FullyExpanded` instead of `Collapsed`.
    pub default_expanded: bool,
    /// Ignore every command.
    pub disabled: bool,
    /// Initial reduced-motion preference.
    pub reduced_motion: bool,
    /// Initial device class.
    pub device: DeviceClass,
    /// Tween hints handed to the renderer.
    pub motion: DockMotion,
}

impl Default for DockOptions {
    fn default() -> Self {
        Self {
            timing: TransitionTiming::default(),
            config: DockConfig::default(),
            default_expanded: false,
            disabled: false,
            reduced_motion: false,
            device: DeviceClass::Desktop,
            motion: DockMotion::default(),
        }
    }
}

impl DockOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set transition delays.
    pub fn timing(mut self, timing: TransitionTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Set dimension sets.
    pub fn config(mut self, config: DockConfig) -> Self {
        self.config = config;
        self
    }

    /// Start open.
    pub fn default_expanded(mut self, expanded: bool) -> Self {
        self.default_expanded = expanded;
        self
    }

    /// Start disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the initial reduced-motion preference.
    pub fn reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    /// Set the initial device class.
    pub fn device(mut self, device: DeviceClass) -> Self {
        self.device = device;
        self
    }

    /// Set renderer tween hints.
    pub fn motion(mut self, motion: DockMotion) -> Self {
        self.motion = motion;
        self
    }
}

// ============================================================================
// Hooks
// ============================================================================

type RequestHook = Box<dyn FnMut()>;
type StageHook = Box<dyn FnMut(Stage, Stage)>;

#[derive(Default)]
struct Hooks {
    expand_requested: Option<RequestHook>,
    collapse_requested: Option<RequestHook>,
    stage_changed: Option<StageHook>,
}

// ============================================================================
// Controller
// ============================================================================

/// Which command produced a chain; only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Expand,
    Collapse,
}

impl Command {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Expand => "expand",
            Self::Collapse => "collapse",
        }
    }
}

/// Staged, cancellable expand/collapse state machine for the dock.
pub struct DockController<S: TimerScheduler<Stage> = ChainScheduler<Stage>> {
    stage: Stage,
    scheduler: S,
    chain: Option<ChainHandle>,
    timing: TransitionTiming,
    config: DockConfig,
    /// Snapshot taken at the start of the current expand cycle.
    dimensions: DockDimensions,
    device: DeviceClass,
    reduced_motion: bool,
    disabled: bool,
    unmounted: bool,
    motion: DockMotion,
    hooks: Hooks,
}

impl<S: TimerScheduler<Stage>> fmt::Debug for DockController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DockController")
            .field("stage", &self.stage)
            .field("chain", &self.chain)
            .field("pending", &self.scheduler.pending())
            .field("device", &self.device)
            .field("reduced_motion", &self.reduced_motion)
            .field("disabled", &self.disabled)
            .field("unmounted", &self.unmounted)
            .finish_non_exhaustive()
    }
}

impl DockController<ChainScheduler<Stage>> {
    /// Controller with default options on the system clock.
    pub fn system() -> Self {
        Self::with_options(DockOptions::default(), ChainScheduler::system())
    }
}

impl<S: TimerScheduler<Stage>> DockController<S> {
    /// Mount a controller with default options.
    pub fn new(scheduler: S) -> Self {
        Self::with_options(DockOptions::default(), scheduler)
    }

    /// Mount a controller.
    pub fn with_options(options: DockOptions, scheduler: S) -> Self {
        let stage = if options.default_expanded {
            Stage::FullyExpanded
        } else {
            Stage::Collapsed
        };
        Self {
            stage,
            scheduler,
            chain: None,
            timing: options.timing,
            dimensions: options.config.resolve(options.device),
            config: options.config,
            device: options.device,
            reduced_motion: options.reduced_motion,
            disabled: options.disabled,
            unmounted: false,
            motion: options.motion,
            hooks: Hooks::default(),
        }
    }

    /// Called when an effective `expand()` is issued (not when it settles).
    pub fn on_expand_requested(mut self, hook: impl FnMut() + 'static) -> Self {
        self.hooks.expand_requested = Some(Box::new(hook));
        self
    }

    /// Called when an effective `collapse()` is issued (not when it settles).
    pub fn on_collapse_requested(mut self, hook: impl FnMut() + 'static) -> Self {
        self.hooks.collapse_requested = Some(Box::new(hook));
        self
    }

    /// Called with `(from, to)` on every stage change, synchronous or timed.
    pub fn on_stage_change(mut self, hook: impl FnMut(Stage, Stage) + 'static) -> Self {
        self.hooks.stage_changed = Some(Box::new(hook));
        self
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    /// Start opening the dock.
    ///
    /// No-op while disabled, unmounted, or already `FullyExpanded`.
    pub fn expand(&mut self) {
        if !self.accepts_commands() || self.stage == Stage::FullyExpanded {
            return;
        }
        let cancelled = self.cancel_chain();
        if let Some(hook) = self.hooks.expand_requested.as_mut() {
            hook();
        }

        self.dimensions = self.config.resolve(self.device);
        let from = self.stage;
        if self.reduced_motion {
            self.set_stage(Stage::FullyExpanded);
        } else {
            self.set_stage(Stage::WidthExpanding);
            self.chain = Some(self.scheduler.schedule_chain(self.timing.expand_chain()));
        }
        self.log_command(Command::Expand, from, cancelled);
    }

    /// Start closing the dock.
    ///
    /// No-op while disabled, unmounted, or already `Collapsed`.
    pub fn collapse(&mut self) {
        if !self.accepts_commands() || self.stage == Stage::Collapsed {
            return;
        }
        let cancelled = self.cancel_chain();
        if let Some(hook) = self.hooks.collapse_requested.as_mut() {
            hook();
        }

        let from = self.stage;
        if self.reduced_motion {
            self.set_stage(Stage::Collapsed);
        } else {
            self.set_stage(Stage::ContentFadingOut);
            self.chain = Some(self.scheduler.schedule_chain(self.timing.collapse_chain()));
        }
        self.log_command(Command::Collapse, from, cancelled);
    }

    /// `collapse()` when fully expanded, `expand()` otherwise.
    pub fn toggle(&mut self) {
        if self.is_expanded() {
            self.collapse();
        } else {
            self.expand();
        }
    }

    /// Apply every scheduled transition that has come due, in order.
    ///
    /// Returns how many transitions fired.
    pub fn poll(&mut self) -> usize {
        if self.unmounted {
            return 0;
        }
        let mut fired = 0;
        while let Some(next) = self.scheduler.pop_due() {
            if !self.stage.can_advance_to(next) {
                tracing::warn!(
                    target: TARGET_CONTROLLER,
                    from = %self.stage,
                    to = %next,
                    "dropping transition off the stage path"
                );
                continue;
            }
            tracing::trace!(
                target: TARGET_CONTROLLER,
                from = %self.stage,
                to = %next,
                at_ms = self.scheduler.now().as_millis() as u64,
                "scheduled transition fired"
            );
            self.set_stage(next);
            fired += 1;
        }
        if self.chain.is_some_and(|handle| !self.scheduler.is_live(handle)) {
            self.chain = None;
        }
        fired
    }

    /// Tear down: cancel every pending transition and ignore all further
    /// commands. Called automatically on drop.
    pub fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        let cancelled = self.cancel_chain();
        self.unmounted = true;
        tracing::debug!(
            target: TARGET_CONTROLLER,
            stage = %self.stage,
            cancelled = cancelled,
            "dock unmounted"
        );
    }

    // ------------------------------------------------------------------------
    // Signals
    // ------------------------------------------------------------------------

    /// Enable or disable command handling. A running chain is left alone.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Update the reduced-motion preference; read by the next command.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Update the device class.
    ///
    /// Applied immediately while settled; while a chain is running the new
    /// dimensions wait for the next `expand()`.
    pub fn set_device_class(&mut self, device: DeviceClass) {
        self.device = device;
        if self.is_settled() {
            self.dimensions = self.config.resolve(device);
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Current stage.
    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// True only at `FullyExpanded`.
    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.stage == Stage::FullyExpanded
    }

    /// True only at `FullyExpanded`; the renderer scopes focus with this.
    #[inline]
    pub fn content_focusable(&self) -> bool {
        self.is_expanded()
    }

    /// Terminal stage with nothing pending.
    pub fn is_settled(&self) -> bool {
        self.stage.is_terminal() && self.scheduler.pending() == 0
    }

    /// Render parameters for the current stage.
    pub fn visuals(&self) -> DockVisuals {
        DockVisuals::derive(self.stage, &self.dimensions)
    }

    /// The dimension snapshot in use.
    pub fn dimensions(&self) -> &DockDimensions {
        &self.dimensions
    }

    /// Tween hints, instant when reduced motion is on.
    pub fn motion(&self) -> DockMotion {
        if self.reduced_motion {
            DockMotion::reduced()
        } else {
            self.motion
        }
    }

    /// Transition delays in use.
    pub fn timing(&self) -> &TransitionTiming {
        &self.timing
    }

    /// Last device class signalled.
    pub fn device_class(&self) -> DeviceClass {
        self.device
    }

    /// Whether commands are currently ignored because of the disabled flag.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether reduced motion is on.
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Whether `unmount()` has run.
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    /// Number of scheduled transitions not yet fired.
    pub fn pending_transitions(&self) -> usize {
        self.scheduler.pending()
    }

    /// When the next transition is due on the scheduler's clock.
    ///
    /// Hosts can sleep until then instead of polling every frame.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// The injected scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn accepts_commands(&self) -> bool {
        !self.disabled && !self.unmounted
    }

    fn cancel_chain(&mut self) -> usize {
        self.chain = None;
        self.scheduler.cancel_all()
    }

    fn set_stage(&mut self, to: Stage) {
        let from = self.stage;
        if from == to {
            return;
        }
        self.stage = to;
        if let Some(hook) = self.hooks.stage_changed.as_mut() {
            hook(from, to);
        }
    }

    fn log_command(&self, command: Command, from: Stage, cancelled: usize) {
        tracing::debug!(
            target: TARGET_CONTROLLER,
            command = command.as_str(),
            from = %from,
            to = %self.stage,
            cancelled = cancelled,
            scheduled = self.scheduler.pending(),
            reduced_motion = self.reduced_motion,
            device = ?self.device,
            "dock command"
        );
    }
}

impl<S: TimerScheduler<Stage>> Drop for DockController<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use fdock_core::timer::VirtualClock;

    type TestDock = DockController<ChainScheduler<Stage, VirtualClock>>;

    fn dock_with(options: DockOptions) -> (VirtualClock, TestDock) {
        let clock = VirtualClock::new();
        let dock = DockController::with_options(options, ChainScheduler::new(clock.clone()));
        (clock, dock)
    }

    fn dock() -> (VirtualClock, TestDock) {
        dock_with(DockOptions::default())
    }

    fn advance(clock: &VirtualClock, dock: &mut TestDock, ms: u64) {
        clock.advance_ms(ms);
        dock.poll();
    }

    // -------------------------------------------------------------------------
    // Mounting
    // -------------------------------------------------------------------------

    #[test]
    fn mounts_collapsed() {
        let (_clock, dock) = dock();
        assert_eq!(dock.stage(), Stage::Collapsed);
        assert!(!dock.is_expanded());
        assert!(dock.is_settled());
    }

    #[test]
    fn mounts_expanded_when_configured() {
        let (_clock, dock) = dock_with(DockOptions::new().default_expanded(true));
        assert_eq!(dock.stage(), Stage::FullyExpanded);
        assert!(dock.content_focusable());
        assert_eq!(dock.pending_transitions(), 0);
    }

    // -------------------------------------------------------------------------
    // Expand / collapse chains
    // -------------------------------------------------------------------------

    #[test]
    fn expand_walks_the_expand_path() {
        let (clock, mut dock) = dock();
        dock.expand();
        assert_eq!(dock.stage(), Stage::WidthExpanding);
        assert_eq!(dock.pending_transitions(), 2);

        advance(&clock, &mut dock, 399);
        assert_eq!(dock.stage(), Stage::WidthExpanding);
        advance(&clock, &mut dock, 1);
        assert_eq!(dock.stage(), Stage::HeightExpanding);
        advance(&clock, &mut dock, 450);
        assert_eq!(dock.stage(), Stage::FullyExpanded);
        assert!(dock.is_settled());
    }

    #[test]
    fn collapse_walks_the_collapse_path() {
        let (clock, mut dock) = dock_with(DockOptions::new().default_expanded(true));
        dock.collapse();
        assert_eq!(dock.stage(), Stage::ContentFadingOut);
        assert_eq!(dock.pending_transitions(), 3);

        advance(&clock, &mut dock, 250);
        assert_eq!(dock.stage(), Stage::HeightCollapsing);
        advance(&clock, &mut dock, 400);
        assert_eq!(dock.stage(), Stage::WidthCollapsing);
        advance(&clock, &mut dock, 400);
        assert_eq!(dock.stage(), Stage::Collapsed);
        assert!(dock.is_settled());
    }

    #[test]
    fn late_poll_fires_every_due_transition_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let (clock, dock) = dock();
        let mut dock = dock.on_stage_change(move |_, to| sink.borrow_mut().push(to));

        dock.expand();
        clock.advance_ms(5_000);
        assert_eq!(dock.poll(), 2);
        assert_eq!(
            *seen.borrow(),
            vec![
                Stage::WidthExpanding,
                Stage::HeightExpanding,
                Stage::FullyExpanded
            ]
        );
    }

    #[test]
    fn toggle_switches_on_is_expanded() {
        let (clock, mut dock) = dock();
        dock.toggle();
        assert_eq!(dock.stage(), Stage::WidthExpanding);
        advance(&clock, &mut dock, 850);
        dock.toggle();
        assert_eq!(dock.stage(), Stage::ContentFadingOut);
    }

    #[test]
    fn toggle_mid_collapse_expands_again() {
        let (clock, mut dock) = dock_with(DockOptions::new().default_expanded(true));
        dock.collapse();
        advance(&clock, &mut dock, 300);
        assert_eq!(dock.stage(), Stage::HeightCollapsing);
        dock.toggle();
        assert_eq!(dock.stage(), Stage::WidthExpanding);
        advance(&clock, &mut dock, 2_000);
        assert_eq!(dock.stage(), Stage::FullyExpanded);
    }

    // -------------------------------------------------------------------------
    // Preemption
    // -------------------------------------------------------------------------

    #[test]
    fn collapse_preempts_expand_chain() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let (clock, dock) = dock();
        let mut dock = dock.on_stage_change(move |_, to| sink.borrow_mut().push(to));

        dock.expand();
        advance(&clock, &mut dock, 100);
        dock.collapse();
        assert_eq!(dock.pending_transitions(), 3);
        advance(&clock, &mut dock, 5_000);

        assert_eq!(dock.stage(), Stage::Collapsed);
        let seen = seen.borrow();
        assert!(!seen.contains(&Stage::HeightExpanding));
        assert!(!seen.contains(&Stage::FullyExpanded));
    }

    #[test]
    fn repeated_expand_restarts_the_chain() {
        let (clock, mut dock) = dock();
        dock.expand();
        advance(&clock, &mut dock, 300);
        dock.expand();
        assert_eq!(dock.stage(), Stage::WidthExpanding);
        // Measured from the second call now.
        advance(&clock, &mut dock, 300);
        assert_eq!(dock.stage(), Stage::WidthExpanding);
        advance(&clock, &mut dock, 100);
        assert_eq!(dock.stage(), Stage::HeightExpanding);
    }

    // -------------------------------------------------------------------------
    // Idempotence, disabled, reduced motion
    // -------------------------------------------------------------------------

    #[test]
    fn expand_when_open_is_noop() {
        let (_clock, mut dock) = dock_with(DockOptions::new().default_expanded(true));
        dock.expand();
        assert_eq!(dock.stage(), Stage::FullyExpanded);
        assert_eq!(dock.scheduler().cancel_calls(), 0);
        assert_eq!(dock.scheduler().chains_scheduled(), 0);
    }

    #[test]
    fn collapse_when_closed_is_noop() {
        let (_clock, mut dock) = dock();
        dock.collapse();
        assert_eq!(dock.stage(), Stage::Collapsed);
        assert_eq!(dock.scheduler().cancel_calls(), 0);
        assert_eq!(dock.scheduler().chains_scheduled(), 0);
    }

    #[test]
    fn disabled_ignores_commands() {
        let requested = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&requested);
        let (_clock, dock) = dock_with(DockOptions::new().disabled(true));
        let mut dock = dock.on_expand_requested(move || *counter.borrow_mut() += 1);

        dock.expand();
        dock.toggle();
        assert_eq!(dock.stage(), Stage::Collapsed);
        assert_eq!(*requested.borrow(), 0);

        dock.set_disabled(false);
        dock.expand();
        assert_eq!(dock.stage(), Stage::WidthExpanding);
        assert_eq!(*requested.borrow(), 1);
    }

    #[test]
    fn disabling_mid_chain_lets_it_finish() {
        let (clock, mut dock) = dock();
        dock.expand();
        dock.set_disabled(true);
        advance(&clock, &mut dock, 850);
        assert_eq!(dock.stage(), Stage::FullyExpanded);
        dock.collapse();
        assert_eq!(dock.stage(), Stage::FullyExpanded);
    }

    #[test]
    fn reduced_motion_jumps_synchronously() {
        let (_clock, mut dock) = dock_with(DockOptions::new().reduced_motion(true));
        dock.expand();
        assert_eq!(dock.stage(), Stage::FullyExpanded);
        assert_eq!(dock.pending_transitions(), 0);
        assert_eq!(dock.scheduler().chains_scheduled(), 0);

        dock.collapse();
        assert_eq!(dock.stage(), Stage::Collapsed);
        assert_eq!(dock.pending_transitions(), 0);
        assert!(dock.motion().width.duration.is_zero());
    }

    #[test]
    fn reduced_motion_cancels_running_chain() {
        let (clock, mut dock) = dock();
        dock.expand();
        dock.set_reduced_motion(true);
        dock.collapse();
        assert_eq!(dock.stage(), Stage::Collapsed);
        advance(&clock, &mut dock, 5_000);
        assert_eq!(dock.stage(), Stage::Collapsed);
    }

    // -------------------------------------------------------------------------
    // Hooks
    // -------------------------------------------------------------------------

    #[test]
    fn request_hooks_fire_at_issue_time() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (expand_log, collapse_log) = (Rc::clone(&log), Rc::clone(&log));
        let (clock, dock) = dock();
        let mut dock = dock
            .on_expand_requested(move || expand_log.borrow_mut().push("expand"))
            .on_collapse_requested(move || collapse_log.borrow_mut().push("collapse"));

        dock.expand();
        assert_eq!(*log.borrow(), vec!["expand"]);
        dock.collapse();
        assert_eq!(*log.borrow(), vec!["expand", "collapse"]);
        advance(&clock, &mut dock, 5_000);
        assert_eq!(log.borrow().len(), 2);
    }

    // -------------------------------------------------------------------------
    // Device class
    // -------------------------------------------------------------------------

    #[test]
    fn device_change_while_transient_waits_for_next_expand() {
        let (clock, mut dock) = dock();
        dock.expand();
        dock.set_device_class(DeviceClass::Mobile);
        assert_eq!(*dock.dimensions(), DockDimensions::desktop());
        advance(&clock, &mut dock, 850);
        assert_eq!(*dock.dimensions(), DockDimensions::desktop());

        dock.collapse();
        advance(&clock, &mut dock, 1_050);
        dock.expand();
        assert_eq!(*dock.dimensions(), DockDimensions::mobile());
    }

    #[test]
    fn device_change_while_settled_applies_now() {
        let (_clock, mut dock) = dock();
        dock.set_device_class(DeviceClass::Mobile);
        assert_eq!(dock.device_class(), DeviceClass::Mobile);
        assert_eq!(*dock.dimensions(), DockDimensions::mobile());
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    #[test]
    fn unmount_mid_chain_freezes_stage() {
        let (clock, mut dock) = dock();
        dock.expand();
        advance(&clock, &mut dock, 500);
        dock.unmount();
        assert_eq!(dock.pending_transitions(), 0);

        clock.advance_ms(5_000);
        assert_eq!(dock.poll(), 0);
        assert_eq!(dock.stage(), Stage::HeightExpanding);

        dock.collapse();
        dock.expand();
        assert_eq!(dock.stage(), Stage::HeightExpanding);
        assert!(dock.is_unmounted());
    }

    #[test]
    fn drop_cancels_borrowed_scheduler() {
        let clock = VirtualClock::new();
        let mut sched: ChainScheduler<Stage, VirtualClock> = ChainScheduler::new(clock.clone());
        {
            let mut dock = DockController::new(&mut sched);
            dock.collapse();
            dock.expand();
            assert_eq!(dock.pending_transitions(), 2);
        }
        assert_eq!(sched.pending(), 0);
        clock.advance_ms(5_000);
        assert!(sched.take_due().is_empty());
    }
}
