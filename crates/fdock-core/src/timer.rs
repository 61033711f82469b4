#![forbid(unsafe_code)]

//! Timer chains: delayed, cancellable step sequences on an injectable clock.
//!
//! A chain is a list of `(offset, payload)` steps, all measured from the
//! moment the chain was scheduled. The scheduler holds zero or one live
//! chain; scheduling a new one or calling [`TimerScheduler::cancel_all`]
//! drops every remaining step of the old one.
//!
//! Nothing runs on its own. The host (or the controller on its behalf) calls
//! [`TimerScheduler::pop_due`] at its cooperative suspension point and gets
//! back the payloads whose deadlines have passed, in deadline order.
//!
//! # Invariants
//!
//! 1. At most one chain is live at any instant.
//! 2. Steps of a chain are yielded in non-decreasing deadline order; steps
//!    with equal offsets keep their insertion order.
//! 3. After `cancel_all()` no step of the cancelled chain is ever yielded,
//!    even if its deadline has already elapsed.
//! 4. [`ChainHandle`]s are never reused, so a stale handle is never live.
//!
//! # Clocks
//!
//! [`SystemClock`] reads a monotonic wall clock. [`VirtualClock`] is advanced
//! by hand; clones share one time source so a test can keep a copy while the
//! scheduler owns another.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use web_time::{Duration, Instant};

use crate::logging::TARGET_TIMER;

// ---------------------------------------------------------------------------
// Clocks
// ---------------------------------------------------------------------------

/// A monotonic time source, reported as elapsed time since its own epoch.
pub trait Clock {
    /// Current time.
    fn now(&self) -> Duration;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// A manually advanced clock for deterministic tests and replays.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    now: Rc<Cell<Duration>>,
}

impl VirtualClock {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let next = self.now.get().saturating_add(delta);
        self.now.set(next);
    }

    /// Convenience for `advance(Duration::from_millis(ms))`.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Jump to an absolute time. Earlier times are ignored; the clock never
    /// runs backwards.
    pub fn set(&self, at: Duration) {
        if at > self.now.get() {
            self.now.set(at);
        }
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

// ---------------------------------------------------------------------------
// Scheduler port
// ---------------------------------------------------------------------------

/// Opaque identity of one scheduled chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainHandle {
    generation: u64,
}

impl ChainHandle {
    /// Monotonic generation number; later chains have larger values.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Holds zero-or-one chain of delayed payloads.
pub trait TimerScheduler<T> {
    /// Current time on the scheduler's clock.
    fn now(&self) -> Duration;

    /// Replace any live chain with `steps`, each offset measured from now.
    fn schedule_chain(&mut self, steps: Vec<(Duration, T)>) -> ChainHandle;

    /// Drop every pending step. Returns how many were dropped.
    fn cancel_all(&mut self) -> usize;

    /// Number of steps still pending.
    fn pending(&self) -> usize;

    /// True while `handle` names the chain that still has pending steps.
    fn is_live(&self, handle: ChainHandle) -> bool;

    /// Deadline of the next pending step, if any.
    fn next_deadline(&self) -> Option<Duration>;

    /// Remove and return the earliest step whose deadline has passed.
    fn pop_due(&mut self) -> Option<T>;

    /// Remove and return every step whose deadline has passed, in order.
    fn take_due(&mut self) -> Vec<T> {
        let mut due = Vec::new();
        while let Some(payload) = self.pop_due() {
            due.push(payload);
        }
        due
    }
}

impl<T, S: TimerScheduler<T> + ?Sized> TimerScheduler<T> for &mut S {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn schedule_chain(&mut self, steps: Vec<(Duration, T)>) -> ChainHandle {
        (**self).schedule_chain(steps)
    }

    fn cancel_all(&mut self) -> usize {
        (**self).cancel_all()
    }

    fn pending(&self) -> usize {
        (**self).pending()
    }

    fn is_live(&self, handle: ChainHandle) -> bool {
        (**self).is_live(handle)
    }

    fn next_deadline(&self) -> Option<Duration> {
        (**self).next_deadline()
    }

    fn pop_due(&mut self) -> Option<T> {
        (**self).pop_due()
    }
}

// ---------------------------------------------------------------------------
// ChainScheduler
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Step<T> {
    deadline: Duration,
    payload: T,
}

/// The standard [`TimerScheduler`] over any [`Clock`].
#[derive(Debug)]
pub struct ChainScheduler<T, C: Clock = SystemClock> {
    clock: C,
    steps: VecDeque<Step<T>>,
    live: Option<ChainHandle>,
    next_generation: u64,
    chains_scheduled: u64,
    cancel_calls: u64,
}

impl<T, C: Clock> ChainScheduler<T, C> {
    /// Create an empty scheduler on `clock`.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            steps: VecDeque::new(),
            live: None,
            next_generation: 1,
            chains_scheduled: 0,
            cancel_calls: 0,
        }
    }

    /// The underlying clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Total chains ever scheduled.
    pub fn chains_scheduled(&self) -> u64 {
        self.chains_scheduled
    }

    /// Total `cancel_all` invocations, including ones with nothing pending.
    pub fn cancel_calls(&self) -> u64 {
        self.cancel_calls
    }

    fn drop_pending(&mut self) -> usize {
        let dropped = self.steps.len();
        self.steps.clear();
        self.live = None;
        dropped
    }
}

impl<T> ChainScheduler<T, SystemClock> {
    /// Scheduler on a fresh [`SystemClock`].
    pub fn system() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<T, C: Clock> TimerScheduler<T> for ChainScheduler<T, C> {
    fn now(&self) -> Duration {
        self.clock.now()
    }

    fn schedule_chain(&mut self, steps: Vec<(Duration, T)>) -> ChainHandle {
        let replaced = self.drop_pending();
        let now = self.clock.now();

        let handle = ChainHandle {
            generation: self.next_generation,
        };
        self.next_generation += 1;
        self.chains_scheduled += 1;

        let mut ordered: Vec<Step<T>> = steps
            .into_iter()
            .map(|(offset, payload)| Step {
                deadline: now.checked_add(offset).unwrap_or(Duration::MAX),
                payload,
            })
            .collect();
        // Stable sort keeps insertion order for equal offsets.
        ordered.sort_by_key(|step| step.deadline);
        self.steps.extend(ordered);

        if !self.steps.is_empty() {
            self.live = Some(handle);
        }

        tracing::trace!(
            target: TARGET_TIMER,
            generation = handle.generation,
            steps = self.steps.len(),
            replaced = replaced,
            "timer chain scheduled"
        );
        handle
    }

    fn cancel_all(&mut self) -> usize {
        self.cancel_calls += 1;
        let live = self.live.map(ChainHandle::generation);
        let dropped = self.drop_pending();
        if dropped > 0 {
            tracing::trace!(
                target: TARGET_TIMER,
                generation = live,
                dropped = dropped,
                "timer chain cancelled"
            );
        }
        dropped
    }

    fn pending(&self) -> usize {
        self.steps.len()
    }

    fn is_live(&self, handle: ChainHandle) -> bool {
        self.live == Some(handle)
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.steps.front().map(|step| step.deadline)
    }

    fn pop_due(&mut self) -> Option<T> {
        let now = self.clock.now();
        if self.steps.front()?.deadline > now {
            return None;
        }
        let step = self.steps.pop_front()?;
        if self.steps.is_empty() {
            self.live = None;
        }
        Some(step.payload)
    }
}
