#![forbid(unsafe_code)]

//! Core: input events, geometry, and timer scheduling for fdock.
//!
//! # Role in fdock
//! `fdock-core` is the leaf crate. It owns the normalized input types the
//! dock's input adapters consume, the pixel geometry used for outside-click
//! hit testing, and the injectable [`timer::TimerScheduler`] port that drives
//! every timed stage transition.
//!
//! # How it fits in the system
//! The controller crate (`fdock`) depends on this crate for its clock and
//! scheduler. Nothing here knows about dock stages: the scheduler carries an
//! opaque payload per step, so the same chain machinery can be exercised with
//! plain integers in tests.

pub mod event;
pub mod geometry;
pub mod logging;
pub mod timer;

pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};
