#![forbid(unsafe_code)]

//! fdock
//!
//! A staged, cancellable expand/collapse controller for a floating dock: a
//! small launcher that opens into a larger panel through width, height and
//! content phases, and closes through the reverse.
//!
//! # Key Components
//!
//! - [`DockController`] - Owns the stage and drives the timed transitions
//! - [`Stage`] - The seven-stage lifecycle
//! - [`TransitionTiming`] - Delays between stages
//! - [`DockConfig`] / [`DockDimensions`] - Per-device sizes as [`Length`]s
//! - [`DockVisuals`] - Render parameters derived from the current stage
//! - [`input`] - Keyboard, outside-pointer and toggle-control adapters
//! - [`DockPolicy`] - TOML/JSON loadable configuration
//!
//! # How it fits in the system
//! Timers, input events and geometry come from `fdock-core`. The host owns
//! the event loop: it forwards events to the adapters in [`input`], calls
//! [`DockController::poll`] when it wakes, and paints [`DockVisuals`].

pub mod controller;
pub mod dimensions;
pub mod input;
pub mod motion;
pub mod policy_config;
pub mod stage;
pub mod timing;
pub mod visuals;

pub use controller::{DockController, DockOptions};
pub use dimensions::{
    Axis, DeviceClass, DockConfig, DockDimensions, Length, LengthParseError, MOBILE_BREAKPOINT_PX,
};
pub use input::{
    BoundaryTest, DockInput, InputOutcome, KeyBindings, KeyboardAdapter, OutsideWatcher,
    ToggleControl, ToggleIcon,
};
pub use motion::{CubicBezier, DockMotion, Tween};
pub use policy_config::{DockPolicy, PolicyConfigError, TimingPolicy};
pub use stage::{Direction, Stage};
pub use timing::{TimingError, TransitionTiming};
pub use visuals::{BackgroundIntensity, ContentVisibility, DockVisuals};

pub use fdock_core::timer::{ChainScheduler, Clock, SystemClock, TimerScheduler, VirtualClock};
