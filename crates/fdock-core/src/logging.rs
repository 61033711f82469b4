#![forbid(unsafe_code)]

//! Structured logging support.
//!
//! fdock logs through `tracing`. Library code only emits events; installing
//! a subscriber is the host's call. With the `tracing-json` feature enabled,
//! [`init_json_logging`] installs a JSON formatter filtered by `RUST_LOG`
//! (falling back to `fdock=info`).

pub use tracing::{debug, debug_span, error, info, trace, trace_span, warn};

/// Log target for controller commands and stage transitions.
pub const TARGET_CONTROLLER: &str = "fdock.controller";

/// Log target for timer chain scheduling and cancellation.
pub const TARGET_TIMER: &str = "fdock.timer";

/// Install a global JSON subscriber.
///
/// Returns `false` if a global subscriber was already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fdock=info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
