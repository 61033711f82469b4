#![forbid(unsafe_code)]

//! Dock configuration as data.
//!
//! [`DockPolicy`] captures the delays, the per-device dimension sets and the
//! mount-time flags of a dock so hosts can ship them in a config file
//! instead of code.
//!
//! # Loading
//!
//! ```toml
//! # dock.toml
//! default_expanded = false
//!
//! [timing]
//! width_expand_ms = 300
//! full_expand_ms = 700
//!
//! [dimensions.desktop]
//! collapsed_width = "min(90vw, 64px)"
//! collapsed_height = "64px"
//! expanded_width = "min(90vw, 500px)"
//! expanded_height = "min(80vh, 664px)"
//! ```
//!
//! ```rust,ignore
//! let policy = DockPolicy::from_toml_file("dock.toml")?;
//! let options = policy.to_options()?;
//! ```
//!
//! # Defaults
//!
//! Every field defaults to the built-in dock values, so an empty file
//! produces the same dock as `DockOptions::default()`.

#[cfg(feature = "policy-config")]
use std::path::Path;

#[cfg(feature = "policy-config")]
use serde::{Deserialize, Serialize};

use crate::controller::DockOptions;
use crate::dimensions::{DockConfig, DockDimensions, Length};
use crate::input::{DEFAULT_TOGGLE_LABEL, ToggleControl};
use crate::timing::TransitionTiming;

// ---------------------------------------------------------------------------
// Top-level DockPolicy
// ---------------------------------------------------------------------------

/// Everything a host can configure about one dock.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct DockPolicy {
    /// Stage delays.
    pub timing: TimingPolicy,

    /// Per-device dimension sets.
    pub dimensions: DockConfig,

    /// Mount fully expanded. Default: false.
    pub default_expanded: bool,

    /// Mount with commands disabled. Default: false.
    pub disabled: bool,

    /// Accessible name for the toggle control.
    pub toggle_aria_label: String,
}

impl Default for DockPolicy {
    fn default() -> Self {
        Self {
            timing: TimingPolicy::default(),
            dimensions: DockConfig::default(),
            default_expanded: false,
            disabled: false,
            toggle_aria_label: DEFAULT_TOGGLE_LABEL.to_owned(),
        }
    }
}

impl DockPolicy {
    /// Load from a TOML string.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, PolicyConfigError> {
        toml::from_str(s).map_err(PolicyConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PolicyConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PolicyConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(s: &str) -> Result<Self, PolicyConfigError> {
        serde_json::from_str(s).map_err(PolicyConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PolicyConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Check every parameter.
    ///
    /// Returns one message per problem; an empty list means the policy is
    /// usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Err(e) = self.timing.to_timing() {
            errors.push(e.to_string());
        }

        check_dimensions("dimensions.desktop", &self.dimensions.desktop, &mut errors);
        check_dimensions("dimensions.mobile", &self.dimensions.mobile, &mut errors);

        if self.toggle_aria_label.trim().is_empty() {
            errors.push("toggle_aria_label must not be empty".into());
        }

        errors
    }

    /// Validated timing and dimension config.
    pub fn into_parts(self) -> Result<(TransitionTiming, DockConfig), PolicyConfigError> {
        self.parts()
    }

    fn parts(&self) -> Result<(TransitionTiming, DockConfig), PolicyConfigError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(PolicyConfigError::Validation(errors));
        }
        let timing = self
            .timing
            .to_timing()
            .map_err(|e| PolicyConfigError::Validation(vec![e.to_string()]))?;
        Ok((timing, self.dimensions))
    }

    /// Controller options for this policy.
    pub fn to_options(&self) -> Result<DockOptions, PolicyConfigError> {
        let (timing, config) = self.parts()?;
        Ok(DockOptions::new()
            .timing(timing)
            .config(config)
            .default_expanded(self.default_expanded)
            .disabled(self.disabled))
    }

    /// Toggle control carrying the configured label.
    #[must_use]
    pub fn toggle_control(&self) -> ToggleControl {
        ToggleControl::new(self.toggle_aria_label.clone())
    }
}

fn check_dimensions(section: &str, dims: &DockDimensions, errors: &mut Vec<String>) {
    let fields = [
        ("collapsed_width", dims.collapsed_width),
        ("collapsed_height", dims.collapsed_height),
        ("expanded_width", dims.expanded_width),
        ("expanded_height", dims.expanded_height),
    ];
    for (name, length) in fields {
        if let Some(problem) = length_problem(length) {
            errors.push(format!("{section}.{name} {problem}, got {length}"));
        }
    }
}

fn length_problem(length: Length) -> Option<&'static str> {
    let (percent, px) = match length {
        Length::Px(px) => (None, Some(px)),
        Length::Viewport { percent, .. } => (Some(percent), None),
        Length::MinViewport {
            percent, max_px, ..
        } => (Some(percent), Some(max_px)),
    };
    if px.is_some_and(|v| !v.is_finite() || v < 0.0) {
        return Some("must be a finite, non-negative pixel value");
    }
    if percent.is_some_and(|p| !(0.0..=100.0).contains(&p)) {
        return Some("must use a viewport percentage in [0, 100]");
    }
    None
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Stage delays in milliseconds, measured from the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct TimingPolicy {
    /// WidthExpanding → HeightExpanding. Default: 400.
    pub width_expand_ms: u64,
    /// HeightExpanding → FullyExpanded. Default: 850.
    pub full_expand_ms: u64,
    /// ContentFadingOut → HeightCollapsing. Default: 250.
    pub content_fade_ms: u64,
    /// HeightCollapsing → WidthCollapsing. Default: 650.
    pub height_collapse_ms: u64,
    /// WidthCollapsing → Collapsed. Default: 1050.
    pub full_collapse_ms: u64,
}

impl Default for TimingPolicy {
    fn default() -> Self {
        Self::from(TransitionTiming::default())
    }
}

impl From<TransitionTiming> for TimingPolicy {
    fn from(timing: TransitionTiming) -> Self {
        let ms = |d: web_time::Duration| u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        Self {
            width_expand_ms: ms(timing.width_expand()),
            full_expand_ms: ms(timing.full_expand()),
            content_fade_ms: ms(timing.content_fade()),
            height_collapse_ms: ms(timing.height_collapse()),
            full_collapse_ms: ms(timing.full_collapse()),
        }
    }
}

impl TimingPolicy {
    /// Build the validated [`TransitionTiming`].
    pub fn to_timing(&self) -> Result<TransitionTiming, crate::timing::TimingError> {
        TransitionTiming::from_millis(
            self.width_expand_ms,
            self.full_expand_ms,
            self.content_fade_ms,
            self.height_collapse_ms,
            self.full_collapse_ms,
        )
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a dock policy.
#[derive(Debug)]
pub enum PolicyConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "policy-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "policy-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for PolicyConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for PolicyConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
