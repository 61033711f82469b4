#![forbid(unsafe_code)]

//! Dock dimensions per device class.
//!
//! Sizes are kept symbolic ([`Length`]) until the renderer resolves them
//! against a viewport, so `min(90vw, 500px)` stays `min(90vw, 500px)` in the
//! controller and only becomes a pixel count at paint time.
//!
//! The controller snapshots one [`DockDimensions`] set at the start of each
//! `expand()`. A device-class change while a chain is running is picked up by
//! the next `expand()`, never mid-animation.

use std::fmt;
use std::str::FromStr;

use fdock_core::geometry::Size;

/// Viewport width below which a device counts as mobile.
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

/// Mobile vs. desktop breakpoint signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "policy-config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "policy-config", serde(rename_all = "lowercase"))]
pub enum DeviceClass {
    /// Narrow viewport.
    Mobile,
    /// Everything else.
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Classify by viewport width using [`MOBILE_BREAKPOINT_PX`].
    pub fn from_viewport_width(width: f32) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Map the boolean signal most hosts expose.
    pub const fn from_is_mobile(is_mobile: bool) -> Self {
        if is_mobile { Self::Mobile } else { Self::Desktop }
    }
}

// ---------------------------------------------------------------------------
// Length
// ---------------------------------------------------------------------------

/// Viewport axis for relative units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// `vw`
    Horizontal,
    /// `vh`
    Vertical,
}

impl Axis {
    fn unit(self) -> &'static str {
        match self {
            Self::Horizontal => "vw",
            Self::Vertical => "vh",
        }
    }

    fn pick(self, viewport: Size) -> f32 {
        match self {
            Self::Horizontal => viewport.width,
            Self::Vertical => viewport.height,
        }
    }
}

/// A dock dimension in the CSS-like subset the dock uses.
///
/// Text forms: `64px`, `80vh`, `min(90vw, 500px)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "policy-config",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Length {
    /// Absolute pixels.
    Px(f32),
    /// Percentage of a viewport axis.
    Viewport {
        /// 0-100.
        percent: f32,
        /// Which axis the percentage applies to.
        axis: Axis,
    },
    /// The smaller of a viewport percentage and a pixel cap.
    MinViewport {
        /// 0-100.
        percent: f32,
        /// Which axis the percentage applies to.
        axis: Axis,
        /// Upper bound in pixels.
        max_px: f32,
    },
}

impl Length {
    /// Pixel value for a given viewport.
    pub fn resolve(&self, viewport: Size) -> f32 {
        match *self {
            Self::Px(px) => px,
            Self::Viewport { percent, axis } => axis.pick(viewport) * percent / 100.0,
            Self::MinViewport {
                percent,
                axis,
                max_px,
            } => (axis.pick(viewport) * percent / 100.0).min(max_px),
        }
    }

    /// The pixel value when it does not depend on the viewport.
    pub fn as_px(&self) -> Option<f32> {
        match *self {
            Self::Px(px) => Some(px),
            Self::Viewport { .. } | Self::MinViewport { .. } => None,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Viewport { percent, axis } => write!(f, "{percent}{}", axis.unit()),
            Self::MinViewport {
                percent,
                axis,
                max_px,
            } => write!(f, "min({percent}{}, {max_px}px)", axis.unit()),
        }
    }
}

enum Term {
    Px(f32),
    Viewport(f32, Axis),
}

fn parse_number(text: &str, input: &str) -> Result<f32, LengthParseError> {
    let value: f32 = text
        .trim()
        .parse()
        .map_err(|_| LengthParseError::new(input, "expected a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(LengthParseError::new(input, "value must be finite and non-negative"));
    }
    Ok(value)
}

fn parse_term(text: &str, input: &str) -> Result<Term, LengthParseError> {
    let text = text.trim();
    if let Some(num) = text.strip_suffix("px") {
        return Ok(Term::Px(parse_number(num, input)?));
    }
    if let Some(num) = text.strip_suffix("vw") {
        return Ok(Term::Viewport(parse_number(num, input)?, Axis::Horizontal));
    }
    if let Some(num) = text.strip_suffix("vh") {
        return Ok(Term::Viewport(parse_number(num, input)?, Axis::Vertical));
    }
    Err(LengthParseError::new(input, "expected a px, vw, or vh unit"))
}

impl FromStr for Length {
    type Err = LengthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some(args) = trimmed
            .strip_prefix("min(")
            .and_then(|rest| rest.strip_suffix(')'))
        else {
            return match parse_term(trimmed, s)? {
                Term::Px(px) => Ok(Self::Px(px)),
                Term::Viewport(percent, axis) => Ok(Self::Viewport { percent, axis }),
            };
        };

        let mut parts = args.split(',');
        let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(LengthParseError::new(s, "min() takes exactly two arguments"));
        };
        match (parse_term(first, s)?, parse_term(second, s)?) {
            (Term::Viewport(percent, axis), Term::Px(max_px))
            | (Term::Px(max_px), Term::Viewport(percent, axis)) => Ok(Self::MinViewport {
                percent,
                axis,
                max_px,
            }),
            _ => Err(LengthParseError::new(
                s,
                "min() needs one viewport term and one px term",
            )),
        }
    }
}

impl TryFrom<String> for Length {
    type Error = LengthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Length> for String {
    fn from(value: Length) -> Self {
        value.to_string()
    }
}

/// Text that is not a valid [`Length`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthParseError {
    input: String,
    reason: &'static str,
}

impl LengthParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The rejected text.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for LengthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid length {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for LengthParseError {}

// ---------------------------------------------------------------------------
// Dimension sets
// ---------------------------------------------------------------------------

/// The four sizes the controller switches between.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(serde::Serialize, serde::Deserialize))]
pub struct DockDimensions {
    /// Launcher width.
    pub collapsed_width: Length,
    /// Launcher height.
    pub collapsed_height: Length,
    /// Open panel width.
    pub expanded_width: Length,
    /// Open panel height.
    pub expanded_height: Length,
}

impl DockDimensions {
    /// Fixed pixel sizes, mostly for tests and headless hosts.
    pub const fn px(
        collapsed_width: f32,
        collapsed_height: f32,
        expanded_width: f32,
        expanded_height: f32,
    ) -> Self {
        Self {
            collapsed_width: Length::Px(collapsed_width),
            collapsed_height: Length::Px(collapsed_height),
            expanded_width: Length::Px(expanded_width),
            expanded_height: Length::Px(expanded_height),
        }
    }

    /// Desktop defaults.
    pub const fn desktop() -> Self {
        Self {
            collapsed_width: Length::MinViewport {
                percent: 90.0,
                axis: Axis::Horizontal,
                max_px: 64.0,
            },
            collapsed_height: Length::Px(64.0),
            expanded_width: Length::MinViewport {
                percent: 90.0,
                axis: Axis::Horizontal,
                max_px: 500.0,
            },
            expanded_height: Length::MinViewport {
                percent: 80.0,
                axis: Axis::Vertical,
                max_px: 664.0,
            },
        }
    }

    /// Mobile defaults.
    pub const fn mobile() -> Self {
        Self {
            collapsed_width: Length::MinViewport {
                percent: 94.0,
                axis: Axis::Horizontal,
                max_px: 54.0,
            },
            collapsed_height: Length::Px(54.0),
            expanded_width: Length::MinViewport {
                percent: 96.0,
                axis: Axis::Horizontal,
                max_px: 300.0,
            },
            expanded_height: Length::MinViewport {
                percent: 75.0,
                axis: Axis::Vertical,
                max_px: 554.0,
            },
        }
    }

    /// Collapsed size in pixels.
    pub fn collapsed_size(&self, viewport: Size) -> Size {
        Size::new(
            self.collapsed_width.resolve(viewport),
            self.collapsed_height.resolve(viewport),
        )
    }

    /// Expanded size in pixels.
    pub fn expanded_size(&self, viewport: Size) -> Size {
        Size::new(
            self.expanded_width.resolve(viewport),
            self.expanded_height.resolve(viewport),
        )
    }
}

/// One dimension set per device class.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct DockConfig {
    /// Used when the device class is `Desktop`.
    pub desktop: DockDimensions,
    /// Used when the device class is `Mobile`.
    pub mobile: DockDimensions,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            desktop: DockDimensions::desktop(),
            mobile: DockDimensions::mobile(),
        }
    }
}

impl DockConfig {
    /// Same dimensions for every device class.
    pub const fn uniform(dimensions: DockDimensions) -> Self {
        Self {
            desktop: dimensions,
            mobile: dimensions,
        }
    }

    /// Pick the set for `device`.
    pub fn resolve(&self, device: DeviceClass) -> DockDimensions {
        match device {
            DeviceClass::Desktop => self.desktop,
            DeviceClass::Mobile => self.mobile,
        }
    }
}
