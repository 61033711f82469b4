#![forbid(unsafe_code)]

//! Transition delays.
//!
//! Every delay is measured from the moment the enclosing command was issued,
//! not from the previous transition. Within one chain the delays must be
//! strictly increasing so the stages fire in path order.

use std::fmt;

use web_time::Duration;

use crate::stage::Stage;

/// The five named delays that drive the two transition chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    width_expand: Duration,
    full_expand: Duration,
    content_fade: Duration,
    height_collapse: Duration,
    full_collapse: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            width_expand: Duration::from_millis(400),
            full_expand: Duration::from_millis(850),
            content_fade: Duration::from_millis(250),
            height_collapse: Duration::from_millis(650),
            full_collapse: Duration::from_millis(1050),
        }
    }
}

impl TransitionTiming {
    /// Build and validate a timing set.
    pub fn new(
        width_expand: Duration,
        full_expand: Duration,
        content_fade: Duration,
        height_collapse: Duration,
        full_collapse: Duration,
    ) -> Result<Self, TimingError> {
        let timing = Self {
            width_expand,
            full_expand,
            content_fade,
            height_collapse,
            full_collapse,
        };
        timing.check()?;
        Ok(timing)
    }

    /// Build from millisecond values.
    pub fn from_millis(
        width_expand: u64,
        full_expand: u64,
        content_fade: u64,
        height_collapse: u64,
        full_collapse: u64,
    ) -> Result<Self, TimingError> {
        Self::new(
            Duration::from_millis(width_expand),
            Duration::from_millis(full_expand),
            Duration::from_millis(content_fade),
            Duration::from_millis(height_collapse),
            Duration::from_millis(full_collapse),
        )
    }

    fn check(&self) -> Result<(), TimingError> {
        if self.width_expand.is_zero() {
            return Err(TimingError::Zero("width_expand"));
        }
        if self.content_fade.is_zero() {
            return Err(TimingError::Zero("content_fade"));
        }
        if self.full_expand <= self.width_expand {
            return Err(TimingError::NotIncreasing {
                earlier: "width_expand",
                later: "full_expand",
            });
        }
        if self.height_collapse <= self.content_fade {
            return Err(TimingError::NotIncreasing {
                earlier: "content_fade",
                later: "height_collapse",
            });
        }
        if self.full_collapse <= self.height_collapse {
            return Err(TimingError::NotIncreasing {
                earlier: "height_collapse",
                later: "full_collapse",
            });
        }
        Ok(())
    }

    /// Delay until `HeightExpanding`.
    pub fn width_expand(&self) -> Duration {
        self.width_expand
    }

    /// Delay until `FullyExpanded`.
    pub fn full_expand(&self) -> Duration {
        self.full_expand
    }

    /// Delay until `HeightCollapsing`.
    pub fn content_fade(&self) -> Duration {
        self.content_fade
    }

    /// Delay until `WidthCollapsing`.
    pub fn height_collapse(&self) -> Duration {
        self.height_collapse
    }

    /// Delay until `Collapsed`.
    pub fn full_collapse(&self) -> Duration {
        self.full_collapse
    }

    /// Steps scheduled by `expand()`.
    pub fn expand_chain(&self) -> Vec<(Duration, Stage)> {
        vec![
            (self.width_expand, Stage::HeightExpanding),
            (self.full_expand, Stage::FullyExpanded),
        ]
    }

    /// Steps scheduled by `collapse()`.
    pub fn collapse_chain(&self) -> Vec<(Duration, Stage)> {
        vec![
            (self.content_fade, Stage::HeightCollapsing),
            (self.height_collapse, Stage::WidthCollapsing),
            (self.full_collapse, Stage::Collapsed),
        ]
    }
}

/// Invalid delay configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimingError {
    /// The first delay of a chain is zero, so its transient stage would
    /// never be observable.
    Zero(&'static str),
    /// A later stage would fire no later than an earlier one.
    NotIncreasing {
        /// Delay that must be smaller.
        earlier: &'static str,
        /// Delay that must be larger.
        later: &'static str,
    },
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero(name) => write!(f, "timing.{name} must be > 0"),
            Self::NotIncreasing { earlier, later } => {
                write!(f, "timing.{later} must be greater than timing.{earlier}")
            }
        }
    }
}

impl std::error::Error for TimingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dock_constants() {
        let t = TransitionTiming::default();
        assert_eq!(t.width_expand(), Duration::from_millis(400));
        assert_eq!(t.full_expand(), Duration::from_millis(850));
        assert_eq!(t.content_fade(), Duration::from_millis(250));
        assert_eq!(t.height_collapse(), Duration::from_millis(650));
        assert_eq!(t.full_collapse(), Duration::from_millis(1050));
    }

    #[test]
    fn defaults_validate() {
        let t = TransitionTiming::default();
        assert_eq!(TransitionTiming::from_millis(400, 850, 250, 650, 1050), Ok(t));
    }

    #[test]
    fn rejects_out_of_order_expand() {
        assert_eq!(
            TransitionTiming::from_millis(850, 400, 250, 650, 1050),
            Err(TimingError::NotIncreasing {
                earlier: "width_expand",
                later: "full_expand"
            })
        );
    }

    #[test]
    fn rejects_equal_collapse_delays() {
        let err = TransitionTiming::from_millis(400, 850, 250, 650, 650).unwrap_err();
        assert_eq!(
            err.to_string(),
            "timing.full_collapse must be greater than timing.height_collapse"
        );
    }

    #[test]
    fn rejects_zero_first_delay() {
        assert_eq!(
            TransitionTiming::from_millis(0, 850, 250, 650, 1050),
            Err(TimingError::Zero("width_expand"))
        );
    }

    #[test]
    fn chains_follow_paths() {
        let t = TransitionTiming::default();
        let expand: Vec<_> = t.expand_chain().into_iter().map(|(_, s)| s).collect();
        assert_eq!(expand, vec![Stage::HeightExpanding, Stage::FullyExpanded]);
        let collapse: Vec<_> = t.collapse_chain().into_iter().map(|(_, s)| s).collect();
        assert_eq!(
            collapse,
            vec![
                Stage::HeightCollapsing,
                Stage::WidthCollapsing,
                Stage::Collapsed
            ]
        );
    }
}
