#![forbid(unsafe_code)]

//! Dock stages and the fixed transition table.
//!
//! State machine:
//!
//! ```text
//! Collapsed ─expand─▶ WidthExpanding ─▶ HeightExpanding ─▶ FullyExpanded
//! FullyExpanded ─collapse─▶ ContentFadingOut ─▶ HeightCollapsing ─▶ WidthCollapsing ─▶ Collapsed
//! ```
//!
//! A command may cut into either path from any non-terminal stage; the timed
//! edges above are the only ones a scheduled transition can take.

use std::fmt;

/// Current stage of the dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// Closed; only the launcher is shown.
    #[default]
    Collapsed,
    /// Panel growing horizontally.
    WidthExpanding,
    /// Panel growing vertically.
    HeightExpanding,
    /// Open with content visible.
    FullyExpanded,
    /// Content fading before the panel shrinks.
    ContentFadingOut,
    /// Panel shrinking vertically.
    HeightCollapsing,
    /// Panel shrinking horizontally.
    WidthCollapsing,
}

/// Which path a stage belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Moving toward `FullyExpanded`.
    Expanding,
    /// Moving toward `Collapsed`.
    Collapsing,
    /// Settled at a terminal stage.
    Settled,
}

impl Stage {
    /// Every stage, in path order.
    pub const ALL: [Stage; 7] = [
        Stage::Collapsed,
        Stage::WidthExpanding,
        Stage::HeightExpanding,
        Stage::FullyExpanded,
        Stage::ContentFadingOut,
        Stage::HeightCollapsing,
        Stage::WidthCollapsing,
    ];

    /// `Collapsed` or `FullyExpanded`.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Collapsed | Self::FullyExpanded)
    }

    /// Any stage that is waiting on a timer.
    #[inline]
    pub const fn is_transient(self) -> bool {
        !self.is_terminal()
    }

    /// The path this stage sits on.
    pub const fn direction(self) -> Direction {
        match self {
            Self::Collapsed | Self::FullyExpanded => Direction::Settled,
            Self::WidthExpanding | Self::HeightExpanding => Direction::Expanding,
            Self::ContentFadingOut | Self::HeightCollapsing | Self::WidthCollapsing => {
                Direction::Collapsing
            }
        }
    }

    /// The stage a scheduled transition leaves this one for.
    ///
    /// `None` for terminal stages, which never have a timer pending.
    pub const fn next_scheduled(self) -> Option<Stage> {
        match self {
            Self::WidthExpanding => Some(Self::HeightExpanding),
            Self::HeightExpanding => Some(Self::FullyExpanded),
            Self::ContentFadingOut => Some(Self::HeightCollapsing),
            Self::HeightCollapsing => Some(Self::WidthCollapsing),
            Self::WidthCollapsing => Some(Self::Collapsed),
            Self::Collapsed | Self::FullyExpanded => None,
        }
    }

    /// Whether a scheduled transition may move `self` to `to`.
    #[inline]
    pub fn can_advance_to(self, to: Stage) -> bool {
        self.next_scheduled() == Some(to)
    }

    /// Stable kebab-case name used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::WidthExpanding => "width-expanding",
            Self::HeightExpanding => "height-expanding",
            Self::FullyExpanded => "fully-expanded",
            Self::ContentFadingOut => "content-fading-out",
            Self::HeightCollapsing => "height-collapsing",
            Self::WidthCollapsing => "width-collapsing",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
