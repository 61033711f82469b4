#![forbid(unsafe_code)]

//! Stage → render parameters.
//!
//! [`DockVisuals::derive`] is a pure function of the current stage and the
//! dimension snapshot. The renderer reads the result; it never feeds back.

use fdock_core::geometry::Size;

use crate::dimensions::{DockDimensions, Length};
use crate::stage::Stage;

/// Content region visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentVisibility {
    /// Not shown.
    Hidden,
    /// Shown and interactive.
    Visible,
    /// On its way out.
    FadingOut,
}

/// Backdrop tint/blur intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundIntensity {
    /// Transparent, no blur.
    None,
    /// Animating toward `Full`.
    TransitioningIn,
    /// Fully tinted and blurred.
    Full,
    /// Animating toward `None`.
    TransitioningOut,
}

/// Everything the renderer needs to paint the dock for one stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockVisuals {
    /// Target panel width.
    pub width: Length,
    /// Target panel height.
    pub height: Length,
    /// Content region state.
    pub content: ContentVisibility,
    /// Backdrop state.
    pub background: BackgroundIntensity,
    /// Whether the content region may take focus.
    pub content_focusable: bool,
}

impl DockVisuals {
    /// Derive the render parameters for `stage`.
    pub fn derive(stage: Stage, dims: &DockDimensions) -> Self {
        use BackgroundIntensity as Bg;
        use ContentVisibility as Content;

        let (width, height, content, background) = match stage {
            Stage::Collapsed => (
                dims.collapsed_width,
                dims.collapsed_height,
                Content::Hidden,
                Bg::None,
            ),
            Stage::WidthExpanding => (
                dims.expanded_width,
                dims.collapsed_height,
                Content::Hidden,
                Bg::TransitioningIn,
            ),
            Stage::HeightExpanding => (
                dims.expanded_width,
                dims.expanded_height,
                Content::Hidden,
                Bg::TransitioningIn,
            ),
            Stage::FullyExpanded => (
                dims.expanded_width,
                dims.expanded_height,
                Content::Visible,
                Bg::Full,
            ),
            Stage::ContentFadingOut => (
                dims.expanded_width,
                dims.expanded_height,
                Content::FadingOut,
                Bg::Full,
            ),
            Stage::HeightCollapsing => (
                dims.expanded_width,
                dims.collapsed_height,
                Content::Hidden,
                Bg::TransitioningOut,
            ),
            Stage::WidthCollapsing => (
                dims.collapsed_width,
                dims.collapsed_height,
                Content::Hidden,
                Bg::None,
            ),
        };

        Self {
            width,
            height,
            content,
            background,
            content_focusable: stage == Stage::FullyExpanded,
        }
    }

    /// Target size in pixels for `viewport`.
    pub fn size(&self, viewport: Size) -> Size {
        Size::new(self.width.resolve(viewport), self.height.resolve(viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMS: DockDimensions = DockDimensions::px(0.0, 0.0, 500.0, 664.0);
    const VIEWPORT: Size = Size::new(1280.0, 800.0);

    fn size_at(stage: Stage) -> (f32, f32) {
        let size = DockVisuals::derive(stage, &DIMS).size(VIEWPORT);
        (size.width, size.height)
    }

    #[test]
    fn sizes_per_stage() {
        assert_eq!(size_at(Stage::Collapsed), (0.0, 0.0));
        assert_eq!(size_at(Stage::WidthExpanding), (500.0, 0.0));
        assert_eq!(size_at(Stage::HeightExpanding), (500.0, 664.0));
        assert_eq!(size_at(Stage::FullyExpanded), (500.0, 664.0));
        assert_eq!(size_at(Stage::ContentFadingOut), (500.0, 664.0));
        assert_eq!(size_at(Stage::HeightCollapsing), (500.0, 0.0));
        assert_eq!(size_at(Stage::WidthCollapsing), (0.0, 0.0));
    }

    #[test]
    fn content_only_visible_when_open() {
        for stage in Stage::ALL {
            let v = DockVisuals::derive(stage, &DIMS);
            assert_eq!(v.content == ContentVisibility::Visible, stage == Stage::FullyExpanded);
            assert_eq!(v.content_focusable, stage == Stage::FullyExpanded);
        }
        assert_eq!(
            DockVisuals::derive(Stage::ContentFadingOut, &DIMS).content,
            ContentVisibility::FadingOut
        );
    }

    #[test]
    fn background_table() {
        let bg = |s| DockVisuals::derive(s, &DIMS).background;
        assert_eq!(bg(Stage::Collapsed), BackgroundIntensity::None);
        assert_eq!(bg(Stage::WidthExpanding), BackgroundIntensity::TransitioningIn);
        assert_eq!(bg(Stage::HeightExpanding), BackgroundIntensity::TransitioningIn);
        assert_eq!(bg(Stage::FullyExpanded), BackgroundIntensity::Full);
        assert_eq!(bg(Stage::ContentFadingOut), BackgroundIntensity::Full);
        assert_eq!(bg(Stage::HeightCollapsing), BackgroundIntensity::TransitioningOut);
        assert_eq!(bg(Stage::WidthCollapsing), BackgroundIntensity::None);
    }

    #[test]
    fn symbolic_lengths_pass_through() {
        let dims = DockDimensions::desktop();
        let v = DockVisuals::derive(Stage::WidthExpanding, &dims);
        assert_eq!(v.width, dims.expanded_width);
        assert_eq!(v.height, dims.collapsed_height);
    }
}
