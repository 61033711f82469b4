#![forbid(unsafe_code)]

//! Motion hints for the renderer.
//!
//! The controller decides *what* size the dock should have; the renderer
//! decides *how* to tween there. These hints carry the per-property tween
//! durations and easing curves the dock was designed with, so every host
//! animates the same way.
//!
//! # Invariants
//!
//! - `CubicBezier::apply` maps 0.0 → 0.0 and 1.0 → 1.0 exactly
//! - Inputs outside [0, 1] are clamped

use web_time::Duration;

/// A CSS `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// Material "standard" curve, used for width, background and icon.
    pub const STANDARD: Self = Self::new(0.4, 0.0, 0.2, 1.0);

    /// Quart-like ease-out, used for height.
    pub const EASE_OUT_QUART: Self = Self::new(0.25, 1.0, 0.5, 1.0);

    /// CSS `ease`.
    pub const EASE: Self = Self::new(0.25, 0.1, 0.25, 1.0);

    /// Create a curve. `x1` and `x2` are clamped to [0, 1] so the curve
    /// stays a function of time.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: clamp_unit(x1),
            y1,
            x2: clamp_unit(x2),
            y2,
        }
    }

    /// Control points as `[x1, y1, x2, y2]`.
    pub const fn points(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let inv = 1.0 - t;
        3.0 * inv * inv * t * a1 + 3.0 * inv * t * t * a2 + t * t * t
    }

    /// Eased progress for linear progress `x`.
    pub fn apply(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        // x(t) is monotonic on [0, 1] for clamped x control points.
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        let mut t = x;
        for _ in 0..48 {
            let sx = Self::sample(self.x1, self.x2, t);
            if (sx - x).abs() < 1e-7 {
                break;
            }
            if sx < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, t)
    }
}

const fn clamp_unit(v: f64) -> f64 {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

/// One animated property: how long and along which curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Tween length.
    pub duration: Duration,
    /// Timing function.
    pub easing: CubicBezier,
}

impl Tween {
    /// Create a tween.
    pub const fn new(duration: Duration, easing: CubicBezier) -> Self {
        Self { duration, easing }
    }

    /// Eased progress after `elapsed`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let linear = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.easing.apply(linear)
    }
}

/// Per-property tweens for the dock container, content and launcher icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockMotion {
    /// Panel width.
    pub width: Tween,
    /// Panel height.
    pub height: Tween,
    /// Backdrop tint and blur.
    pub background: Tween,
    /// Content fade.
    pub content: Tween,
    /// Launcher/close icon swap.
    pub icon: Tween,
}

impl Default for DockMotion {
    fn default() -> Self {
        Self {
            width: Tween::new(Duration::from_millis(450), CubicBezier::STANDARD),
            height: Tween::new(Duration::from_millis(450), CubicBezier::EASE_OUT_QUART),
            background: Tween::new(Duration::from_millis(300), CubicBezier::STANDARD),
            content: Tween::new(Duration::from_millis(500), CubicBezier::EASE),
            icon: Tween::new(Duration::from_millis(300), CubicBezier::STANDARD),
        }
    }
}

impl DockMotion {
    /// Hints for reduced-motion users: every tween is instant.
    pub fn reduced() -> Self {
        let instant = |t: Tween| Tween::new(Duration::ZERO, t.easing);
        let base = Self::default();
        Self {
            width: instant(base.width),
            height: instant(base.height),
            background: instant(base.background),
            content: instant(base.content),
            icon: instant(base.icon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for curve in [CubicBezier::STANDARD, CubicBezier::EASE_OUT_QUART, CubicBezier::EASE] {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
        }
    }

    #[test]
    fn clamps_input() {
        assert_eq!(CubicBezier::STANDARD.apply(-0.5), 0.0);
        assert_eq!(CubicBezier::STANDARD.apply(1.5), 1.0);
    }

    #[test]
    fn standard_curve_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = CubicBezier::STANDARD.apply(f64::from(i) / 100.0);
            assert!(v >= prev - 1e-6, "not monotonic at {i}: {v} < {prev}");
            prev = v;
        }
    }

    #[test]
    fn linear_control_points_are_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for x in [0.1, 0.25, 0.5, 0.9] {
            assert!((linear.apply(x) - x).abs() < 1e-4, "x={x}");
        }
    }

    #[test]
    fn ease_out_runs_ahead_of_linear() {
        assert!(CubicBezier::EASE_OUT_QUART.apply(0.5) > 0.5);
    }

    #[test]
    fn x_controls_are_clamped() {
        let curve = CubicBezier::new(-1.0, 0.0, 2.0, 1.0);
        assert_eq!(curve.points(), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn tween_progress() {
        let tween = DockMotion::default().width;
        assert_eq!(tween.progress(Duration::ZERO), 0.0);
        assert_eq!(tween.progress(Duration::from_millis(450)), 1.0);
        assert_eq!(tween.progress(Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn reduced_motion_is_instant() {
        let reduced = DockMotion::reduced();
        assert!(reduced.height.duration.is_zero());
        assert_eq!(reduced.height.progress(Duration::ZERO), 1.0);
        assert_eq!(reduced.height.easing, CubicBezier::EASE_OUT_QUART);
    }
}
