//! Keyframe sequence construction for frame activation.
//!
//! One activation produces an ordered list of keyframes handed to the tween
//! engine in a single call: a zoom-to-frame phase, plus two pan phases when
//! the frame is elongated enough to sweep across.

use crate::geometry::{CanvasSize, FrameRect, Viewport};
use crate::layout::{FitConfig, Placement};
use crate::panning::{pan_end_frame, pan_start_frame, PanConfig};

/// Timing configuration for activation sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// Time allotted to the initial zoom-to-frame phase, and to the first
    /// pan phase, in milliseconds
    pub focus_duration_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            focus_duration_ms: 750,
        }
    }
}

/// A cubic bezier easing curve with implicit endpoints (0,0) and (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// The fixed asymmetric ease applied to every activation sequence:
/// a gentle start with a longer settle, the CSS `ease` curve.
pub const PAGE_EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

impl CubicBezier {
    /// Create an easing curve from its two control points.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn axis(t: f64, c1: f64, c2: f64) -> f64 {
        // De Casteljau expansion for endpoints 0 and 1.
        let omt = 1.0 - t;
        3.0 * omt * omt * t * c1 + 3.0 * omt * t * t * c2 + t * t * t
    }

    /// Map linear progress (0..=1 on the time axis) to eased progress.
    ///
    /// Solves the time axis by bisection; engines with their own bezier
    /// solver can use the control points directly.
    pub fn ease(&self, progress: f64) -> f64 {
        let x = progress.clamp(0.0, 1.0);
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        let mut t = x;
        for _ in 0..32 {
            let cur = Self::axis(t, self.x1, self.x2);
            if (cur - x).abs() < 1e-7 {
                break;
            }
            if cur < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::axis(t, self.y1, self.y2)
    }
}

/// One phase of an activation animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Absolute image position and size to tween toward
    pub placement: Placement,
    /// Explicit opacity, set on the first phase to avoid a visible flash
    /// when switching page images
    pub opacity: Option<f64>,
    /// Phase duration in milliseconds
    pub duration_ms: u32,
}

/// Build the ordered keyframe sequence that activates a frame.
///
/// Phase 0 is always present: the full frame's placement over the focus
/// duration, with opacity pinned to 1. When the panning decision applies,
/// two more phases sweep a square-ish half-frame from the near end to the
/// far end of the frame. The final phase gets whatever time remains of the
/// requested duration after the two focus-length phases, clamped at zero.
pub fn build_activation_sequence(
    canvas: &CanvasSize,
    frame: &FrameRect,
    viewport: &Viewport,
    duration_ms: u32,
    fit: &FitConfig,
    pan: &PanConfig,
    timing: &TimingConfig,
) -> Vec<Keyframe> {
    let focus = timing.focus_duration_ms;
    let mut keyframes = vec![Keyframe {
        placement: fit.place(canvas, frame, viewport),
        opacity: Some(1.0),
        duration_ms: focus,
    }];

    if let Some(axis) = pan.decide(frame, viewport) {
        let start = pan_start_frame(frame, axis);
        let end = pan_end_frame(frame, axis, fit.padding);

        keyframes.push(Keyframe {
            placement: fit.place(canvas, &start, viewport),
            opacity: None,
            duration_ms: focus,
        });
        keyframes.push(Keyframe {
            placement: fit.place(canvas, &end, viewport),
            opacity: None,
            duration_ms: duration_ms.saturating_sub(2 * focus),
        });
    }

    keyframes
}

/// Total duration of a keyframe sequence in milliseconds.
pub fn total_duration_ms(keyframes: &[Keyframe]) -> u32 {
    keyframes.iter().map(|k| k.duration_ms).sum()
}
