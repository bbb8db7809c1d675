//! Panning decision and half-frame geometry.
//!
//! A frame that is far more elongated than the viewport gets a directional
//! sweep instead of a single cropped zoom: the view first focuses a
//! square-ish "half" of the frame at the near end, then travels to the far
//! end. This module decides whether panning applies and computes the two
//! sub-frames of that sweep.

use crate::geometry::{FrameRect, Viewport};

/// Direction of a two-phase pan across an elongated frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanAxis {
    /// Sweep top to bottom
    Vertical,
    /// Sweep left to right
    Horizontal,
}

/// Panning decision configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanConfig {
    /// Elongation threshold: a frame pans only when its long/short ratio
    /// reaches this factor AND its long dimension exceeds the matching
    /// viewport dimension times this factor
    pub panning_factor: f64,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            panning_factor: 1.75,
        }
    }
}

impl PanConfig {
    /// Decide whether the frame needs panning, and on which axis.
    ///
    /// Vertical is checked first; horizontal only when vertical does not
    /// apply, so at most one axis pans. The ratio comparison is inclusive
    /// (`>=`), the viewport comparison strict (`>`): a frame that would fit
    /// fine after scaling is never panned.
    pub fn decide(&self, frame: &FrameRect, viewport: &Viewport) -> Option<PanAxis> {
        let factor = self.panning_factor;
        if frame.height / frame.width >= factor && frame.height > viewport.height * factor {
            Some(PanAxis::Vertical)
        } else if frame.width / frame.height >= factor && frame.width > viewport.width * factor {
            Some(PanAxis::Horizontal)
        } else {
            None
        }
    }
}

/// The half-frame at the start of the pan: the pan dimension is reduced to
/// the cross dimension, anchored at the frame's near end (top or left).
pub fn pan_start_frame(frame: &FrameRect, axis: PanAxis) -> FrameRect {
    match axis {
        PanAxis::Vertical => FrameRect {
            height: frame.width,
            ..*frame
        },
        PanAxis::Horizontal => FrameRect {
            width: frame.height,
            ..*frame
        },
    }
}

/// The half-frame at the end of the pan: same shape as the start frame,
/// shifted to the far end by `frame_dim − other_dim + padding`.
pub fn pan_end_frame(frame: &FrameRect, axis: PanAxis, padding: f64) -> FrameRect {
    match axis {
        PanAxis::Vertical => FrameRect {
            top: frame.top + frame.height - frame.width + padding,
            height: frame.width,
            ..*frame
        },
        PanAxis::Horizontal => FrameRect {
            left: frame.left + frame.width - frame.height + padding,
            width: frame.height,
            ..*frame
        },
    }
}
