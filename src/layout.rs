//! Frame position and scale computation.
//!
//! Pure math: given a frame rectangle, the canvas it lives in, and the
//! current viewport, compute the absolute position and rendered size to
//! apply to the page image so the frame fills the viewport appropriately.

use crate::geometry::{CanvasSize, FrameRect, Viewport};

/// Fit configuration for zooming a frame into the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitConfig {
    /// Ceiling on upscaling, so tiny frames are not blown up absurdly
    pub max_zoom: f64,
    /// Inset kept clear around the focused frame, in pixels
    pub padding: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            max_zoom: 3.0,
            padding: 10.0,
        }
    }
}

/// Absolute position and rendered size for the page image, in viewport
/// pixels. Directly applicable as the image's `left`/`top`/`width`/`height`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl FitConfig {
    /// Scale factor that fits the frame into the padded viewport.
    ///
    /// `min(max_zoom, (vw − 2·padding)/fw, (vh − 2·padding)/fh)`.
    pub fn scale_for(&self, frame: &FrameRect, viewport: &Viewport) -> f64 {
        let scale_w = (viewport.width - 2.0 * self.padding) / frame.width;
        let scale_h = (viewport.height - 2.0 * self.padding) / frame.height;
        self.max_zoom.min(scale_w).min(scale_h)
    }

    /// Compute the image placement that focuses the given frame.
    ///
    /// The full image is scaled by [`scale_for`](Self::scale_for), translated
    /// so the frame origin lands on the viewport origin, then centered per
    /// axis when the scaled frame is smaller than the available dimension on
    /// that axis. Deterministic and side-effect-free aside from debug
    /// logging.
    pub fn place(&self, canvas: &CanvasSize, frame: &FrameRect, viewport: &Viewport) -> Placement {
        let pos = frame.position();
        let scale = self.scale_for(frame, viewport);

        let scaled_frame_w = pos.width * scale;
        let scaled_frame_h = pos.height * scale;
        let avail_w = viewport.width - 2.0 * self.padding;
        let avail_h = viewport.height - 2.0 * self.padding;

        let center_x = if scaled_frame_w < avail_w {
            (avail_w - scaled_frame_w) / 2.0
        } else {
            0.0
        };
        let center_y = if scaled_frame_h < avail_h {
            (avail_h - scaled_frame_h) / 2.0
        } else {
            0.0
        };

        let placement = Placement {
            left: -pos.top_left.x * scale + center_x,
            top: -pos.top_left.y * scale + center_y,
            width: canvas.width * scale,
            height: canvas.height * scale,
        };
        log::debug!("placed frame {frame:?} at scale {scale}: {placement:?}");
        placement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_scale_never_exceeds_max_zoom() {
        let fit = FitConfig::default();
        let viewport = Viewport::new(500.0, 500.0);

        // A tiny frame would fit at 48x, but the ceiling wins.
        let tiny = FrameRect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(fit.scale_for(&tiny, &viewport), 3.0);

        let canvas = CanvasSize::new(1000.0, 1000.0);
        let placement = fit.place(&canvas, &tiny, &viewport);
        assert_eq!(placement.width, 3000.0);
        assert_eq!(placement.height, 3000.0);
    }

    #[test]
    fn test_exact_fit_has_zero_centering() {
        let fit = FitConfig::default();
        let viewport = Viewport::new(500.0, 500.0);
        let canvas = CanvasSize::new(1000.0, 1000.0);

        // 480x480 frame matches the 500x500 viewport minus 2x10 padding, so
        // scale is exactly 1 and both centering offsets are 0.
        let frame = FrameRect::new(100.0, 100.0, 480.0, 480.0);
        assert!((fit.scale_for(&frame, &viewport) - 1.0).abs() < EPS);

        let placement = fit.place(&canvas, &frame, &viewport);
        assert!((placement.left - -100.0).abs() < EPS);
        assert!((placement.top - -100.0).abs() < EPS);
    }

    #[test]
    fn test_centering_on_narrow_axis_only() {
        let fit = FitConfig::default();
        let viewport = Viewport::new(500.0, 500.0);
        let canvas = CanvasSize::new(1000.0, 1000.0);

        // Height is the constraint (scale 1); width has 240px of slack.
        let frame = FrameRect::new(0.0, 0.0, 240.0, 480.0);
        let placement = fit.place(&canvas, &frame, &viewport);
        assert!((placement.left - 120.0).abs() < EPS);
        assert!((placement.top - 0.0).abs() < EPS);
    }

    #[test]
    fn test_translation_aligns_frame_origin() {
        let fit = FitConfig::default();
        let viewport = Viewport::new(500.0, 500.0);
        let canvas = CanvasSize::new(1000.0, 2000.0);

        // Tall frame: scale = 480/1750, frame overflows vertically so no
        // centering on either axis applies to top.
        let frame = FrameRect::new(200.0, 100.0, 500.0, 1750.0);
        let scale = fit.scale_for(&frame, &viewport);
        let placement = fit.place(&canvas, &frame, &viewport);

        assert!((scale - 480.0 / 1750.0).abs() < EPS);
        assert!((placement.top - -100.0 * scale).abs() < EPS);
        assert_eq!(placement.width, canvas.width * scale);
    }
}
