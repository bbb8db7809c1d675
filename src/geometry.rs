//! Geometry primitives for the comic page canvas and its frames.

/// Pixel dimensions of the full comic page image.
///
/// Immutable once extracted from the manifest. With the `serde` feature
/// enabled, a canvas size can be serialized to a compact JSON cache string
/// and read back without re-parsing the declared dimension values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasSize {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
}

impl CanvasSize {
    /// Create a new canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` when either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Serialize to the JSON cache blob format.
    #[cfg(feature = "serde")]
    pub fn to_cache_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a previously cached JSON blob back into a canvas size.
    ///
    /// Round-trips exactly with [`CanvasSize::to_cache_string`].
    #[cfg(feature = "serde")]
    pub fn from_cache_string(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// A point in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Pixel dimensions of the viewport/container the page is rendered into.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Container width in pixels
    pub width: f64,
    /// Container height in pixels
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rectangular sub-region of the comic page, in canvas pixel space.
///
/// Frames are identified by string key in the [`FrameRegistry`]; the
/// rectangle itself carries no identity.
///
/// [`FrameRegistry`]: crate::FrameRegistry
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameRect {
    /// Left edge in pixels from the canvas origin
    pub left: f64,
    /// Top edge in pixels from the canvas origin
    pub top: f64,
    /// Frame width in pixels
    pub width: f64,
    /// Frame height in pixels
    pub height: f64,
}

impl FrameRect {
    /// Create a new frame rectangle.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// The synthesized whole-page frame covering the entire canvas.
    pub fn whole_page(canvas: &CanvasSize) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: canvas.width,
            height: canvas.height,
        }
    }

    /// Derive the ephemeral [`FramePosition`] used during keyframe math.
    pub fn position(&self) -> FramePosition {
        FramePosition {
            width: self.width,
            height: self.height,
            top_left: Point {
                x: self.left,
                y: self.top,
            },
            bottom_right: Point {
                x: self.left + self.width,
                y: self.top + self.height,
            },
        }
    }
}

/// Corner-resolved form of a [`FrameRect`].
///
/// Derived on demand during animation-keyframe math, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePosition {
    pub width: f64,
    pub height: f64,
    pub top_left: Point,
    pub bottom_right: Point,
}

/// Parse a declared dimension value like `"640px"` or `"640"`.
///
/// Strips a trailing unit suffix and parses the integer part. A missing or
/// unparsable value is reported as a non-fatal warning and defaults to 0 —
/// extraction never aborts over a single bad field.
///
/// ## Example
///
/// ```rust
/// use comic_page_view::parse_dimension;
///
/// assert_eq!(parse_dimension("width", Some("640px")), 640.0);
/// assert_eq!(parse_dimension("width", Some("480")), 480.0);
/// assert_eq!(parse_dimension("width", None), 0.0);
/// ```
pub fn parse_dimension(field: &str, value: Option<&str>) -> f64 {
    let Some(raw) = value else {
        log::warn!("missing dimension '{field}', defaulting to 0");
        return 0.0;
    };

    let trimmed = raw.trim().trim_end_matches(|c: char| c.is_ascii_alphabetic());
    match trimmed.trim().parse::<i64>() {
        Ok(n) => n as f64,
        Err(_) => {
            log::warn!("unparsable dimension '{field}' (got {raw:?}), defaulting to 0");
            0.0
        }
    }
}
