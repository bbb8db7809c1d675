//! Typed page manifest describing the canvas and its frame rectangles.
//!
//! Replaces markup-embedded geometry scraping: the host supplies an explicit
//! manifest, and this module applies the same lenient parsing contract the
//! scraper had — every dimension value is a declared string like `"640px"`,
//! missing or malformed values warn and default to 0, extraction never
//! aborts.

use crate::geometry::{parse_dimension, CanvasSize, FrameRect};

/// Declared canvas dimensions for the full page image.
///
/// All fields are optional; `cached_size` holds a previously serialized
/// JSON blob (see [`CanvasSize::to_cache_string`]) that, when present and
/// valid, takes precedence over the declared width/height strings.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasDecl {
    pub width: Option<String>,
    pub height: Option<String>,
    pub cached_size: Option<String>,
}

/// One declared frame rectangle, identified by `id`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameDecl {
    pub id: String,
    pub left: Option<String>,
    pub top: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl FrameDecl {
    /// Resolve the declared strings into a pixel rectangle.
    ///
    /// Missing fields default to 0 with a warning, so a frame declaration
    /// never fails to resolve.
    pub fn resolve(&self) -> FrameRect {
        FrameRect {
            left: parse_dimension(&format!("{}.left", self.id), self.left.as_deref()),
            top: parse_dimension(&format!("{}.top", self.id), self.top.as_deref()),
            width: parse_dimension(&format!("{}.width", self.id), self.width.as_deref()),
            height: parse_dimension(&format!("{}.height", self.id), self.height.as_deref()),
        }
    }
}

/// The full page manifest: canvas dimensions plus named frames.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageManifest {
    #[cfg_attr(feature = "serde", serde(default))]
    pub canvas: CanvasDecl,
    #[cfg_attr(feature = "serde", serde(default))]
    pub frames: Vec<FrameDecl>,
}

impl PageManifest {
    /// Parse a manifest from its TOML text form.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Resolve the canvas size from the cached blob or the declared values.
    ///
    /// A valid cached JSON blob short-circuits re-parsing of the declared
    /// strings; an invalid blob warns and falls through to them.
    pub fn canvas_size(&self) -> CanvasSize {
        #[cfg(feature = "serde")]
        if let Some(blob) = self.canvas.cached_size.as_deref() {
            match CanvasSize::from_cache_string(blob) {
                Ok(size) => return size,
                Err(err) => {
                    log::warn!("invalid cached canvas size, re-reading declared values: {err}");
                }
            }
        }

        CanvasSize {
            width: parse_dimension("canvas.width", self.canvas.width.as_deref()),
            height: parse_dimension("canvas.height", self.canvas.height.as_deref()),
        }
    }
}
