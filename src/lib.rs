//! # comic-page-view
//!
//! Core zoom-and-pan animation library for digital comic viewers.
//!
//! Given a full comic page image (the canvas) and a set of rectangular
//! sub-regions ("frames") keyed by identifier, this crate provides
//! platform-agnostic logic for:
//! - Resolving frame geometry from a typed page manifest
//! - Computing viewport-relative position and scale for a requested frame
//! - Deciding whether an elongated frame needs a directional panning sweep
//! - Building the keyframe sequence and driving an external tweening engine
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Parse page manifests from TOML text
//! - `web` - Enable web/WASM DOM bindings (placements, active marker)
//!
//! ## Example
//!
//! ```rust,ignore
//! use comic_page_view::{PageAnimator, PageManifest, Viewport};
//!
//! // Parse the page manifest describing the canvas and its frames
//! let manifest = PageManifest::from_toml_str(&text)?;
//!
//! // Wrap the page image in an animator bound to a tween engine
//! let mut animator = PageAnimator::new(manifest, Viewport::new(800.0, 600.0), engine);
//!
//! // The reader-controls collaborator activates frames as narration advances
//! animator.activate_frame("panel-3", 4000);
//! ```

mod animator;
mod geometry;
mod keyframes;
mod layout;
mod manifest;
mod panning;
mod registry;

pub use animator::{AnimationState, AnimatorSlot, InstallError, PageAnimator, TweenEngine};
pub use geometry::{parse_dimension, CanvasSize, FramePosition, FrameRect, Point, Viewport};
pub use keyframes::{
    build_activation_sequence, total_duration_ms, CubicBezier, Keyframe, TimingConfig, PAGE_EASE,
};
pub use layout::{FitConfig, Placement};
pub use manifest::{CanvasDecl, FrameDecl, PageManifest};
pub use panning::{pan_end_frame, pan_start_frame, PanAxis, PanConfig};
pub use registry::{normalize_key, FrameRegistry, WHOLE_PAGE_KEY};

#[cfg(feature = "web")]
pub use animator::web::{apply_placement, mark_active_frame, ACTIVE_CLASS};
