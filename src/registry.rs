//! Frame lookup registry keyed by normalized identifier.

use std::collections::HashMap;

use crate::geometry::{CanvasSize, FrameRect};
use crate::manifest::PageManifest;

/// Well-known key of the synthesized whole-page frame.
pub const WHOLE_PAGE_KEY: &str = "page";

/// Normalize a frame id for lookup: lowercased, leading `#` stripped.
pub fn normalize_key(id: &str) -> String {
    id.trim().trim_start_matches('#').to_lowercase()
}

/// Mapping from normalized frame key to its rectangle.
///
/// Built once from a [`PageManifest`] and read-only thereafter. Every id is
/// registered both with and without a leading `#`, lowercased, so callers
/// can pass anchor-style references unchanged. The whole-page frame is
/// synthesized from the canvas size rather than read from the manifest.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRegistry {
    canvas: CanvasSize,
    frames: HashMap<String, FrameRect>,
}

impl FrameRegistry {
    /// Build the registry from a manifest.
    pub fn from_manifest(manifest: &PageManifest) -> Self {
        let canvas = manifest.canvas_size();
        let mut frames = HashMap::with_capacity(manifest.frames.len() * 2 + 2);

        insert_both(&mut frames, WHOLE_PAGE_KEY, FrameRect::whole_page(&canvas));

        for decl in &manifest.frames {
            let rect = decl.resolve();
            if rect.width < 0.0 || rect.height < 0.0 {
                log::warn!("frame '{}' has negative dimensions, skipping", decl.id);
                continue;
            }
            insert_both(&mut frames, &normalize_key(&decl.id), rect);
        }

        Self { canvas, frames }
    }

    /// Look up a frame by id (case-insensitive, `#` prefix allowed).
    pub fn get(&self, id: &str) -> Option<&FrameRect> {
        self.frames.get(&id.trim().to_lowercase())
    }

    /// The canvas size the registry was built against.
    #[inline]
    pub fn canvas(&self) -> &CanvasSize {
        &self.canvas
    }

    /// Number of distinct frames, counting each id once.
    pub fn len(&self) -> usize {
        self.frames.len() / 2
    }

    /// Returns `true` when only the synthesized whole-page frame exists.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

fn insert_both(frames: &mut HashMap<String, FrameRect>, key: &str, rect: FrameRect) {
    frames.insert(key.to_string(), rect);
    frames.insert(format!("#{key}"), rect);
}
