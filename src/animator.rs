//! Page animator: the activation entry point and animation lifecycle.
//!
//! [`PageAnimator`] owns the frame registry, the current viewport size and
//! the mutable animation state. It drives an external tweening engine
//! through the [`TweenEngine`] seam: build the keyframe sequence, cancel
//! whatever tween is still in flight on the image, hand over the new
//! sequence with the fixed easing curve.

use crate::geometry::{FrameRect, Viewport};
use crate::keyframes::{build_activation_sequence, CubicBezier, Keyframe, TimingConfig, PAGE_EASE};
use crate::layout::FitConfig;
use crate::manifest::PageManifest;
use crate::panning::PanConfig;
use crate::registry::FrameRegistry;

/// Capability the external tweening engine must provide.
///
/// An implementation is bound to one target visual element (the page
/// image). The animator guarantees `cancel` is called before every
/// `animate`, so at most one animation runs on the target at any time.
/// No `Send` bounds — works in both native and WASM (single-threaded)
/// contexts.
pub trait TweenEngine {
    /// Remove any in-flight animation on the target.
    fn cancel(&mut self);

    /// Animate the target through the ordered keyframes with the easing.
    fn animate(&mut self, keyframes: &[Keyframe], easing: &CubicBezier);
}

/// The animation currently requested on the page.
///
/// Replaced wholesale on each activation; kept so a viewport resize can
/// re-run the same logical target against the new geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    /// Normalized key of the active frame
    pub key: String,
    /// The frame rectangle resolved at activation time
    pub frame: FrameRect,
    /// Requested total duration in milliseconds
    pub duration_ms: u32,
}

/// Animator for one comic page image.
///
/// ## Example
///
/// ```rust
/// use comic_page_view::{PageAnimator, PageManifest, TweenEngine, Viewport};
/// # use comic_page_view::{CubicBezier, Keyframe};
///
/// struct NullEngine;
/// impl TweenEngine for NullEngine {
///     fn cancel(&mut self) {}
///     fn animate(&mut self, _: &[Keyframe], _: &CubicBezier) {}
/// }
///
/// let manifest = PageManifest::default();
/// let mut animator = PageAnimator::new(manifest, Viewport::new(800.0, 600.0), NullEngine);
///
/// // Unknown ids are a silent no-op.
/// animator.activate_frame("missing", 3000);
/// assert!(animator.state().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct PageAnimator<E> {
    manifest: PageManifest,
    registry: Option<FrameRegistry>,
    viewport: Viewport,
    fit: FitConfig,
    pan: PanConfig,
    timing: TimingConfig,
    easing: CubicBezier,
    engine: E,
    state: Option<AnimationState>,
}

impl<E: TweenEngine> PageAnimator<E> {
    /// Create an animator over a manifest with default fit, pan and timing
    /// configuration.
    pub fn new(manifest: PageManifest, viewport: Viewport, engine: E) -> Self {
        Self {
            manifest,
            registry: None,
            viewport,
            fit: FitConfig::default(),
            pan: PanConfig::default(),
            timing: TimingConfig::default(),
            easing: PAGE_EASE,
            engine,
            state: None,
        }
    }

    /// Override the fit configuration.
    pub fn with_fit(mut self, fit: FitConfig) -> Self {
        self.fit = fit;
        self
    }

    /// Override the panning configuration.
    pub fn with_pan(mut self, pan: PanConfig) -> Self {
        self.pan = pan;
        self
    }

    /// Override the timing configuration.
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// The frame registry, built lazily on first use and cached for the
    /// animator's lifetime. Repeated calls return the cached registry
    /// without re-reading the manifest.
    pub fn registry(&mut self) -> &FrameRegistry {
        self.registry
            .get_or_insert_with(|| FrameRegistry::from_manifest(&self.manifest))
    }

    /// The current viewport size.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The animation state of the last successful activation, if any.
    #[inline]
    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    /// Normalized key of the active frame, if any. The `web` feature maps
    /// this marker onto an `active` CSS class on the matching element.
    pub fn active_frame(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.key.as_str())
    }

    /// Access the tween engine.
    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Activate a frame by id and animate toward it.
    ///
    /// The id is normalized (case-insensitive, `#` prefix allowed). An
    /// unrecognized id is a silent no-op: state is unchanged and the engine
    /// is not called. A recognized id replaces the animation state, cancels
    /// any in-flight tween and starts the new sequence.
    pub fn activate_frame(&mut self, id: &str, duration_ms: u32) {
        let Some(frame) = self.registry().get(id).copied() else {
            log::debug!("frame id '{id}' not recognized, ignoring");
            return;
        };

        let key = crate::registry::normalize_key(id);
        log::debug!("activating frame '{key}' over {duration_ms}ms");
        self.state = Some(AnimationState {
            key,
            frame,
            duration_ms,
        });
        self.run(&frame, duration_ms);
    }

    /// React to a viewport resize.
    ///
    /// When a frame is active, rebuilds its keyframes against the new
    /// viewport with the same frame and duration — no registry lookup.
    pub fn handle_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(state) = self.state.clone() {
            self.run(&state.frame, state.duration_ms);
        }
    }

    fn run(&mut self, frame: &FrameRect, duration_ms: u32) {
        let canvas = *self.registry().canvas();
        let keyframes = build_activation_sequence(
            &canvas,
            frame,
            &self.viewport,
            duration_ms,
            &self.fit,
            &self.pan,
            &self.timing,
        );
        self.engine.cancel();
        self.engine.animate(&keyframes, &self.easing);
    }
}

/// Error installing the process-wide animator instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallError {
    /// An animator has already been installed in this slot
    AlreadyInstalled,
}

impl std::fmt::Display for InstallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstallError::AlreadyInstalled => {
                write!(f, "page animator already installed")
            }
        }
    }
}

impl std::error::Error for InstallError {}

/// Process-wide slot holding the single long-lived [`PageAnimator`].
///
/// Hosts declare one `static` slot and install the animator into it once
/// during bootstrap; the reader-controls collaborator then activates frames
/// through [`set_active_frame`](Self::set_active_frame). Installation is
/// guarded by an explicit already-installed check, never replaced silently.
#[derive(Debug)]
pub struct AnimatorSlot<E> {
    inner: std::sync::OnceLock<std::sync::Mutex<PageAnimator<E>>>,
}

impl<E> AnimatorSlot<E> {
    /// Create an empty slot, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            inner: std::sync::OnceLock::new(),
        }
    }

    /// Returns `true` when an animator has been installed.
    pub fn is_installed(&self) -> bool {
        self.inner.get().is_some()
    }
}

impl<E> Default for AnimatorSlot<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TweenEngine> AnimatorSlot<E> {
    /// Install the animator. Fails if the slot is already occupied.
    pub fn install(&self, animator: PageAnimator<E>) -> Result<(), InstallError> {
        self.inner
            .set(std::sync::Mutex::new(animator))
            .map_err(|_| InstallError::AlreadyInstalled)
    }

    /// Run a closure against the installed animator.
    ///
    /// Returns `None` when nothing is installed (or the lock is poisoned).
    pub fn with<R>(&self, f: impl FnOnce(&mut PageAnimator<E>) -> R) -> Option<R> {
        let mutex = self.inner.get()?;
        let mut animator = mutex.lock().ok()?;
        Some(f(&mut animator))
    }

    /// The global activation hook: activate a frame on the installed
    /// animator. Returns `false` when no animator is installed; an unknown
    /// frame id is still a silent no-op per [`PageAnimator::activate_frame`].
    pub fn set_active_frame(&self, id: &str, duration_ms: u32) -> bool {
        self.with(|animator| animator.activate_frame(id, duration_ms))
            .is_some()
    }
}

/// Web bindings: apply placements and the active-frame marker to the DOM.
#[cfg(feature = "web")]
pub mod web {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    use crate::layout::Placement;

    /// CSS class marking the active frame element.
    pub const ACTIVE_CLASS: &str = "active";

    /// Apply a placement to an element's absolute position styles.
    pub fn apply_placement(element: &HtmlElement, placement: &Placement) -> Result<(), String> {
        let style = element.style();
        for (prop, value) in [
            ("left", placement.left),
            ("top", placement.top),
            ("width", placement.width),
            ("height", placement.height),
        ] {
            style
                .set_property(prop, &format!("{value:.2}px"))
                .map_err(|_| format!("Failed to set {prop}"))?;
        }
        Ok(())
    }

    /// Move the active marker class to the element with the given id.
    ///
    /// Clears the marker from any previously active element first. A
    /// missing target element only clears the marker.
    pub fn mark_active_frame(document: &Document, id: &str) -> Result<(), String> {
        // The collection is live; snapshot it before removing the class.
        let previous = document.get_elements_by_class_name(ACTIVE_CLASS);
        let snapshot: Vec<_> = (0..previous.length()).filter_map(|i| previous.item(i)).collect();
        for element in snapshot {
            element.class_list().remove_1(ACTIVE_CLASS).ok();
        }

        if let Some(element) = document.get_element_by_id(id.trim_start_matches('#')) {
            let element: HtmlElement = element
                .dyn_into()
                .map_err(|_| "Failed to cast element to HtmlElement")?;
            element
                .class_list()
                .add_1(ACTIVE_CLASS)
                .map_err(|_| "Failed to add active class")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CanvasSize;
    use crate::manifest::{CanvasDecl, FrameDecl};
    use crate::registry::WHOLE_PAGE_KEY;

    #[derive(Clone, Debug, Default)]
    struct RecordingEngine {
        cancels: usize,
        runs: Vec<Vec<Keyframe>>,
    }

    impl TweenEngine for RecordingEngine {
        fn cancel(&mut self) {
            self.cancels += 1;
        }

        fn animate(&mut self, keyframes: &[Keyframe], _easing: &CubicBezier) {
            self.runs.push(keyframes.to_vec());
        }
    }

    fn manifest() -> PageManifest {
        PageManifest {
            canvas: CanvasDecl {
                width: Some("1000px".into()),
                height: Some("2000px".into()),
                cached_size: None,
            },
            frames: vec![
                FrameDecl {
                    id: "Panel-1".into(),
                    left: Some("0px".into()),
                    top: Some("0px".into()),
                    width: Some("500px".into()),
                    height: Some("1750px".into()),
                },
                FrameDecl {
                    id: "panel-2".into(),
                    left: Some("500px".into()),
                    top: Some("0px".into()),
                    width: Some("480px".into()),
                    height: Some("480px".into()),
                },
            ],
        }
    }

    fn animator() -> PageAnimator<RecordingEngine> {
        PageAnimator::new(
            manifest(),
            Viewport::new(500.0, 500.0),
            RecordingEngine::default(),
        )
    }

    #[test]
    fn test_activate_known_frame() {
        let mut animator = animator();
        animator.activate_frame("#Panel-1", 4000);

        let state = animator.state().expect("state set");
        assert_eq!(state.key, "panel-1");
        assert_eq!(state.duration_ms, 4000);
        assert_eq!(state.frame, FrameRect::new(0.0, 0.0, 500.0, 1750.0));
        assert_eq!(animator.active_frame(), Some("panel-1"));

        // Tall frame: cancel once, one animate call with 3 pan keyframes.
        assert_eq!(animator.engine().cancels, 1);
        assert_eq!(animator.engine().runs.len(), 1);
        assert_eq!(animator.engine().runs[0].len(), 3);
    }

    #[test]
    fn test_unknown_id_is_silent_noop() {
        let mut animator = animator();
        animator.activate_frame("panel-1", 4000);
        animator.activate_frame("nonexistent", 9999);

        let state = animator.state().expect("state kept");
        assert_eq!(state.key, "panel-1");
        assert_eq!(state.duration_ms, 4000);
        assert_eq!(animator.engine().runs.len(), 1);
        assert_eq!(animator.engine().cancels, 1);
    }

    #[test]
    fn test_whole_page_frame_activates() {
        let mut animator = animator();
        animator.activate_frame(WHOLE_PAGE_KEY, 2000);

        let state = animator.state().expect("state set");
        assert_eq!(state.frame, FrameRect::new(0.0, 0.0, 1000.0, 2000.0));
        // 2000/1000 = 2 >= 1.75 and 2000 > 875, so even the whole page
        // pans vertically in this viewport.
        assert_eq!(animator.engine().runs[0].len(), 3);
    }

    #[test]
    fn test_activation_supersedes_previous() {
        let mut animator = animator();
        animator.activate_frame("panel-1", 4000);
        animator.activate_frame("panel-2", 3000);

        assert_eq!(animator.active_frame(), Some("panel-2"));
        // Each activation cancels before animating: last call wins.
        assert_eq!(animator.engine().cancels, 2);
        assert_eq!(animator.engine().runs.len(), 2);
        assert_eq!(animator.engine().runs[1].len(), 1);
    }

    #[test]
    fn test_resize_reruns_current_frame() {
        let mut animator = animator();
        animator.activate_frame("panel-2", 3000);
        animator.handle_resize(Viewport::new(800.0, 300.0));

        let state = animator.state().expect("state kept");
        assert_eq!(state.key, "panel-2");
        assert_eq!(state.duration_ms, 3000);
        assert_eq!(animator.viewport(), Viewport::new(800.0, 300.0));

        // Same frame, new geometry.
        assert_eq!(animator.engine().runs.len(), 2);
        assert_ne!(
            animator.engine().runs[0][0].placement,
            animator.engine().runs[1][0].placement
        );
    }

    #[test]
    fn test_resize_without_active_frame_is_idle() {
        let mut animator = animator();
        animator.handle_resize(Viewport::new(800.0, 600.0));
        assert_eq!(animator.engine().runs.len(), 0);
        assert_eq!(animator.engine().cancels, 0);
    }

    #[test]
    fn test_registry_is_built_once() {
        let mut animator = animator();
        let first = animator.registry() as *const FrameRegistry;
        let second = animator.registry() as *const FrameRegistry;
        assert_eq!(first, second);
        assert_eq!(animator.registry().canvas(), &CanvasSize::new(1000.0, 2000.0));
    }

    #[test]
    fn test_slot_install_once() {
        let slot: AnimatorSlot<RecordingEngine> = AnimatorSlot::new();
        assert!(!slot.is_installed());
        assert!(!slot.set_active_frame("panel-1", 1000));

        slot.install(animator()).expect("first install succeeds");
        assert!(slot.is_installed());
        assert_eq!(
            slot.install(animator()),
            Err(InstallError::AlreadyInstalled)
        );

        assert!(slot.set_active_frame("panel-1", 4000));
        let runs = slot.with(|a| a.engine().runs.len());
        assert_eq!(runs, Some(1));
    }
}
