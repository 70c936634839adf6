//! One card session: a confetti engine and a viewer behind one narrow
//! interface.

use keepsake_confetti::{BurstKind, BurstSeed, ConfettiSystem, DrawCommand, SurfaceMetrics};
use keepsake_shared::{Key, PointerEvent, Viewport};
use keepsake_viewer::{SlideDeck, Viewer};

use crate::config::CardConfig;

/// Everything the page glue talks to, constructed once per page session.
///
/// The session owns explicit component instances instead of module-level
/// globals, so tests run isolated sessions side by side. All methods are
/// fire-and-forget UI commands; invalid ones are silent no-ops.
#[derive(Debug)]
pub struct CardSession {
    confetti: ConfettiSystem,
    viewer: Viewer,
    frame: u64,
}

impl CardSession {
    /// Creates a session from a validated config, the slide deck built
    /// once from the page's moment entries, and the confetti surface.
    #[must_use]
    pub fn new(config: &CardConfig, deck: SlideDeck, surface: SurfaceMetrics) -> Self {
        tracing::info!(
            "card session created: {} slides, surface {}x{}@{}",
            deck.len(),
            surface.physical_width(),
            surface.physical_height(),
            surface.scale_factor()
        );
        Self {
            confetti: ConfettiSystem::with_surface(BurstSeed::new(config.seed), surface),
            viewer: Viewer::new(deck, config.viewer, config.gesture),
            frame: 0,
        }
    }

    /// Spawns a confetti or sparkle burst (answer confirmed, secret
    /// revealed, slider at 100%...). Callers use counts from about 10 to
    /// 220.
    pub fn spawn_burst(&mut self, count: u32, kind: BurstKind) {
        tracing::debug!("burst: {} x {:?}", count, kind);
        self.confetti.spawn_burst(count, kind);
    }

    /// Opens the viewer at a slide index (wraps; no-op on an empty deck).
    pub fn open_at(&mut self, index: usize) {
        self.viewer.open_at(index);
        if let Some(i) = self.viewer.current_index() {
            tracing::info!("viewer opened at slide {}", i);
        }
    }

    /// Opens the viewer at the slide with the given source, if any.
    pub fn open_by_source(&mut self, source: &str) {
        self.viewer.open_by_source(source);
        if let Some(i) = self.viewer.current_index() {
            tracing::info!("viewer opened at slide {} (by source)", i);
        }
    }

    /// Closes the viewer.
    pub fn close(&mut self) {
        if self.viewer.is_open() {
            tracing::info!("viewer closed");
        }
        self.viewer.close();
    }

    /// Advances to the next slide (wraps; no-op while closed).
    pub fn next(&mut self) {
        self.viewer.next();
    }

    /// Goes to the previous slide (wraps; no-op while closed).
    pub fn previous(&mut self) {
        self.viewer.previous();
    }

    /// Feeds a pointer event to the viewer's gesture machine.
    pub fn pointer(&mut self, event: PointerEvent) {
        let was_open = self.viewer.is_open();
        self.viewer.pointer(event);
        if was_open && !self.viewer.is_open() {
            tracing::info!("viewer closed by drag gesture");
        }
    }

    /// Feeds a key press.
    pub fn key(&mut self, key: Key) {
        let was_open = self.viewer.is_open();
        self.viewer.key(key);
        if was_open && !self.viewer.is_open() {
            tracing::info!("viewer closed by keyboard");
        }
    }

    /// Host-reported scroll offset of the viewer content.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.viewer.set_scroll_offset(offset);
    }

    /// Tracks a viewport resize; particle positions are untouched.
    pub fn resize(&mut self, logical: Viewport, scale_factor: f32) {
        tracing::debug!(
            "surface resize: {}x{}@{}",
            logical.width,
            logical.height,
            scale_factor
        );
        self.confetti.resize(logical, scale_factor);
    }

    /// True while the host should keep requesting animation frames:
    /// confetti in flight or a snap-back still retreating.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.confetti.needs_frame() || self.viewer.pull() > 0.0
    }

    /// Runs one frame: advances the viewer's snap-back by `dt` seconds,
    /// ticks the confetti simulation, and returns the frame's draw
    /// commands for the host to replay.
    pub fn advance_frame(&mut self, dt: f32) -> &[DrawCommand] {
        self.frame += 1;
        self.viewer.update(dt);
        self.confetti.tick()
    }

    /// Frames advanced since creation.
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Read access to the viewer for host rendering.
    #[must_use]
    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Read access to the confetti engine for host rendering and stats.
    #[must_use]
    pub const fn confetti(&self) -> &ConfettiSystem {
        &self.confetti
    }
}
