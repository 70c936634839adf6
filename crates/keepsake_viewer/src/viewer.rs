//! The viewer itself: open/close state, navigation, gesture routing.

use keepsake_shared::{Key, PointerEvent, PointerPhase};
use serde::Deserialize;

use crate::gesture::{DragTracker, GestureOutcome, GestureTuning};
use crate::slide::{Slide, SlideDeck};
use crate::snapback::SnapBack;

/// Capability flags collapsing the page variants into one component.
///
/// A single-slide card disables multi-slide navigation (no swipe, no arrow
/// keys); a variant without keyboard glue disables keys entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Swipe-to-navigate and arrow-key navigation are available.
    pub multi_slide: bool,
    /// Keyboard control is available.
    pub keyboard: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            multi_slide: true,
            keyboard: true,
        }
    }
}

/// Viewer visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    /// Not visible; no active slide. The initial state.
    Closed,
    /// Visible, showing the current slide.
    Open,
}

/// The gesture-driven image viewer.
///
/// One instance per page session, owning the deck, the current index and
/// all gesture state. While closed, [`Self::active_slide`] is `None` so
/// the host drops its image source and stops decoding off-screen media.
#[derive(Debug)]
pub struct Viewer {
    deck: SlideDeck,
    options: ViewerOptions,
    tuning: GestureTuning,
    state: ViewerState,
    current: Option<usize>,
    scroll_offset: f32,
    tracker: DragTracker,
    snapback: Option<SnapBack>,
}

impl Viewer {
    /// Creates a closed viewer over the given deck.
    #[must_use]
    pub fn new(deck: SlideDeck, options: ViewerOptions, tuning: GestureTuning) -> Self {
        Self {
            deck,
            options,
            tuning,
            state: ViewerState::Closed,
            current: None,
            scroll_offset: 0.0,
            tracker: DragTracker::default(),
            snapback: None,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ViewerState {
        self.state
    }

    /// True while Open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == ViewerState::Open
    }

    /// Index of the current slide, `None` while Closed.
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The slide being shown, `None` while Closed (image source released).
    #[must_use]
    pub fn active_slide(&self) -> Option<&Slide> {
        match self.state {
            ViewerState::Open => self.current.and_then(|i| self.deck.get(i)),
            ViewerState::Closed => None,
        }
    }

    /// The deck this viewer navigates.
    #[must_use]
    pub const fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// Current damped pull offset driving the host's close-gesture visual:
    /// the live drag while one is in flight, otherwise the snap-back.
    #[must_use]
    pub fn pull(&self) -> f32 {
        if self.tracker.is_active() {
            self.tracker.pull()
        } else {
            self.snapback.as_ref().map_or(0.0, SnapBack::value)
        }
    }

    /// Opens at `index`, wrapping modulo the deck length.
    ///
    /// No-op on an empty deck. Resets the pull and the content scroll.
    pub fn open_at(&mut self, index: usize) {
        let Some(index) = self.deck.wrap(index) else {
            return;
        };
        self.current = Some(index);
        self.state = ViewerState::Open;
        self.scroll_offset = 0.0;
        self.tracker = DragTracker::default();
        self.snapback = None;
    }

    /// Opens at the slide with the given source string, if the deck has
    /// one. Unknown sources are a no-op.
    pub fn open_by_source(&mut self, source: &str) {
        if let Some(index) = self.deck.position_of_source(source) {
            self.open_at(index);
        }
    }

    /// Closes the viewer, releasing the active slide and resetting the
    /// pull. No-op while already Closed.
    pub fn close(&mut self) {
        self.state = ViewerState::Closed;
        self.current = None;
        self.tracker = DragTracker::default();
        self.snapback = None;
    }

    /// Advances to the next slide, wrapping to the first from the last.
    /// No-op while Closed.
    pub fn next(&mut self) {
        if let (ViewerState::Open, Some(i)) = (self.state, self.current) {
            self.current = self.deck.wrap(i + 1);
        }
    }

    /// Goes to the previous slide, wrapping to the last from the first.
    /// No-op while Closed.
    pub fn previous(&mut self) {
        if let (ViewerState::Open, Some(i)) = (self.state, self.current) {
            self.current = self.deck.wrap(i + self.deck.len() - 1);
        }
    }

    /// Host-reported content scroll offset. A drag gesture only arms while
    /// the content is at its top edge; otherwise the content scrolls
    /// normally.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    /// Feeds one pointer event. No-op while Closed.
    pub fn pointer(&mut self, event: PointerEvent) {
        if !self.is_open() {
            return;
        }

        let allow_horizontal = self.options.multi_slide && self.deck.len() > 1;
        match event.phase {
            PointerPhase::Down => {
                if self.scroll_offset <= 0.0 {
                    self.snapback = None;
                    self.tracker.begin(event.position);
                }
            }
            PointerPhase::Move => {
                self.tracker
                    .update(event.position, &self.tuning, allow_horizontal);
            }
            PointerPhase::Up => {
                match self.tracker.finish(&self.tuning, allow_horizontal) {
                    GestureOutcome::Close => self.close(),
                    GestureOutcome::Next => self.next(),
                    GestureOutcome::Previous => self.previous(),
                    GestureOutcome::SnapBack { from } => {
                        self.snapback = Some(SnapBack::new(from, self.tuning.snap_duration));
                    }
                    GestureOutcome::None => {}
                }
            }
            PointerPhase::Cancel => {
                if let GestureOutcome::SnapBack { from } = self.tracker.cancel() {
                    self.snapback = Some(SnapBack::new(from, self.tuning.snap_duration));
                }
            }
        }
    }

    /// Feeds one key press. No-op while Closed or without the keyboard
    /// capability; arrows additionally require multi-slide navigation.
    pub fn key(&mut self, key: Key) {
        if !self.is_open() || !self.options.keyboard {
            return;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowRight if self.options.multi_slide => self.next(),
            Key::ArrowLeft if self.options.multi_slide => self.previous(),
            Key::ArrowRight | Key::ArrowLeft => {}
        }
    }

    /// Advances the snap-back animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if let Some(snap) = &mut self.snapback {
            snap.advance(dt);
            if snap.is_complete() {
                self.snapback = None;
            }
        }
    }
}
